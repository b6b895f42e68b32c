use eframe::egui::{self, Align, Layout, Margin, RichText, ScrollArea, Ui};
use egui_plot::{Bar, BarChart, Legend, Plot};

use crate::color::{ACCENT, BANNER_BG, BANNER_TEXT};
use crate::content::{capitalize_first, category_content, format_category_title};
use crate::contribute::{CONTRIB_REPO, today};
use crate::state::{AppState, Section};
use crate::ui::{UiAction, cards, forms};

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu, title, and section navigation.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) -> Option<UiAction> {
    let mut action = None;

    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open data folder…").clicked() {
                if let Some(dir) = rfd::FileDialog::new()
                    .set_title("Open catalog data folder")
                    .pick_folder()
                {
                    action = Some(UiAction::OpenFolder(dir));
                }
                ui.close_menu();
            }
            if ui.button("Reload catalog").clicked() {
                action = Some(UiAction::Reload);
                ui.close_menu();
            }
        });

        ui.separator();

        ui.label(RichText::new("MCMC Atlas").strong().color(ACCENT));
        ui.label(RichText::new("Interactive Catalog of MCMC Algorithms in R").weak());

        ui.separator();

        for section in Section::ALL {
            if ui
                .selectable_label(state.section == section, section.title())
                .clicked()
            {
                state.section = section;
            }
        }

        if state.loading {
            ui.with_layout(Layout::right_to_left(Align::Center), |ui: &mut Ui| {
                ui.spinner();
                ui.label(RichText::new("Loading catalog…").weak());
            });
        }
    });

    action
}

// ---------------------------------------------------------------------------
// Error banner
// ---------------------------------------------------------------------------

/// Dismissible banner shown under the top bar after a failed load.
pub fn error_banner(ui: &mut Ui, state: &mut AppState) {
    let Some(message) = state.error_banner.clone() else {
        return;
    };

    egui::Frame::new()
        .fill(BANNER_BG)
        .inner_margin(Margin::same(8))
        .show(ui, |ui: &mut Ui| {
            ui.horizontal(|ui: &mut Ui| {
                ui.label(RichText::new(message).color(BANNER_TEXT));
                ui.with_layout(Layout::right_to_left(Align::Center), |ui: &mut Ui| {
                    if ui.small_button("Dismiss").clicked() {
                        state.error_banner = None;
                    }
                });
            });
        });
}

// ---------------------------------------------------------------------------
// Status bar
// ---------------------------------------------------------------------------

/// Render the bottom status line: data source and catalog counts.
pub fn status_bar(ui: &mut Ui, state: &AppState) {
    ui.horizontal(|ui: &mut Ui| {
        ui.label(RichText::new(format!("Source: {}", state.source.describe())).weak());
        ui.separator();
        match &state.catalog {
            Some(catalog) => {
                ui.label(format!(
                    "{} algorithms, {} packages",
                    catalog.algorithms.len(),
                    catalog.packages.len()
                ));
                if state.filters.is_active() {
                    ui.separator();
                    ui.label(format!("{} matching", state.visible_indices.len()));
                }
            }
            None if state.loading => {
                ui.label("Loading catalog…");
            }
            None => {
                ui.label("No catalog loaded.");
            }
        }
    });
}

// ---------------------------------------------------------------------------
// Central panel
// ---------------------------------------------------------------------------

/// Render the active section inside a vertical scroll area.
pub fn central(ui: &mut Ui, state: &mut AppState) -> Option<UiAction> {
    let mut action = None;

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| match state.section {
            Section::Overview => overview(ui, state),
            Section::Algorithms => cards::algorithm_grid(ui, state),
            Section::Packages => cards::package_grid(ui, state),
            Section::Contribute => {
                action = forms::contribute_section(ui, state);
            }
            Section::About => about_section(ui, state),
        });

    action
}

// ---------------------------------------------------------------------------
// Overview section
// ---------------------------------------------------------------------------

fn overview(ui: &mut Ui, state: &mut AppState) {
    ui.add_space(8.0);
    ui.vertical_centered(|ui: &mut Ui| {
        ui.label(RichText::new("MCMC Atlas").size(28.0).strong().color(ACCENT));
        ui.label("Interactive Catalog of MCMC Algorithms in R");
    });
    ui.add_space(12.0);

    let Some(catalog) = &state.catalog else {
        ui.vertical_centered(|ui: &mut Ui| {
            if state.loading {
                ui.spinner();
                ui.label("Loading catalog…");
            } else {
                ui.label("No catalog loaded.");
            }
        });
        return;
    };

    let stats = catalog.stats();
    let counts = catalog.category_counts();

    ui.columns(4, |cols: &mut [Ui]| {
        stat_tile(&mut cols[0], stats.algorithms, "Algorithms");
        stat_tile(&mut cols[1], stats.packages, "Packages");
        stat_tile(&mut cols[2], stats.categories, "Categories");
        stat_tile(&mut cols[3], stats.contributors, "Contributors");
    });

    ui.add_space(16.0);
    ui.separator();
    ui.add_space(8.0);

    ui.heading("Algorithms by Category");
    ui.add_space(4.0);

    // One single-bar chart per category so the legend carries the titles.
    Plot::new("category_chart")
        .legend(Legend::default())
        .height(220.0)
        .show_axes([false, true])
        .allow_drag(false)
        .allow_zoom(false)
        .allow_scroll(false)
        .allow_boxed_zoom(false)
        .show(ui, |plot_ui| {
            for (i, (category, count)) in counts.iter().enumerate() {
                let chart = BarChart::new(vec![Bar::new(i as f64, *count as f64)])
                    .name(format_category_title(category))
                    .color(state.colors.color_for(category));
                plot_ui.bar_chart(chart);
            }
        });
}

fn stat_tile(ui: &mut Ui, value: usize, label: &str) {
    egui::Frame::group(ui.style())
        .inner_margin(Margin::same(12))
        .show(ui, |ui: &mut Ui| {
            ui.set_width(ui.available_width());
            ui.vertical_centered(|ui: &mut Ui| {
                ui.label(RichText::new(value.to_string()).size(26.0).strong().color(ACCENT));
                ui.label(RichText::new(label).weak());
            });
        });
}

// ---------------------------------------------------------------------------
// About section
// ---------------------------------------------------------------------------

fn about_section(ui: &mut Ui, state: &AppState) {
    ui.add_space(8.0);
    ui.heading("About the MCMC Atlas");
    ui.add_space(8.0);

    ui.label(
        "The MCMC Atlas is a community-maintained catalog of Markov chain Monte Carlo \
         algorithms and the R packages that implement them. Samplers are grouped into \
         families, each family explains how its method works, and every entry links to \
         the packages on CRAN.",
    );
    ui.add_space(8.0);
    ui.label(
        "The catalog itself is a pair of JSON documents, one for algorithms and one for \
         packages. Contributions are welcome: the Contribute section packages your entry \
         into a pre-filled GitHub issue so maintainers can review and merge it.",
    );
    ui.add_space(8.0);
    ui.hyperlink_to(
        "Project repository",
        format!("https://github.com/{CONTRIB_REPO}"),
    );

    if let Some(catalog) = &state.catalog {
        ui.add_space(12.0);
        ui.separator();
        ui.add_space(8.0);

        let stats = catalog.stats();
        ui.label(format!(
            "Currently documenting {} algorithms across {} categories, backed by {} \
             packages from {} contributors.",
            stats.algorithms, stats.categories, stats.packages, stats.contributors
        ));

        ui.label(RichText::new(format!("Last updated {}", today())).weak());
    }
}

// ---------------------------------------------------------------------------
// Modals
// ---------------------------------------------------------------------------

/// Render the floating windows: algorithm detail, example code, and the
/// submission result dialogs.
pub fn modals(ctx: &egui::Context, state: &mut AppState) -> Option<UiAction> {
    detail_modal(ctx, state);
    example_modal(ctx, state);
    submission_modals(ctx, state)
}

fn detail_modal(ctx: &egui::Context, state: &mut AppState) {
    let Some(idx) = state.detail else { return };
    // Clone the record so the window body can borrow state mutably.
    let Some(record) = state
        .catalog
        .as_ref()
        .and_then(|c| c.algorithms.get(idx))
        .cloned()
    else {
        state.detail = None;
        return;
    };

    let mut open = true;
    egui::Window::new(record.name.as_str())
        .open(&mut open)
        .collapsible(false)
        .default_width(480.0)
        .show(ctx, |ui: &mut Ui| {
            ScrollArea::vertical()
                .max_height(420.0)
                .show(ui, |ui: &mut Ui| {
                    ui.label(
                        RichText::new(format_category_title(&record.category))
                            .color(state.colors.color_for(&record.category))
                            .strong(),
                    );

                    ui.add_space(6.0);
                    ui.strong("Description");
                    let description = record
                        .long_description
                        .as_deref()
                        .filter(|s| !s.is_empty())
                        .unwrap_or(&record.description);
                    ui.label(description);

                    if !record.packages.is_empty() {
                        ui.add_space(6.0);
                        ui.strong("Packages");
                        for pkg in &record.packages {
                            ui.horizontal_wrapped(|ui: &mut Ui| {
                                ui.hyperlink_to(
                                    pkg.name.as_str(),
                                    format!("https://cran.r-project.org/package={}", pkg.name),
                                );
                                if !pkg.function.is_empty() {
                                    ui.label(RichText::new(format!("{}()", pkg.function)).monospace());
                                }
                                if !pkg.description.is_empty() {
                                    ui.label(RichText::new(pkg.description.as_str()).weak());
                                }
                            });
                        }
                    }

                    if let Some(complexity) =
                        record.complexity.as_deref().filter(|s| !s.is_empty())
                    {
                        ui.add_space(6.0);
                        ui.strong("Complexity");
                        ui.label(capitalize_first(complexity));
                    }

                    if !record.parameters.is_empty() {
                        ui.add_space(6.0);
                        ui.strong("Key Parameters");
                        for param in &record.parameters {
                            ui.label(format!(
                                "{} ({}): {}",
                                param.name, param.kind, param.description
                            ));
                        }
                    }

                    bullet_list(ui, "Advantages", &record.pros);
                    bullet_list(ui, "Limitations", &record.cons);
                    bullet_list(ui, "Common Use Cases", &record.use_cases);
                });
        });

    if !open {
        state.detail = None;
    }
}

fn bullet_list(ui: &mut Ui, title: &str, items: &[String]) {
    if items.is_empty() {
        return;
    }
    ui.add_space(6.0);
    ui.strong(title);
    for item in items {
        ui.label(format!("• {item}"));
    }
}

fn example_modal(ctx: &egui::Context, state: &mut AppState) {
    let Some(idx) = state.example else { return };
    let Some(record) = state
        .catalog
        .as_ref()
        .and_then(|c| c.algorithms.get(idx))
        .cloned()
    else {
        state.example = None;
        return;
    };

    // The record's own snippet wins; otherwise fall back to the curated
    // examples for its family.
    let mut sections: Vec<(String, String)> = Vec::new();
    let own = record.example_code.as_deref().map(str::trim).unwrap_or("");
    if own.is_empty() {
        if let Some(content) = category_content(&record.category) {
            for example in content.examples {
                sections.push((example.title.to_string(), example.code.to_string()));
            }
        }
    } else {
        sections.push(("Usage Example".to_string(), own.to_string()));
    }

    let mut open = true;
    egui::Window::new(format!("{} - Example Code", record.name))
        .open(&mut open)
        .collapsible(false)
        .default_width(560.0)
        .show(ctx, |ui: &mut Ui| {
            if sections.is_empty() {
                ui.label("No example code available for this algorithm yet.");
                return;
            }
            ScrollArea::vertical()
                .max_height(420.0)
                .show(ui, |ui: &mut Ui| {
                    for (title, code) in &sections {
                        ui.strong(title);
                        ui.add_space(4.0);
                        ui.add(
                            egui::TextEdit::multiline(&mut code.as_str())
                                .code_editor()
                                .desired_width(f32::INFINITY),
                        );
                        if ui.button("Copy Code").clicked() {
                            ui.ctx().copy_text(code.clone());
                        }
                        ui.add_space(8.0);
                    }
                });
        });

    if !open {
        state.example = None;
    }
}

fn submission_modals(ctx: &egui::Context, state: &mut AppState) -> Option<UiAction> {
    let mut action = None;

    if let Some(submission) = state.contribute.submitted.clone() {
        let mut open = true;
        let mut close = false;
        egui::Window::new("🎉 Contribution Submitted Successfully!")
            .open(&mut open)
            .collapsible(false)
            .resizable(false)
            .show(ctx, |ui: &mut Ui| {
                ui.label("Thank you for contributing to the MCMC Atlas!");
                ui.label(format!(
                    "Your {} contribution has been submitted for review.",
                    submission.kind.slug()
                ));
                ui.add_space(6.0);
                ui.hyperlink_to("View Submission", submission.url.as_str());
                ui.add_space(6.0);
                if ui.button("Close").clicked() {
                    close = true;
                }
            });
        if !open || close {
            state.contribute.submitted = None;
        }
    }

    if let Some(error) = state.contribute.error.clone() {
        let mut open = true;
        let mut close = false;
        egui::Window::new("Submission Error")
            .open(&mut open)
            .collapsible(false)
            .resizable(false)
            .show(ctx, |ui: &mut Ui| {
                ui.label(error.to_string());
                ui.label("Please try again or contact us directly.");
                ui.add_space(6.0);
                ui.horizontal(|ui: &mut Ui| {
                    if ui.button("Retry").clicked() {
                        action = Some(UiAction::Submit);
                        close = true;
                    }
                    if ui.button("Close").clicked() {
                        close = true;
                    }
                });
            });
        if !open || close {
            state.contribute.error = None;
        }
    }

    action
}
