use eframe::egui::{
    self, Align2, Color32, FontId, Painter, Pos2, Rect, RichText, Sense, Stroke, StrokeKind, Ui,
    pos2, vec2,
};

use crate::color::CategoryColors;
use crate::content::{CategoryContent, Glyph, category_content, format_category_title};
use crate::data::model::{AlgorithmRecord, Catalog, PackageRecord};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Algorithm grid
// ---------------------------------------------------------------------------

/// Render the search row and the card grid, grouped per category.
pub fn algorithm_grid(ui: &mut Ui, state: &mut AppState) {
    // Clone what we need so we can mutate state inside the loop.
    let (categories, package_names) = match &state.catalog {
        Some(catalog) => (catalog.categories.clone(), catalog.package_names.clone()),
        None => {
            ui.vertical_centered(|ui: &mut Ui| {
                ui.add_space(24.0);
                if state.loading {
                    ui.spinner();
                    ui.label("Loading catalog…");
                } else {
                    ui.label("No catalog loaded.");
                }
            });
            return;
        }
    };

    filter_row(ui, state, &categories, &package_names);
    ui.add_space(8.0);

    if state.visible_indices.is_empty() {
        ui.vertical_centered(|ui: &mut Ui| {
            ui.add_space(24.0);
            ui.label("No algorithms found matching your criteria.");
            if state.filters.is_active() && ui.button("Clear filters").clicked() {
                state.clear_filters();
            }
        });
        return;
    }

    let grouped = state.grouped();

    // Card buttons only record which modal to open; state is written after
    // the walk over the borrowed catalog.
    let mut open_detail: Option<usize> = None;
    let mut open_example: Option<usize> = None;

    if let Some(catalog) = &state.catalog {
        for (category, indices) in &grouped {
            category_section(
                ui,
                catalog,
                &state.colors,
                category,
                indices,
                &mut open_detail,
                &mut open_example,
            );
        }
    }

    if open_detail.is_some() {
        state.detail = open_detail;
    }
    if open_example.is_some() {
        state.example = open_example;
    }
}

/// Search box plus the category and package dropdowns.
fn filter_row(ui: &mut Ui, state: &mut AppState, categories: &[String], package_names: &[String]) {
    ui.horizontal(|ui: &mut Ui| {
        let mut query = state.filters.query.clone();
        let response = ui.add(
            egui::TextEdit::singleline(&mut query)
                .hint_text("Search algorithms, packages, or methods…")
                .desired_width(260.0),
        );
        if response.changed() {
            state.set_query(query);
        }

        let selected_category = state.filters.category.clone();
        let category_label = selected_category
            .as_deref()
            .map(format_category_title)
            .unwrap_or_else(|| "All Categories".to_string());
        egui::ComboBox::from_id_salt("category_filter")
            .selected_text(category_label)
            .show_ui(ui, |ui: &mut Ui| {
                if ui
                    .selectable_label(selected_category.is_none(), "All Categories")
                    .clicked()
                {
                    state.set_category(None);
                }
                for category in categories {
                    let is_selected = selected_category.as_deref() == Some(category.as_str());
                    if ui
                        .selectable_label(is_selected, format_category_title(category))
                        .clicked()
                    {
                        state.set_category(Some(category.clone()));
                    }
                }
            });

        let selected_package = state.filters.package.clone();
        let package_label = selected_package
            .clone()
            .unwrap_or_else(|| "All Packages".to_string());
        egui::ComboBox::from_id_salt("package_filter")
            .selected_text(package_label)
            .show_ui(ui, |ui: &mut Ui| {
                if ui
                    .selectable_label(selected_package.is_none(), "All Packages")
                    .clicked()
                {
                    state.set_package(None);
                }
                for package in package_names {
                    let is_selected = selected_package.as_deref() == Some(package.as_str());
                    if ui.selectable_label(is_selected, package).clicked() {
                        state.set_package(Some(package.clone()));
                    }
                }
            });

        if state.filters.is_active() {
            if ui.button("Clear").clicked() {
                state.clear_filters();
            }
            let total = state.catalog.as_ref().map_or(0, |c| c.len());
            ui.label(
                RichText::new(format!(
                    "{} of {} algorithms",
                    state.visible_indices.len(),
                    total
                ))
                .weak(),
            );
        }
    });
}

// ---------------------------------------------------------------------------
// Category sections
// ---------------------------------------------------------------------------

fn category_section(
    ui: &mut Ui,
    catalog: &Catalog,
    colors: &CategoryColors,
    category: &str,
    indices: &[usize],
    open_detail: &mut Option<usize>,
    open_example: &mut Option<usize>,
) {
    let title = format_category_title(category);
    let content = category_content(category);
    let color = colors.color_for(category);

    ui.add_space(8.0);
    ui.horizontal(|ui: &mut Ui| {
        if let Some(content) = content {
            draw_glyph(ui, content.glyph, content.badge, color);
        }
        ui.heading(&title);
        ui.label(RichText::new(format!("({})", indices.len())).weak());
    });

    egui::CollapsingHeader::new(format!("About {title}"))
        .id_salt(category)
        .default_open(false)
        .show(ui, |ui: &mut Ui| match content {
            Some(content) => about_category(ui, content),
            None => {
                ui.label("Explanation not available.");
            }
        });

    ui.add_space(4.0);
    for row in indices.chunks(3) {
        ui.columns(3, |cols: &mut [Ui]| {
            for (slot, &idx) in row.iter().enumerate() {
                if let Some(record) = catalog.algorithms.get(idx) {
                    algorithm_card(&mut cols[slot], record, idx, open_detail, open_example);
                }
            }
        });
        ui.add_space(4.0);
    }
}

/// Body of the per-category "About" dropdown.
fn about_category(ui: &mut Ui, content: &CategoryContent) {
    ui.label(content.summary);

    ui.add_space(6.0);
    ui.strong("Key features:");
    for feature in content.key_features {
        ui.label(format!("• {feature}"));
    }

    ui.add_space(6.0);
    ui.strong("Best for:");
    ui.label(content.best_for);

    ui.add_space(6.0);
    ui.strong(content.process_title);
    for (i, (label, text)) in content.process_steps.iter().enumerate() {
        ui.label(format!("{}. {label}: {text}", i + 1));
    }

    ui.add_space(6.0);
    ui.strong("Key parameters:");
    ui.label(content.key_parameters);
}

fn algorithm_card(
    ui: &mut Ui,
    record: &AlgorithmRecord,
    idx: usize,
    open_detail: &mut Option<usize>,
    open_example: &mut Option<usize>,
) {
    egui::Frame::group(ui.style()).show(ui, |ui: &mut Ui| {
        ui.set_width(ui.available_width());
        ui.strong(&record.name);
        ui.label(&record.description);

        if !record.tags.is_empty() {
            ui.horizontal_wrapped(|ui: &mut Ui| {
                for tag in &record.tags {
                    ui.label(RichText::new(format!("#{tag}")).weak().small());
                }
            });
        }

        if !record.packages.is_empty() {
            ui.add_space(4.0);
            ui.label(RichText::new("Available in:").weak());
            for pkg in &record.packages {
                ui.horizontal_wrapped(|ui: &mut Ui| {
                    ui.hyperlink_to(
                        &pkg.name,
                        format!("https://cran.r-project.org/package={}", pkg.name),
                    );
                    if !pkg.function.is_empty() {
                        ui.label(RichText::new(format!("{}()", pkg.function)).weak());
                    }
                });
            }
        }

        ui.add_space(4.0);
        ui.horizontal(|ui: &mut Ui| {
            if ui.small_button("Details").clicked() {
                *open_detail = Some(idx);
            }
            if ui.small_button("Example").clicked() {
                *open_example = Some(idx);
            }
        });
    });
}

// ---------------------------------------------------------------------------
// Package grid
// ---------------------------------------------------------------------------

/// Render the package cards, three per row.
pub fn package_grid(ui: &mut Ui, state: &AppState) {
    let Some(catalog) = &state.catalog else {
        ui.vertical_centered(|ui: &mut Ui| {
            ui.add_space(24.0);
            if state.loading {
                ui.spinner();
                ui.label("Loading catalog…");
            } else {
                ui.label("No catalog loaded.");
            }
        });
        return;
    };

    if catalog.packages.is_empty() {
        ui.label("No packages in the catalog yet.");
        return;
    }

    ui.add_space(8.0);
    for row in catalog.packages.chunks(3) {
        ui.columns(3, |cols: &mut [Ui]| {
            for (slot, package) in row.iter().enumerate() {
                package_card(&mut cols[slot], catalog, package);
            }
        });
        ui.add_space(4.0);
    }
}

fn package_card(ui: &mut Ui, catalog: &Catalog, package: &PackageRecord) {
    egui::Frame::group(ui.style()).show(ui, |ui: &mut Ui| {
        ui.set_width(ui.available_width());
        ui.horizontal_wrapped(|ui: &mut Ui| {
            ui.strong(&package.name);
            if !package.version.is_empty() {
                ui.label(RichText::new(format!("v{}", package.version)).weak());
            }
        });
        ui.label(&package.description);

        if !package.maintainer.is_empty() {
            ui.label(RichText::new(format!("Maintainer: {}", package.maintainer)).weak());
        }

        ui.add_space(4.0);
        ui.label(
            RichText::new(format!(
                "{} algorithms, {} categories",
                catalog.algorithms_using(&package.name),
                package.categories.len()
            ))
            .weak(),
        );

        ui.add_space(4.0);
        ui.horizontal(|ui: &mut Ui| {
            if let Some(url) = package.cran_url.as_deref().filter(|u| !u.is_empty()) {
                ui.hyperlink_to("Install", url);
            }
            if let Some(url) = package.documentation_url.as_deref().filter(|u| !u.is_empty()) {
                ui.hyperlink_to("Docs", url);
            }
            if let Some(url) = package.github_url.as_deref().filter(|u| !u.is_empty()) {
                ui.hyperlink_to("GitHub", url);
            }
        });
    });
}

// ---------------------------------------------------------------------------
// Category glyphs
// ---------------------------------------------------------------------------

/// Sketch the family icon into a 40x40 slot, tinted with the category color.
pub fn draw_glyph(ui: &mut Ui, glyph: Glyph, badge: &str, color: Color32) {
    let (rect, _response) = ui.allocate_exact_size(vec2(40.0, 40.0), Sense::hover());
    if !ui.is_rect_visible(rect) {
        return;
    }

    let painter = ui.painter_at(rect);
    let stroke = Stroke::new(1.5, color);
    let p = |x: f32, y: f32| rect.left_top() + vec2(x, y);

    painter.circle_stroke(p(20.0, 20.0), 18.0, Stroke::new(1.0, color.gamma_multiply(0.5)));

    match glyph {
        Glyph::RandomWalk => {
            let pts = [p(8.0, 24.0), p(15.0, 14.0), p(22.0, 22.0), p(32.0, 12.0)];
            for pair in pts.windows(2) {
                painter.line_segment([pair[0], pair[1]], stroke);
            }
            for pt in pts {
                painter.circle_filled(pt, 2.0, color);
            }
        }
        Glyph::AdaptiveArc => {
            let start = p(8.0, 26.0);
            let ctrl = p(20.0, 6.0);
            let end = p(32.0, 26.0);
            arc_polyline(&painter, start, ctrl, end, stroke);
            painter.circle_filled(start, 2.0, color);
            painter.circle_filled(end, 2.0, color);
        }
        Glyph::Population => {
            let center = p(20.0, 20.0);
            for sat in [p(12.0, 12.0), p(28.0, 12.0), p(12.0, 28.0), p(28.0, 28.0)] {
                painter.line_segment([center, sat], Stroke::new(1.0, color));
                painter.circle_filled(sat, 2.0, color);
            }
            painter.circle_filled(center, 2.5, color);
        }
        Glyph::Particles => {
            for (x, top) in [(8.0, 16.0), (14.0, 12.0), (20.0, 8.0), (26.0, 14.0)] {
                let bar = Rect::from_min_max(p(x, top), p(x + 4.0, 30.0));
                painter.rect_filled(bar, 1.0, color);
            }
        }
        Glyph::Orbit => {
            let left = p(8.0, 20.0);
            let right = p(32.0, 20.0);
            for ctrl_y in [6.0, 34.0] {
                arc_polyline(&painter, left, p(20.0, ctrl_y), right, stroke);
            }
            painter.circle_filled(left, 2.0, color);
            painter.circle_filled(right, 2.0, color);
        }
        Glyph::Blocks => {
            painter.rect_stroke(
                Rect::from_min_max(p(10.0, 10.0), p(30.0, 30.0)),
                2.0,
                stroke,
                StrokeKind::Inside,
            );
            painter.rect_filled(Rect::from_min_max(p(15.0, 15.0), p(25.0, 25.0)), 1.0, color);
        }
    }

    if !badge.is_empty() {
        painter.text(
            p(20.0, 35.0),
            Align2::CENTER_CENTER,
            badge,
            FontId::proportional(8.0),
            color,
        );
    }
}

/// Flatten a quadratic Bézier into 8 segments.
fn arc_polyline(painter: &Painter, a: Pos2, ctrl: Pos2, b: Pos2, stroke: Stroke) {
    let mut prev = a;
    for i in 1..=8 {
        let t = i as f32 / 8.0;
        let next = quad_point(a, ctrl, b, t);
        painter.line_segment([prev, next], stroke);
        prev = next;
    }
}

fn quad_point(a: Pos2, ctrl: Pos2, b: Pos2, t: f32) -> Pos2 {
    let u = 1.0 - t;
    pos2(
        u * u * a.x + 2.0 * u * t * ctrl.x + t * t * b.x,
        u * u * a.y + 2.0 * u * t * ctrl.y + t * t * b.y,
    )
}
