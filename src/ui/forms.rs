use eframe::egui::{self, RichText, Ui};

use crate::contribute::{
    ALGORITHM_CATEGORIES, AlgorithmDraft, COMBINED_CATEGORIES, CombinedDraft, ContributionDraft,
    ContributionKind, ISSUE_TYPES, IssueDraft, PackageDraft,
};
use crate::state::AppState;
use crate::ui::UiAction;

// ---------------------------------------------------------------------------
// Contribute section
// ---------------------------------------------------------------------------

/// Render the contribution type picker and the active form.
pub fn contribute_section(ui: &mut Ui, state: &mut AppState) -> Option<UiAction> {
    ui.add_space(8.0);
    ui.heading("Contribute to the Atlas");
    ui.add_space(4.0);
    ui.label(
        "Add a missing algorithm or package, or report a problem. Submissions open a \
         pre-filled GitHub issue for maintainer review; nothing is published directly.",
    );
    ui.add_space(8.0);

    ui.horizontal_wrapped(|ui: &mut Ui| {
        for kind in ContributionKind::ALL {
            let selected = state.contribute.active.as_ref().map(|d| d.kind()) == Some(kind);
            if ui.selectable_label(selected, kind.form_title()).clicked() && !selected {
                state.contribute.open(kind);
            }
        }
    });

    ui.add_space(8.0);

    let submitting = state.contribute.submitting;
    let mut close_form = false;
    let mut submit = false;

    if let Some(draft) = state.contribute.active.as_mut() {
        egui::Frame::group(ui.style()).show(ui, |ui: &mut Ui| {
            ui.set_width(ui.available_width());
            ui.strong(draft.kind().form_title());
            ui.add_space(6.0);

            ui.add_enabled_ui(!submitting, |ui: &mut Ui| match draft {
                ContributionDraft::Algorithm(d) => algorithm_form(ui, d),
                ContributionDraft::Package(d) => package_form(ui, d),
                ContributionDraft::AlgorithmPackage(d) => combined_form(ui, d),
                ContributionDraft::Issue(d) => issue_form(ui, d),
            });

            ui.add_space(8.0);

            let missing = draft.missing_fields();
            if !missing.is_empty() {
                ui.label(RichText::new(format!("Required: {}", missing.join(", "))).weak());
                ui.add_space(4.0);
            }

            ui.horizontal(|ui: &mut Ui| {
                if submitting {
                    ui.spinner();
                    ui.label("Submitting…");
                } else {
                    if ui
                        .add_enabled(missing.is_empty(), egui::Button::new("Submit"))
                        .clicked()
                    {
                        submit = true;
                    }
                    if ui.button("Cancel").clicked() {
                        close_form = true;
                    }
                }
            });
        });
    } else {
        ui.label(RichText::new("Pick a contribution type to start.").weak());
    }

    if close_form {
        state.contribute.close();
    }
    if submit {
        return Some(UiAction::Submit);
    }
    None
}

// ---------------------------------------------------------------------------
// Per-kind form bodies
// ---------------------------------------------------------------------------

fn algorithm_form(ui: &mut Ui, draft: &mut AlgorithmDraft) {
    text_row(ui, "Algorithm Name *", &mut draft.name);
    choice_row(ui, "algo_category", "Category *", &ALGORITHM_CATEGORIES, &mut draft.category);
    multiline_row(ui, "Description *", &mut draft.description);
    text_row(ui, "R Package *", &mut draft.package);
    code_row(ui, "Example Code (R)", &mut draft.example_code);
    text_row(ui, "Your Name *", &mut draft.contributor);
}

fn package_form(ui: &mut Ui, draft: &mut PackageDraft) {
    text_row(ui, "Package Name *", &mut draft.name);
    text_row(ui, "Version *", &mut draft.version);
    multiline_row(ui, "Description *", &mut draft.description);
    text_row(ui, "Maintainer *", &mut draft.maintainer);
    text_row(ui, "CRAN URL", &mut draft.cran_url);
    text_row(ui, "GitHub URL", &mut draft.github_url);
    text_row(ui, "Your Name *", &mut draft.contributor);
}

fn combined_form(ui: &mut Ui, draft: &mut CombinedDraft) {
    ui.label(RichText::new("Algorithm").strong());
    text_row(ui, "Algorithm Name *", &mut draft.algorithm_name);
    choice_row(
        ui,
        "combined_category",
        "Category *",
        &COMBINED_CATEGORIES,
        &mut draft.algorithm_category,
    );
    multiline_row(ui, "Algorithm Description *", &mut draft.algorithm_description);
    code_row(ui, "Example Code (R)", &mut draft.algorithm_example);

    ui.add_space(6.0);
    ui.label(RichText::new("Package").strong());
    text_row(ui, "Package Name *", &mut draft.package_name);
    text_row(ui, "Version *", &mut draft.package_version);
    multiline_row(ui, "Package Description *", &mut draft.package_description);
    text_row(ui, "Maintainer *", &mut draft.package_maintainer);
    text_row(ui, "CRAN URL", &mut draft.package_cran_url);
    text_row(ui, "GitHub URL", &mut draft.package_github_url);

    ui.add_space(6.0);
    text_row(ui, "Your Name *", &mut draft.contributor);
}

fn issue_form(ui: &mut Ui, draft: &mut IssueDraft) {
    choice_row(ui, "issue_type", "Issue Type *", &ISSUE_TYPES, &mut draft.issue_type);
    text_row(ui, "Title *", &mut draft.title);
    multiline_row(ui, "Description *", &mut draft.description);
    text_row(ui, "Your Name *", &mut draft.reporter);
}

// ---------------------------------------------------------------------------
// Row helpers
// ---------------------------------------------------------------------------

fn text_row(ui: &mut Ui, label: &str, value: &mut String) {
    ui.label(label);
    ui.add(egui::TextEdit::singleline(value).desired_width(f32::INFINITY));
    ui.add_space(4.0);
}

fn multiline_row(ui: &mut Ui, label: &str, value: &mut String) {
    ui.label(label);
    ui.add(
        egui::TextEdit::multiline(value)
            .desired_rows(3)
            .desired_width(f32::INFINITY),
    );
    ui.add_space(4.0);
}

fn code_row(ui: &mut Ui, label: &str, value: &mut String) {
    ui.label(label);
    ui.add(
        egui::TextEdit::multiline(value)
            .code_editor()
            .desired_rows(4)
            .desired_width(f32::INFINITY),
    );
    ui.add_space(4.0);
}

/// Dropdown over fixed slugs. The stored value is exactly what gets
/// submitted, so the options are shown unformatted.
fn choice_row(ui: &mut Ui, id: &str, label: &str, options: &[&str], value: &mut String) {
    ui.label(label);
    let selected_text = if value.is_empty() {
        "Select…".to_string()
    } else {
        value.clone()
    };
    egui::ComboBox::from_id_salt(id)
        .selected_text(selected_text)
        .show_ui(ui, |ui: &mut Ui| {
            for option in options {
                if ui.selectable_label(value.as_str() == *option, *option).clicked() {
                    *value = option.to_string();
                }
            }
        });
    ui.add_space(4.0);
}
