use eframe::egui::{self, RichText, Ui};

use crate::data::filter::BoundField;
use crate::state::{Action, AppState};

// ---------------------------------------------------------------------------
// Left side panel – range filters
// ---------------------------------------------------------------------------

/// Render the six range inputs.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Filters");
    ui.separator();

    for (i, field) in BoundField::ALL.into_iter().enumerate() {
        // Min/max pairs are grouped.
        if i > 0 && i % 2 == 0 {
            ui.separator();
        }
        bound_input(ui, state, field);
    }

    let active = state.constraints.active_count();
    if active > 0 {
        ui.add_space(8.0);
        ui.label(RichText::new(format!("{active} active")).weak());
    }
}

fn bound_input(ui: &mut Ui, state: &mut AppState, field: BoundField) {
    ui.strong(field.label());

    let mut text = state.constraints.get(field).to_string();
    let mut cleared = false;

    ui.horizontal(|ui: &mut Ui| {
        let edit = egui::TextEdit::singleline(&mut text)
            .hint_text(field.placeholder())
            .desired_width(ui.available_width() - 28.0);
        if ui.add(edit).changed() {
            state.dispatch(Action::SetBound(field, text.clone()));
        }
        if !text.is_empty() && ui.small_button("✕").on_hover_text("Clear").clicked() {
            cleared = true;
        }
    });

    if cleared {
        state.dispatch(Action::SetBound(field, String::new()));
    }
    ui.add_space(4.0);
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Title and load status. Load failures are only logged, never shown here.
pub fn top_bar(ui: &mut Ui, state: &AppState) {
    ui.horizontal(|ui: &mut Ui| {
        ui.heading("Apple Annual Income Statement");
        ui.separator();

        if state.loading {
            ui.spinner();
            ui.label("Loading statements…");
        } else {
            ui.label(format!(
                "{} statements, {} shown",
                state.source().len(),
                state.view().displayed.len()
            ));
        }
    });
}
