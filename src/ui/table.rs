use eframe::egui::{self, Button, RichText, Ui};
use egui_extras::{Column, TableBuilder};

use crate::data::sort::SortKey;
use crate::format::format_amount;
use crate::state::AppState;

const ROW_HEIGHT: f32 = 22.0;
const HEADER_HEIGHT: f32 = 26.0;

// ---------------------------------------------------------------------------
// Statement table (central panel)
// ---------------------------------------------------------------------------

/// Render the displayed statements. Returns the sort key whose header was
/// clicked this frame, if any.
pub fn statement_table(ui: &mut Ui, state: &AppState) -> Option<SortKey> {
    let mut clicked = None;
    let rows: Vec<_> = state.displayed().collect();

    TableBuilder::new(ui)
        .striped(true)
        .resizable(true)
        .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
        .column(Column::auto().at_least(100.0))
        .columns(Column::auto().at_least(150.0), 3)
        .column(Column::auto().at_least(70.0))
        .column(Column::remainder().at_least(150.0))
        .header(HEADER_HEIGHT, |mut header| {
            for key in SortKey::ALL {
                header.col(|ui: &mut Ui| {
                    let mut text = key.label().to_string();
                    if state.sort.key == key {
                        text.push(' ');
                        text.push_str(state.sort.order.arrow());
                    }
                    if ui
                        .add(Button::new(RichText::new(text).strong()).frame(false))
                        .clicked()
                    {
                        clicked = Some(key);
                    }
                });
            }
            for title in ["Gross Profit", "EPS", "Operating Income"] {
                header.col(|ui: &mut Ui| {
                    ui.strong(title);
                });
            }
        })
        .body(|body| {
            body.rows(ROW_HEIGHT, rows.len(), |mut row| {
                let statement = rows[row.index()];
                row.col(|ui: &mut Ui| {
                    ui.label(statement.date.as_str());
                });
                row.col(|ui: &mut Ui| {
                    ui.label(format_amount(statement.revenue));
                });
                row.col(|ui: &mut Ui| {
                    ui.label(format_amount(statement.net_income));
                });
                row.col(|ui: &mut Ui| {
                    ui.label(format_amount(statement.gross_profit));
                });
                row.col(|ui: &mut Ui| {
                    ui.label(statement.eps.to_string());
                });
                row.col(|ui: &mut Ui| {
                    ui.label(format_amount(statement.operating_income));
                });
            });
        });

    clicked
}
