use eframe::egui;

use crate::config::Config;
use crate::data::loader::{spawn_load, FmpClient, LoadHandle};
use crate::state::{Action, AppState};
use crate::ui::{panels, table};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct IncomePandaApp {
    pub state: AppState,
    loader: LoadHandle,
}

impl IncomePandaApp {
    /// Build the app and start the one statement request of the session.
    pub fn new(cc: &eframe::CreationContext<'_>, config: Config) -> Self {
        let ctx = cc.egui_ctx.clone();
        let loader = spawn_load(FmpClient::new(config), move || ctx.request_repaint());

        Self {
            state: AppState::default(),
            loader,
        }
    }
}

impl eframe::App for IncomePandaApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if !self.loader.is_finished() {
            if let Some(outcome) = self.loader.poll() {
                self.state.dispatch(Action::Loaded(outcome));
            }
        }

        // ---- Top panel: title + status ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &self.state);
        });

        // ---- Left side panel: filters ----
        egui::SidePanel::left("filter_panel")
            .default_width(220.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Central panel: table ----
        egui::CentralPanel::default().show(ctx, |ui| {
            let clicked = egui::ScrollArea::horizontal()
                .show(ui, |ui| table::statement_table(ui, &self.state))
                .inner;
            if let Some(key) = clicked {
                self.state.dispatch(Action::ToggleSort(key));
            }
        });
    }
}
