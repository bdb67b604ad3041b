use eframe::egui;

use crate::data::loader::LoaderConfig;
use crate::state::AppState;
use crate::ui::{panels, timeline};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct TimelineApp {
    pub state: AppState,
    config: LoaderConfig,
}

impl TimelineApp {
    /// Build the app and perform the initial load.
    pub fn new(config: LoaderConfig) -> Self {
        let mut state = AppState::default();
        panels::reload_dataset(&mut state, &config);
        Self { state, config }
    }
}

impl eframe::App for TimelineApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: menu bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state, &self.config);
        });

        // ---- Left side panel: filter / sort / export controls ----
        egui::SidePanel::left("control_panel")
            .default_width(220.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Central panel: the timeline ----
        egui::CentralPanel::default().show(ctx, |ui| {
            timeline::timeline_view(ui, &mut self.state);
        });
    }
}
