use chrono::Utc;
use eframe::egui::{self, Color32, RichText, Ui};

use crate::data::loader::{self, LoaderConfig};
use crate::data::view::SortCriterion;
use crate::export::{self, ArtifactSink, ExportFormat, SaveDialogSink};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState, config: &LoaderConfig) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Reload").clicked() {
                reload_dataset(state, config);
                ui.close_menu();
            }
        });

        ui.separator();
        ui.strong("AI/LLM Model Releases");
        ui.separator();

        if let Some(ds) = &state.dataset {
            ui.label(format!(
                "{} releases loaded, {} in view",
                ds.len(),
                state.view.len()
            ));
        } else if state.loading {
            ui.label("Loading timeline…");
        }

        if let Some(msg) = &state.status_message {
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// Left side panel – view controls
// ---------------------------------------------------------------------------

/// Render the control panel: provider filter, sort order, export.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Controls");
    ui.separator();

    if state.dataset.is_none() {
        ui.label("No dataset loaded.");
        return;
    }

    // ---- Provider filter ----
    ui.strong("Filter by Provider");
    let options = state.provider_options.clone();
    let current = state.provider_filter.clone();
    egui::ComboBox::from_id_salt("provider_filter")
        .selected_text(filter_label(&current))
        .show_ui(ui, |ui: &mut Ui| {
            for option in &options {
                if ui
                    .selectable_label(current == *option, filter_label(option))
                    .clicked()
                {
                    state.set_provider_filter(option.clone());
                }
            }
        });
    ui.add_space(8.0);

    // ---- Sort order ----
    ui.strong("Sort by");
    egui::ComboBox::from_id_salt("sort_by")
        .selected_text(state.sort.label())
        .show_ui(ui, |ui: &mut Ui| {
            for criterion in SortCriterion::ALL {
                if ui
                    .selectable_label(state.sort == criterion, criterion.label())
                    .clicked()
                {
                    state.set_sort(criterion);
                }
            }
        });
    ui.add_space(8.0);

    // ---- Export ----
    ui.strong("Export as");
    egui::ComboBox::from_id_salt("export_format")
        .selected_text(state.export_format.label())
        .show_ui(ui, |ui: &mut Ui| {
            for format in ExportFormat::ALL {
                ui.selectable_value(&mut state.export_format, format, format.label());
            }
        });
    if ui.button("⬇ Export").clicked() {
        export_view(state);
    }

    ui.separator();

    // ---- Statistics ----
    ui.strong("Summary");
    ui.label(format!("Models: {}", state.stats.count));
    ui.label(format!("Providers: {}", state.stats.provider_count));
    ui.label(format!("Modalities: {}", state.stats.modality_count));
}

fn filter_label(option: &str) -> String {
    if option == crate::data::view::ALL_PROVIDERS {
        "All Providers".to_string()
    } else {
        option.to_string()
    }
}

// ---------------------------------------------------------------------------
// Actions
// ---------------------------------------------------------------------------

/// Serialize the current view and hand it to the save-dialog sink.
pub fn export_view(state: &mut AppState) {
    let Some(ds) = &state.dataset else {
        return;
    };
    let view = state.view_releases();
    let result = export::serialize(
        &view,
        &ds.metadata,
        state.export_format.as_str(),
        Utc::now(),
    );

    match result {
        Ok(artifact) => {
            if let Err(e) = SaveDialogSink.emit(&artifact) {
                log::error!("Export failed: {e:#}");
                state.status_message = Some(format!("Export failed: {e:#}"));
            }
        }
        Err(e) => {
            log::error!("Export failed: {e}");
            state.status_message = Some(format!("Export failed: {e}"));
        }
    }
}

/// Load (or reload) the timeline and install it into the state.
pub fn reload_dataset(state: &mut AppState, config: &LoaderConfig) {
    state.loading = true;
    match loader::load_timeline(config) {
        Ok(dataset) => {
            log::info!("Loaded {} releases", dataset.len());
            state.set_dataset(dataset);
        }
        Err(e) => {
            log::error!("Failed to load timeline: {e:#}");
            state.status_message = Some("Failed to load timeline data. Please try again later.".to_string());
            state.loading = false;
        }
    }
}
