use eframe::egui::{self, Color32, RichText, ScrollArea, Ui};

use crate::data::model::Release;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Timeline (central panel)
// ---------------------------------------------------------------------------

/// Render the release timeline in the central panel.
pub fn timeline_view(ui: &mut Ui, state: &mut AppState) {
    let Some(dataset) = &state.dataset else {
        ui.centered_and_justified(|ui: &mut Ui| {
            if state.loading {
                ui.heading("Loading LLM Timeline…");
            } else {
                ui.heading("No timeline loaded  (File → Reload)");
            }
        });
        return;
    };

    // Defer the toggle until after iteration so the view borrow is released.
    let mut clicked: Option<String> = None;

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            for &idx in &state.view {
                let release = &dataset.releases[idx];
                let expanded = state.selected.as_deref() == Some(release.id.as_str());

                ui.group(|ui: &mut Ui| {
                    if release_card(ui, state, release, expanded) {
                        clicked = Some(release.id.clone());
                    }
                });
                ui.add_space(4.0);
            }
        });

    if let Some(id) = clicked {
        state.toggle_selected(&id);
    }
}

/// One release card.  Returns true when the header was clicked.
fn release_card(ui: &mut Ui, state: &AppState, release: &Release, expanded: bool) -> bool {
    let mut clicked = false;

    ui.horizontal(|ui: &mut Ui| {
        let header = RichText::new(&release.name).heading();
        clicked = ui.selectable_label(expanded, header).clicked();
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.label(RichText::new(release.formatted_date()).weak());
        });
    });

    ui.horizontal(|ui: &mut Ui| {
        let badge_color = state
            .provider_colors
            .as_ref()
            .map(|colors| colors.color_for(&release.provider))
            .unwrap_or(Color32::GRAY);
        ui.label(RichText::new(&release.provider).color(badge_color).strong());

        for tag in release.modality_tags() {
            ui.label(RichText::new(tag).small().italics());
        }
    });

    ui.horizontal(|ui: &mut Ui| {
        if let Some(params) = &release.parameters {
            ui.label(format!("📊 {params}"));
        }
        if let Some(ctx) = &release.context_window {
            ui.label(format!("📈 {ctx}K"));
        }
        if let Some(arch) = &release.architecture {
            ui.label(format!("🔧 {arch}"));
        }
    });

    if expanded {
        release_details(ui, release);
    }
    clicked
}

/// Expanded detail section of a card.
fn release_details(ui: &mut Ui, release: &Release) {
    ui.separator();

    if let Some(features) = &release.features {
        if !features.is_empty() {
            ui.strong("Features");
            for feature in features {
                ui.label(format!("• {feature}"));
            }
        }
    }

    if let Some(achievements) = &release.notable_achievements {
        if !achievements.is_empty() {
            ui.strong("Notable Achievements");
            for achievement in achievements {
                ui.label(format!("• {achievement}"));
            }
        }
    }

    if let Some(training) = &release.training_data {
        ui.strong("Training Data");
        ui.label(training);
    }

    if let Some(url) = &release.documentation {
        ui.hyperlink_to("📚 Read Documentation", url);
    }

    let access = match release.public_access {
        Some(true) => "🔓 Open Source",
        _ => "🔒 Closed Source",
    };
    let mut access_line = access.to_string();
    if release.api_available == Some(true) {
        access_line.push_str(" • API Available");
    }
    ui.label(RichText::new(access_line).weak());
}
