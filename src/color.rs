use std::collections::BTreeMap;

use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

// ---------------------------------------------------------------------------
// Color palette generator
// ---------------------------------------------------------------------------

/// Generates `n` visually distinct colours using evenly spaced hues.
pub fn generate_palette(n: usize) -> Vec<Color32> {
    if n == 0 {
        return Vec::new();
    }
    (0..n)
        .map(|i| {
            let hue = (i as f32 / n as f32) * 360.0;
            let hsl = Hsl::new(hue, 0.75, 0.55);
            let rgb: Srgb = hsl.into_color();
            Color32::from_rgb(
                (rgb.red * 255.0) as u8,
                (rgb.green * 255.0) as u8,
                (rgb.blue * 255.0) as u8,
            )
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Color mapping: provider → Color32
// ---------------------------------------------------------------------------

/// Maps each provider to a distinct badge colour.
#[derive(Debug, Clone)]
pub struct ProviderColors {
    mapping: BTreeMap<String, Color32>,
    default_color: Color32,
}

impl ProviderColors {
    /// Build a colour map from the provider list (wildcard excluded).
    pub fn new(providers: &[String]) -> Self {
        let palette = generate_palette(providers.len());
        let mapping: BTreeMap<String, Color32> = providers
            .iter()
            .cloned()
            .zip(palette.into_iter())
            .collect();

        ProviderColors {
            mapping,
            default_color: Color32::GRAY,
        }
    }

    /// Look up the badge colour for a provider.
    pub fn color_for(&self, provider: &str) -> Color32 {
        self.mapping
            .get(provider)
            .copied()
            .unwrap_or(self.default_color)
    }
}
