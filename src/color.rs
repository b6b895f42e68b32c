use std::collections::BTreeMap;

use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

/// Header/link accent used across panels.
pub const ACCENT: Color32 = Color32::from_rgb(0x66, 0x7e, 0xea);

/// Error banner background and text.
pub const BANNER_BG: Color32 = Color32::from_rgb(0xf8, 0xd7, 0xda);
pub const BANNER_TEXT: Color32 = Color32::from_rgb(0x72, 0x1c, 0x24);

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
// Color mapping: category key → Color32
// ---------------------------------------------------------------------------

/// Maps catalog categories to distinct colours for badges and charts.
#[derive(Debug, Clone, Default)]
pub struct CategoryColors {
    mapping: BTreeMap<String, Color32>,
}

impl CategoryColors {
    /// Build a colour map from the catalog's category keys.
    pub fn new(categories: &[String]) -> Self {
        let palette = generate_palette(categories.len());
        let mapping: BTreeMap<String, Color32> = categories
            .iter()
            .cloned()
            .zip(palette.into_iter())
            .collect();
        CategoryColors { mapping }
    }

    /// Look up the colour for a category; unknown keys render grey.
    pub fn color_for(&self, category: &str) -> Color32 {
        self.mapping.get(category).copied().unwrap_or(Color32::GRAY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_has_requested_length_and_distinct_hues() {
        let palette = generate_palette(6);
        assert_eq!(palette.len(), 6);
        for pair in palette.windows(2) {
            assert_ne!(pair[0], pair[1]);
        }
        assert!(generate_palette(0).is_empty());
    }

    #[test]
    fn category_colors_are_stable_and_fall_back_to_grey() {
        let categories = vec!["gibbs-sampler".to_string(), "hmc".to_string()];
        let colors = CategoryColors::new(&categories);
        assert_eq!(
            colors.color_for("gibbs-sampler"),
            colors.color_for("gibbs-sampler")
        );
        assert_ne!(colors.color_for("gibbs-sampler"), colors.color_for("hmc"));
        assert_eq!(colors.color_for("unknown"), Color32::GRAY);
    }
}
