use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

// ---------------------------------------------------------------------------
// Section colours
// ---------------------------------------------------------------------------

/// `n` visually distinct colours with evenly spaced hues.
pub fn generate_palette(n: usize) -> Vec<Color32> {
    (0..n)
        .map(|i| {
            let hue = (i as f32 / n as f32) * 360.0;
            let hsl = Hsl::new(hue, 0.70, 0.55);
            let rgb: Srgb = hsl.into_color();
            Color32::from_rgb(
                (rgb.red * 255.0) as u8,
                (rgb.green * 255.0) as u8,
                (rgb.blue * 255.0) as u8,
            )
        })
        .collect()
}

/// One colour per section of the loaded document.
#[derive(Debug, Clone, Default)]
pub struct SectionColors {
    colors: Vec<Color32>,
}

impl SectionColors {
    pub fn new(section_count: usize) -> Self {
        SectionColors {
            colors: generate_palette(section_count),
        }
    }

    /// Colour of section `idx`; grey for indices outside the document.
    pub fn color_for(&self, idx: usize) -> Color32 {
        self.colors.get(idx).copied().unwrap_or(Color32::GRAY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_is_distinct() {
        let p = generate_palette(4);
        assert_eq!(p.len(), 4);
        for i in 0..p.len() {
            for j in i + 1..p.len() {
                assert_ne!(p[i], p[j]);
            }
        }
        assert!(generate_palette(0).is_empty());
    }

    #[test]
    fn out_of_range_is_grey() {
        let colors = SectionColors::new(2);
        assert_eq!(colors.color_for(5), Color32::GRAY);
        assert_ne!(colors.color_for(1), Color32::GRAY);
    }
}
