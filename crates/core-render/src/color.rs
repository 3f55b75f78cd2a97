//! Color descriptor: fixed hue/saturation, per-item lightness.
//!
//! Lightness is an affine function of the value relative to the item count:
//! `value / item_count * (max_lightness - min_lightness) + min_lightness`.
//! Terminal output converts the resulting HSL triple to RGB (or to the
//! 256-color cube when truecolor is unavailable).

use crossterm::style::Color;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorScheme {
    pub hue: u16,
    pub saturation: u8,
    pub min_lightness: f64,
    pub max_lightness: f64,
}

impl Default for ColorScheme {
    fn default() -> Self {
        Self {
            hue: 200,
            saturation: 70,
            min_lightness: 30.0,
            max_lightness: 90.0,
        }
    }
}

impl ColorScheme {
    pub fn lightness(&self, value: u32, item_count: usize) -> f64 {
        let ratio = f64::from(value) / item_count as f64;
        ratio * (self.max_lightness - self.min_lightness) + self.min_lightness
    }

    pub fn color_for(&self, value: u32, item_count: usize) -> Hsl {
        Hsl {
            hue: self.hue,
            saturation: self.saturation,
            lightness: self.lightness(value, item_count),
        }
    }
}

/// HSL triple; saturation and lightness in percent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsl {
    pub hue: u16,
    pub saturation: u8,
    pub lightness: f64,
}

impl Hsl {
    /// CSS color string, e.g. `hsl(200, 70%, 45%)`.
    pub fn to_css(&self) -> String {
        format!(
            "hsl({}, {}%, {}%)",
            self.hue, self.saturation, self.lightness
        )
    }

    pub fn to_rgb(&self) -> (u8, u8, u8) {
        let s = (f64::from(self.saturation) / 100.0).clamp(0.0, 1.0);
        let l = (self.lightness / 100.0).clamp(0.0, 1.0);
        let h = f64::from(self.hue % 360) / 60.0;

        let chroma = (1.0 - (2.0 * l - 1.0).abs()) * s;
        let x = chroma * (1.0 - (h % 2.0 - 1.0).abs());
        let (r, g, b) = match h as u8 {
            0 => (chroma, x, 0.0),
            1 => (x, chroma, 0.0),
            2 => (0.0, chroma, x),
            3 => (0.0, x, chroma),
            4 => (x, 0.0, chroma),
            _ => (chroma, 0.0, x),
        };
        let m = l - chroma / 2.0;
        let channel = |c: f64| ((c + m) * 255.0).round().clamp(0.0, 255.0) as u8;
        (channel(r), channel(g), channel(b))
    }

    /// Terminal color: 24-bit when supported, else nearest 6x6x6 cube entry.
    pub fn to_terminal(&self, truecolor: bool) -> Color {
        let (r, g, b) = self.to_rgb();
        if truecolor {
            Color::Rgb { r, g, b }
        } else {
            let level = |c: u8| (u16::from(c) * 5 + 127) / 255;
            let idx = 16 + 36 * level(r) + 6 * level(g) + level(b);
            Color::AnsiValue(idx as u8)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lightness_is_affine_in_value() {
        let scheme = ColorScheme::default();
        assert_eq!(scheme.lightness(0, 10), 30.0);
        assert_eq!(scheme.lightness(5, 10), 60.0);
        assert_eq!(scheme.lightness(10, 10), 90.0);
    }

    #[test]
    fn css_string_shape() {
        let hsl = ColorScheme::default().color_for(5, 10);
        assert_eq!(hsl.to_css(), "hsl(200, 70%, 60%)");
    }

    #[test]
    fn rgb_primaries() {
        let red = Hsl { hue: 0, saturation: 100, lightness: 50.0 };
        let green = Hsl { hue: 120, saturation: 100, lightness: 50.0 };
        let blue = Hsl { hue: 240, saturation: 100, lightness: 50.0 };
        assert_eq!(red.to_rgb(), (255, 0, 0));
        assert_eq!(green.to_rgb(), (0, 255, 0));
        assert_eq!(blue.to_rgb(), (0, 0, 255));
    }

    #[test]
    fn rgb_grey_when_unsaturated() {
        let grey = Hsl { hue: 200, saturation: 0, lightness: 50.0 };
        assert_eq!(grey.to_rgb(), (128, 128, 128));
        let white = Hsl { hue: 0, saturation: 0, lightness: 100.0 };
        assert_eq!(white.to_rgb(), (255, 255, 255));
    }

    #[test]
    fn ansi_fallback_maps_into_cube() {
        let red = Hsl { hue: 0, saturation: 100, lightness: 50.0 };
        assert_eq!(red.to_terminal(false), Color::AnsiValue(196));
        assert_eq!(red.to_terminal(true), Color::Rgb { r: 255, g: 0, b: 0 });
    }
}
