use std::fmt::Write;

use serde::Deserialize;

pub const FONT_FAMILY: &str = "courier new, monospace";

/// Letter-spacing correction profile.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Density {
    #[default]
    Low,
    Medium,
    High,
}

impl Density {
    /// Letter spacing in pixels that makes a glyph row line up with the source width.
    ///
    /// Scales without a tuned value get no correction.
    pub fn letter_spacing(self, scale: u32) -> f64 {
        match (self, scale) {
            (Density::Low, 1) => -1.0,
            (Density::Low, 2 | 3) => -2.1,
            (Density::Low, 4) => -3.1,
            (Density::Low, 5) => -4.15,
            (Density::Medium, 1) => 0.0,
            (Density::Medium, 2) => -1.0,
            (Density::Medium, 3) => -1.04,
            (Density::Medium, 4 | 5) => -2.1,
            (Density::High, 1 | 2) => 0.0,
            (Density::High, 3..=5) => -1.0,
            _ => 0.0,
        }
    }
}

/// Text metrics used to present a glyph grid at the size of the frame it came from.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Presentation {
    pub font_size: f64,
    pub line_height: f64,
    pub letter_spacing: f64,
}

impl Presentation {
    pub fn derive(resolution: f64, scale: u32, density: Density) -> Self {
        let font_size = (2.0 / resolution) * f64::from(scale);
        Self { font_size, line_height: font_size, letter_spacing: density.letter_spacing(scale) }
    }

    /// Inline style for the table holding the glyph grid.
    pub fn table_style(&self) -> String {
        let mut style = String::from("white-space:pre;margin:0px;padding:0px;");
        let _ = write!(
            style,
            "letter-spacing:{}px;font-family:{};font-size:{}px;line-height:{}px;",
            self.letter_spacing, FONT_FAMILY, self.font_size, self.line_height
        );
        style.push_str("text-align:left;text-decoration:none");
        style
    }
}
