mod ascii;
mod image_pipeline;

use log::debug;
use serde::Deserialize;

pub use ascii::{
    grid::{CellGlyph, GlyphGrid},
    layout::{Density, Presentation, FONT_FAMILY},
    mapping::{glyph_index, luminance, GlyphMapper},
    markup::CellStyle,
    palette::Palette,
};
pub use image_pipeline::{
    color,
    loader::{FrameSource, StaticFrame},
    resize::TargetGeometry,
    sink::{DisplaySink, WriteSink},
};

use ascii::markup;

#[derive(Debug, thiserror::Error)]
pub enum AsciiError {
    #[error("pixel buffer holds {actual} bytes, expected {expected}")]
    ShapeMismatch { expected: usize, actual: usize },
    #[error("glyph palette must contain at least one character")]
    EmptyPalette,
    #[error("resolution must be within (0, 1], got {0}")]
    InvalidResolution(f64),
    #[error("scale must be at least 1, got {0}")]
    InvalidScale(u32),
    #[error("frame source produced no frame")]
    FrameUnavailable,
    #[error("failed to present frame: {0}")]
    Display(#[from] std::io::Error),
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EffectOptions {
    /// Fraction of the display size that is sampled, in the range (0.0, 1.0].
    pub resolution: f64,
    /// Glyph magnification.
    pub scale: u32,
    /// Tint every glyph with its source pixel color.
    pub color: bool,
    /// Carry source alpha as glyph opacity. Needs `color`.
    pub alpha: bool,
    /// Fill the glyph background with its source pixel color. Needs `color`.
    pub block: bool,
    /// Map dark pixels to light glyphs and the other way around.
    pub invert: bool,
    pub density: Density,
    /// Custom glyph ramp, lightest glyph first.
    pub charset: Option<String>,
}

impl Default for EffectOptions {
    fn default() -> Self {
        Self {
            resolution: 0.15,
            scale: 1,
            color: false,
            alpha: false,
            block: false,
            invert: false,
            density: Density::Low,
            charset: None,
        }
    }
}

impl EffectOptions {
    fn palette(&self) -> Result<Palette, AsciiError> {
        match &self.charset {
            Some(chars) => Palette::new(chars.as_str()),
            None if self.color => Ok(Palette::colored()),
            None => Ok(Palette::grayscale()),
        }
    }
}

/// Post-processing effect turning rendered frames into glyph markup.
///
/// The effect is configured once; [`AsciiEffect::resize`] picks the display size and with it the
/// size of the sample buffer every frame is expected to match.
pub struct AsciiEffect {
    options: EffectOptions,
    mapper: GlyphMapper,
    style: CellStyle,
    presentation: Presentation,
    geometry: TargetGeometry,
}

impl AsciiEffect {
    pub fn new(options: EffectOptions) -> Result<Self, AsciiError> {
        let resolution = options.resolution;
        if !resolution.is_finite() || resolution <= 0.0 || resolution > 1.0 {
            return Err(AsciiError::InvalidResolution(resolution));
        }
        if options.scale == 0 {
            return Err(AsciiError::InvalidScale(options.scale));
        }

        let mapper = GlyphMapper::new(options.palette()?, options.invert);
        let style = CellStyle { color: options.color, block: options.block, alpha: options.alpha };
        let presentation = Presentation::derive(resolution, options.scale, options.density);

        Ok(Self { options, mapper, style, presentation, geometry: TargetGeometry::default() })
    }

    /// Sets the display size in device pixels and derives the sample size from it.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.geometry = TargetGeometry::derive(width, height, self.options.resolution);
        debug!(
            "ascii effect resized to {width}x{height}, sampling {}x{}",
            self.geometry.sample_width, self.geometry.sample_height
        );
    }

    pub fn options(&self) -> &EffectOptions {
        &self.options
    }

    pub fn palette(&self) -> &Palette {
        self.mapper.palette()
    }

    pub fn presentation(&self) -> &Presentation {
        &self.presentation
    }

    pub fn sample_size(&self) -> (u32, u32) {
        (self.geometry.sample_width, self.geometry.sample_height)
    }

    pub fn display_size(&self) -> (u32, u32) {
        (self.geometry.display_width, self.geometry.display_height)
    }

    /// Maps a sample-sized RGBA buffer onto glyph cells.
    pub fn rasterize(&self, pixels: &[u8]) -> Result<GlyphGrid, AsciiError> {
        self.mapper.map_rgba(pixels, self.geometry.sample_width, self.geometry.sample_height)
    }

    /// Converts a sample-sized RGBA buffer into glyph markup sized to the display.
    pub fn convert(&self, pixels: &[u8]) -> Result<String, AsciiError> {
        let grid = self.rasterize(pixels)?;
        Ok(self.markup(&grid))
    }

    /// Serializes an already rasterized grid.
    pub fn markup(&self, grid: &GlyphGrid) -> String {
        let stream = markup::glyph_stream(grid, self.style);
        markup::container(&stream, self.geometry.display_width, self.geometry.display_height)
    }

    /// Wraps converted markup into a standalone HTML page.
    pub fn document(&self, markup: &str) -> String {
        markup::document(markup, &self.presentation)
    }

    /// Pulls one frame at the sample size from `source` and converts it.
    pub fn render<S>(&self, source: &mut S) -> Result<String, AsciiError>
    where
        S: FrameSource + ?Sized,
    {
        let (width, height) = self.sample_size();
        let frame = source.next_frame(width, height).ok_or(AsciiError::FrameUnavailable)?;
        self.convert(frame.as_raw())
    }

    /// Renders one frame from `source` and hands the markup to `sink`.
    pub fn render_to<S, D>(&self, source: &mut S, sink: &mut D) -> Result<(), AsciiError>
    where
        S: FrameSource + ?Sized,
        D: DisplaySink + ?Sized,
    {
        let markup = self.render(source)?;
        sink.present(&markup)?;
        Ok(())
    }
}
