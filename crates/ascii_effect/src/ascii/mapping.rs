use super::{
    grid::{CellGlyph, GlyphGrid},
    palette::Palette,
};
use crate::AsciiError;

const RED_WEIGHT: f64 = 0.30;
const GREEN_WEIGHT: f64 = 0.59;
const BLUE_WEIGHT: f64 = 0.11;

/// Perceived brightness of an RGBA pixel in the range [0.0, 1.0].
///
/// Fully transparent pixels count as the brightest value so they always land on the blank end of
/// the palette, whatever color they carry.
pub fn luminance(r: u8, g: u8, b: u8, a: u8) -> f64 {
    if a == 0 {
        return 1.0;
    }

    let weighted =
        RED_WEIGHT * f64::from(r) + GREEN_WEIGHT * f64::from(g) + BLUE_WEIGHT * f64::from(b);
    (weighted / 255.0).clamp(0.0, 1.0)
}

/// Palette index for `luminance`, bright values mapping towards index 0.
///
/// The result is always a valid index into a palette of `palette_len` glyphs, including for a
/// single glyph palette and for luminance values outside [0.0, 1.0].
pub fn glyph_index(luminance: f64, palette_len: usize, invert: bool) -> usize {
    let max_index = palette_len.saturating_sub(1) as i64;
    let darkness = 1.0 - luminance.clamp(0.0, 1.0);
    let mut index = (darkness * max_index as f64).floor() as i64;

    if invert {
        index = max_index - index;
    }

    index.clamp(0, max_index) as usize
}

/// Samples every other row of an RGBA buffer and maps each pixel onto a palette glyph.
pub struct GlyphMapper {
    palette: Palette,
    invert: bool,
}

impl GlyphMapper {
    pub fn new(palette: Palette, invert: bool) -> Self {
        Self { palette, invert }
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    pub fn map_rgba(&self, pixels: &[u8], width: u32, height: u32) -> Result<GlyphGrid, AsciiError> {
        let stride = width as usize * 4;
        let expected = stride * height as usize;
        if pixels.len() != expected {
            return Err(AsciiError::ShapeMismatch { expected, actual: pixels.len() });
        }

        // Glyph cells are roughly twice as tall as they are wide.
        let rows = height / 2;
        let mut cells = Vec::with_capacity(width as usize * rows as usize);

        for row in 0..rows as usize {
            let line = &pixels[row * 2 * stride..][..stride];
            for pixel in line.chunks_exact(4) {
                let (r, g, b, a) = (pixel[0], pixel[1], pixel[2], pixel[3]);
                let index = glyph_index(luminance(r, g, b, a), self.palette.len(), self.invert);
                let ch = self.palette.char_at(index).unwrap_or(' ');
                cells.push(CellGlyph { ch, index, rgb: [r, g, b], alpha: a });
            }
        }

        Ok(GlyphGrid::new(width, rows, cells))
    }
}
