//! sRGB transfer function helpers.

const LINEAR_THRESHOLD: f32 = 0.04045;

/// Converts one sRGB encoded channel in [0.0, 1.0] to linear Rec.709.
pub fn srgb_to_linear(value: f32) -> f32 {
    if value > LINEAR_THRESHOLD {
        ((value + 0.055).max(0.0) / 1.055).powf(2.4)
    } else {
        value / 12.92
    }
}

pub fn srgb_to_linear_rgb(color: [f32; 3]) -> [f32; 3] {
    color.map(srgb_to_linear)
}

/// Rewrites the color channels of an RGBA8 buffer from sRGB to linear, leaving alpha untouched.
pub fn linearize_rgba(pixels: &mut [u8]) {
    let table: Vec<u8> = (0..=255u8)
        .map(|value| (srgb_to_linear(f32::from(value) / 255.0) * 255.0).round() as u8)
        .collect();

    for pixel in pixels.chunks_exact_mut(4) {
        for channel in &mut pixel[..3] {
            *channel = table[usize::from(*channel)];
        }
    }
}
