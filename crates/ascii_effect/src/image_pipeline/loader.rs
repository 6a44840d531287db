use image::imageops::FilterType;
use image::{DynamicImage, GenericImageView, RgbaImage};

use super::color;

/// Producer of rendered frames at a requested pixel size.
pub trait FrameSource {
    /// Renders the current frame as an RGBA buffer of exactly `width` x `height` pixels.
    fn next_frame(&mut self, width: u32, height: u32) -> Option<RgbaImage>;
}

/// Frame source replaying a single decoded image.
pub struct StaticFrame {
    image: DynamicImage,
    linearize: bool,
}

impl StaticFrame {
    pub fn new(image: DynamicImage) -> Self {
        Self { image, linearize: false }
    }

    /// Convert sRGB pixels to linear before handing them out.
    pub fn with_linearize(mut self, linearize: bool) -> Self {
        self.linearize = linearize;
        self
    }
}

impl FrameSource for StaticFrame {
    fn next_frame(&mut self, width: u32, height: u32) -> Option<RgbaImage> {
        if width == 0 || height == 0 {
            return Some(RgbaImage::new(width, height));
        }

        let mut frame = if self.image.dimensions() == (width, height) {
            self.image.to_rgba8()
        } else {
            self.image.resize_exact(width, height, FilterType::CatmullRom).into_rgba8()
        };

        if self.linearize {
            color::linearize_rgba(&mut frame);
        }

        Some(frame)
    }
}
