/// Sizes of the displayed frame and of the downscaled buffer that is actually rasterized.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TargetGeometry {
    pub display_width: u32,
    pub display_height: u32,
    pub sample_width: u32,
    pub sample_height: u32,
}

impl TargetGeometry {
    pub fn derive(display_width: u32, display_height: u32, resolution: f64) -> Self {
        Self {
            display_width,
            display_height,
            sample_width: scale_dimension(display_width, resolution),
            sample_height: scale_dimension(display_height, resolution),
        }
    }

    /// Byte length of an RGBA buffer covering the sample area.
    pub fn sample_len(&self) -> usize {
        self.sample_width as usize * self.sample_height as usize * 4
    }

    /// Number of glyph rows produced from the sample area.
    pub fn glyph_rows(&self) -> u32 {
        self.sample_height / 2
    }
}

fn scale_dimension(value: u32, resolution: f64) -> u32 {
    (f64::from(value) * resolution).floor() as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_size_is_floored() {
        let geometry = TargetGeometry::derive(100, 67, 0.15);
        assert_eq!(geometry.sample_width, 15);
        assert_eq!(geometry.sample_height, 10);
        assert_eq!(geometry.glyph_rows(), 5);
        assert_eq!(geometry.sample_len(), 15 * 10 * 4);
    }

    #[test]
    fn full_resolution_keeps_display_size() {
        let geometry = TargetGeometry::derive(640, 480, 1.0);
        assert_eq!((geometry.sample_width, geometry.sample_height), (640, 480));
    }

    #[test]
    fn tiny_displays_collapse_to_nothing() {
        let geometry = TargetGeometry::derive(3, 3, 0.15);
        assert_eq!((geometry.sample_width, geometry.sample_height), (0, 0));
        assert_eq!(geometry.sample_len(), 0);
    }
}
