use crate::AsciiError;

/// Glyph ramp ordered from the lightest-appearing glyph to the densest one.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Palette {
    chars: Vec<char>,
}

impl Palette {
    pub fn new(chars: impl Into<String>) -> Result<Self, AsciiError> {
        let chars: Vec<char> = chars.into().chars().collect();
        if chars.is_empty() {
            return Err(AsciiError::EmptyPalette);
        }
        Ok(Self { chars })
    }

    fn builtin(chars: &str) -> Self {
        Self { chars: chars.chars().collect() }
    }

    /// Default ramp when color output is disabled.
    pub fn grayscale() -> Self {
        Self::builtin(" .,:;i1tfLCG08@")
    }

    /// Default ramp when color output is enabled.
    pub fn colored() -> Self {
        Self::builtin(" CGO08@")
    }

    pub fn classic() -> Self {
        Self::builtin(" .:-=+*#%@")
    }

    /// Darker, bolder ramp. Contains `&`, which markup output carries unescaped.
    pub fn bold() -> Self {
        Self::builtin(" .'`^\",:;Il!i~+_-?][}{1)(|/tfjrxnuvczXYUJCLQ0OZmwqpdbkhao*#MW&8%B@$")
    }

    pub fn blocks() -> Self {
        Self::builtin(" ░▒▓█")
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    pub fn char_at(&self, index: usize) -> Option<char> {
        self.chars.get(index).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_palette_is_rejected() {
        assert!(matches!(Palette::new(""), Err(AsciiError::EmptyPalette)));
        assert!(!Palette::new("@").unwrap().is_empty());
    }

    #[test]
    fn builtin_ramps_have_expected_lengths() {
        assert_eq!(Palette::grayscale().len(), 15);
        assert_eq!(Palette::colored().len(), 7);
        assert_eq!(Palette::classic().len(), 10);
        assert_eq!(Palette::blocks().len(), 5);
    }

    #[test]
    fn builtin_ramps_start_with_blank() {
        for palette in
            [Palette::grayscale(), Palette::colored(), Palette::classic(), Palette::bold()]
        {
            assert_eq!(palette.char_at(0), Some(' '));
        }
    }

    #[test]
    fn multibyte_glyphs_count_as_single_entries() {
        let palette = Palette::new("░▒").unwrap();
        assert_eq!(palette.chars(), &['░', '▒']);
        assert_eq!(palette.char_at(2), None);
    }
}
