#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CellGlyph {
    pub ch: char,
    /// Index of `ch` in the palette it was drawn from.
    pub index: usize,
    /// Source pixel color encoded as RGB bytes.
    pub rgb: [u8; 3],
    /// Source pixel alpha.
    pub alpha: u8,
}

impl CellGlyph {
    pub fn is_blank(&self) -> bool {
        self.ch == ' '
    }

    /// Opacity in the range [0.0, 1.0].
    pub fn opacity(&self) -> f64 {
        f64::from(self.alpha) / 255.0
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GlyphGrid {
    pub width: u32,
    pub height: u32,
    pub cells: Vec<CellGlyph>,
}

impl GlyphGrid {
    pub fn new(width: u32, height: u32, cells: Vec<CellGlyph>) -> Self {
        debug_assert_eq!(width as usize * height as usize, cells.len());
        Self { width, height, cells }
    }

    pub fn cell(&self, column: u32, row: u32) -> Option<&CellGlyph> {
        if column >= self.width || row >= self.height {
            return None;
        }
        self.cells.get(row as usize * self.width as usize + column as usize)
    }

    pub fn row_cells(&self) -> impl Iterator<Item = &[CellGlyph]> + '_ {
        let width = self.width as usize;
        (0..self.height as usize)
            .map(move |row| self.cells.get(row * width..(row + 1) * width).unwrap_or(&[]))
    }

    pub fn rows(&self) -> impl Iterator<Item = String> + '_ {
        self.row_cells().map(|row| row.iter().map(|cell| cell.ch).collect::<String>())
    }
}
