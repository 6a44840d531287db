use std::fmt::Write;

use super::{
    grid::{CellGlyph, GlyphGrid},
    layout::Presentation,
};

pub const BLANK: &str = "&nbsp;";
pub const LINE_BREAK: &str = "<br/>";

/// How each glyph cell is decorated with its source pixel.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CellStyle {
    pub color: bool,
    pub block: bool,
    pub alpha: bool,
}

fn push_glyph(out: &mut String, cell: &CellGlyph) {
    if cell.is_blank() {
        out.push_str(BLANK);
    } else {
        out.push(cell.ch);
    }
}

fn push_cell(out: &mut String, cell: &CellGlyph, style: CellStyle) {
    if !style.color {
        push_glyph(out, cell);
        return;
    }

    let [r, g, b] = cell.rgb;
    let _ = write!(out, "<span style='color:rgb({r},{g},{b});");
    if style.block {
        let _ = write!(out, "background-color:rgb({r},{g},{b});");
    }
    if style.alpha {
        let _ = write!(out, "opacity:{};", cell.opacity());
    }
    out.push_str("'>");
    push_glyph(out, cell);
    out.push_str("</span>");
}

/// Glyph stream of a grid, one line break after every row.
pub fn glyph_stream(grid: &GlyphGrid, style: CellStyle) -> String {
    let mut out = String::with_capacity(grid.cells.len() + grid.height as usize * LINE_BREAK.len());
    for row in grid.row_cells() {
        for cell in row {
            push_cell(&mut out, cell, style);
        }
        out.push_str(LINE_BREAK);
    }
    out
}

/// Wraps a glyph stream in a table row clipped to the display size.
pub fn container(stream: &str, display_width: u32, display_height: u32) -> String {
    format!(
        "<tr><td style=\"display:block;width:{display_width}px;height:{display_height}px;\
         overflow:hidden\">{stream}</td></tr>"
    )
}

/// Standalone HTML page presenting a converted frame.
pub fn document(container: &str, presentation: &Presentation) -> String {
    format!(
        "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n</head>\n\
         <body style=\"margin:0px;cursor:default\">\n\
         <table cellspacing=\"0\" cellpadding=\"0\" style=\"{}\">{}</table>\n</body>\n</html>\n",
        presentation.table_style(),
        container
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ascii::layout::Density;

    fn cell(ch: char, rgb: [u8; 3], alpha: u8) -> CellGlyph {
        CellGlyph { ch, index: 0, rgb, alpha }
    }

    #[test]
    fn plain_cells_are_verbatim() {
        let grid = GlyphGrid::new(2, 1, vec![cell('#', [0; 3], 255), cell(' ', [0; 3], 255)]);
        assert_eq!(glyph_stream(&grid, CellStyle::default()), "#&nbsp;<br/>");
    }

    #[test]
    fn colored_cell_markup() {
        let grid = GlyphGrid::new(1, 1, vec![cell('@', [1, 2, 3], 255)]);
        let style = CellStyle { color: true, ..CellStyle::default() };
        assert_eq!(glyph_stream(&grid, style), "<span style='color:rgb(1,2,3);'>@</span><br/>");
    }

    #[test]
    fn block_and_alpha_extend_the_style() {
        let grid = GlyphGrid::new(1, 1, vec![cell('@', [4, 5, 6], 255)]);
        let style = CellStyle { color: true, block: true, alpha: true };
        assert_eq!(
            glyph_stream(&grid, style),
            "<span style='color:rgb(4,5,6);background-color:rgb(4,5,6);opacity:1;'>@</span><br/>"
        );
    }

    #[test]
    fn block_and_alpha_need_color() {
        let grid = GlyphGrid::new(1, 1, vec![cell('@', [4, 5, 6], 10)]);
        let style = CellStyle { color: false, block: true, alpha: true };
        assert_eq!(glyph_stream(&grid, style), "@<br/>");
    }

    #[test]
    fn transparent_blank_cell_markup() {
        let grid = GlyphGrid::new(1, 1, vec![cell(' ', [0; 3], 0)]);
        let style = CellStyle { color: true, alpha: true, ..CellStyle::default() };
        assert_eq!(
            glyph_stream(&grid, style),
            "<span style='color:rgb(0,0,0);opacity:0;'>&nbsp;</span><br/>"
        );
    }

    #[test]
    fn container_is_clipped_to_display() {
        assert_eq!(
            container("x", 640, 480),
            "<tr><td style=\"display:block;width:640px;height:480px;overflow:hidden\">x</td></tr>"
        );
    }

    #[test]
    fn document_embeds_table_style() {
        let presentation = Presentation::derive(0.5, 1, Density::High);
        let page = document("<tr></tr>", &presentation);
        assert!(page.contains("<table cellspacing=\"0\" cellpadding=\"0\""));
        assert!(page.contains("font-size:4px;"));
        assert!(page.contains("<tr></tr></table>"));
    }
}
