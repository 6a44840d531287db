use ascii_effect::{glyph_index, luminance, AsciiEffect, AsciiError, EffectOptions};
use quickcheck_macros::quickcheck;

fn effect(charset: &str, invert: bool, width: u32, height: u32) -> AsciiEffect {
    let mut effect = AsciiEffect::new(EffectOptions {
        resolution: 1.0,
        invert,
        charset: Some(charset.to_string()),
        ..EffectOptions::default()
    })
    .unwrap();
    effect.resize(width, height);
    effect
}

fn pixels_from(seed: &[u8], width: u32, height: u32) -> Vec<u8> {
    let len = (width * height * 4) as usize;
    if seed.is_empty() {
        return vec![0; len];
    }
    seed.iter().copied().cycle().take(len).collect()
}

#[quickcheck]
fn index_never_increases_with_brightness(a: u8, b: u8, len: u8) -> bool {
    let len = usize::from(len.max(2));
    let (low, high) = (f64::from(a.min(b)) / 255.0, f64::from(a.max(b)) / 255.0);
    glyph_index(high, len, false) <= glyph_index(low, len, false)
}

#[quickcheck]
fn index_stays_in_palette(value: f64, len: u8, invert: bool) -> bool {
    let len = usize::from(len.max(1));
    glyph_index(value, len, invert) < len
}

#[quickcheck]
fn invert_mirrors_every_cell(seed: Vec<u8>) -> bool {
    let charset = " .:-=+*#%@";
    let pixels = pixels_from(&seed, 6, 4);
    let plain = effect(charset, false, 6, 4).rasterize(&pixels).unwrap();
    let inverted = effect(charset, true, 6, 4).rasterize(&pixels).unwrap();

    plain
        .cells
        .iter()
        .zip(&inverted.cells)
        .all(|(plain, inverted)| inverted.index == charset.len() - 1 - plain.index)
}

#[quickcheck]
fn transparent_pixels_map_to_blank(r: u8, g: u8, b: u8) -> bool {
    let grid = effect(" .#", false, 1, 2).rasterize(&[r, g, b, 0, 0, 0, 0, 0]).unwrap();
    luminance(r, g, b, 0) == 1.0 && grid.cells[0].index == 0 && grid.cells[0].ch == ' '
}

#[quickcheck]
fn convert_is_deterministic(seed: Vec<u8>) -> bool {
    let pixels = pixels_from(&seed, 5, 6);
    let mut effect = AsciiEffect::new(EffectOptions {
        resolution: 1.0,
        color: true,
        alpha: true,
        block: true,
        ..EffectOptions::default()
    })
    .unwrap();
    effect.resize(5, 6);
    effect.convert(&pixels).unwrap() == effect.convert(&pixels).unwrap()
}

#[test]
fn one_pixel_short_is_a_shape_mismatch() {
    let effect = effect(" .#", false, 10, 10);
    let pixels = vec![255; 10 * 10 * 4 - 4];
    assert!(matches!(
        effect.convert(&pixels),
        Err(AsciiError::ShapeMismatch { expected: 400, actual: 396 })
    ));
}

#[test]
fn ten_by_ten_yields_five_rows_of_ten() {
    let effect = effect(" .#", false, 10, 10);
    let pixels: Vec<u8> = [0, 0, 0, 255].repeat(10 * 10);
    let markup = effect.convert(&pixels).unwrap();

    let grid = effect.rasterize(&pixels).unwrap();
    assert_eq!(grid.height, 5);
    assert!(grid.rows().all(|row| row.chars().count() == 10));

    let body = markup.split("overflow:hidden\">").nth(1).unwrap();
    let body = body.trim_end_matches("</td></tr>");
    let rows: Vec<&str> = body.split("<br/>").filter(|row| !row.is_empty()).collect();
    assert_eq!(rows.len(), 5);
    assert!(rows.iter().all(|row| *row == "##########"));
}

#[test]
fn transparent_ten_by_ten_is_blank() {
    let effect = effect(" .#", false, 10, 10);
    let markup = effect.convert(&vec![0; 10 * 10 * 4]).unwrap();
    let blank_row = format!("{}<br/>", "&nbsp;".repeat(10));
    assert_eq!(markup.matches(blank_row.as_str()).count(), 5);
}

#[test]
fn odd_heights_drop_the_trailing_row() {
    let effect = effect(" .#", false, 3, 5);
    let grid = effect.rasterize(&vec![0; 3 * 5 * 4]).unwrap();
    assert_eq!(grid.height, 2);
}

#[test]
fn three_glyph_scenario() {
    let effect = effect(" .#", false, 3, 2);
    let pixels = [
        0, 0, 0, 255, // black
        255, 255, 255, 255, // white
        17, 99, 240, 0, // transparent
        0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    ];
    let grid = effect.rasterize(&pixels).unwrap();
    let glyphs: Vec<char> = grid.cells.iter().map(|cell| cell.ch).collect();
    assert_eq!(glyphs, vec!['#', ' ', ' ']);
    assert!(effect.convert(&pixels).unwrap().contains(">#&nbsp;&nbsp;<br/><"));
}

#[test]
fn single_glyph_palette_always_emits_it() {
    let effect = effect("@", true, 2, 2);
    let pixels = [0, 0, 0, 255, 255, 255, 255, 0, 0, 0, 0, 0, 0, 0, 0, 0];
    let grid = effect.rasterize(&pixels).unwrap();
    assert!(grid.cells.iter().all(|cell| cell.ch == '@'));
}
