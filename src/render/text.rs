//! Bitmap text and rectangle drawing on RGB rasters.
//!
//! Glyphs come from the public-domain 8x8 font in `font8x8`, scaled by an
//! integer factor. Coordinates are signed; anything outside the image is clipped.
use font8x8::{UnicodeFonts, BASIC_FONTS, LATIN_FONTS};
use image::{Rgb, RgbImage};

pub const GLYPH_SIZE: u32 = 8;

#[derive(Debug, Clone, Copy)]
pub struct BitmapFont {
    pub scale: u32,
    pub line_spacing: u32,
}

impl Default for BitmapFont {
    fn default() -> Self {
        BitmapFont { scale: 2, line_spacing: 6 }
    }
}

fn glyph(c: char) -> [u8; 8] {
    let lookup = |c: char| BASIC_FONTS.get(c).or_else(|| LATIN_FONTS.get(c));
    if let Some(g) = lookup(c) {
        return g;
    }
    let substitute = match c {
        '•' => '·',
        '—' | '–' => '-',
        '‘' | '’' => '\'',
        '“' | '”' => '"',
        _ => '?',
    };
    lookup(substitute).unwrap_or([0; 8])
}

impl BitmapFont {
    fn cell(&self) -> u32 {
        GLYPH_SIZE * self.scale
    }

    /// Width and height of the box `draw` would cover for `text`.
    pub fn measure(&self, text: &str) -> (u32, u32) {
        let lines: Vec<&str> = text.split('\n').collect();
        let widest = lines.iter().map(|l| l.chars().count() as u32).max().unwrap_or(0);
        let count = lines.len() as u32;
        (
            widest * self.cell(),
            count * self.cell() + count.saturating_sub(1) * self.line_spacing,
        )
    }

    /// Draw `text` with its top-left corner at `(x, y)`. `\n` starts a new line.
    pub fn draw(&self, img: &mut RgbImage, x: i64, y: i64, text: &str, color: Rgb<u8>) {
        let cell = self.cell() as i64;
        let scale = self.scale as i64;
        for (line_no, line) in text.split('\n').enumerate() {
            let top = y + line_no as i64 * (cell + self.line_spacing as i64);
            for (col_no, c) in line.chars().enumerate() {
                let left = x + col_no as i64 * cell;
                for (row, bits) in glyph(c).iter().enumerate() {
                    for col in 0..8 {
                        if bits & (1 << col) == 0 {
                            continue;
                        }
                        let px = left + col as i64 * scale;
                        let py = top + row as i64 * scale;
                        fill_rect(img, px, py, px + scale - 1, py + scale - 1, color);
                    }
                }
            }
        }
    }
}

/// Fill the inclusive rectangle `(x0, y0)..=(x1, y1)`.
pub fn fill_rect(img: &mut RgbImage, x0: i64, y0: i64, x1: i64, y1: i64, color: Rgb<u8>) {
    let (w, h) = (img.width() as i64, img.height() as i64);
    let (x0, x1) = (x0.max(0), x1.min(w - 1));
    let (y0, y1) = (y0.max(0), y1.min(h - 1));
    if x0 > x1 || y0 > y1 {
        return;
    }
    for y in y0..=y1 {
        for x in x0..=x1 {
            img.put_pixel(x as u32, y as u32, color);
        }
    }
}
