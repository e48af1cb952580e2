use font8x8::{UnicodeFonts, BASIC_FONTS};
use plotters::coord::Shift;
use plotters::drawing::DrawingAreaErrorKind;
use plotters::prelude::*;

/// Glyph cell edge in unscaled pixels.
pub const GLYPH: i32 = 8;

pub fn text_width(text: &str, scale: i32) -> i32 {
    text.chars().count() as i32 * GLYPH * scale
}

/// Draws `text` with its top-left corner at `origin` (pixel coordinates of
/// `area`), one `scale`×`scale` block per glyph bit. Characters outside the
/// basic Latin table are left blank.
pub fn draw_text<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    text: &str,
    origin: (i32, i32),
    scale: i32,
    color: &RGBColor,
) -> Result<(), DrawingAreaErrorKind<DB::ErrorType>> {
    let (ox, oy) = origin;
    for (n, ch) in text.chars().enumerate() {
        let Some(rows) = BASIC_FONTS.get(ch) else {
            continue;
        };
        let cx = ox + n as i32 * GLYPH * scale;
        for (ry, row) in rows.iter().enumerate() {
            for bit in 0..GLYPH {
                if row & (1 << bit) == 0 {
                    continue;
                }
                let px = cx + bit * scale;
                let py = oy + ry as i32 * scale;
                for dy in 0..scale {
                    for dx in 0..scale {
                        area.draw_pixel((px + dx, py + dy), color)?;
                    }
                }
            }
        }
    }
    Ok(())
}

/// Draws `text` horizontally centred on `center_x`.
pub fn draw_centered<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    text: &str,
    center_x: i32,
    top: i32,
    scale: i32,
    color: &RGBColor,
) -> Result<(), DrawingAreaErrorKind<DB::ErrorType>> {
    draw_text(area, text, (center_x - text_width(text, scale) / 2, top), scale, color)
}
