//! Whole-text layout measurement
//!
//! Unlike the advance sums in the drawer, this treats the text as a small
//! paragraph: it breaks lines, ignores trailing whitespace when measuring
//! width and reports the height of every line including line spacing.

use crate::{glyphs::NOTDEF, traits::FontFace, types::Size};

/// Measures text as laid out lines
pub struct TextLayout<'a> {
    face: &'a dyn FontFace,
    size: f32,
}

impl<'a> TextLayout<'a> {
    pub fn new(face: &'a dyn FontFace, size: f32) -> Self {
        Self { face, size }
    }

    /// Bounding box of all lines
    ///
    /// Empty text still occupies one line of height.
    pub fn measure(&self, text: &str) -> Size {
        let line_height = self.face.line_metrics().line_spacing() * self.size;
        let mut width: f32 = 0.0;
        let mut lines = 0;

        for line in split_lines(text) {
            width = width.max(self.line_width(line));
            lines += 1;
        }

        Size::new(width, lines.max(1) as f32 * line_height)
    }

    /// Advance of one line without its trailing whitespace
    pub fn line_width(&self, line: &str) -> f32 {
        line.trim_end()
            .chars()
            .map(|ch| {
                let glyph_id = self.face.glyph_id(ch).unwrap_or(NOTDEF);
                self.face.advance_width(glyph_id) * self.size
            })
            .sum()
    }
}

fn is_line_break(ch: char) -> bool {
    matches!(ch, '\n' | '\r' | '\u{2028}' | '\u{2029}')
}

/// Lines separated by `\n`, `\r\n`, `\r`, U+2028 or U+2029
///
/// A trailing break opens an empty last line.
pub fn split_lines(text: &str) -> Vec<&str> {
    let mut lines = Vec::new();
    let mut start = 0;
    let mut chars = text.char_indices().peekable();

    while let Some((i, ch)) = chars.next() {
        if !is_line_break(ch) {
            continue;
        }
        lines.push(&text[start..i]);
        let mut end = i + ch.len_utf8();
        if ch == '\r' {
            if let Some(&(j, '\n')) = chars.peek() {
                chars.next();
                end = j + 1;
            }
        }
        start = end;
    }
    lines.push(&text[start..]);
    lines
}
