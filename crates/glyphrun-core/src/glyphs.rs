//! Codepoints to glyph ids and scaled advances

use crate::{
    decode::{CodepointDecoder, REPLACEMENT},
    diagnostics,
    traits::FontFace,
    types::GlyphId,
};

/// Glyph used when even `?` is missing from the face
pub const NOTDEF: GlyphId = 0;

/// The glyphs of one call, in drawing order
///
/// `glyph_ids` and `advances` have equal length, which is at most the number
/// of input code units.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct GlyphSequence {
    pub glyph_ids: Vec<GlyphId>,
    pub advances: Vec<f32>,
    pub total_advance: f32,
    /// Glyphs drawn as a placeholder (malformed input or unmapped codepoint)
    pub substitutions: usize,
}

impl GlyphSequence {
    /// Decode `units` and look every codepoint up in `face`
    ///
    /// Advances are advance widths, or advance heights when `sideways`,
    /// multiplied by `size`.
    pub fn resolve(face: &dyn FontFace, units: &[u16], size: f32, sideways: bool) -> Self {
        let mut glyph_ids = Vec::with_capacity(units.len());
        let mut advances = Vec::with_capacity(units.len());
        let mut total_advance = 0.0;
        let mut substitutions = 0;
        let mut fallback = None;

        for decoded in CodepointDecoder::new(units) {
            if let Some(malformation) = decoded.malformed {
                diagnostics::report_malformed(decoded.index, malformation);
                substitutions += 1;
            }

            let glyph_id = match face.glyph_id(decoded.ch) {
                Some(id) => id,
                None => {
                    log::trace!("No glyph for {:?}, using '?'", decoded.ch);
                    if decoded.malformed.is_none() {
                        substitutions += 1;
                    }
                    *fallback.get_or_insert_with(|| fallback_glyph(face))
                },
            };

            let em_advance = if sideways {
                face.advance_height(glyph_id)
            } else {
                face.advance_width(glyph_id)
            };
            let advance = em_advance * size;

            glyph_ids.push(glyph_id);
            advances.push(advance);
            total_advance += advance;
        }

        Self {
            glyph_ids,
            advances,
            total_advance,
            substitutions,
        }
    }

    pub fn len(&self) -> usize {
        self.glyph_ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.glyph_ids.is_empty()
    }
}

/// Glyph for `?`, or `.notdef` when the face lacks it
pub fn fallback_glyph(face: &dyn FontFace) -> GlyphId {
    face.glyph_id(REPLACEMENT).unwrap_or_else(|| {
        log::warn!("Face has no glyph for '?', falling back to .notdef");
        NOTDEF
    })
}
