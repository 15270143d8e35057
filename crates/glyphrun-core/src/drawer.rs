//! The glyph drawer: one face, four operations
//!
//! [`GlyphDrawer::write`] paints text and tells you where the next text goes.
//! [`GlyphDrawer::get_length`], [`GlyphDrawer::get_max_length`] and
//! [`GlyphDrawer::measure_string`] measure without painting.

use std::sync::Arc;

use crate::{
    error::{Result, TypefaceError},
    geometry,
    glyphs::GlyphSequence,
    layout::TextLayout,
    traits::{DrawingSink, FaceProvider, FontFace},
    types::{GlyphRun, Point, Size},
    Color, FaceQuery,
};

/// Which end of the text sits on the origin
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Alignment {
    /// Text starts at the origin and runs forward
    #[default]
    Leading,
    /// Text ends at the origin
    Trailing,
}

/// Per-call placement settings
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WriteOptions {
    pub alignment: Alignment,
    /// Turn every glyph by 90° and advance by advance heights
    pub sideways: bool,
    /// Clockwise rotation in degrees around the origin
    pub angle: f32,
}

impl WriteOptions {
    pub fn trailing(mut self) -> Self {
        self.alignment = Alignment::Trailing;
        self
    }

    pub fn sideways(mut self, sideways: bool) -> Self {
        self.sideways = sideways;
        self
    }

    pub fn rotated(mut self, angle: f32) -> Self {
        self.angle = angle;
        self
    }
}

impl Default for WriteOptions {
    fn default() -> Self {
        Self {
            alignment: Alignment::Leading,
            sideways: false,
            angle: 0.0,
        }
    }
}

/// Draws text with one resolved face
///
/// The face and pixel scale never change after construction, so a drawer can
/// be shared between threads. Sinks are borrowed mutably per call.
pub struct GlyphDrawer {
    face: Arc<dyn FontFace>,
    pixels_per_dip: f32,
}

impl GlyphDrawer {
    /// Resolve a face for `query` and hold on to it
    pub fn new(provider: &dyn FaceProvider, query: &FaceQuery, pixels_per_dip: f32) -> Result<Self> {
        let face = provider.resolve(query)?;
        log::debug!(
            "GlyphDrawer: resolved {:?} ({:?}, {:?}, {:?}) to {}",
            query.family,
            query.style,
            query.weight,
            query.stretch,
            face.family_name().unwrap_or("an unnamed face")
        );
        Ok(Self::from_face(face, pixels_per_dip))
    }

    /// Wrap an already resolved face
    pub fn from_face(face: Arc<dyn FontFace>, pixels_per_dip: f32) -> Self {
        Self {
            face,
            pixels_per_dip,
        }
    }

    /// The face every call uses
    pub fn face(&self) -> &Arc<dyn FontFace> {
        &self.face
    }

    /// Device pixels per device-independent unit
    pub fn pixels_per_dip(&self) -> f32 {
        self.pixels_per_dip
    }

    /// Write `text` at `origin` and return the anchor for whatever follows
    ///
    /// Leading text starts at `origin`, trailing text ends there. A non-zero
    /// `angle` rotates the run clockwise around `origin` whatever the
    /// alignment. Empty text paints nothing and returns `origin`.
    pub fn write(
        &self,
        sink: &mut dyn DrawingSink,
        origin: Point,
        text: &str,
        size: f32,
        brush: Color,
        options: &WriteOptions,
    ) -> Result<Point> {
        let units: Vec<u16> = text.encode_utf16().collect();
        self.write_utf16(sink, origin, &units, size, brush, options)
    }

    /// [`write`](Self::write) for raw UTF-16, where unpaired surrogates can occur
    pub fn write_utf16(
        &self,
        sink: &mut dyn DrawingSink,
        origin: Point,
        text: &[u16],
        size: f32,
        brush: Color,
        options: &WriteOptions,
    ) -> Result<Point> {
        if text.is_empty() {
            return Ok(origin);
        }

        let glyphs = GlyphSequence::resolve(self.face.as_ref(), text, size, options.sideways);
        log::debug!(
            "GlyphDrawer: {} code units became {} glyphs, advance {:.2}",
            text.len(),
            glyphs.len(),
            glyphs.total_advance
        );

        let run = GlyphRun {
            face: self.face.as_ref(),
            em_size: size,
            pixels_per_dip: self.pixels_per_dip,
            is_sideways: options.sideways,
            baseline_origin: geometry::effective_origin(
                origin,
                options.alignment,
                glyphs.total_advance,
            ),
            glyph_ids: &glyphs.glyph_ids,
            advances: &glyphs.advances,
        };

        if options.angle == 0.0 {
            sink.draw_glyph_run(brush, &run)?;
        } else {
            // Pivot on the caller's origin, not the aligned one
            sink.push_rotation(options.angle, origin)?;
            let painted = sink.draw_glyph_run(brush, &run);
            sink.pop()?;
            painted?;
        }

        Ok(geometry::next_point(
            origin,
            options.alignment,
            glyphs.total_advance,
            options.angle,
        ))
    }

    /// Sum of advance widths, one lookup per UTF-16 code unit
    ///
    /// Surrogate pairs are not combined here, and there is no `?` fallback:
    /// a code unit the face cannot map fails with
    /// [`TypefaceError::MissingGlyph`].
    pub fn get_length(&self, text: &str, size: f32) -> Result<f32> {
        let units: Vec<u16> = text.encode_utf16().collect();
        self.get_length_utf16(&units, size)
    }

    /// [`get_length`](Self::get_length) for raw UTF-16
    pub fn get_length_utf16(&self, text: &[u16], size: f32) -> Result<f32> {
        let mut length = 0.0;
        for (index, &unit) in text.iter().enumerate() {
            let glyph_id = char::from_u32(u32::from(unit))
                .and_then(|ch| self.face.glyph_id(ch))
                .ok_or(TypefaceError::MissingGlyph { unit, index })?;
            length += self.face.advance_width(glyph_id) * size;
        }
        Ok(length)
    }

    /// Longest [`get_length`](Self::get_length) among `strings`, 0 when empty
    pub fn get_max_length<I, S>(&self, strings: I, size: f32) -> Result<f32>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        strings.into_iter().try_fold(0.0_f32, |max, text| {
            Ok(max.max(self.get_length(text.as_ref(), size)?))
        })
    }

    /// Width and height of `text` laid out as whole lines
    ///
    /// This is a layout measurement, not an advance sum: lines break at
    /// newlines, trailing whitespace does not count towards the width and
    /// height covers full line spacing. It can differ from
    /// [`get_length`](Self::get_length) on the same text.
    pub fn measure_string(&self, text: &str, size: f32) -> Size {
        TextLayout::new(self.face.as_ref(), size).measure(text)
    }

    /// [`measure_string`](Self::measure_string) for raw UTF-16
    pub fn measure_string_utf16(&self, text: &[u16], size: f32) -> Size {
        self.measure_string(&String::from_utf16_lossy(text), size)
    }
}

impl std::fmt::Debug for GlyphDrawer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GlyphDrawer")
            .field("family", &self.face.family_name())
            .field("units_per_em", &self.face.units_per_em())
            .field("pixels_per_dip", &self.pixels_per_dip)
            .finish()
    }
}
