//! The contracts between the drawer and its host
//!
//! - [`FontFace`] - Your window into glyph lookup and metrics
//! - [`FaceProvider`] - Where a face request turns into a face
//! - [`DrawingSink`] - Where glyph runs get painted

use crate::{
    error::Result,
    types::{GlyphId, GlyphRun, LineMetrics, Point},
    Color, FaceQuery,
};
use std::sync::Arc;

/// One resolved face: glyph lookup and metrics
///
/// Advances are in em units (design units divided by units per em), so the
/// drawer only multiplies by the emitted size.
///
/// ```ignore
/// struct MyFace;
///
/// impl FontFace for MyFace {
///     fn data(&self) -> &[u8] { &[] }
///     fn units_per_em(&self) -> u16 { 1000 }
///     fn glyph_id(&self, ch: char) -> Option<GlyphId> {
///         ch.is_ascii().then_some(ch as u32)
///     }
///     fn advance_width(&self, _glyph_id: GlyphId) -> f32 { 0.5 }
///     fn advance_height(&self, _glyph_id: GlyphId) -> f32 { 1.0 }
///     fn line_metrics(&self) -> LineMetrics { LineMetrics::default() }
/// }
/// ```
pub trait FontFace: Send + Sync {
    /// Raw font bytes, used by sinks that extract outlines
    fn data(&self) -> &[u8];

    /// Face index inside a collection
    fn face_index(&self) -> u32 {
        0
    }

    /// The font's internal coordinate system scale
    fn units_per_em(&self) -> u16;

    /// Find the glyph that represents this character
    ///
    /// Returns None when the face doesn't map it.
    fn glyph_id(&self, ch: char) -> Option<GlyphId>;

    /// Horizontal advance in em units
    fn advance_width(&self, glyph_id: GlyphId) -> f32;

    /// Vertical advance in em units, used for sideways runs
    fn advance_height(&self, glyph_id: GlyphId) -> f32;

    /// Ascent, descent and line gap in em units
    fn line_metrics(&self) -> LineMetrics;

    /// How many glyphs this face contains
    fn glyph_count(&self) -> Option<u32> {
        None
    }

    /// Family name, when known
    fn family_name(&self) -> Option<&str> {
        None
    }
}

/// Resolves a family, style, weight and stretch to one face
pub trait FaceProvider {
    fn resolve(&self, query: &FaceQuery) -> Result<Arc<dyn FontFace>>;
}

/// Receives paint operations
///
/// A rotated write arrives as `push_rotation`, `draw_glyph_run`, `pop`.
pub trait DrawingSink {
    /// Paint one glyph run with a solid brush
    fn draw_glyph_run(&mut self, brush: Color, run: &GlyphRun<'_>) -> Result<()>;

    /// Rotate subsequent drawing clockwise by `angle` degrees around `center`
    fn push_rotation(&mut self, angle: f32, center: Point) -> Result<()>;

    /// Revert the last pushed transform
    fn pop(&mut self) -> Result<()>;
}
