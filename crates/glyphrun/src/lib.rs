//! glyphrun - Text to one glyph run, and the point where the next text goes
//!
//! glyphrun draws a string with a single font face:
//! 1. UTF-16 decoding with surrogate pairing and `?` substitution
//! 2. Glyph and advance lookup, horizontal or sideways
//! 3. Leading or trailing alignment and clockwise rotation about the origin
//! 4. One paint call to a drawing sink
//!
//! # Example
//!
//! ```ignore
//! use glyphrun::prelude::*;
//! use glyphrun::fontdb::FontDatabase;
//! use glyphrun::render_svg::SvgCanvas;
//!
//! let fonts = FontDatabase::with_system_fonts();
//! let drawer = GlyphDrawer::new(&fonts, &FaceQuery::family("serif"), 1.0)?;
//!
//! let mut canvas = SvgCanvas::new(400.0, 100.0);
//! let next = drawer.write(&mut canvas, Point::new(10.0, 50.0), "Hello", 24.0,
//!     Color::black(), &WriteOptions::default())?;
//! drawer.write(&mut canvas, next, " again", 24.0, Color::black(), &WriteOptions::default())?;
//! let svg = canvas.finish()?;
//! ```
//!
//! # Feature Flags
//!
//! - `fontdb`: Face resolution from system fonts and font files
//! - `render-json`: Drawing sink that records commands as JSON
//! - `render-svg`: Drawing sink that writes SVG documents
//! - `full`: All of the above

pub use glyphrun_core::{
    decode, diagnostics, error, geometry, glyphs, layout, traits, types, Alignment, Color,
    FaceQuery, FontStretch, FontStyle, FontWeight, GlyphDrawer, WriteOptions,
};

#[cfg(feature = "fontdb")]
pub use glyphrun_fontdb as fontdb;

#[cfg(feature = "render-json")]
pub use glyphrun_render_json as render_json;

#[cfg(feature = "render-svg")]
pub use glyphrun_render_svg as render_svg;

/// Common imports for typical usage
pub mod prelude {
    pub use glyphrun_core::{
        error::{Result, TypefaceError},
        traits::{DrawingSink, FaceProvider, FontFace},
        types::{GlyphId, GlyphRun, LineMetrics, Point, Size},
        Alignment, Color, FaceQuery, FontStretch, FontStyle, FontWeight, GlyphDrawer,
        WriteOptions,
    };
}
