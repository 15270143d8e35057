//! Glyphrun Core: from UTF-16 text to one positioned glyph run
//!
//! A [`GlyphDrawer`] holds a single resolved font face and the device pixel
//! scale. Every call decodes its text, looks up glyphs and advances in that
//! face, and either measures the result or hands it to a [`DrawingSink`] as
//! one glyph run.
//!
//! ## The Path of a Write
//!
//! 1. **Decoding** - UTF-16 code units become codepoints, surrogate pairs
//!    collapse, malformed units turn into `?`
//! 2. **Resolution** - Codepoints become glyph ids and scaled advances
//! 3. **Placement** - Alignment moves the run origin, rotation pivots on the
//!    caller's origin
//! 4. **Emission** - One paint call against the sink, and the point where the
//!    next piece of text should start
//!
//! ## Quick Look
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use glyphrun_core::{Color, GlyphDrawer, WriteOptions};
//! use glyphrun_core::types::Point;
//!
//! # use glyphrun_core::traits::*;
//! # use glyphrun_core::types::*;
//! # struct MyFace;
//! # impl FontFace for MyFace {
//! #     fn data(&self) -> &[u8] { &[] }
//! #     fn units_per_em(&self) -> u16 { 1000 }
//! #     fn glyph_id(&self, _: char) -> Option<GlyphId> { None }
//! #     fn advance_width(&self, _: GlyphId) -> f32 { 0.5 }
//! #     fn advance_height(&self, _: GlyphId) -> f32 { 1.0 }
//! #     fn line_metrics(&self) -> LineMetrics { LineMetrics::default() }
//! # }
//! # struct MySink;
//! # impl DrawingSink for MySink {
//! #     fn draw_glyph_run(&mut self, _: Color, _: &GlyphRun<'_>) -> glyphrun_core::Result<()> { Ok(()) }
//! #     fn push_rotation(&mut self, _: f32, _: Point) -> glyphrun_core::Result<()> { Ok(()) }
//! #     fn pop(&mut self) -> glyphrun_core::Result<()> { Ok(()) }
//! # }
//! let drawer = GlyphDrawer::from_face(Arc::new(MyFace), 1.0);
//! let mut sink = MySink;
//!
//! let next = drawer.write(
//!     &mut sink,
//!     Point::new(10.0, 40.0),
//!     "Hello, ",
//!     12.0,
//!     Color::black(),
//!     &WriteOptions::default(),
//! )?;
//! drawer.write(&mut sink, next, "World", 12.0, Color::black(), &WriteOptions::default())?;
//! # Ok::<(), glyphrun_core::TypefaceError>(())
//! ```
//!
//! ## The Seams
//!
//! - [`traits::FontFace`] - Glyph lookup and metrics of one face
//! - [`traits::FaceProvider`] - Resolves family, style, weight and stretch to a face
//! - [`traits::DrawingSink`] - Receives glyph runs and rotation transforms

pub mod decode;
pub mod diagnostics;
pub mod drawer;
pub mod error;
pub mod geometry;
pub mod glyphs;
pub mod layout;
pub mod traits;

#[cfg(test)]
mod proptests;

pub use drawer::{Alignment, GlyphDrawer, WriteOptions};
pub use error::{FaceResolutionError, RenderError, Result, TypefaceError};
pub use glyphs::GlyphSequence;
pub use traits::{DrawingSink, FaceProvider, FontFace};

/// The data structures that travel between the drawer and its host
pub mod types {
    use crate::traits::FontFace;

    /// Glyph index within a font face
    pub type GlyphId = u32;

    /// A position in device-independent units, y growing downwards
    #[derive(Debug, Clone, Copy, PartialEq, Default)]
    pub struct Point {
        pub x: f32,
        pub y: f32,
    }

    impl Point {
        pub const fn new(x: f32, y: f32) -> Self {
            Self { x, y }
        }
    }

    /// Width and height of a measured piece of text
    #[derive(Debug, Clone, Copy, PartialEq, Default)]
    pub struct Size {
        pub width: f32,
        pub height: f32,
    }

    impl Size {
        pub const fn new(width: f32, height: f32) -> Self {
            Self { width, height }
        }
    }

    /// Vertical metrics of a face, in em units
    ///
    /// `descent` is positive below the baseline.
    #[derive(Debug, Clone, Copy, PartialEq)]
    pub struct LineMetrics {
        pub ascent: f32,
        pub descent: f32,
        pub line_gap: f32,
    }

    impl LineMetrics {
        /// Distance from one baseline to the next
        pub fn line_spacing(&self) -> f32 {
            self.ascent + self.descent + self.line_gap
        }
    }

    impl Default for LineMetrics {
        fn default() -> Self {
            Self {
                ascent: 0.8,
                descent: 0.2,
                line_gap: 0.0,
            }
        }
    }

    /// Glyphs ready for one paint operation
    ///
    /// `glyph_ids` and `advances` always have the same length. The baseline
    /// origin already includes the alignment shift.
    #[derive(Clone, Copy)]
    pub struct GlyphRun<'a> {
        pub face: &'a dyn FontFace,
        pub em_size: f32,
        pub pixels_per_dip: f32,
        pub is_sideways: bool,
        pub baseline_origin: Point,
        pub glyph_ids: &'a [GlyphId],
        pub advances: &'a [f32],
    }

    impl GlyphRun<'_> {
        /// Sum of all advances in the run
        pub fn total_advance(&self) -> f32 {
            self.advances.iter().sum()
        }
    }

    impl std::fmt::Debug for GlyphRun<'_> {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            f.debug_struct("GlyphRun")
                .field("em_size", &self.em_size)
                .field("pixels_per_dip", &self.pixels_per_dip)
                .field("is_sideways", &self.is_sideways)
                .field("baseline_origin", &self.baseline_origin)
                .field("glyph_ids", &self.glyph_ids)
                .field("advances", &self.advances)
                .finish_non_exhaustive()
        }
    }
}

/// Slant of a typeface
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FontStyle {
    #[default]
    Normal,
    Italic,
    Oblique,
}

/// Stroke thickness on the usual 1..=1000 scale
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FontWeight(pub u16);

impl FontWeight {
    pub const THIN: Self = Self(100);
    pub const LIGHT: Self = Self(300);
    pub const NORMAL: Self = Self(400);
    pub const MEDIUM: Self = Self(500);
    pub const SEMI_BOLD: Self = Self(600);
    pub const BOLD: Self = Self(700);
    pub const BLACK: Self = Self(900);
}

impl Default for FontWeight {
    fn default() -> Self {
        Self::NORMAL
    }
}

/// Horizontal width class of a typeface
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum FontStretch {
    UltraCondensed,
    ExtraCondensed,
    Condensed,
    SemiCondensed,
    #[default]
    Normal,
    SemiExpanded,
    Expanded,
    ExtraExpanded,
    UltraExpanded,
}

/// What the host asks for when it needs a face
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FaceQuery {
    pub family: String,
    pub style: FontStyle,
    pub weight: FontWeight,
    pub stretch: FontStretch,
}

impl FaceQuery {
    /// A regular face of the given family
    pub fn family(family: impl Into<String>) -> Self {
        Self {
            family: family.into(),
            ..Default::default()
        }
    }

    pub fn with_style(mut self, style: FontStyle) -> Self {
        self.style = style;
        self
    }

    pub fn with_weight(mut self, weight: FontWeight) -> Self {
        self.weight = weight;
        self
    }

    pub fn with_stretch(mut self, stretch: FontStretch) -> Self {
        self.stretch = stretch;
        self
    }
}

impl Default for FaceQuery {
    fn default() -> Self {
        Self {
            family: "sans-serif".to_string(),
            style: FontStyle::Normal,
            weight: FontWeight::NORMAL,
            stretch: FontStretch::Normal,
        }
    }
}

/// Simple RGBA color used as the paint brush
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn black() -> Self {
        Self::rgba(0, 0, 0, 255)
    }

    pub const fn white() -> Self {
        Self::rgba(255, 255, 255, 255)
    }

    /// Parse `#rrggbb` or `#rrggbbaa` (the `#` is optional)
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        if !hex.is_ascii() {
            return None;
        }
        let channel = |i: usize| u8::from_str_radix(hex.get(i..i + 2)?, 16).ok();
        match hex.len() {
            6 => Some(Self::rgba(channel(0)?, channel(2)?, channel(4)?, 255)),
            8 => Some(Self::rgba(channel(0)?, channel(2)?, channel(4)?, channel(6)?)),
            _ => None,
        }
    }

    /// `#rrggbb` form, alpha dropped
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::black()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_from_hex() {
        assert_eq!(Color::from_hex("#ff0000"), Some(Color::rgba(255, 0, 0, 255)));
        assert_eq!(Color::from_hex("00ff0080"), Some(Color::rgba(0, 255, 0, 128)));
        assert_eq!(Color::from_hex("#fff"), None);
        assert_eq!(Color::from_hex("#gg0000"), None);
        assert_eq!(Color::rgba(1, 2, 3, 4).to_hex(), "#010203");
    }

    #[test]
    fn test_face_query_builder() {
        let query = FaceQuery::family("Serif")
            .with_style(FontStyle::Italic)
            .with_weight(FontWeight::BOLD)
            .with_stretch(FontStretch::Condensed);

        assert_eq!(query.family, "Serif");
        assert_eq!(query.style, FontStyle::Italic);
        assert_eq!(query.weight, FontWeight(700));
        assert_eq!(query.stretch, FontStretch::Condensed);
        assert_eq!(FaceQuery::default().family, "sans-serif");
    }

    #[test]
    fn test_line_spacing() {
        let metrics = types::LineMetrics {
            ascent: 0.9,
            descent: 0.25,
            line_gap: 0.1,
        };
        assert!((metrics.line_spacing() - 1.25).abs() < 1e-6);
    }
}
