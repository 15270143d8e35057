//! Where faces come from: resolution and metrics for glyphrun
//!
//! [`FontDatabase`] turns a family, style, weight and stretch into one
//! [`TypefaceFace`], which answers glyph and metric questions straight from
//! the font tables.
//!
//! ## Memory Management
//!
//! A face stores its raw bytes for sinks that extract outlines. Everything
//! the drawer asks per glyph (the character map, advance widths and heights)
//! is decoded once at construction, so lookups never touch the font tables.

mod database;

pub use database::FontDatabase;

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use read_fonts::{
    types::{GlyphId, Tag},
    FontRef as ReadFontRef, TableProvider,
};
use skrifa::MetadataProvider;

use glyphrun_core::{
    error::{FaceResolutionError, Result},
    traits::FontFace,
    types::LineMetrics,
};

/// Tables that carry glyph outlines
const OUTLINE_TABLES: [&[u8; 4]; 3] = [b"glyf", b"CFF ", b"CFF2"];

/// A face brought into memory, ready to be drawn with
pub struct TypefaceFace {
    data: Vec<u8>,
    face_index: u32,
    units_per_em: u16,
    line_metrics: LineMetrics,
    /// `ascent + descent`, used when the face has no `vmtx`
    default_advance_height: f32,
    has_vertical_metrics: bool,
    family_name: Option<String>,
    glyph_count: u32,
    /// Codepoint to glyph id, from the face's preferred cmap subtable
    charmap: HashMap<u32, u32>,
    /// Design-unit advances indexed by glyph id
    advance_widths: Vec<u16>,
    /// Present only when the face has `vmtx`
    advance_heights: Option<Vec<u16>>,
}

impl TypefaceFace {
    /// Opens a font file from disk
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        Self::from_file_index(path, 0)
    }

    /// Opens a specific face of a font file (for TTC collections)
    pub fn from_file_index(path: impl AsRef<Path>, face_index: u32) -> Result<Self> {
        let data = fs::read(path.as_ref())
            .map_err(|_| FaceResolutionError::FileNotFound(path.as_ref().display().to_string()))?;

        Self::from_data_index(data, face_index)
    }

    /// Turns raw font bytes into a face
    pub fn from_data(data: Vec<u8>) -> Result<Self> {
        Self::from_data_index(data, 0)
    }

    /// Turns raw font bytes into a specific face (for TTC collections)
    ///
    /// Fails when the data does not parse or carries no glyph outlines.
    pub fn from_data_index(data: Vec<u8>, face_index: u32) -> Result<Self> {
        let font_ref =
            ReadFontRef::from_index(&data, face_index).map_err(|_| FaceResolutionError::InvalidData)?;

        let has_outlines = OUTLINE_TABLES
            .iter()
            .any(|tag| font_ref.table_data(Tag::new(tag)).is_some());
        if !has_outlines {
            return Err(FaceResolutionError::NoGlyphData.into());
        }

        let units_per_em = font_ref
            .head()
            .map(|head| head.units_per_em())
            .ok()
            .filter(|&upem| upem > 0)
            .unwrap_or(1000);
        let upem = f32::from(units_per_em);

        // OS/2 typographic metrics first, hhea when OS/2 is missing
        let (ascent, descent, line_gap) = font_ref
            .os2()
            .ok()
            .map(|os2| {
                (
                    os2.s_typo_ascender(),
                    os2.s_typo_descender(),
                    os2.s_typo_line_gap(),
                )
            })
            .or_else(|| {
                font_ref.hhea().ok().map(|hhea| {
                    (
                        hhea.ascender().to_i16(),
                        hhea.descender().to_i16(),
                        hhea.line_gap().to_i16(),
                    )
                })
            })
            .unwrap_or((800, -200, 0));

        let line_metrics = LineMetrics {
            ascent: f32::from(ascent) / upem,
            descent: -f32::from(descent) / upem,
            line_gap: f32::from(line_gap) / upem,
        };
        let glyph_count = font_ref.maxp().map(|maxp| u32::from(maxp.num_glyphs())).unwrap_or(0);

        let charmap: HashMap<u32, u32> = font_ref
            .charmap()
            .mappings()
            // cmap maps unknown codepoints to .notdef in some fonts
            .filter(|(_, gid)| gid.to_u32() != 0)
            .map(|(codepoint, gid)| (codepoint, gid.to_u32()))
            .collect();

        let advance_widths = match font_ref.hmtx() {
            Ok(hmtx) => (0..glyph_count)
                .map(|gid| hmtx.advance(GlyphId::new(gid)).unwrap_or(0))
                .collect(),
            Err(_) => Vec::new(),
        };
        let advance_heights = font_ref.vmtx().ok().map(|vmtx| {
            (0..glyph_count)
                .map(|gid| vmtx.advance(GlyphId::new(gid)).unwrap_or(0))
                .collect::<Vec<u16>>()
        });
        let has_vertical_metrics = advance_heights.is_some();

        log::debug!(
            "TypefaceFace: {} bytes, face {}, upem {}, {} glyphs, {} mapped codepoints, vmtx {}",
            data.len(),
            face_index,
            units_per_em,
            glyph_count,
            charmap.len(),
            has_vertical_metrics
        );

        Ok(Self {
            data,
            face_index,
            units_per_em,
            default_advance_height: line_metrics.ascent + line_metrics.descent,
            line_metrics,
            has_vertical_metrics,
            family_name: None,
            glyph_count,
            charmap,
            advance_widths,
            advance_heights,
        })
    }

    /// Attach the family name the face was found under
    pub fn with_family_name(mut self, name: impl Into<String>) -> Self {
        self.family_name = Some(name.into());
        self
    }

    /// Whether advance heights come from a `vmtx` table
    pub fn has_vertical_metrics(&self) -> bool {
        self.has_vertical_metrics
    }

    fn to_em(&self, units: u16) -> f32 {
        f32::from(units) / f32::from(self.units_per_em)
    }
}

impl FontFace for TypefaceFace {
    fn data(&self) -> &[u8] {
        &self.data
    }

    fn face_index(&self) -> u32 {
        self.face_index
    }

    fn units_per_em(&self) -> u16 {
        self.units_per_em
    }

    fn glyph_id(&self, ch: char) -> Option<u32> {
        self.charmap.get(&u32::from(ch)).copied()
    }

    fn advance_width(&self, glyph_id: u32) -> f32 {
        self.advance_widths
            .get(glyph_id as usize)
            .map(|&advance| self.to_em(advance))
            .unwrap_or(0.5)
    }

    fn advance_height(&self, glyph_id: u32) -> f32 {
        self.advance_heights
            .as_ref()
            .and_then(|heights| heights.get(glyph_id as usize))
            .map(|&advance| self.to_em(advance))
            .unwrap_or(self.default_advance_height)
    }

    fn line_metrics(&self) -> LineMetrics {
        self.line_metrics
    }

    fn glyph_count(&self) -> Option<u32> {
        (self.glyph_count > 0).then_some(self.glyph_count)
    }

    fn family_name(&self) -> Option<&str> {
        self.family_name.as_deref()
    }
}

impl std::fmt::Debug for TypefaceFace {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TypefaceFace")
            .field("family_name", &self.family_name)
            .field("face_index", &self.face_index)
            .field("units_per_em", &self.units_per_em)
            .field("line_metrics", &self.line_metrics)
            .field("has_vertical_metrics", &self.has_vertical_metrics)
            .field("glyph_count", &self.glyph_count)
            .finish_non_exhaustive()
    }
}
