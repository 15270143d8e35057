// this_file: crates/glyphrun-fontdb/src/database.rs

//! Face resolution over `fontdb`

use std::path::Path;
use std::sync::Arc;

use glyphrun_core::{
    error::{FaceResolutionError, Result},
    traits::{FaceProvider, FontFace},
    FaceQuery, FontStretch, FontStyle,
};

use crate::TypefaceFace;

/// Your font library: every face that can be resolved
pub struct FontDatabase {
    db: fontdb::Database,
}

impl FontDatabase {
    /// Starts with an empty library
    pub fn new() -> Self {
        Self {
            db: fontdb::Database::new(),
        }
    }

    /// A library pre-filled with the fonts installed on this system
    pub fn with_system_fonts() -> Self {
        let mut database = Self::new();
        database.load_system_fonts();
        database
    }

    pub fn load_system_fonts(&mut self) {
        self.db.load_system_fonts();
        log::debug!("FontDatabase: {} faces after loading system fonts", self.db.len());
    }

    /// Adds every face of one font file
    pub fn load_font_file(&mut self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        self.db
            .load_font_file(path)
            .map_err(|_| FaceResolutionError::FileNotFound(path.display().to_string()))?;
        Ok(())
    }

    /// Adds every font found under a directory
    pub fn load_fonts_dir(&mut self, dir: impl AsRef<Path>) {
        self.db.load_fonts_dir(dir);
    }

    /// Adds a font from memory
    pub fn load_font_data(&mut self, data: Vec<u8>) {
        self.db.load_font_data(data);
    }

    /// Number of faces known
    pub fn face_count(&self) -> usize {
        self.db.len()
    }

    pub fn is_empty(&self) -> bool {
        self.db.is_empty()
    }

    /// Names of all known families, sorted and deduplicated
    pub fn family_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self
            .db
            .faces()
            .filter_map(|face| face.families.first().map(|(name, _)| name.clone()))
            .collect();
        names.sort();
        names.dedup();
        names
    }

    /// Resolve `query` to a concrete face
    pub fn resolve_face(&self, query: &FaceQuery) -> Result<TypefaceFace> {
        let families = [family_of(&query.family)];
        let fontdb_query = fontdb::Query {
            families: &families,
            weight: fontdb::Weight(query.weight.0),
            stretch: stretch_of(query.stretch),
            style: style_of(query.style),
        };

        let id = self
            .db
            .query(&fontdb_query)
            .ok_or_else(|| FaceResolutionError::NoMatchingFace(describe(query)))?;

        let family_name = self
            .db
            .face(id)
            .and_then(|info| info.families.first().map(|(name, _)| name.clone()));

        let (data, index) = self
            .db
            .with_face_data(id, |data, index| (data.to_vec(), index))
            .ok_or(FaceResolutionError::InvalidData)?;

        let face = TypefaceFace::from_data_index(data, index)?;
        Ok(match family_name {
            Some(name) => face.with_family_name(name),
            None => face,
        })
    }
}

impl FaceProvider for FontDatabase {
    fn resolve(&self, query: &FaceQuery) -> Result<Arc<dyn FontFace>> {
        Ok(Arc::new(self.resolve_face(query)?))
    }
}

impl Default for FontDatabase {
    fn default() -> Self {
        Self::new()
    }
}

/// Generic family keywords map to fontdb's generic families
fn family_of(name: &str) -> fontdb::Family<'_> {
    match name.to_ascii_lowercase().as_str() {
        "serif" => fontdb::Family::Serif,
        "sans-serif" | "sans" => fontdb::Family::SansSerif,
        "monospace" => fontdb::Family::Monospace,
        "cursive" => fontdb::Family::Cursive,
        "fantasy" => fontdb::Family::Fantasy,
        _ => fontdb::Family::Name(name),
    }
}

fn style_of(style: FontStyle) -> fontdb::Style {
    match style {
        FontStyle::Normal => fontdb::Style::Normal,
        FontStyle::Italic => fontdb::Style::Italic,
        FontStyle::Oblique => fontdb::Style::Oblique,
    }
}

fn stretch_of(stretch: FontStretch) -> fontdb::Stretch {
    match stretch {
        FontStretch::UltraCondensed => fontdb::Stretch::UltraCondensed,
        FontStretch::ExtraCondensed => fontdb::Stretch::ExtraCondensed,
        FontStretch::Condensed => fontdb::Stretch::Condensed,
        FontStretch::SemiCondensed => fontdb::Stretch::SemiCondensed,
        FontStretch::Normal => fontdb::Stretch::Normal,
        FontStretch::SemiExpanded => fontdb::Stretch::SemiExpanded,
        FontStretch::Expanded => fontdb::Stretch::Expanded,
        FontStretch::ExtraExpanded => fontdb::Stretch::ExtraExpanded,
        FontStretch::UltraExpanded => fontdb::Stretch::UltraExpanded,
    }
}

fn describe(query: &FaceQuery) -> String {
    format!(
        "{} ({:?}, weight {}, {:?})",
        query.family, query.style, query.weight.0, query.stretch
    )
}
