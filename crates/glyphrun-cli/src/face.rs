//! Face loading shared by every command

use anyhow::{Context, Result};

use glyphrun::{fontdb::FontDatabase, fontdb::TypefaceFace, FaceQuery, FontWeight};

use crate::cli::FaceArgs;

impl FaceArgs {
    pub fn query(&self) -> FaceQuery {
        FaceQuery::family(self.family.as_str())
            .with_style(self.style.into())
            .with_weight(FontWeight(self.weight))
            .with_stretch(self.stretch.into())
    }
}

/// A font file when one is given, otherwise the best system match
pub fn load_face(args: &FaceArgs) -> Result<TypefaceFace> {
    if let Some(path) = &args.font_file {
        log::debug!("Loading face {} from {}", args.face_index, path.display());
        return TypefaceFace::from_file_index(path, args.face_index)
            .with_context(|| format!("Failed to load font {}", path.display()));
    }

    let query = args.query();
    let db = FontDatabase::with_system_fonts();
    log::debug!("System font database holds {} faces", db.face_count());
    db.resolve_face(&query)
        .with_context(|| format!("No system face for family {:?}", query.family))
}
