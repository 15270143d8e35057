//! Error types for glyphrun

use thiserror::Error;

pub type Result<T> = std::result::Result<T, TypefaceError>;

/// Main error type for glyphrun
#[derive(Debug, Error)]
pub enum TypefaceError {
    #[error("Face resolution failed: {0}")]
    FaceResolution(#[from] FaceResolutionError),

    #[error("No glyph for code unit U+{unit:04X} at index {index}")]
    MissingGlyph { unit: u16, index: usize },

    #[error("Rendering failed: {0}")]
    Render(#[from] RenderError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Other error: {0}")]
    Other(String),
}

impl From<std::fmt::Error> for TypefaceError {
    fn from(err: std::fmt::Error) -> Self {
        Self::Render(RenderError::Formatting(err))
    }
}

/// Why a face could not be resolved
#[derive(Debug, Error)]
pub enum FaceResolutionError {
    #[error("Font file not found: {0}")]
    FileNotFound(String),

    #[error("Invalid font data")]
    InvalidData,

    #[error("No face matches {0}")]
    NoMatchingFace(String),

    #[error("Face has no glyph outline data")]
    NoGlyphData,
}

/// Drawing sink errors
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Invalid font data for outline extraction")]
    InvalidFont,

    #[error("Outline extraction failed for glyph {0}")]
    OutlineExtractionFailed(u32),

    #[error("Pop without a matching push")]
    UnbalancedTransform,

    #[error("Output formatting failed")]
    Formatting(#[from] std::fmt::Error),

    #[error("Serialization failed: {0}")]
    Serialization(String),
}
