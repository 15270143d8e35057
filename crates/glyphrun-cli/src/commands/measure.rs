//! Measure command implementation
//!
//! Reports all three measurements as JSON, so their differences are visible.

use anyhow::{Context, Result};
use serde::Serialize;
use std::sync::Arc;

use glyphrun::{traits::FontFace, GlyphDrawer};

use crate::cli::MeasureArgs;
use crate::face::load_face;

#[derive(Debug, Serialize)]
struct TextMeasurement {
    text: String,
    /// None when a code unit has no glyph
    length: Option<f32>,
    width: f32,
    height: f32,
}

#[derive(Debug, Serialize)]
struct MeasureReport {
    family: Option<String>,
    size: f32,
    max_length: Option<f32>,
    texts: Vec<TextMeasurement>,
}

pub fn run(args: &MeasureArgs) -> Result<()> {
    let face = load_face(&args.face)?;
    let family = face.family_name().map(str::to_owned);
    let drawer = GlyphDrawer::from_face(Arc::new(face), 1.0);

    let report = measure(&drawer, family, &args.texts, args.size);
    let json = if args.compact {
        serde_json::to_string(&report)
    } else {
        serde_json::to_string_pretty(&report)
    }
    .context("Failed to serialize measurements")?;
    println!("{json}");
    Ok(())
}

fn measure(drawer: &GlyphDrawer, family: Option<String>, texts: &[String], size: f32) -> MeasureReport {
    let texts = texts
        .iter()
        .map(|text| {
            let length = drawer
                .get_length(text, size)
                .map_err(|e| log::warn!("{text:?}: {e}"))
                .ok();
            let extent = drawer.measure_string(text, size);
            TextMeasurement {
                text: text.clone(),
                length,
                width: extent.width,
                height: extent.height,
            }
        })
        .collect::<Vec<_>>();
    let max_length = drawer.get_max_length(texts.iter().map(|m| m.text.as_str()), size).ok();

    MeasureReport {
        family,
        size,
        max_length,
        texts,
    }
}
