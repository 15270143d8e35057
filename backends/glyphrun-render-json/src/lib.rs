//! JSON Recorder - When you need to see what the drawer really did
//!
//! Sometimes pixels aren't enough. This sink keeps every command it receives
//! and turns the log into JSON, which makes it the sink of choice for tests,
//! debugging and feeding glyph runs into other systems.

use serde::{Deserialize, Serialize};

use glyphrun_core::{
    error::{RenderError, Result},
    geometry,
    traits::DrawingSink,
    types::{GlyphId, GlyphRun, Point},
    Color,
};

/// Schema version for JSON output format
pub const JSON_SCHEMA_VERSION: &str = "1.0";

/// One glyph run as it arrived at the sink
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GlyphRunRecord {
    pub color: String, // #rrggbb
    pub alpha: u8,
    pub em_size: f32,
    pub pixels_per_dip: f32,
    pub sideways: bool,
    pub origin: [f32; 2], // Baseline origin in the current transform
    pub page_origin: [f32; 2], // Same point with every open rotation applied
    pub glyphs: Vec<GlyphId>,
    pub advances: Vec<f32>,
    pub advance: f32,
}

/// Everything a sink can be asked to do
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum DrawCommand {
    PushRotation { angle: f32, cx: f32, cy: f32 },
    DrawGlyphRun(GlyphRunRecord),
    Pop,
}

/// The complete command log
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonOutput {
    /// Schema version for forward compatibility
    pub schema_version: String,
    pub commands: Vec<DrawCommand>,
}

/// A sink that remembers instead of painting
#[derive(Debug, Default)]
pub struct JsonRecorder {
    commands: Vec<DrawCommand>,
    rotations: Vec<(f32, Point)>,
}

impl JsonRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every command received so far, in order
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Only the glyph runs
    pub fn glyph_runs(&self) -> impl Iterator<Item = &GlyphRunRecord> {
        self.commands.iter().filter_map(|command| match command {
            DrawCommand::DrawGlyphRun(run) => Some(run),
            _ => None,
        })
    }

    /// Rotations pushed but not popped yet
    pub fn open_transforms(&self) -> usize {
        self.rotations.len()
    }

    pub fn clear(&mut self) {
        self.commands.clear();
        self.rotations.clear();
    }

    /// Map a point in the current transform to page coordinates
    fn to_page(&self, point: Point) -> Point {
        self.rotations
            .iter()
            .rev()
            .fold(point, |p, &(angle, center)| geometry::rotate_about(p, center, angle))
    }

    pub fn to_output(&self) -> JsonOutput {
        JsonOutput {
            schema_version: JSON_SCHEMA_VERSION.to_string(),
            commands: self.commands.clone(),
        }
    }

    /// The command log as pretty JSON
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(&self.to_output())
            .map_err(|e| RenderError::Serialization(e.to_string()).into())
    }
}

impl DrawingSink for JsonRecorder {
    fn draw_glyph_run(&mut self, brush: Color, run: &GlyphRun<'_>) -> Result<()> {
        log::debug!("JsonRecorder: recording run of {} glyphs", run.glyph_ids.len());

        let origin = run.baseline_origin;
        let page_origin = self.to_page(origin);
        self.commands.push(DrawCommand::DrawGlyphRun(GlyphRunRecord {
            color: brush.to_hex(),
            alpha: brush.a,
            em_size: run.em_size,
            pixels_per_dip: run.pixels_per_dip,
            sideways: run.is_sideways,
            origin: [origin.x, origin.y],
            page_origin: [page_origin.x, page_origin.y],
            glyphs: run.glyph_ids.to_vec(),
            advances: run.advances.to_vec(),
            advance: run.total_advance(),
        }));
        Ok(())
    }

    fn push_rotation(&mut self, angle: f32, center: Point) -> Result<()> {
        self.rotations.push((angle, center));
        self.commands.push(DrawCommand::PushRotation {
            angle,
            cx: center.x,
            cy: center.y,
        });
        Ok(())
    }

    fn pop(&mut self) -> Result<()> {
        self.rotations.pop().ok_or(RenderError::UnbalancedTransform)?;
        self.commands.push(DrawCommand::Pop);
        Ok(())
    }
}
