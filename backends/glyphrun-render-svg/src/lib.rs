//! SVG Canvas: where glyph runs become scalable vector paths
//!
//! The canvas is a [`DrawingSink`]. Every glyph of a run is pulled out of
//! the font as outline curves and written as an SVG path, so the result
//! scales without quality loss.
//!
//! ## How it works
//!
//! 1. Receives a glyph run from the drawer
//! 2. Extracts outline curves from the run's face using skrifa
//! 3. Converts curves to SVG path commands, one `<path>` per glyph
//! 4. Rotations become nested `<g transform="rotate(..)">` groups

use skrifa::MetadataProvider;
use std::fmt::Write as FmtWrite;

use glyphrun_core::{
    error::{RenderError, Result},
    traits::{DrawingSink, FontFace},
    types::{GlyphRun, Point},
    Color,
};

/// SVG document under construction
#[derive(Debug)]
pub struct SvgCanvas {
    width: f32,
    height: f32,
    background: Option<Color>,
    body: String,
    /// Open `<g>` groups, one per pushed rotation
    depth: usize,
}

impl SvgCanvas {
    /// Create an empty canvas of the given size
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            background: None,
            body: String::new(),
            depth: 0,
        }
    }

    /// Fill the canvas with a solid background
    pub fn with_background(mut self, color: Color) -> Self {
        self.background = Some(color);
        self
    }

    /// Rotations pushed but not popped yet
    pub fn open_transforms(&self) -> usize {
        self.depth
    }

    /// Draw a crosshair of half-length `arm` centred on `point`
    pub fn mark_anchor(&mut self, point: Point, arm: f32, color: Color) -> Result<()> {
        self.line(Point::new(point.x - arm, point.y), Point::new(point.x + arm, point.y), color)?;
        self.line(Point::new(point.x, point.y - arm), Point::new(point.x, point.y + arm), color)
    }

    /// Draw a 1-unit line between two points
    pub fn line(&mut self, from: Point, to: Point, color: Color) -> Result<()> {
        writeln!(
            &mut self.body,
            r#"{}<line x1="{:.2}" y1="{:.2}" x2="{:.2}" y2="{:.2}" stroke="{}" stroke-opacity="{:.2}" stroke-width="1"/>"#,
            indent(self.depth),
            from.x,
            from.y,
            to.x,
            to.y,
            color.to_hex(),
            f32::from(color.a) / 255.0
        )?;
        Ok(())
    }

    /// Close any open groups and return the complete document
    pub fn finish(mut self) -> Result<String> {
        while self.depth > 0 {
            self.pop()?;
        }

        let mut svg = String::new();
        writeln!(&mut svg, r#"<?xml version="1.0" encoding="UTF-8"?>"#)?;
        writeln!(
            &mut svg,
            r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {:.2} {:.2}" width="{:.0}" height="{:.0}">"#,
            self.width, self.height, self.width, self.height
        )?;
        if let Some(bg) = self.background {
            writeln!(
                &mut svg,
                r#"  <rect width="100%" height="100%" fill="{}"/>"#,
                bg.to_hex()
            )?;
        }
        svg.push_str(&self.body);
        writeln!(&mut svg, "</svg>")?;
        Ok(svg)
    }
}

fn indent(depth: usize) -> String {
    "  ".repeat(depth + 1)
}

impl DrawingSink for SvgCanvas {
    fn draw_glyph_run(&mut self, brush: Color, run: &GlyphRun<'_>) -> Result<()> {
        log::debug!("SvgCanvas: drawing {} glyphs as vector paths", run.glyph_ids.len());

        let scale = run.em_size / f32::from(run.face.units_per_em());
        let fill = brush.to_hex();
        let opacity = f32::from(brush.a) / 255.0;
        let mut pen_x = run.baseline_origin.x;

        for (&glyph_id, &advance) in run.glyph_ids.iter().zip(run.advances) {
            let path = extract_glyph_path(run.face, glyph_id, scale)?;

            // Glyphs without an outline (spaces) only advance the pen
            if !path.is_empty() {
                let transform = glyph_transform(run, glyph_id, pen_x);
                writeln!(
                    &mut self.body,
                    r#"{}<path d="{}" fill="{}" fill-opacity="{:.2}" transform="{}"/>"#,
                    indent(self.depth),
                    path,
                    fill,
                    opacity,
                    transform
                )?;
            }
            pen_x += advance;
        }
        Ok(())
    }

    fn push_rotation(&mut self, angle: f32, center: Point) -> Result<()> {
        writeln!(
            &mut self.body,
            r#"{}<g transform="rotate({:.4} {:.2} {:.2})">"#,
            indent(self.depth),
            angle,
            center.x,
            center.y
        )?;
        self.depth += 1;
        Ok(())
    }

    fn pop(&mut self) -> Result<()> {
        if self.depth == 0 {
            return Err(RenderError::UnbalancedTransform.into());
        }
        self.depth -= 1;
        writeln!(&mut self.body, "{}</g>", indent(self.depth))?;
        Ok(())
    }
}

/// Placement of one glyph whose pen position is `pen_x` on the run baseline
///
/// A sideways glyph is turned a quarter counter-clockwise so its top faces
/// the start of the run. It is then shifted by the ascent so the ink fills
/// the slot `[pen_x, pen_x + advance]`, and its own width is centred on the
/// baseline.
fn glyph_transform(run: &GlyphRun<'_>, glyph_id: u32, pen_x: f32) -> String {
    let y = run.baseline_origin.y;
    if !run.is_sideways {
        return format!("translate({pen_x:.2},{y:.2})");
    }

    let ascent = run.face.line_metrics().ascent * run.em_size;
    let half_width = run.face.advance_width(glyph_id) * run.em_size / 2.0;
    format!(
        "translate({:.2},{:.2}) rotate(-90)",
        pen_x + ascent,
        y + half_width
    )
}

/// Extract one glyph outline as an SVG path string, y flipped for SVG
fn extract_glyph_path(face: &dyn FontFace, glyph_id: u32, scale: f32) -> Result<String> {
    let font_ref = skrifa::FontRef::from_index(face.data(), face.face_index())
        .map_err(|_| RenderError::InvalidFont)?;

    let outlines = font_ref.outline_glyphs();
    let Some(glyph) = outlines.get(skrifa::GlyphId::new(glyph_id)) else {
        return Ok(String::new());
    };

    let mut path_builder = SvgPathBuilder::new(scale);
    let size = skrifa::instance::Size::unscaled();
    let location = skrifa::instance::LocationRef::default();
    let settings = skrifa::outline::DrawSettings::unhinted(size, location);

    glyph
        .draw(settings, &mut path_builder)
        .map_err(|_| RenderError::OutlineExtractionFailed(glyph_id))?;

    Ok(path_builder.finish())
}

/// SVG path builder implementing skrifa's OutlinePen
struct SvgPathBuilder {
    commands: String,
    scale: f32,
}

impl SvgPathBuilder {
    fn new(scale: f32) -> Self {
        Self {
            commands: String::new(),
            scale,
        }
    }

    /// Scaled and y-flipped; `+ 0.0` turns `-0.0` into `0.0` so paths never print `-0.00`
    fn point(&self, x: f32, y: f32) -> (f32, f32) {
        (x * self.scale + 0.0, -y * self.scale + 0.0)
    }

    fn finish(self) -> String {
        self.commands
    }
}

impl skrifa::outline::OutlinePen for SvgPathBuilder {
    fn move_to(&mut self, x: f32, y: f32) {
        let (x, y) = self.point(x, y);
        let _ = write!(&mut self.commands, "M{:.2},{:.2}", x, y);
    }

    fn line_to(&mut self, x: f32, y: f32) {
        let (x, y) = self.point(x, y);
        let _ = write!(&mut self.commands, "L{:.2},{:.2}", x, y);
    }

    fn quad_to(&mut self, cx: f32, cy: f32, x: f32, y: f32) {
        let (cx, cy) = self.point(cx, cy);
        let (x, y) = self.point(x, y);
        let _ = write!(&mut self.commands, "Q{:.2},{:.2} {:.2},{:.2}", cx, cy, x, y);
    }

    fn curve_to(&mut self, cx0: f32, cy0: f32, cx1: f32, cy1: f32, x: f32, y: f32) {
        let (cx0, cy0) = self.point(cx0, cy0);
        let (cx1, cy1) = self.point(cx1, cy1);
        let (x, y) = self.point(x, y);
        let _ = write!(
            &mut self.commands,
            "C{:.2},{:.2} {:.2},{:.2} {:.2},{:.2}",
            cx0, cy0, cx1, cy1, x, y
        );
    }

    fn close(&mut self) {
        self.commands.push('Z');
    }
}
