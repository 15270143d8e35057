//! Draw command implementation
//!
//! Writes every text starting at the previous text's next point, then
//! exports the sink as SVG or as the JSON command log.

use anyhow::{anyhow, Context, Result};
use std::fs::File;
use std::io::{self, Write};
use std::sync::Arc;

use glyphrun::{
    render_json::JsonRecorder,
    render_svg::SvgCanvas,
    traits::DrawingSink,
    types::Point,
    Alignment, Color, GlyphDrawer, WriteOptions,
};

use crate::cli::{DrawArgs, OutputFormat};
use crate::face::load_face;

const ANCHOR_ARM: f32 = 6.0;

pub fn run(args: &DrawArgs) -> Result<()> {
    let face = load_face(&args.face)?;
    let drawer = GlyphDrawer::from_face(Arc::new(face), args.pixels_per_dip);
    log::debug!("Drawing with {drawer:?}");

    let brush = parse_color(&args.color)?;
    let options = write_options(args);
    let origin = Point::new(args.x, args.y);

    let (output, next) = match args.format {
        OutputFormat::Svg => {
            let mut canvas = SvgCanvas::new(args.width, args.height);
            if let Some(background) = &args.background {
                canvas = canvas.with_background(parse_color(background)?);
            }
            if args.axes {
                draw_axes(&mut canvas, origin, args.width, args.height)?;
            }

            let anchors = write_chain(&drawer, &mut canvas, origin, &args.texts, args.size, brush, &options)?;
            if args.mark_anchors {
                let marker = Color::rgba(220, 40, 40, 255);
                for &anchor in &anchors {
                    canvas.mark_anchor(anchor, ANCHOR_ARM, marker)?;
                }
            }
            (canvas.finish()?, last(&anchors, origin))
        },
        OutputFormat::Json => {
            let mut recorder = JsonRecorder::new();
            let anchors =
                write_chain(&drawer, &mut recorder, origin, &args.texts, args.size, brush, &options)?;
            (recorder.to_json()?, last(&anchors, origin))
        },
    };

    match &args.output_file {
        Some(path) => {
            let mut file =
                File::create(path).with_context(|| format!("Failed to create {}", path.display()))?;
            file.write_all(output.as_bytes())?;
            if !args.quiet {
                eprintln!("Wrote {}", path.display());
            }
        },
        None => io::stdout().write_all(output.as_bytes())?,
    }

    if !args.quiet {
        eprintln!("Next point: ({:.2}, {:.2})", next.x, next.y);
    }
    Ok(())
}

fn write_options(args: &DrawArgs) -> WriteOptions {
    WriteOptions {
        alignment: if args.trailing {
            Alignment::Trailing
        } else {
            Alignment::Leading
        },
        sideways: args.sideways,
        angle: args.angle,
    }
}

/// Write each text at the previous next point
///
/// Returns the first origin followed by every next point.
fn write_chain(
    drawer: &GlyphDrawer,
    sink: &mut dyn DrawingSink,
    origin: Point,
    texts: &[String],
    size: f32,
    brush: Color,
    options: &WriteOptions,
) -> Result<Vec<Point>> {
    let mut anchors = Vec::with_capacity(texts.len() + 1);
    anchors.push(origin);

    let mut point = origin;
    for text in texts {
        point = drawer
            .write(sink, point, text, size, brush, options)
            .with_context(|| format!("Failed to draw {text:?}"))?;
        log::debug!("{text:?} ends at ({:.2}, {:.2})", point.x, point.y);
        anchors.push(point);
    }
    Ok(anchors)
}

fn last(anchors: &[Point], fallback: Point) -> Point {
    anchors.last().copied().unwrap_or(fallback)
}

fn draw_axes(canvas: &mut SvgCanvas, origin: Point, width: f32, height: f32) -> Result<()> {
    let axis = Color::rgba(160, 160, 160, 255);
    canvas.line(Point::new(0.0, origin.y), Point::new(width, origin.y), axis)?;
    canvas.line(Point::new(origin.x, 0.0), Point::new(origin.x, height), axis)?;
    Ok(())
}

fn parse_color(color_str: &str) -> Result<Color> {
    Color::from_hex(color_str).ok_or_else(|| anyhow!("Invalid color format: {color_str}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use glyphrun::prelude::*;

    struct MonoFace;

    impl FontFace for MonoFace {
        fn data(&self) -> &[u8] {
            &[]
        }
        fn units_per_em(&self) -> u16 {
            1000
        }
        fn glyph_id(&self, ch: char) -> Option<GlyphId> {
            Some(ch as u32)
        }
        fn advance_width(&self, _glyph_id: GlyphId) -> f32 {
            0.6
        }
        fn advance_height(&self, _glyph_id: GlyphId) -> f32 {
            1.0
        }
        fn line_metrics(&self) -> LineMetrics {
            LineMetrics::default()
        }
    }

    #[test]
    fn test_chain_starts_each_text_at_previous_next_point() {
        let drawer = GlyphDrawer::from_face(Arc::new(MonoFace), 1.0);
        let mut recorder = JsonRecorder::new();
        let texts = vec!["ab".to_string(), "".to_string(), "cde".to_string()];
        let anchors = write_chain(
            &drawer,
            &mut recorder,
            Point::new(10.0, 50.0),
            &texts,
            10.0,
            Color::black(),
            &WriteOptions::default(),
        )
        .unwrap();

        assert_eq!(anchors.len(), 4);
        assert!((anchors[1].x - 22.0).abs() < 1e-4);
        assert_eq!(anchors[2], anchors[1]);
        assert!((anchors[3].x - 40.0).abs() < 1e-4);

        let origins: Vec<_> = recorder.glyph_runs().map(|run| run.origin).collect();
        assert_eq!(origins.len(), 2);
        assert!((origins[1][0] - 22.0).abs() < 1e-4);
    }

    #[test]
    fn test_parse_color() {
        assert_eq!(parse_color("#00ff00").unwrap(), Color::rgba(0, 255, 0, 255));
        assert!(parse_color("green").is_err());
    }
}
