//! Info command implementation
//!
//! Displays metrics of the face the other commands would draw with.

use anyhow::Result;

use glyphrun::{fontdb::FontDatabase, traits::FontFace};

use crate::cli::InfoArgs;
use crate::face::load_face;

pub fn run(args: &InfoArgs) -> Result<()> {
    println!("glyphrun v{}", env!("CARGO_PKG_VERSION"));
    println!();

    if args.families {
        print_families();
        return Ok(());
    }

    let face = load_face(&args.face)?;
    let metrics = face.line_metrics();

    println!("Face:");
    println!("  family            - {}", face.family_name().unwrap_or("(unnamed)"));
    println!("  face index        - {}", face.face_index());
    println!("  units per em      - {}", face.units_per_em());
    match face.glyph_count() {
        Some(count) => println!("  glyphs            - {count}"),
        None => println!("  glyphs            - unknown"),
    }
    println!();
    println!("Line metrics (em):");
    println!("  ascent            - {:.4}", metrics.ascent);
    println!("  descent           - {:.4}", metrics.descent);
    println!("  line gap          - {:.4}", metrics.line_gap);
    println!("  line spacing      - {:.4}", metrics.line_spacing());
    println!();
    println!(
        "Vertical metrics:   {}",
        if face.has_vertical_metrics() {
            "vhea/vmtx"
        } else {
            "none (sideways advances use ascent + descent)"
        }
    );
    Ok(())
}

fn print_families() {
    let db = FontDatabase::with_system_fonts();
    let families = db.family_names();
    println!("Families ({} faces):", db.face_count());
    if families.is_empty() {
        println!("  (none found)");
    }
    for family in families {
        println!("  {family}");
    }
}
