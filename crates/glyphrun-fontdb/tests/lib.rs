// this_file: crates/glyphrun-fontdb/tests/lib.rs

use glyphrun_core::{traits::FontFace, FaceQuery, FontWeight};
use glyphrun_fontdb::{FontDatabase, TypefaceFace};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// First system face that resolves, if the machine has any fonts at all
fn any_system_face() -> Option<TypefaceFace> {
    let db = FontDatabase::with_system_fonts();
    if db.is_empty() {
        return None;
    }
    for family in ["sans-serif", "serif", "monospace"] {
        if let Ok(face) = db.resolve_face(&FaceQuery::family(family)) {
            return Some(face);
        }
    }
    db.family_names()
        .iter()
        .find_map(|name| db.resolve_face(&FaceQuery::family(name.as_str())).ok())
}

#[test]
fn test_system_face_when_resolved_then_metrics_are_sane() {
    init_logging();
    let Some(face) = any_system_face() else {
        eprintln!("Skipping test: no system fonts available");
        return;
    };

    assert!(face.units_per_em() > 0);
    assert!(face.glyph_count().unwrap_or(0) > 0);

    let metrics = face.line_metrics();
    assert!(metrics.line_spacing() > 0.0, "line spacing should be positive");

    if let Some(gid) = face.glyph_id('?') {
        let width = face.advance_width(gid);
        assert!(width > 0.0 && width < 2.0, "'?' advance {width} out of range");
        assert!(face.advance_height(gid) > 0.0);
    }
}

#[test]
fn test_system_face_when_reloaded_from_bytes_then_matches() {
    init_logging();
    let Some(face) = any_system_face() else {
        eprintln!("Skipping test: no system fonts available");
        return;
    };

    let reloaded = TypefaceFace::from_data_index(face.data().to_vec(), face.face_index())
        .expect("bytes of a resolved face should load again");

    assert_eq!(reloaded.units_per_em(), face.units_per_em());
    assert_eq!(reloaded.line_metrics(), face.line_metrics());
    assert_eq!(reloaded.glyph_id('a'), face.glyph_id('a'));
    assert_eq!(reloaded.has_vertical_metrics(), face.has_vertical_metrics());
}

#[test]
fn test_unknown_family_when_bold_requested_then_resolution_fails() {
    init_logging();
    let db = FontDatabase::with_system_fonts();
    // fontdb does not substitute across family names, so this must fail
    let result = db.resolve_face(
        &FaceQuery::family("No Such Family 7f3a91").with_weight(FontWeight::BOLD),
    );
    assert!(result.is_err());
}

#[test]
fn test_system_face_when_looked_up_then_cached_tables_match_font() {
    use read_fonts::{types::GlyphId, FontRef, TableProvider};

    init_logging();
    let Some(face) = any_system_face() else {
        eprintln!("Skipping test: no system fonts available");
        return;
    };

    let font = FontRef::from_index(face.data(), face.face_index()).expect("face bytes parse");
    let cmap = font.cmap().expect("cmap");
    let hmtx = font.hmtx().expect("hmtx");
    let upem = f32::from(face.units_per_em());

    for ch in ('!'..='~').chain(['é', 'ß', '\u{2603}']) {
        let fresh = cmap.map_codepoint(ch).map(|gid| gid.to_u32()).filter(|&gid| gid != 0);
        assert_eq!(face.glyph_id(ch), fresh, "glyph for {ch:?}");

        if let Some(gid) = fresh {
            let advance = hmtx.advance(GlyphId::new(gid)).map(|units| f32::from(units) / upem);
            assert_eq!(Some(face.advance_width(gid)), advance, "advance of {ch:?}");
        }
    }

    // Out-of-range glyph ids fall back instead of panicking
    let past_end = face.glyph_count().unwrap_or(0) + 10;
    assert_eq!(face.advance_width(past_end), 0.5);
    assert!(face.advance_height(past_end) > 0.0);
}
