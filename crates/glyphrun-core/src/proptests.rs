use std::sync::Arc;

use proptest::prelude::*;

use crate::{
    decode::{CodepointDecoder, REPLACEMENT},
    drawer::{Alignment, GlyphDrawer, WriteOptions},
    error::Result,
    geometry,
    glyphs::GlyphSequence,
    traits::{DrawingSink, FontFace},
    types::{GlyphId, GlyphRun, LineMetrics, Point},
    Color,
};

/// Maps every char to its scalar value; width depends on the glyph id
struct AnyFace;

impl FontFace for AnyFace {
    fn data(&self) -> &[u8] {
        &[]
    }
    fn units_per_em(&self) -> u16 {
        1000
    }
    fn glyph_id(&self, ch: char) -> Option<GlyphId> {
        Some(ch as u32)
    }
    fn advance_width(&self, glyph_id: GlyphId) -> f32 {
        0.25 + (glyph_id % 4) as f32 * 0.125
    }
    fn advance_height(&self, _glyph_id: GlyphId) -> f32 {
        1.0
    }
    fn line_metrics(&self) -> LineMetrics {
        LineMetrics::default()
    }
}

#[derive(Default)]
struct CountingSink {
    draws: usize,
    pushes: usize,
    pops: usize,
    last_advance: f32,
}

impl DrawingSink for CountingSink {
    fn draw_glyph_run(&mut self, _brush: Color, run: &GlyphRun<'_>) -> Result<()> {
        self.draws += 1;
        self.last_advance = run.total_advance();
        Ok(())
    }
    fn push_rotation(&mut self, _angle: f32, _center: Point) -> Result<()> {
        self.pushes += 1;
        Ok(())
    }
    fn pop(&mut self) -> Result<()> {
        self.pops += 1;
        Ok(())
    }
}

// Property: well-formed UTF-16 decodes to exactly the original chars
proptest! {
    #[test]
    fn prop_valid_utf16_round_trips(s in "\\PC*") {
        let units: Vec<u16> = s.encode_utf16().collect();
        let decoded: String = CodepointDecoder::new(&units).map(|d| d.ch).collect();
        prop_assert_eq!(decoded, s);
    }
}

// Property: arbitrary units never decode to more codepoints than units,
// and the consumed unit counts add up to the input length
proptest! {
    #[test]
    fn prop_units_are_fully_consumed(units in prop::collection::vec(any::<u16>(), 0..64)) {
        let decoded: Vec<_> = CodepointDecoder::new(&units).collect();
        prop_assert!(decoded.len() <= units.len());
        prop_assert_eq!(decoded.iter().map(|d| d.units).sum::<usize>(), units.len());
        for d in &decoded {
            if d.malformed.is_some() {
                prop_assert_eq!(d.ch, REPLACEMENT);
                prop_assert_eq!(d.units, 1);
            }
        }
    }
}

// Property: the total advance is the sum of the per-glyph advances
proptest! {
    #[test]
    fn prop_total_is_sum_of_advances(
        units in prop::collection::vec(any::<u16>(), 0..64),
        size in 1.0f32..200.0,
        sideways in any::<bool>(),
    ) {
        let seq = GlyphSequence::resolve(&AnyFace, &units, size, sideways);
        prop_assert_eq!(seq.glyph_ids.len(), seq.advances.len());
        let sum: f32 = seq.advances.iter().sum();
        prop_assert!((sum - seq.total_advance).abs() <= 1e-3 * sum.max(1.0));
    }
}

// Property: ASCII get_length equals the drawn advance
proptest! {
    #[test]
    fn prop_ascii_length_matches_write(s in "[ -~]{1,40}", size in 1.0f32..100.0) {
        let drawer = GlyphDrawer::from_face(Arc::new(AnyFace), 1.0);
        let mut sink = CountingSink::default();
        let origin = Point::new(0.0, 0.0);
        let next = drawer
            .write(&mut sink, origin, &s, size, Color::black(), &WriteOptions::default())
            .unwrap();
        let length = drawer.get_length(&s, size).unwrap();

        prop_assert_eq!(sink.draws, 1);
        prop_assert!((next.x - length).abs() <= 1e-3 * length.max(1.0));
        prop_assert!((sink.last_advance - length).abs() <= 1e-3 * length.max(1.0));
    }
}

// Property: the next point lies at distance `total` from the origin and
// rotated writes always pair push with pop
proptest! {
    #[test]
    fn prop_next_point_distance(
        s in "[a-z]{1,20}",
        angle in -360.0f32..360.0,
        trailing in any::<bool>(),
    ) {
        let drawer = GlyphDrawer::from_face(Arc::new(AnyFace), 1.0);
        let mut sink = CountingSink::default();
        let origin = Point::new(100.0, 100.0);
        let options = WriteOptions {
            alignment: if trailing { Alignment::Trailing } else { Alignment::Leading },
            sideways: false,
            angle,
        };
        let next = drawer
            .write(&mut sink, origin, &s, 16.0, Color::black(), &options)
            .unwrap();

        let total = drawer.get_length(&s, 16.0).unwrap();
        let distance = ((next.x - origin.x).powi(2) + (next.y - origin.y).powi(2)).sqrt();
        prop_assert!((distance - total).abs() < 1e-2);
        prop_assert_eq!(sink.pushes, sink.pops);
        prop_assert_eq!(sink.pushes, usize::from(angle != 0.0));
    }
}

// Property: a zero angle reduces exactly to the unrotated formula
proptest! {
    #[test]
    fn prop_zero_angle_is_exact(x in -1e4f32..1e4, y in -1e4f32..1e4, total in 0.0f32..1e3) {
        let origin = Point::new(x, y);
        prop_assert_eq!(
            geometry::next_point(origin, Alignment::Leading, total, 0.0),
            Point::new(x + total, y)
        );
        prop_assert_eq!(
            geometry::next_point(origin, Alignment::Trailing, total, 0.0),
            Point::new(x - total, y)
        );
    }
}
