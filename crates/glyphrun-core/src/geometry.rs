//! Alignment and rotation math for one write
//!
//! Coordinates grow downwards, so a positive angle turns clockwise on screen.

use crate::{drawer::Alignment, types::Point};

/// Where the glyph run starts
///
/// Trailing alignment moves the run back by its full advance so that its
/// trailing edge lands on `origin`. The shift is along the unrotated x axis;
/// rotation is applied around `origin` afterwards.
pub fn effective_origin(origin: Point, alignment: Alignment, total_advance: f32) -> Point {
    match alignment {
        Alignment::Leading => origin,
        Alignment::Trailing => Point::new(origin.x - total_advance, origin.y),
    }
}

/// Signed distance from `origin` to the next anchor along the writing direction
pub fn signed_advance(alignment: Alignment, total_advance: f32) -> f32 {
    match alignment {
        Alignment::Leading => total_advance,
        Alignment::Trailing => -total_advance,
    }
}

/// The point right after the written text
///
/// With `angle == 0` only x moves. Otherwise the displacement is projected
/// onto the rotated writing direction.
pub fn next_point(origin: Point, alignment: Alignment, total_advance: f32, angle: f32) -> Point {
    let displacement = signed_advance(alignment, total_advance);
    if angle == 0.0 {
        return Point::new(origin.x + displacement, origin.y);
    }

    let (sin, cos) = angle.to_radians().sin_cos();
    Point::new(origin.x + displacement * cos, origin.y + displacement * sin)
}

/// Rotate `point` clockwise by `angle` degrees around `center`
pub fn rotate_about(point: Point, center: Point, angle: f32) -> Point {
    if angle == 0.0 {
        return point;
    }
    let (sin, cos) = angle.to_radians().sin_cos();
    let dx = point.x - center.x;
    let dy = point.y - center.y;
    Point::new(
        center.x + dx * cos - dy * sin,
        center.y + dx * sin + dy * cos,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-4;

    fn close(a: Point, b: Point) -> bool {
        (a.x - b.x).abs() < EPS && (a.y - b.y).abs() < EPS
    }

    #[test]
    fn test_leading_origin_unchanged() {
        let origin = Point::new(100.0, 50.0);
        assert_eq!(effective_origin(origin, Alignment::Leading, 30.0), origin);
    }

    #[test]
    fn test_trailing_origin_shifts_back() {
        let origin = Point::new(100.0, 50.0);
        assert_eq!(
            effective_origin(origin, Alignment::Trailing, 30.0),
            Point::new(70.0, 50.0)
        );
    }

    #[test]
    fn test_next_point_without_rotation() {
        let origin = Point::new(100.0, 50.0);
        assert_eq!(
            next_point(origin, Alignment::Leading, 30.0, 0.0),
            Point::new(130.0, 50.0)
        );
        assert_eq!(
            next_point(origin, Alignment::Trailing, 30.0, 0.0),
            Point::new(70.0, 50.0)
        );
    }

    #[test]
    fn test_next_point_quarter_turn_goes_down() {
        let origin = Point::new(10.0, 10.0);
        assert!(close(
            next_point(origin, Alignment::Leading, 20.0, 90.0),
            Point::new(10.0, 30.0)
        ));
        assert!(close(
            next_point(origin, Alignment::Trailing, 20.0, 90.0),
            Point::new(10.0, -10.0)
        ));
    }

    #[test]
    fn test_next_point_half_turn() {
        let origin = Point::new(10.0, 10.0);
        assert!(close(
            next_point(origin, Alignment::Leading, 20.0, 180.0),
            Point::new(-10.0, 10.0)
        ));
    }

    #[test]
    fn test_rotate_about_matches_next_point() {
        let origin = Point::new(5.0, 7.0);
        let unrotated_end = Point::new(origin.x + 12.0, origin.y);
        for angle in [15.0_f32, 90.0, 135.0, 270.0, -45.0] {
            assert!(close(
                rotate_about(unrotated_end, origin, angle),
                next_point(origin, Alignment::Leading, 12.0, angle)
            ));
        }
    }
}
