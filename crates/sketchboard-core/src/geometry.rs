//! Pure geometry helpers used for hit-testing.

use kurbo::{Point, Rect};

/// Euclidean distance between two points.
pub fn distance(p1: Point, p2: Point) -> f64 {
    ((p1.x - p2.x).powi(2) + (p1.y - p2.y).powi(2)).sqrt()
}

/// Check whether `point` lies inside the axis-aligned box spanned by two corners.
///
/// The corners may be given in any order. Edges count as inside.
pub fn point_in_rect(point: Point, corner1: Point, corner2: Point) -> bool {
    let rect = Rect::from_points(corner1, corner2);
    point.x >= rect.x0 && point.x <= rect.x1 && point.y >= rect.y0 && point.y <= rect.y1
}

/// Check whether `point` lies inside the circle around `center` passing through `edge_point`.
pub fn point_in_circle(point: Point, center: Point, edge_point: Point) -> bool {
    distance(point, center) <= distance(center, edge_point)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distance() {
        let d = distance(Point::new(0.0, 0.0), Point::new(3.0, 4.0));
        assert!((d - 5.0).abs() < f64::EPSILON);
        assert!(distance(Point::new(7.0, 7.0), Point::new(7.0, 7.0)).abs() < f64::EPSILON);
    }

    #[test]
    fn test_point_in_rect() {
        let a = Point::new(10.0, 10.0);
        let b = Point::new(50.0, 40.0);
        assert!(point_in_rect(Point::new(30.0, 20.0), a, b));
        assert!(!point_in_rect(Point::new(5.0, 5.0), a, b));
        // Edges are inclusive
        assert!(point_in_rect(Point::new(50.0, 40.0), a, b));
    }

    #[test]
    fn test_point_in_rect_reversed_corners() {
        let a = Point::new(50.0, 40.0);
        let b = Point::new(10.0, 10.0);
        assert!(point_in_rect(Point::new(30.0, 20.0), a, b));
        assert!(!point_in_rect(Point::new(60.0, 20.0), a, b));
    }

    #[test]
    fn test_point_in_circle() {
        let center = Point::new(100.0, 100.0);
        let edge = Point::new(100.0, 120.0);
        assert!(point_in_circle(Point::new(100.0, 115.0), center, edge));
        assert!(point_in_circle(Point::new(120.0, 100.0), center, edge));
        assert!(!point_in_circle(Point::new(100.0, 135.0), center, edge));
    }
}
