//! Spline to polyline conversion

use super::nurbs::Nurbs;
use crate::entities::{Polyline, Spline, Vertex};

/// Number of samples taken when approximating a true NURBS curve.
pub const SPLINE_SAMPLE_COUNT: usize = 30;

/// Build a NURBS curve from a spline definition.
///
/// Only the points tagged as control points participate; fit points and
/// tangents are excluded. The closed flag carries over.
pub fn to_nurbs(spline: &Spline) -> Nurbs {
    let control_points = spline.control_points().copied().collect();
    let mut nurbs = Nurbs::new(
        control_points,
        spline.knots.clone(),
        spline.weights.clone(),
        spline.degree.max(0) as usize,
    );
    nurbs.set_closed(spline.is_closed());
    nurbs
}

/// Approximate a spline entity as a polyline.
///
/// A spline with a positive degree and a non-empty knot vector is a true
/// curve: it is evaluated as a NURBS and sampled at
/// [`SPLINE_SAMPLE_COUNT`] evenly spaced parameters, one vertex per
/// sample. Anything else (degree <= 0, or no knots - malformed or
/// fit-only data) falls back to the control polygon: one vertex per
/// control point, unmodified, in original order. The fallback is the
/// documented behavior for incomplete definitions, not an error path.
///
/// The polyline inherits the spline's closed flag and its common data
/// (layer, color, ...), keeping it attached to the same document context.
pub fn spline_to_polyline(spline: &Spline) -> Polyline {
    let mut polyline = Polyline::new();
    polyline.common = spline.common.clone();

    if spline.degree > 0 && !spline.knots.is_empty() {
        let nurbs = to_nurbs(spline);
        for point in nurbs.fixed_samples(SPLINE_SAMPLE_COUNT) {
            polyline.add_vertex(Vertex::new(point));
        }
    } else {
        // the curve is the control point polygon
        for point in spline.control_points() {
            polyline.add_vertex(Vertex::new(*point));
        }
    }

    if spline.is_closed() {
        polyline.set_closed(true);
    }

    polyline
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::{SplineFlags, SplinePoint};
    use crate::types::Point;

    fn cubic_spline() -> Spline {
        let mut spline = Spline::new();
        spline.degree = 3;
        spline.knots = vec![0.0, 0.0, 0.0, 0.0, 1.0, 1.0, 1.0, 1.0];
        for (x, y) in [(0.0, 0.0), (1.0, 2.0), (3.0, 2.0), (4.0, 0.0)] {
            spline.points.push(SplinePoint::control(Point::new(x, y, 0.0)));
        }
        spline
    }

    #[test]
    fn test_true_curve_samples_fixed_count() {
        let spline = cubic_spline();
        let polyline = spline_to_polyline(&spline);
        assert_eq!(polyline.vertex_count(), SPLINE_SAMPLE_COUNT);
        // clamped curve interpolates its end control points
        assert_eq!(polyline.vertices[0].location, Point::new(0.0, 0.0, 0.0));
        assert_eq!(
            polyline.vertices[SPLINE_SAMPLE_COUNT - 1].location,
            Point::new(4.0, 0.0, 0.0)
        );
    }

    #[test]
    fn test_degenerate_degree_falls_back_to_control_polygon() {
        let mut spline = cubic_spline();
        spline.degree = 0;
        let polyline = spline_to_polyline(&spline);
        assert_eq!(polyline.vertex_count(), 4);
        assert_eq!(polyline.vertices[1].location, Point::new(1.0, 2.0, 0.0));
        assert_eq!(polyline.vertices[3].location, Point::new(4.0, 0.0, 0.0));
    }

    #[test]
    fn test_empty_knots_fall_back_to_control_polygon() {
        let mut spline = cubic_spline();
        spline.knots.clear();
        let polyline = spline_to_polyline(&spline);
        assert_eq!(polyline.vertex_count(), 4);
    }

    #[test]
    fn test_fallback_excludes_fit_points() {
        let mut spline = Spline::new();
        spline.points.push(SplinePoint::control(Point::new(0.0, 0.0, 0.0)));
        spline.points.push(SplinePoint::fit(Point::new(0.5, 0.5, 0.0)));
        spline.points.push(SplinePoint::control(Point::new(1.0, 0.0, 0.0)));

        let polyline = spline_to_polyline(&spline);
        assert_eq!(polyline.vertex_count(), 2);
        assert_eq!(polyline.vertices[1].location, Point::new(1.0, 0.0, 0.0));
    }

    #[test]
    fn test_closed_flag_propagates() {
        let mut spline = cubic_spline();
        spline.flags |= SplineFlags::CLOSED;
        let polyline = spline_to_polyline(&spline);
        assert!(polyline.is_closed());

        let open = spline_to_polyline(&cubic_spline());
        assert!(!open.is_closed());
    }

    #[test]
    fn test_common_data_inherited() {
        let mut spline = cubic_spline();
        spline.common.layer = "curves".to_string();
        let polyline = spline_to_polyline(&spline);
        assert_eq!(polyline.common.layer, "curves");
    }
}
