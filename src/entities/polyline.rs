//! Polyline entity and its vertices

use super::{Entity, EntityCommon};
use crate::types::Point;

bitflags::bitflags! {
    /// Polyline flags (group code 70)
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct PolylineFlags: i32 {
        /// The polyline is closed
        const CLOSED = 1;
        /// Curve-fit vertices have been added
        const CURVE_FIT = 2;
        /// Spline-fit vertices have been added
        const SPLINE_FIT = 4;
        /// This is a 3D polyline
        const POLYLINE_3D = 8;
        /// This is a 3D polygon mesh
        const POLYGON_MESH = 16;
        /// The polygon mesh is closed in the N direction
        const CLOSED_N = 32;
        /// This is a polyface mesh
        const POLYFACE_MESH = 64;
        /// The line type pattern continues around vertices
        const LINETYPE_CONTINUOUS = 128;
    }
}

/// A vertex of a [`Polyline`], emitted as a VERTEX sub-entity in the stream.
#[derive(Debug, Clone, Default)]
pub struct Vertex {
    /// Location (group codes 10/20/30)
    pub location: Point,
    /// Bulge - 0 for a straight segment, otherwise the tangent of a quarter
    /// of the included arc angle (group code 42)
    pub bulge: f64,
    /// Start width (group code 40)
    pub start_width: f64,
    /// End width (group code 41)
    pub end_width: f64,
    /// Vertex flags (group code 70)
    pub flags: i32,
}

impl Vertex {
    /// Create a straight vertex at a location
    pub fn new(location: Point) -> Self {
        Vertex {
            location,
            ..Default::default()
        }
    }

    /// Does this vertex start an arc segment?
    pub fn is_curved(&self) -> bool {
        self.bulge != 0.0
    }
}

/// A polyline entity - an open or closed chain of vertices.
#[derive(Debug, Clone, Default)]
pub struct Polyline {
    /// Common entity data
    pub common: EntityCommon,
    /// Polyline flags (group code 70)
    pub flags: PolylineFlags,
    /// Elevation of the polyline plane (group code 30 on the POLYLINE record)
    pub elevation: f64,
    /// The vertices, in stream order
    pub vertices: Vec<Vertex>,
}

impl Polyline {
    /// Create a new empty polyline
    pub fn new() -> Self {
        Polyline {
            common: EntityCommon::new(),
            flags: PolylineFlags::empty(),
            elevation: 0.0,
            vertices: Vec::new(),
        }
    }

    /// Append a vertex
    pub fn add_vertex(&mut self, vertex: Vertex) {
        self.vertices.push(vertex);
    }

    /// Number of vertices
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Is the polyline closed?
    pub fn is_closed(&self) -> bool {
        self.flags.contains(PolylineFlags::CLOSED)
    }

    /// Set or clear the closed flag
    pub fn set_closed(&mut self, closed: bool) {
        self.flags.set(PolylineFlags::CLOSED, closed);
    }

    /// Total length of the straight segments between consecutive vertices
    /// (bulged segments measured as chords).
    pub fn chord_length(&self) -> f64 {
        let mut length: f64 = self
            .vertices
            .windows(2)
            .map(|w| w[0].location.distance_to(&w[1].location))
            .sum();
        if self.is_closed() && self.vertices.len() > 2 {
            let first = &self.vertices[0];
            let last = &self.vertices[self.vertices.len() - 1];
            length += last.location.distance_to(&first.location);
        }
        length
    }
}

impl Entity for Polyline {
    fn common(&self) -> &EntityCommon {
        &self.common
    }

    fn common_mut(&mut self) -> &mut EntityCommon {
        &mut self.common
    }

    fn entity_type(&self) -> &'static str {
        "POLYLINE"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_closed_flag() {
        let mut pl = Polyline::new();
        assert!(!pl.is_closed());
        pl.set_closed(true);
        assert!(pl.is_closed());
        assert_eq!(pl.flags.bits(), 1);
        pl.set_closed(false);
        assert!(!pl.is_closed());
    }

    #[test]
    fn test_chord_length_open_and_closed() {
        let mut pl = Polyline::new();
        pl.add_vertex(Vertex::new(Point::new(0.0, 0.0, 0.0)));
        pl.add_vertex(Vertex::new(Point::new(4.0, 0.0, 0.0)));
        pl.add_vertex(Vertex::new(Point::new(4.0, 3.0, 0.0)));
        assert!((pl.chord_length() - 7.0).abs() < 1e-12);

        pl.set_closed(true);
        assert!((pl.chord_length() - 12.0).abs() < 1e-12);
    }

    #[test]
    fn test_curved_vertex() {
        let mut v = Vertex::new(Point::ZERO);
        assert!(!v.is_curved());
        v.bulge = 0.5;
        assert!(v.is_curved());
    }
}
