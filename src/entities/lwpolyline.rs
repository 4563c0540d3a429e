//! Lightweight polyline entity

use super::polyline::PolylineFlags;
use super::{Entity, EntityCommon};

/// A vertex of a [`LwPolyline`] - 2D, carried inline in the entity record.
#[derive(Debug, Clone, Copy, Default)]
pub struct LwVertex {
    /// X coordinate (group code 10)
    pub x: f64,
    /// Y coordinate (group code 20)
    pub y: f64,
    /// Bulge (group code 42)
    pub bulge: f64,
}

impl LwVertex {
    /// Create a straight vertex
    pub fn new(x: f64, y: f64) -> Self {
        LwVertex { x, y, bulge: 0.0 }
    }
}

/// A lightweight polyline - 2D vertices stored inline in one record
/// instead of trailing VERTEX sub-entities.
#[derive(Debug, Clone, Default)]
pub struct LwPolyline {
    /// Common entity data
    pub common: EntityCommon,
    /// Polyline flags (group code 70); only the CLOSED bit is meaningful
    pub flags: PolylineFlags,
    /// Constant width (group code 43)
    pub constant_width: f64,
    /// Elevation (group code 38)
    pub elevation: f64,
    /// The vertices, in stream order
    pub vertices: Vec<LwVertex>,
}

impl LwPolyline {
    /// Create a new empty lightweight polyline
    pub fn new() -> Self {
        LwPolyline {
            common: EntityCommon::new(),
            flags: PolylineFlags::empty(),
            constant_width: 0.0,
            elevation: 0.0,
            vertices: Vec::new(),
        }
    }

    /// Append a vertex
    pub fn add_vertex(&mut self, vertex: LwVertex) {
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
}

impl Entity for LwPolyline {
    fn common(&self) -> &EntityCommon {
        &self.common
    }

    fn common_mut(&mut self) -> &mut EntityCommon {
        &mut self.common
    }

    fn entity_type(&self) -> &'static str {
        "LWPOLYLINE"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lwpolyline_vertices() {
        let mut pl = LwPolyline::new();
        pl.add_vertex(LwVertex::new(0.0, 0.0));
        pl.add_vertex(LwVertex::new(1.0, 1.0));
        assert_eq!(pl.vertex_count(), 2);
        assert!(!pl.is_closed());
    }
}
