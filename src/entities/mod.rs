//! Geometric entity types and traits

use crate::types::Handle;

pub mod arc;
pub mod block;
pub mod circle;
pub mod line;
pub mod lwpolyline;
pub mod point;
pub mod polyline;
pub mod spline;

pub use arc::Arc;
pub use block::Block;
pub use circle::Circle;
pub use line::Line;
pub use lwpolyline::{LwPolyline, LwVertex};
pub use point::PointEntity;
pub use polyline::{Polyline, PolylineFlags, Vertex};
pub use spline::{Spline, SplineFlags, SplinePoint, SplinePointKind};

/// Common entity data shared by all entities.
///
/// Populated from the common group codes every entity carries (handle,
/// layer, line type, color, ...); entity-specific codes live in the
/// concrete structs.
#[derive(Debug, Clone)]
pub struct EntityCommon {
    /// Unique handle (group code 5)
    pub handle: Handle,
    /// Layer name (group code 8)
    pub layer: String,
    /// Line type name (group code 6); empty means "by layer"
    pub line_type: String,
    /// ACI color index (group code 62); 256 = by layer
    pub color: i32,
    /// Line type scale (group code 48)
    pub line_type_scale: f64,
    /// Visibility (group code 60; 1 = invisible)
    pub invisible: bool,
    /// Paper-space flag (group code 67)
    pub paper_space: bool,
    /// Extended data records (group codes >= 1000), kept verbatim
    pub xdata: Vec<(i32, String)>,
}

impl EntityCommon {
    /// Create common data with default settings (layer "0", color by layer)
    pub fn new() -> Self {
        EntityCommon {
            handle: Handle::NULL,
            layer: "0".to_string(),
            line_type: String::new(),
            color: 256,
            line_type_scale: 1.0,
            invisible: false,
            paper_space: false,
            xdata: Vec::new(),
        }
    }
}

impl Default for EntityCommon {
    fn default() -> Self {
        Self::new()
    }
}

/// Base trait for all entities
pub trait Entity {
    /// Shared entity data
    fn common(&self) -> &EntityCommon;

    /// Shared entity data, mutable
    fn common_mut(&mut self) -> &mut EntityCommon;

    /// The DXF type name of this entity (e.g. "CIRCLE")
    fn entity_type(&self) -> &'static str;

    /// The entity's layer name
    fn layer(&self) -> &str {
        &self.common().layer
    }

    /// The entity's handle
    fn handle(&self) -> Handle {
        self.common().handle
    }
}

/// Closed set of entity kinds the document graph can hold.
#[derive(Debug, Clone)]
pub enum EntityType {
    Point(PointEntity),
    Line(Line),
    Circle(Circle),
    Arc(Arc),
    Polyline(Polyline),
    LwPolyline(LwPolyline),
    Spline(Spline),
}

impl EntityType {
    /// Access the wrapped entity through the common trait
    pub fn as_entity(&self) -> &dyn Entity {
        match self {
            EntityType::Point(e) => e,
            EntityType::Line(e) => e,
            EntityType::Circle(e) => e,
            EntityType::Arc(e) => e,
            EntityType::Polyline(e) => e,
            EntityType::LwPolyline(e) => e,
            EntityType::Spline(e) => e,
        }
    }

    /// Access the wrapped entity mutably through the common trait
    pub fn as_entity_mut(&mut self) -> &mut dyn Entity {
        match self {
            EntityType::Point(e) => e,
            EntityType::Line(e) => e,
            EntityType::Circle(e) => e,
            EntityType::Arc(e) => e,
            EntityType::Polyline(e) => e,
            EntityType::LwPolyline(e) => e,
            EntityType::Spline(e) => e,
        }
    }

    /// The DXF type name of the wrapped entity
    pub fn entity_type(&self) -> &'static str {
        self.as_entity().entity_type()
    }

    /// The wrapped entity's layer name
    pub fn layer(&self) -> &str {
        self.as_entity().layer()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Point;

    #[test]
    fn test_entity_common_defaults() {
        let common = EntityCommon::new();
        assert_eq!(common.layer, "0");
        assert_eq!(common.color, 256);
        assert!(!common.invisible);
    }

    #[test]
    fn test_entity_type_dispatch() {
        let circle = Circle::from_center_radius(Point::new(1.0, 2.0, 0.0), 3.0);
        let entity = EntityType::Circle(circle);
        assert_eq!(entity.entity_type(), "CIRCLE");
        assert_eq!(entity.layer(), "0");
    }
}
