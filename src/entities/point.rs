//! Point entity

use super::{Entity, EntityCommon};
use crate::types::Point;

/// A point entity - a single marker location in the drawing.
#[derive(Debug, Clone, Default)]
pub struct PointEntity {
    /// Common entity data
    pub common: EntityCommon,
    /// Location of the point
    pub location: Point,
}

impl PointEntity {
    /// Create a new point entity at the origin
    pub fn new() -> Self {
        PointEntity {
            common: EntityCommon::new(),
            location: Point::ZERO,
        }
    }

    /// Create a point entity at a location
    pub fn at(location: Point) -> Self {
        PointEntity {
            location,
            ..Self::new()
        }
    }
}

impl Entity for PointEntity {
    fn common(&self) -> &EntityCommon {
        &self.common
    }

    fn common_mut(&mut self) -> &mut EntityCommon {
        &mut self.common
    }

    fn entity_type(&self) -> &'static str {
        "POINT"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_entity() {
        let p = PointEntity::at(Point::new(1.0, 2.0, 3.0));
        assert_eq!(p.location, Point::new(1.0, 2.0, 3.0));
        assert_eq!(p.entity_type(), "POINT");
    }
}
