//! Line entity

use super::{Entity, EntityCommon};
use crate::types::Point;

/// A line segment entity
#[derive(Debug, Clone, Default)]
pub struct Line {
    /// Common entity data
    pub common: EntityCommon,
    /// Start point (group codes 10/20/30)
    pub start: Point,
    /// End point (group codes 11/21/31)
    pub end: Point,
}

impl Line {
    /// Create a new zero-length line at the origin
    pub fn new() -> Self {
        Line {
            common: EntityCommon::new(),
            start: Point::ZERO,
            end: Point::ZERO,
        }
    }

    /// Create a line between two points
    pub fn from_points(start: Point, end: Point) -> Self {
        Line {
            start,
            end,
            ..Self::new()
        }
    }

    /// Length of the line
    pub fn length(&self) -> f64 {
        self.start.distance_to(&self.end)
    }
}

impl Entity for Line {
    fn common(&self) -> &EntityCommon {
        &self.common
    }

    fn common_mut(&mut self) -> &mut EntityCommon {
        &mut self.common
    }

    fn entity_type(&self) -> &'static str {
        "LINE"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_length() {
        let line = Line::from_points(Point::ZERO, Point::new(3.0, 4.0, 0.0));
        assert!((line.length() - 5.0).abs() < 1e-12);
    }
}
