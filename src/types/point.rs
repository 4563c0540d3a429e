//! 3D point type with tolerance-based spatial equality

use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};

/// Maximum per-axis distance at which two points are considered connected.
///
/// Entity-linking logic downstream (joining polyline segments, matching
/// endpoints) depends on this exact value.
pub const POINT_CONNECTION_RADIUS: f64 = 0.0001;

/// A point in 3D space.
///
/// Equality is tolerance-based: two points compare equal iff every axis
/// differs by at most [`POINT_CONNECTION_RADIUS`]. This relation is
/// reflexive and symmetric but deliberately NOT transitive - a chain of
/// near-duplicate points can each equal a shared neighbor without the
/// endpoints being equal to each other. `Point` therefore implements
/// `PartialEq` only and must not be used as a set or map key.
#[derive(Debug, Clone, Copy, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Point {
    /// Create a new point
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Point { x, y, z }
    }

    /// Origin point
    pub const ZERO: Point = Point::new(0.0, 0.0, 0.0);

    /// Euclidean distance to another point
    pub fn distance_to(&self, other: &Point) -> f64 {
        (*self - *other).length()
    }

    /// Length of the vector from the origin to this point
    pub fn length(&self) -> f64 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }

    /// Is this point within connection radius of another?
    ///
    /// Same relation as `==`, spelled out for call sites where the
    /// tolerance semantics should be visible.
    pub fn is_connected(&self, other: &Point) -> bool {
        self == other
    }
}

impl PartialEq for Point {
    fn eq(&self, other: &Self) -> bool {
        (self.x - other.x).abs() <= POINT_CONNECTION_RADIUS
            && (self.y - other.y).abs() <= POINT_CONNECTION_RADIUS
            && (self.z - other.z).abs() <= POINT_CONNECTION_RADIUS
    }
}

impl Add for Point {
    type Output = Point;
    fn add(self, other: Point) -> Point {
        Point::new(self.x + other.x, self.y + other.y, self.z + other.z)
    }
}

impl Sub for Point {
    type Output = Point;
    fn sub(self, other: Point) -> Point {
        Point::new(self.x - other.x, self.y - other.y, self.z - other.z)
    }
}

impl Mul<f64> for Point {
    type Output = Point;
    fn mul(self, scalar: f64) -> Point {
        Point::new(self.x * scalar, self.y * scalar, self.z * scalar)
    }
}

impl Div<f64> for Point {
    type Output = Point;
    fn div(self, scalar: f64) -> Point {
        Point::new(self.x / scalar, self.y / scalar, self.z / scalar)
    }
}

impl Neg for Point {
    type Output = Point;
    fn neg(self) -> Point {
        Point::new(-self.x, -self.y, -self.z)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{:.2}, {:.2}, {:.2}]", self.x, self.y, self.z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_equality_within_tolerance() {
        let a = Point::new(1.0, 2.0, 3.0);
        let b = Point::new(
            1.0 + POINT_CONNECTION_RADIUS,
            2.0 + POINT_CONNECTION_RADIUS,
            3.0 + POINT_CONNECTION_RADIUS,
        );
        assert_eq!(a, b);
    }

    #[test]
    fn test_inequality_beyond_tolerance() {
        let a = Point::new(1.0, 2.0, 3.0);
        let b = Point::new(1.0 + POINT_CONNECTION_RADIUS * 2.0, 2.0, 3.0);
        assert_ne!(a, b);
    }

    #[test]
    fn test_equality_not_transitive() {
        // Three colinear points, each within tolerance of its neighbor but
        // the endpoints outside tolerance of each other.
        let step = POINT_CONNECTION_RADIUS * 0.8;
        let a = Point::new(0.0, 0.0, 0.0);
        let m = Point::new(step, 0.0, 0.0);
        let b = Point::new(step * 2.0, 0.0, 0.0);

        assert_eq!(a, m);
        assert_eq!(m, b);
        assert_ne!(a, b);
    }

    #[test]
    fn test_arithmetic() {
        let a = Point::new(1.0, 2.0, 3.0);
        let b = Point::new(4.0, 5.0, 6.0);
        assert_eq!(a + b, Point::new(5.0, 7.0, 9.0));
        assert_eq!(b - a, Point::new(3.0, 3.0, 3.0));
        assert_eq!(a * 2.0, Point::new(2.0, 4.0, 6.0));
    }

    #[test]
    fn test_distance() {
        let a = Point::new(0.0, 0.0, 0.0);
        let b = Point::new(3.0, 4.0, 0.0);
        assert!((a.distance_to(&b) - 5.0).abs() < 1e-12);
    }

    proptest! {
        #[test]
        fn prop_equality_reflexive(x in -1e6f64..1e6, y in -1e6f64..1e6, z in -1e6f64..1e6) {
            let p = Point::new(x, y, z);
            prop_assert_eq!(p, p);
        }

        #[test]
        fn prop_equality_symmetric(
            x in -1e3f64..1e3, y in -1e3f64..1e3, z in -1e3f64..1e3,
            dx in -2e-4f64..2e-4, dy in -2e-4f64..2e-4, dz in -2e-4f64..2e-4,
        ) {
            let a = Point::new(x, y, z);
            let b = Point::new(x + dx, y + dy, z + dz);
            prop_assert_eq!(a == b, b == a);
        }
    }
}
