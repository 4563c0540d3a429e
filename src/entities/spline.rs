//! Spline entity (NURBS curve definition)

use super::{Entity, EntityCommon};
use crate::types::Point;

bitflags::bitflags! {
    /// Spline flags (group code 70)
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct SplineFlags: i32 {
        /// The spline is closed
        const CLOSED = 1;
        /// The spline is periodic
        const PERIODIC = 2;
        /// The spline is rational (weighted)
        const RATIONAL = 4;
        /// The spline is planar
        const PLANAR = 8;
        /// The spline is linear (also sets PLANAR)
        const LINEAR = 16;
    }
}

/// Role of a point within a spline definition.
///
/// Only control points feed the NURBS evaluator; fit points and tangents
/// are carried for completeness but excluded from curve reconstruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SplinePointKind {
    /// A control point (group codes 10/20/30)
    Control,
    /// A fit point (group codes 11/21/31)
    Fit,
    /// The start tangent (group codes 12/22/32)
    StartTangent,
    /// The end tangent (group codes 13/23/33)
    EndTangent,
}

/// A tagged point of a spline definition
#[derive(Debug, Clone, Copy)]
pub struct SplinePoint {
    /// The coordinate
    pub point: Point,
    /// What role the point plays
    pub kind: SplinePointKind,
}

impl SplinePoint {
    /// Create a control point
    pub fn control(point: Point) -> Self {
        SplinePoint {
            point,
            kind: SplinePointKind::Control,
        }
    }

    /// Create a fit point
    pub fn fit(point: Point) -> Self {
        SplinePoint {
            point,
            kind: SplinePointKind::Fit,
        }
    }

    /// Is this a true control point?
    pub fn is_control(&self) -> bool {
        self.kind == SplinePointKind::Control
    }
}

/// A spline entity - the raw NURBS curve definition as parsed from the
/// stream: degree, knot vector, weights, and tagged points.
#[derive(Debug, Clone, Default)]
pub struct Spline {
    /// Common entity data
    pub common: EntityCommon,
    /// Spline flags (group code 70)
    pub flags: SplineFlags,
    /// Degree of the curve (group code 71)
    pub degree: i32,
    /// Knot values (group code 40, one per record)
    pub knots: Vec<f64>,
    /// Weights (group code 41, one per record); empty means unweighted
    pub weights: Vec<f64>,
    /// All points of the definition, tagged by role, in stream order
    pub points: Vec<SplinePoint>,
}

impl Spline {
    /// Create a new empty spline definition
    pub fn new() -> Self {
        Spline {
            common: EntityCommon::new(),
            flags: SplineFlags::empty(),
            degree: 0,
            knots: Vec::new(),
            weights: Vec::new(),
            points: Vec::new(),
        }
    }

    /// Iterate over the control points only, in original order
    pub fn control_points(&self) -> impl Iterator<Item = &Point> {
        self.points.iter().filter(|p| p.is_control()).map(|p| &p.point)
    }

    /// Iterate over the fit points only, in original order
    pub fn fit_points(&self) -> impl Iterator<Item = &Point> {
        self.points
            .iter()
            .filter(|p| p.kind == SplinePointKind::Fit)
            .map(|p| &p.point)
    }

    /// Number of control points
    pub fn control_point_count(&self) -> usize {
        self.points.iter().filter(|p| p.is_control()).count()
    }

    /// Is the spline closed?
    pub fn is_closed(&self) -> bool {
        self.flags.contains(SplineFlags::CLOSED)
    }

    /// Is the spline rational (weighted)?
    pub fn is_rational(&self) -> bool {
        self.flags.contains(SplineFlags::RATIONAL)
    }
}

impl Entity for Spline {
    fn common(&self) -> &EntityCommon {
        &self.common
    }

    fn common_mut(&mut self) -> &mut EntityCommon {
        &mut self.common
    }

    fn entity_type(&self) -> &'static str {
        "SPLINE"
    }
}
