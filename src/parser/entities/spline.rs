//! SPLINE entity handler

use crate::entities::{EntityType, Spline, SplineFlags, SplinePoint, SplinePointKind};
use crate::error::Result;
use crate::parser::handler::{parse_common_property, EntityHandler};
use crate::parser::value::Value;
use crate::types::Point;

const KNOT: i32 = 40;
const WEIGHT: i32 = 41;
const FLAGS: i32 = 70;
const DEGREE: i32 = 71;

/// Builds [`Spline`] entities from their group records.
///
/// Points arrive as coordinate triples whose X code starts a new point:
/// 10/20/30 control points, 11/21/31 fit points, 12/22/32 and 13/23/33
/// the start and end tangents. Knots and weights are one record each.
#[derive(Debug, Default)]
pub struct SplineHandler {
    spline: Option<Spline>,
}

impl SplineHandler {
    /// Create a new handler
    pub fn new() -> Self {
        Self::default()
    }
}

/// Which point role a coordinate code belongs to, and which axis it sets.
fn coordinate_role(code: i32) -> Option<(SplinePointKind, usize)> {
    let kind = match code % 10 {
        0 => SplinePointKind::Control,
        1 => SplinePointKind::Fit,
        2 => SplinePointKind::StartTangent,
        3 => SplinePointKind::EndTangent,
        _ => return None,
    };
    match code / 10 {
        1 => Some((kind, 0)),
        2 => Some((kind, 1)),
        3 => Some((kind, 2)),
        _ => None,
    }
}

impl EntityHandler for SplineHandler {
    fn entity_name(&self) -> &'static str {
        "SPLINE"
    }

    fn start_entity(&mut self) {
        self.spline = Some(Spline::new());
    }

    fn parse_group(&mut self, code: i32, value: &Value) -> Result<()> {
        let Some(spline) = self.spline.as_mut() else {
            return Ok(());
        };

        if let Some((kind, axis)) = coordinate_role(code) {
            let coordinate = value.as_f64()?;
            if axis == 0 {
                // an X code opens a new point of that role
                spline.points.push(SplinePoint {
                    point: Point::new(coordinate, 0.0, 0.0),
                    kind,
                });
                return Ok(());
            }
            if let Some(last) = spline.points.iter_mut().rev().find(|p| p.kind == kind) {
                match axis {
                    1 => last.point.y = coordinate,
                    _ => last.point.z = coordinate,
                }
            }
            return Ok(());
        }

        match code {
            KNOT => spline.knots.push(value.as_f64()?),
            WEIGHT => spline.weights.push(value.as_f64()?),
            FLAGS => spline.flags = SplineFlags::from_bits_truncate(value.as_i32()?),
            DEGREE => spline.degree = value.as_i32()?,
            _ => {
                parse_common_property(code, value, &mut spline.common)?;
            }
        }
        Ok(())
    }

    fn end_entity(&mut self) {}

    fn take_entity(&mut self) -> Option<EntityType> {
        self.spline.take().map(EntityType::Spline)
    }

    fn release(&mut self) {
        self.spline = None;
    }
}
