//! LWPOLYLINE entity handler

use crate::entities::{EntityType, LwPolyline, LwVertex, PolylineFlags};
use crate::error::Result;
use crate::parser::handler::{
    parse_common_property, EntityHandler, GROUPCODE_START_X, GROUPCODE_START_Y,
};
use crate::parser::value::Value;

const FLAGS: i32 = 70;
const ELEVATION: i32 = 38;
const CONSTANT_WIDTH: i32 = 43;
const BULGE: i32 = 42;

/// Builds [`LwPolyline`] entities from their group records.
///
/// Vertices are carried inline: every code-10 record starts a new vertex,
/// and codes 20/42 attach to the most recent one.
#[derive(Debug, Default)]
pub struct LwPolylineHandler {
    polyline: Option<LwPolyline>,
}

impl LwPolylineHandler {
    /// Create a new handler
    pub fn new() -> Self {
        Self::default()
    }
}

impl EntityHandler for LwPolylineHandler {
    fn entity_name(&self) -> &'static str {
        "LWPOLYLINE"
    }

    fn start_entity(&mut self) {
        self.polyline = Some(LwPolyline::new());
    }

    fn parse_group(&mut self, code: i32, value: &Value) -> Result<()> {
        let Some(polyline) = self.polyline.as_mut() else {
            return Ok(());
        };
        match code {
            GROUPCODE_START_X => {
                polyline.add_vertex(LwVertex {
                    x: value.as_f64()?,
                    ..Default::default()
                });
            }
            GROUPCODE_START_Y => {
                if let Some(vertex) = polyline.vertices.last_mut() {
                    vertex.y = value.as_f64()?;
                }
            }
            BULGE => {
                if let Some(vertex) = polyline.vertices.last_mut() {
                    vertex.bulge = value.as_f64()?;
                }
            }
            FLAGS => polyline.flags = PolylineFlags::from_bits_truncate(value.as_i32()?),
            ELEVATION => polyline.elevation = value.as_f64()?,
            CONSTANT_WIDTH => polyline.constant_width = value.as_f64()?,
            _ => {
                parse_common_property(code, value, &mut polyline.common)?;
            }
        }
        Ok(())
    }

    fn end_entity(&mut self) {}

    fn take_entity(&mut self) -> Option<EntityType> {
        self.polyline.take().map(EntityType::LwPolyline)
    }

    fn release(&mut self) {
        self.polyline = None;
    }
}
