//! POINT entity handler

use crate::entities::{EntityType, PointEntity};
use crate::error::Result;
use crate::parser::handler::{
    parse_common_property, EntityHandler, GROUPCODE_START_X, GROUPCODE_START_Y, GROUPCODE_START_Z,
};
use crate::parser::value::Value;

/// Builds [`PointEntity`] entities from their group records.
#[derive(Debug, Default)]
pub struct PointHandler {
    point: Option<PointEntity>,
}

impl PointHandler {
    /// Create a new handler
    pub fn new() -> Self {
        Self::default()
    }
}

impl EntityHandler for PointHandler {
    fn entity_name(&self) -> &'static str {
        "POINT"
    }

    fn start_entity(&mut self) {
        self.point = Some(PointEntity::new());
    }

    fn parse_group(&mut self, code: i32, value: &Value) -> Result<()> {
        let Some(point) = self.point.as_mut() else {
            return Ok(());
        };
        match code {
            GROUPCODE_START_X => point.location.x = value.as_f64()?,
            GROUPCODE_START_Y => point.location.y = value.as_f64()?,
            GROUPCODE_START_Z => point.location.z = value.as_f64()?,
            _ => {
                parse_common_property(code, value, &mut point.common)?;
            }
        }
        Ok(())
    }

    fn end_entity(&mut self) {}

    fn take_entity(&mut self) -> Option<EntityType> {
        self.point.take().map(EntityType::Point)
    }

    fn release(&mut self) {
        self.point = None;
    }
}
