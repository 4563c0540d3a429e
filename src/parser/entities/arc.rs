//! ARC entity handler

use crate::entities::{Arc, EntityType};
use crate::error::Result;
use crate::parser::handler::{
    parse_common_property, EntityHandler, GROUPCODE_START_X, GROUPCODE_START_Y, GROUPCODE_START_Z,
};
use crate::parser::value::Value;

const RADIUS: i32 = 40;
const START_ANGLE: i32 = 50;
const END_ANGLE: i32 = 51;

/// Builds [`Arc`] entities from their group records.
#[derive(Debug, Default)]
pub struct ArcHandler {
    arc: Option<Arc>,
}

impl ArcHandler {
    /// Create a new handler
    pub fn new() -> Self {
        Self::default()
    }
}

impl EntityHandler for ArcHandler {
    fn entity_name(&self) -> &'static str {
        "ARC"
    }

    fn start_entity(&mut self) {
        self.arc = Some(Arc::new());
    }

    fn parse_group(&mut self, code: i32, value: &Value) -> Result<()> {
        let Some(arc) = self.arc.as_mut() else {
            return Ok(());
        };
        match code {
            GROUPCODE_START_X => arc.center.x = value.as_f64()?,
            GROUPCODE_START_Y => arc.center.y = value.as_f64()?,
            GROUPCODE_START_Z => arc.center.z = value.as_f64()?,
            RADIUS => arc.radius = value.as_f64()?,
            START_ANGLE => arc.start_angle = value.as_f64()?,
            END_ANGLE => arc.end_angle = value.as_f64()?,
            _ => {
                parse_common_property(code, value, &mut arc.common)?;
            }
        }
        Ok(())
    }

    fn end_entity(&mut self) {}

    fn take_entity(&mut self) -> Option<EntityType> {
        self.arc.take().map(EntityType::Arc)
    }

    fn release(&mut self) {
        self.arc = None;
    }
}
