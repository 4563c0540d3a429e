//! CIRCLE entity handler

use crate::entities::{Circle, EntityType};
use crate::error::Result;
use crate::parser::handler::{
    parse_common_property, EntityHandler, GROUPCODE_START_X, GROUPCODE_START_Y, GROUPCODE_START_Z,
};
use crate::parser::value::Value;

const RADIUS: i32 = 40;

/// Builds [`Circle`] entities from their group records.
#[derive(Debug, Default)]
pub struct CircleHandler {
    circle: Option<Circle>,
}

impl CircleHandler {
    /// Create a new handler
    pub fn new() -> Self {
        Self::default()
    }
}

impl EntityHandler for CircleHandler {
    fn entity_name(&self) -> &'static str {
        "CIRCLE"
    }

    fn start_entity(&mut self) {
        self.circle = Some(Circle::new());
    }

    fn parse_group(&mut self, code: i32, value: &Value) -> Result<()> {
        let Some(circle) = self.circle.as_mut() else {
            return Ok(());
        };
        match code {
            GROUPCODE_START_X => circle.center.x = value.as_f64()?,
            GROUPCODE_START_Y => circle.center.y = value.as_f64()?,
            GROUPCODE_START_Z => circle.center.z = value.as_f64()?,
            RADIUS => circle.radius = value.as_f64()?,
            _ => {
                parse_common_property(code, value, &mut circle.common)?;
            }
        }
        Ok(())
    }

    fn end_entity(&mut self) {}

    fn take_entity(&mut self) -> Option<EntityType> {
        self.circle.take().map(EntityType::Circle)
    }

    fn release(&mut self) {
        self.circle = None;
    }
}
