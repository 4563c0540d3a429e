//! LINE entity handler

use crate::entities::{EntityType, Line};
use crate::error::Result;
use crate::parser::handler::{
    parse_common_property, EntityHandler, GROUPCODE_START_X, GROUPCODE_START_Y, GROUPCODE_START_Z,
};
use crate::parser::value::Value;

const GROUPCODE_END_X: i32 = 11;
const GROUPCODE_END_Y: i32 = 21;
const GROUPCODE_END_Z: i32 = 31;

/// Builds [`Line`] entities from their group records.
#[derive(Debug, Default)]
pub struct LineHandler {
    line: Option<Line>,
}

impl LineHandler {
    /// Create a new handler
    pub fn new() -> Self {
        Self::default()
    }
}

impl EntityHandler for LineHandler {
    fn entity_name(&self) -> &'static str {
        "LINE"
    }

    fn start_entity(&mut self) {
        self.line = Some(Line::new());
    }

    fn parse_group(&mut self, code: i32, value: &Value) -> Result<()> {
        let Some(line) = self.line.as_mut() else {
            return Ok(());
        };
        match code {
            GROUPCODE_START_X => line.start.x = value.as_f64()?,
            GROUPCODE_START_Y => line.start.y = value.as_f64()?,
            GROUPCODE_START_Z => line.start.z = value.as_f64()?,
            GROUPCODE_END_X => line.end.x = value.as_f64()?,
            GROUPCODE_END_Y => line.end.y = value.as_f64()?,
            GROUPCODE_END_Z => line.end.z = value.as_f64()?,
            _ => {
                parse_common_property(code, value, &mut line.common)?;
            }
        }
        Ok(())
    }

    fn end_entity(&mut self) {}

    fn take_entity(&mut self) -> Option<EntityType> {
        self.line.take().map(EntityType::Line)
    }

    fn release(&mut self) {
        self.line = None;
    }
}
