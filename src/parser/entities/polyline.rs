//! POLYLINE entity handler (follows-sequence)

use crate::entities::{EntityType, Polyline, PolylineFlags, Vertex};
use crate::error::Result;
use crate::parser::handler::{
    parse_common_property, EntityHandler, GROUPCODE_START_X, GROUPCODE_START_Y, GROUPCODE_START_Z,
};
use crate::parser::value::Value;
use crate::parser::{COMMAND_CODE, SEQUENCE_END};

const VERTEX: &str = "VERTEX";
const FLAGS: i32 = 70;
const START_WIDTH: i32 = 40;
const END_WIDTH: i32 = 41;
const BULGE: i32 = 42;

/// Builds [`Polyline`] entities, including their trailing VERTEX/SEQEND
/// sub-entity sequence.
///
/// A polyline "follows a sequence": after the POLYLINE record itself, its
/// vertices arrive as code-0 VERTEX sub-records and the sequence ends with
/// a code-0 SEQEND. While the sequence is open this handler keeps
/// reporting `follows_sequence() == true`, so the owning dispatcher routes
/// those boundary-like codes here instead of closing the entity; the flag
/// clears once SEQEND is seen.
#[derive(Debug, Default)]
pub struct PolylineHandler {
    polyline: Option<Polyline>,
    vertex: Option<Vertex>,
    follow: bool,
}

impl PolylineHandler {
    /// Create a new handler
    pub fn new() -> Self {
        Self::default()
    }

    fn flush_vertex(&mut self) {
        if let Some(vertex) = self.vertex.take() {
            if let Some(polyline) = self.polyline.as_mut() {
                polyline.add_vertex(vertex);
            }
        }
    }
}

impl EntityHandler for PolylineHandler {
    fn entity_name(&self) -> &'static str {
        "POLYLINE"
    }

    fn start_entity(&mut self) {
        self.polyline = Some(Polyline::new());
        self.vertex = None;
        self.follow = true;
    }

    fn parse_group(&mut self, code: i32, value: &Value) -> Result<()> {
        if code == COMMAND_CODE {
            match value.as_str() {
                VERTEX => {
                    self.flush_vertex();
                    self.vertex = Some(Vertex::default());
                }
                SEQUENCE_END => {
                    self.flush_vertex();
                    self.follow = false;
                }
                _ => {}
            }
            return Ok(());
        }

        if let Some(vertex) = self.vertex.as_mut() {
            match code {
                GROUPCODE_START_X => vertex.location.x = value.as_f64()?,
                GROUPCODE_START_Y => vertex.location.y = value.as_f64()?,
                GROUPCODE_START_Z => vertex.location.z = value.as_f64()?,
                START_WIDTH => vertex.start_width = value.as_f64()?,
                END_WIDTH => vertex.end_width = value.as_f64()?,
                BULGE => vertex.bulge = value.as_f64()?,
                FLAGS => vertex.flags = value.as_i32()?,
                _ => {}
            }
            return Ok(());
        }

        let Some(polyline) = self.polyline.as_mut() else {
            return Ok(());
        };
        match code {
            FLAGS => polyline.flags = PolylineFlags::from_bits_truncate(value.as_i32()?),
            GROUPCODE_START_Z => polyline.elevation = value.as_f64()?,
            _ => {
                parse_common_property(code, value, &mut polyline.common)?;
            }
        }
        Ok(())
    }

    fn end_entity(&mut self) {
        // a missing SEQEND still leaves a pending vertex to keep
        self.flush_vertex();
        self.follow = false;
    }

    fn take_entity(&mut self) -> Option<EntityType> {
        self.vertex = None;
        self.polyline.take().map(EntityType::Polyline)
    }

    fn follows_sequence(&self) -> bool {
        self.follow
    }

    fn release(&mut self) {
        self.polyline = None;
        self.vertex = None;
        self.follow = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Point;

    #[test]
    fn test_vertices_collected() {
        let mut handler = PolylineHandler::new();
        handler.start_entity();
        assert!(handler.follows_sequence());

        for (code, value) in [
            (70, "1"),
            (0, "VERTEX"),
            (10, "0.0"),
            (20, "0.0"),
            (0, "VERTEX"),
            (10, "1.0"),
            (20, "0.0"),
            (42, "0.5"),
            (0, "VERTEX"),
            (10, "1.0"),
            (20, "1.0"),
            (0, "SEQEND"),
        ] {
            handler.parse_group(code, &Value::new(value)).unwrap();
        }
        assert!(!handler.follows_sequence());
        handler.end_entity();

        let Some(EntityType::Polyline(polyline)) = handler.take_entity() else {
            panic!("expected a polyline");
        };
        assert_eq!(polyline.vertex_count(), 3);
        assert!(polyline.is_closed());
        assert_eq!(polyline.vertices[1].location, Point::new(1.0, 0.0, 0.0));
        assert_eq!(polyline.vertices[1].bulge, 0.5);
    }

    #[test]
    fn test_missing_seqend_keeps_pending_vertex() {
        let mut handler = PolylineHandler::new();
        handler.start_entity();
        for (code, value) in [(0, "VERTEX"), (10, "2.0"), (20, "3.0")] {
            handler.parse_group(code, &Value::new(value)).unwrap();
        }
        handler.end_entity();

        let Some(EntityType::Polyline(polyline)) = handler.take_entity() else {
            panic!("expected a polyline");
        };
        assert_eq!(polyline.vertex_count(), 1);
        assert_eq!(polyline.vertices[0].location, Point::new(2.0, 3.0, 0.0));
    }
}
