//! Handler contracts for sections and entities

use crate::document::Document;
use crate::entities::{EntityCommon, EntityType};
use crate::error::Result;
use crate::types::Handle;

use super::value::Value;

/// X coordinate of an entity's primary point (Y and Z follow at +10/+20)
pub const GROUPCODE_START_X: i32 = 10;
/// Y coordinate of an entity's primary point
pub const GROUPCODE_START_Y: i32 = 20;
/// Z coordinate of an entity's primary point
pub const GROUPCODE_START_Z: i32 = 30;

/// A handler for one top-level section of the stream.
///
/// Handlers are registered once under [`section_key`](Self::section_key)
/// and are stateful across one `start_section` → `parse_group`* →
/// `end_section` cycle. The document is only ever passed in as a borrow
/// scoped to a single callback, so a handler cannot retain it; `release`
/// runs as a distinct administrative phase at parse end so instances can
/// be reused by the next parse.
pub trait SectionHandler {
    /// The section name this handler is registered under (e.g. "ENTITIES")
    fn section_key(&self) -> &'static str;

    /// Called when the section opens
    fn start_section(&mut self);

    /// Called for every record inside the section.
    ///
    /// Errors (typically numeric coercions) are not caught by the
    /// dispatcher; they propagate and abort the whole parse.
    fn parse_group(&mut self, code: i32, value: &Value, doc: &mut Document) -> Result<()>;

    /// Called when the section closes (ENDSEC or end of stream)
    fn end_section(&mut self, doc: &mut Document);

    /// Administrative teardown at parse end; clears any per-parse state.
    fn release(&mut self) {}
}

/// A handler for one entity kind inside a composite section.
///
/// Same lifecycle contract as [`SectionHandler`], one level down: the
/// owning section handler starts it when a code-0 record names its
/// entity, feeds it every following record, and closes it at the next
/// entity boundary.
pub trait EntityHandler {
    /// The entity type name this handler is registered under (e.g. "CIRCLE")
    fn entity_name(&self) -> &'static str;

    /// Called when a new entity of this kind starts
    fn start_entity(&mut self);

    /// Called for every record belonging to the current entity
    fn parse_group(&mut self, code: i32, value: &Value) -> Result<()>;

    /// Called when the current entity ends
    fn end_entity(&mut self);

    /// Take the finished entity out of the handler.
    ///
    /// Returns `None` if no entity is in progress (e.g. called twice).
    fn take_entity(&mut self) -> Option<EntityType>;

    /// Whether the current entity is still consuming trailing sub-records
    /// (e.g. a polyline's VERTEX/SEQEND sequence). May be stateful: the
    /// handler clears it once it has seen its own terminator, and only
    /// then will the owning dispatcher close the entity at the next
    /// boundary code.
    fn follows_sequence(&self) -> bool {
        false
    }

    /// Administrative teardown at parse end; clears any per-parse state.
    fn release(&mut self) {}
}

/// Parse the common property codes every entity shares.
///
/// Returns `Ok(true)` when the code was consumed, `Ok(false)` when it is
/// not a common code (the caller decides whether it is entity-specific or
/// silently ignored - unrecognized codes never fail the parse).
pub fn parse_common_property(code: i32, value: &Value, common: &mut EntityCommon) -> Result<bool> {
    match code {
        5 => common.handle = value.as_handle().unwrap_or(Handle::NULL),
        6 => common.line_type = value.as_str().to_string(),
        8 => common.layer = value.as_str().to_string(),
        48 => common.line_type_scale = value.as_f64()?,
        60 => common.invisible = value.as_bool()?,
        62 => common.color = value.as_i32()?,
        67 => common.paper_space = value.as_bool()?,
        code if code >= 1000 => common.xdata.push((code, value.as_str().to_string())),
        _ => return Ok(false),
    }
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_common_codes_consumed() {
        let mut common = EntityCommon::new();
        assert!(parse_common_property(8, &Value::new("walls"), &mut common).unwrap());
        assert!(parse_common_property(62, &Value::new("3"), &mut common).unwrap());
        assert!(parse_common_property(5, &Value::new("1F"), &mut common).unwrap());
        assert!(parse_common_property(60, &Value::new("1"), &mut common).unwrap());

        assert_eq!(common.layer, "walls");
        assert_eq!(common.color, 3);
        assert_eq!(common.handle, Handle(0x1F));
        assert!(common.invisible);
    }

    #[test]
    fn test_unknown_code_not_consumed() {
        let mut common = EntityCommon::new();
        assert!(!parse_common_property(210, &Value::new("0.0"), &mut common).unwrap());
    }

    #[test]
    fn test_xdata_collected() {
        let mut common = EntityCommon::new();
        parse_common_property(1001, &Value::new("ACAD"), &mut common).unwrap();
        parse_common_property(1000, &Value::new("payload"), &mut common).unwrap();
        assert_eq!(common.xdata.len(), 2);
        assert_eq!(common.xdata[1], (1000, "payload".to_string()));
    }

    #[test]
    fn test_bad_coercion_propagates() {
        let mut common = EntityCommon::new();
        let err = parse_common_property(62, &Value::new("not-a-color"), &mut common);
        assert!(err.is_err());
    }
}
