//! ENTITIES section handler

use super::EntityDispatch;
use crate::document::Document;
use crate::error::Result;
use crate::parser::handler::{EntityHandler, SectionHandler};
use crate::parser::value::Value;

/// Composite handler for the ENTITIES section.
///
/// Routes each entity to its registered [`EntityHandler`] and appends
/// finished entities to the document's model space. Unknown entity kinds
/// are skipped.
pub struct EntitiesSectionHandler {
    dispatch: EntityDispatch,
}

impl EntitiesSectionHandler {
    /// Create a handler with no registered entity handlers
    pub fn new() -> Self {
        EntitiesSectionHandler {
            dispatch: EntityDispatch::new(),
        }
    }

    /// Register an entity handler; a later registration under the same
    /// entity name replaces the earlier one.
    pub fn add_entity_handler(&mut self, handler: Box<dyn EntityHandler>) {
        self.dispatch.add_handler(handler);
    }
}

impl Default for EntitiesSectionHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl SectionHandler for EntitiesSectionHandler {
    fn section_key(&self) -> &'static str {
        "ENTITIES"
    }

    fn start_section(&mut self) {}

    fn parse_group(&mut self, code: i32, value: &Value, doc: &mut Document) -> Result<()> {
        if let Some(entity) = self.dispatch.dispatch(code, value, doc)? {
            doc.add_entity(entity);
        }
        Ok(())
    }

    fn end_section(&mut self, doc: &mut Document) {
        if let Some(entity) = self.dispatch.finish() {
            doc.add_entity(entity);
        }
    }

    fn release(&mut self) {
        self.dispatch.release();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::entities::CircleHandler;

    #[test]
    fn test_entity_routed_and_collected() {
        let mut handler = EntitiesSectionHandler::new();
        handler.add_entity_handler(Box::new(CircleHandler::new()));
        let mut doc = Document::new();

        handler.start_section();
        for (code, value) in [
            (0, "CIRCLE"),
            (10, "5.0"),
            (20, "7.0"),
            (40, "2.5"),
        ] {
            handler.parse_group(code, &Value::new(value), &mut doc).unwrap();
        }
        handler.end_section(&mut doc);

        assert_eq!(doc.entity_count(), 1);
        assert_eq!(doc.entities()[0].entity_type(), "CIRCLE");
    }

    #[test]
    fn test_unknown_entity_skipped() {
        let mut handler = EntitiesSectionHandler::new();
        handler.add_entity_handler(Box::new(CircleHandler::new()));
        let mut doc = Document::new();

        handler.start_section();
        for (code, value) in [
            (0, "ELLIPSE"),
            (10, "1.0"),
            (0, "CIRCLE"),
            (40, "1.0"),
        ] {
            handler.parse_group(code, &Value::new(value), &mut doc).unwrap();
        }
        handler.end_section(&mut doc);

        assert_eq!(doc.entity_count(), 1);
    }
}
