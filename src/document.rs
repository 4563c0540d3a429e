//! The document graph populated by a parse

use indexmap::IndexMap;

use crate::entities::{Block, EntityType};
use crate::header::Header;
use crate::notification::NotificationCollection;
use crate::objects::ObjectType;
use crate::tables::{Layer, LineType, Table};
use crate::types::Handle;

/// The in-memory document graph.
///
/// One `Document` is created per parse, populated by the registered
/// handlers, and returned to the caller when the parse completes without a
/// fatal error. Handlers only ever see it as a `&mut Document` scoped to a
/// single callback; nothing retains it past the parse.
#[derive(Debug, Default)]
pub struct Document {
    /// Drawing header variables
    pub header: Header,
    /// Layer table
    pub layers: Table<Layer>,
    /// Line type table
    pub line_types: Table<LineType>,
    /// Block definitions, keyed by name in stream order
    pub blocks: IndexMap<String, Block>,
    /// Non-graphical objects
    pub objects: Vec<ObjectType>,
    /// Non-fatal issues collected during the parse
    pub notifications: NotificationCollection,
    entities: Vec<EntityType>,
}

impl Document {
    /// Create a new empty document
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entity to the model space
    pub fn add_entity(&mut self, entity: EntityType) {
        self.entities.push(entity);
    }

    /// All model-space entities in stream order
    pub fn entities(&self) -> &[EntityType] {
        &self.entities
    }

    /// Number of model-space entities
    pub fn entity_count(&self) -> usize {
        self.entities.len()
    }

    /// Add a block definition, replacing any previous one with the same name
    pub fn add_block(&mut self, block: Block) {
        self.blocks.insert(block.name.to_uppercase(), block);
    }

    /// Look up a block by name (case-insensitive)
    pub fn block(&self, name: &str) -> Option<&Block> {
        self.blocks.get(&name.to_uppercase())
    }

    /// Append a non-graphical object
    pub fn add_object(&mut self, object: ObjectType) {
        self.objects.push(object);
    }

    /// Entities on a given layer, in stream order
    pub fn entities_on_layer<'a>(&'a self, layer: &'a str) -> impl Iterator<Item = &'a EntityType> {
        self.entities.iter().filter(move |e| e.layer() == layer)
    }

    /// Find an entity by handle
    pub fn entity_by_handle(&self, handle: Handle) -> Option<&EntityType> {
        self.entities
            .iter()
            .find(|e| e.as_entity().handle() == handle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::{Circle, Entity};
    use crate::types::Point;

    #[test]
    fn test_document_entities() {
        let mut doc = Document::new();
        assert_eq!(doc.entity_count(), 0);

        doc.add_entity(EntityType::Circle(Circle::from_center_radius(
            Point::new(1.0, 1.0, 0.0),
            2.0,
        )));
        assert_eq!(doc.entity_count(), 1);
        assert_eq!(doc.entities()[0].entity_type(), "CIRCLE");
    }

    #[test]
    fn test_entities_on_layer() {
        let mut doc = Document::new();
        let mut a = Circle::new();
        a.common.layer = "walls".to_string();
        let b = Circle::new();
        doc.add_entity(EntityType::Circle(a));
        doc.add_entity(EntityType::Circle(b));

        assert_eq!(doc.entities_on_layer("walls").count(), 1);
        assert_eq!(doc.entities_on_layer("0").count(), 1);
    }

    #[test]
    fn test_entity_by_handle() {
        let mut doc = Document::new();
        let mut c = Circle::new();
        c.common.handle = Handle(0x42);
        doc.add_entity(EntityType::Circle(c));

        let found = doc.entity_by_handle(Handle(0x42)).unwrap();
        assert_eq!(found.as_entity().handle(), Handle(0x42));
        assert!(doc.entity_by_handle(Handle(0x99)).is_none());
    }

    #[test]
    fn test_blocks() {
        let mut doc = Document::new();
        doc.add_block(Block::new("Door"));
        assert!(doc.block("DOOR").is_some());
        assert!(doc.block("window").is_none());
    }
}
