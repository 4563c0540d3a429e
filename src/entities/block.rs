//! Block definition - a named group of entities

use super::EntityType;
use crate::types::{Handle, Point};

/// A block definition from the BLOCKS section.
///
/// Not itself an [`Entity`](super::Entity): blocks are containers
/// referenced by name, not drawable records in the entity stream.
#[derive(Debug, Clone, Default)]
pub struct Block {
    /// Unique handle (group code 5)
    pub handle: Handle,
    /// Block name (group code 2)
    pub name: String,
    /// Layer name (group code 8)
    pub layer: String,
    /// Insertion base point (group codes 10/20/30)
    pub base_point: Point,
    /// The entities that make up the block, in stream order
    pub entities: Vec<EntityType>,
}

impl Block {
    /// Create a new empty block
    pub fn new(name: impl Into<String>) -> Self {
        Block {
            handle: Handle::NULL,
            name: name.into(),
            layer: "0".to_string(),
            base_point: Point::ZERO,
            entities: Vec::new(),
        }
    }

    /// Append an entity to the block
    pub fn add_entity(&mut self, entity: EntityType) {
        self.entities.push(entity);
    }

    /// Number of entities in the block
    pub fn entity_count(&self) -> usize {
        self.entities.len()
    }
}
