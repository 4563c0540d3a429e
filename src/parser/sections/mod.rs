//! Section handlers and the shared entity-level dispatch they build on

use ahash::AHashMap;

use crate::document::Document;
use crate::entities::EntityType;
use crate::error::Result;
use crate::notification::NotificationType;

use super::handler::EntityHandler;
use super::value::Value;
use super::COMMAND_CODE;

pub mod blocks;
pub mod entities;
pub mod header;
pub mod objects;
pub mod tables;

pub use blocks::BlocksSectionHandler;
pub use entities::EntitiesSectionHandler;
pub use header::HeaderSectionHandler;
pub use objects::ObjectsSectionHandler;
pub use tables::TablesSectionHandler;

/// Entity-level dispatch shared by the composite section handlers.
///
/// Tracks the active entity handler, keyed by the value of each code-0
/// record. A handler whose `follows_sequence()` is true keeps receiving
/// code-0 sub-records (VERTEX, SEQEND) until it clears the flag itself;
/// only then does the next boundary code close the entity.
pub(crate) struct EntityDispatch {
    handlers: AHashMap<String, Box<dyn EntityHandler>>,
    active: Option<String>,
}

impl EntityDispatch {
    pub(crate) fn new() -> Self {
        EntityDispatch {
            handlers: AHashMap::new(),
            active: None,
        }
    }

    /// Register a handler under its entity name; last registration wins.
    pub(crate) fn add_handler(&mut self, handler: Box<dyn EntityHandler>) {
        self.handlers
            .insert(handler.entity_name().to_string(), handler);
    }

    /// Is an entity currently being parsed?
    pub(crate) fn is_active(&self) -> bool {
        self.active.is_some()
    }

    /// Feed one record. Returns a finished entity when a boundary code
    /// closes the previous one.
    pub(crate) fn dispatch(
        &mut self,
        code: i32,
        value: &Value,
        doc: &mut Document,
    ) -> Result<Option<EntityType>> {
        if code == COMMAND_CODE {
            if let Some(key) = self.active.take() {
                if let Some(handler) = self.handlers.get_mut(&key) {
                    if handler.follows_sequence() {
                        // the entity absorbs its own sub-records
                        handler.parse_group(code, value)?;
                        self.active = Some(key);
                        return Ok(None);
                    }
                    handler.end_entity();
                    let finished = handler.take_entity();
                    self.begin(value, doc);
                    return Ok(finished);
                }
            }
            self.begin(value, doc);
            return Ok(None);
        }

        if let Some(key) = &self.active {
            if let Some(handler) = self.handlers.get_mut(key.as_str()) {
                handler.parse_group(code, value)?;
            }
        }
        Ok(None)
    }

    /// Close any open entity (section end).
    pub(crate) fn finish(&mut self) -> Option<EntityType> {
        let key = self.active.take()?;
        let handler = self.handlers.get_mut(&key)?;
        handler.end_entity();
        handler.take_entity()
    }

    pub(crate) fn release(&mut self) {
        self.active = None;
        for handler in self.handlers.values_mut() {
            handler.release();
        }
    }

    fn begin(&mut self, value: &Value, doc: &mut Document) {
        let name = value.as_str();
        match self.handlers.get_mut(name) {
            Some(handler) => {
                handler.start_entity();
                self.active = Some(name.to_string());
            }
            None => {
                doc.notifications
                    .notify(NotificationType::Skipped, format!("entity {name}"));
                self.active = None;
            }
        }
    }
}
