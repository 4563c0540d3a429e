//! BLOCKS section handler

use super::EntityDispatch;
use crate::document::Document;
use crate::entities::Block;
use crate::error::Result;
use crate::notification::NotificationType;
use crate::parser::handler::{
    EntityHandler, SectionHandler, GROUPCODE_START_X, GROUPCODE_START_Y, GROUPCODE_START_Z,
};
use crate::parser::value::Value;
use crate::parser::COMMAND_CODE;
use crate::types::Handle;

const BLOCK_START: &str = "BLOCK";
const BLOCK_END: &str = "ENDBLK";

/// Composite handler for the BLOCKS section.
///
/// Same entity-level dispatch as the ENTITIES section, but entities are
/// collected into the currently open `BLOCK ... ENDBLK` definition instead
/// of the model space. Registered entity handlers are independent
/// instances from the ones serving the ENTITIES section.
pub struct BlocksSectionHandler {
    dispatch: EntityDispatch,
    block: Option<Block>,
}

impl BlocksSectionHandler {
    /// Create a handler with no registered entity handlers
    pub fn new() -> Self {
        BlocksSectionHandler {
            dispatch: EntityDispatch::new(),
            block: None,
        }
    }

    /// Register an entity handler; a later registration under the same
    /// entity name replaces the earlier one.
    pub fn add_entity_handler(&mut self, handler: Box<dyn EntityHandler>) {
        self.dispatch.add_handler(handler);
    }

    fn close_entity(&mut self) {
        if let Some(entity) = self.dispatch.finish() {
            if let Some(block) = self.block.as_mut() {
                block.add_entity(entity);
            }
        }
    }

    fn flush_block(&mut self, doc: &mut Document) {
        if let Some(block) = self.block.take() {
            if block.name.is_empty() {
                doc.notifications
                    .notify(NotificationType::Warning, "unnamed block discarded");
            } else {
                doc.add_block(block);
            }
        }
    }
}

impl Default for BlocksSectionHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl SectionHandler for BlocksSectionHandler {
    fn section_key(&self) -> &'static str {
        "BLOCKS"
    }

    fn start_section(&mut self) {
        self.block = None;
    }

    fn parse_group(&mut self, code: i32, value: &Value, doc: &mut Document) -> Result<()> {
        if code == COMMAND_CODE {
            match value.as_str() {
                BLOCK_START => {
                    self.close_entity();
                    self.flush_block(doc);
                    self.block = Some(Block::new(String::new()));
                    return Ok(());
                }
                BLOCK_END => {
                    self.close_entity();
                    self.flush_block(doc);
                    return Ok(());
                }
                _ => {
                    if let Some(entity) = self.dispatch.dispatch(code, value, doc)? {
                        if let Some(block) = self.block.as_mut() {
                            block.add_entity(entity);
                        }
                    }
                    return Ok(());
                }
            }
        }

        // while an entity is open, every record belongs to it
        if self.dispatch.is_active() {
            if let Some(entity) = self.dispatch.dispatch(code, value, doc)? {
                if let Some(block) = self.block.as_mut() {
                    block.add_entity(entity);
                }
            }
            return Ok(());
        }

        // otherwise the record belongs to the block header itself
        if let Some(block) = self.block.as_mut() {
            match code {
                2 | 3 => block.name = value.as_str().to_string(),
                5 => block.handle = value.as_handle().unwrap_or(Handle::NULL),
                8 => block.layer = value.as_str().to_string(),
                GROUPCODE_START_X => block.base_point.x = value.as_f64()?,
                GROUPCODE_START_Y => block.base_point.y = value.as_f64()?,
                GROUPCODE_START_Z => block.base_point.z = value.as_f64()?,
                _ => {}
            }
        }
        Ok(())
    }

    fn end_section(&mut self, doc: &mut Document) {
        self.close_entity();
        self.flush_block(doc);
    }

    fn release(&mut self) {
        self.block = None;
        self.dispatch.release();
    }
}
