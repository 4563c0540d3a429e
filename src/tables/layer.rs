//! Layer table entry

use super::TableEntry;
use crate::types::Handle;

bitflags::bitflags! {
    /// Layer standard flags (group code 70)
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct LayerFlags: i32 {
        /// Layer is frozen
        const FROZEN = 1;
        /// Layer is frozen by default in new viewports
        const FROZEN_NEW_VIEWPORTS = 2;
        /// Layer is locked
        const LOCKED = 4;
    }
}

/// A layer table entry
#[derive(Debug, Clone)]
pub struct Layer {
    /// Unique handle
    pub handle: Handle,
    /// Layer name
    pub name: String,
    /// Standard flags
    pub flags: LayerFlags,
    /// ACI color index; negative means the layer is off
    pub color: i32,
    /// Line type name
    pub line_type: String,
}

impl Layer {
    /// Create a new layer with default settings
    pub fn new(name: impl Into<String>) -> Self {
        Layer {
            handle: Handle::NULL,
            name: name.into(),
            flags: LayerFlags::empty(),
            color: 7,
            line_type: "CONTINUOUS".to_string(),
        }
    }

    /// Is the layer visible? (a negative color index means off)
    pub fn is_visible(&self) -> bool {
        self.color >= 0
    }

    /// Is the layer frozen?
    pub fn is_frozen(&self) -> bool {
        self.flags.contains(LayerFlags::FROZEN)
    }
}

impl TableEntry for Layer {
    fn handle(&self) -> Handle {
        self.handle
    }

    fn name(&self) -> &str {
        &self.name
    }
}
