//! Non-graphical objects from the OBJECTS section

use crate::types::Handle;

/// An image definition object (IMAGEDEF) - the file reference a raster
/// image entity points at.
#[derive(Debug, Clone, Default)]
pub struct ImageDef {
    /// Unique handle (group code 5)
    pub handle: Handle,
    /// Path of the referenced image file (group code 1)
    pub file_path: String,
    /// Image width in pixels (group code 10)
    pub width: f64,
    /// Image height in pixels (group code 20)
    pub height: f64,
}

impl ImageDef {
    /// Create a new empty image definition
    pub fn new() -> Self {
        Self::default()
    }
}

/// Closed set of object kinds the document graph can hold.
#[derive(Debug, Clone)]
pub enum ObjectType {
    ImageDef(ImageDef),
}

impl ObjectType {
    /// The DXF type name of the wrapped object
    pub fn object_type(&self) -> &'static str {
        match self {
            ObjectType::ImageDef(_) => "IMAGEDEF",
        }
    }

    /// The wrapped object's handle
    pub fn handle(&self) -> Handle {
        match self {
            ObjectType::ImageDef(o) => o.handle,
        }
    }
}
