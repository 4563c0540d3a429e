//! OBJECTS section handler

use crate::document::Document;
use crate::error::Result;
use crate::notification::NotificationType;
use crate::objects::{ImageDef, ObjectType};
use crate::parser::handler::{SectionHandler, GROUPCODE_START_X, GROUPCODE_START_Y};
use crate::parser::value::Value;
use crate::parser::COMMAND_CODE;
use crate::types::Handle;

/// Parses the OBJECTS section.
///
/// IMAGEDEF objects are reconstructed; every other object kind is skipped
/// permissively and recorded as a notification.
#[derive(Debug, Default)]
pub struct ObjectsSectionHandler {
    image_def: Option<ImageDef>,
}

impl ObjectsSectionHandler {
    /// Create a new handler
    pub fn new() -> Self {
        Self::default()
    }

    fn flush(&mut self, doc: &mut Document) {
        if let Some(def) = self.image_def.take() {
            doc.add_object(ObjectType::ImageDef(def));
        }
    }
}

impl SectionHandler for ObjectsSectionHandler {
    fn section_key(&self) -> &'static str {
        "OBJECTS"
    }

    fn start_section(&mut self) {
        self.image_def = None;
    }

    fn parse_group(&mut self, code: i32, value: &Value, doc: &mut Document) -> Result<()> {
        if code == COMMAND_CODE {
            self.flush(doc);
            if value.as_str() == "IMAGEDEF" {
                self.image_def = Some(ImageDef::new());
            } else {
                doc.notifications
                    .notify(NotificationType::Skipped, format!("object {value}"));
            }
            return Ok(());
        }

        if let Some(def) = self.image_def.as_mut() {
            match code {
                1 => def.file_path = value.as_str().to_string(),
                5 => def.handle = value.as_handle().unwrap_or(Handle::NULL),
                GROUPCODE_START_X => def.width = value.as_f64()?,
                GROUPCODE_START_Y => def.height = value.as_f64()?,
                _ => {}
            }
        }
        Ok(())
    }

    fn end_section(&mut self, doc: &mut Document) {
        self.flush(doc);
    }

    fn release(&mut self) {
        self.image_def = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_image_def_parsed() {
        let mut handler = ObjectsSectionHandler::new();
        let mut doc = Document::new();

        handler.start_section();
        for (code, value) in [
            (0, "DICTIONARY"),
            (5, "C"),
            (0, "IMAGEDEF"),
            (5, "2A"),
            (1, "textures/brick.png"),
            (10, "640.0"),
            (20, "480.0"),
        ] {
            handler.parse_group(code, &Value::new(value), &mut doc).unwrap();
        }
        handler.end_section(&mut doc);

        assert_eq!(doc.objects.len(), 1);
        let ObjectType::ImageDef(def) = &doc.objects[0];
        assert_eq!(def.file_path, "textures/brick.png");
        assert_eq!(def.handle, Handle(0x2A));
        assert_eq!(def.width, 640.0);
        assert!(doc.notifications.has_type(NotificationType::Skipped));
    }
}
