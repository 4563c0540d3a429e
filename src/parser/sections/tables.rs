//! TABLES section handler

use crate::document::Document;
use crate::error::Result;
use crate::parser::handler::SectionHandler;
use crate::parser::value::Value;
use crate::parser::COMMAND_CODE;
use crate::tables::{Layer, LayerFlags, LineType};
use crate::types::Handle;

/// Which table block is currently open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TableKind {
    Layer,
    LineType,
}

/// Parses LAYER and LTYPE entries from the TABLES section.
///
/// The section is a sequence of `TABLE ... ENDTAB` blocks; the code-2
/// record after a TABLE marker names the table kind, and each entry
/// inside opens with a code-0 record repeating that kind. Unknown table
/// kinds are skipped.
#[derive(Debug, Default)]
pub struct TablesSectionHandler {
    kind: Option<TableKind>,
    awaiting_kind: bool,
    layer: Option<Layer>,
    line_type: Option<LineType>,
}

impl TablesSectionHandler {
    /// Create a new handler
    pub fn new() -> Self {
        Self::default()
    }

    fn flush_entry(&mut self, doc: &mut Document) {
        if let Some(layer) = self.layer.take() {
            if !layer.name.is_empty() {
                doc.layers.add(layer);
            }
        }
        if let Some(line_type) = self.line_type.take() {
            if !line_type.name.is_empty() {
                doc.line_types.add(line_type);
            }
        }
    }
}

impl SectionHandler for TablesSectionHandler {
    fn section_key(&self) -> &'static str {
        "TABLES"
    }

    fn start_section(&mut self) {
        self.kind = None;
        self.awaiting_kind = false;
        self.layer = None;
        self.line_type = None;
    }

    fn parse_group(&mut self, code: i32, value: &Value, doc: &mut Document) -> Result<()> {
        if code == COMMAND_CODE {
            self.flush_entry(doc);
            match value.as_str() {
                "TABLE" => {
                    self.awaiting_kind = true;
                    self.kind = None;
                }
                "ENDTAB" => {
                    self.kind = None;
                }
                "LAYER" if self.kind == Some(TableKind::Layer) => {
                    self.layer = Some(Layer::new(""));
                }
                "LTYPE" if self.kind == Some(TableKind::LineType) => {
                    self.line_type = Some(LineType::new(""));
                }
                _ => {
                    // entry of an unsupported table kind
                }
            }
            return Ok(());
        }

        if self.awaiting_kind && code == 2 {
            self.awaiting_kind = false;
            self.kind = match value.as_str() {
                "LAYER" => Some(TableKind::Layer),
                "LTYPE" => Some(TableKind::LineType),
                _ => None,
            };
            return Ok(());
        }

        if let Some(layer) = self.layer.as_mut() {
            match code {
                2 => layer.name = value.as_str().to_string(),
                5 => layer.handle = value.as_handle().unwrap_or(Handle::NULL),
                6 => layer.line_type = value.as_str().to_string(),
                62 => layer.color = value.as_i32()?,
                70 => layer.flags = LayerFlags::from_bits_truncate(value.as_i32()?),
                _ => {}
            }
        } else if let Some(line_type) = self.line_type.as_mut() {
            match code {
                2 => line_type.name = value.as_str().to_string(),
                3 => line_type.description = value.as_str().to_string(),
                5 => line_type.handle = value.as_handle().unwrap_or(Handle::NULL),
                40 => line_type.pattern_length = value.as_f64()?,
                49 => line_type.pattern.push(value.as_f64()?),
                _ => {}
            }
        }
        Ok(())
    }

    fn end_section(&mut self, doc: &mut Document) {
        self.flush_entry(doc);
        self.kind = None;
        self.awaiting_kind = false;
    }

    fn release(&mut self) {
        self.kind = None;
        self.awaiting_kind = false;
        self.layer = None;
        self.line_type = None;
    }
}
