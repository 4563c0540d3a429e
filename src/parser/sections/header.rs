//! HEADER section handler

use crate::document::Document;
use crate::error::Result;
use crate::parser::handler::SectionHandler;
use crate::parser::value::Value;

/// Group code that names a header variable.
const VARIABLE_NAME: i32 = 9;

/// Parses the HEADER section into the document's generic variable store.
///
/// A code-9 record names a variable (e.g. `$ACADVER`); every following
/// record until the next code-9 attaches to it verbatim.
#[derive(Debug, Default)]
pub struct HeaderSectionHandler {
    current: Option<String>,
}

impl HeaderSectionHandler {
    /// Create a new handler
    pub fn new() -> Self {
        Self::default()
    }
}

impl SectionHandler for HeaderSectionHandler {
    fn section_key(&self) -> &'static str {
        "HEADER"
    }

    fn start_section(&mut self) {
        self.current = None;
    }

    fn parse_group(&mut self, code: i32, value: &Value, doc: &mut Document) -> Result<()> {
        if code == VARIABLE_NAME {
            let name = value.as_str().to_string();
            doc.header.variable_mut(&name);
            self.current = Some(name);
            return Ok(());
        }
        if let Some(name) = &self.current {
            doc.header.variable_mut(name).push(code, value.as_str());
        }
        Ok(())
    }

    fn end_section(&mut self, _doc: &mut Document) {
        self.current = None;
    }

    fn release(&mut self) {
        self.current = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variables_collected() {
        let mut handler = HeaderSectionHandler::new();
        let mut doc = Document::new();

        handler.start_section();
        handler.parse_group(9, &Value::new("$ACADVER"), &mut doc).unwrap();
        handler.parse_group(1, &Value::new("AC1015"), &mut doc).unwrap();
        handler.parse_group(9, &Value::new("$EXTMIN"), &mut doc).unwrap();
        handler.parse_group(10, &Value::new("0.0"), &mut doc).unwrap();
        handler.parse_group(20, &Value::new("-1.5"), &mut doc).unwrap();
        handler.end_section(&mut doc);

        assert_eq!(doc.header.version(), Some("AC1015"));
        let extmin = doc.header.variable("$EXTMIN").unwrap();
        assert_eq!(extmin.get_f64(20), Some(-1.5));
    }

    #[test]
    fn test_records_before_first_name_ignored() {
        let mut handler = HeaderSectionHandler::new();
        let mut doc = Document::new();

        handler.start_section();
        handler.parse_group(1, &Value::new("stray"), &mut doc).unwrap();
        handler.end_section(&mut doc);

        assert!(doc.header.is_empty());
    }
}
