//! Default parser assembly

use super::dispatcher::DxfParser;
use super::entities::{
    ArcHandler, CircleHandler, LineHandler, LwPolylineHandler, PointHandler, PolylineHandler,
    SplineHandler,
};
use super::handler::EntityHandler;
use super::sections::{
    BlocksSectionHandler, EntitiesSectionHandler, HeaderSectionHandler, ObjectsSectionHandler,
    TablesSectionHandler,
};

/// The standard entity handler set.
///
/// Called once per composite section so BLOCKS and ENTITIES each get
/// independent handler instances - handlers are stateful across an entity
/// cycle and must not be shared.
fn standard_entity_handlers() -> Vec<Box<dyn EntityHandler>> {
    vec![
        Box::new(PointHandler::new()),
        Box::new(LineHandler::new()),
        Box::new(CircleHandler::new()),
        Box::new(ArcHandler::new()),
        Box::new(PolylineHandler::new()),
        Box::new(LwPolylineHandler::new()),
        Box::new(SplineHandler::new()),
    ]
}

/// Assemble a parser with every section and entity handler this crate
/// ships registered. Callers can still add filters and further handlers
/// before the first parse.
pub fn default_parser() -> DxfParser {
    let mut parser = DxfParser::new();

    parser.add_section_handler(Box::new(HeaderSectionHandler::new()));
    parser.add_section_handler(Box::new(TablesSectionHandler::new()));

    let mut blocks = BlocksSectionHandler::new();
    for handler in standard_entity_handlers() {
        blocks.add_entity_handler(handler);
    }
    parser.add_section_handler(Box::new(blocks));

    let mut entities = EntitiesSectionHandler::new();
    for handler in standard_entity_handlers() {
        entities.add_entity_handler(handler);
    }
    parser.add_section_handler(Box::new(entities));

    parser.add_section_handler(Box::new(ObjectsSectionHandler::new()));

    parser
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_default_parser_parses_minimal_stream() {
        let data = "0\nSECTION\n2\nENTITIES\n0\nCIRCLE\n40\n1.0\n0\nENDSEC\n0\nEOF\n";
        let mut parser = default_parser();
        let doc = parser.parse(Cursor::new(data.as_bytes().to_vec())).unwrap();
        assert_eq!(doc.entity_count(), 1);
    }
}
