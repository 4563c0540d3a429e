//! # dxfgraph
//!
//! A pure Rust streaming parser for CAD drawings in the DXF interchange
//! format.
//!
//! The library reads the line-oriented text form of DXF - pairs of
//! physical lines, a group code followed by a value - and reconstructs an
//! in-memory document graph of entities, tables, blocks, and objects.
//! Parsing is streaming and single-pass: records flow from the tokenizer
//! through an optional filter chain into a registry-driven section/entity
//! dispatcher, and nothing buffers the whole file.
//!
//! ## Quick Start
//!
//! ```rust
//! use dxfgraph::default_parser;
//!
//! let data = "0\nSECTION\n2\nENTITIES\n0\nCIRCLE\n10\n5.0\n20\n7.0\n40\n2.5\n0\nENDSEC\n0\nEOF\n";
//! let mut parser = default_parser();
//! let doc = parser.parse(std::io::Cursor::new(data.as_bytes().to_vec()))?;
//!
//! for entity in doc.entities() {
//!     println!("{} on layer {}", entity.entity_type(), entity.layer());
//! }
//! # Ok::<(), dxfgraph::DxfError>(())
//! ```
//!
//! ## Architecture
//!
//! - [`parser::Tokenizer`] - decodes the byte stream (with codepage
//!   auto-detection from the `$DWGCODEPAGE` header declaration) into
//!   [`parser::GroupRecord`]s.
//! - [`parser::StreamFilter`] - pluggable transformers between tokenizer
//!   and dispatcher.
//! - [`parser::DxfParser`] - the section dispatch state machine; section
//!   handlers that manage entities dispatch one level further to entity
//!   handlers.
//! - [`math::Nurbs`] - evaluates parsed spline definitions;
//!   [`math::spline_to_polyline`] resamples them into polylines.
//! - [`Document`] - the aggregate everything lands in.
//!
//! Unknown sections, entities, and group codes are skipped, not fatal -
//! the format grows vendor extensions and unknown data must not break the
//! rest of the document. Malformed group-code lines and failed numeric
//! coercions abort the parse with the offending line attached.

#![allow(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod document;
pub mod entities;
pub mod error;
pub mod header;
pub mod math;
pub mod notification;
pub mod objects;
pub mod parser;
pub mod tables;
pub mod types;

// Re-export commonly used types
pub use document::Document;
pub use error::{DxfError, Result};
pub use types::{Handle, Point, POINT_CONNECTION_RADIUS};

// Re-export entity types
pub use entities::{
    Arc, Block, Circle, Entity, EntityType, Line, LwPolyline, PointEntity, Polyline, Spline,
};

// Re-export the parse surface
pub use parser::{default_parser, DxfParser, GroupRecord, StreamFilter, Value};

// Re-export curve math
pub use math::{spline_to_polyline, Nurbs};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn test_document_creation() {
        let doc = Document::new();
        assert_eq!(doc.entity_count(), 0);
        assert!(doc.notifications.is_empty());
    }
}
