//! Streaming parser for the two-line group record format.
//!
//! The pipeline is a single sequential pull/push chain:
//!
//! ```text
//! Tokenizer -> filter chain -> section dispatch -> (section handler -> entity handler)* -> Document
//! ```
//!
//! Each record is fully processed - through every registered filter and
//! nested handler - before the next is read. Parsing blocks the calling
//! thread until end of stream or the first fatal error; independent parses
//! may run concurrently as long as each uses its own [`DxfParser`].

pub mod builder;
pub mod encoding;
pub mod entities;
pub mod filter;
pub mod handler;
pub mod sections;
pub mod tokenizer;
pub mod value;

mod dispatcher;

pub use builder::default_parser;
pub use dispatcher::DxfParser;
pub use encoding::{detect_code_page, encoding_from_code_page, CODEPAGE_PROBE_LIMIT};
pub use filter::{CommentFilter, Downstream, StreamFilter, COMMENT_CODE};
pub use handler::{EntityHandler, SectionHandler};
pub use tokenizer::Tokenizer;
pub use value::{GroupRecord, Value};

/// Group code of section/entity boundary records.
pub const COMMAND_CODE: i32 = 0;
/// Value opening a section.
pub const SECTION_START: &str = "SECTION";
/// Value closing a section.
pub const SECTION_END: &str = "ENDSEC";
/// Value closing a follows-sequence entity's sub-record run.
pub const SEQUENCE_END: &str = "SEQEND";
/// Value marking the end of the stream. Carries no semantics of its own -
/// records outside sections are ignored anyway.
pub const END_OF_FILE: &str = "EOF";
