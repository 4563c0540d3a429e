//! The parse session: filter chain wiring, section dispatch state machine

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use ahash::AHashMap;
use encoding_rs::Encoding;

use super::filter::{Downstream, StreamFilter};
use super::handler::SectionHandler;
use super::tokenizer::Tokenizer;
use super::value::GroupRecord;
use super::{COMMAND_CODE, SECTION_END, SECTION_START};
use crate::document::Document;
use crate::error::Result;
use crate::notification::NotificationType;

/// Dispatcher state. One explicit value instead of scattered flags, so
/// illegal combinations cannot be represented.
#[derive(Debug, Default)]
enum ParseState {
    /// Outside any section
    #[default]
    Idle,
    /// Just saw a code-0 SECTION marker; the next record names the section
    AwaitingSectionName,
    /// A registered handler is active and receiving records
    InSection(String),
}

/// Routes group records to the registered section handlers.
pub(crate) struct Dispatcher {
    handlers: AHashMap<String, Box<dyn SectionHandler>>,
    state: ParseState,
}

impl Dispatcher {
    pub(crate) fn new() -> Self {
        Dispatcher {
            handlers: AHashMap::new(),
            state: ParseState::Idle,
        }
    }

    /// Register a handler under its section key. A later registration
    /// under the same key replaces the earlier one.
    pub(crate) fn register(&mut self, handler: Box<dyn SectionHandler>) {
        self.handlers
            .insert(handler.section_key().to_string(), handler);
    }

    /// Feed one record through the state machine.
    pub(crate) fn dispatch(&mut self, record: GroupRecord, doc: &mut Document) -> Result<()> {
        match std::mem::take(&mut self.state) {
            ParseState::Idle => {
                if record.code == COMMAND_CODE && record.value.as_str() == SECTION_START {
                    self.state = ParseState::AwaitingSectionName;
                }
                // everything else outside a section (EOF marker included)
                // is ignored
                Ok(())
            }
            ParseState::AwaitingSectionName => {
                let name = record.value.as_str();
                match self.handlers.get_mut(name) {
                    Some(handler) => {
                        handler.start_section();
                        self.state = ParseState::InSection(name.to_string());
                    }
                    None => {
                        doc.notifications
                            .notify(NotificationType::Skipped, format!("section {name}"));
                        self.state = ParseState::Idle;
                    }
                }
                Ok(())
            }
            ParseState::InSection(key) => {
                if record.code == COMMAND_CODE && record.value.as_str() == SECTION_END {
                    if let Some(handler) = self.handlers.get_mut(&key) {
                        handler.end_section(doc);
                    }
                    self.state = ParseState::Idle;
                    return Ok(());
                }
                let result = match self.handlers.get_mut(&key) {
                    Some(handler) => handler.parse_group(record.code, &record.value, doc),
                    None => Ok(()),
                };
                // restore state before surfacing any handler error
                self.state = ParseState::InSection(key);
                result
            }
        }
    }

    /// End of stream: close an active section, reset the state machine.
    pub(crate) fn finish(&mut self, doc: &mut Document) {
        if let ParseState::InSection(key) = std::mem::take(&mut self.state) {
            if let Some(handler) = self.handlers.get_mut(&key) {
                handler.end_section(doc);
            }
        }
    }

    /// Administrative teardown at parse end.
    pub(crate) fn release(&mut self) {
        self.state = ParseState::Idle;
        for handler in self.handlers.values_mut() {
            handler.release();
        }
    }
}

/// The parse session - tokenizer, filter chain, and section dispatch in
/// one sequential pull/push pipeline.
///
/// Register every handler and filter before the first `parse` call.
/// A parser instance may run any number of parses, one at a time; handler
/// state is reset between parses, but a single parser (and its handlers)
/// must never be shared between concurrently running parses.
pub struct DxfParser {
    filters: Vec<Box<dyn StreamFilter>>,
    dispatcher: Dispatcher,
}

impl DxfParser {
    /// Create a parser with no registered handlers or filters
    pub fn new() -> Self {
        DxfParser {
            filters: Vec::new(),
            dispatcher: Dispatcher::new(),
        }
    }

    /// Register a section handler. A later registration under the same
    /// section key replaces the earlier one.
    pub fn add_section_handler(&mut self, handler: Box<dyn SectionHandler>) {
        self.dispatcher.register(handler);
    }

    /// Append a stream filter. Records flow through filters in
    /// registration order before reaching the dispatcher.
    pub fn add_stream_filter(&mut self, filter: Box<dyn StreamFilter>) {
        self.filters.push(filter);
    }

    /// Parse a stream, auto-detecting the encoding from the header.
    ///
    /// Blocks until end of stream or the first fatal error. On success the
    /// populated document is handed to the caller; on error the partially
    /// built document is discarded.
    pub fn parse<R: Read>(&mut self, input: R) -> Result<Document> {
        let tokenizer = Tokenizer::new(input)?;
        self.run(tokenizer)
    }

    /// Parse a stream with an explicit encoding, skipping detection.
    pub fn parse_with_encoding<R: Read>(
        &mut self,
        input: R,
        encoding: &'static Encoding,
    ) -> Result<Document> {
        let tokenizer = Tokenizer::with_encoding(input, encoding)?;
        self.run(tokenizer)
    }

    /// Parse a file, auto-detecting the encoding.
    pub fn parse_file<P: AsRef<Path>>(&mut self, path: P) -> Result<Document> {
        let file = File::open(path)?;
        self.parse(BufReader::new(file))
    }

    fn run<R: Read>(&mut self, mut tokenizer: Tokenizer<R>) -> Result<Document> {
        let mut doc = Document::new();
        let result = self.pump(&mut tokenizer, &mut doc);
        // release runs regardless of outcome so handler instances are
        // clean for the next parse
        self.release();
        result.map(|()| doc)
    }

    fn pump<R: Read>(&mut self, tokenizer: &mut Tokenizer<R>, doc: &mut Document) -> Result<()> {
        while let Some(record) = tokenizer.next_record()? {
            let mut downstream = Downstream {
                filters: &mut self.filters[..],
                dispatcher: &mut self.dispatcher,
                document: doc,
            };
            downstream.emit(record)?;
        }
        self.dispatcher.finish(doc);
        Ok(())
    }

    fn release(&mut self) {
        self.dispatcher.release();
        for filter in &mut self.filters {
            filter.release();
        }
    }
}

impl Default for DxfParser {
    fn default() -> Self {
        Self::new()
    }
}
