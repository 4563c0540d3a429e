//! Stream filter chain.
//!
//! Zero or more transformers sit between the tokenizer and the dispatcher.
//! Each filter receives one record and may suppress it, rewrite it, or
//! emit any number of records downstream. Filters run in registration
//! order: a record flows through filter 0, then filter 1, ..., then the
//! dispatcher. Ownership lives in a single vector on the parser; the
//! "next consumer" wiring is the tail slice a [`Downstream`] hands to each
//! stage, with the dispatcher as the terminal consumer.
//!
//! Filters must not reorder unrelated records - section boundary detection
//! downstream depends on code-0 SECTION/ENDSEC records keeping their
//! original relative order.

use super::dispatcher::Dispatcher;
use super::value::GroupRecord;
use crate::document::Document;
use crate::error::Result;

/// Group code of DXF comment records, suppressed by [`CommentFilter`].
pub const COMMENT_CODE: i32 = 999;

/// A stream transformer between tokenizer and dispatcher.
pub trait StreamFilter {
    /// Process one record. Call [`Downstream::emit`] zero or more times to
    /// pass records on; not calling it suppresses the record.
    fn parse_group(&mut self, record: GroupRecord, downstream: &mut Downstream<'_>) -> Result<()>;

    /// Administrative teardown at parse end; clears any per-parse state.
    fn release(&mut self) {}
}

/// The rest of the pipeline, as seen by one filter stage.
pub struct Downstream<'a> {
    pub(crate) filters: &'a mut [Box<dyn StreamFilter>],
    pub(crate) dispatcher: &'a mut Dispatcher,
    pub(crate) document: &'a mut Document,
}

impl Downstream<'_> {
    /// Send a record to the next consumer - the following filter in
    /// registration order, or the dispatcher when this is the last stage.
    pub fn emit(&mut self, record: GroupRecord) -> Result<()> {
        match self.filters.split_first_mut() {
            Some((first, rest)) => {
                let mut next = Downstream {
                    filters: rest,
                    dispatcher: &mut *self.dispatcher,
                    document: &mut *self.document,
                };
                first.parse_group(record, &mut next)
            }
            None => self.dispatcher.dispatch(record, self.document),
        }
    }
}

/// Suppresses comment records (group code 999) before they reach the
/// dispatcher.
#[derive(Debug, Default)]
pub struct CommentFilter;

impl CommentFilter {
    /// Create a new comment filter
    pub fn new() -> Self {
        CommentFilter
    }
}

impl StreamFilter for CommentFilter {
    fn parse_group(&mut self, record: GroupRecord, downstream: &mut Downstream<'_>) -> Result<()> {
        if record.code == COMMENT_CODE {
            return Ok(());
        }
        downstream.emit(record)
    }
}
