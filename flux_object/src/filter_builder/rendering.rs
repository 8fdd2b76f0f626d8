//! Predicate rendering
//!
//! Turns an entry log into Flux predicate text in a single left-to-right pass.

use crate::filter_builder::entry::FilterEntry;
use std::fmt::Write;

pub struct FilterRenderer;

impl FilterRenderer {
    /// Render entries in order, without any structural checks
    pub fn render(entries: &[FilterEntry]) -> String {
        let mut buffer = String::new();

        for entry in entries {
            // Writing into a String cannot fail
            let _ = write!(buffer, "{}", entry);
        }

        tracing::trace!(entries = entries.len(), "rendered filter predicate");
        buffer
    }
}
