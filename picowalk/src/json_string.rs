// SPDX-License-Identifier: Apache-2.0

use crate::escape_processor::character;
use crate::structural::{begin_string, end_string, name_separator};
use crate::Cursor;

/// Iterator over the decoded characters of a string body.
///
/// Yields each decoded byte together with the cursor just past it, and stops
/// at the first position where [`character`] fails, normally the closing
/// quote.
#[derive(Debug, Clone)]
pub struct Characters<'a> {
    cursor: Option<Cursor<'a>>,
}

impl<'a> Characters<'a> {
    /// Starts decoding at `body`, the position just after an opening quote.
    pub fn new(body: Cursor<'a>) -> Self {
        Self { cursor: Some(body) }
    }
}

impl<'a> Iterator for Characters<'a> {
    type Item = (Cursor<'a>, u8);

    fn next(&mut self) -> Option<Self::Item> {
        let decoded = character(self.cursor?);
        self.cursor = decoded.map(|(next, _)| next);
        decoded
    }
}

/// Matches a complete string, returning the cursor past the closing quote
/// and the number of decoded characters.
///
/// The count is of decoded characters, not raw bytes, so it can be used to
/// size an [`unescape`](crate::unescape) buffer (plus one for the terminator).
pub fn string(cursor: Cursor<'_>) -> Option<(Cursor<'_>, usize)> {
    let body = begin_string(cursor)?;
    let (end, length) = Characters::new(body)
        .fold((body, 0usize), |(_, length), (next, _)| (next, length + 1));
    Some((end_string(end)?, length))
}

/// An object member name: a string followed by `:`.
pub fn name(cursor: Cursor<'_>) -> Option<Cursor<'_>> {
    let (cursor, _) = string(cursor)?;
    name_separator(cursor)
}
