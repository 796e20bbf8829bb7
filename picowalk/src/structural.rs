// SPDX-License-Identifier: Apache-2.0

//! Insignificant whitespace and the six structural characters.

use crate::matcher::literal_char;
use crate::Cursor;

fn is_ws(byte: u8) -> bool {
    matches!(byte, b' ' | b'\t' | b'\n' | b'\r')
}

/// Skips any run of space, tab, newline and carriage return. Never fails.
pub fn skip_ws(cursor: Cursor<'_>) -> Cursor<'_> {
    let run = cursor
        .remaining()
        .iter()
        .take_while(|&&byte| is_ws(byte))
        .count();
    cursor.advance(run).unwrap_or(cursor)
}

/// Matches `token` with optional whitespace on either side.
fn ws_char_ws(token: u8, cursor: Cursor<'_>) -> Option<Cursor<'_>> {
    literal_char(token, skip_ws(cursor)).map(skip_ws)
}

/// `[` with surrounding whitespace.
pub fn begin_array(cursor: Cursor<'_>) -> Option<Cursor<'_>> {
    ws_char_ws(b'[', cursor)
}

/// `]` with surrounding whitespace.
pub fn end_array(cursor: Cursor<'_>) -> Option<Cursor<'_>> {
    ws_char_ws(b']', cursor)
}

/// `{` with surrounding whitespace.
pub fn begin_object(cursor: Cursor<'_>) -> Option<Cursor<'_>> {
    ws_char_ws(b'{', cursor)
}

/// `}` with surrounding whitespace.
pub fn end_object(cursor: Cursor<'_>) -> Option<Cursor<'_>> {
    ws_char_ws(b'}', cursor)
}

/// `:` with surrounding whitespace.
pub fn name_separator(cursor: Cursor<'_>) -> Option<Cursor<'_>> {
    ws_char_ws(b':', cursor)
}

/// `,` with surrounding whitespace.
pub fn value_separator(cursor: Cursor<'_>) -> Option<Cursor<'_>> {
    ws_char_ws(b',', cursor)
}

/// Opening `"`. Whitespace is significant here and is not skipped.
pub fn begin_string(cursor: Cursor<'_>) -> Option<Cursor<'_>> {
    literal_char(b'"', cursor)
}

/// Closing `"`.
pub fn end_string(cursor: Cursor<'_>) -> Option<Cursor<'_>> {
    literal_char(b'"', cursor)
}
