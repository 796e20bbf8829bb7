// SPDX-License-Identifier: Apache-2.0

use crate::grammar::text;
use crate::shared::ValueKind;
use crate::Cursor;

/// Errors reported by the checked entry points.
///
/// The combinators themselves only ever signal success or failure; these
/// variants exist for callers that want a `Result`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseError {
    /// The input does not start with a valid JSON value.
    InvalidSyntax,
    /// A value parsed, but non-whitespace bytes follow it.
    TrailingData {
        /// Offset of the first unexpected byte.
        offset: usize,
    },
    /// A decode buffer with no room for the terminator was supplied.
    EmptyBuffer,
}

impl core::fmt::Display for ParseError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ParseError::InvalidSyntax => f.write_str("invalid JSON syntax"),
            ParseError::TrailingData { offset } => {
                write!(f, "unexpected data after JSON value at offset {offset}")
            }
            ParseError::EmptyBuffer => f.write_str("decode buffer has zero capacity"),
        }
    }
}

/// Checks that `input` is exactly one JSON text, returning the kind of its
/// top-level value.
///
/// # Example
/// ```
/// use picowalk::{validate, ParseError, ValueKind};
/// assert_eq!(validate(b"[1, 2]"), Ok(ValueKind::Array));
/// assert_eq!(validate(b"1 2"), Err(ParseError::TrailingData { offset: 2 }));
/// ```
pub fn validate(input: &[u8]) -> Result<ValueKind, ParseError> {
    validate_from(Cursor::new(input))
}

/// [`validate`] for string slices.
pub fn validate_str(input: &str) -> Result<ValueKind, ParseError> {
    validate(input.as_bytes())
}

/// [`validate`] starting from a caller-configured cursor, e.g. one created
/// with [`Cursor::with_max_depth`].
pub fn validate_from(cursor: Cursor<'_>) -> Result<ValueKind, ParseError> {
    let (end, kind) = text(cursor).ok_or(ParseError::InvalidSyntax)?;
    if end.is_at_end() {
        Ok(kind)
    } else {
        Err(ParseError::TrailingData {
            offset: end.offset(),
        })
    }
}
