// SPDX-License-Identifier: Apache-2.0

//! Primitive matchers and the ordered-alternative combinator.

use crate::Cursor;

/// A combinator that may decode a value of type `T` on success.
pub type Combinator<'a, T> = fn(Cursor<'a>) -> Option<(Cursor<'a>, T)>;

/// Matches the single byte `expected` at the cursor.
pub fn literal_char(expected: u8, cursor: Cursor<'_>) -> Option<Cursor<'_>> {
    match cursor.next_byte()? {
        (next, byte) if byte == expected => Some(next),
        _ => None,
    }
}

/// Matches `expected` as a prefix of the remaining text.
pub fn literal_str<'a>(expected: &[u8], cursor: Cursor<'a>) -> Option<Cursor<'a>> {
    if cursor.remaining().starts_with(expected) {
        cursor.advance(expected.len())
    } else {
        None
    }
}

/// Tries each alternative at the same cursor, in order, and returns the
/// first one that matches.
///
/// # Example
/// ```
/// use picowalk::{first_match_of, literal_str, Combinator, Cursor};
/// let alternatives: [Combinator<'_, bool>; 2] = [
///     |c| literal_str(b"true", c).map(|c| (c, true)),
///     |c| literal_str(b"false", c).map(|c| (c, false)),
/// ];
/// let (next, value) = first_match_of(Cursor::new(b"false"), &alternatives).unwrap();
/// assert!(!value);
/// assert!(next.is_at_end());
/// ```
pub fn first_match_of<'a, T>(
    cursor: Cursor<'a>,
    alternatives: &[Combinator<'a, T>],
) -> Option<(Cursor<'a>, T)> {
    alternatives.iter().find_map(|alternative| alternative(cursor))
}
