// SPDX-License-Identifier: Apache-2.0

//! Walking already-valid JSON in place.
//!
//! These helpers assume the text is well formed. On malformed input they
//! fail somewhere along the way rather than reporting why.

use core::cmp::Ordering;

use crate::escape_processor::character;
use crate::grammar::{element, member};
use crate::json_string::{name, Characters};
use crate::parse_error::ParseError;
use crate::structural::begin_string;
use crate::Cursor;

/// Compares `literal` with the decoded contents of a string, one character
/// at a time, without decoding the whole string anywhere.
///
/// `body` is positioned just past the opening quote, as returned by
/// [`begin_string`]. The result is the ordering of `literal` relative to the
/// decoded string; `Equal` means both end together.
///
/// Any byte that does not decode (a control character, a bad escape) ends
/// the string here, so malformed input may compare `Equal` to its valid
/// prefix. [`lookup`] still rejects such a name afterwards.
///
/// # Example
/// ```
/// use picowalk::{begin_string, compare, Cursor};
/// use core::cmp::Ordering;
/// let body = begin_string(Cursor::new(br#""a\nb""#)).unwrap();
/// assert_eq!(compare("a\nb", body), Ordering::Equal);
/// assert_eq!(compare("a", body), Ordering::Less);
/// ```
pub fn compare(literal: &str, body: Cursor<'_>) -> Ordering {
    literal
        .bytes()
        .cmp(Characters::new(body).map(|(_, byte)| byte))
}

/// Skips `n` elements of an array.
///
/// `cursor` is positioned at the first element (just past `[`). There is no
/// bounds check: stepping past the last element leaves the cursor on `]`,
/// and stepping further fails.
pub fn index(n: usize, cursor: Cursor<'_>) -> Option<Cursor<'_>> {
    (0..n).try_fold(cursor, |cursor, _| element(cursor))
}

/// Finds the first member named `key`, returning a cursor at its name.
///
/// `cursor` is positioned at the first member (just past `{`). With
/// duplicate names the first occurrence wins.
pub fn find<'a>(key: &str, mut cursor: Cursor<'a>) -> Option<Cursor<'a>> {
    loop {
        if compare(key, begin_string(cursor)?) == Ordering::Equal {
            return Some(cursor);
        }
        cursor = member(cursor)?;
    }
}

/// Finds the member named `key`, returning a cursor at its value.
///
/// # Example
/// ```
/// use picowalk::{begin_array, begin_object, index, lookup, number, Cursor};
/// let doc = Cursor::new(br#"{"a": 1, "b": [2, 3]}"#);
/// let b = lookup("b", begin_object(doc).unwrap()).unwrap();
/// let second = index(1, begin_array(b).unwrap()).unwrap();
/// assert_eq!(number(second).map(|(_, n)| n), Some(3.0));
/// ```
pub fn lookup<'a>(key: &str, cursor: Cursor<'a>) -> Option<Cursor<'a>> {
    name(find(key, cursor)?)
}

/// Decodes string characters from `body` into `buffer`, always leaving a
/// zero terminator.
///
/// At most `buffer.len() - 1` bytes are decoded. Running out of room is not
/// an error: the string is truncated and the returned cursor sits after the
/// last character written, so decoding can resume from it. Returns that
/// cursor and the number of bytes written before the terminator.
///
/// An empty `buffer` has no room for the terminator; nothing is written and
/// `body` is returned unchanged. Use [`try_unescape`] to treat that as an
/// error.
pub fn unescape<'a>(buffer: &mut [u8], body: Cursor<'a>) -> (Cursor<'a>, usize) {
    let Some(capacity) = buffer.len().checked_sub(1) else {
        return (body, 0);
    };

    let mut end = body;
    let mut written = 0usize;
    for (slot, (next, byte)) in buffer
        .iter_mut()
        .take(capacity)
        .zip(Characters::new(body))
    {
        *slot = byte;
        end = next;
        written += 1;
    }
    if let Some(terminator) = buffer.get_mut(written) {
        *terminator = 0;
    }

    if written == capacity && character(end).is_some() {
        log::warn!(
            "string truncated to {} bytes at offset {}",
            written,
            end.offset()
        );
    }
    (end, written)
}

/// [`unescape`] that rejects a zero-capacity buffer.
pub fn try_unescape<'a>(
    buffer: &mut [u8],
    body: Cursor<'a>,
) -> Result<(Cursor<'a>, usize), ParseError> {
    if buffer.is_empty() {
        return Err(ParseError::EmptyBuffer);
    }
    Ok(unescape(buffer, body))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grammar::value;
    use crate::number_parser::number;
    use crate::structural::{begin_array, begin_object};
    use test_log::test;

    fn body(input: &[u8]) -> Cursor<'_> {
        begin_string(Cursor::new(input)).unwrap()
    }

    #[test]
    fn test_compare() {
        assert_eq!(compare("abc", body(br#""abc""#)), Ordering::Equal);
        assert_eq!(compare("ab", body(br#""abc""#)), Ordering::Less);
        assert_eq!(compare("abcd", body(br#""abc""#)), Ordering::Greater);
        assert_eq!(compare("abd", body(br#""abc""#)), Ordering::Greater);
        assert_eq!(compare("abb", body(br#""abc""#)), Ordering::Less);
        assert_eq!(compare("", body(br#""""#)), Ordering::Equal);
        assert_eq!(compare("", body(br#""a""#)), Ordering::Less);
    }

    #[test]
    fn test_compare_decodes_escapes() {
        assert_eq!(compare("a\"b", body(br#""a\"b""#)), Ordering::Equal);
        assert_eq!(compare("tab\t", body(br#""tab\t""#)), Ordering::Equal);
        assert_eq!(compare("AB", body(br#""\u0041B""#)), Ordering::Equal);
        // The raw escape text is not what gets compared
        assert_eq!(compare("a\\n", body(br#""a\n""#)), Ordering::Greater);
    }

    #[test]
    fn test_compare_stops_at_undecodable_byte() {
        assert_eq!(compare("ab", body(b"\"ab\x01\"")), Ordering::Equal);
        let doc = Cursor::new(b"{\"ab\x01\": 1}");
        assert!(lookup("ab", begin_object(doc).unwrap()).is_none());
    }

    #[test]
    fn test_index() {
        let doc = Cursor::new(b"[10, [20, 21], {\"k\": 30}, 40]");
        let first = begin_array(doc).unwrap();

        assert_eq!(index(0, first), Some(first));
        let at = |n| index(n, first).and_then(value).map(|(_, kind)| kind);
        assert_eq!(at(1), Some(crate::ValueKind::Array));
        assert_eq!(at(2), Some(crate::ValueKind::Object));
        assert_eq!(number(index(3, first).unwrap()).map(|(_, n)| n), Some(40.0));

        // One past the end lands on the closing bracket, beyond that fails
        assert_eq!(index(4, first).map(|c| c.remaining()), Some(&b"]"[..]));
        assert!(index(4, first).and_then(value).is_none());
        assert!(index(5, first).is_none());
    }

    #[test]
    fn test_find_and_lookup() {
        let doc = Cursor::new(br#"{"a":1,"b":[2,3]}"#);
        let members = begin_object(doc).unwrap();

        let found = find("b", members).unwrap();
        assert_eq!(found.remaining(), br#""b":[2,3]}"#);

        let b = lookup("b", members).unwrap();
        let three = index(1, begin_array(b).unwrap()).unwrap();
        assert_eq!(number(three).map(|(_, n)| n), Some(3.0));

        assert!(find("c", members).is_none());
        assert!(lookup("", members).is_none());
        // Prefixes of a name do not match
        assert!(find("bb", members).is_none());
    }

    #[test]
    fn test_find_first_duplicate_wins() {
        let doc = Cursor::new(br#"{"a":1,"a":2}"#);
        let a = lookup("a", begin_object(doc).unwrap()).unwrap();
        assert_eq!(number(a).map(|(_, n)| n), Some(1.0));
    }

    #[test]
    fn test_find_skips_nested_values() {
        let doc = Cursor::new(br#"{ "x" : {"target": 0}, "target" : 7 }"#);
        let target = lookup("target", begin_object(doc).unwrap()).unwrap();
        assert_eq!(number(target).map(|(_, n)| n), Some(7.0));
    }

    #[test]
    fn test_find_escaped_key() {
        let doc = Cursor::new(br#"{"a\/b": true}"#);
        assert!(lookup("a/b", begin_object(doc).unwrap()).is_some());
    }

    #[test]
    fn test_find_in_empty_object() {
        let doc = Cursor::new(b"{}");
        assert!(find("a", begin_object(doc).unwrap()).is_none());
    }

    #[test]
    fn test_unescape() {
        let mut buffer = [0xFFu8; 16];
        let (end, written) = unescape(&mut buffer, body(br#""a\nb" rest"#));
        assert_eq!(written, 3);
        assert_eq!(&buffer[..4], b"a\nb\0");
        assert_eq!(end.remaining(), br#"" rest"#);
    }

    #[test]
    fn test_unescape_truncates() {
        let mut buffer = [0xFFu8; 3];
        let (end, written) = unescape(&mut buffer, body(br#""hello""#));
        assert_eq!(written, 2);
        assert_eq!(buffer, *b"he\0");
        // Decoding can resume where it stopped
        assert_eq!(end.remaining(), br#"llo""#);

        let mut rest = [0u8; 8];
        let (end, written) = unescape(&mut rest, end);
        assert_eq!(written, 3);
        assert_eq!(&rest[..4], b"llo\0");
        assert_eq!(end.peek(), Some(b'"'));
    }

    #[test]
    fn test_unescape_exact_fit() {
        let mut buffer = [0xFFu8; 4];
        let (end, written) = unescape(&mut buffer, body(br#""abc""#));
        assert_eq!(written, 3);
        assert_eq!(buffer, *b"abc\0");
        assert_eq!(end.peek(), Some(b'"'));
    }

    #[test]
    fn test_unescape_capacity_limits() {
        let start = body(br#""abc""#);

        let mut one = [0xFFu8; 1];
        assert_eq!(unescape(&mut one, start), (start, 0));
        assert_eq!(one, [0]);

        let mut none: [u8; 0] = [];
        assert_eq!(unescape(&mut none, start), (start, 0));
        assert_eq!(try_unescape(&mut none, start), Err(ParseError::EmptyBuffer));
        assert_eq!(try_unescape(&mut one, start), Ok((start, 0)));
    }
}
