// SPDX-License-Identifier: Apache-2.0

//! Recursive-descent rules for every JSON production.
//!
//! Each rule takes a cursor and returns the cursor past the production it
//! matched, or `None`. Rules never skip whitespace in front of scalar values;
//! structural tokens absorb the whitespace around them, and [`text`] handles
//! the document edges.

use crate::json_string::{name, string};
use crate::matcher::{first_match_of, literal_str, Combinator};
use crate::number_parser::number;
use crate::shared::ValueKind;
use crate::structural::{
    begin_array, begin_object, end_array, end_object, skip_ws, value_separator,
};
use crate::Cursor;

type Rule<'a> = fn(Cursor<'a>) -> Option<Cursor<'a>>;

/// `null`
pub fn null(cursor: Cursor<'_>) -> Option<Cursor<'_>> {
    literal_str(b"null", cursor)
}

/// `true` or `false`, returning which.
pub fn boolean<'a>(cursor: Cursor<'a>) -> Option<(Cursor<'a>, bool)> {
    let alternatives: [Combinator<'a, bool>; 2] = [
        |c| literal_str(b"true", c).map(|c| (c, true)),
        |c| literal_str(b"false", c).map(|c| (c, false)),
    ];
    first_match_of(cursor, &alternatives)
}

/// Null, boolean, number or string.
pub fn primitive<'a>(cursor: Cursor<'a>) -> Option<(Cursor<'a>, ValueKind)> {
    let alternatives: [Combinator<'a, ValueKind>; 4] = [
        |c| null(c).map(|c| (c, ValueKind::Null)),
        |c| boolean(c).map(|(c, _)| (c, ValueKind::Boolean)),
        |c| number(c).map(|(c, _)| (c, ValueKind::Number)),
        |c| string(c).map(|(c, _)| (c, ValueKind::String)),
    ];
    first_match_of(cursor, &alternatives)
}

/// Array or object.
pub fn structured<'a>(cursor: Cursor<'a>) -> Option<(Cursor<'a>, ValueKind)> {
    let alternatives: [Combinator<'a, ValueKind>; 2] = [
        |c| array(c).map(|(c, _)| (c, ValueKind::Array)),
        |c| object(c).map(|(c, _)| (c, ValueKind::Object)),
    ];
    first_match_of(cursor, &alternatives)
}

/// Any JSON value, reporting its kind.
pub fn value<'a>(cursor: Cursor<'a>) -> Option<(Cursor<'a>, ValueKind)> {
    let alternatives: [Combinator<'a, ValueKind>; 2] = [|c| primitive(c), |c| structured(c)];
    first_match_of(cursor, &alternatives)
}

/// A value followed by its `,` separator when one is present.
pub fn element(cursor: Cursor<'_>) -> Option<Cursor<'_>> {
    let (next, _) = value(cursor)?;
    Some(value_separator(next).unwrap_or(next))
}

/// A name, its value, and the `,` separator when one is present.
pub fn member(cursor: Cursor<'_>) -> Option<Cursor<'_>> {
    element(name(cursor)?)
}

/// `begin`, then either `end` or one or more `entry` separated by `,`
/// and closed by `end`. Returns the entry count.
///
/// One unit of nesting budget is held while inside the delimiters.
fn delimited<'a>(
    cursor: Cursor<'a>,
    begin: Rule<'a>,
    end: Rule<'a>,
    entry: Rule<'a>,
) -> Option<(Cursor<'a>, usize)> {
    let outer = cursor;
    let mut cursor = begin(cursor)?.descend()?;
    if let Some(closed) = end(cursor) {
        return Some((closed.ascend_to(&outer), 0));
    }
    let mut length = 0usize;
    loop {
        let next = entry(cursor)?;
        length += 1;
        if let Some(closed) = end(next) {
            return Some((closed.ascend_to(&outer), length));
        }
        cursor = value_separator(next)?;
    }
}

/// An array, returning its element count.
pub fn array<'a>(cursor: Cursor<'a>) -> Option<(Cursor<'a>, usize)> {
    delimited(cursor, begin_array, end_array, |c| {
        value(c).map(|(c, _)| c)
    })
}

/// An object, returning its member count.
///
/// Duplicate names are accepted as-is.
pub fn object<'a>(cursor: Cursor<'a>) -> Option<(Cursor<'a>, usize)> {
    delimited(cursor, begin_object, end_object, |c| {
        value(name(c)?).map(|(c, _)| c)
    })
}

/// A whole JSON text: optional whitespace, one value, optional whitespace.
///
/// The document is valid only if the returned cursor is at the end of the
/// input; see [`validate`](crate::validate) for a checked wrapper.
///
/// # Example
/// ```
/// use picowalk::{text, Cursor, ValueKind};
/// let (end, kind) = text(Cursor::new(b" [1, 2, 3] ")).unwrap();
/// assert_eq!(kind, ValueKind::Array);
/// assert!(end.is_at_end());
/// ```
pub fn text(cursor: Cursor<'_>) -> Option<(Cursor<'_>, ValueKind)> {
    let start = skip_ws(cursor);
    match value(start) {
        Some((next, kind)) => {
            let end = skip_ws(next);
            log::trace!("matched {} from {} to {}", kind, start.offset(), end.offset());
            Some((end, kind))
        }
        None => {
            log::trace!("no value at offset {}", start.offset());
            None
        }
    }
}
