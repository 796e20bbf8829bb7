// SPDX-License-Identifier: Apache-2.0

use crate::Cursor;

/// Byte reported for `\uXXXX` escapes outside 7-bit ASCII.
///
/// Callers that need the real code point must decode the escape themselves.
pub const NON_ASCII_SENTINEL: u8 = 0;

/// Pure helpers for JSON escape sequences.
pub struct EscapeProcessor;

impl EscapeProcessor {
    /// Maps the character following a backslash to the byte it stands for.
    ///
    /// Returns `None` for `u` (handled separately) and for anything that is
    /// not a JSON escape.
    ///
    /// # Examples
    /// ```ignore
    /// // Internal API - see unit tests for usage examples
    /// assert_eq!(EscapeProcessor::process_simple_escape(b'n'), Some(b'\n'));
    /// ```
    pub fn process_simple_escape(escape_char: u8) -> Option<u8> {
        match escape_char {
            b'"' | b'\\' | b'/' => Some(escape_char),
            b'b' => Some(0x08), // Backspace
            b'f' => Some(0x0C), // Form feed
            b'n' => Some(b'\n'),
            b'r' => Some(b'\r'),
            b't' => Some(b'\t'),
            _ => None,
        }
    }

    /// Value (0-15) of a hexadecimal digit, either case.
    pub fn validate_hex_digit(byte: u8) -> Option<u16> {
        match byte {
            b'0'..=b'9' => Some(u16::from(byte - b'0')),
            b'a'..=b'f' => Some(u16::from(byte - b'a') + 10),
            b'A'..=b'F' => Some(u16::from(byte - b'A') + 10),
            _ => None,
        }
    }

    /// Reads the four hex digits of a `\u` escape into a code unit.
    pub fn process_unicode_escape(cursor: Cursor<'_>) -> Option<(Cursor<'_>, u16)> {
        let hex = cursor.remaining().get(..4)?;
        let codepoint = hex.iter().try_fold(0u16, |acc, &byte| {
            Some((acc << 4) | Self::validate_hex_digit(byte)?)
        })?;
        Some((cursor.advance(4)?, codepoint))
    }

    /// Narrows a code unit to a single byte, using [`NON_ASCII_SENTINEL`]
    /// for anything above 0x7F.
    pub fn codepoint_to_ascii(codepoint: u16) -> u8 {
        u8::try_from(codepoint)
            .ok()
            .filter(u8::is_ascii)
            .unwrap_or(NON_ASCII_SENTINEL)
    }
}

/// Decodes one logical character of a string body.
///
/// Escapes are resolved to a single byte; `\uXXXX` above 7-bit ASCII yields
/// [`NON_ASCII_SENTINEL`]. Unescaped bytes from space upwards pass through
/// untouched, except `"`, which ends the string and is not consumed.
///
/// # Example
/// ```
/// use picowalk::{character, Cursor};
/// let (next, byte) = character(Cursor::new(br#"\u0041BC"#)).unwrap();
/// assert_eq!(byte, b'A');
/// assert_eq!(next.offset(), 6);
/// ```
pub fn character(cursor: Cursor<'_>) -> Option<(Cursor<'_>, u8)> {
    match cursor.next_byte()? {
        (next, b'\\') => match next.next_byte()? {
            (next, b'u') => {
                let (next, codepoint) = EscapeProcessor::process_unicode_escape(next)?;
                Some((next, EscapeProcessor::codepoint_to_ascii(codepoint)))
            }
            (next, escape_char) => {
                Some((next, EscapeProcessor::process_simple_escape(escape_char)?))
            }
        },
        (_, b'"') => None,
        (next, byte) if byte >= b' ' => Some((next, byte)),
        _ => None,
    }
}
