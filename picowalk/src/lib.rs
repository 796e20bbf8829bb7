// SPDX-License-Identifier: Apache-2.0

//! Zero-copy JSON validation and in-place navigation.
//!
//! Nothing is parsed into a tree. Every grammar production is a combinator
//! that takes a [`Cursor`] into the caller's text and returns the cursor past
//! what it matched, or `None`. The same combinators drive both validation
//! ([`text`], [`validate`]) and navigation ([`lookup`], [`index`],
//! [`unescape`]), so values are read straight out of the caller's buffer.
//!
//! ```
//! use picowalk::{begin_object, begin_string, lookup, number, string, unescape, Cursor};
//!
//! let doc = Cursor::new(br#"{"name": "pico\twalk", "size": 2.5e1}"#);
//! let members = begin_object(doc).unwrap();
//!
//! let size = lookup("size", members).and_then(number).map(|(_, n)| n);
//! assert_eq!(size, Some(25.0));
//!
//! let name = lookup("name", members).unwrap();
//! let (_, len) = string(name).unwrap();
//! let mut buffer = [0u8; 16];
//! let (_, written) = unescape(&mut buffer, begin_string(name).unwrap());
//! assert_eq!(written, len);
//! assert_eq!(&buffer[..written], b"pico\twalk");
//! ```

#![cfg_attr(not(test), no_std)]
#![forbid(unsafe_code)]

mod cursor;
pub use cursor::{Cursor, DEFAULT_MAX_DEPTH};

mod matcher;
pub use matcher::{first_match_of, literal_char, literal_str, Combinator};

mod structural;
pub use structural::{
    begin_array, begin_object, begin_string, end_array, end_object, end_string, name_separator,
    skip_ws, value_separator,
};

mod number_parser;
pub use number_parser::number;

mod escape_processor;
pub use escape_processor::{character, NON_ASCII_SENTINEL};

mod json_string;
pub use json_string::{name, string, Characters};

mod grammar;
pub use grammar::{
    array, boolean, element, member, null, object, primitive, structured, text, value,
};

mod navigate;
pub use navigate::{compare, find, index, lookup, try_unescape, unescape};

mod shared;
pub use shared::ValueKind;

mod parse_error;
pub use parse_error::{validate, validate_from, validate_str, ParseError};
