// SPDX-License-Identifier: Apache-2.0

/// The kind of JSON value a successful match consumed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    /// `null`
    Null,
    /// `true` or `false`
    Boolean,
    /// A number (e.g., `42` or `-2.5e-1`).
    Number,
    /// A string (e.g., `"value"`).
    String,
    /// An array (e.g., `[1, 2]`).
    Array,
    /// An object (e.g., `{"key": 1}`).
    Object,
}

impl ValueKind {
    /// True for arrays and objects.
    pub fn is_structured(self) -> bool {
        matches!(self, ValueKind::Array | ValueKind::Object)
    }

    /// True for null, booleans, numbers and strings.
    pub fn is_primitive(self) -> bool {
        !self.is_structured()
    }
}

impl core::fmt::Display for ValueKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(match self {
            ValueKind::Null => "null",
            ValueKind::Boolean => "boolean",
            ValueKind::Number => "number",
            ValueKind::String => "string",
            ValueKind::Array => "array",
            ValueKind::Object => "object",
        })
    }
}
