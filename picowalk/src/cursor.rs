// SPDX-License-Identifier: Apache-2.0

use core::cmp::Ordering;

/// Nesting limit used by [`Cursor::new`].
///
/// Each nesting level is one level of recursion. Expect a few KB of stack per
/// level in debug builds and a few hundred bytes in release builds; on small
/// stacks pick a lower limit with [`Cursor::with_max_depth`].
pub const DEFAULT_MAX_DEPTH: usize = 128;

/// A position in a borrowed JSON text.
///
/// A cursor never owns the text; it is a copyable view that the combinators
/// advance. Parse failure is expressed as `None` in the surrounding `Option`,
/// so a failed cursor simply cannot be passed on.
///
/// Besides the offset, a cursor carries how many more arrays or objects may be
/// opened below it. Equality and ordering only look at the offset.
#[derive(Debug, Clone, Copy)]
pub struct Cursor<'a> {
    data: &'a [u8],
    pos: usize,
    depth_budget: usize,
}

impl<'a> Cursor<'a> {
    /// Creates a cursor at the start of `data` with [`DEFAULT_MAX_DEPTH`].
    ///
    /// # Example
    /// ```
    /// use picowalk::Cursor;
    /// let cursor = Cursor::new(b"[1, 2]");
    /// assert_eq!(cursor.offset(), 0);
    /// ```
    pub fn new(data: &'a [u8]) -> Self {
        Self::with_max_depth(data, DEFAULT_MAX_DEPTH)
    }

    /// Creates a cursor at the start of a string slice.
    pub fn new_str(data: &'a str) -> Self {
        Self::new(data.as_bytes())
    }

    /// Creates a cursor allowing at most `max_depth` nested arrays and objects.
    ///
    /// A `max_depth` of zero still accepts scalar documents. The limit only
    /// prevents stack overflow if the stack can hold `max_depth` levels of
    /// recursion, see [`DEFAULT_MAX_DEPTH`].
    pub fn with_max_depth(data: &'a [u8], max_depth: usize) -> Self {
        Self {
            data,
            pos: 0,
            depth_budget: max_depth,
        }
    }

    /// Byte offset from the start of the text.
    pub fn offset(&self) -> usize {
        self.pos
    }

    /// The bytes not yet consumed.
    pub fn remaining(&self) -> &'a [u8] {
        self.data.get(self.pos..).unwrap_or_default()
    }

    /// True when every byte of the text has been consumed.
    pub fn is_at_end(&self) -> bool {
        self.pos >= self.data.len()
    }

    /// The byte under the cursor, if any.
    pub fn peek(&self) -> Option<u8> {
        self.data.get(self.pos).copied()
    }

    /// How many more levels of nesting may be entered from here.
    pub fn depth_budget(&self) -> usize {
        self.depth_budget
    }

    /// Moves forward by `count` bytes, failing if that would leave the text.
    pub(crate) fn advance(self, count: usize) -> Option<Self> {
        let pos = self.pos.checked_add(count)?;
        if pos > self.data.len() {
            return None;
        }
        Some(Self { pos, ..self })
    }

    /// Consumes one byte and returns it alongside the advanced cursor.
    pub(crate) fn next_byte(self) -> Option<(Self, u8)> {
        let byte = self.peek()?;
        Some((self.advance(1)?, byte))
    }

    /// Spends one unit of nesting budget, failing once it is exhausted.
    pub(crate) fn descend(self) -> Option<Self> {
        match self.depth_budget.checked_sub(1) {
            Some(depth_budget) => Some(Self {
                depth_budget,
                ..self
            }),
            None => {
                log::debug!("nesting limit reached at offset {}", self.pos);
                None
            }
        }
    }

    /// Returns this position carrying the nesting budget of `outer`.
    pub(crate) fn ascend_to(self, outer: &Self) -> Self {
        Self {
            depth_budget: outer.depth_budget,
            ..self
        }
    }
}

impl PartialEq for Cursor<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.pos == other.pos
    }
}

impl Eq for Cursor<'_> {}

impl PartialOrd for Cursor<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Cursor<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.pos.cmp(&other.pos)
    }
}
