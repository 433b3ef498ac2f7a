//! Symbol abstraction shared by every matcher.
//!
//! Texts and patterns are plain slices of symbols. A symbol only has to be
//! comparable and expose a numeric code unit; the code is what the rolling
//! hash consumes and what the compact lookup tables index by.

use std::fmt::Debug;
use std::hash::Hash;

/// Number of codes covered by the compact (array-backed) tables.
pub const COMPACT_RANGE: u32 = 256;

/// A single element of a text or pattern.
pub trait Symbol: Copy + Eq + Hash + Debug + Send + Sync + 'static {
    /// Numeric code unit of this symbol
    fn code(self) -> u32;

    /// Whether the code fits the compact table range
    #[inline]
    fn is_compact(self) -> bool {
        self.code() < COMPACT_RANGE
    }

    /// Control characters other than tab, newline and carriage return
    #[inline]
    fn is_binary_control(self) -> bool {
        let c = self.code();
        c < 0x20 && c != 0x09 && c != 0x0A && c != 0x0D
    }
}

impl Symbol for u8 {
    #[inline]
    fn code(self) -> u32 {
        self as u32
    }

    #[inline]
    fn is_compact(self) -> bool {
        true
    }
}

/// UTF-16 code units
impl Symbol for u16 {
    #[inline]
    fn code(self) -> u32 {
        self as u32
    }
}

impl Symbol for char {
    #[inline]
    fn code(self) -> u32 {
        self as u32
    }
}
