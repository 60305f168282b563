//! 7-segment glyph encoding.
//!
//! Segment layout and bit assignment (bit 0 = `a` ... bit 6 = `g`):
//!
//! ```text
//!    aaaa
//!   f    b
//!   f    b
//!    gggg
//!   e    c
//!   e    c
//!    dddd
//! ```
//!
//! Bits 0–5 are wired to one six-line output group, bit 6 to a separate pin.

use crate::error::DigitError;

/// Glyph table indexed by digit.
const SEGMENT_TABLE: [u8; 10] = [
    0b011_1111, // 0
    0b000_0110, // 1
    0b101_1011, // 2
    0b100_1111, // 3
    0b110_0110, // 4
    0b110_1101, // 5
    0b111_1101, // 6
    0b000_0111, // 7
    0b111_1111, // 8
    0b110_1111, // 9
];

/// A decimal digit, 0–9.  Construction is the only range check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Digit(u8);

impl Digit {
    pub const ZERO: Digit = Digit(0);
    pub const ONE: Digit = Digit(1);
    pub const TWO: Digit = Digit(2);
    pub const MAX: Digit = Digit(9);

    pub const fn new(value: u8) -> Result<Self, DigitError> {
        if value <= 9 {
            Ok(Self(value))
        } else {
            Err(DigitError::OutOfRange(value))
        }
    }

    pub const fn value(self) -> u8 {
        self.0
    }

    /// The next lower digit, `None` below zero.
    pub const fn pred(self) -> Option<Digit> {
        if self.0 == 0 {
            None
        } else {
            Some(Digit(self.0 - 1))
        }
    }
}

impl TryFrom<u8> for Digit {
    type Error = DigitError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Seven independent segment lines packed LSB-first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SegmentPattern(u8);

impl SegmentPattern {
    /// All segments dark.
    pub const BLANK: SegmentPattern = SegmentPattern(0);

    /// Mask of the segments on the six-line group (`a`–`f`).
    pub const LOW_GROUP_MASK: u8 = 0b011_1111;
    /// Bit of segment `g`, driven through its own pin.
    pub const G_BIT: u8 = 6;

    pub const fn for_digit(digit: Digit) -> Self {
        Self(SEGMENT_TABLE[digit.0 as usize])
    }

    pub const fn bits(self) -> u8 {
        self.0
    }

    /// Segment `index` (0 = `a`, 6 = `g`) is lit.
    pub const fn is_lit(self, index: u8) -> bool {
        index < 7 && (self.0 >> index) & 1 == 1
    }

    /// Lines for the six-line group.
    pub const fn low_group(self) -> u8 {
        self.0 & Self::LOW_GROUP_MASK
    }

    /// Level of the separate `g` line.
    pub const fn g_line(self) -> bool {
        self.is_lit(Self::G_BIT)
    }
}

/// Encode a raw digit.
///
/// # Panics
///
/// Panics on values above 9: every caller passes a compile-time or
/// validated digit, so an out-of-range value is a programming error.
pub fn encode(digit: u8) -> SegmentPattern {
    match Digit::new(digit) {
        Ok(d) => SegmentPattern::for_digit(d),
        Err(e) => panic!("segment encoder: {e}"),
    }
}

/// Fallible form of [`encode`].
pub fn try_encode(digit: u8) -> Result<SegmentPattern, DigitError> {
    Digit::new(digit).map(SegmentPattern::for_digit)
}
