//! Rule tables for radius 1, 2 and 3 neighborhoods.
//!
//! A rule of radius `r` maps every neighborhood of `2r + 1` cells to the next
//! state of its center cell. Neighborhoods are read left to right as a binary
//! number (leftmost cell is the most significant bit), so a table has exactly
//! `2^(2r+1)` entries: 8, 32 or 128.
//!
//! The largest table fits in a `u128`, so entries are packed with entry `i`
//! stored at bit `i`.

use std::fmt;

use crate::{Error, Result};

/// Neighborhood radius: number of cells considered on each side of the center.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "u32", into = "u32"))]
pub enum Radius {
    /// Elementary automata: 3-cell neighborhoods, 8 entries.
    One = 1,
    /// 5-cell neighborhoods, 32 entries.
    Two = 2,
    /// 7-cell neighborhoods, 128 entries.
    Three = 3,
}

impl Radius {
    /// Every supported radius, smallest first.
    pub const ALL: [Self; 3] = [Self::One, Self::Two, Self::Three];

    /// Raw radius value.
    #[inline]
    pub const fn value(self) -> u32 {
        self as u32
    }

    /// Neighborhood width: `2r + 1`.
    #[inline]
    pub const fn width(self) -> usize {
        2 * self as usize + 1
    }

    /// Number of rule table entries: `2^(2r+1)`.
    #[inline]
    pub const fn table_len(self) -> usize {
        1 << self.width()
    }
}

impl TryFrom<u32> for Radius {
    type Error = Error;

    fn try_from(value: u32) -> Result<Self> {
        match value {
            1 => Ok(Self::One),
            2 => Ok(Self::Two),
            3 => Ok(Self::Three),
            other => Err(Error::InvalidRadius(other)),
        }
    }
}

impl From<Radius> for u32 {
    fn from(radius: Radius) -> Self {
        radius.value()
    }
}

impl fmt::Display for Radius {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}

/// An immutable, validated rule table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RuleTable {
    radius: Radius,
    entries: u128,
}

impl RuleTable {
    /// Parse a rule bit-string for a raw radius value.
    ///
    /// Checks run in order: radius, then length, then alphabet.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringca_core::{Error, RuleTable};
    ///
    /// let rule = RuleTable::parse("01111000", 1).unwrap();
    /// assert_eq!(rule.lookup(0b100), 1);
    ///
    /// assert_eq!(RuleTable::parse("0111100", 1).unwrap_err().to_string(),
    ///            "rule for radius 1 must be exactly 8 bits, got 7");
    /// assert!(matches!(RuleTable::parse("01111000", 4), Err(Error::InvalidRadius(4))));
    /// ```
    pub fn parse(bits: &str, radius: u32) -> Result<Self> {
        Self::with_radius(bits, Radius::try_from(radius)?)
    }

    /// Parse a rule bit-string for an already validated radius.
    pub fn with_radius(bits: &str, radius: Radius) -> Result<Self> {
        let expected = radius.table_len();
        let actual = bits.chars().count();
        if actual != expected {
            return Err(Error::InvalidRuleLength {
                radius: radius.value(),
                expected,
                actual,
            });
        }

        let mut entries = 0u128;
        for (position, c) in bits.chars().enumerate() {
            match c {
                '0' => {}
                '1' => entries |= 1u128 << position,
                found => return Err(Error::InvalidRuleAlphabet { position, found }),
            }
        }

        Ok(Self { radius, entries })
    }

    /// Build a table by evaluating `next_state` for every neighborhood index.
    pub fn from_fn(radius: Radius, next_state: impl Fn(usize) -> bool) -> Self {
        let entries = (0..radius.table_len())
            .filter(|&idx| next_state(idx))
            .fold(0u128, |acc, idx| acc | 1u128 << idx);
        Self { radius, entries }
    }

    /// The rule that maps every neighborhood to its own center cell.
    ///
    /// Under this rule every configuration is a fixed point.
    pub fn identity(radius: Radius) -> Self {
        let r = radius.value();
        Self::from_fn(radius, |idx| (idx >> r) & 1 == 1)
    }

    /// Radius-1 table from a Wolfram rule number: entry `i` is bit `i` of `code`.
    pub fn from_wolfram_code(code: u8) -> Self {
        Self {
            radius: Radius::One,
            entries: u128::from(code),
        }
    }

    /// Radius this table was built for.
    #[inline]
    pub const fn radius(&self) -> Radius {
        self.radius
    }

    /// Number of entries in the table.
    #[inline]
    pub const fn table_len(&self) -> usize {
        self.radius.table_len()
    }

    /// Next state for the neighborhood whose binary value is `neighborhood_index`.
    ///
    /// # Panics
    ///
    /// Panics if the index is outside the table. Indices derived from a
    /// neighborhood of the matching width are always in range.
    #[inline]
    pub fn lookup(&self, neighborhood_index: usize) -> u8 {
        assert!(
            neighborhood_index < self.table_len(),
            "neighborhood index {} out of range for radius {} table",
            neighborhood_index,
            self.radius
        );
        ((self.entries >> neighborhood_index) & 1) as u8
    }

    /// Entries in index order.
    pub fn entries(&self) -> impl Iterator<Item = u8> + '_ {
        (0..self.table_len()).map(move |idx| ((self.entries >> idx) & 1) as u8)
    }
}

impl fmt::Display for RuleTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for bit in self.entries() {
            f.write_str(if bit == 1 { "1" } else { "0" })?;
        }
        Ok(())
    }
}
