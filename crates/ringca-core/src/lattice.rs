//! Toroidal lattice state.
//!
//! A [`Configuration`] is one generation's cells laid out on a circle: index
//! `len - 1` is adjacent to index `0`. Neighborhoods are read with modular
//! indexing, so no padded copy of the lattice is ever built.

use std::fmt;
use std::str::FromStr;

use crate::{Error, Radius, Result};

/// One generation of binary cells. Every cell is 0 or 1.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "Vec<u8>", into = "Vec<u8>"))]
pub struct Configuration {
    cells: Vec<u8>,
}

impl Configuration {
    /// Parse a bit-string such as `"0010110"`.
    pub fn parse(bits: &str) -> Result<Self> {
        let cells = bits
            .chars()
            .enumerate()
            .map(|(position, c)| match c {
                '0' => Ok(0),
                '1' => Ok(1),
                other => Err(Error::InvalidCellValue {
                    position,
                    found: other.to_string(),
                }),
            })
            .collect::<Result<Vec<u8>>>()?;
        Ok(Self { cells })
    }

    /// Wrap a cell vector, rejecting any value other than 0 or 1.
    pub fn from_cells(cells: Vec<u8>) -> Result<Self> {
        if let Some(position) = cells.iter().position(|&c| c > 1) {
            return Err(Error::InvalidCellValue {
                position,
                found: cells[position].to_string(),
            });
        }
        Ok(Self { cells })
    }

    /// Wrap a cell vector already known to be binary.
    pub(crate) fn from_cells_unchecked(cells: Vec<u8>) -> Self {
        debug_assert!(cells.iter().all(|&c| c <= 1));
        Self { cells }
    }

    /// All-zero lattice of the given width with a single live cell in the middle.
    pub fn single_center(width: usize) -> Self {
        let mut cells = vec![0; width];
        if let Some(cell) = cells.get_mut(width / 2) {
            *cell = 1;
        }
        Self { cells }
    }

    /// Number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// True if there are no cells.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Cell values in lattice order.
    #[inline]
    pub fn cells(&self) -> &[u8] {
        &self.cells
    }

    /// Number of live cells.
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|&&c| c == 1).count()
    }

    /// The same ring read starting `k` cells further along.
    ///
    /// Cell `i` of the result is cell `(i + k) mod len` of `self`.
    pub fn rotated_left(&self, k: usize) -> Self {
        let mut cells = self.cells.clone();
        if !cells.is_empty() {
            cells.rotate_left(k % self.cells.len());
        }
        Self { cells }
    }

    /// Consume into the raw cell vector.
    pub fn into_cells(self) -> Vec<u8> {
        self.cells
    }
}

impl FromStr for Configuration {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<Vec<u8>> for Configuration {
    type Error = Error;

    fn try_from(cells: Vec<u8>) -> Result<Self> {
        Self::from_cells(cells)
    }
}

impl From<Configuration> for Vec<u8> {
    fn from(config: Configuration) -> Self {
        config.cells
    }
}

impl AsRef<[u8]> for Configuration {
    fn as_ref(&self) -> &[u8] {
        &self.cells
    }
}

impl fmt::Display for Configuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &cell in &self.cells {
            f.write_str(if cell == 1 { "1" } else { "0" })?;
        }
        Ok(())
    }
}

/// Binary value of the neighborhood centered at `center`.
///
/// Reads cells `(center - r) mod len ..= (center + r) mod len` left to right,
/// leftmost as the most significant bit. The lattice must be at least one
/// neighborhood wide.
#[inline]
pub fn neighborhood_index(cells: &[u8], center: usize, radius: Radius) -> usize {
    let len = cells.len();
    let r = radius.value() as usize;
    debug_assert!(len >= radius.width(), "lattice narrower than neighborhood");
    debug_assert!(center < len);

    let start = center + len - r;
    (0..radius.width()).fold(0, |idx, offset| {
        (idx << 1) | usize::from(cells[(start + offset) % len])
    })
}
