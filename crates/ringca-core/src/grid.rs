//! Generation grid returned by a run.

use std::ops::Index;

use crate::Configuration;

/// Rows of cell states in chronological order.
///
/// Row 0 is the initial configuration and row `i` is the state after `i`
/// updates. Every row has the same width. Rows are plain `Vec<u8>` so the grid
/// can be handed straight to a raster renderer.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Grid {
    rows: Vec<Vec<u8>>,
}

impl Grid {
    pub(crate) fn from_configurations(rows: impl IntoIterator<Item = Configuration>) -> Self {
        Self {
            rows: rows.into_iter().map(Configuration::into_cells).collect(),
        }
    }

    /// Number of generations (rows).
    #[inline]
    pub fn generations(&self) -> usize {
        self.rows.len()
    }

    /// Lattice width (columns). Zero for an empty grid.
    #[inline]
    pub fn width(&self) -> usize {
        self.rows.first().map_or(0, Vec::len)
    }

    /// All rows.
    #[inline]
    pub fn rows(&self) -> &[Vec<u8>] {
        &self.rows
    }

    /// Row for generation `i`, if present.
    pub fn row(&self, i: usize) -> Option<&[u8]> {
        self.rows.get(i).map(Vec::as_slice)
    }

    /// Last computed generation.
    pub fn last(&self) -> Option<&[u8]> {
        self.rows.last().map(Vec::as_slice)
    }

    /// Iterate over rows in chronological order.
    pub fn iter(&self) -> std::slice::Iter<'_, Vec<u8>> {
        self.rows.iter()
    }

    /// Hand the rows over to the caller.
    pub fn into_rows(self) -> Vec<Vec<u8>> {
        self.rows
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Grid {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        use serde::de::Error as _;

        #[derive(serde::Deserialize)]
        struct RawGrid {
            rows: Vec<Vec<u8>>,
        }

        // Same checks a run guarantees: binary cells, one width for every row
        let raw = RawGrid::deserialize(deserializer)?;
        let width = raw.rows.first().map_or(0, Vec::len);
        let mut rows = Vec::with_capacity(raw.rows.len());
        for (generation, cells) in raw.rows.into_iter().enumerate() {
            if cells.len() != width {
                return Err(D::Error::custom(format_args!(
                    "row {generation} has {} cells, expected {width}",
                    cells.len()
                )));
            }
            let row = Configuration::from_cells(cells)
                .map_err(|e| D::Error::custom(format_args!("row {generation}: {e}")))?;
            rows.push(row);
        }
        Ok(Self::from_configurations(rows))
    }
}

impl Index<usize> for Grid {
    type Output = [u8];

    fn index(&self, generation: usize) -> &[u8] {
        &self.rows[generation]
    }
}

impl<'a> IntoIterator for &'a Grid {
    type Item = &'a Vec<u8>;
    type IntoIter = std::slice::Iter<'a, Vec<u8>>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}

impl IntoIterator for Grid {
    type Item = Vec<u8>;
    type IntoIter = std::vec::IntoIter<Vec<u8>>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.into_iter()
    }
}
