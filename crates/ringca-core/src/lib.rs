//! Ringca Core
//!
//! One-dimensional binary cellular automata on a toroidal lattice.
//!
//! # Model
//!
//! A lattice of `L` cells, each 0 or 1, is arranged on a circle: cell `L - 1`
//! neighbors cell `0`. A rule of radius `r` (1, 2 or 3) looks at the `2r + 1`
//! cells centered on each position, reads them as a binary number with the
//! leftmost cell most significant, and uses that number to index a table of
//! `2^(2r+1)` next states. All cells update simultaneously.
//!
//! # Example
//!
//! ```
//! use ringca_core::{Automaton, RuleTable};
//!
//! let rule = RuleTable::parse("01111000", 1)?; // Wolfram rule 30
//! let automaton = Automaton::from_bits(rule, "00000100000")?;
//! let grid = automaton.run(3)?;
//!
//! assert_eq!(grid.generations(), 3);
//! assert_eq!(&grid[1], &[0, 0, 0, 0, 1, 1, 1, 0, 0, 0, 0]);
//! # Ok::<(), ringca_core::Error>(())
//! ```
//!
//! # Validation
//!
//! Everything is checked where values are built ([`RuleTable::parse`],
//! [`Automaton::new`], [`Automaton::run`]). Once an automaton exists, a run
//! can only fail on a zero generation count.

mod engine;
mod error;
mod grid;
mod lattice;
mod rule;

pub use engine::{generation_count, Automaton, Generations};
pub use error::{Error, ErrorKind, Result};
pub use grid::Grid;
pub use lattice::{neighborhood_index, Configuration};
pub use rule::{Radius, RuleTable};

/// Smallest supported radius.
pub const MIN_RADIUS: u32 = 1;

/// Largest supported radius.
pub const MAX_RADIUS: u32 = 3;

/// Entries in the largest rule table; the packed table type must hold this many bits.
pub const MAX_TABLE_LEN: usize = 1 << (2 * MAX_RADIUS + 1);

// Rule tables are packed into a u128
const _: () = assert!(MAX_TABLE_LEN <= u128::BITS as usize);
