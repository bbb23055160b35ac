//! Synchronous update of a toroidal lattice.
//!
//! Each generation is computed from a snapshot of the previous one into a
//! fresh buffer, so no cell ever sees a partially updated neighbor. Cells
//! within a generation are independent; generations are strictly sequential.

use tracing::{debug, trace};

use crate::lattice::neighborhood_index;
use crate::{Configuration, Error, Grid, Result, RuleTable};

/// Upper bound on rows reserved up front by [`Automaton::run`].
const PREALLOCATED_ROWS: usize = 4096;

/// Convert a caller-supplied signed count into a generation count.
///
/// # Examples
///
/// ```
/// use ringca_core::{generation_count, Error};
///
/// assert_eq!(generation_count(100), Ok(100));
/// assert_eq!(generation_count(0), Err(Error::InvalidGenerationCount(0)));
/// assert_eq!(generation_count(-3), Err(Error::InvalidGenerationCount(-3)));
/// ```
pub fn generation_count(value: i64) -> Result<usize> {
    if value <= 0 {
        return Err(Error::InvalidGenerationCount(value));
    }
    usize::try_from(value).map_err(|_| Error::InvalidGenerationCount(value))
}

/// A rule bound to an initial configuration.
///
/// Holds no state between runs: [`run`](Self::run) is a pure function of
/// the rule, the initial configuration and the generation count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Automaton {
    rule: RuleTable,
    initial: Configuration,
}

impl Automaton {
    /// Bind a rule to an initial configuration.
    ///
    /// Fails with [`Error::ConfigurationTooShort`] if the lattice is narrower
    /// than one neighborhood (`2r + 1` cells).
    pub fn new(rule: RuleTable, initial: Configuration) -> Result<Self> {
        check_width(&rule, initial.len())?;
        debug!(
            radius = rule.radius().value(),
            width = initial.len(),
            "automaton ready"
        );
        Ok(Self { rule, initial })
    }

    /// Bind a rule to raw cell values.
    ///
    /// Width is checked before cell values.
    pub fn from_cells(rule: RuleTable, cells: Vec<u8>) -> Result<Self> {
        check_width(&rule, cells.len())?;
        Self::new(rule, Configuration::from_cells(cells)?)
    }

    /// Bind a rule to a bit-string such as `"0000001"`.
    ///
    /// Width is checked before the alphabet.
    pub fn from_bits(rule: RuleTable, bits: &str) -> Result<Self> {
        check_width(&rule, bits.chars().count())?;
        Self::new(rule, Configuration::parse(bits)?)
    }

    /// The rule in use.
    #[inline]
    pub fn rule(&self) -> &RuleTable {
        &self.rule
    }

    /// Generation 0.
    #[inline]
    pub fn initial(&self) -> &Configuration {
        &self.initial
    }

    /// Lattice width, fixed for every generation.
    #[inline]
    pub fn width(&self) -> usize {
        self.initial.len()
    }

    /// Compute the generation after `current`.
    ///
    /// # Panics
    ///
    /// Panics if `current` is not as wide as this automaton's lattice.
    pub fn step(&self, current: &Configuration) -> Configuration {
        assert_eq!(
            current.len(),
            self.width(),
            "lattice width is fixed for the lifetime of an automaton"
        );
        let cells = current.cells();
        let radius = self.rule.radius();
        let next = (0..cells.len())
            .map(|j| self.rule.lookup(neighborhood_index(cells, j, radius)))
            .collect();
        Configuration::from_cells_unchecked(next)
    }

    /// Lazily yield generations, starting with the initial configuration.
    pub fn generations(&self) -> Generations<'_> {
        Generations {
            automaton: self,
            previous: None,
        }
    }

    /// Run for `num_generations` rows, the first being the initial configuration.
    ///
    /// The rows are the first `num_generations` items of [`generations`](Self::generations).
    ///
    /// # Examples
    ///
    /// ```
    /// use ringca_core::{Automaton, RuleTable};
    ///
    /// let rule = RuleTable::from_wolfram_code(90);
    /// let automaton = Automaton::from_bits(rule, "0001000").unwrap();
    /// let grid = automaton.run(3).unwrap();
    ///
    /// assert_eq!(grid.generations(), 3);
    /// assert_eq!(&grid[1], &[0, 0, 1, 0, 1, 0, 0]);
    /// assert_eq!(&grid[2], &[0, 1, 0, 0, 0, 1, 0]);
    /// ```
    pub fn run(&self, num_generations: usize) -> Result<Grid> {
        if num_generations == 0 {
            return Err(Error::InvalidGenerationCount(0));
        }

        debug!(
            radius = self.rule.radius().value(),
            width = self.width(),
            generations = num_generations,
            "running automaton"
        );

        // Capacity is capped; the iterator's size hint is unbounded
        let mut rows = Vec::with_capacity(num_generations.min(PREALLOCATED_ROWS));
        for (generation, row) in self.generations().take(num_generations).enumerate() {
            trace!(generation, population = row.population());
            rows.push(row);
        }

        debug!(generations = rows.len(), "run complete");
        Ok(Grid::from_configurations(rows))
    }
}

fn check_width(rule: &RuleTable, actual: usize) -> Result<()> {
    let radius = rule.radius();
    if actual < radius.width() {
        return Err(Error::ConfigurationTooShort {
            radius: radius.value(),
            minimum: radius.width(),
            actual,
        });
    }
    Ok(())
}

/// Infinite iterator over an automaton's generations.
///
/// Created by [`Automaton::generations`].
#[derive(Debug, Clone)]
pub struct Generations<'a> {
    automaton: &'a Automaton,
    previous: Option<Configuration>,
}

impl Iterator for Generations<'_> {
    type Item = Configuration;

    fn next(&mut self) -> Option<Configuration> {
        let next = match &self.previous {
            None => self.automaton.initial.clone(),
            Some(previous) => self.automaton.step(previous),
        };
        self.previous = Some(next.clone());
        Some(next)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}

impl std::iter::FusedIterator for Generations<'_> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Radius;

    const SCENARIO_RULE: &str = "00000000001111111111000000000011111111110000000000111111111100000000001111111111000000000011111111110000000000111111111111111111";

    fn rows(grid: &Grid) -> Vec<String> {
        grid.iter()
            .map(|row| row.iter().map(|c| char::from(b'0' + c)).collect())
            .collect()
    }

    #[test]
    fn radius_three_on_minimal_ring() {
        let rule = RuleTable::parse(SCENARIO_RULE, 3).unwrap();
        let automaton = Automaton::from_bits(rule, "0000001").unwrap();

        let grid = automaton.run(2).unwrap();
        assert_eq!(grid.rows(), &[vec![0, 0, 0, 0, 0, 0, 1], vec![1, 1, 0, 0, 0, 0, 0]]);

        let grid = automaton.run(5).unwrap();
        assert_eq!(
            rows(&grid),
            vec!["0000001", "1100000", "1001000", "0111110", "0110111"]
        );
    }

    #[test]
    fn radius_three_on_wider_ring() {
        let rule = RuleTable::parse(SCENARIO_RULE, 3).unwrap();
        let automaton = Automaton::from_bits(rule, "1011000110").unwrap();
        assert_eq!(
            rows(&automaton.run(4).unwrap()),
            vec!["1011000110", "0000011101", "0100010110", "0111010001"]
        );
    }

    #[test]
    fn rule_30_from_single_cell() {
        let automaton =
            Automaton::new(RuleTable::from_wolfram_code(30), Configuration::single_center(11))
                .unwrap();
        assert_eq!(
            rows(&automaton.run(4).unwrap()),
            vec!["00000100000", "00001110000", "00011001000", "00110111100"]
        );
    }

    #[test]
    fn rule_90_wraps_around() {
        let automaton = Automaton::from_bits(RuleTable::from_wolfram_code(90), "0001000").unwrap();
        assert_eq!(
            rows(&automaton.run(5).unwrap()),
            vec!["0001000", "0010100", "0100010", "1010101", "1000001"]
        );
    }

    #[test]
    fn radius_two_majority_reaches_fixed_point() {
        let bits: String = (0..32u32)
            .map(|i| if i.count_ones() >= 3 { '1' } else { '0' })
            .collect();
        let rule = RuleTable::parse(&bits, 2).unwrap();
        let automaton = Automaton::from_bits(rule, "1101001011").unwrap();
        assert_eq!(
            rows(&automaton.run(3).unwrap()),
            vec!["1101001011", "1110000111", "1110000111"]
        );
    }

    #[test]
    fn all_zero_rule_clears_the_lattice() {
        let rule = RuleTable::parse("00000000", 1).unwrap();
        let grid = Automaton::from_bits(rule, "1101101").unwrap().run(4).unwrap();
        assert_eq!(&grid[0], &[1, 1, 0, 1, 1, 0, 1]);
        for row in grid.iter().skip(1) {
            assert!(row.iter().all(|&c| c == 0));
        }
    }

    #[test]
    fn single_generation_is_just_the_initial_row() {
        let automaton = Automaton::from_bits(RuleTable::from_wolfram_code(110), "0110").unwrap();
        let grid = automaton.run(1).unwrap();
        assert_eq!(grid.rows(), &[vec![0, 1, 1, 0]]);
    }

    #[test]
    fn zero_generations_rejected() {
        let automaton = Automaton::from_bits(RuleTable::from_wolfram_code(30), "010").unwrap();
        assert_eq!(automaton.run(0), Err(Error::InvalidGenerationCount(0)));
    }

    #[test]
    fn too_short_for_radius() {
        let rule = RuleTable::identity(Radius::Two);
        assert_eq!(
            Automaton::from_bits(rule, "0101"),
            Err(Error::ConfigurationTooShort { radius: 2, minimum: 5, actual: 4 })
        );
        assert!(Automaton::from_bits(rule, "01010").is_ok());
    }

    #[test]
    fn width_checked_before_alphabet() {
        let rule = RuleTable::identity(Radius::Three);
        assert_eq!(
            Automaton::from_bits(rule, "01x"),
            Err(Error::ConfigurationTooShort { radius: 3, minimum: 7, actual: 3 })
        );
        assert_eq!(
            Automaton::from_bits(rule, "01x0000"),
            Err(Error::InvalidCellValue { position: 2, found: "x".into() })
        );
        assert_eq!(
            Automaton::from_cells(rule, vec![0, 0, 0, 3, 0, 0, 0]),
            Err(Error::InvalidCellValue { position: 3, found: "3".into() })
        );
    }

    #[test]
    fn run_takes_rows_from_the_generations_iterator() {
        let automaton = Automaton::from_bits(RuleTable::from_wolfram_code(30), "00000100000").unwrap();
        for n in [1, 2, 7] {
            let expected: Vec<Configuration> = automaton.generations().take(n).collect();
            let grid = automaton.run(n).unwrap();
            assert_eq!(grid.generations(), n);
            for (row, config) in grid.iter().zip(&expected) {
                assert_eq!(row.as_slice(), config.cells());
            }
        }
    }

    #[test]
    fn generations_iterator_matches_run() {
        let automaton = Automaton::from_bits(RuleTable::from_wolfram_code(110), "0000000001").unwrap();
        let lazy: Vec<Vec<u8>> = automaton
            .generations()
            .take(8)
            .map(Configuration::into_cells)
            .collect();
        assert_eq!(lazy, automaton.run(8).unwrap().into_rows());
    }

    #[test]
    #[should_panic(expected = "lattice width is fixed")]
    fn step_rejects_other_widths() {
        let automaton = Automaton::from_bits(RuleTable::from_wolfram_code(30), "01010").unwrap();
        automaton.step(&Configuration::parse("0101").unwrap());
    }

    #[test]
    fn generation_count_conversion() {
        assert_eq!(generation_count(1), Ok(1));
        assert_eq!(generation_count(0), Err(Error::InvalidGenerationCount(0)));
        assert_eq!(generation_count(i64::MIN), Err(Error::InvalidGenerationCount(i64::MIN)));
    }
}
