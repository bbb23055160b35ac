//! Property tests for the automaton engine.

use proptest::prelude::*;
use ringca_core::{Automaton, Configuration, Error, Radius, RuleTable};

fn radius() -> impl Strategy<Value = Radius> {
    prop::sample::select(Radius::ALL.to_vec())
}

fn bits(len: usize) -> impl Strategy<Value = String> {
    prop::collection::vec(prop::bool::ANY, len)
        .prop_map(|v| v.into_iter().map(|b| if b { '1' } else { '0' }).collect())
}

/// A random rule together with a lattice at least one neighborhood wide.
fn rule_and_lattice() -> impl Strategy<Value = (RuleTable, String)> {
    radius().prop_flat_map(|radius| {
        let rule = bits(radius.table_len())
            .prop_map(move |b| RuleTable::with_radius(&b, radius).unwrap());
        let lattice = (radius.width()..40).prop_flat_map(bits);
        (rule, lattice)
    })
}

proptest! {
    #[test]
    fn identical_inputs_give_identical_grids(
        (rule, initial) in rule_and_lattice(),
        n in 1usize..30,
    ) {
        let first = Automaton::from_bits(rule, &initial).unwrap().run(n).unwrap();
        let second = Automaton::from_bits(rule, &initial).unwrap().run(n).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn run_returns_exactly_n_rows_starting_with_initial(
        (rule, initial) in rule_and_lattice(),
        n in 1usize..30,
    ) {
        let automaton = Automaton::from_bits(rule, &initial).unwrap();
        let grid = automaton.run(n).unwrap();

        prop_assert_eq!(grid.generations(), n);
        prop_assert_eq!(&grid[0], automaton.initial().cells());
    }

    #[test]
    fn every_row_keeps_the_lattice_width(
        (rule, initial) in rule_and_lattice(),
        n in 1usize..30,
    ) {
        let grid = Automaton::from_bits(rule, &initial).unwrap().run(n).unwrap();
        for row in grid.iter() {
            prop_assert_eq!(row.len(), initial.len());
            prop_assert!(row.iter().all(|&c| c <= 1));
        }
    }

    #[test]
    fn rotating_the_input_rotates_every_row(
        (rule, initial) in rule_and_lattice(),
        k in 0usize..64,
        n in 1usize..20,
    ) {
        let initial = Configuration::parse(&initial).unwrap();
        let grid = Automaton::new(rule, initial.clone()).unwrap().run(n).unwrap();
        let rotated = Automaton::new(rule, initial.rotated_left(k)).unwrap().run(n).unwrap();

        for (row, rotated_row) in grid.iter().zip(rotated.iter()) {
            let mut expected = row.clone();
            expected.rotate_left(k % row.len());
            prop_assert_eq!(&expected, rotated_row);
        }
    }

    #[test]
    fn identity_rule_is_a_fixed_point(
        radius in radius(),
        len in 7usize..40,
        seed in prop::collection::vec(0u8..=1, 40),
        n in 1usize..20,
    ) {
        let cells = seed[..len].to_vec();
        let grid = Automaton::from_cells(RuleTable::identity(radius), cells.clone())
            .unwrap()
            .run(n)
            .unwrap();
        for row in grid.iter() {
            prop_assert_eq!(row, &cells);
        }
    }

    #[test]
    fn all_zero_rule_clears_everything_after_row_zero(
        initial in (3usize..40).prop_flat_map(bits),
        n in 2usize..20,
    ) {
        let rule = RuleTable::parse("00000000", 1).unwrap();
        let grid = Automaton::from_bits(rule, &initial).unwrap().run(n).unwrap();
        for row in grid.iter().skip(1) {
            prop_assert!(row.iter().all(|&c| c == 0));
        }
    }

    #[test]
    fn off_by_one_rule_lengths_are_rejected(radius in radius(), longer in any::<bool>()) {
        let expected = radius.table_len();
        let actual = if longer { expected + 1 } else { expected - 1 };
        let result = RuleTable::with_radius(&"1".repeat(actual), radius);
        prop_assert_eq!(
            result,
            Err(Error::InvalidRuleLength { radius: radius.value(), expected, actual })
        );
    }

    #[test]
    fn short_lattices_are_rejected(radius in radius(), len in 0usize..7) {
        prop_assume!(len < radius.width());
        let result = Automaton::from_bits(RuleTable::identity(radius), &"0".repeat(len));
        prop_assert_eq!(
            result,
            Err(Error::ConfigurationTooShort {
                radius: radius.value(),
                minimum: radius.width(),
                actual: len,
            })
        );
    }
}

#[test]
fn non_positive_generation_counts_are_rejected() {
    for n in [0i64, -1, -100] {
        assert_eq!(
            ringca_core::generation_count(n),
            Err(Error::InvalidGenerationCount(n))
        );
    }
}

#[test]
fn radius_two_needs_five_cells() {
    let rule = RuleTable::identity(Radius::Two);
    assert!(matches!(
        Automaton::from_bits(rule, "0110"),
        Err(Error::ConfigurationTooShort { minimum: 5, actual: 4, .. })
    ));
}
