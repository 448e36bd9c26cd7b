// Copyright (c) The sop-min Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::{
    cover::{CoverAlgebraicDisplay, MinimalCoversAlgebraicDisplay},
    cube::Cube,
    errors::UncoveredMinterm,
    primes::PrimeImplicants,
    table::TruthTable,
};
use bitvec::prelude::*;
use log::debug;
use std::{cmp::Ordering, collections::BTreeSet};

use super::caches::SolverCache;

impl TruthTable {
    /// Finds every minimum-size set of prime implicants covering all
    /// minterms of this table.
    ///
    /// Fails with [`UncoveredMinterm`] if some minterm is covered by no prime
    /// implicant at all, which can only happen when a row is listed as both a
    /// minterm and a non-minterm.
    pub fn minimal_covers(
        &self,
        primes: &PrimeImplicants,
    ) -> Result<MinimalCovers, UncoveredMinterm> {
        CoverSolver::new(self, primes).solve()
    }
}

/// One selection of prime implicants, stored as a set of indexes into the
/// [`PrimeImplicants`] list it was solved against.
#[derive(Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct Cover {
    elements: BTreeSet<usize>,
}

impl Cover {
    pub fn new(elements: impl IntoIterator<Item = usize>) -> Self {
        Self {
            elements: elements.into_iter().collect(),
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.elements.iter().copied()
    }

    #[inline]
    pub fn contains(&self, prime_ix: usize) -> bool {
        self.elements.contains(&prime_ix)
    }

    /// True iff every one of `minterms` is covered by some selected
    /// implicant.
    pub fn is_cover_of(&self, primes: &PrimeImplicants, minterms: &[Cube]) -> bool {
        minterms
            .iter()
            .all(|minterm| self.iter().any(|prime_ix| primes[prime_ix].contains(minterm)))
    }

    #[inline]
    pub fn algebraic_display<'a>(
        &'a self,
        primes: &'a PrimeImplicants,
        table: &'a TruthTable,
    ) -> CoverAlgebraicDisplay<'a> {
        CoverAlgebraicDisplay::new(self, primes, table)
    }
}

/// The result of the minimal cover search: the minimum cover size and every
/// cover achieving it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MinimalCovers {
    min_size: usize,
    covers: Vec<Cover>,
}

impl MinimalCovers {
    /// The minimum number of prime implicants needed to cover every minterm.
    /// Zero means the function is constant false.
    #[inline]
    pub fn min_size(&self) -> usize {
        self.min_size
    }

    /// All covers of exactly [`min_size`](Self::min_size) implicants, each
    /// distinct, in discovery order.
    #[inline]
    pub fn covers(&self) -> &[Cover] {
        &self.covers
    }

    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &Cover> + '_ {
        self.covers.iter()
    }

    #[inline]
    pub fn algebraic_display<'a>(
        &'a self,
        primes: &'a PrimeImplicants,
        table: &'a TruthTable,
    ) -> MinimalCoversAlgebraicDisplay<'a> {
        MinimalCoversAlgebraicDisplay::new(self, primes, table)
    }
}

/// Backtracking search for all minimum-size covers.
///
/// Each solver owns its working state exclusively; concurrent solves over
/// different tables never share anything.
pub struct CoverSolver<'a> {
    table: &'a TruthTable,
    primes: &'a PrimeImplicants,
    cache: SolverCache,
}

impl<'a> CoverSolver<'a> {
    pub fn new(table: &'a TruthTable, primes: &'a PrimeImplicants) -> Self {
        assert_eq!(
            table.input_len(),
            primes.input_len(),
            "prime implicants must be over the same variables as the table"
        );
        Self {
            table,
            primes,
            cache: SolverCache::default(),
        }
    }

    /// The indexes of the prime implicants covering the given minterm.
    #[inline]
    pub fn candidates_for(&self, minterm_ix: usize) -> &[usize] {
        self.cache
            .get_or_init_candidates(self.table, self.primes)
            .candidates_for(minterm_ix)
    }

    /// Verifies that every minterm has at least one covering implicant.
    pub fn check_coverable(&self) -> Result<(), UncoveredMinterm> {
        match self
            .cache
            .get_or_init_candidates(self.table, self.primes)
            .first_uncoverable()
        {
            Some(minterm_ix) => Err(UncoveredMinterm {
                minterm_ix,
                minterm: self.table.minterms()[minterm_ix].clone(),
            }),
            None => Ok(()),
        }
    }

    /// Runs the search. With no minterms the result is the single empty
    /// cover of size zero (the constant false function).
    pub fn solve(&self) -> Result<MinimalCovers, UncoveredMinterm> {
        self.check_coverable()?;

        let mut state = SearchState {
            selection: Vec::new(),
            // No bound yet: covering every minterm with its own implicant
            // never takes more than the whole list.
            best: self.primes.len(),
            found: Vec::new(),
        };
        let tried = bitvec![0; self.primes.len()];
        self.search(0, &tried, &mut state);

        assert!(
            !state.found.is_empty(),
            "coverable minterms always admit at least one cover"
        );
        debug!(
            "minimal cover search finished: size {}, {} tied covers",
            state.best,
            state.found.len(),
        );
        Ok(MinimalCovers {
            min_size: state.best,
            covers: state.found,
        })
    }

    // Depth-first over a minterm cursor. `tried` marks implicants already
    // branched on along this path; copying it per node and letting the marks
    // accumulate across the node's branches stops the same unordered
    // selection from being rebuilt through a different choice order.
    fn search(&self, mut minterm_ix: usize, tried: &BitSlice, state: &mut SearchState) {
        let minterms = self.table.minterms();
        let mut tried = tried.to_bitvec();

        while minterm_ix < minterms.len() {
            let covered = state
                .selection
                .iter()
                .any(|&prime_ix| self.primes[prime_ix].contains(&minterms[minterm_ix]));
            if covered {
                minterm_ix += 1;
                continue;
            }

            // Another implicant cannot improve on the best known size.
            if state.selection.len() == state.best {
                return;
            }

            for &prime_ix in self.candidates_for(minterm_ix) {
                if tried[prime_ix] {
                    continue;
                }
                tried.set(prime_ix, true);
                state.selection.push(prime_ix);
                self.search(minterm_ix + 1, &tried, state);
                state.selection.pop();
            }
            return;
        }

        // The selection covers every minterm.
        match state.selection.len().cmp(&state.best) {
            Ordering::Less => {
                state.best = state.selection.len();
                state.found.clear();
                state.found.push(Cover::new(state.selection.iter().copied()));
            }
            Ordering::Equal => {
                state.found.push(Cover::new(state.selection.iter().copied()));
            }
            // Unreachable given the bound check above; dropping the cover is
            // the safe answer if it ever happens.
            Ordering::Greater => {}
        }
    }
}

struct SearchState {
    selection: Vec<usize>,
    best: usize,
    found: Vec<Cover>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::proptest_helpers::truth_table_strategy;
    use itertools::Itertools;
    use proptest::prelude::*;

    fn cube(numeric: impl IntoIterator<Item = u8>) -> Cube {
        Cube::from_numeric(numeric).unwrap()
    }

    fn cover_cubes(cover: &Cover, primes: &PrimeImplicants) -> BTreeSet<Cube> {
        cover.iter().map(|ix| primes[ix].clone()).collect()
    }

    #[test]
    fn test_single_implicant_cover() {
        let mut table = TruthTable::new(2).unwrap();
        table.push_row(&[false, false], true);
        table.push_row(&[false, true], true);
        table.push_row(&[true, false], false);
        table.push_row(&[true, true], false);

        let primes = table.prime_implicants().unwrap();
        let result = table.minimal_covers(&primes).unwrap();
        assert_eq!(result.min_size(), 1);
        assert_eq!(result.covers(), [Cover::new([0])]);
        assert_eq!(
            cover_cubes(&result.covers()[0], &primes),
            BTreeSet::from([cube([0, 2])])
        );
    }

    #[test]
    fn test_universe_cover() {
        let mut table = TruthTable::new(2).unwrap();
        table.push_row(&[true, true], true);

        let primes = table.prime_implicants().unwrap();
        let result = table.minimal_covers(&primes).unwrap();
        assert_eq!(result.min_size(), 1);
        assert_eq!(
            cover_cubes(&result.covers()[0], &primes),
            BTreeSet::from([Cube::universe(2)])
        );
    }

    #[test]
    fn test_xnor_cover() {
        let mut table = TruthTable::new(2).unwrap();
        table.push_row(&[false, false], true);
        table.push_row(&[true, true], true);
        table.push_row(&[false, true], false);
        table.push_row(&[true, false], false);

        let primes = table.prime_implicants().unwrap();
        let result = table.minimal_covers(&primes).unwrap();
        assert_eq!(result.min_size(), 2);
        // Exactly one tie: both minterms are needed.
        assert_eq!(result.covers(), [Cover::new([0, 1])]);
    }

    #[test]
    fn test_empty_minterm_set() {
        let mut table = TruthTable::new(2).unwrap();
        table.push_row(&[false, true], false);

        let primes = table.prime_implicants().unwrap();
        let result = table.minimal_covers(&primes).unwrap();
        assert_eq!(result.min_size(), 0);
        assert_eq!(result.covers(), [Cover::default()]);
    }

    #[test]
    fn test_cyclic_function_ties() {
        // The classic cyclic function f = sum of minterms 0, 1, 2, 5, 6, 7
        // over (a, b, c): six weight-1 primes forming a six-cycle, with
        // exactly two minimal covers of size 3.
        let mut table = TruthTable::new(3).unwrap();
        for bits in 0..8u32 {
            let values: Vec<bool> = (0..3).map(|bit| (bits >> (2 - bit)) & 1 == 1).collect();
            let output = matches!(bits, 0 | 1 | 2 | 5 | 6 | 7);
            table.push_row(&values, output);
        }

        let primes = table.prime_implicants().unwrap();
        let expected_primes: BTreeSet<Cube> = [
            cube([0, 0, 2]), // ^a & ^b
            cube([0, 2, 0]), // ^a & ^c
            cube([2, 0, 1]), // ^b & c
            cube([2, 1, 0]), // b & ^c
            cube([1, 2, 1]), // a & c
            cube([1, 1, 2]), // a & b
        ]
        .into();
        assert_eq!(
            primes.iter().cloned().collect::<BTreeSet<_>>(),
            expected_primes
        );

        let result = table.minimal_covers(&primes).unwrap();
        assert_eq!(result.min_size(), 3);
        assert_eq!(result.covers().len(), 2, "both tied covers are reported");

        let actual: BTreeSet<BTreeSet<Cube>> = result
            .iter()
            .map(|cover| cover_cubes(cover, &primes))
            .collect();
        let expected: BTreeSet<BTreeSet<Cube>> = [
            [cube([0, 0, 2]), cube([2, 1, 0]), cube([1, 2, 1])].into(),
            [cube([0, 2, 0]), cube([2, 0, 1]), cube([1, 1, 2])].into(),
        ]
        .into();
        assert_eq!(actual, expected);
    }

    #[test]
    fn test_contradictory_row() {
        // The same row as both a minterm and a non-minterm leaves the
        // minterm uncoverable.
        let mut table = TruthTable::new(2).unwrap();
        table.push_row(&[false, false], true);
        table.push_row(&[false, false], false);
        table.push_row(&[true, true], true);

        let primes = table.prime_implicants().unwrap();
        let err = table.minimal_covers(&primes).unwrap_err();
        assert_eq!(err.minterm_ix, 0);
        assert_eq!(err.minterm, Cube::from_values(&[false, false]));
    }

    #[test]
    fn test_candidates_for() {
        let mut table = TruthTable::new(2).unwrap();
        table.push_row(&[false, false], true);
        table.push_row(&[true, true], true);
        table.push_row(&[false, true], false);
        table.push_row(&[true, false], false);

        let primes = table.prime_implicants().unwrap();
        let solver = CoverSolver::new(&table, &primes);
        // primes is [11, 00]; minterm 0 is 00, minterm 1 is 11.
        assert_eq!(solver.candidates_for(0), [1]);
        assert_eq!(solver.candidates_for(1), [0]);
        assert!(solver.check_coverable().is_ok());
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]
        #[test]
        fn prop_minimal_covers(table in truth_table_strategy(3)) {
            let primes = table.prime_implicants().expect("well within limits");
            // The strategy gives each row at most one output, so every
            // minterm is coverable.
            let result = table.minimal_covers(&primes).expect("no contradictory rows");

            prop_assert!(!result.covers().is_empty());
            for cover in result.covers() {
                prop_assert_eq!(cover.len(), result.min_size());
                prop_assert!(cover.is_cover_of(&primes, table.minterms()));
            }

            // Every tie is distinct.
            let distinct: BTreeSet<&Cover> = result.iter().collect();
            prop_assert_eq!(distinct.len(), result.covers().len());

            // Cross-check minimality and tie completeness against brute
            // force over all selections of up to min_size implicants.
            if primes.len() <= 12 {
                for size in 0..result.min_size() {
                    for selection in (0..primes.len()).combinations(size) {
                        let cover = Cover::new(selection);
                        prop_assert!(
                            !cover.is_cover_of(&primes, table.minterms()),
                            "{:?} beats the reported minimum {}",
                            cover,
                            result.min_size(),
                        );
                    }
                }
                let mut tied = 0;
                for selection in (0..primes.len()).combinations(result.min_size()) {
                    let cover = Cover::new(selection);
                    if cover.is_cover_of(&primes, table.minterms()) {
                        prop_assert!(
                            result.covers().contains(&cover),
                            "valid minimal cover {:?} is missing from the result",
                            cover,
                        );
                        tied += 1;
                    }
                }
                prop_assert_eq!(tied, result.covers().len());
            }

            // Idempotence.
            let again = table.minimal_covers(&primes).expect("no contradictory rows");
            prop_assert_eq!(&result, &again);
        }
    }
}
