// Copyright (c) The sop-min Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::{primes::PrimeImplicants, table::TruthTable};
use once_cell::sync::OnceCell;

/// Cache for solver data.
#[derive(Clone, Debug, Default)]
pub(super) struct SolverCache {
    candidates: OnceCell<CandidateTable>,
}

impl SolverCache {
    pub(super) fn get_or_init_candidates(
        &self,
        table: &TruthTable,
        primes: &PrimeImplicants,
    ) -> &CandidateTable {
        self.candidates
            .get_or_init(|| CandidateTable::new(table, primes))
    }
}

/// For each minterm, the indexes of the prime implicants covering it. These
/// are exactly the implicants worth branching over at that minterm.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(super) struct CandidateTable {
    per_minterm: Vec<Vec<usize>>,
}

impl CandidateTable {
    fn new(table: &TruthTable, primes: &PrimeImplicants) -> Self {
        let per_minterm = table
            .minterms()
            .iter()
            .map(|minterm| {
                primes
                    .iter()
                    .enumerate()
                    .filter_map(|(prime_ix, prime)| prime.contains(minterm).then(|| prime_ix))
                    .collect()
            })
            .collect();
        Self { per_minterm }
    }

    #[inline]
    pub(super) fn candidates_for(&self, minterm_ix: usize) -> &[usize] {
        &self.per_minterm[minterm_ix]
    }

    /// The index of the first minterm no prime implicant covers, if any.
    pub(super) fn first_uncoverable(&self) -> Option<usize> {
        self.per_minterm.iter().position(Vec::is_empty)
    }
}
