// Copyright (c) The sop-min Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::{cube::Cube, errors::LimitError, table::TruthTable};
use log::debug;
use std::{fmt, ops::Index};

/// The maximum number of prime implicants accepted during enumeration.
///
/// A safety valve for the exponential search space, not a recoverable
/// condition: exceeding it aborts enumeration with no partial result.
pub const MAX_PRIME_IMPLICANTS: usize = 10_000;

impl TruthTable {
    /// Enumerates every prime implicant of the function: each cube that
    /// covers at least one minterm, covers no non-minterm, and is not
    /// contained in any other such cube.
    ///
    /// Runs in `O(3^n * (|minterms| + |nonminterms| + |primes|))`, which
    /// bounds practical input counts to roughly the teens.
    pub fn prime_implicants(&self) -> Result<PrimeImplicants, LimitError> {
        let mut accepted: Vec<Cube> = Vec::new();

        // The sweep visits generalizations before the cubes they contain, so
        // a candidate contained in any accepted cube is not prime and a
        // candidate that survives can never be contained in a later one.
        for candidate in Cube::sweep(self.input_len()) {
            if !self.minterms().iter().any(|m| candidate.contains(m)) {
                continue;
            }
            if self.nonminterms().iter().any(|m| candidate.contains(m)) {
                continue;
            }
            if accepted.iter().any(|prime| prime.contains(&candidate)) {
                continue;
            }
            if accepted.len() == MAX_PRIME_IMPLICANTS {
                return Err(LimitError::TooManyPrimeImplicants);
            }
            accepted.push(candidate);
        }

        // Most general first. The cover search branches over this order, and
        // its pruning assumes it; the sort is stable so equal weights keep
        // sweep order.
        accepted.sort_by(|a, b| b.weight().cmp(&a.weight()));

        debug!(
            "accepted {} prime implicants over {} input variables",
            accepted.len(),
            self.input_len(),
        );
        Ok(PrimeImplicants {
            cubes: accepted,
            input_len: self.input_len(),
        })
    }
}

/// The complete prime implicant set of a function, sorted by descending
/// weight (most general first).
///
/// Computed once by [`TruthTable::prime_implicants`] and immutable
/// thereafter; covers refer to implicants by index into this list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PrimeImplicants {
    cubes: Vec<Cube>,
    input_len: usize,
}

impl PrimeImplicants {
    #[inline]
    pub fn len(&self) -> usize {
        self.cubes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cubes.is_empty()
    }

    #[inline]
    pub fn input_len(&self) -> usize {
        self.input_len
    }

    #[inline]
    pub fn cubes(&self) -> &[Cube] {
        &self.cubes
    }

    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &Cube> + '_ {
        self.cubes.iter()
    }

    /// Renders the implicants as a numbered, width-aligned list of algebraic
    /// terms, one per line.
    #[inline]
    pub fn algebraic_display<'a>(&'a self, table: &'a TruthTable) -> PrimeImplicantsDisplay<'a> {
        PrimeImplicantsDisplay {
            primes: self,
            table,
        }
    }
}

impl Index<usize> for PrimeImplicants {
    type Output = Cube;

    fn index(&self, ix: usize) -> &Cube {
        &self.cubes[ix]
    }
}

pub struct PrimeImplicantsDisplay<'a> {
    primes: &'a PrimeImplicants,
    table: &'a TruthTable,
}

impl<'a> fmt::Display for PrimeImplicantsDisplay<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let width = self.primes.len().to_string().len();
        for (ix, cube) in self.primes.iter().enumerate() {
            writeln!(
                f,
                "{:>width$}: {}",
                ix + 1,
                cube.algebraic_display(self.table.input_names()),
                width = width,
            )?;
        }
        Ok(())
    }
}
