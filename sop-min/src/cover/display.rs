// Copyright (c) The sop-min Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::{
    cover::{Cover, MinimalCovers},
    primes::PrimeImplicants,
    table::TruthTable,
};
use itertools::{Itertools, Position};
use std::{borrow::Cow, fmt};

/// Renders a cover as a boolean expression: the output name, `=`, and the
/// selected implicants as parenthesized terms joined with `|`.
///
/// An empty cover renders nothing after the `=` (the constant false
/// function); the universe implicant renders as `()` (the constant true
/// function).
pub struct CoverAlgebraicDisplay<'a> {
    cover: &'a Cover,
    primes: &'a PrimeImplicants,
    table: &'a TruthTable,
}

impl<'a> CoverAlgebraicDisplay<'a> {
    pub fn new(cover: &'a Cover, primes: &'a PrimeImplicants, table: &'a TruthTable) -> Self {
        Self {
            cover,
            primes,
            table,
        }
    }
}

impl<'a> fmt::Display for CoverAlgebraicDisplay<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} =", self.table.output_name())?;
        for elem in self.cover.iter().with_position() {
            let prime_ix = match elem {
                Position::First(ix) | Position::Only(ix) => {
                    write!(f, " ")?;
                    ix
                }
                Position::Middle(ix) | Position::Last(ix) => {
                    write!(f, " | ")?;
                    ix
                }
            };
            write!(
                f,
                "({})",
                self.primes[prime_ix].algebraic_display(self.table.input_names())
            )?;
        }
        Ok(())
    }
}

/// Renders every tied minimal cover, one expression per separator-delimited
/// entry (one per line by default).
pub struct MinimalCoversAlgebraicDisplay<'a> {
    covers: &'a MinimalCovers,
    primes: &'a PrimeImplicants,
    table: &'a TruthTable,
    separator: (Cow<'a, str>, bool),
}

impl<'a> MinimalCoversAlgebraicDisplay<'a> {
    pub fn new(
        covers: &'a MinimalCovers,
        primes: &'a PrimeImplicants,
        table: &'a TruthTable,
    ) -> Self {
        Self {
            covers,
            primes,
            table,
            separator: (Cow::Borrowed("\n"), true),
        }
    }

    pub fn with_separator(mut self, separator: impl Into<Cow<'a, str>>, print_last: bool) -> Self {
        self.separator = (separator.into(), print_last);
        self
    }
}

impl<'a> fmt::Display for MinimalCoversAlgebraicDisplay<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let cover_count = self.covers.covers().len();
        for (cover_ix, cover) in self.covers.iter().enumerate() {
            write!(f, "{}", cover.algebraic_display(self.primes, self.table))?;

            let (separator, print_last) = &self.separator;
            if *print_last || cover_ix < cover_count - 1 {
                write!(f, "{}", separator)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cover_display() {
        let mut table = TruthTable::parse("a b y\n0 0 1\n0 1 1\n1 0 0\n1 1 0\n")
            .unwrap()
            .0;
        let primes = table.prime_implicants().unwrap();
        let result = table.minimal_covers(&primes).unwrap();
        assert_eq!(
            format!("{}", result.covers()[0].algebraic_display(&primes, &table)),
            "y = (^a)"
        );
        assert_eq!(
            format!("{}", result.algebraic_display(&primes, &table)),
            "y = (^a)\n"
        );

        // The constant true function renders as an empty term.
        table = TruthTable::parse("a b y\n1 1 1\n").unwrap().0;
        let primes = table.prime_implicants().unwrap();
        let result = table.minimal_covers(&primes).unwrap();
        assert_eq!(
            format!("{}", result.covers()[0].algebraic_display(&primes, &table)),
            "y = ()"
        );

        // The constant false function renders nothing after `=`.
        table = TruthTable::parse("a b y\n0 1 0\n").unwrap().0;
        let primes = table.prime_implicants().unwrap();
        let result = table.minimal_covers(&primes).unwrap();
        assert_eq!(
            format!("{}", result.covers()[0].algebraic_display(&primes, &table)),
            "y ="
        );
    }

    #[test]
    fn test_multiple_terms_and_separator() {
        let table = TruthTable::parse("a b y\n0 0 1\n1 1 1\n0 1 0\n1 0 0\n")
            .unwrap()
            .0;
        let primes = table.prime_implicants().unwrap();
        let result = table.minimal_covers(&primes).unwrap();
        assert_eq!(
            format!("{}", result.algebraic_display(&primes, &table)),
            "y = (a & b) | (^a & ^b)\n"
        );
        assert_eq!(
            format!(
                "{}",
                result.algebraic_display(&primes, &table).with_separator("; ", false)
            ),
            "y = (a & b) | (^a & ^b)"
        );
    }
}
