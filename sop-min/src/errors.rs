// Copyright (c) The sop-min Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::cube::Cube;
use std::{error, fmt};

/// A numeric cube description contained a value other than 0, 1 or 2.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct InvalidCubeNumeric;

impl fmt::Display for InvalidCubeNumeric {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "numeric cube values must be 0, 1 or 2")
    }
}

impl error::Error for InvalidCubeNumeric {}

/// A configured size limit was exceeded. Fatal: no partial result is produced.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LimitError {
    /// More input variables than [`MAX_INPUTS`](crate::table::MAX_INPUTS).
    TooManyInputs { actual: usize },
    /// Enumeration would accept more than
    /// [`MAX_PRIME_IMPLICANTS`](crate::primes::MAX_PRIME_IMPLICANTS) cubes.
    TooManyPrimeImplicants,
}

impl fmt::Display for LimitError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            LimitError::TooManyInputs { actual } => write!(
                f,
                "the number of input variables is too large: {} (maximum {})",
                actual,
                crate::table::MAX_INPUTS,
            ),
            LimitError::TooManyPrimeImplicants => write!(
                f,
                "the number of prime implicants is too large (maximum {})",
                crate::primes::MAX_PRIME_IMPLICANTS,
            ),
        }
    }
}

impl error::Error for LimitError {}

/// A truth table file could not be parsed at all.
///
/// Malformed *rows* are not errors: they produce a [`ParseWarning`] and are
/// skipped, leaving the row an implicit don't care.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ParseError {
    /// The file contained no header line.
    MissingHeader,
    /// The header named fewer than two columns, so there is no output column.
    MissingOutputColumn,
    /// The header declared more input variables than the configured maximum.
    Limit(LimitError),
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ParseError::MissingHeader => write!(f, "missing header line"),
            ParseError::MissingOutputColumn => {
                write!(f, "header must name at least one input and the output")
            }
            ParseError::Limit(err) => write!(f, "{}", err),
        }
    }
}

impl error::Error for ParseError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            ParseError::Limit(err) => Some(err),
            _ => None,
        }
    }
}

impl From<LimitError> for ParseError {
    fn from(err: LimitError) -> Self {
        ParseError::Limit(err)
    }
}

/// A malformed truth table row, skipped during parsing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseWarning {
    /// 1-based line number of the offending row.
    pub line: usize,
    /// The offending line, verbatim.
    pub text: String,
}

impl fmt::Display for ParseWarning {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "warning: illegal input line \"{}\", ignored", self.text)
    }
}

/// A minterm not covered by any prime implicant.
///
/// Given correct enumeration this can only happen when the same row appears as
/// both a minterm and a non-minterm, since every non-contradictory minterm
/// covers itself. Reported loudly instead of producing an incomplete cover.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UncoveredMinterm {
    pub minterm_ix: usize,
    pub minterm: Cube,
}

impl fmt::Display for UncoveredMinterm {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "minterm {} ({}) is not covered by any prime implicant -- \
             is the row also listed with output 0?",
            self.minterm_ix,
            self.minterm.matrix_display().with_internal_separator(""),
        )
    }
}

impl error::Error for UncoveredMinterm {}
