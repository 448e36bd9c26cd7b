// Copyright (c) The sop-min Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Exact minimization of boolean functions given as truth tables.
//!
//! A function is described by its [`table::TruthTable`]: the rows whose output
//! is 1 (minterms), the rows whose output is 0 (non-minterms), and implicitly
//! the rows not listed at all (don't cares). The crate enumerates every prime
//! implicant of the function and then searches for all smallest sets of prime
//! implicants covering every minterm, yielding the minimal sum-of-products
//! forms.
//!
//! Both stages are exact and exhaustive: enumeration visits all `3^n` ternary
//! cubes and the cover search is a full branch-and-bound. This bounds
//! practical input counts to roughly the teens.

pub mod cover;
pub mod cube;
pub mod errors;
pub mod primes;
#[cfg(any(test, feature = "proptest1"))]
pub mod proptest_helpers;
pub mod table;
