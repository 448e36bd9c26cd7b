// Copyright (c) The sop-min Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::errors::InvalidCubeNumeric;
use itertools::{Itertools, Position};
use std::{borrow::Cow, fmt};

/// A ternary vector: one value per input variable.
///
/// `Some(false)` is a variable fixed to 0, `Some(true)` a variable fixed to 1,
/// and `None` a don't care. A cube represents the set of fully specified
/// inputs obtained by substituting both values for every don't care. The
/// length is chosen at runtime; cubes of different lengths never meet.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct Cube {
    pub input: Vec<Option<bool>>,
}

impl Cube {
    #[inline]
    pub fn new(input: Vec<Option<bool>>) -> Self {
        Self { input }
    }

    /// Builds a fully specified cube (weight 0) from concrete values.
    pub fn from_values(values: &[bool]) -> Self {
        Self {
            input: values.iter().map(|&v| Some(v)).collect(),
        }
    }

    // Uses the representation in the Espresso book: 0 and 1 are fixed values,
    // 2 is a don't care.
    pub fn from_numeric(
        numeric: impl IntoIterator<Item = u8>,
    ) -> Result<Self, InvalidCubeNumeric> {
        let input = numeric
            .into_iter()
            .map(|val| match val {
                0 => Ok(Some(false)),
                1 => Ok(Some(true)),
                2 => Ok(None),
                _ => Err(InvalidCubeNumeric),
            })
            .collect::<Result<_, _>>()?;
        Ok(Self { input })
    }

    /// The all-don't-care cube over `input_len` variables.
    pub fn universe(input_len: usize) -> Self {
        Self {
            input: vec![None; input_len],
        }
    }

    #[inline]
    pub fn input_len(&self) -> usize {
        self.input.len()
    }

    /// Number of don't care variables. More general cubes have higher weight.
    pub fn weight(&self) -> usize {
        self.input.iter().filter(|v| v.is_none()).count()
    }

    #[inline]
    pub fn is_fully_specified(&self) -> bool {
        self.weight() == 0
    }

    /// True iff every input satisfying `other` also satisfies `self`: for
    /// every variable, `self` is a don't care or equals `other`'s value.
    ///
    /// This is a partial order. It is reflexive, and a fully specified cube
    /// contains only itself.
    pub fn contains(&self, other: &Cube) -> bool {
        assert_eq!(
            self.input_len(),
            other.input_len(),
            "cubes must have the same input length"
        );
        self.input
            .iter()
            .zip(&other.input)
            .all(|(&c, &d)| match (c, d) {
                (None, _) => true,
                (Some(c), Some(d)) => c == d,
                (Some(_), None) => false,
            })
    }

    /// Like [`contains`](Self::contains), but false for equal cubes.
    pub fn strictly_contains(&self, other: &Cube) -> bool {
        self.contains(other) && self != other
    }

    /// Evaluates the cube against concrete values: true iff the cube contains
    /// the corresponding fully specified point.
    pub fn evaluate(&self, values: &[bool]) -> bool {
        assert_eq!(
            self.input_len(),
            values.len(),
            "values must have the same length as the cube"
        );
        self.input
            .iter()
            .zip(values)
            .all(|(&variable, &value)| match variable {
                Some(v) => v == value,
                None => true,
            })
    }

    /// Yields every cube over `input_len` variables exactly once, starting
    /// from the universe cube.
    ///
    /// The traversal is a mixed-radix odometer: variable 0 cycles fastest
    /// through don't care, then 1, then 0, with a carry into the next
    /// variable. A cube is always yielded before every cube it strictly
    /// contains, so a scan of the sweep sees generalizations first. The cover
    /// enumeration in [`primes`](crate::primes) relies on this order to
    /// detect dominated candidates with a single backward check.
    pub fn sweep(input_len: usize) -> CubeSweep {
        CubeSweep {
            next: Some(Cube::universe(input_len)),
        }
    }

    // Advances one odometer step. Returns false on wraparound back to the
    // universe cube.
    fn decrement(&mut self) -> bool {
        for variable in &mut self.input {
            match *variable {
                None => {
                    *variable = Some(true);
                    return true;
                }
                Some(true) => {
                    *variable = Some(false);
                    return true;
                }
                Some(false) => {
                    // Carry into the next variable.
                    *variable = None;
                }
            }
        }
        false
    }

    #[inline]
    pub fn matrix_display(&self) -> CubeMatrixDisplay<'_> {
        CubeMatrixDisplay::new(self)
    }

    #[inline]
    pub fn algebraic_display<'a>(&'a self, input_names: &'a [String]) -> CubeAlgebraicDisplay<'a> {
        CubeAlgebraicDisplay::new(self, input_names)
    }
}

impl fmt::Debug for Cube {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_tuple("Cube")
            .field(&format_args!(
                "{}",
                self.matrix_display().with_internal_separator("")
            ))
            .finish()
    }
}

/// Iterator over all `3^n` cubes, produced by [`Cube::sweep`].
#[derive(Clone, Debug)]
pub struct CubeSweep {
    next: Option<Cube>,
}

impl Iterator for CubeSweep {
    type Item = Cube;

    fn next(&mut self) -> Option<Cube> {
        let current = self.next.take()?;
        let mut successor = current.clone();
        if successor.decrement() {
            self.next = Some(successor);
        }
        Some(current)
    }
}

#[derive(Clone, Debug)]
pub struct CubeMatrixDisplay<'a> {
    cube: &'a Cube,
    format: MatrixDisplayFormat,
    internal_separator: Cow<'a, str>,
}

impl<'a> CubeMatrixDisplay<'a> {
    pub fn new(cube: &'a Cube) -> Self {
        Self {
            cube,
            format: MatrixDisplayFormat::default(),
            internal_separator: Cow::Borrowed(" "),
        }
    }

    pub fn with_format(mut self, format: MatrixDisplayFormat) -> Self {
        self.format = format;
        self
    }

    pub fn with_internal_separator(mut self, separator: impl Into<Cow<'a, str>>) -> Self {
        self.internal_separator = separator.into();
        self
    }
}

impl<'a> fmt::Display for CubeMatrixDisplay<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let input_len = self.cube.input_len();
        for (input_ix, &input) in self.cube.input.iter().enumerate() {
            write!(f, "{}", self.format.char_for_input(input))?;
            if input_ix < input_len - 1 {
                write!(f, "{}", self.internal_separator)?;
            }
        }
        Ok(())
    }
}

#[derive(Copy, Clone, Debug)]
pub enum MatrixDisplayFormat {
    /// Display a cube using the format `100-1`, with dashes representing
    /// don't cares.
    Dashes,

    /// Display a cube using the format `10021`, with the numeric identifier 2
    /// representing don't cares.
    Numeric,
}

impl MatrixDisplayFormat {
    /// Returns the character that would be displayed for an input.
    pub fn char_for_input(self, input: Option<bool>) -> char {
        match input {
            Some(true) => '1',
            Some(false) => '0',
            None => match self {
                Self::Dashes => '-',
                Self::Numeric => '2',
            },
        }
    }
}

impl Default for MatrixDisplayFormat {
    fn default() -> Self {
        Self::Dashes
    }
}

/// Renders a cube as a conjunction of its fixed variables.
///
/// A variable fixed to 1 renders as its name, a variable fixed to 0 as its
/// name prefixed with `^`, and don't cares are omitted. Terms are joined with
/// `" & "`. The universe cube renders as the empty string.
pub struct CubeAlgebraicDisplay<'a> {
    cube: &'a Cube,
    input_names: &'a [String],
}

impl<'a> CubeAlgebraicDisplay<'a> {
    pub fn new(cube: &'a Cube, input_names: &'a [String]) -> Self {
        assert_eq!(
            cube.input_len(),
            input_names.len(),
            "input names must have the same length as the cube"
        );
        Self { cube, input_names }
    }
}

impl<'a> fmt::Display for CubeAlgebraicDisplay<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let fixed = self
            .cube
            .input
            .iter()
            .enumerate()
            .filter_map(|(input_ix, &input)| input.map(|value| (input_ix, value)));
        for elem in fixed.with_position() {
            let (input_ix, value) = match elem {
                Position::First(term) | Position::Only(term) => term,
                Position::Middle(term) | Position::Last(term) => {
                    write!(f, " & ")?;
                    term
                }
            };
            if !value {
                write!(f, "^")?;
            }
            write!(f, "{}", self.input_names[input_ix])?;
        }
        Ok(())
    }
}
