// Copyright (c) The sop-min Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::{
    cube::Cube,
    errors::{LimitError, ParseError, ParseWarning},
};
use log::debug;

/// The maximum number of input variables.
///
/// Enumeration visits `3^n` cubes, so well before this limit the running time
/// is the practical constraint.
pub const MAX_INPUTS: usize = 64;

/// A single-output truth table: the context shared by prime implicant
/// enumeration and the minimal cover search.
///
/// Rows with output 1 become minterms, rows with output 0 become
/// non-minterms. Rows never pushed are implicitly don't care: neither
/// required nor forbidden. The table is immutable once loaded.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TruthTable {
    input_names: Vec<String>,
    output_name: String,
    minterms: Vec<Cube>,
    nonminterms: Vec<Cube>,
}

impl TruthTable {
    /// Creates an empty table with generated variable names `a`, `b`, ...,
    /// `z`, `aa`, ... and output name `F`.
    pub fn new(input_len: usize) -> Result<Self, LimitError> {
        let input_names = (0..input_len).map(generated_name).collect();
        Self::with_names(input_names, "F".to_owned())
    }

    /// Creates an empty table with explicit variable names. The names are
    /// cosmetic: the algorithms only ever use variable indexes.
    pub fn with_names(input_names: Vec<String>, output_name: String) -> Result<Self, LimitError> {
        if input_names.len() > MAX_INPUTS {
            return Err(LimitError::TooManyInputs {
                actual: input_names.len(),
            });
        }
        Ok(Self {
            input_names,
            output_name,
            minterms: Vec::new(),
            nonminterms: Vec::new(),
        })
    }

    /// Parses the text format of a truth table.
    ///
    /// Blank lines and lines starting with `#` are skipped. The first
    /// remaining line is the header: whitespace-separated variable names, the
    /// last of which names the output. Every other line is a row of `0`/`1`
    /// tokens, one per input variable plus the output value. Malformed rows
    /// are reported as warnings and omitted from both sets, leaving them
    /// implicit don't cares.
    pub fn parse(input: &str) -> Result<(Self, Vec<ParseWarning>), ParseError> {
        let mut lines = input.lines().enumerate().filter(|(_, line)| {
            let trimmed = line.trim_start();
            !trimmed.is_empty() && !trimmed.starts_with('#')
        });

        let (_, header) = lines.next().ok_or(ParseError::MissingHeader)?;
        let mut names: Vec<String> = header.split_whitespace().map(str::to_owned).collect();
        if names.len() < 2 {
            return Err(ParseError::MissingOutputColumn);
        }
        let output_name = names.pop().expect("just checked names.len() >= 2");

        let mut table = Self::with_names(names, output_name)?;
        let mut warnings = Vec::new();
        for (line_ix, line) in lines {
            match parse_row(line, table.input_len()) {
                Some((values, output)) => table.push_row(&values, output),
                None => warnings.push(ParseWarning {
                    line: line_ix + 1,
                    text: line.to_owned(),
                }),
            }
        }

        debug!(
            "parsed truth table: {} input variables, {} minterms, {} non-minterms, {} bad rows",
            table.input_len(),
            table.minterms.len(),
            table.nonminterms.len(),
            warnings.len(),
        );
        Ok((table, warnings))
    }

    /// Adds a fully specified row with the given output value.
    pub fn push_row(&mut self, values: &[bool], output: bool) {
        assert_eq!(
            values.len(),
            self.input_len(),
            "row must have one value per input variable"
        );
        let cube = Cube::from_values(values);
        if output {
            self.minterms.push(cube);
        } else {
            self.nonminterms.push(cube);
        }
    }

    #[inline]
    pub fn input_len(&self) -> usize {
        self.input_names.len()
    }

    #[inline]
    pub fn input_names(&self) -> &[String] {
        &self.input_names
    }

    #[inline]
    pub fn output_name(&self) -> &str {
        &self.output_name
    }

    #[inline]
    pub fn minterms(&self) -> &[Cube] {
        &self.minterms
    }

    #[inline]
    pub fn nonminterms(&self) -> &[Cube] {
        &self.nonminterms
    }
}

fn parse_row(line: &str, input_len: usize) -> Option<(Vec<bool>, bool)> {
    let mut values = line
        .split_whitespace()
        .map(|token| match token {
            "0" => Some(false),
            "1" => Some(true),
            _ => None,
        })
        .collect::<Option<Vec<bool>>>()?;
    if values.len() != input_len + 1 {
        return None;
    }
    let output = values.pop().expect("row has at least the output value");
    Some((values, output))
}

// Spreadsheet-style names: a..z, then aa, ab, ...
fn generated_name(mut ix: usize) -> String {
    let mut name = String::new();
    loop {
        name.insert(0, (b'a' + (ix % 26) as u8) as char);
        if ix < 26 {
            break;
        }
        ix = ix / 26 - 1;
    }
    name
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ParseWarning;

    #[test]
    fn test_generated_names() {
        let table = TruthTable::new(3).unwrap();
        assert_eq!(table.input_names(), ["a", "b", "c"]);
        assert_eq!(table.output_name(), "F");

        assert_eq!(generated_name(25), "z");
        assert_eq!(generated_name(26), "aa");
        assert_eq!(generated_name(27), "ab");
        assert_eq!(generated_name(51), "az");
        assert_eq!(generated_name(52), "ba");
    }

    #[test]
    fn test_push_row() {
        let mut table = TruthTable::new(2).unwrap();
        table.push_row(&[false, false], true);
        table.push_row(&[true, false], false);
        assert_eq!(table.minterms(), [Cube::from_values(&[false, false])]);
        assert_eq!(table.nonminterms(), [Cube::from_values(&[true, false])]);
    }

    #[test]
    fn test_too_many_inputs() {
        assert_eq!(
            TruthTable::new(65),
            Err(LimitError::TooManyInputs { actual: 65 })
        );
        assert!(TruthTable::new(64).is_ok());
    }

    #[test]
    fn test_parse_basic() {
        let input = "\
# two-variable example
a b y

0 0 1
0 1 1
1 0 0
1 1 0
";
        let (table, warnings) = TruthTable::parse(input).unwrap();
        assert_eq!(warnings, []);
        assert_eq!(table.input_names(), ["a", "b"]);
        assert_eq!(table.output_name(), "y");
        assert_eq!(
            table.minterms(),
            [
                Cube::from_values(&[false, false]),
                Cube::from_values(&[false, true]),
            ]
        );
        assert_eq!(
            table.nonminterms(),
            [
                Cube::from_values(&[true, false]),
                Cube::from_values(&[true, true]),
            ]
        );
    }

    #[test]
    fn test_parse_warnings() {
        let input = "\
a b y
0 0 1
0 2 1
1 0
1 1 0 0
1 1 0
";
        let (table, warnings) = TruthTable::parse(input).unwrap();
        assert_eq!(
            warnings,
            [
                ParseWarning {
                    line: 3,
                    text: "0 2 1".to_owned()
                },
                ParseWarning {
                    line: 4,
                    text: "1 0".to_owned()
                },
                ParseWarning {
                    line: 5,
                    text: "1 1 0 0".to_owned()
                },
            ]
        );
        // Malformed rows land in neither set.
        assert_eq!(table.minterms().len(), 1);
        assert_eq!(table.nonminterms().len(), 1);
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(TruthTable::parse(""), Err(ParseError::MissingHeader));
        assert_eq!(
            TruthTable::parse("# only a comment\n\n"),
            Err(ParseError::MissingHeader)
        );
        assert_eq!(
            TruthTable::parse("y\n"),
            Err(ParseError::MissingOutputColumn)
        );

        let mut header = (0..65).map(generated_name).collect::<Vec<_>>().join(" ");
        header.push_str(" y\n");
        assert_eq!(
            TruthTable::parse(&header),
            Err(ParseError::Limit(LimitError::TooManyInputs { actual: 65 }))
        );
    }
}
