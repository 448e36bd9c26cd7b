// Copyright (c) The sop-min Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::{cube::Cube, table::TruthTable};
use proptest::prelude::*;

/// Generates an arbitrary cube over `input_len` variables.
pub fn cube_strategy(input_len: usize) -> impl Strategy<Value = Cube> {
    prop::collection::vec(any::<Option<bool>>(), input_len).prop_map(Cube::new)
}

/// Generates an arbitrary truth table over `1..=max_inputs` variables.
///
/// Every row of the table is independently assigned output 1, output 0, or
/// left absent (don't care), so no row is ever contradictory.
pub fn truth_table_strategy(max_inputs: usize) -> impl Strategy<Value = TruthTable> {
    (1..=max_inputs).prop_flat_map(|input_len| {
        prop::collection::vec(prop::option::of(any::<bool>()), 1 << input_len).prop_map(
            move |outputs| {
                let mut table =
                    TruthTable::new(input_len).expect("input_len is at most max_inputs");
                for (row_bits, output) in outputs.into_iter().enumerate() {
                    if let Some(output) = output {
                        let values: Vec<bool> =
                            (0..input_len).map(|bit| (row_bits >> bit) & 1 == 1).collect();
                        table.push_row(&values, output);
                    }
                }
                table
            },
        )
    })
}
