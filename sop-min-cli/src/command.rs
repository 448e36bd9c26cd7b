// Copyright (c) The sop-min Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use camino::Utf8PathBuf;
use clap::Parser;
use color_eyre::{eyre::WrapErr, Result};
use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode};
use sop_min::table::TruthTable;
use std::time::Instant;

/// Minimizes a boolean function given as a truth table into its minimal
/// sum-of-products forms.
#[derive(Debug, Parser)]
#[clap(
    name = "sop-min",
    version,
    after_help = "Note: the output value for input rows not listed in the truth table file is \
                  treated as \"don't care\"."
)]
pub struct SopMinApp {
    /// Truth table file.
    table: Utf8PathBuf,

    /// Don't search for minimal covers (use with --print-prime-implicants).
    #[clap(long, short)]
    no_search: bool,

    /// Print all prime implicants.
    #[clap(long, short)]
    print_prime_implicants: bool,

    /// Print timing data about this program run.
    #[clap(long, short)]
    time: bool,

    /// Print more detailed logs (repeat for more detail).
    #[clap(long, short, parse(from_occurrences))]
    verbose: u64,
}

impl SopMinApp {
    pub fn exec(self) -> Result<()> {
        color_eyre::install()?;
        let level = match self.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        };
        TermLogger::init(
            level,
            Config::default(),
            TerminalMode::Stderr,
            ColorChoice::Auto,
        )?;

        let input = std::fs::read_to_string(&self.table)
            .wrap_err_with(|| format!("failed to read {}", self.table))?;
        let (table, warnings) = TruthTable::parse(&input)
            .wrap_err_with(|| format!("failed to parse {}", self.table))?;
        for warning in &warnings {
            eprintln!("{}:{}: {}", self.table, warning.line, warning);
        }

        let start = Instant::now();
        let primes = table.prime_implicants()?;
        let enumeration_time = start.elapsed();

        if self.print_prime_implicants {
            println!("Prime implicants:");
            print!("{}", primes.algebraic_display(&table));
            println!();
        }
        if self.time {
            eprintln!(
                "Time for constructing prime implicants table: {}s",
                enumeration_time.as_secs_f64(),
            );
        }

        if !self.no_search {
            let start = Instant::now();
            let covers = table.minimal_covers(&primes)?;
            let search_time = start.elapsed();

            println!("Results:");
            print!("{}", covers.algebraic_display(&primes, &table));
            if self.time {
                eprintln!(
                    "Time for solving the minimal cover problem: {}s",
                    search_time.as_secs_f64(),
                );
            }
        }

        Ok(())
    }
}
