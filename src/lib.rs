//! `conferir` checks a list of lottery bets against the official draw. The
//! pipeline is:
//!
//! * `operands` opens the two input files,
//! * `lines` picks out the lines that carry data,
//! * `numbers` parses and validates each such line,
//! * `load` turns the bets file into `Bet`s and the result file into a `NumberSet`,
//! * `matcher` counts each bet's hits, and
//! * `report` prints them.
//!
//! Every problem is fatal: the first bad line stops the run, and nothing is
//! printed to stdout.

#![cfg_attr(debug_assertions, allow(dead_code, unused_imports))]
#![deny(unused_must_use)]
#![deny(clippy::all)]
#![allow(clippy::needless_return)]
#![deny(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]
#![deny(missing_docs)]

use anyhow::{Context, Result};
use std::io::{self, BufRead};
use std::path::Path;

pub mod args;
mod help;
pub mod lines;
pub mod load;
pub mod matcher;
pub mod numbers;
pub mod operands;
pub mod report;
mod styles;

use crate::load::{load_bets, load_result, require_bets};
use crate::operands::Operand;

/// Compares the bets in the file at `bets_path` with the draw in the file at
/// `result_path`, and writes the report to `out`. Both files are opened before
/// either is read.
pub fn run(bets_path: &Path, result_path: &Path, out: impl io::Write) -> Result<()> {
    let bets = Operand::open(bets_path)?;
    let result = Operand::open(result_path)?;
    compare_named(bets.reader, &bets.path_display, result.reader, &result.path_display, out)
}

/// Like `run`, but reads the bets and the result from any buffered readers.
pub fn compare(bets: impl BufRead, result: impl BufRead, out: impl io::Write) -> Result<()> {
    compare_named(bets, "the bets input", result, "the result input", out)
}

fn compare_named(
    bets: impl BufRead,
    bets_name: &str,
    result: impl BufRead,
    result_name: &str,
    out: impl io::Write,
) -> Result<()> {
    let bets = load_bets(bets)
        .and_then(require_bets)
        .with_context(|| format!("Can't read bets from {bets_name}"))?;
    let result =
        load_result(result).with_context(|| format!("Can't read result from {result_name}"))?;
    let counts = matcher::compare_all(&bets, &result);
    report::write_report(out, &bets, &result, &counts)
}
