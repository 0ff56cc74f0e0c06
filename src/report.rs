//! Writing the report:
//!
//! ```text
//! Resultado: 03 07 15 22 40
//!
//! Aposta 1: 2 acertos
//! Aposta 2: 1 acerto
//! ```
use anyhow::Result;
use std::io;

use crate::load::Bet;
use crate::numbers::NumberSet;

/// The numbers of `set` in ascending order, each at least two digits wide,
/// separated by single spaces
#[must_use]
pub fn format_numbers(set: &NumberSet) -> String {
    set.sorted().iter().map(|n| format!("{n:02}")).collect::<Vec<_>>().join(" ")
}

/// "1 acerto", but "0 acertos", "2 acertos" and so on
#[must_use]
pub fn format_matches(count: usize) -> String {
    if count == 1 {
        "1 acerto".to_string()
    } else {
        format!("{count} acertos")
    }
}

/// Writes the result header, a blank line, and one line per bet. Bets are
/// numbered from 1 in the order given, regardless of their line in the file.
/// `counts[i]` is the match count of `bets[i]`.
pub fn write_report(
    mut out: impl io::Write,
    bets: &[Bet],
    result: &NumberSet,
    counts: &[usize],
) -> Result<()> {
    debug_assert_eq!(bets.len(), counts.len());
    writeln!(out, "Resultado: {}", format_numbers(result))?;
    writeln!(out)?;
    for (index, &count) in counts.iter().enumerate() {
        writeln!(out, "Aposta {}: {}", index + 1, format_matches(count))?;
    }
    out.flush()?;
    Ok(())
}
