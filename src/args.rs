//! Code to parse the command line using `clap`, and definitions of the parsed
//! result

use anyhow::Result;
use clap::{ArgAction, Parser};
use std::ffi::OsString;
use std::path::PathBuf;

use crate::help;

/// Exit code for a command line we can't use
pub const USAGE_EXIT_CODE: i32 = 2;

/// Returns the parsed command line: the paths of the bets file and of the
/// result file. Asking for help prints it and exits with status 0; a missing
/// or blank path prints the usage and exits with status 2, as do the
/// arguments `clap` itself rejects.
pub fn parsed() -> Result<Args> {
    let parsed = CliArgs::parse();
    if parsed.help {
        help::print()?;
        std::process::exit(0);
    }
    if let Some(args) = parsed.into_args() {
        return Ok(args);
    }
    help::print_usage_error("you need to give both --apostas and --resultado.")?;
    std::process::exit(USAGE_EXIT_CODE);
}

/// The two input files
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Args {
    /// `bets` is the file holding one bet per line
    pub bets: PathBuf,
    /// `result` is the file holding the official draw
    pub result: PathBuf,
}

#[derive(Debug, Parser)]
#[command(name = "conferir", version, disable_help_flag = true)]
/// `CliArgs` contains the parsed command line.
struct CliArgs {
    #[arg(long = "apostas", visible_alias = "bets", value_name = "FILE")]
    /// File with the bets, one bet per line
    apostas: Option<OsString>,
    #[arg(long = "resultado", visible_alias = "result", value_name = "FILE")]
    /// File with the official draw result, in a single line
    resultado: Option<OsString>,
    #[arg(short, long, action = ArgAction::SetTrue)]
    /// Print help
    help: bool,
}

impl CliArgs {
    /// `None` unless both paths are present and not blank
    fn into_args(self) -> Option<Args> {
        fn path(value: Option<OsString>) -> Option<PathBuf> {
            let value = value?;
            if value.to_string_lossy().trim().is_empty() {
                return None;
            }
            Some(PathBuf::from(value))
        }
        Some(Args { bets: path(self.apostas)?, result: path(self.resultado)? })
    }
}
