//! Loading bets and the draw result from readers.
use std::io::{self, BufRead};
use thiserror::Error;

use crate::lines::{SourceLine, SourceLines};
use crate::numbers::{NumberSet, ParseError, ValidationError};

/// One bet: a line of the bets file that parsed and validated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bet {
    /// 1-based position of the line in its file
    pub line_number: usize,
    /// The line as written
    pub raw: String,
    /// The numbers bet on
    pub numbers: NumberSet,
}

/// Why a single line was rejected
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LineError {
    /// The line didn't split into integers
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// The integers broke a rule
    #[error(transparent)]
    Invalid(#[from] ValidationError),
}

/// Everything that can go wrong while loading bets or a result
#[derive(Error, Debug)]
pub enum LoadError {
    /// Reading failed partway through
    #[error("read failed")]
    Io(#[from] io::Error),
    /// A data line couldn't be used
    #[error("line {line} is invalid (content: {raw:?})")]
    InvalidLine {
        /// 1-based line number
        line: usize,
        /// The line as written
        raw: String,
        /// What was wrong with it
        #[source]
        reason: LineError,
    },
    /// The bets file has nothing but blank and comment lines
    #[error("the bets file holds no bets (blank lines and comments don't count)")]
    NoBetsFound,
    /// The result file has nothing but blank and comment lines
    #[error("the result file holds no numbers (blank lines and comments don't count)")]
    NoResultFound,
    /// The result file has more than one data line
    #[error("the result file has {0} data lines; expected exactly 1")]
    TooManyResultLines(usize),
}

/// Parse and validate one data line, blaming the line on failure
fn numbers_of(line: &SourceLine) -> Result<NumberSet, LoadError> {
    NumberSet::try_from(line.trimmed()).map_err(|reason| LoadError::InvalidLine {
        line: line.number,
        raw: line.raw.clone(),
        reason,
    })
}

/// Reads one bet per data line of `reader`, in file order. The first bad line
/// aborts the load. An empty `Vec` is a valid return; see `require_bets`.
pub fn load_bets(reader: impl BufRead) -> Result<Vec<Bet>, LoadError> {
    let mut bets = Vec::new();
    for line in SourceLines::new(reader) {
        let line = line?;
        let numbers = numbers_of(&line)?;
        bets.push(Bet { line_number: line.number, raw: line.raw, numbers });
    }
    Ok(bets)
}

/// Fails with `LoadError::NoBetsFound` unless there is at least one bet
pub fn require_bets(bets: Vec<Bet>) -> Result<Vec<Bet>, LoadError> {
    if bets.is_empty() {
        return Err(LoadError::NoBetsFound);
    }
    Ok(bets)
}

/// Reads the draw result: `reader` must hold exactly one data line. Data lines
/// are counted before any of them is parsed.
pub fn load_result(reader: impl BufRead) -> Result<NumberSet, LoadError> {
    let mut lines = SourceLines::new(reader).collect::<io::Result<Vec<_>>>()?;
    match lines.len() {
        0 => Err(LoadError::NoResultFound),
        1 => numbers_of(&lines.remove(0)),
        n => Err(LoadError::TooManyResultLines(n)),
    }
}

#[allow(clippy::pedantic)]
#[cfg(test)]
mod test {
    use super::*;
    use indoc::indoc;

    fn bets_of(text: &str) -> Result<Vec<Bet>, LoadError> {
        load_bets(text.as_bytes())
    }

    #[test]
    fn bets_come_back_in_file_order_with_file_line_numbers() {
        let bets = bets_of(indoc! {"
            1 2 3
            # comment

            4, 5; 6
        "})
        .unwrap();
        assert_eq!(bets.len(), 2);
        assert_eq!((bets[0].line_number, bets[0].raw.as_str()), (1, "1 2 3"));
        assert_eq!((bets[1].line_number, bets[1].raw.as_str()), (4, "4, 5; 6"));
        assert_eq!(bets[1].numbers.sorted(), vec![4, 5, 6]);
    }

    #[test]
    fn a_bad_bet_names_its_line_and_content() {
        let err = bets_of("1 2 3\n\n1 1 2\n4 5 6\n").unwrap_err();
        match &err {
            LoadError::InvalidLine { line, raw, reason } => {
                assert_eq!(*line, 3);
                assert_eq!(raw, "1 1 2");
                assert_eq!(*reason, LineError::Invalid(ValidationError::Duplicate(1)));
            }
            other => panic!("unexpected error {other:?}"),
        }
        assert_eq!(err.to_string(), r#"line 3 is invalid (content: "1 1 2")"#);
    }

    #[test]
    fn the_reason_for_a_bad_line_is_its_source() {
        use std::error::Error;
        let err = bets_of("5 x").unwrap_err();
        let reason = err.source().expect("a reason");
        assert_eq!(reason.to_string(), r#"number "x" is not a valid integer"#);
        assert_eq!(
            reason.downcast_ref::<LineError>(),
            Some(&LineError::Parse(ParseError::NotAnInteger("x".to_string())))
        );
    }

    #[test]
    fn each_kind_of_bad_line_is_reported() {
        let cases = [
            ("7 x 9", LineError::Parse(ParseError::NotAnInteger("x".to_string()))),
            (" , ; ", LineError::Parse(ParseError::NoNumbersFound)),
            ("0 1 2", LineError::Invalid(ValidationError::NonPositive(0))),
            ("3 -1", LineError::Invalid(ValidationError::NonPositive(-1))),
        ];
        for (text, expected) in cases {
            match bets_of(text) {
                Err(LoadError::InvalidLine { line: 1, reason, .. }) => {
                    assert_eq!(reason, expected, "for {text:?}")
                }
                other => panic!("unexpected {other:?} for {text:?}"),
            }
        }
    }

    #[test]
    fn comment_only_bets_load_empty_and_are_then_refused() {
        let bets = bets_of("# nothing\n\n   \n").unwrap();
        assert!(bets.is_empty());
        assert!(matches!(require_bets(bets), Err(LoadError::NoBetsFound)));
    }

    #[test]
    fn the_result_is_the_only_data_line() {
        let result = load_result("# official\n\n3 5 9\n".as_bytes()).unwrap();
        assert_eq!(result.iter().collect::<Vec<_>>(), vec![3, 5, 9]);
    }

    #[test]
    fn the_result_needs_exactly_one_data_line() {
        assert!(matches!(load_result("# none\n".as_bytes()), Err(LoadError::NoResultFound)));
        assert!(matches!(load_result("".as_bytes()), Err(LoadError::NoResultFound)));
        assert!(matches!(
            load_result("1 2\n# x\n3 4\nnot numbers\n".as_bytes()),
            Err(LoadError::TooManyResultLines(3))
        ));
    }

    #[test]
    fn a_bad_result_line_is_reported_like_a_bad_bet() {
        match load_result("# header\n5 5\n".as_bytes()) {
            Err(LoadError::InvalidLine { line: 2, reason, .. }) => {
                assert_eq!(reason, LineError::Invalid(ValidationError::Duplicate(5)))
            }
            other => panic!("unexpected {other:?}"),
        }
    }
}
