//! Turning a line of text into a list of numbers, and checking that list.
//!
//! `parse_numbers` only splits and parses; `validate` (or `NumberSet::try_from_numbers`)
//! is the gate that rejects non-positive and repeated numbers.
use fxhash::FxBuildHasher;
use indexmap::IndexSet;
use thiserror::Error;

/// Problems found while splitting a line into integers
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// A token between delimiters isn't a base-10 integer
    #[error("number {0:?} is not a valid integer")]
    NotAnInteger(String),
    /// The line held only delimiters
    #[error("no numbers found")]
    NoNumbersFound,
}

/// Problems found in a list of integers that did parse
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    /// Bets and results hold positive numbers only
    #[error("number {0} is invalid (expected > 0)")]
    NonPositive(i64),
    /// A number occurs twice in the same line
    #[error("number {0} is repeated")]
    Duplicate(i64),
}

fn is_delimiter(c: char) -> bool {
    matches!(c, ' ' | '\t' | ',' | ';')
}

/// Splits `line` on runs of spaces, tabs, commas and semicolons and parses
/// each token as an `i64`. An all-delimiter line gives an empty `Vec`; callers
/// decide whether that is an error.
pub fn parse_numbers(line: &str) -> Result<Vec<i64>, ParseError> {
    line.split(is_delimiter)
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(|token| token.parse::<i64>().map_err(|_| ParseError::NotAnInteger(token.to_owned())))
        .collect()
}

/// Like `parse_numbers`, but a line without numbers is `ParseError::NoNumbersFound`.
pub fn parse_some_numbers(line: &str) -> Result<Vec<i64>, ParseError> {
    let numbers = parse_numbers(line)?;
    if numbers.is_empty() {
        return Err(ParseError::NoNumbersFound);
    }
    Ok(numbers)
}

/// Checks that every number is positive and that none repeats, reporting the
/// first offender. For each number the sign check comes before the repeat check.
pub fn validate(numbers: &[i64]) -> Result<(), ValidationError> {
    NumberSet::try_from_numbers(numbers).map(|_| ())
}

/// A `NumberSet` is the validated content of one line: positive, distinct
/// numbers, kept in the order they were written. Membership tests are what the
/// matcher needs; the order is only there for echoing the input back.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NumberSet {
    set: IndexSet<i64, FxBuildHasher>,
}

impl NumberSet {
    /// Builds the set, failing on the first non-positive or repeated number
    pub fn try_from_numbers(numbers: &[i64]) -> Result<Self, ValidationError> {
        let mut set = IndexSet::with_capacity_and_hasher(numbers.len(), FxBuildHasher::default());
        for &n in numbers {
            if n <= 0 {
                return Err(ValidationError::NonPositive(n));
            }
            if !set.insert(n) {
                return Err(ValidationError::Duplicate(n));
            }
        }
        Ok(NumberSet { set })
    }

    /// Is `n` in the set?
    #[must_use]
    pub fn contains(&self, n: i64) -> bool {
        self.set.contains(&n)
    }

    /// The number of elements
    #[must_use]
    pub fn len(&self) -> usize {
        self.set.len()
    }

    /// Only a `NumberSet::default()` is empty; loaded records never are
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.set.is_empty()
    }

    /// The numbers in input order
    pub fn iter(&self) -> impl Iterator<Item = i64> + '_ {
        self.set.iter().copied()
    }

    /// The numbers in ascending order
    #[must_use]
    pub fn sorted(&self) -> Vec<i64> {
        let mut numbers: Vec<i64> = self.iter().collect();
        numbers.sort_unstable();
        numbers
    }
}

impl TryFrom<&str> for NumberSet {
    type Error = crate::load::LineError;

    /// Parse and validate a single line
    fn try_from(line: &str) -> Result<Self, Self::Error> {
        let numbers = parse_some_numbers(line)?;
        Ok(NumberSet::try_from_numbers(&numbers)?)
    }
}
