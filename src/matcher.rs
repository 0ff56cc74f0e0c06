//! Counting hits.
use crate::load::Bet;
use crate::numbers::NumberSet;

/// The number of elements of `bet` that are also in `result`
#[must_use]
pub fn match_count(bet: &NumberSet, result: &NumberSet) -> usize {
    bet.iter().filter(|&n| result.contains(n)).count()
}

/// One match count per bet, in the order of `bets`
#[must_use]
pub fn compare_all(bets: &[Bet], result: &NumberSet) -> Vec<usize> {
    bets.iter().map(|bet| match_count(&bet.numbers, result)).collect()
}
