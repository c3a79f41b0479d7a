//! Day 7: The Treachery of Whales.

use cairn_arena::Arena;

use crate::common;
use crate::error::PuzzleError;
use crate::puzzle::{Answers, Day, Puzzle};

const DAY: Day = Day(7);

/// Finds the cheapest alignment point for the crab submarines.
#[derive(Debug, Default)]
pub struct TreacheryOfWhales;

/// Cheapest total fuel over every candidate target in `min..=max`.
///
/// `None` when some distance, cost or total leaves the `i64` range.
fn cheapest(positions: &[i64], cost: impl Fn(i64) -> Option<i64>) -> Option<i64> {
    let min = positions.iter().copied().min().unwrap_or(0);
    let max = positions.iter().copied().max().unwrap_or(0);
    let mut best: Option<i64> = None;
    for target in min..=max {
        let mut total = 0i64;
        for &p in positions {
            let distance = p.checked_sub(target)?.checked_abs()?;
            total = total.checked_add(cost(distance)?)?;
        }
        best = Some(best.map_or(total, |b| b.min(total)));
    }
    Some(best.unwrap_or(0))
}

fn triangular(distance: i64) -> Option<i64> {
    distance.checked_mul(distance.checked_add(1)?).map(|n| n / 2)
}

impl Puzzle for TreacheryOfWhales {
    fn day(&self) -> Day {
        DAY
    }

    fn title(&self) -> &str {
        "The Treachery of Whales"
    }

    fn solve(&self, arena: &Arena, input: &str) -> Result<Answers, PuzzleError> {
        let positions = common::numbers(arena, input.trim(), ",")?;
        if positions.is_empty() {
            return Err(PuzzleError::malformed(DAY, "no crab positions"));
        }

        let overflow = || PuzzleError::malformed(DAY, "fuel total overflows i64");
        let linear = cheapest(positions, Some).ok_or_else(overflow)?;
        let triangular = cheapest(positions, triangular).ok_or_else(overflow)?;
        Ok(Answers::new(linear, triangular))
    }
}
