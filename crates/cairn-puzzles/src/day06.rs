//! Day 6: Lanternfish.

use cairn_arena::Arena;

use crate::common;
use crate::error::PuzzleError;
use crate::puzzle::{Answers, Day, Puzzle};

const DAY: Day = Day(6);
/// Timers run 0..=8: a newborn starts at 8, a parent restarts at 6.
const TIMERS: usize = 9;
const RESTART: usize = 6;

/// Simulates a lanternfish school by population per timer value.
#[derive(Debug, Default)]
pub struct Lanternfish;

/// Advance the per-timer population by `days`.
fn simulate(school: &mut [i64], days: usize) {
    for _ in 0..days {
        school.rotate_left(1);
        // The fish that were at 0 are now at 8 as newborns; their parents
        // rejoin at 6.
        school[RESTART] += school[TIMERS - 1];
    }
}

impl Puzzle for Lanternfish {
    fn day(&self) -> Day {
        DAY
    }

    fn title(&self) -> &str {
        "Lanternfish"
    }

    fn solve(&self, arena: &Arena, input: &str) -> Result<Answers, PuzzleError> {
        let timers = common::numbers(arena, input.trim(), ",")?;
        let school = arena.alloc_slice_fill_copy(TIMERS, 0i64)?;
        for &timer in timers.iter() {
            let slot = usize::try_from(timer)
                .ok()
                .filter(|&t| t < TIMERS)
                .ok_or_else(|| PuzzleError::malformed(DAY, format!("timer {timer} outside 0..=8")))?;
            school[slot] += 1;
        }

        simulate(school, 80);
        let part_one = school.iter().sum();
        simulate(school, 256 - 80);
        Ok(Answers::new(part_one, school.iter().sum()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cairn_test_utils::samples::DAY06;

    #[test]
    fn sample_answers() {
        let arena = Arena::new(1024).unwrap();
        let answers = Lanternfish.solve(&arena, DAY06.input).unwrap();
        assert_eq!(answers, Answers::new(DAY06.part_one, DAY06.part_two));
    }

    #[test]
    fn eighteen_days_of_the_sample() {
        // 3,4,3,1,2 grows to 26 fish after 18 days.
        let mut school = [0i64; TIMERS];
        for t in [3, 4, 3, 1, 2] {
            school[t] += 1;
        }
        simulate(&mut school, 18);
        assert_eq!(school.iter().sum::<i64>(), 26);
    }

    #[test]
    fn timer_out_of_range_is_malformed() {
        let arena = Arena::new(1024).unwrap();
        let err = Lanternfish.solve(&arena, "3,9\n").unwrap_err();
        assert!(matches!(err, PuzzleError::Malformed { .. }));
    }
}
