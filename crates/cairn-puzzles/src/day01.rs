//! Day 1: Sonar Sweep.

use cairn_arena::Arena;

use crate::common;
use crate::error::PuzzleError;
use crate::puzzle::{Answers, Day, Puzzle};

/// Counts depth increases, singly and over three-reading windows.
#[derive(Debug, Default)]
pub struct SonarSweep;

/// Readings `gap` apart where the later one is deeper.
///
/// Comparing `x[i + 3] > x[i]` is the same as comparing consecutive
/// three-reading sums, since the middle two terms cancel.
fn increases(depths: &[i64], gap: usize) -> i64 {
    depths.windows(gap + 1).filter(|w| w[gap] > w[0]).count() as i64
}

impl Puzzle for SonarSweep {
    fn day(&self) -> Day {
        Day(1)
    }

    fn title(&self) -> &str {
        "Sonar Sweep"
    }

    fn solve(&self, arena: &Arena, input: &str) -> Result<Answers, PuzzleError> {
        let depths = common::numbers(arena, input, "\n")?;
        Ok(Answers::new(increases(depths, 1), increases(depths, 3)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cairn_test_utils::samples::DAY01;

    #[test]
    fn sample_answers() {
        let arena = Arena::new(1024).unwrap();
        let answers = SonarSweep.solve(&arena, DAY01.input).unwrap();
        assert_eq!(answers, Answers::new(DAY01.part_one, DAY01.part_two));
    }

    #[test]
    fn too_few_readings_count_nothing() {
        let arena = Arena::new(1024).unwrap();
        let answers = SonarSweep.solve(&arena, "5\n6\n").unwrap();
        assert_eq!(answers, Answers::new(1, 0));
    }

    #[test]
    fn non_numeric_line_is_rejected() {
        let arena = Arena::new(1024).unwrap();
        assert!(SonarSweep.solve(&arena, "1\nabc\n").is_err());
    }
}
