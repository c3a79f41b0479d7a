//! The [`Puzzle`] trait, the [`Day`] identifier, and [`Answers`].

use std::fmt;
use std::path::{Path, PathBuf};

use cairn_arena::Arena;

use crate::error::PuzzleError;

/// Identifies a puzzle by its calendar day.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Day(pub u8);

impl Day {
    /// Directory name holding this day's input, e.g. `day004`.
    pub fn directory_name(&self) -> String {
        format!("day{:03}", self.0)
    }

    /// Conventional input location below `root`: `<root>/dayNNN/input.txt`.
    pub fn input_path(&self, root: &Path) -> PathBuf {
        root.join(self.directory_name()).join("input.txt")
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u8> for Day {
    fn from(v: u8) -> Self {
        Self(v)
    }
}

/// The two numbers every puzzle produces.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Answers {
    /// Answer to the first part.
    pub part_one: i64,
    /// Answer to the second part.
    pub part_two: i64,
}

impl Answers {
    /// Pair up the two answers.
    pub fn new(part_one: i64, part_two: i64) -> Self {
        Self { part_one, part_two }
    }
}

impl fmt::Display for Answers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "part one: {}, part two: {}", self.part_one, self.part_two)
    }
}

/// A single day's solver.
///
/// # Contract
///
/// - `solve()` is deterministic and allocates every intermediate structure
///   from the supplied arena; nothing it builds outlives the call.
/// - `&self`: solvers are stateless.
///
/// # Object safety
///
/// This trait is object-safe; the registry stores solvers as
/// `Box<dyn Puzzle>`.
///
/// # Examples
///
/// ```
/// use cairn_arena::Arena;
/// use cairn_puzzles::{Answers, Day, Puzzle, PuzzleError};
///
/// struct LineCount;
///
/// impl Puzzle for LineCount {
///     fn day(&self) -> Day { Day(99) }
///     fn title(&self) -> &str { "Line Count" }
///     fn solve(&self, _arena: &Arena, input: &str) -> Result<Answers, PuzzleError> {
///         let lines = input.lines().count() as i64;
///         Ok(Answers::new(lines, lines * 2))
///     }
/// }
///
/// let arena = Arena::new(64).unwrap();
/// assert_eq!(LineCount.solve(&arena, "a\nb\n").unwrap(), Answers::new(2, 4));
/// ```
pub trait Puzzle {
    /// Calendar day this solver answers.
    fn day(&self) -> Day;

    /// Human-readable puzzle title.
    fn title(&self) -> &str;

    /// Parse `input` and compute both answers.
    fn solve(&self, arena: &Arena, input: &str) -> Result<Answers, PuzzleError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn day_paths_are_zero_padded() {
        assert_eq!(Day(4).directory_name(), "day004");
        assert_eq!(
            Day(12).input_path(Path::new("inputs")),
            Path::new("inputs").join("day012").join("input.txt")
        );
    }

    #[test]
    fn answers_display() {
        assert_eq!(
            Answers::new(150, 900).to_string(),
            "part one: 150, part two: 900"
        );
    }
}
