//! Day-ordered collection of puzzle solvers.

use std::fmt;

use cairn_arena::Arena;
use indexmap::IndexMap;

use crate::error::PuzzleError;
use crate::puzzle::{Answers, Day, Puzzle};
use crate::{
    BinaryDiagnostic, Dive, GiantSquid, HydrothermalVenture, Lanternfish, SonarSweep,
    TreacheryOfWhales,
};

/// Solvers keyed by [`Day`], iterated in ascending day order.
pub struct PuzzleRegistry {
    puzzles: IndexMap<Day, Box<dyn Puzzle>>,
}

impl PuzzleRegistry {
    /// An empty registry.
    pub fn new() -> Self {
        Self {
            puzzles: IndexMap::new(),
        }
    }

    /// A registry holding every built-in solver.
    pub fn with_all() -> Self {
        let mut registry = Self::new();
        let all: [Box<dyn Puzzle>; 7] = [
            Box::new(SonarSweep),
            Box::new(Dive),
            Box::new(BinaryDiagnostic),
            Box::new(GiantSquid),
            Box::new(HydrothermalVenture),
            Box::new(Lanternfish),
            Box::new(TreacheryOfWhales),
        ];
        for puzzle in all {
            registry.register(puzzle);
        }
        registry
    }

    /// Add `puzzle`, returning the solver it displaced for the same day.
    pub fn register(&mut self, puzzle: Box<dyn Puzzle>) -> Option<Box<dyn Puzzle>> {
        let previous = self.puzzles.insert(puzzle.day(), puzzle);
        self.puzzles.sort_keys();
        previous
    }

    /// The solver for `day`, if registered.
    pub fn get(&self, day: Day) -> Option<&dyn Puzzle> {
        self.puzzles.get(&day).map(|p| p.as_ref())
    }

    /// Solve `day` against `input`, allocating from `arena`.
    pub fn solve(&self, day: Day, arena: &Arena, input: &str) -> Result<Answers, PuzzleError> {
        let puzzle = self.get(day).ok_or(PuzzleError::UnknownDay(day))?;
        let answers = puzzle.solve(arena, input)?;
        tracing::debug!(
            day = day.0,
            title = puzzle.title(),
            part_one = answers.part_one,
            part_two = answers.part_two,
            "solved"
        );
        Ok(answers)
    }

    /// Registered solvers in ascending day order.
    pub fn iter(&self) -> impl Iterator<Item = &dyn Puzzle> + '_ {
        self.puzzles.values().map(|p| p.as_ref())
    }

    /// Registered days in ascending order.
    pub fn days(&self) -> impl Iterator<Item = Day> + '_ {
        self.puzzles.keys().copied()
    }

    /// Number of registered solvers.
    pub fn len(&self) -> usize {
        self.puzzles.len()
    }

    /// Whether no solver is registered.
    pub fn is_empty(&self) -> bool {
        self.puzzles.is_empty()
    }
}

impl Default for PuzzleRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for PuzzleRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.puzzles.iter().map(|(day, p)| (day, p.title())))
            .finish()
    }
}
