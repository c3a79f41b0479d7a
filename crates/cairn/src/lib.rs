//! Cairn: a chained-region arena allocator and the puzzle solvers built on it.
//!
//! This is the top-level facade crate that re-exports the public API from
//! the cairn sub-crates. It also ships the `cairn` binary, which reads each
//! day's input into one arena, solves it, and resets the arena before the
//! next day.
//!
//! # Quick start
//!
//! ```rust
//! use cairn::prelude::*;
//!
//! let mut arena = Arena::new(1024).unwrap();
//! let registry = PuzzleRegistry::with_all();
//!
//! let answers = registry.solve(Day(7), &arena, "16,1,2,0,4,2,7,1,2,14\n").unwrap();
//! assert_eq!(answers, Answers::new(37, 168));
//!
//! // Every allocation the solver made is reclaimed at once.
//! arena.reset();
//! assert_eq!(arena.used_bytes(), 0);
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`arena`] | `cairn-arena` | `Arena`, `ArenaVec`, `ArenaConfig`, `ArenaError` |
//! | [`input`] | `cairn-input` | File reading, delimiter splitting, integer parsing |
//! | [`puzzles`] | `cairn-puzzles` | `Puzzle` trait, registry, days 1 to 7 |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Chained-region arena and arena-backed vectors (`cairn-arena`).
pub use cairn_arena as arena;

/// Arena-backed input helpers (`cairn-input`).
///
/// [`input::read_input`] loads a whole file, [`input::split_str`] tokenises
/// it, and [`input::parse_int`] turns tokens into numbers.
pub use cairn_input as input;

/// Puzzle solvers and their registry (`cairn-puzzles`).
pub use cairn_puzzles as puzzles;

/// Common imports for typical cairn usage.
///
/// ```rust
/// use cairn::prelude::*;
/// ```
pub mod prelude {
    // Arena
    pub use cairn_arena::{Arena, ArenaConfig, ArenaError, ArenaVec};

    // Input
    pub use cairn_input::{parse_int, read_input, split_str, InputError};

    // Puzzles
    pub use cairn_puzzles::{Answers, Day, Puzzle, PuzzleError, PuzzleRegistry};
}
