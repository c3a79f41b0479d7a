//! Arena-backed puzzle solvers for cairn.
//!
//! Each solver implements [`Puzzle`]: it parses one day's text input into
//! structures carved from a caller-supplied [`Arena`] and returns two
//! [`Answers`]. The [`PuzzleRegistry`] keeps the solvers in day order so a
//! driver can run any one of them or all of them with a single arena,
//! resetting it in between.
//!
//! Solvers never take the process down: allocation failures, including a
//! configured byte limit being reached, surface as [`PuzzleError::Arena`].
//!
//! [`Arena`]: cairn_arena::Arena

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

mod common;
pub mod error;
pub mod puzzle;
pub mod registry;

pub mod day01;
pub mod day02;
pub mod day03;
pub mod day04;
pub mod day05;
pub mod day06;
pub mod day07;

pub use day01::SonarSweep;
pub use day02::Dive;
pub use day03::BinaryDiagnostic;
pub use day04::GiantSquid;
pub use day05::HydrothermalVenture;
pub use day06::Lanternfish;
pub use day07::TreacheryOfWhales;
pub use error::PuzzleError;
pub use puzzle::{Answers, Day, Puzzle};
pub use registry::PuzzleRegistry;
