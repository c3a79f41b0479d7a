//! Chained-region bump allocation for cairn puzzle solvers.
//!
//! Provides an arena that serves byte and typed allocations from a chain of
//! fixed-capacity regions, plus a growable array whose storage lives in the
//! arena. Nothing is freed individually; memory comes back only when the
//! whole arena is reset or destroyed.
//!
//! # Architecture
//!
//! ```text
//! Arena (owner)
//! ├── Region × N (fixed capacity, bump offset, never moves)
//! │   ├── head sized by ArenaConfig, each later one ≥ 2× its predecessor
//! │   └── only the tail accepts allocations, also after a reset
//! └── ArenaVec<'a, T> (borrows the arena; grows by realloc-and-copy)
//! ```
//!
//! # Failure layers
//!
//! - **Recoverable:** [`Arena::new`], [`Arena::alloc`], [`Arena::realloc`] and
//!   the `try_*` methods of [`ArenaVec`] return [`ArenaError`].
//! - **Fatal:** [`ArenaVec::new_in`], [`ArenaVec::push`] and their siblings
//!   exit the process when the arena cannot grow.
//!
//! # Safety
//!
//! `unsafe` is denied crate-wide and re-allowed only in `raw`, `region`,
//! `arena` and `vec`, where raw region memory is turned into references.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(unsafe_code)]

pub mod arena;
pub mod config;
pub mod error;
mod raw;
mod region;
pub mod vec;

// Public re-exports for the primary API surface.
pub use arena::Arena;
pub use config::ArenaConfig;
pub use error::ArenaError;
pub use region::RegionUsage;
pub use vec::ArenaVec;
