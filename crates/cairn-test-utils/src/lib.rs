//! Test utilities for cairn development.
//!
//! Provides the worked example input for every puzzle day together with
//! its known answers ([`samples`]), and [`InputDir`] for laying those
//! inputs out on disk the way the `cairn` binary expects them.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod samples;

use std::fs;
use std::path::{Path, PathBuf};

pub use samples::Sample;

/// A temporary directory holding `dayNNN/input.txt` files.
///
/// Removed from disk when dropped.
pub struct InputDir {
    dir: tempfile::TempDir,
}

impl InputDir {
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().expect("failed to create temp input dir"),
        }
    }

    /// Directory containing every sample input.
    pub fn with_all_samples() -> Self {
        let dir = Self::new();
        for sample in samples::ALL {
            dir.write(sample.day, sample.input);
        }
        dir
    }

    /// Write `contents` as the input for `day`, returning the file path.
    pub fn write(&self, day: u8, contents: &str) -> PathBuf {
        let day_dir = self.dir.path().join(format!("day{day:03}"));
        fs::create_dir_all(&day_dir).expect("failed to create day directory");
        let path = day_dir.join("input.txt");
        fs::write(&path, contents).expect("failed to write input file");
        path
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }
}

impl Default for InputDir {
    fn default() -> Self {
        Self::new()
    }
}
