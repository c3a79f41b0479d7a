//! Run configuration assembled from command-line flags.

use std::path::PathBuf;

use cairn::prelude::{ArenaConfig, Day};

/// Where inputs live and how the shared arena is sized.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct RunConfig {
    /// Root holding one `dayNNN/input.txt` per puzzle.
    pub input_dir: PathBuf,
    /// Size of the arena's first region in bytes.
    pub arena_capacity: usize,
}

impl RunConfig {
    pub(crate) fn new(input_dir: impl Into<PathBuf>, arena_capacity: usize) -> Self {
        Self {
            input_dir: input_dir.into(),
            arena_capacity,
        }
    }

    /// Conventional input location for `day`.
    pub(crate) fn input_path(&self, day: Day) -> PathBuf {
        day.input_path(&self.input_dir)
    }

    pub(crate) fn arena_config(&self) -> ArenaConfig {
        ArenaConfig::new(self.arena_capacity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn inputs_live_in_day_directories() {
        let config = RunConfig::new(".", ArenaConfig::DEFAULT_INITIAL_CAPACITY);
        assert_eq!(config.input_path(Day(1)), Path::new(".").join("day001").join("input.txt"));
        assert_eq!(config.arena_capacity, 1024);
    }

    #[test]
    fn arena_config_carries_capacity() {
        let config = RunConfig::new("inputs", 64);
        assert_eq!(config.arena_config(), ArenaConfig::new(64));
    }
}
