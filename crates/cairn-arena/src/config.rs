//! Arena configuration parameters.

use crate::error::ArenaError;

/// Configuration for the arena allocator.
///
/// Controls the size of the first region and an optional ceiling on the
/// total bytes the arena may reserve across all regions. Validated when
/// the arena is created; immutable afterwards.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ArenaConfig {
    /// Capacity of the head region in bytes.
    ///
    /// Default: 1024. Must be non-zero.
    pub initial_capacity: usize,

    /// Upper bound on the sum of all region capacities, in bytes.
    ///
    /// `None` means growth is bounded only by the system allocator. When
    /// set, a growth step that would push the total past the limit fails
    /// with [`ArenaError::OutOfMemory`].
    pub byte_limit: Option<usize>,
}

impl ArenaConfig {
    /// Default head region capacity in bytes.
    pub const DEFAULT_INITIAL_CAPACITY: usize = 1024;

    /// Create a config with the given head region capacity and no limit.
    pub fn new(initial_capacity: usize) -> Self {
        Self {
            initial_capacity,
            byte_limit: None,
        }
    }

    /// Cap the total bytes the arena may reserve.
    pub fn with_byte_limit(mut self, limit: usize) -> Self {
        self.byte_limit = Some(limit);
        self
    }

    /// Check the config for contract violations.
    pub fn validate(&self) -> Result<(), ArenaError> {
        if self.initial_capacity == 0 {
            return Err(ArenaError::invalid("initial capacity must be non-zero"));
        }
        if let Some(limit) = self.byte_limit {
            if limit < self.initial_capacity {
                return Err(ArenaError::OutOfMemory {
                    requested: self.initial_capacity,
                });
            }
        }
        Ok(())
    }
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self::new(Self::DEFAULT_INITIAL_CAPACITY)
    }
}
