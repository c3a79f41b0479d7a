//! Fixed-capacity memory regions with bump allocation.
//!
//! A [`Region`] is one contiguous block obtained from the system allocator
//! with an offset that advances on each allocation. Regions never grow and
//! never move; the arena chains new regions instead.

#![allow(unsafe_code)]

use std::cell::Cell;
use std::ptr::NonNull;

use crate::error::ArenaError;
use crate::raw;

/// A single contiguous block with bump allocation.
///
/// The offset lives in a `Cell` so allocation works through a shared
/// reference; the arena relies on this to hand out `&'a mut` slices from
/// `&'a Arena`. Regions are only freed when dropped.
pub(crate) struct Region {
    /// Base of the block. Aligned to [`raw::REGION_ALIGN`].
    base: NonNull<u8>,
    capacity: usize,
    /// Next free byte index: `0 <= offset <= capacity`.
    offset: Cell<usize>,
}

impl Region {
    /// Reserve a region of exactly `capacity` bytes.
    pub(crate) fn new(capacity: usize) -> Result<Self, ArenaError> {
        if capacity == 0 {
            return Err(ArenaError::invalid("region capacity must be non-zero"));
        }
        let base = raw::alloc_block(capacity).ok_or(ArenaError::OutOfMemory {
            requested: capacity,
        })?;
        Ok(Self {
            base,
            capacity,
            offset: Cell::new(0),
        })
    }

    /// Bump-allocate `size` bytes whose start is a multiple of `align`.
    ///
    /// Returns `None` if the remaining space cannot hold the padding plus
    /// `size` bytes. `align` must be a power of two.
    pub(crate) fn bump(&self, size: usize, align: usize) -> Option<NonNull<u8>> {
        debug_assert!(align.is_power_of_two());
        let offset = self.offset.get();
        let addr = (self.base.as_ptr() as usize).checked_add(offset)?;
        let padding = addr.wrapping_neg() & (align - 1);
        let start = offset.checked_add(padding)?;
        let end = start.checked_add(size)?;
        if end > self.capacity {
            return None;
        }
        self.offset.set(end);
        // SAFETY: `start <= end <= capacity`, so the result stays within the
        // block (or one past its end for a zero-sized tail).
        Some(unsafe { self.base.add(start) })
    }

    /// Rewind the offset to zero. Contents are left as they are.
    pub(crate) fn reset(&self) {
        self.offset.set(0);
    }

    pub(crate) fn used(&self) -> usize {
        self.offset.get()
    }

    pub(crate) fn capacity(&self) -> usize {
        self.capacity
    }

    /// Whether `ptr` points into this region's block.
    pub(crate) fn contains(&self, ptr: *const u8) -> bool {
        let start = self.base.as_ptr() as usize;
        let addr = ptr as usize;
        addr >= start && addr - start < self.capacity
    }

    pub(crate) fn usage(&self) -> RegionUsage {
        RegionUsage {
            capacity: self.capacity,
            used: self.used(),
        }
    }
}

impl Drop for Region {
    fn drop(&mut self) {
        // SAFETY: `base` came from `alloc_block(self.capacity)` in `new` and
        // is freed exactly once, here.
        unsafe { raw::free_block(self.base, self.capacity) };
    }
}

/// Point-in-time view of one region's occupancy.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RegionUsage {
    /// Size of the region's block in bytes.
    pub capacity: usize,
    /// Bytes consumed by allocations (including alignment padding).
    pub used: usize,
}

impl RegionUsage {
    /// Bytes still free at the end of the region.
    pub fn remaining(&self) -> usize {
        self.capacity - self.used
    }
}
