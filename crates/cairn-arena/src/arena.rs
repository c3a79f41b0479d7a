//! The chained-region arena.
//!
//! An [`Arena`] owns an ordered chain of fixed-capacity regions and serves
//! every request from the tail of the chain. When the tail cannot fit a
//! request, the arena appends a region of `max(size, 2 × tail capacity)`
//! bytes, which becomes the new tail. Earlier regions are never revisited,
//! not even after [`Arena::reset`]: reset zeroes every offset but
//! allocation carries on in the tail, so only an arena that never grew
//! gets its whole capacity back. Issued bytes never move, so every
//! allocation stays valid until the arena is reset or destroyed.
//!
//! Allocation borrows the arena shared (`&self`) while [`Arena::reset`] and
//! [`Arena::destroy`] borrow it exclusively, so the borrow checker rejects
//! any use of an allocation after the memory behind it was recycled:
//!
//! ```compile_fail
//! use cairn_arena::Arena;
//!
//! let mut arena = Arena::new(64).unwrap();
//! let bytes = arena.alloc_slice_copy(&[1u8, 2, 3]).unwrap();
//! arena.reset();
//! assert_eq!(bytes[0], 1);
//! ```

#![allow(unsafe_code)]

use std::alloc::Layout;
use std::cell::{Cell, RefCell};
use std::fmt;
use std::mem::MaybeUninit;
use std::ptr::{self, NonNull};
use std::slice;

use smallvec::SmallVec;

use crate::config::ArenaConfig;
use crate::error::ArenaError;
use crate::raw::{self, REGION_ALIGN};
use crate::region::{Region, RegionUsage};

/// Bump allocator over a growable chain of fixed-capacity regions.
///
/// Not thread-safe: interior mutability lets allocations be served through
/// `&Arena`, which makes the type `!Sync`.
///
/// # Example
///
/// ```
/// use cairn_arena::Arena;
///
/// let arena = Arena::new(16).unwrap();
/// let first = arena.alloc(10).unwrap();
/// assert_eq!(first.len(), 10);
///
/// // The head region has 6 bytes left, so this appends a 32-byte region.
/// let second = arena.alloc(10).unwrap();
/// assert_eq!(second.len(), 10);
/// assert_eq!(arena.region_count(), 2);
/// ```
pub struct Arena {
    regions: RefCell<Vec<Region>>,
    /// Sum of all region capacities in bytes.
    reserved: Cell<usize>,
    config: ArenaConfig,
}

impl Arena {
    /// Create an arena whose head region holds exactly `capacity` bytes.
    pub fn new(capacity: usize) -> Result<Self, ArenaError> {
        Self::with_config(ArenaConfig::new(capacity))
    }

    /// Create an arena from a validated [`ArenaConfig`].
    pub fn with_config(config: ArenaConfig) -> Result<Self, ArenaError> {
        config.validate()?;
        let head = Region::new(config.initial_capacity)?;
        Ok(Self {
            regions: RefCell::new(vec![head]),
            reserved: Cell::new(config.initial_capacity),
            config,
        })
    }

    /// Allocate `size` uninitialised bytes.
    ///
    /// The tail region's offset advances by exactly `size`. If the tail
    /// cannot fit the request the chain grows first.
    pub fn alloc(&self, size: usize) -> Result<&mut [MaybeUninit<u8>], ArenaError> {
        let ptr = self.alloc_raw(size, 1)?;
        // SAFETY: `ptr` is valid for `size` bytes that no other allocation
        // covers, and stays valid for the shared borrow of `self` because
        // only `reset`/`destroy` (which take `&mut self`) recycle regions.
        Ok(unsafe { slice::from_raw_parts_mut(ptr.as_ptr().cast::<MaybeUninit<u8>>(), size) })
    }

    /// Allocate a block that satisfies `layout`.
    ///
    /// The returned pointer is valid for `layout.size()` bytes until the
    /// arena is reset or destroyed.
    pub fn alloc_layout(&self, layout: Layout) -> Result<NonNull<u8>, ArenaError> {
        self.alloc_raw(layout.size(), layout.align())
    }

    /// Resize an allocation previously returned by this arena.
    ///
    /// Shrinking (`new_size <= old.len()`) hands back the same memory and
    /// consumes nothing. Growing allocates `new_size` fresh bytes, copies the
    /// old contents over and abandons the old bytes inside their region;
    /// they are only reclaimed by [`Arena::reset`] or [`Arena::destroy`].
    pub fn realloc<'a>(
        &'a self,
        old: &'a mut [MaybeUninit<u8>],
        new_size: usize,
    ) -> Result<&'a mut [MaybeUninit<u8>], ArenaError> {
        debug_assert!(
            old.is_empty() || self.owns(old.as_ptr().cast()),
            "realloc source was not allocated by this arena"
        );
        let old_size = old.len();
        let src = NonNull::from(old).cast::<u8>();
        // SAFETY: `src` comes from a live `&mut` slice of `old_size` bytes.
        let ptr = unsafe { self.realloc_raw(src, old_size, new_size, 1)? };
        // SAFETY: `ptr` is either `src` (valid for `old_size >= new_size`
        // bytes) or a fresh allocation of `new_size` bytes.
        Ok(unsafe { slice::from_raw_parts_mut(ptr.as_ptr().cast::<MaybeUninit<u8>>(), new_size) })
    }

    /// Copy `src` into the arena.
    ///
    /// An empty slice is returned without touching the arena.
    pub fn alloc_slice_copy<T: Copy>(&self, src: &[T]) -> Result<&mut [T], ArenaError> {
        let Some(ptr) = self.alloc_array::<T>(src.len())? else {
            return Ok(Default::default());
        };
        // SAFETY: `ptr` is a fresh, suitably aligned allocation for
        // `src.len()` elements that cannot overlap `src`.
        unsafe {
            ptr::copy_nonoverlapping(src.as_ptr(), ptr.as_ptr(), src.len());
            Ok(slice::from_raw_parts_mut(ptr.as_ptr(), src.len()))
        }
    }

    /// Allocate `len` copies of `value`.
    pub fn alloc_slice_fill_copy<T: Copy>(
        &self,
        len: usize,
        value: T,
    ) -> Result<&mut [T], ArenaError> {
        let Some(ptr) = self.alloc_array::<T>(len)? else {
            return Ok(Default::default());
        };
        // SAFETY: `ptr` is a fresh, suitably aligned allocation for `len`
        // elements; every element is written before the slice is formed.
        unsafe {
            for i in 0..len {
                ptr.as_ptr().add(i).write(value);
            }
            Ok(slice::from_raw_parts_mut(ptr.as_ptr(), len))
        }
    }

    /// Copy a string into the arena.
    pub fn alloc_str(&self, s: &str) -> Result<&mut str, ArenaError> {
        let bytes = self.alloc_slice_copy(s.as_bytes())?;
        // SAFETY: the bytes were copied verbatim from a valid `str`.
        Ok(unsafe { std::str::from_utf8_unchecked_mut(bytes) })
    }

    /// Rewind every region to offset zero without freeing any of them.
    ///
    /// The tail stays the region accepting allocations, so the space in
    /// earlier regions is not handed out again.
    pub fn reset(&mut self) {
        for region in self.regions.get_mut().iter() {
            region.reset();
        }
        tracing::trace!(regions = self.regions.get_mut().len(), "arena reset");
    }

    /// Free every region. Calling it again is a no-op.
    ///
    /// Afterwards every allocation request fails with
    /// [`ArenaError::InvalidArgument`].
    pub fn destroy(&mut self) {
        let regions = self.regions.get_mut();
        if regions.is_empty() {
            return;
        }
        tracing::trace!(regions = regions.len(), "arena destroyed");
        regions.clear();
        self.reserved.set(0);
    }

    /// Whether [`Arena::destroy`] has released the chain.
    pub fn is_destroyed(&self) -> bool {
        self.regions.borrow().is_empty()
    }

    /// Number of regions in the chain.
    pub fn region_count(&self) -> usize {
        self.regions.borrow().len()
    }

    /// Index of the region currently accepting allocations: always the
    /// tail of the chain (0 once destroyed).
    pub fn current_region(&self) -> usize {
        self.regions.borrow().len().saturating_sub(1)
    }

    /// Total bytes reserved across all regions.
    pub fn capacity_bytes(&self) -> usize {
        self.reserved.get()
    }

    /// Total bytes consumed across all regions, including padding and
    /// bytes abandoned by `realloc`.
    pub fn used_bytes(&self) -> usize {
        self.regions.borrow().iter().map(Region::used).sum()
    }

    /// Snapshot of every region's occupancy, head first.
    pub fn region_usage(&self) -> SmallVec<[RegionUsage; 4]> {
        self.regions.borrow().iter().map(Region::usage).collect()
    }

    /// Whether `ptr` points into memory owned by this arena.
    pub fn owns(&self, ptr: *const u8) -> bool {
        self.regions.borrow().iter().any(|r| r.contains(ptr))
    }

    /// The configuration this arena was created with.
    pub fn config(&self) -> &ArenaConfig {
        &self.config
    }

    /// Core allocation path shared by every typed entry point.
    pub(crate) fn alloc_raw(&self, size: usize, align: usize) -> Result<NonNull<u8>, ArenaError> {
        if size == 0 {
            return Err(ArenaError::invalid("zero-sized allocation"));
        }
        let mut regions = self.regions.borrow_mut();
        if regions.is_empty() {
            return Err(ArenaError::invalid("arena has been destroyed"));
        }

        // Only the tail accepts allocations, even when a reset has emptied
        // earlier regions.
        let tail_capacity = match regions.last() {
            Some(tail) => {
                if let Some(ptr) = tail.bump(size, align) {
                    return Ok(ptr);
                }
                tail.capacity()
            }
            None => 0,
        };
        let required = if align <= REGION_ALIGN {
            size
        } else {
            size.checked_add(align - 1)
                .ok_or(ArenaError::OutOfMemory { requested: size })?
        };
        let capacity = tail_capacity.saturating_mul(2).max(required);
        if let Some(limit) = self.config.byte_limit {
            if self.reserved.get().saturating_add(capacity) > limit {
                return Err(ArenaError::OutOfMemory {
                    requested: capacity,
                });
            }
        }

        let region = Region::new(capacity)?;
        let ptr = region
            .bump(size, align)
            .ok_or(ArenaError::OutOfMemory {
                requested: capacity,
            })?;
        regions.push(region);
        let index = regions.len() - 1;
        self.reserved.set(self.reserved.get() + capacity);
        tracing::debug!(region = index, capacity, requested = size, "arena grew");
        Ok(ptr)
    }

    /// Byte-level realloc used by [`Arena::realloc`] and `ArenaVec`.
    ///
    /// # Safety
    ///
    /// `src` must be valid for reads of `old_size` bytes.
    pub(crate) unsafe fn realloc_raw(
        &self,
        src: NonNull<u8>,
        old_size: usize,
        new_size: usize,
        align: usize,
    ) -> Result<NonNull<u8>, ArenaError> {
        if old_size == 0 {
            return Err(ArenaError::invalid("realloc of a zero-length allocation"));
        }
        if new_size <= old_size {
            return Ok(src);
        }
        let dst = self.alloc_raw(new_size, align)?;
        // SAFETY: `src` is readable for `old_size` bytes per the contract,
        // `dst` is a fresh allocation of `new_size > old_size` bytes and so
        // cannot overlap it.
        unsafe { raw::copy_bytes(src, dst, old_size) };
        Ok(dst)
    }

    /// Allocate uninitialised storage for `len` values of `T`.
    ///
    /// Returns `Ok(None)` when `len` is zero.
    pub(crate) fn alloc_array<T>(&self, len: usize) -> Result<Option<NonNull<T>>, ArenaError> {
        if len == 0 {
            return Ok(None);
        }
        let layout = Layout::array::<T>(len).map_err(|_| ArenaError::OutOfMemory {
            requested: usize::MAX,
        })?;
        if layout.size() == 0 {
            return Err(ArenaError::invalid("zero-sized element type"));
        }
        self.alloc_layout(layout).map(|ptr| Some(ptr.cast::<T>()))
    }
}

impl fmt::Debug for Arena {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Arena")
            .field("regions", &self.region_count())
            .field("current", &self.current_region())
            .field("used_bytes", &self.used_bytes())
            .field("capacity_bytes", &self.capacity_bytes())
            .finish()
    }
}
