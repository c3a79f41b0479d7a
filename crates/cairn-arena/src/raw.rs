//! Low-level primitives for region memory.
//!
//! Wraps the system allocator for region blocks. The modules that hand
//! out references into those blocks (`region`, `arena`, `vec`) opt back
//! into `unsafe_code` individually; each block carries a `// SAFETY:`
//! comment.

#![allow(unsafe_code)]

use std::alloc::{self, Layout};
use std::ptr::{self, NonNull};

/// Alignment of every region's base address.
///
/// Requests with alignment up to this value never need padding at the
/// start of a fresh region.
pub(crate) const REGION_ALIGN: usize = 16;

fn block_layout(capacity: usize) -> Option<Layout> {
    Layout::from_size_align(capacity, REGION_ALIGN).ok()
}

/// Obtain an uninitialised block of `capacity` bytes from the system allocator.
///
/// Returns `None` for a zero capacity, a capacity that cannot form a valid
/// layout, or when the system allocator reports exhaustion.
pub(crate) fn alloc_block(capacity: usize) -> Option<NonNull<u8>> {
    if capacity == 0 {
        return None;
    }
    let layout = block_layout(capacity)?;
    // SAFETY: `layout` has a non-zero size (checked above).
    let ptr = unsafe { alloc::alloc(layout) };
    NonNull::new(ptr)
}

/// Return a block obtained from [`alloc_block`] to the system allocator.
///
/// # Safety
///
/// `ptr` must have been returned by `alloc_block(capacity)` with the same
/// `capacity`, and must not be used or freed again afterwards.
pub(crate) unsafe fn free_block(ptr: NonNull<u8>, capacity: usize) {
    if let Some(layout) = block_layout(capacity) {
        // SAFETY: the caller guarantees `ptr` came from `alloc_block` with
        // this capacity, so it was allocated with exactly `layout`.
        unsafe { alloc::dealloc(ptr.as_ptr(), layout) };
    }
}

/// Copy `len` bytes from `src` to `dst`.
///
/// # Safety
///
/// `src` must be valid for reads and `dst` valid for writes of `len` bytes,
/// and the two ranges must not overlap.
pub(crate) unsafe fn copy_bytes(src: NonNull<u8>, dst: NonNull<u8>, len: usize) {
    // SAFETY: forwarded from the caller's contract.
    unsafe { ptr::copy_nonoverlapping(src.as_ptr(), dst.as_ptr(), len) };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_capacity_block_is_refused() {
        assert!(alloc_block(0).is_none());
    }

    #[test]
    fn oversized_block_is_refused() {
        assert!(alloc_block(usize::MAX).is_none());
    }

    #[test]
    fn block_base_is_region_aligned() {
        let ptr = alloc_block(100).unwrap();
        assert_eq!(ptr.as_ptr() as usize % REGION_ALIGN, 0);
        unsafe { free_block(ptr, 100) };
    }

    #[test]
    fn copy_moves_bytes() {
        let src = alloc_block(8).unwrap();
        let dst = alloc_block(8).unwrap();
        unsafe {
            for i in 0..8 {
                src.as_ptr().add(i).write(i as u8 + 1);
            }
            copy_bytes(src, dst, 8);
            let copied = std::slice::from_raw_parts(dst.as_ptr(), 8);
            assert_eq!(copied, &[1, 2, 3, 4, 5, 6, 7, 8]);
            free_block(src, 8);
            free_block(dst, 8);
        }
    }
}
