//! Growable arrays whose storage lives in an [`Arena`].
//!
//! [`ArenaVec`] is an `{items, len, capacity}` triple over arena memory.
//! Growth doubles the capacity and moves the items with the arena's
//! realloc, which abandons the previous buffer inside its region. The
//! superseded buffers are only reclaimed when the arena is reset or
//! destroyed, so a vector that grew from 256 to 1024 elements has consumed
//! room for 256 + 512 + 1024 of them.
//!
//! Two layers share the implementation:
//!
//! - `try_*` methods return [`ArenaError`] and leave recovery to the caller.
//!   Library code, including the puzzle solvers, uses this layer.
//! - [`ArenaVec::new_in`], [`ArenaVec::push`] and friends treat allocation
//!   failure as fatal: they log the error, print `Out of memory: <error>` to
//!   stderr and exit the process with status 1.

#![allow(unsafe_code)]

use std::fmt;
use std::marker::PhantomData;
use std::mem;
use std::ops::{Deref, DerefMut};
use std::ptr::NonNull;
use std::slice;

use crate::arena::Arena;
use crate::error::ArenaError;

/// Unwrap an allocator result or terminate the process.
fn must<T>(result: Result<T, ArenaError>) -> T {
    match result {
        Ok(value) => value,
        Err(err) => {
            tracing::error!(error = %err, "arena allocation failed");
            eprintln!("Out of memory: {err}");
            std::process::exit(1)
        }
    }
}

/// A growable array backed by arena memory.
///
/// Element destructors never run: dropping the vector leaves its items in
/// the arena, and the arena frees raw bytes only.
///
/// # Example
///
/// ```
/// use cairn_arena::{Arena, ArenaVec};
///
/// let arena = Arena::new(4096).unwrap();
/// let mut depths = ArenaVec::new_in(&arena);
/// for depth in [199, 200, 208] {
///     depths.push(depth);
/// }
/// assert_eq!(depths.as_slice(), &[199, 200, 208]);
/// assert_eq!(depths.capacity(), ArenaVec::<i32>::DEFAULT_CAPACITY);
/// ```
pub struct ArenaVec<'a, T> {
    arena: &'a Arena,
    items: NonNull<T>,
    len: usize,
    capacity: usize,
    _marker: PhantomData<&'a mut [T]>,
}

impl<'a, T> ArenaVec<'a, T> {
    /// Capacity used by [`ArenaVec::new_in`] and by the first growth of an
    /// empty vector.
    pub const DEFAULT_CAPACITY: usize = 256;

    /// Create a vector with [`Self::DEFAULT_CAPACITY`] slots.
    ///
    /// Exits the process if the arena cannot provide them.
    pub fn new_in(arena: &'a Arena) -> Self {
        must(Self::try_new_in(arena))
    }

    /// Create a vector with `capacity` slots, exiting the process on failure.
    pub fn with_capacity_in(capacity: usize, arena: &'a Arena) -> Self {
        must(Self::try_with_capacity_in(capacity, arena))
    }

    /// Create a vector with [`Self::DEFAULT_CAPACITY`] slots.
    pub fn try_new_in(arena: &'a Arena) -> Result<Self, ArenaError> {
        Self::try_with_capacity_in(Self::DEFAULT_CAPACITY, arena)
    }

    /// Create a vector with `capacity` slots.
    ///
    /// A zero capacity reserves nothing; the first push allocates
    /// [`Self::DEFAULT_CAPACITY`] slots.
    ///
    /// # Panics
    ///
    /// Panics if `T` is zero-sized.
    pub fn try_with_capacity_in(capacity: usize, arena: &'a Arena) -> Result<Self, ArenaError> {
        assert!(
            mem::size_of::<T>() != 0,
            "ArenaVec does not support zero-sized element types"
        );
        let items = arena.alloc_array::<T>(capacity)?.unwrap_or(NonNull::dangling());
        Ok(Self {
            arena,
            items,
            len: 0,
            capacity,
            _marker: PhantomData,
        })
    }

    /// Append `value`, doubling the capacity first if the vector is full.
    ///
    /// Exits the process if growth fails.
    pub fn push(&mut self, value: T) {
        must(self.try_push(value));
    }

    /// Append `value`, returning the allocator error if growth fails.
    ///
    /// On failure the vector is unchanged and `value` is dropped.
    pub fn try_push(&mut self, value: T) -> Result<(), ArenaError> {
        if self.len == self.capacity {
            self.grow()?;
        }
        // SAFETY: `len < capacity`, so slot `len` lies inside the buffer and
        // holds no live value.
        unsafe { self.items.as_ptr().add(self.len).write(value) };
        self.len += 1;
        Ok(())
    }

    fn grow(&mut self) -> Result<(), ArenaError> {
        let new_capacity = if self.capacity == 0 {
            Self::DEFAULT_CAPACITY
        } else {
            self.capacity
                .checked_mul(2)
                .ok_or(ArenaError::OutOfMemory {
                    requested: usize::MAX,
                })?
        };

        let items = if self.len == 0 {
            self.arena.alloc_array::<T>(new_capacity)?.unwrap_or(NonNull::dangling())
        } else {
            let elem = mem::size_of::<T>();
            let new_bytes = new_capacity
                .checked_mul(elem)
                .ok_or(ArenaError::OutOfMemory {
                    requested: usize::MAX,
                })?;
            // SAFETY: `items` holds `len` initialised elements, i.e. it is
            // readable for `len * size_of::<T>()` bytes.
            let ptr = unsafe {
                self.arena.realloc_raw(
                    self.items.cast::<u8>(),
                    self.len * elem,
                    new_bytes,
                    mem::align_of::<T>(),
                )?
            };
            ptr.cast::<T>()
        };

        self.items = items;
        self.capacity = new_capacity;
        Ok(())
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the vector holds no elements.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of slots before the next growth.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// The arena backing this vector.
    pub fn arena(&self) -> &'a Arena {
        self.arena
    }

    /// The initialised elements.
    pub fn as_slice(&self) -> &[T] {
        // SAFETY: the first `len` slots are initialised; `items` is dangling
        // but well-aligned when `len == 0`.
        unsafe { slice::from_raw_parts(self.items.as_ptr(), self.len) }
    }

    /// The initialised elements, mutably.
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        // SAFETY: as for `as_slice`, with exclusive access through `&mut self`.
        unsafe { slice::from_raw_parts_mut(self.items.as_ptr(), self.len) }
    }

    /// Give up the growable wrapper and keep the elements for the arena's
    /// whole lifetime.
    pub fn into_slice(self) -> &'a mut [T] {
        // SAFETY: the buffer belongs to the arena borrowed for `'a`, and the
        // vector is consumed so nothing else can reach it.
        unsafe { slice::from_raw_parts_mut(self.items.as_ptr(), self.len) }
    }
}

impl<T: Copy> ArenaVec<'_, T> {
    /// Append every element of `values`, exiting the process on failure.
    pub fn extend_from_slice(&mut self, values: &[T]) {
        for &value in values {
            self.push(value);
        }
    }
}

impl<T> Deref for ArenaVec<'_, T> {
    type Target = [T];

    fn deref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T> DerefMut for ArenaVec<'_, T> {
    fn deref_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<T> Extend<T> for ArenaVec<'_, T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push(value);
        }
    }
}

impl<'s, T> IntoIterator for &'s ArenaVec<'_, T> {
    type Item = &'s T;
    type IntoIter = slice::Iter<'s, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.as_slice().iter()
    }
}

impl<'s, T> IntoIterator for &'s mut ArenaVec<'_, T> {
    type Item = &'s mut T;
    type IntoIter = slice::IterMut<'s, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.as_mut_slice().iter_mut()
    }
}

impl<T: fmt::Debug> fmt::Debug for ArenaVec<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.as_slice()).finish()
    }
}

impl<T: PartialEq> PartialEq<[T]> for ArenaVec<'_, T> {
    fn eq(&self, other: &[T]) -> bool {
        self.as_slice() == other
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ArenaConfig;

    #[test]
    fn new_in_reserves_default_capacity() {
        let arena = Arena::new(4096).unwrap();
        let v: ArenaVec<'_, u32> = ArenaVec::new_in(&arena);
        assert_eq!(v.capacity(), 256);
        assert!(v.is_empty());
        assert_eq!(arena.used_bytes(), 256 * 4);
    }

    #[test]
    fn appending_past_default_capacity_doubles() {
        let arena = Arena::new(1024).unwrap();
        let mut v = ArenaVec::new_in(&arena);
        let count = ArenaVec::<u64>::DEFAULT_CAPACITY + 1;
        for i in 0..count as u64 {
            v.push(i);
        }
        assert_eq!(v.len(), count);
        assert_eq!(v.capacity(), 512);
        assert!(v.iter().copied().eq(0..count as u64));
    }

    #[test]
    fn growth_leaves_old_buffer_in_the_arena() {
        let arena = Arena::new(16).unwrap();
        let mut v = ArenaVec::try_with_capacity_in(2, &arena).unwrap();
        v.try_push(1u32).unwrap();
        v.try_push(2).unwrap();
        v.try_push(3).unwrap();
        assert_eq!(v.capacity(), 4);
        // 2 slots abandoned + 4 slots live.
        assert_eq!(arena.used_bytes(), (2 + 4) * 4);
        assert_eq!(v.as_slice(), &[1, 2, 3]);
    }

    #[test]
    fn zero_capacity_grows_to_default() {
        let arena = Arena::new(64).unwrap();
        let mut v = ArenaVec::try_with_capacity_in(0, &arena).unwrap();
        assert_eq!(arena.used_bytes(), 0);
        v.try_push(7u8).unwrap();
        assert_eq!(v.capacity(), 256);
        assert_eq!(&v[..], &[7]);
    }

    #[test]
    fn try_push_reports_oom_and_keeps_contents() {
        let config = ArenaConfig::new(8).with_byte_limit(8);
        let arena = Arena::with_config(config).unwrap();
        let mut v = ArenaVec::try_with_capacity_in(2, &arena).unwrap();
        v.try_push(10u16).unwrap();
        v.try_push(20).unwrap();
        let err = v.try_push(30).unwrap_err();
        assert!(err.is_out_of_memory());
        assert_eq!(v.as_slice(), &[10, 20]);
        assert_eq!(v.capacity(), 2);
    }

    #[test]
    fn try_new_in_fails_on_destroyed_arena() {
        let mut arena = Arena::new(8).unwrap();
        arena.destroy();
        let result = ArenaVec::<u8>::try_new_in(&arena);
        assert!(matches!(result, Err(ArenaError::InvalidArgument { .. })));
    }

    #[test]
    fn into_slice_outlives_the_vector() {
        let arena = Arena::new(4096).unwrap();
        let slice = {
            let mut v = ArenaVec::new_in(&arena);
            v.extend_from_slice(&[3, 1, 2]);
            v.into_slice()
        };
        slice.sort_unstable();
        assert_eq!(slice, &[1, 2, 3]);
    }

    #[test]
    fn holds_borrowed_strings() {
        let arena = Arena::new(4096).unwrap();
        let mut words: ArenaVec<'_, &str> = ArenaVec::new_in(&arena);
        words.extend(["forward", "down", "up"]);
        assert_eq!(words.len(), 3);
        assert_eq!(format!("{words:?}"), r#"["forward", "down", "up"]"#);
    }

    #[test]
    fn mutable_iteration_updates_in_place() {
        let arena = Arena::new(4096).unwrap();
        let mut v = ArenaVec::new_in(&arena);
        v.extend(1..=4);
        for x in &mut v {
            *x *= 10;
        }
        assert_eq!(v.as_slice(), &[10, 20, 30, 40]);
    }

    #[test]
    #[should_panic(expected = "zero-sized")]
    fn zero_sized_elements_are_rejected() {
        let arena = Arena::new(64).unwrap();
        let _ = ArenaVec::<()>::try_new_in(&arena);
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn order_and_capacity_after_appends(
                values in proptest::collection::vec(any::<i64>(), 0..1200),
            ) {
                let arena = Arena::new(256).unwrap();
                let mut v = ArenaVec::new_in(&arena);
                for &value in &values {
                    v.try_push(value).unwrap();
                }
                prop_assert_eq!(v.as_slice(), values.as_slice());
                prop_assert!(v.len() <= v.capacity());
                let ratio = v.capacity() / ArenaVec::<i64>::DEFAULT_CAPACITY;
                prop_assert!(ratio.is_power_of_two());
                prop_assert_eq!(v.capacity() % ArenaVec::<i64>::DEFAULT_CAPACITY, 0);
            }
        }
    }
}
