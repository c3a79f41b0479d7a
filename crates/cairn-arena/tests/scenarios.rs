//! End-to-end allocator scenarios exercised through the public API only.

use std::mem::MaybeUninit;

use cairn_arena::{Arena, ArenaConfig, ArenaError, ArenaVec};

fn fill(bytes: &mut [MaybeUninit<u8>], seed: u8) {
    for (i, byte) in bytes.iter_mut().enumerate() {
        byte.write(seed.wrapping_add(i as u8));
    }
}

fn read(bytes: &[MaybeUninit<u8>]) -> Vec<u8> {
    // SAFETY (test): callers only read bytes they filled.
    bytes.iter().map(|b| unsafe { b.assume_init_read() }).collect()
}

#[test]
fn create_alloc_grow_destroy() {
    let mut arena = Arena::new(16).unwrap();

    let first = arena.alloc(10).unwrap();
    fill(first, 0);
    assert_eq!(arena.region_usage()[0].used, 10);

    let second = arena.alloc(10).unwrap();
    fill(second, 100);

    let usage = arena.region_usage();
    assert_eq!(usage.len(), 2);
    assert_eq!(usage[0].used, 10, "old tail is untouched by growth");
    assert!(usage[1].capacity >= 32);
    assert_eq!(usage[1].used, 10);

    assert_eq!(read(first), (0..10).collect::<Vec<u8>>());
    assert_eq!(read(second), (100..110).collect::<Vec<u8>>());

    arena.destroy();
    assert_eq!(arena.region_count(), 0);
    arena.destroy();
    assert_eq!(arena.region_count(), 0);
}

#[test]
fn earlier_allocations_survive_growth() {
    let arena = Arena::new(32).unwrap();
    let mut blocks = Vec::new();
    for seed in 0..20u8 {
        let block = arena.alloc(24).unwrap();
        fill(block, seed * 10);
        blocks.push((seed, block));
    }
    assert!(arena.region_count() > 1);
    for (seed, block) in blocks {
        let expected: Vec<u8> = (0..24).map(|i| (seed * 10).wrapping_add(i)).collect();
        assert_eq!(read(block), expected);
    }
}

#[test]
fn realloc_chain_keeps_the_original_bytes() {
    let arena = Arena::new(8).unwrap();
    let block = arena.alloc(4).unwrap();
    fill(block, 7);
    let block = arena.realloc(block, 16).unwrap();
    let block = arena.realloc(block, 64).unwrap();
    assert_eq!(read(&block[..4]), vec![7, 8, 9, 10]);

    let same = block.as_ptr();
    let shrunk = arena.realloc(block, 3).unwrap();
    assert_eq!(shrunk.as_ptr(), same);
}

#[test]
fn reset_then_refill_without_growth() {
    let mut arena = Arena::new(256).unwrap();
    let first_addr = arena.alloc(40).unwrap().as_ptr() as usize;
    arena.alloc(40).unwrap();
    let capacity = arena.capacity_bytes();

    arena.reset();

    let again = arena.alloc(40).unwrap().as_ptr() as usize;
    assert_eq!(again, first_addr);
    assert_eq!(arena.capacity_bytes(), capacity);
    assert_eq!(arena.region_count(), 1);
}

#[test]
fn dynamic_array_default_plus_one() {
    let arena = Arena::with_config(ArenaConfig::default()).unwrap();
    let default = ArenaVec::<u32>::DEFAULT_CAPACITY;

    let mut values = ArenaVec::new_in(&arena);
    for v in 0..=default as u32 {
        values.push(v);
    }

    assert_eq!(values.len(), default + 1);
    assert!(values.capacity() >= default + 1);
    assert!((values.capacity() / default).is_power_of_two());
    assert!(values.iter().copied().eq(0..=default as u32));
}

#[test]
fn recoverable_layer_surfaces_limit_errors() {
    let arena = Arena::with_config(ArenaConfig::new(64).with_byte_limit(64)).unwrap();
    let mut values = ArenaVec::try_with_capacity_in(8, &arena).unwrap();
    let mut pushed = 0u32;
    let err = loop {
        match values.try_push(pushed) {
            Ok(()) => pushed += 1,
            Err(err) => break err,
        }
    };
    assert!(matches!(err, ArenaError::OutOfMemory { .. }));
    assert_eq!(values.len(), pushed as usize);
    assert!(values.iter().copied().eq(0..pushed));
}

#[test]
fn destroyed_arena_rejects_everything() {
    let mut arena = Arena::new(16).unwrap();
    arena.destroy();
    assert!(matches!(arena.alloc(1), Err(ArenaError::InvalidArgument { .. })));
    assert!(matches!(
        arena.alloc_slice_copy(&[1u8]),
        Err(ArenaError::InvalidArgument { .. })
    ));
}
