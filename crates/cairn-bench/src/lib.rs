//! Deterministic workloads for benchmarking the cairn arena.
//!
//! - [`request_sizes`]: a seeded mix of small and occasionally large
//!   allocation sizes
//! - [`depth_report`]: a synthetic newline-separated input for the
//!   split and parse path

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use rand_chacha::rand_core::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// `n` allocation sizes in `1..=max`, skewed towards small requests.
///
/// Roughly one request in sixteen is drawn from the full range; the rest
/// stay below 64 bytes, which is what token and small-vector workloads
/// look like.
pub fn request_sizes(n: usize, max: usize, seed: u64) -> Vec<usize> {
    assert!(max > 0, "max must be positive");
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..n)
        .map(|_| {
            let roll = rng.next_u32() as usize;
            let bound = if roll % 16 == 0 { max } else { max.min(64) };
            1 + rng.next_u32() as usize % bound
        })
        .collect()
}

/// `lines` newline-terminated depth readings below 10 000.
pub fn depth_report(lines: usize, seed: u64) -> String {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut report = String::with_capacity(lines * 5);
    for _ in 0..lines {
        report.push_str(&(rng.next_u32() % 10_000).to_string());
        report.push('\n');
    }
    report
}
