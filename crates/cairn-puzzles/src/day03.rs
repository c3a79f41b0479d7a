//! Day 3: Binary Diagnostic.

use cairn_arena::{Arena, ArenaVec};
use cairn_input::parse_int;

use crate::common;
use crate::error::PuzzleError;
use crate::puzzle::{Answers, Day, Puzzle};

const DAY: Day = Day(3);

/// Reads power consumption and life-support ratings from a diagnostic report.
#[derive(Debug, Default)]
pub struct BinaryDiagnostic;

fn ones_at(values: &[u32], bit: usize) -> usize {
    values.iter().filter(|&&v| (v >> bit) & 1 == 1).count()
}

/// Filter candidates bit by bit from the most significant column until one
/// remains or the columns run out. `keep_most_common` selects oxygen (ties
/// keep 1) or CO2 (ties keep 0). A column every candidate agrees on never
/// empties the list, and duplicate readings can survive every column; the
/// first survivor is the rating.
fn rating(candidates: &mut [u32], width: usize, keep_most_common: bool) -> Result<u32, PuzzleError> {
    let mut len = candidates.len();
    for bit in (0..width).rev() {
        if len <= 1 {
            break;
        }
        let ones = ones_at(&candidates[..len], bit);
        if ones == 0 || ones == len {
            continue;
        }
        let ones_win = ones * 2 >= len;
        let wanted = u32::from(ones_win == keep_most_common);

        let mut kept = 0;
        for i in 0..len {
            if (candidates[i] >> bit) & 1 == wanted {
                candidates[kept] = candidates[i];
                kept += 1;
            }
        }
        len = kept;
    }
    match len {
        0 => Err(PuzzleError::malformed(DAY, "rating filter left no candidates")),
        _ => Ok(candidates[0]),
    }
}

impl Puzzle for BinaryDiagnostic {
    fn day(&self) -> Day {
        DAY
    }

    fn title(&self) -> &str {
        "Binary Diagnostic"
    }

    fn solve(&self, arena: &Arena, input: &str) -> Result<Answers, PuzzleError> {
        let lines = common::lines(arena, input)?;
        let Some(first) = lines.first() else {
            return Err(PuzzleError::malformed(DAY, "empty report"));
        };
        let width = first.len();
        if width == 0 || width > 32 {
            return Err(PuzzleError::malformed(DAY, format!("unsupported width {width}")));
        }

        let mut report = ArenaVec::try_with_capacity_in(lines.len(), arena)?;
        for line in lines.iter() {
            if line.len() != width || !line.bytes().all(|b| b == b'0' || b == b'1') {
                return Err(PuzzleError::malformed(
                    DAY,
                    format!("expected {width} binary digits, got {line:?}"),
                ));
            }
            report.try_push(parse_int(line, 2)? as u32)?;
        }

        // A tied column sets its bit in neither rate.
        let (mut gamma, mut epsilon) = (0u32, 0u32);
        for bit in 0..width {
            let ones = ones_at(&report, bit) * 2;
            if ones > report.len() {
                gamma |= 1 << bit;
            } else if ones < report.len() {
                epsilon |= 1 << bit;
            }
        }

        let oxygen = rating(arena.alloc_slice_copy(&report)?, width, true)?;
        let co2 = rating(arena.alloc_slice_copy(&report)?, width, false)?;

        Ok(Answers::new(
            i64::from(gamma) * i64::from(epsilon),
            i64::from(oxygen) * i64::from(co2),
        ))
    }
}
