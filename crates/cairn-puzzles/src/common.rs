//! Parsing helpers shared by the day solvers.
//!
//! Solvers allocate through the `try_*` layer of [`ArenaVec`] only, so an
//! exhausted arena comes back as [`PuzzleError::Arena`] like every other
//! failure.

use cairn_arena::{Arena, ArenaVec};
use cairn_input::{parse_int, split_str};

use crate::error::PuzzleError;

/// Non-blank lines of `input`, with trailing whitespace (including `\r`)
/// stripped.
pub(crate) fn lines<'a>(arena: &'a Arena, input: &str) -> Result<ArenaVec<'a, &'a str>, PuzzleError> {
    let raw = split_str(arena, input, "\n")?;
    let mut lines = ArenaVec::try_with_capacity_in(raw.len(), arena)?;
    for &line in raw.iter() {
        let line = line.trim_end();
        if !line.is_empty() {
            lines.try_push(line)?;
        }
    }
    Ok(lines)
}

/// Decimal integers separated by `delim`. Blank tokens are skipped.
pub(crate) fn numbers<'a>(
    arena: &'a Arena,
    text: &str,
    delim: &str,
) -> Result<&'a mut [i64], PuzzleError> {
    let tokens = split_str(arena, text, delim)?;
    let mut values = ArenaVec::try_with_capacity_in(tokens.len(), arena)?;
    for &token in tokens.iter() {
        let token = token.trim();
        if !token.is_empty() {
            values.try_push(parse_int(token, 10)?)?;
        }
    }
    Ok(values.into_slice())
}
