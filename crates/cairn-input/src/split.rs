//! Delimiter splitting into arena-owned tokens.

use cairn_arena::{Arena, ArenaError, ArenaVec};

/// Split `input` on every occurrence of `delim`, copying each token into
/// the arena.
///
/// Every delimiter terminates a token, so consecutive delimiters yield
/// empty tokens. Text after the last delimiter becomes a token only when
/// it is non-empty, which drops the empty tail left by a trailing newline.
/// An empty `delim` yields an empty list.
///
/// ```
/// use cairn_arena::Arena;
/// use cairn_input::split_str;
///
/// let arena = Arena::new(4096).unwrap();
/// let parts = split_str(&arena, "a,,b,", ",").unwrap();
/// assert_eq!(parts.as_slice(), &["a", "", "b"]);
/// ```
pub fn split_str<'a>(
    arena: &'a Arena,
    input: &str,
    delim: &str,
) -> Result<ArenaVec<'a, &'a str>, ArenaError> {
    let mut chunks = ArenaVec::try_new_in(arena)?;
    if delim.is_empty() {
        return Ok(chunks);
    }

    let mut rest = input;
    while let Some(at) = rest.find(delim) {
        let token: &'a str = arena.alloc_str(&rest[..at])?;
        chunks.try_push(token)?;
        rest = &rest[at + delim.len()..];
    }
    if !rest.is_empty() {
        let token: &'a str = arena.alloc_str(rest)?;
        chunks.try_push(token)?;
    }
    Ok(chunks)
}
