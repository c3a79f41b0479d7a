//! Whole-file reads into arena memory.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use cairn_arena::Arena;

use crate::error::InputError;

/// Read the entire file at `path` into the arena and return it as text.
///
/// The returned string borrows the arena and lives until it is reset or
/// destroyed. Empty files are rejected, as are files that are not UTF-8.
pub fn read_input<'a>(arena: &'a Arena, path: impl AsRef<Path>) -> Result<&'a str, InputError> {
    let path = path.as_ref();
    let io_err = |source| InputError::Io {
        path: path.to_path_buf(),
        source,
    };

    let mut file = File::open(path).map_err(io_err)?;
    let len = file.metadata().map_err(io_err)?.len();
    if len == 0 {
        return Err(InputError::Empty {
            path: path.to_path_buf(),
        });
    }
    let len = usize::try_from(len).map_err(|_| {
        InputError::Arena(cairn_arena::ArenaError::OutOfMemory {
            requested: usize::MAX,
        })
    })?;

    let buf = arena.alloc_slice_fill_copy(len, 0u8)?;
    file.read_exact(buf).map_err(io_err)?;

    let text = std::str::from_utf8(buf).map_err(|err| InputError::NotUtf8 {
        path: path.to_path_buf(),
        valid_up_to: err.valid_up_to(),
    })?;
    tracing::debug!(path = %path.display(), bytes = len, "input loaded");
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn temp_file(contents: &[u8]) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn reads_whole_file_into_arena() {
        let file = temp_file(b"199\n200\n208\n");
        let arena = Arena::new(1024).unwrap();
        let text = read_input(&arena, file.path()).unwrap();
        assert_eq!(text, "199\n200\n208\n");
        assert!(arena.owns(text.as_ptr()));
        assert_eq!(arena.used_bytes(), 12);
    }

    #[test]
    fn large_file_grows_the_arena() {
        let contents = "1\n".repeat(4096);
        let file = temp_file(contents.as_bytes());
        let arena = Arena::new(64).unwrap();
        let text = read_input(&arena, file.path()).unwrap();
        assert_eq!(text.len(), 8192);
        assert_eq!(arena.region_count(), 2);
    }

    #[test]
    fn missing_file_is_io_error() {
        let arena = Arena::new(64).unwrap();
        let err = read_input(&arena, "definitely/not/here.txt").unwrap_err();
        assert!(matches!(err, InputError::Io { .. }));
        assert!(err.to_string().contains("definitely/not/here.txt"));
    }

    #[test]
    fn empty_file_is_rejected() {
        let file = temp_file(b"");
        let arena = Arena::new(64).unwrap();
        let err = read_input(&arena, file.path()).unwrap_err();
        assert!(matches!(err, InputError::Empty { .. }));
        assert_eq!(arena.used_bytes(), 0);
    }

    #[test]
    fn invalid_utf8_reports_offset() {
        let file = temp_file(b"ok\xff");
        let arena = Arena::new(64).unwrap();
        let err = read_input(&arena, file.path()).unwrap_err();
        assert!(matches!(err, InputError::NotUtf8 { valid_up_to: 2, .. }));
    }
}
