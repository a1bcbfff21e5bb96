//! Input list construction: glob expansion plus recursive directory walks.
//!
//! [`expand_inputs`] turns what the user typed into a flat list of regular
//! files. Patterns containing glob metacharacters (`*`, `?`, `[`) are
//! expanded with [`glob`]; directories, whether named directly or matched by
//! a pattern, are walked with [`walkdir`].
//!
//! **Symlink handling**: symlinks are never followed during directory
//! traversal (`walkdir`'s default `follow_links(false)`), so symlink entries
//! inside a walked directory are skipped and cycles cannot occur. A symlink
//! named directly is forwarded as-is.

use std::io;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

/// Returns `true` if `input` should be treated as a glob pattern.
pub fn is_glob_pattern(input: &str) -> bool {
    input.contains(['*', '?', '['])
}

/// Expand a mixed list of file and directory paths into regular files.
///
/// - Regular files (and anything that is not a directory) pass through
///   unchanged, without an existence check.
/// - Directories are walked recursively; only `file_type().is_file()`
///   entries are kept.
/// - The first unreadable directory entry aborts the walk with its error.
pub fn create_file_list(inputs: &[&Path]) -> io::Result<Vec<PathBuf>> {
    let mut result = Vec::new();
    for input in inputs {
        if input.is_dir() {
            for entry in WalkDir::new(input) {
                let entry = entry.map_err(|e| {
                    e.io_error()
                        .map(|io| io::Error::new(io.kind(), io.to_string()))
                        .unwrap_or_else(|| io::Error::other(e.to_string()))
                })?;
                if entry.file_type().is_file() {
                    result.push(entry.into_path());
                }
            }
        } else {
            result.push(input.to_path_buf());
        }
    }
    Ok(result)
}

/// Expand one glob pattern, in the sorted order `glob` yields.
///
/// A malformed pattern is [`io::ErrorKind::InvalidInput`]; a pattern that
/// matches nothing is [`io::ErrorKind::NotFound`].
pub fn expand_glob(pattern: &str) -> io::Result<Vec<PathBuf>> {
    let paths = glob::glob(pattern).map_err(|e| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("{pattern}: bad glob pattern: {e}"),
        )
    })?;
    let mut matched = Vec::new();
    for path in paths {
        let path = path.map_err(|e| {
            let path = e.path().display().to_string();
            io::Error::new(e.error().kind(), format!("{path}: {}", e.error()))
        })?;
        matched.push(path);
    }
    if matched.is_empty() {
        return Err(io::Error::new(
            io::ErrorKind::NotFound,
            format!("{pattern}: no files match"),
        ));
    }
    Ok(matched)
}

/// Expand user-supplied inputs (paths, directories, glob patterns) into the
/// list of files to process, preserving argument order.
pub fn expand_inputs<S: AsRef<str>>(inputs: &[S]) -> io::Result<Vec<PathBuf>> {
    let mut roots = Vec::new();
    for input in inputs {
        let input = input.as_ref();
        if is_glob_pattern(input) {
            roots.extend(expand_glob(input)?);
        } else {
            roots.push(PathBuf::from(input));
        }
    }
    let roots: Vec<&Path> = roots.iter().map(PathBuf::as_path).collect();
    create_file_list(&roots)
}
