//! File I/O primitives: whole-input reads and guarded destination opens.
//!
//! - [`read_src`]: reads a [`Source`] (a path or stdin) fully into memory.
//!   Directories are rejected.
//! - [`open_dst_file`]: resolves a [`Destination`] (a path or stdout) to a
//!   [`DstFile`], enforcing the overwrite policy from [`Prefs`].
//! - [`write_dst`]: open, write all, flush.
//!
//! Standard streams are enum variants, never path spellings, so a regular
//! file called `stdin` or `stdout` is just a file.

use std::fmt;
use std::fs::{File, OpenOptions};
use std::io::{self, BufWriter, IsTerminal, Read, Write};
use std::path::Path;

use crate::displaylevel;
use crate::io::prefs::Prefs;

/// Where input bytes come from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Source<'a> {
    Stdin,
    File(&'a Path),
}

impl<'a> Source<'a> {
    /// The file path, or `None` for stdin.
    pub fn path(self) -> Option<&'a Path> {
        match self {
            Source::Stdin => None,
            Source::File(path) => Some(path),
        }
    }
}

impl fmt::Display for Source<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Source::Stdin => f.write_str("stdin"),
            Source::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Where output bytes go.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Destination<'a> {
    Stdout,
    File(&'a Path),
}

impl<'a> Destination<'a> {
    /// The file path, or `None` for stdout.
    pub fn path(self) -> Option<&'a Path> {
        match self {
            Destination::Stdout => None,
            Destination::File(path) => Some(path),
        }
    }
}

impl fmt::Display for Destination<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Destination::Stdout => f.write_str("stdout"),
            Destination::File(path) => write!(f, "{}", path.display()),
        }
    }
}

// ---------------------------------------------------------------------------
// Source
// ---------------------------------------------------------------------------

/// Read the whole of `src` into memory.
pub fn read_src(src: Source<'_>) -> io::Result<Vec<u8>> {
    let mut data = Vec::new();
    let path = match src {
        Source::Stdin => {
            displaylevel!(4, "Using stdin for input\n");
            io::stdin().lock().read_to_end(&mut data)?;
            return Ok(data);
        }
        Source::File(path) => path,
    };

    if path.is_dir() {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("{}: is a directory", path.display()),
        ));
    }

    File::open(path)?.read_to_end(&mut data)?;
    Ok(data)
}

// ---------------------------------------------------------------------------
// Destination
// ---------------------------------------------------------------------------

/// A destination produced by [`open_dst_file`]: a regular file or stdout.
pub struct DstFile {
    inner: Box<dyn Write>,
}

impl Write for DstFile {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.inner.write(buf)
    }
    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}

/// Ask on stderr whether `path` may be overwritten. Only `y`/`Y` agrees.
fn confirm_overwrite(path: &Path) -> io::Result<bool> {
    eprint!(
        "{} already exists; do you want to overwrite (y/N) ? ",
        path.display()
    );
    io::stderr().flush()?;
    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    Ok(matches!(line.trim_start().chars().next(), Some('y' | 'Y')))
}

/// Open `dst` for writing.
///
/// An existing file is only replaced when `prefs.overwrite` is set, or when
/// the user agrees at an interactive prompt. The prompt is shown only if
/// stdin is a terminal and the display level is above 1; otherwise the call
/// fails with [`io::ErrorKind::AlreadyExists`]. Missing parent directories
/// are created.
pub fn open_dst_file(dst: Destination<'_>, prefs: &Prefs) -> io::Result<DstFile> {
    let target = match dst {
        Destination::Stdout => {
            displaylevel!(4, "Using stdout for output\n");
            return Ok(DstFile {
                inner: Box::new(io::stdout().lock()),
            });
        }
        Destination::File(path) => path,
    };

    if !prefs.overwrite && target.exists() {
        let may_prompt =
            crate::cli::constants::display_level() > 1 && io::stdin().is_terminal();
        if !may_prompt || !confirm_overwrite(target)? {
            return Err(io::Error::new(
                io::ErrorKind::AlreadyExists,
                format!("{}: already exists; not overwritten", target.display()),
            ));
        }
    }

    if let Some(parent) = target.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }

    let f = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(target)?;
    Ok(DstFile {
        inner: Box::new(BufWriter::new(f)),
    })
}

/// Write `data` to `dst` in one go.
pub fn write_dst(dst: Destination<'_>, data: &[u8], prefs: &Prefs) -> io::Result<()> {
    let mut out = open_dst_file(dst, prefs)?;
    out.write_all(data)?;
    out.flush()
}
