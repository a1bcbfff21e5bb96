// prefs.rs: Per-run preferences for the file I/O layer.
//
// Built once by the argument parser and passed by reference to every file
// operation; nothing here is global.

use crate::codec::Algorithm;

/// Options that shape how files are read, transformed, and written.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Prefs {
    /// Algorithm named on the command line or in the environment.
    /// `None` means auto-detect per input.
    pub algorithm: Option<Algorithm>,
    /// Overwrite existing destination files without asking.
    pub overwrite: bool,
    /// Allow writing compressed data to a terminal.
    pub force_stdout: bool,
    /// Delete each source file after it was processed successfully.
    pub remove_src: bool,
}

impl Prefs {
    pub fn set_algorithm(&mut self, algorithm: Option<Algorithm>) -> Option<Algorithm> {
        self.algorithm = algorithm;
        self.algorithm
    }

    pub fn set_overwrite(&mut self, yes: bool) -> bool {
        self.overwrite = yes;
        self.overwrite
    }

    pub fn set_force_stdout(&mut self, yes: bool) -> bool {
        self.force_stdout = yes;
        self.force_stdout
    }

    pub fn set_remove_src(&mut self, yes: bool) -> bool {
        self.remove_src = yes;
        self.remove_src
    }
}
