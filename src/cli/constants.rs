// cli/constants.rs: Program identity, the display-level global, and the
// stderr notification macros shared by the CLI and the file I/O layer.

use std::sync::atomic::{AtomicU32, Ordering};

use crate::config::{DISPLAY_LEVEL_DEFAULT, DISPLAY_LEVEL_MAX};

// ── Identity ─────────────────────────────────────────────────────────────────
pub const PROGRAM_NAME: &str = "rlz";
pub const PROGRAM_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Sentinel accepted on the command line for stdin / stdout.
pub const DASH_MARK: &str = "-";

// ── Display level global ─────────────────────────────────────────────────────
//
// 0 = no output; 1 = errors only; 2 = normal; 3 = verbose (per-file sizes);
// 4 = debug. Everything is written to stderr so stdout can carry data.
pub static DISPLAY_LEVEL: AtomicU32 = AtomicU32::new(DISPLAY_LEVEL_DEFAULT);

/// Returns the current display level.
#[inline]
pub fn display_level() -> u32 {
    DISPLAY_LEVEL.load(Ordering::Relaxed)
}

/// Sets the display level, clamped to [`DISPLAY_LEVEL_MAX`].
#[inline]
pub fn set_display_level(level: u32) {
    DISPLAY_LEVEL.store(level.min(DISPLAY_LEVEL_MAX), Ordering::Relaxed);
}

/// Display level after applying `verbose` increments and `quiet` decrements
/// to the default.
pub fn display_level_for(verbose: u8, quiet: u8) -> u32 {
    (DISPLAY_LEVEL_DEFAULT + u32::from(verbose))
        .saturating_sub(u32::from(quiet))
        .min(DISPLAY_LEVEL_MAX)
}

// ── Display helpers ──────────────────────────────────────────────────────────

/// Print to stderr when the display level is at least `level`.
#[macro_export]
macro_rules! displaylevel {
    ($level:expr, $($arg:tt)*) => {
        if $crate::cli::constants::display_level() >= $level {
            eprint!($($arg)*);
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn program_name_constant() {
        assert_eq!(PROGRAM_NAME, "rlz");
    }

    #[test]
    fn display_level_for_counts_flags() {
        assert_eq!(display_level_for(0, 0), 2);
        assert_eq!(display_level_for(1, 0), 3);
        assert_eq!(display_level_for(0, 1), 1);
        assert_eq!(display_level_for(0, 5), 0);
        assert_eq!(display_level_for(9, 0), DISPLAY_LEVEL_MAX);
    }

    #[test]
    fn set_display_level_clamps() {
        // Other tests read the global; restore it afterwards.
        let prev = display_level();
        set_display_level(99);
        assert_eq!(display_level(), DISPLAY_LEVEL_MAX);
        set_display_level(prev);
    }
}
