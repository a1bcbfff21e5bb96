//! Binary entry point for the `rlz` command-line tool.
//!
//! # Control flow
//!
//! 1. [`init_tracing`] installs the stderr diagnostics subscriber.
//! 2. [`parse_args`] processes the command line into a [`ParsedArgs`].
//! 3. [`run`] picks single-file or batch mode, applies the console guards,
//!    and returns the process exit code.

use std::io::IsTerminal;
use std::path::Path;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use rlz::cli::args::{parse_args, ParsedArgs};
use rlz::cli::constants::{set_display_level, PROGRAM_NAME, PROGRAM_VERSION};
use rlz::cli::op_mode::OpMode;
use rlz::config::{ENV_LOG, LOG_FILTER_DEFAULT};
use rlz::io::{
    process_file_into, process_filename, process_multiple_filenames, Destination, Source,
};
use rlz::util::{expand_inputs, is_glob_pattern};

fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_env(ENV_LOG)
                .unwrap_or_else(|_| LOG_FILTER_DEFAULT.into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .init();
}

/// Whether `input` names more than one file: a glob pattern or a directory.
fn is_batch_input(input: &str) -> bool {
    is_glob_pattern(input) || Path::new(input).is_dir()
}

/// Execute the operation selected by argument parsing.
///
/// Returns the process exit code (0 = success, 1 = any failure).
fn run(args: ParsedArgs) -> i32 {
    let ParsedArgs {
        op_mode,
        input,
        output,
        prefs,
        display_level,
    } = args;
    set_display_level(display_level);
    rlz::displaylevel!(3, "*** {} v{} ***\n", PROGRAM_NAME, PROGRAM_VERSION);

    // ── Batch mode: glob pattern or directory ──────────────────────────────
    if let Some(pattern) = input.as_deref().filter(|s| is_batch_input(s)) {
        if prefs.force_stdout {
            rlz::displaylevel!(1, "cannot write several files to stdout \n");
            return 1;
        }
        let files = match expand_inputs(&[pattern]) {
            Ok(files) => files,
            Err(e) => {
                rlz::displaylevel!(1, "Error: {}\n", e);
                return 1;
            }
        };
        rlz::displaylevel!(4, "{} files to {}\n", files.len(), op_mode);
        for (u, p) in files.iter().enumerate() {
            rlz::displaylevel!(4, "{} {}\n", u, p.display());
        }
        return match process_multiple_filenames(&files, output.as_deref().map(Path::new), op_mode, &prefs) {
            Ok(0) => 0,
            Ok(_) => 1,
            Err(e) => {
                rlz::displaylevel!(1, "Error: {:#}\n", e);
                1
            }
        };
    }

    // ── Single input ───────────────────────────────────────────────────────
    let src = match input.as_deref() {
        Some(name) => Source::File(Path::new(name)),
        None => Source::Stdin,
    };
    if src == Source::Stdin && std::io::stdin().is_terminal() {
        rlz::displaylevel!(1, "refusing to read from a console\n");
        return 1;
    }

    // An existing directory as OUTPUT receives a derived file name.
    if let Some(dir) = output.as_deref().map(Path::new).filter(|p| p.is_dir()) {
        if let (Source::File(path), false) = (src, prefs.force_stdout) {
            return match process_file_into(path, Some(dir), op_mode, &prefs) {
                Ok(_) => 0,
                Err(e) => {
                    rlz::displaylevel!(1, "Error: {:#}\n", e);
                    1
                }
            };
        }
    }

    let dst = match output.as_deref() {
        Some(name) if !prefs.force_stdout => Destination::File(Path::new(name)),
        _ => Destination::Stdout,
    };
    if dst == Destination::Stdout
        && op_mode == OpMode::Compress
        && std::io::stdout().is_terminal()
        && !prefs.force_stdout
    {
        rlz::displaylevel!(1, "refusing to write to console without -c \n");
        return 1;
    }

    match process_filename(src, dst, op_mode, &prefs) {
        Ok(_) => 0,
        Err(e) => {
            rlz::displaylevel!(1, "Error: {:#}\n", e);
            1
        }
    }
}

fn main() {
    init_tracing();
    let args = match parse_args() {
        Ok(args) => args,
        Err(e) => e.exit(),
    };
    std::process::exit(run(args));
}
