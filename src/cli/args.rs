//! Command-line argument parsing for `rlz`.
//!
//! [`Cli`] is the clap definition. [`parse_args`] reads `std::env::args()`,
//! [`parse_args_from`] takes an explicit argv for tests; both resolve the raw
//! options into a [`ParsedArgs`] ready for dispatch.

use clap::{ArgAction, Parser};

use crate::cli::constants::{display_level_for, DASH_MARK};
use crate::cli::op_mode::{init_algorithm, OpMode};
use crate::codec::Algorithm;
use crate::io::prefs::Prefs;

#[derive(Debug, Parser)]
#[command(name = "rlz")]
#[command(about = "Run-length and LZ78 dictionary compression for files and streams")]
#[command(version)]
#[command(after_long_help = r#"
EXAMPLES:
    # Compress a file, algorithm chosen from its type
    rlz compress notes.txt notes.txt.rle

    # Compress every text file in a tree into dist/
    rlz compress "src/**/*.txt" dist

    # Force LZ and write to stdout
    rlz compress -a lz -c image.png > image.png.lz

    # Restore a file; the extension selects the algorithm
    rlz decompress notes.txt.rle notes.txt

    # Decompress a whole directory in place, removing the sources
    rlz decompress --rm archive/

ENVIRONMENT:
    RLZ_ALGORITHM   default algorithm when -a is absent (rle or lz)
    RLZ_LOG         tracing filter for diagnostics (default: rlz=warn)
"#)]
pub struct Cli {
    /// Operation to perform
    #[arg(value_enum)]
    pub operation: OpMode,

    /// Input file, directory, or glob pattern; stdin when omitted or "-"
    pub input: Option<String>,

    /// Output file, or output directory for several inputs; stdout when
    /// omitted for a single input
    pub output: Option<String>,

    /// Compression algorithm (auto-detected when omitted)
    #[arg(short, long, value_name = "rle|lz")]
    pub algorithm: Option<Algorithm>,

    /// Overwrite existing output files
    #[arg(short, long)]
    pub force: bool,

    /// Write to stdout, even to a terminal
    #[arg(short = 'c', long = "stdout")]
    pub to_stdout: bool,

    /// Remove each source file after success
    #[arg(long = "rm")]
    pub remove_src: bool,

    /// More output; repeat for more
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Less output; repeat for silence
    #[arg(short, long, action = ArgAction::Count)]
    pub quiet: u8,
}

/// Options resolved from a [`Cli`], consumed by the binary's dispatch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedArgs {
    pub op_mode: OpMode,
    /// `None` reads stdin.
    pub input: Option<String>,
    /// `None` writes stdout (single input) or beside each source (batch).
    pub output: Option<String>,
    pub prefs: Prefs,
    pub display_level: u32,
}

impl ParsedArgs {
    /// Resolve `cli`, with `env_algorithm` as the fallback for `-a`.
    pub fn resolve(cli: Cli, env_algorithm: Option<Algorithm>) -> Self {
        let not_dash = |s: &String| s != DASH_MARK;
        let mut prefs = Prefs::default();
        prefs.set_algorithm(cli.algorithm.or(env_algorithm));
        prefs.set_overwrite(cli.force);
        prefs.set_force_stdout(cli.to_stdout);
        prefs.set_remove_src(cli.remove_src);

        ParsedArgs {
            op_mode: cli.operation,
            input: cli.input.filter(not_dash),
            output: cli.output.filter(not_dash),
            prefs,
            display_level: display_level_for(cli.verbose, cli.quiet),
        }
    }
}

/// Parse `std::env::args()`.
pub fn parse_args() -> Result<ParsedArgs, clap::Error> {
    parse_args_from(std::env::args_os())
}

/// Parse an explicit argv (first element is the program name).
///
/// `--help` and `--version` come back as an `Err` whose kind is
/// `DisplayHelp` / `DisplayVersion`; `clap::Error::exit` prints them and
/// exits with status 0.
pub fn parse_args_from<I, T>(argv: I) -> Result<ParsedArgs, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    let cli = Cli::try_parse_from(argv)?;
    Ok(ParsedArgs::resolve(cli, init_algorithm()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn explicit_algorithm_beats_environment() {
        let cli = Cli::try_parse_from(["rlz", "compress", "-a", "rle", "in"]).unwrap();
        let args = ParsedArgs::resolve(cli, Some(Algorithm::Lz));
        assert_eq!(args.prefs.algorithm, Some(Algorithm::Rle));
    }

    #[test]
    fn environment_fills_missing_algorithm() {
        let cli = Cli::try_parse_from(["rlz", "compress", "in"]).unwrap();
        let args = ParsedArgs::resolve(cli, Some(Algorithm::Lz));
        assert_eq!(args.prefs.algorithm, Some(Algorithm::Lz));
    }

    #[test]
    fn dash_means_standard_stream() {
        let cli = Cli::try_parse_from(["rlz", "decompress", "-", "-"]).unwrap();
        let args = ParsedArgs::resolve(cli, None);
        assert_eq!(args.input, None);
        assert_eq!(args.output, None);
    }
}
