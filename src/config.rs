// config.rs: Compile-time defaults and environment variable names.
//
// Runtime overrides come from the command line first, then the environment
// variables named here, then these constants.

// Display level used when neither -v nor -q is given.
// 0 = silent, 1 = errors, 2 = normal, 3 = verbose, 4 = debug.
pub const DISPLAY_LEVEL_DEFAULT: u32 = 2;

// Highest meaningful display level.
pub const DISPLAY_LEVEL_MAX: u32 = 4;

// Extensions given to compressed outputs, one per algorithm.
pub const RLE_EXTENSION: &str = ".rle";
pub const LZ_EXTENSION: &str = ".lz";

// Appended to a decompressed output whose source has no known stream extension.
pub const DECODED_EXTENSION: &str = ".out";

// Bytes read from the head of an input to sniff its content type.
pub const DETECT_SAMPLE_SIZE: usize = 8 * 1024;

// Default algorithm tag when -a is absent ("rle" or "lz").
pub const ENV_ALGORITHM: &str = "RLZ_ALGORITHM";

// tracing-subscriber filter directives, e.g. "rlz=debug".
pub const ENV_LOG: &str = "RLZ_LOG";

// Filter used when ENV_LOG is unset or unparsable.
pub const LOG_FILTER_DEFAULT: &str = "rlz=warn";
