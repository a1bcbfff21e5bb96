//! Command-line interface for the `rlz` binary.
//!
//! | Submodule     | Responsibility |
//! |---------------|---------------|
//! | [`constants`] | Program identity, the `DISPLAY_LEVEL` atomic, and the `displaylevel!` macro. |
//! | [`op_mode`]   | `OpMode`, the `RLZ_ALGORITHM` default, and output filename derivation. |
//! | [`args`]      | clap definition and `ParsedArgs`, the resolved runtime options. |
//!
//! Typical call sequence: `parse_args` → `ParsedArgs` → dispatch to the I/O layer.

pub mod constants;
pub mod op_mode;
pub mod args;
