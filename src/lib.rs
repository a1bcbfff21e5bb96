// rlz: run-length and LZ78 dictionary compression

pub mod error;
pub mod rle;
pub mod lz;
pub mod codec;
pub mod detect;
pub mod config;
pub mod util;
pub mod io;
pub mod cli;

pub use codec::{decode, encode, Algorithm, Codec, Report};
pub use error::{CodecError, CodecResult};

