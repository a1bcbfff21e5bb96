//! LZ78-family dictionary codec (longest-match, LZW-style code emission).
//!
//! Both sides start from the same 256 single-byte phrases (codes `0..=255`)
//! and append one phrase per emitted code, in discovery order, from code 256
//! upward. The decoder therefore rebuilds the encoder's dictionary from the
//! code stream alone; nothing else travels with the data.
//!
//! | Submodule  | Responsibility |
//! |------------|----------------|
//! | [`dict`]   | Per-call dictionaries: encoder trie and decoder span table. |
//! | [`encode`] | Greedy longest-match scan producing a [`CodeStream`]. |
//! | [`decode`] | Table rebuild, including the `next_code` self-reference case. |
//! | [`wire`]   | [`CodeStream`] and its comma-separated decimal text form. |
//!
//! # Scaling
//!
//! Dictionaries are never pruned. One phrase is added per emitted code, so a
//! call on `n` input bytes can hold up to `n` entries: memory is
//! O(input + dictionary) and callers feeding very large inputs should budget
//! for it. Once the `u32` code space is used up, both sides stop adding
//! phrases and keep coding with the frozen table.

pub mod decode;
pub mod dict;
pub mod encode;
pub mod wire;

pub use decode::{decode, decode_codes};
pub use dict::{FIRST_CODE, LAST_CODE};
pub use encode::{encode, encode_codes};
pub use wire::{CodeStream, SEPARATOR};
