//! weird-text is a reversible text codec. Text is cut into chunks of 4 characters, and each chunk
//! is packed into a single 32-bit word by interleaving the bits of its 4 code units.
//!
//! - Every character must be a single code unit (0-255, the Latin-1 range). Text containing
//! 	anything wider is rejected rather than silently truncated.
//! - Short chunks are padded with NUL, and decoding strips every trailing NUL of a chunk. A NUL
//! 	that ends a chunk of the original text is therefore lost.
//! - Decoding is total: every `u32` decodes to some chunk of 0 to 4 characters.
//! - Encoded sequences travel between the two sides as a JSON array of integers or as base64.
//!
//! ```
//! use weird_text::{decode, encode};
//!
//! let words = encode("tacocat").unwrap();
//! assert_eq!(words, vec![267487694, 125043731]);
//! assert_eq!(decode(&words), "tacocat");
//! ```

mod chunk;
mod error;
mod sequence;
mod text;

pub use self::chunk::{decode_chunk, decode_chunk_bytes, encode_chunk, encode_chunk_bytes, CHUNK_LEN};
pub use self::error::{Error, Result};
pub use self::sequence::{EncodedSequence, Transport};
pub use self::text::{decode, decode_bytes, encode, encode_bytes, encode_normalized};
