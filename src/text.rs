//! Encoding of arbitrary-length text as a sequence of chunks.

use unicode_normalization::UnicodeNormalization;

use crate::chunk::{code_unit, decode_chunk_bytes, encode_chunk_bytes, CHUNK_LEN};
use crate::error::Result;

/// Convert text to code units, failing on the first character above U+00FF.
fn code_units(text: &str) -> Result<Vec<u8>> {
    let mut units = Vec::with_capacity(bytecount::num_chars(text.as_bytes()));
    for (index, ch) in text.chars().enumerate() {
        units.push(code_unit(ch, index)?);
    }
    Ok(units)
}

/// Encode raw code units, 4 at a time. The last chunk may be shorter and is padded with NUL.
pub fn encode_bytes(bytes: &[u8]) -> Vec<u32> {
    bytes.chunks(CHUNK_LEN).map(encode_chunk_bytes).collect()
}

/// Decode a word sequence back into raw code units.
pub fn decode_bytes(words: &[u32]) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(words.len() * CHUNK_LEN);
    for &word in words {
        bytes.extend_from_slice(&decode_chunk_bytes(word));
    }
    bytes
}

/// Encode text into one word per group of 4 characters, in order.
///
/// Empty text gives an empty sequence. Any character above U+00FF fails the whole call.
///
/// ```
/// assert_eq!(weird_text::encode("tacocat").unwrap(), vec![267487694, 125043731]);
/// ```
pub fn encode(text: &str) -> Result<Vec<u32>> {
    Ok(encode_bytes(&code_units(text)?))
}

/// Same as [`encode`], but the text is first put in Unicode normalization form C. Decomposed
/// sequences such as `"e\u{301}"` are composed into a single Latin-1 character where possible.
pub fn encode_normalized(text: &str) -> Result<Vec<u32>> {
    let composed: String = text.nfc().collect();
    encode(&composed)
}

/// Decode each word and concatenate the resulting chunks.
pub fn decode(words: &[u32]) -> String {
    decode_bytes(words).into_iter().map(char::from).collect()
}
