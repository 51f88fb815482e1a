//! Encoding of single chunks.
//!
//! A chunk is up to [`CHUNK_LEN`] code units. The four units `b0..b3` are laid out in the word
//! by bit plane: bit `p` of unit `i` lands at bit `p*4 + i`, so the byte index occupies the low
//! two bits of each output position.

use crate::error::{Error, Result};

/// Number of code units packed into one encoded word.
pub const CHUNK_LEN: usize = 4;

const UNIT_BITS: u32 = 8;

/// Convert a character to its code unit, failing if it is above U+00FF. `index` is only used for
/// error reporting.
pub(crate) fn code_unit(ch: char, index: usize) -> Result<u8> {
    u8::try_from(ch).map_err(|_| Error::UnsupportedChar { ch, index })
}

fn interleave(units: [u8; CHUNK_LEN]) -> u32 {
    let mut word = 0u32;
    for bit in 0..UNIT_BITS {
        for (i, &unit) in units.iter().enumerate() {
            let b = ((unit >> bit) & 1) as u32;
            word |= b << (bit * CHUNK_LEN as u32 + i as u32);
        }
    }
    word
}

fn deinterleave(word: u32) -> [u8; CHUNK_LEN] {
    let mut units = [0u8; CHUNK_LEN];
    for bit in 0..UNIT_BITS {
        for (i, unit) in units.iter_mut().enumerate() {
            let b = ((word >> (bit * CHUNK_LEN as u32 + i as u32)) & 1) as u8;
            *unit |= b << bit;
        }
    }
    units
}

/// Encode the first 4 code units of `input` into a word. Shorter input is padded with NUL.
pub fn encode_chunk_bytes(input: &[u8]) -> u32 {
    let mut units = [0u8; CHUNK_LEN];
    let len = input.len().min(CHUNK_LEN);
    units[..len].copy_from_slice(&input[..len]);
    interleave(units)
}

/// Decode a word back into its code units, with every trailing NUL removed.
pub fn decode_chunk_bytes(word: u32) -> Vec<u8> {
    let units = deinterleave(word);
    let len = units.iter().rposition(|&u| u != 0).map_or(0, |p| p + 1);
    units[..len].to_vec()
}

/// Encode the first 4 characters of `input` into a word.
///
/// Missing positions are treated as NUL, and anything past the fourth character is ignored. Fails
/// if one of the first 4 characters is above U+00FF.
///
/// ```
/// assert_eq!(weird_text::encode_chunk("foot").unwrap(), 267939702);
/// assert_eq!(weird_text::encode_chunk("").unwrap(), 0);
/// ```
pub fn encode_chunk(input: &str) -> Result<u32> {
    let mut units = [0u8; CHUNK_LEN];
    for (index, ch) in input.chars().take(CHUNK_LEN).enumerate() {
        units[index] = code_unit(ch, index)?;
    }
    Ok(interleave(units))
}

/// Decode a word back into a chunk of 0 to 4 characters. Trailing NULs are stripped, whether they
/// were padding or not. Every word decodes to something.
pub fn decode_chunk(word: u32) -> String {
    decode_chunk_bytes(word).into_iter().map(char::from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    const VECTORS: [(&str, u32); 8] = [
        ("foo", 124807030),
        (" foo", 250662636),
        ("foot", 267939702),
        ("BIRD", 251930706),
        ("....", 15794160),
        ("^^^^", 252706800),
        ("Woot", 266956663),
        ("no", 53490482),
    ];

    #[test]
    fn known_vectors() {
        for (text, word) in VECTORS {
            assert_eq!(encode_chunk(text).unwrap(), word, "encoding {:?}", text);
            assert_eq!(decode_chunk(word), text, "decoding {}", word);
        }
    }

    #[test]
    fn empty_and_short() {
        assert_eq!(encode_chunk("").unwrap(), 0);
        assert_eq!(decode_chunk(0), "");
        assert_eq!(decode_chunk_bytes(0), Vec::<u8>::new());
        for s in ["a", "ab", "abc", "abcd"] {
            assert_eq!(decode_chunk(encode_chunk(s).unwrap()), s);
        }
    }

    #[test]
    fn truncates_to_four() {
        assert_eq!(encode_chunk("foot").unwrap(), encode_chunk("footer").unwrap());
        assert_eq!(encode_chunk_bytes(b"foot"), encode_chunk_bytes(b"footer"));
        // Characters past the chunk are never looked at
        assert_eq!(encode_chunk("foot\u{1F600}").unwrap(), 267939702);
    }

    #[test]
    fn pads_with_nul() {
        assert_eq!(encode_chunk("no").unwrap(), encode_chunk("no\0\0").unwrap());
        assert_eq!(encode_chunk_bytes(b"no"), encode_chunk_bytes(b"no\0\0"));
    }

    #[test]
    fn bit_placement() {
        // Bit p of unit i goes to position p*4 + i
        for i in 0..CHUNK_LEN {
            for p in 0..8 {
                let mut units = [0u8; CHUNK_LEN];
                units[i] = 1 << p;
                assert_eq!(encode_chunk_bytes(&units), 1u32 << (p * 4 + i));
            }
        }
        assert_eq!(encode_chunk_bytes(&[0xFF; 4]), u32::MAX);
        assert_eq!(decode_chunk_bytes(u32::MAX), vec![0xFF; 4]);
    }

    #[test]
    fn strips_all_trailing_nul() {
        assert_eq!(decode_chunk_bytes(encode_chunk_bytes(b"a\0b\0")), b"a\0b".to_vec());
        assert_eq!(decode_chunk(encode_chunk("\0\0\0x").unwrap()), "\0\0\0x");
        assert_eq!(decode_chunk(encode_chunk("\0\0").unwrap()), "");
    }

    #[test]
    fn latin1_range() {
        let s = "\u{e9}t\u{e9}\u{ff}";
        assert_eq!(decode_chunk(encode_chunk(s).unwrap()), s);
        assert_eq!(encode_chunk("\u{e9}t\u{e9}").unwrap(), 1467109893);
    }

    #[test]
    fn rejects_wide_chars() {
        assert_eq!(
            encode_chunk("ab\u{100}").unwrap_err(),
            Error::UnsupportedChar { ch: '\u{100}', index: 2 }
        );
        assert!(encode_chunk("\u{1F600}").is_err());
    }

    #[test]
    fn random_words() {
        let mut rng = rand::thread_rng();
        for _ in 0..1000 {
            let word: u32 = rng.gen();
            let units = deinterleave(word);
            assert_eq!(interleave(units), word, "word {:#010x} should survive", word);
            let decoded = decode_chunk_bytes(word);
            assert!(decoded.len() <= CHUNK_LEN);
            assert_eq!(encode_chunk_bytes(&decoded), word);
        }
    }
}
