//! Encoded sequences and their textual transport forms.
//!
//! An [`EncodedSequence`] can be carried between the encode and decode sides in two ways:
//!
//! - JSON: a compact array of decimal integers, like `[267487694,125043731]`.
//! - Base64: every word written as 4 little-endian bytes, then standard padded base64.

use std::fmt;
use std::str::FromStr;

use base64::{engine::general_purpose::STANDARD, Engine as _};
use byteorder::{ByteOrder, LittleEndian};
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

use crate::chunk::CHUNK_LEN;
use crate::error::{Error, Result};
use crate::text;

/// The textual forms an encoded sequence may take.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Transport {
    /// A JSON array of integers.
    #[default]
    Json,
    /// Standard base64 of the little-endian words.
    Base64,
}

impl Transport {
    pub fn name(self) -> &'static str {
        match self {
            Transport::Json => "json",
            Transport::Base64 => "base64",
        }
    }
}

impl fmt::Display for Transport {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Transport {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "json" => Ok(Transport::Json),
            "base64" => Ok(Transport::Base64),
            _ => Err(Error::BadTransport(format!(
                "unknown transport format {:?}, expected \"json\" or \"base64\"",
                s
            ))),
        }
    }
}

/// An ordered sequence of encoded words, one per chunk of the original text.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EncodedSequence(Vec<u32>);

impl EncodedSequence {
    /// Encode text into a new sequence. See [`crate::encode`].
    pub fn encode(text: &str) -> Result<Self> {
        text::encode(text).map(Self)
    }

    /// Decode the sequence back into text.
    pub fn decode(&self) -> String {
        text::decode(&self.0)
    }

    pub fn words(&self) -> &[u32] {
        &self.0
    }

    pub fn into_words(self) -> Vec<u32> {
        self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, u32> {
        self.0.iter()
    }

    /// Render in the given transport form.
    pub fn to_transport(&self, transport: Transport) -> Result<String> {
        match transport {
            Transport::Json => self.to_json(),
            Transport::Base64 => Ok(self.to_base64()),
        }
    }

    /// Parse from the given transport form. Surrounding whitespace is ignored.
    pub fn from_transport(s: &str, transport: Transport) -> Result<Self> {
        match transport {
            Transport::Json => Self::from_json(s),
            Transport::Base64 => Self::from_base64(s),
        }
    }

    /// Render as a compact JSON array, like `[267487694,125043731]`.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).map_err(|e| Error::BadTransport(e.to_string()))
    }

    /// Parse a JSON array of integers. Every element must be an integer in `0..=u32::MAX`.
    pub fn from_json(s: &str) -> Result<Self> {
        let value: JsonValue = serde_json::from_str(s.trim()).map_err(|e| {
            Error::BadTransport(format!(
                "Invalid JSON format for encoded array ({}), expected format: [123, 456, 789]",
                e
            ))
        })?;
        let JsonValue::Array(items) = value else {
            return Err(Error::BadTransport(
                "Input must be an array of integers".into(),
            ));
        };
        items
            .iter()
            .enumerate()
            .map(|(i, item)| {
                item.as_u64()
                    .and_then(|n| u32::try_from(n).ok())
                    .ok_or_else(|| {
                        Error::BadTransport(format!(
                            "element {} ({}) is not an integer between 0 and {}",
                            i,
                            item,
                            u32::MAX
                        ))
                    })
            })
            .collect::<Result<Vec<u32>>>()
            .map(Self)
    }

    pub fn to_base64(&self) -> String {
        let mut buf = vec![0u8; self.0.len() * CHUNK_LEN];
        LittleEndian::write_u32_into(&self.0, &mut buf);
        STANDARD.encode(buf)
    }

    pub fn from_base64(s: &str) -> Result<Self> {
        let buf = STANDARD
            .decode(s.trim())
            .map_err(|e| Error::BadTransport(format!("Invalid base64: {}", e)))?;
        if buf.len() % CHUNK_LEN != 0 {
            return Err(Error::BadLength { actual: buf.len() });
        }
        let mut words = vec![0u32; buf.len() / CHUNK_LEN];
        LittleEndian::read_u32_into(&buf, &mut words);
        Ok(Self(words))
    }
}

impl From<Vec<u32>> for EncodedSequence {
    fn from(words: Vec<u32>) -> Self {
        Self(words)
    }
}

impl From<EncodedSequence> for Vec<u32> {
    fn from(seq: EncodedSequence) -> Self {
        seq.0
    }
}

impl AsRef<[u32]> for EncodedSequence {
    fn as_ref(&self) -> &[u32] {
        &self.0
    }
}

impl<'a> IntoIterator for &'a EncodedSequence {
    type Item = &'a u32;
    type IntoIter = std::slice::Iter<'a, u32>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for EncodedSequence {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let json = self.to_json().map_err(|_| fmt::Error)?;
        f.write_str(&json)
    }
}

impl FromStr for EncodedSequence {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_json(s)
    }
}
