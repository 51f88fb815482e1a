use std::fmt;

use serde::de;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Error {
    /// Occurs when text contains a character whose scalar value doesn't fit in a single code unit
    /// (anything above U+00FF). `index` is the character position within the input text.
    UnsupportedChar { ch: char, index: usize },
    /// Occurs when a transport string isn't a valid encoded sequence: malformed JSON, a JSON value
    /// that isn't an array, an element that isn't a 32-bit unsigned integer, or malformed base64.
    BadTransport(String),
    /// Decoded base64 payload wasn't a whole number of 4-byte words.
    BadLength { actual: usize },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Error::UnsupportedChar { ch, index } => write!(
                f,
                "Unsupported character {:?} (U+{:04X}) at position {}: only code units 0-255 can be encoded",
                ch, ch as u32, index
            ),
            Error::BadTransport(ref msg) => write!(f, "Invalid input: {}", msg),
            Error::BadLength { actual } => write!(
                f,
                "Invalid input: payload is {} bytes, expected a multiple of 4",
                actual
            ),
        }
    }
}

impl std::error::Error for Error {}

impl de::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::BadTransport(msg.to_string())
    }
}
