use std::error::Error;
use std::fmt;
use std::io;

#[derive(Debug, Clone, PartialEq)]
pub enum DecoderError {
    /// A slice of the line is not a base-16 literal.
    ParseError {
        offset: usize,
        slice: String,
        error: String,
    },
    /// The pair parser rejected the remaining input. Never produced while the
    /// decoder stops before the remainder is empty.
    Syntax { offset: usize, error: String },
    /// Reading the line or writing a byte failed.
    Io { error: String },
}

impl fmt::Display for DecoderError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            DecoderError::ParseError {
                offset,
                slice,
                error,
            } => write!(
                f,
                "invalid literal for base-16 conversion at offset {}: {:?} ({})",
                offset, slice, error
            ),
            DecoderError::Syntax { offset, error } => {
                write!(f, "unable to split input at offset {}: {}", offset, error)
            }
            DecoderError::Io { error } => write!(f, "i/o error: {}", error),
        }
    }
}

impl Error for DecoderError {}

impl From<io::Error> for DecoderError {
    fn from(e: io::Error) -> Self {
        DecoderError::Io {
            error: e.to_string(),
        }
    }
}

#[test]
fn display_parse_error() {
    let e = DecoderError::ParseError {
        offset: 2,
        slice: "g2".to_string(),
        error: "invalid digit found in string".to_string(),
    };
    assert_eq!(
        e.to_string(),
        "invalid literal for base-16 conversion at offset 2: \"g2\" (invalid digit found in string)"
    );
}

#[test]
fn convert_io_error() {
    let e: DecoderError = io::Error::new(io::ErrorKind::BrokenPipe, "pipe closed").into();
    assert_eq!(
        e,
        DecoderError::Io {
            error: "pipe closed".to_string()
        }
    );
}
