pub mod decoder_errors;
pub mod pair_parsers;

use std::io::Write;

use byteorder::WriteBytesExt;
use nom::types::CompleteStr;

use crate::decoder::decoder_errors::DecoderError;
use crate::decoder::pair_parsers::hex_pair;
use crate::utils::{from_hex, is_hex_digit};

/// Decodes one line of concatenated hex pairs into raw bytes.
///
/// The decoder never copies or shrinks the line; it keeps a cursor into it and
/// advances past two characters per decoded byte. When the line has an odd
/// length the final character is decoded on its own, so `"abc"` gives
/// `0xab, 0x0c`. The first invalid slice ends decoding for good.
#[derive(Debug)]
pub struct HexLineDecoder<'a> {
    line: &'a str,
    cursor: usize,
}

impl<'a> HexLineDecoder<'a> {
    pub fn new(line: &'a str) -> Self {
        HexLineDecoder { line, cursor: 0 }
    }

    /// Offset in bytes of the next slice to decode.
    pub fn position(&self) -> usize {
        self.cursor
    }

    /// Writes every decoded byte to `out` as soon as it is decoded and returns
    /// how many were written. Bytes written before a failure stay written.
    pub fn decode_to<W: Write>(&mut self, out: &mut W) -> Result<usize, DecoderError> {
        let mut written = 0;
        while let Some(byte) = self.next() {
            match byte {
                Ok(b) => {
                    out.write_u8(b)?;
                    written += 1;
                }
                Err(e) => {
                    out.flush()?;
                    return Err(e);
                }
            }
        }
        out.flush()?;
        debug!("Wrote {} bytes", written);
        Ok(written)
    }

    fn decode_slice(&self, offset: usize, slice: &str) -> Result<u8, DecoderError> {
        let invalid = |error: String| DecoderError::ParseError {
            offset,
            slice: slice.to_string(),
            error,
        };
        // from_str_radix tolerates a leading sign, the line may not contain one
        if let Some(c) = slice.chars().find(|c| !is_hex_digit(*c)) {
            return Err(invalid(format!("invalid hex digit {:?}", c)));
        }
        from_hex(slice).map_err(|e| invalid(e.to_string()))
    }
}

impl<'a> Iterator for HexLineDecoder<'a> {
    type Item = Result<u8, DecoderError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.cursor >= self.line.len() {
            return None;
        }
        let offset = self.cursor;
        let result = match hex_pair(CompleteStr(&self.line[offset..])) {
            Ok((rest, pair)) => {
                self.cursor = self.line.len() - rest.0.len();
                trace!("Decoding {:?} at offset {}", pair.0, offset);
                self.decode_slice(offset, pair.0)
            }
            Err(e) => Err(DecoderError::Syntax {
                offset,
                error: e.to_string(),
            }),
        };
        if result.is_err() {
            self.cursor = self.line.len();
        }
        Some(result)
    }
}

/// Decodes a whole line into a vector.
pub fn decode(line: &str) -> Result<Vec<u8>, DecoderError> {
    HexLineDecoder::new(line).collect()
}
