use std::fs::File;
use std::io::prelude::*;
use std::io::{self, BufReader};
use std::path::Path;

#[macro_use]
extern crate nom;

#[macro_use]
extern crate clap;

#[macro_use]
extern crate log;

use clap::App;

use crate::decoder::decoder_errors::DecoderError;
use crate::decoder::HexLineDecoder;

pub mod decoder;
pub mod utils;

extern crate env_logger;

fn main() {
    env_logger::init();
    let yaml = load_yaml!("cli.yml");
    let matches = App::from_yaml(yaml).get_matches();
    let target_file = matches.value_of("INPUT_FILE");
    match run(target_file) {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            debug!("Decoding failed: {:?}", e);
            eprintln!("str2bin: {}", e);
            std::process::exit(1);
        }
    }
}

fn run(target_file: Option<&str>) -> Result<usize, DecoderError> {
    let line = match target_file {
        Some(filename) if filename != "-" => {
            info!("Reading first line of {}", filename);
            read_file_line(filename)?
        }
        _ => {
            info!("Reading first line of stdin");
            let stdin = io::stdin();
            let mut handle = stdin.lock();
            read_first_line(&mut handle)?
        }
    };
    debug!("Read line of {} characters", line.chars().count());

    let stdout = io::stdout();
    let mut out = stdout.lock();
    HexLineDecoder::new(&line).decode_to(&mut out)
}

fn read_file_line(tmp: &str) -> io::Result<String> {
    let filename = Path::new(tmp);
    let fh = File::open(filename)?;
    read_first_line(&mut BufReader::new(fh))
}

/// Reads one line and drops its terminator. Anything after it is left unread.
fn read_first_line<R: BufRead>(reader: &mut R) -> io::Result<String> {
    let mut buffer = String::new();
    reader.read_line(&mut buffer)?;
    if buffer.ends_with('\n') {
        buffer.pop();
        if buffer.ends_with('\r') {
            buffer.pop();
        }
    }
    Ok(buffer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn read_only_first_line() {
        let mut input = Cursor::new("4142\nzzzz\n");
        assert_eq!(read_first_line(&mut input).unwrap(), "4142");
    }

    #[test]
    fn read_crlf_line() {
        let mut input = Cursor::new("ff00\r\n");
        assert_eq!(read_first_line(&mut input).unwrap(), "ff00");
    }

    #[test]
    fn read_line_without_terminator() {
        let mut input = Cursor::new("4f");
        assert_eq!(read_first_line(&mut input).unwrap(), "4f");
    }

    #[test]
    fn read_empty_input() {
        let mut input = Cursor::new("");
        assert_eq!(read_first_line(&mut input).unwrap(), "");
    }

    #[test]
    fn read_non_utf8_input() {
        let mut input = Cursor::new(vec![0xffu8, 0xfe, b'\n']);
        assert_eq!(read_first_line(&mut input).is_ok(), false);
    }

    #[test]
    /// Lines after the first are never decoded, even when they are invalid
    fn decode_first_line_of_input() {
        let mut input = Cursor::new("48690a\nnot hex at all\n");
        let line = read_first_line(&mut input).unwrap();
        let mut out = vec![];
        let written = HexLineDecoder::new(&line).decode_to(&mut out);
        assert_eq!(written, Ok(3));
        assert_eq!(out, b"Hi\n".to_vec());
    }

    #[test]
    fn run_missing_file() {
        let result = run(Some("/nonexistent/str2bin-input"));
        match result {
            Err(DecoderError::Io { .. }) => {}
            other => panic!("unexpected result {:?}", other),
        }
    }
}
