//! Rune decoding over a byte stream.
//!
//! `RuneReader` decodes UTF-8 one code point at a time and keeps a single
//! slot of pushback, so a rune handed back with `unread_rune` is returned by
//! the next `read_rune` without touching the stream.

use std::io::{BufReader, Read};

use crate::errors::errors::ErrorImpl;

pub struct RuneReader<R: Read> {
    inner: BufReader<R>,
    pending: Option<char>,
}

impl<R: Read> RuneReader<R> {
    pub fn new(reader: R) -> RuneReader<R> {
        RuneReader {
            inner: BufReader::new(reader),
            pending: None,
        }
    }

    /// Reads the next rune. `Ok(None)` is a clean end of stream.
    pub fn read_rune(&mut self) -> Result<Option<char>, ErrorImpl> {
        if let Some(rune) = self.pending.take() {
            return Ok(Some(rune));
        }

        let lead = match self.read_byte()? {
            Some(lead) => lead,
            None => return Ok(None),
        };

        if lead.is_ascii() {
            return Ok(Some(lead as char));
        }

        let width = utf8_width(lead).ok_or_else(|| ErrorImpl::InvalidEncoding { bytes: vec![lead] })?;
        let mut bytes = [lead, 0, 0, 0];

        for i in 1..width {
            match self.read_byte()? {
                Some(byte) => bytes[i] = byte,
                None => {
                    return Err(ErrorImpl::InvalidEncoding {
                        bytes: bytes[..i].to_vec(),
                    })
                }
            }
        }

        std::str::from_utf8(&bytes[..width])
            .ok()
            .and_then(|decoded| decoded.chars().next())
            .map(Some)
            .ok_or_else(|| ErrorImpl::InvalidEncoding {
                bytes: bytes[..width].to_vec(),
            })
    }

    /// Hands `rune` back so the next `read_rune` returns it. Only one rune
    /// may be pending at a time.
    pub fn unread_rune(&mut self, rune: char) {
        debug_assert!(self.pending.is_none(), "only one rune of pushback is supported");
        self.pending = Some(rune);
    }

    /// Any I/O error, `Interrupted` included, is a stream fault.
    fn read_byte(&mut self) -> Result<Option<u8>, ErrorImpl> {
        let mut byte = [0u8; 1];

        match self.inner.read(&mut byte)? {
            0 => Ok(None),
            _ => Ok(Some(byte[0])),
        }
    }
}

fn utf8_width(lead: u8) -> Option<usize> {
    match lead {
        0x00..=0x7F => Some(1),
        0xC2..=0xDF => Some(2),
        0xE0..=0xEF => Some(3),
        0xF0..=0xF4 => Some(4),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use std::io::{self, Cursor};

    use super::*;

    #[test]
    fn test_reads_multibyte_runes() {
        let mut reader = RuneReader::new(Cursor::new("aé€😀".as_bytes()));

        assert_eq!(reader.read_rune().unwrap(), Some('a'));
        assert_eq!(reader.read_rune().unwrap(), Some('é'));
        assert_eq!(reader.read_rune().unwrap(), Some('€'));
        assert_eq!(reader.read_rune().unwrap(), Some('😀'));
        assert_eq!(reader.read_rune().unwrap(), None);
        assert_eq!(reader.read_rune().unwrap(), None);
    }

    #[test]
    fn test_unread_rune() {
        let mut reader = RuneReader::new(Cursor::new("xy".as_bytes()));

        let first = reader.read_rune().unwrap().unwrap();
        reader.unread_rune(first);
        assert_eq!(reader.read_rune().unwrap(), Some('x'));
        assert_eq!(reader.read_rune().unwrap(), Some('y'));

        reader.unread_rune('y');
        assert_eq!(reader.read_rune().unwrap(), Some('y'));
        assert_eq!(reader.read_rune().unwrap(), None);
    }

    #[test]
    fn test_invalid_lead_byte() {
        let mut reader = RuneReader::new(Cursor::new(vec![0xFF, b'a']));

        match reader.read_rune() {
            Err(ErrorImpl::InvalidEncoding { bytes }) => assert_eq!(bytes, vec![0xFF]),
            other => panic!("Expected invalid encoding, got {:?}", other),
        }
    }

    #[test]
    fn test_truncated_sequence() {
        let mut reader = RuneReader::new(Cursor::new(vec![0xE2, 0x82]));

        match reader.read_rune() {
            Err(ErrorImpl::InvalidEncoding { bytes }) => assert_eq!(bytes, vec![0xE2, 0x82]),
            other => panic!("Expected invalid encoding, got {:?}", other),
        }
    }

    #[test]
    fn test_interrupted_read_is_not_retried() {
        struct Interrupted;

        impl Read for Interrupted {
            fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
                Err(io::Error::new(io::ErrorKind::Interrupted, "signal"))
            }
        }

        let mut reader = RuneReader::new(Interrupted);

        match reader.read_rune() {
            Err(ErrorImpl::StreamFault(err)) => assert_eq!(err.kind(), io::ErrorKind::Interrupted),
            other => panic!("Expected stream fault, got {:?}", other),
        }
    }

    #[test]
    fn test_bad_continuation_byte() {
        let mut reader = RuneReader::new(Cursor::new(vec![0xC3, b'a']));

        assert!(matches!(
            reader.read_rune(),
            Err(ErrorImpl::InvalidEncoding { .. })
        ));
    }
}
