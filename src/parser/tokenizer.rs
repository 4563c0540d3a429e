//! Streaming tokenizer for the two-line group record format

use std::io::{BufReader, Chain, Cursor, Read};

use encoding_rs::Encoding;

use super::encoding::{detect_code_page, CODEPAGE_PROBE_LIMIT};
use super::value::{GroupRecord, Value};
use crate::error::{DxfError, Result};

/// Turns a byte stream into a sequence of [`GroupRecord`]s.
///
/// Records are consumed two physical lines at a time: the first line
/// (trimmed) is the group code, the second (trimmed) is the raw value.
/// The tokenizer is purely sequential and single-pass - the only
/// buffering happens up front for the codepage probe, after which the
/// buffered head is replayed in front of the remaining stream. It never
/// seeks.
pub struct Tokenizer<R: Read> {
    reader: BufReader<Chain<Cursor<Vec<u8>>, R>>,
    encoding: Option<&'static Encoding>,
    line_number: usize,
}

impl<R: Read> Tokenizer<R> {
    /// Create a tokenizer that auto-detects the encoding from the stream
    /// head (see [`detect_code_page`]). Detection failure falls back to
    /// default decoding, never to an error.
    pub fn new(input: R) -> Result<Self> {
        Self::build(input, None)
    }

    /// Create a tokenizer with an explicit encoding, skipping detection.
    pub fn with_encoding(input: R, encoding: &'static Encoding) -> Result<Self> {
        Self::build(input, Some(encoding))
    }

    fn build(mut input: R, explicit: Option<&'static Encoding>) -> Result<Self> {
        let mut head = Vec::with_capacity(CODEPAGE_PROBE_LIMIT);
        let mut chunk = [0u8; 1024];
        while head.len() < CODEPAGE_PROBE_LIMIT {
            let want = (CODEPAGE_PROBE_LIMIT - head.len()).min(chunk.len());
            match input.read(&mut chunk[..want]) {
                Ok(0) => break,
                Ok(read) => head.extend_from_slice(&chunk[..read]),
                Err(e) if e.kind() == std::io::ErrorKind::Interrupted => continue,
                // a probe fault falls back to default decoding; a
                // persistent stream error resurfaces during the parse
                Err(_) => break,
            }
        }

        let encoding = explicit.or_else(|| detect_code_page(&head));

        Ok(Tokenizer {
            reader: BufReader::new(Cursor::new(head).chain(input)),
            encoding,
            line_number: 0,
        })
    }

    /// The encoding in effect, if any non-default one was set or detected.
    pub fn encoding(&self) -> Option<&'static Encoding> {
        self.encoding
    }

    /// The 1-based number of the last physical line read.
    pub fn line_number(&self) -> usize {
        self.line_number
    }

    /// Read a single physical line, decoded and trimmed.
    ///
    /// UTF-8 is tried first, then the configured encoding, then Latin-1
    /// (a 1:1 byte-to-char mapping) so undecodable bytes degrade instead
    /// of failing the parse.
    fn read_line(&mut self) -> Result<Option<String>> {
        let mut bytes = Vec::new();
        let mut byte = [0u8; 1];
        loop {
            match self.reader.read(&mut byte)? {
                0 => {
                    if bytes.is_empty() {
                        return Ok(None);
                    }
                    break;
                }
                _ => {
                    if byte[0] == b'\n' {
                        break;
                    }
                    bytes.push(byte[0]);
                }
            }
        }

        self.line_number += 1;

        let line = match String::from_utf8(bytes) {
            Ok(s) => s,
            Err(e) => {
                let bytes = e.into_bytes();
                if let Some(enc) = self.encoding {
                    let (decoded, _, _) = enc.decode(&bytes);
                    decoded.into_owned()
                } else {
                    bytes.iter().map(|&b| b as char).collect()
                }
            }
        };

        Ok(Some(line.trim().to_string()))
    }

    /// Read the next group record, or `None` at end of stream.
    ///
    /// A code line that does not parse as an integer is fatal; the error
    /// carries the 1-based physical line number and the offending text.
    pub fn next_record(&mut self) -> Result<Option<GroupRecord>> {
        let code_line = match self.read_line()? {
            Some(line) => line,
            None => return Ok(None),
        };

        let code = code_line
            .parse::<i32>()
            .map_err(|_| DxfError::InvalidGroupCode {
                line: self.line_number,
                value: code_line,
            })?;

        let value_line = self.read_line()?.ok_or(DxfError::UnexpectedEof {
            code,
            line: self.line_number,
        })?;

        Ok(Some(GroupRecord {
            code,
            value: Value::new(expand_control_sequences(&value_line)),
        }))
    }
}

/// Expand the DXF caret control sequences in a value string.
fn expand_control_sequences(value: &str) -> String {
    if !value.contains('^') {
        return value.to_string();
    }
    value
        .replace("^J", "\n")
        .replace("^M", "\r")
        .replace("^I", "\t")
        .replace("^ ", "^")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn tokenizer(data: &str) -> Tokenizer<Cursor<Vec<u8>>> {
        Tokenizer::new(Cursor::new(data.as_bytes().to_vec())).unwrap()
    }

    #[test]
    fn test_read_simple_pair() {
        let mut t = tokenizer("0\nSECTION\n");
        let record = t.next_record().unwrap().unwrap();
        assert_eq!(record.code, 0);
        assert_eq!(record.value.as_str(), "SECTION");
        assert!(t.next_record().unwrap().is_none());
    }

    #[test]
    fn test_trims_and_handles_crlf() {
        let mut t = tokenizer(" 10 \r\n 5.5 \r\n");
        let record = t.next_record().unwrap().unwrap();
        assert_eq!(record.code, 10);
        assert_eq!(record.value.as_f64().unwrap(), 5.5);
    }

    #[test]
    fn test_bad_code_line_is_fatal_with_line_number() {
        let mut t = tokenizer("0\nSECTION\nBAD\nVALUE\n");
        t.next_record().unwrap();
        let err = t.next_record().unwrap_err();
        match err {
            DxfError::InvalidGroupCode { line, value } => {
                assert_eq!(line, 3);
                assert_eq!(value, "BAD");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_truncated_pair() {
        let mut t = tokenizer("10\n");
        let err = t.next_record().unwrap_err();
        assert!(matches!(err, DxfError::UnexpectedEof { code: 10, .. }));
    }

    #[test]
    fn test_control_sequences() {
        let mut t = tokenizer("1\nLine1^JLine2^MLine3\n");
        let record = t.next_record().unwrap().unwrap();
        assert_eq!(record.value.as_str(), "Line1\nLine2\rLine3");
    }

    #[test]
    fn test_detects_encoding_from_header() {
        let data = "0\nSECTION\n2\nHEADER\n9\n$DWGCODEPAGE\n3\nANSI_1251\n0\nENDSEC\n";
        let t = tokenizer(data);
        assert_eq!(t.encoding(), Some(encoding_rs::WINDOWS_1251));
    }

    #[test]
    fn test_decodes_with_detected_encoding() {
        // layer name "Стена" in windows-1251 bytes, after the declaration
        let mut data = Vec::new();
        data.extend_from_slice(
            b"0\nSECTION\n2\nHEADER\n9\n$DWGCODEPAGE\n3\nANSI_1251\n0\nENDSEC\n8\n",
        );
        data.extend_from_slice(&[0xD1, 0xF2, 0xE5, 0xED, 0xE0]);
        data.extend_from_slice(b"\n");

        let mut t = Tokenizer::new(Cursor::new(data)).unwrap();
        let mut last = None;
        while let Some(record) = t.next_record().unwrap() {
            last = Some(record);
        }
        assert_eq!(last.unwrap().value.as_str(), "Стена");
    }

    #[test]
    fn test_undetected_encoding_falls_back_to_latin1() {
        let mut data = b"8\n".to_vec();
        data.push(0xE9); // 'é' in Latin-1, invalid UTF-8 on its own
        data.push(b'\n');
        let mut t = Tokenizer::new(Cursor::new(data)).unwrap();
        let record = t.next_record().unwrap().unwrap();
        assert_eq!(record.value.as_str(), "é");
    }

    #[test]
    fn test_explicit_encoding_skips_detection() {
        let data = b"8\n\xD1\xF2\n".to_vec();
        let mut t =
            Tokenizer::with_encoding(Cursor::new(data), encoding_rs::WINDOWS_1251).unwrap();
        let record = t.next_record().unwrap().unwrap();
        assert_eq!(record.value.as_str(), "Ст");
    }

    #[test]
    fn test_line_numbers_advance() {
        let mut t = tokenizer("0\nA\n10\n1.5\n");
        t.next_record().unwrap();
        assert_eq!(t.line_number(), 2);
        t.next_record().unwrap();
        assert_eq!(t.line_number(), 4);
    }
}
