//! CRLF line framing over a byte stream.
//!
//! [`LineCodec`] splits the inbound byte stream into protocol lines with
//! the terminator stripped, and appends the terminator to outbound lines.
//! A buffered line that reaches the protocol limit without a terminator
//! is a framing error, never a silent truncation: a truncated line would
//! corrupt the parse of everything after it.

use bytes::{BufMut, BytesMut};
use tokio_util::codec::{Decoder, Encoder};

use crate::error::ProtocolError;

/// Maximum length of one IRC line in bytes, including the CRLF terminator.
pub const MAX_LINE_LEN: usize = 512;

/// Codec for CRLF-terminated IRC lines bounded by [`MAX_LINE_LEN`].
#[derive(Debug, Clone)]
pub struct LineCodec {
    max_line_len: usize,
}

impl LineCodec {
    /// Create a codec with the protocol's 512-byte line limit.
    pub fn new() -> Self {
        Self {
            max_line_len: MAX_LINE_LEN,
        }
    }

    /// Create a codec with a custom line limit (used in tests).
    pub fn with_max_line_len(max_line_len: usize) -> Self {
        Self { max_line_len }
    }
}

impl Default for LineCodec {
    fn default() -> Self {
        Self::new()
    }
}

impl Decoder for LineCodec {
    type Item = String;
    type Error = ProtocolError;

    fn decode(&mut self, src: &mut BytesMut) -> Result<Option<String>, ProtocolError> {
        match src.iter().position(|&b| b == b'\n') {
            Some(pos) => {
                if pos + 1 > self.max_line_len {
                    return Err(ProtocolError::LineOverflow {
                        actual: pos + 1,
                        limit: self.max_line_len,
                    });
                }

                let frame = src.split_to(pos + 1);
                let line = &frame[..pos];
                let line = line.strip_suffix(b"\r").unwrap_or(line);

                Ok(Some(String::from_utf8(line.to_vec())?))
            }
            None if src.len() >= self.max_line_len => Err(ProtocolError::LineOverflow {
                actual: src.len(),
                limit: self.max_line_len,
            }),
            None => Ok(None),
        }
    }
}

impl Encoder<String> for LineCodec {
    type Error = ProtocolError;

    fn encode(&mut self, line: String, dst: &mut BytesMut) -> Result<(), ProtocolError> {
        if line.len() + 2 > self.max_line_len {
            return Err(ProtocolError::MessageTooLong(line.len() + 2));
        }

        dst.reserve(line.len() + 2);
        dst.put_slice(line.as_bytes());
        dst.put_slice(b"\r\n");
        Ok(())
    }
}
