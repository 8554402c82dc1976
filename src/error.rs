//! Error types for the bot's protocol session.
//!
//! This module defines the fatal and recoverable error conditions of a
//! single IRC session: transport failures, framing violations, and
//! oversize outbound messages.

use thiserror::Error;

/// Convenience type alias for Results using [`ProtocolError`].
pub type Result<T, E = ProtocolError> = std::result::Result<T, E>;

/// Errors raised while reading from or writing to the session.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ProtocolError {
    /// I/O error during reading or writing.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// UTF-8 decoding error on a received line.
    #[error("decode error: {0}")]
    Decode(#[from] std::string::FromUtf8Error),

    /// Outbound message exceeded the protocol line limit.
    #[error("message too long: {0} bytes")]
    MessageTooLong(usize),

    /// A received line grew past the buffer limit without a terminator.
    #[error("line overflow: {actual} bytes buffered without a terminator (limit {limit})")]
    LineOverflow {
        /// Bytes buffered when the limit was hit.
        actual: usize,
        /// The configured line limit.
        limit: usize,
    },

    /// The peer closed the connection.
    #[error("connection closed by peer")]
    ConnectionClosed,
}
