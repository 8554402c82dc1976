//! TCP transport carrying framed IRC lines.

use futures_util::{SinkExt, StreamExt};
use tokio::net::TcpStream;
use tokio_util::codec::Framed;
use tracing::warn;

use crate::codec::LineCodec;
use crate::encode::Outbound;
use crate::error::ProtocolError;

/// One duplex connection to the server, owned by the session for its
/// whole lifetime.
pub struct Transport {
    framed: Framed<TcpStream, LineCodec>,
}

impl Transport {
    /// Connect to `host:port` and frame the stream with [`LineCodec`].
    pub async fn connect(host: &str, port: u16) -> Result<Self, ProtocolError> {
        let stream = TcpStream::connect((host, port)).await?;
        Ok(Self::from_stream(stream))
    }

    /// Wrap an already-connected stream.
    pub fn from_stream(stream: TcpStream) -> Self {
        if let Err(e) = Self::enable_keepalive(&stream) {
            warn!("failed to enable TCP keepalive: {}", e);
        }

        Self {
            framed: Framed::new(stream, LineCodec::new()),
        }
    }

    fn enable_keepalive(stream: &TcpStream) -> std::io::Result<()> {
        use socket2::{SockRef, TcpKeepalive};
        use std::time::Duration;

        let sock = SockRef::from(stream);
        let keepalive = TcpKeepalive::new()
            .with_time(Duration::from_secs(120))
            .with_interval(Duration::from_secs(30));

        sock.set_tcp_keepalive(&keepalive)
    }

    /// Read the next line, terminator stripped.
    ///
    /// Returns `Ok(None)` when the peer closes the connection.
    pub async fn read_line(&mut self) -> Result<Option<String>, ProtocolError> {
        match self.framed.next().await {
            Some(Ok(line)) => Ok(Some(line)),
            Some(Err(e)) => Err(e),
            None => Ok(None),
        }
    }

    /// Render `command` and transmit it, terminator included.
    ///
    /// # Errors
    ///
    /// [`ProtocolError::MessageTooLong`] when the command renders past
    /// the line limit; any I/O failure from the underlying stream.
    pub async fn send(&mut self, command: &Outbound) -> Result<(), ProtocolError> {
        let line = command.to_line()?;
        self.framed.send(line).await
    }
}
