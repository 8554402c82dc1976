//! The session driver: registration, then the read/parse/dispatch loop.

use tracing::{debug, info, warn};

use crate::audit::AuditLog;
use crate::config::Config;
use crate::dispatch::Dispatcher;
use crate::encode::Outbound;
use crate::error::ProtocolError;
use crate::message::ParsedMessage;
use crate::transport::Transport;

/// One bot session over one connection.
///
/// The session owns the transport and the audit log exclusively; all
/// reads and writes happen sequentially on one task, so outbound lines
/// and audit entries keep arrival order without any locking.
pub struct Session {
    transport: Transport,
    audit: AuditLog,
    dispatcher: Dispatcher,
    nick: String,
    channels: Vec<String>,
}

impl Session {
    /// Assemble a session from its collaborators.
    pub fn new(config: &Config, transport: Transport, audit: AuditLog) -> Self {
        Self {
            transport,
            audit,
            dispatcher: Dispatcher::new(config.home_channel()),
            nick: config.nick.clone(),
            channels: config.channels.clone(),
        }
    }

    /// Register, join the configured channels, then loop forever.
    ///
    /// Only returns on a fatal condition: the peer closing the
    /// connection, an I/O failure, or a framing violation. There is no
    /// graceful shutdown path.
    pub async fn run(mut self) -> Result<(), ProtocolError> {
        self.register().await?;

        loop {
            let line = self
                .transport
                .read_line()
                .await?
                .ok_or(ProtocolError::ConnectionClosed)?;

            debug!(%line, "received");
            let msg = ParsedMessage::parse(&line);
            self.dispatch(&msg).await?;
        }
    }

    /// Announce identity, register, and join the channel list. Any
    /// failure here is fatal: without registration there is no session.
    async fn register(&mut self) -> Result<(), ProtocolError> {
        info!(nick = %self.nick, channels = ?self.channels, "registering");
        self.transport.send(&Outbound::nick(&self.nick)).await?;
        self.transport.send(&Outbound::user(&self.nick)).await?;
        self.transport.send(&Outbound::join(&self.channels)).await
    }

    /// Apply one message's reaction: transmit the reply, then persist
    /// the audit record, both before the next line is read.
    async fn dispatch(&mut self, msg: &ParsedMessage<'_>) -> Result<(), ProtocolError> {
        let reaction = self.dispatcher.react(msg);

        if let Some(reply) = reaction.reply {
            match self.transport.send(&reply).await {
                // An oversize rendering is a rejected operation, not a
                // session failure.
                Err(ProtocolError::MessageTooLong(bytes)) => {
                    warn!(bytes, command = %reply, "dropping oversize reply");
                }
                other => other?,
            }
        }

        if let Some(record) = reaction.audit {
            if let Err(e) = self.audit.append(&record) {
                warn!(error = %e, "audit write failed");
            }
        }

        Ok(())
    }
}
