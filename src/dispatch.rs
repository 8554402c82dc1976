//! The transition table mapping parsed messages to reactions.
//!
//! [`Dispatcher::react`] is pure: it inspects one message and returns at
//! most one outbound reply and at most one audit record. The session
//! driver applies both synchronously before reading the next line, so
//! every message is fully handled before the next one is framed.

use crate::audit::AuditRecord;
use crate::command::Command;
use crate::encode::Outbound;
use crate::message::ParsedMessage;

/// Trigger token that summons a canned reply in channel messages.
pub const TRIGGER: &str = "!octetbot";

/// Canned reply text, addressed to whoever sent the trigger.
pub const TRIGGER_REPLY: &str = "at your service.";

/// Channel used for audit records of server-level events.
const SERVER_CHANNEL: &str = "*";

/// What one dispatched message produces.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Reaction {
    /// Reply to transmit, if any.
    pub reply: Option<Outbound>,
    /// Audit record to persist, if any.
    pub audit: Option<AuditRecord>,
}

impl Reaction {
    fn none() -> Self {
        Self {
            reply: None,
            audit: None,
        }
    }
}

/// Maps each inbound message to its reaction. Holds only the immutable
/// session identity; each message is handled independently.
pub struct Dispatcher {
    home_channel: String,
}

impl Dispatcher {
    /// A dispatcher broadcasting to `home_channel`.
    pub fn new(home_channel: &str) -> Self {
        Self {
            home_channel: home_channel.to_string(),
        }
    }

    /// Decide the reaction to one message.
    ///
    /// Unknown commands, and membership events with no identifiable
    /// origin, are silent no-ops rather than errors.
    pub fn react(&self, msg: &ParsedMessage<'_>) -> Reaction {
        match msg.command {
            Command::Ping => Reaction {
                reply: Some(Outbound::pong(msg.argument)),
                audit: Some(AuditRecord::new(
                    SERVER_CHANNEL,
                    msg.origin.unwrap_or("server"),
                    format!("keepalive {}", msg.argument),
                )),
            },
            Command::Join => self.membership(msg, "has joined."),
            Command::Part | Command::Quit => self.membership(msg, "has left."),
            Command::Privmsg => {
                let reply = match msg.origin {
                    Some(who) if msg.argument == TRIGGER => Some(Outbound::privmsg(
                        &self.home_channel,
                        format!("{}: {}", who, TRIGGER_REPLY),
                    )),
                    _ => None,
                };
                Reaction {
                    reply,
                    audit: Some(AuditRecord::new(
                        &self.home_channel,
                        msg.origin.unwrap_or("server"),
                        msg.argument,
                    )),
                }
            }
            Command::Mode | Command::Kick | Command::Notice | Command::Unknown => Reaction::none(),
        }
    }

    fn membership(&self, msg: &ParsedMessage<'_>, event: &str) -> Reaction {
        match msg.origin {
            Some(who) => Reaction {
                reply: Some(Outbound::privmsg(
                    &self.home_channel,
                    format!("{} {}", who, event),
                )),
                audit: Some(AuditRecord::new(&self.home_channel, who, event)),
            },
            None => Reaction::none(),
        }
    }
}
