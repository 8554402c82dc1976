//! Encoding of the bot's outbound commands.
//!
//! [`Outbound`] covers the five commands this client ever sends. Each
//! renders to one wire line without the terminator (the codec appends
//! CRLF) and is validated against the protocol's 512-byte limit before
//! transmission; oversize input is rejected, never truncated.

use std::fmt;

use crate::codec::MAX_LINE_LEN;
use crate::error::ProtocolError;

/// An outbound IRC command.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outbound {
    /// `NICK <nickname>` identity announcement.
    Nick(String),
    /// `USER <nickname> 0 * :<nickname>` registration. The nickname
    /// doubles as the realname placeholder.
    User(String),
    /// `JOIN <channel-list>` with channels comma-joined.
    Join(String),
    /// `PONG <token>` keepalive reply echoing the challenge token.
    Pong(String),
    /// `PRIVMSG <target> :<text>` channel broadcast.
    Privmsg(String, String),
}

impl Outbound {
    /// Identity announcement for `nick`.
    pub fn nick(nick: &str) -> Self {
        Outbound::Nick(nick.to_string())
    }

    /// User registration for `nick`.
    pub fn user(nick: &str) -> Self {
        Outbound::User(nick.to_string())
    }

    /// Join request for every channel in `channels`.
    pub fn join(channels: &[String]) -> Self {
        Outbound::Join(channels.join(","))
    }

    /// Keepalive reply echoing `token`.
    pub fn pong(token: &str) -> Self {
        Outbound::Pong(token.to_string())
    }

    /// Broadcast `text` to `target`.
    pub fn privmsg(target: &str, text: impl Into<String>) -> Self {
        Outbound::Privmsg(target.to_string(), text.into())
    }

    /// Render the wire line, without the terminator.
    ///
    /// # Errors
    ///
    /// Returns [`ProtocolError::MessageTooLong`] when the rendered line
    /// plus terminator would exceed [`MAX_LINE_LEN`].
    pub fn to_line(&self) -> Result<String, ProtocolError> {
        let line = self.to_string();
        if line.len() + 2 > MAX_LINE_LEN {
            return Err(ProtocolError::MessageTooLong(line.len() + 2));
        }
        Ok(line)
    }
}

impl fmt::Display for Outbound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outbound::Nick(nick) => write!(f, "NICK {}", nick),
            Outbound::User(nick) => write!(f, "USER {} 0 * :{}", nick, nick),
            Outbound::Join(channels) => write!(f, "JOIN {}", channels),
            Outbound::Pong(token) => write!(f, "PONG {}", token),
            Outbound::Privmsg(target, text) => write!(f, "PRIVMSG {} :{}", target, text),
        }
    }
}
