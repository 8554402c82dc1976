//! # octetbot
//!
//! A persistent single-session IRC bot. It holds one TCP connection,
//! registers, joins a fixed channel list, and then reacts to a small
//! set of inbound commands: keepalive challenges get echoed back,
//! channel arrivals and departures get a broadcast greeting, and a
//! trigger token in channel messages summons a canned reply. Channel
//! activity is appended to a human-readable audit log.
//!
//! ## Quick start
//!
//! ```no_run
//! use octetbot::{AuditLog, Config, Session, Transport};
//!
//! # async fn run() -> anyhow::Result<()> {
//! let config = Config::load("octetbot.toml")?;
//! let transport = Transport::connect(&config.server, config.port).await?;
//! let audit = AuditLog::open(&config.audit_log)?;
//!
//! // Runs until the connection fails; there is no graceful shutdown.
//! Session::new(&config, transport, audit).run().await?;
//! # Ok(())
//! # }
//! ```

#![deny(clippy::all)]

pub mod audit;
pub mod codec;
pub mod command;
pub mod config;
pub mod dispatch;
pub mod encode;
pub mod error;
pub mod message;
pub mod session;
pub mod transport;

pub use self::audit::{AuditLog, AuditRecord};
pub use self::codec::{LineCodec, MAX_LINE_LEN};
pub use self::command::Command;
pub use self::config::{Config, ConfigError};
pub use self::dispatch::{Dispatcher, Reaction};
pub use self::encode::Outbound;
pub use self::error::ProtocolError;
pub use self::message::ParsedMessage;
pub use self::session::Session;
pub use self::transport::Transport;
