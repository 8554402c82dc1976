//! Inbound IRC command classification.
//!
//! The bot recognizes a fixed subset of the protocol's commands; anything
//! else is [`Command::Unknown`] and dispatches as a no-op.
//!
//! Classification is a substring scan over the whole line, first match in
//! [`Command::PRIORITY`] order. This mirrors the historical behavior of
//! the bot rather than strict token parsing: a keyword embedded in a
//! message body (a PRIVMSG saying "JOIN us") can be misidentified.

/// An inbound command keyword.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    /// `PING` keepalive challenge.
    Ping,
    /// `JOIN` membership notification.
    Join,
    /// `MODE` change notification.
    Mode,
    /// `KICK` ejection notification.
    Kick,
    /// `PART` departure notification.
    Part,
    /// `QUIT` disconnect notification, treated like PART.
    Quit,
    /// `PRIVMSG` channel or private message.
    Privmsg,
    /// `NOTICE` server or user notice.
    Notice,
    /// No recognized keyword anywhere in the line.
    Unknown,
}

impl Command {
    /// Recognized keywords in match-priority order.
    ///
    /// A line containing several keywords classifies as the earliest
    /// entry here, so `PART` wins over `QUIT` and both win over
    /// `PRIVMSG`.
    pub const PRIORITY: [(Command, &'static str); 8] = [
        (Command::Ping, "PING"),
        (Command::Join, "JOIN"),
        (Command::Mode, "MODE"),
        (Command::Kick, "KICK"),
        (Command::Part, "PART"),
        (Command::Quit, "QUIT"),
        (Command::Privmsg, "PRIVMSG"),
        (Command::Notice, "NOTICE"),
    ];

    /// Classify a raw line by scanning for the first keyword in
    /// priority order. Never fails; unmatched lines are [`Unknown`].
    ///
    /// [`Unknown`]: Command::Unknown
    pub fn classify(line: &str) -> Command {
        for (command, keyword) in Self::PRIORITY {
            if line.contains(keyword) {
                return command;
            }
        }
        Command::Unknown
    }

    /// The wire keyword, or `"?"` for [`Command::Unknown`].
    pub fn keyword(&self) -> &'static str {
        Self::PRIORITY
            .iter()
            .find(|(command, _)| command == self)
            .map(|(_, keyword)| *keyword)
            .unwrap_or("?")
    }
}
