//! Parsing of raw protocol lines into structured messages.
//!
//! [`ParsedMessage`] borrows from the input line and extracts the three
//! fields the bot acts on: the sender's nickname, the command keyword,
//! and the trailing free-text argument. Parsing is pure and infallible;
//! lines that fit no known shape come back with absent/empty fields and
//! dispatch as no-ops.

use nom::{
    bytes::complete::take_while1,
    character::complete::char,
    combinator::opt,
    error::{context, VerboseError},
    sequence::preceded,
    IResult,
};

use crate::command::Command;

type ParseResult<'a, O> = IResult<&'a str, O, VerboseError<&'a str>>;

/// Parse the message prefix (the part after `:` and before the first space).
fn parse_prefix(input: &str) -> ParseResult<'_, &str> {
    context(
        "parsing message prefix",
        preceded(char(':'), take_while1(|c| c != ' ')),
    )(input)
}

/// A parsed IRC line with borrowed string slices.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParsedMessage<'a> {
    /// Nickname of the sender, when the line carries a `nick!user@host`
    /// prefix. Host and user detail is deliberately discarded.
    pub origin: Option<&'a str>,
    /// The classified command keyword; [`Command::Unknown`] when no
    /// recognized keyword appears anywhere in the line.
    pub command: Command,
    /// The trailing free-text payload after the first `" :"` marker,
    /// or empty when the line has none.
    pub argument: &'a str,
    /// The raw line, terminator already stripped.
    pub raw: &'a str,
}

impl<'a> ParsedMessage<'a> {
    /// Parse one protocol line. Never fails.
    pub fn parse(line: &'a str) -> ParsedMessage<'a> {
        let trimmed = line.trim_end_matches(['\r', '\n']);

        let prefix = match opt(parse_prefix)(trimmed) {
            Ok((_rest, prefix)) => prefix,
            Err(_) => None,
        };

        // Only a full nick!user@host prefix yields an origin; a bare
        // server-name prefix has no nickname to extract.
        let origin = prefix
            .and_then(|p| p.split_once('!'))
            .map(|(nick, _)| nick);

        let argument = trimmed
            .find(" :")
            .map(|at| &trimmed[at + 2..])
            .unwrap_or("");

        ParsedMessage {
            origin,
            command: Command::classify(trimmed),
            argument,
            raw: line,
        }
    }
}
