//! Parsing of terminal input lines into player commands.
//!
//! One command per line. The keyword is matched ignoring ASCII case; `name`
//! and `do` take the remainder of the line as their argument.

use archipelago_types::{ActivityKind, CycleDirection};

/// Text printed by the `help` command.
pub const HELP: &str = "\
Commands:
  left | right      choose the previous or next avatar
  name <text>       set the player name
  start             begin the game (needs a name)
  eat | sleep | clean | play
                    perform an activity
  do <activity>     perform an activity by name
  status            show the current screen again
  restart           discard this game and start over
  help              show this list
  quit              leave the game";

/// A parsed player command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Cycle the avatar selection.
    Cycle(CycleDirection),
    /// Replace the player name with the given text.
    Name(String),
    /// Leave onboarding.
    Start,
    /// Perform a known activity.
    Activity(ActivityKind),
    /// Perform an activity given by name; unknown names do nothing.
    Do(String),
    /// Render the current view again.
    Status,
    /// Start a new session.
    Restart,
    /// Print the command list.
    Help,
    /// End the program.
    Quit,
    /// A blank line.
    Empty,
    /// Anything else, kept verbatim for the hint.
    Unknown(String),
}

impl Command {
    /// Parse one input line.
    ///
    /// The argument of `name` is everything after the first whitespace
    /// character following the keyword, so names may contain and even
    /// consist of spaces. Keywords that take no argument are unknown when
    /// followed by extra text.
    pub fn parse(line: &str) -> Self {
        let line = line.trim_end_matches(['\r', '\n']);
        let trimmed = line.trim_start();
        if trimmed.trim_end().is_empty() {
            return Self::Empty;
        }

        let (keyword, rest) = trimmed
            .split_once(char::is_whitespace)
            .unwrap_or((trimmed, ""));

        match keyword.to_ascii_lowercase().as_str() {
            "name" => Self::Name(rest.to_owned()),
            "do" => Self::Do(rest.trim().to_owned()),
            bare if rest.trim().is_empty() => Self::bare(bare).unwrap_or_else(|| Self::unknown(line)),
            _ => Self::unknown(line),
        }
    }

    fn bare(keyword: &str) -> Option<Self> {
        let command = match keyword {
            "left" => Self::Cycle(CycleDirection::Left),
            "right" => Self::Cycle(CycleDirection::Right),
            "start" => Self::Start,
            "status" => Self::Status,
            "restart" => Self::Restart,
            "help" => Self::Help,
            "quit" | "exit" => Self::Quit,
            other => Self::Activity(ActivityKind::parse(other)?),
        };
        Some(command)
    }

    fn unknown(line: &str) -> Self {
        Self::Unknown(line.trim().to_owned())
    }
}
