//! The terminal game loop.
//!
//! A single task waits on two sources at once: the session's tick schedule
//! and the next input line. Whichever resolves first is applied to the
//! session to completion before the loop waits again, so a tick never
//! observes a half-applied command and vice versa.

use std::io::Write;

use archipelago_core::Session;
use tokio::io::{AsyncBufRead, AsyncBufReadExt as _};
use tracing::{debug, info};

use crate::command::{Command, HELP};
use crate::error::EngineError;
use crate::render::render;

/// What the loop does after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    /// Show the current view.
    Render,
    /// Nothing to redraw.
    Silent,
    /// Leave the loop.
    Quit,
}

/// Run the game until `quit` or end of input.
///
/// The current view is written to `out` on entry, after every command that
/// may change the state, and after every tick.
///
/// # Errors
///
/// Returns [`EngineError::Io`] if reading input or writing output fails.
/// A refused start is reported to the player and does not end the loop.
pub async fn run<R, W>(session: &mut Session, input: R, out: &mut W) -> Result<(), EngineError>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let mut lines = input.lines();
    show(session, out)?;

    loop {
        tokio::select! {
            () = session.next_tick() => {
                let outcome = session.on_tick();
                debug!(
                    day = outcome.state.day,
                    time = outcome.state.time,
                    "tick rendered"
                );
                show(session, out)?;
            }
            line = lines.next_line() => {
                let Some(line) = line? else {
                    info!(session = %session.id(), "input closed");
                    return Ok(());
                };
                let command = Command::parse(&line);
                match handle(session, &command, out) {
                    Ok(Flow::Render) => show(session, out)?,
                    Ok(Flow::Silent) => {}
                    Ok(Flow::Quit) => {
                        info!(session = %session.id(), "player quit");
                        return Ok(());
                    }
                    Err(EngineError::Start { source }) => {
                        debug!(error = %source, "start refused");
                        writeln!(out, "Cannot start: {source}.")?;
                        out.flush()?;
                    }
                    Err(e) => return Err(e),
                }
            }
        }
    }
}

/// Apply one command to the session.
fn handle<W: Write>(session: &mut Session, command: &Command, out: &mut W) -> Result<Flow, EngineError> {
    let flow = match command {
        Command::Cycle(direction) => {
            session.cycle_avatar(*direction);
            Flow::Render
        }
        Command::Name(name) => {
            session.set_player_name(name);
            Flow::Render
        }
        Command::Start => {
            session.start()?;
            Flow::Render
        }
        Command::Activity(kind) => {
            session.perform_activity(*kind);
            Flow::Render
        }
        Command::Do(name) => {
            session.perform_named_activity(name);
            Flow::Render
        }
        Command::Status => Flow::Render,
        Command::Restart => {
            session.restart();
            Flow::Render
        }
        Command::Help => {
            writeln!(out, "{HELP}")?;
            out.flush()?;
            Flow::Silent
        }
        Command::Quit => Flow::Quit,
        Command::Empty => Flow::Silent,
        Command::Unknown(text) => {
            debug!(input = text, "unknown command");
            writeln!(out, "Unknown command `{text}`. Type `help` for the list.")?;
            out.flush()?;
            Flow::Silent
        }
    };
    Ok(flow)
}

fn show<W: Write>(session: &Session, out: &mut W) -> Result<(), EngineError> {
    writeln!(out, "{}", render(&session.view()))?;
    out.flush()?;
    Ok(())
}
