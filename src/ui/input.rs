//! Input handling for interactive stepping

use std::io::{self, BufRead, Write};

use log::debug;

use crate::simulation::Timeline;

/// A navigation command typed by the user
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Next,
    Previous,
    Refresh,
    Quit,
}

impl Command {
    /// Parse one line of input. An empty line means "next".
    pub fn parse(line: &str) -> Option<Self> {
        match line.trim().to_ascii_lowercase().as_str() {
            "" | "n" | "next" => Some(Command::Next),
            "p" | "prev" | "previous" => Some(Command::Previous),
            "r" | "refresh" => Some(Command::Refresh),
            "q" | "quit" | "exit" => Some(Command::Quit),
            _ => None,
        }
    }
}

/// Read commands from `input` until quit or end of input.
///
/// Frames are drawn by the timeline's renderer; prompts and notices go to
/// `output`.
pub fn run_interactive<R, W>(timeline: &mut Timeline, input: R, mut output: W) -> io::Result<()>
where
    R: BufRead,
    W: Write,
{
    writeln!(output, "Commands: [n]ext, [p]rev, [r]efresh, [q]uit")?;
    timeline.refresh();

    for line in input.lines() {
        let line = line?;
        let Some(command) = Command::parse(&line) else {
            writeln!(output, "Unknown command: {}", line.trim())?;
            continue;
        };
        debug!("Command {:?} at t={}", command, timeline.current_time());

        match command {
            Command::Next => {
                if !timeline.advance() {
                    writeln!(output, "Already at the last time step")?;
                }
            }
            Command::Previous => {
                if !timeline.retreat() {
                    writeln!(output, "Already at the first time step")?;
                }
            }
            Command::Refresh => timeline.refresh(),
            Command::Quit => break,
        }
        output.flush()?;
    }

    Ok(())
}
