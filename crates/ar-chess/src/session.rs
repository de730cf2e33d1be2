//! Interactive prompt loop driving a [`Controller`].
//!
//! Each input line is parsed into a [`Command`] and handed to the
//! controller; the reply text is written back to the output.

use crate::command::Command;
use crate::config::Config;
use crate::render;
use chess_model::{Controller, MoveError, MoveOutcome, Selection};
use std::io::{self, BufRead, Write};

pub const HELP: &str = "\
Commands:
  RANK FILE   pick a square (1-based), e.g. `2 5`
  u           drop the current selection
  b           redraw the board
  h           show this help
  q           quit
";

/// Whether the loop should keep reading after a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    Continue(String),
    Quit,
}

/// A terminal play session.
#[derive(Debug, Clone)]
pub struct Session {
    controller: Controller,
    show_highlights: bool,
}

impl Session {
    pub fn new(controller: Controller, show_highlights: bool) -> Self {
        Session {
            controller,
            show_highlights,
        }
    }

    /// Creates a session over a fresh game using the configured promotion
    /// piece and highlight setting.
    pub fn from_config(config: &Config) -> Result<Self, MoveError> {
        let mut controller = Controller::new();
        controller.set_promotion(config.promotion)?;
        Ok(Self::new(controller, config.show_highlights))
    }

    pub fn controller(&self) -> &Controller {
        &self.controller
    }

    /// Draws the board followed by a status line.
    pub fn board_text(&self) -> String {
        let mut text = render::draw_controller(&self.controller, self.show_highlights);
        text.push_str(&self.status_line());
        text.push('\n');
        text
    }

    fn status_line(&self) -> String {
        let game = self.controller.game();
        if game.is_check() {
            format!("{} to move, in check", game.side_to_move())
        } else {
            format!("{} to move", game.side_to_move())
        }
    }

    /// Applies one command and returns the reply.
    pub fn handle(&mut self, command: Command) -> Step {
        match command {
            Command::Select(position) => {
                let reply = match self.controller.select_position(position) {
                    Selection::Selected(at) => {
                        let name = self
                            .controller
                            .selected_piece()
                            .map(|piece| piece.piece_type().to_string())
                            .unwrap_or_default();
                        format!("Selected {} at {}\n{}", name, at, self.board_text())
                    }
                    Selection::Moved(outcome) => {
                        format!("{}\n{}", describe_move(&outcome), self.board_text())
                    }
                    Selection::Rejected(error) => format!("Rejected: {}\n", error),
                    Selection::Ignored => format!(
                        "No {} piece at {}\n",
                        self.controller.game().side_to_move(),
                        position
                    ),
                };
                Step::Continue(reply)
            }
            Command::Unselect => {
                self.controller.unselect_position();
                Step::Continue("Selection cleared\n".to_string())
            }
            Command::Board => Step::Continue(self.board_text()),
            Command::Help => Step::Continue(HELP.to_string()),
            Command::Quit => Step::Quit,
        }
    }

    /// Reads commands from `input` until it ends or a quit command arrives.
    ///
    /// Unparseable lines, including ones that are not valid UTF-8, are
    /// reported and skipped.
    pub fn run<R: BufRead, W: Write>(&mut self, mut input: R, output: &mut W) -> io::Result<()> {
        output.write_all(self.board_text().as_bytes())?;

        let mut buf = Vec::new();
        loop {
            buf.clear();
            if input.read_until(b'\n', &mut buf)? == 0 {
                break;
            }
            let line = String::from_utf8_lossy(&buf);
            if line.trim().is_empty() {
                continue;
            }

            let step = match Command::parse(&line) {
                Ok(command) => self.handle(command),
                Err(error) => {
                    tracing::debug!(input = %line.trim(), %error, "unparsed input");
                    Step::Continue(format!("Error: {} (h for help)\n", error))
                }
            };

            match step {
                Step::Continue(reply) => output.write_all(reply.as_bytes())?,
                Step::Quit => break,
            }
            output.flush()?;
        }

        Ok(())
    }
}

fn describe_move(outcome: &MoveOutcome) -> String {
    let mut text = format!("Moved {} -> {}", outcome.from, outcome.to);
    if let Some(captured) = &outcome.captured {
        text.push_str(&format!(", captured {} {}", captured.color(), captured.piece_type()));
    }
    if let Some(promoted) = outcome.promoted_to {
        text.push_str(&format!(", promoted to {}", promoted));
    }
    text
}
