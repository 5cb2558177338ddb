//! Executes driver commands against a registry.

use crate::command::{Command, HELP};
use anyhow::Result;
use duel_registry::{RegistryError, TicTacToeRegistry};
use duel_tictactoe::GameResult;
use std::io::{BufRead, Write};
use tracing::{debug, instrument};

/// What the read loop should do after a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Flow {
    /// Print the text and read the next line.
    Continue(String),
    /// Stop reading.
    Quit,
}

/// Line-driven front end over a [`TicTacToeRegistry`].
#[derive(Debug, Clone)]
pub struct Console {
    registry: TicTacToeRegistry,
}

impl Console {
    /// Creates a console over `registry`.
    pub fn new(registry: TicTacToeRegistry) -> Self {
        Self { registry }
    }

    /// Reads commands from `input` until end of input or `quit`, writing
    /// one reply per command to `output`.
    pub fn run(&self, input: impl BufRead, output: &mut impl Write, prompt: bool) -> Result<()> {
        if prompt {
            writeln!(output, "{HELP}")?;
            write!(output, "> ")?;
            output.flush()?;
        }
        for line in input.lines() {
            let line = line?;
            let reply = match Command::parse(&line) {
                Ok(Some(command)) => match self.execute(command)? {
                    Flow::Continue(text) => text,
                    Flow::Quit => break,
                },
                Ok(None) => String::new(),
                Err(e) => format!("error: {e}"),
            };
            if !reply.is_empty() {
                writeln!(output, "{reply}")?;
            }
            if prompt {
                write!(output, "> ")?;
                output.flush()?;
            }
        }
        Ok(())
    }

    /// Executes one command. Game-level failures become reply text; only
    /// output errors propagate.
    #[instrument(skip(self))]
    pub fn execute(&self, command: Command) -> Result<Flow> {
        let reply = match command {
            Command::Quit => return Ok(Flow::Quit),
            Command::Help => Ok(HELP.to_string()),
            Command::Start { user_a, user_b } => self
                .registry
                .start_game(&user_a, &user_b)
                .and_then(|handle| handle.snapshot())
                .map(|snapshot| format!("started {user_a} vs {user_b}\n{snapshot}")),
            Command::Move {
                user_a,
                user_b,
                mover,
                x,
                y,
            } => self.play(&user_a, &user_b, &mover, x, y),
            Command::Forfeit {
                user_a,
                user_b,
                user,
            } => self
                .registry
                .forfeit(&user_a, &user_b, &user)
                .map(|result| format!("{user} forfeits: {result}")),
            Command::Show {
                user_a,
                user_b,
                json,
            } => match self
                .registry
                .game_for(&user_a, &user_b)
                .and_then(|handle| handle.snapshot())
            {
                Ok(snapshot) if json => Ok(serde_json::to_string(&snapshot)?),
                other => other.map(|snapshot| snapshot.to_string()),
            },
            Command::Clear { user_a, user_b } => {
                self.registry.clear_game(&user_a, &user_b).map(|removed| {
                    if removed {
                        format!("cleared {user_a} vs {user_b}")
                    } else {
                        format!("no game between {user_a} and {user_b}")
                    }
                })
            }
            Command::List => self.registry.active_keys().map(|keys| {
                if keys.is_empty() {
                    "no active games".to_string()
                } else {
                    keys.iter()
                        .map(|key| key.to_string())
                        .collect::<Vec<_>>()
                        .join("\n")
                }
            }),
        };

        Ok(Flow::Continue(reply.unwrap_or_else(|e| {
            debug!(error = %e, "Command failed");
            format!("error: {e}")
        })))
    }

    fn play(
        &self,
        user_a: &str,
        user_b: &str,
        mover: &str,
        x: i64,
        y: i64,
    ) -> Result<String, RegistryError> {
        let (result, board) = self.registry.play(user_a, user_b, mover, x, y)?;
        Ok(match result {
            GameResult::Pending => board.to_string(),
            terminal => format!("{board}\n{user_a} vs {user_b} ended: {terminal}"),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn transcript(script: &str) -> String {
        let console = Console::new(TicTacToeRegistry::default());
        let mut output = Vec::new();
        console
            .run(Cursor::new(script.to_string()), &mut output, false)
            .unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn test_game_to_win() {
        let out = transcript(
            "start alice bob\n\
             move alice bob alice 0 0\n\
             move alice bob bob 1 0\n\
             move alice bob alice 0 1\n\
             move alice bob bob 1 1\n\
             move alice bob alice 0 2\n\
             list\n",
        );
        assert!(out.contains("started alice vs bob"));
        assert!(out.contains("O O O\nX X .\n. . .\ngame over: first player wins"));
        assert!(out.contains("alice vs bob ended: first player wins"));
        assert!(out.ends_with("no active games\n"));
    }

    #[test]
    fn test_errors_do_not_stop_loop() {
        let out = transcript(
            "move alice bob alice 0 0\n\
             start alice bob\n\
             move bob alice bob 0 0\n\
             move alice bob alice 5 0\n\
             bogus\n\
             show bob alice\n",
        );
        assert!(out.contains("error: No game in progress for alice$$bob"));
        assert!(out.contains("error: It's not player bob's turn (waiting for alice)"));
        assert!(out.contains("error: Board position 5 0 is out of range for a 3x3 board"));
        assert!(out.contains("error: unknown command 'bogus'"));
        assert!(out.ends_with("alice (O) to move\n"));
    }

    #[test]
    fn test_show_json_and_quit() {
        let out = transcript("start a b\nshow a b --json\nquit\nlist\n");
        let json_line = out
            .lines()
            .find(|line| line.starts_with('{'))
            .expect("json output");
        let value: serde_json::Value = serde_json::from_str(json_line).unwrap();
        assert_eq!(value["current_mover"], "a");
        assert_eq!(value["status"], "InProgress");
        assert!(!out.contains("a$$b"));
    }

    #[test]
    fn test_separator_in_name_reported() {
        let out = transcript("start a$$b c\nstart a b$$c\nlist\n");
        assert!(out.contains("error: User id \"a$$b\" must not contain the key separator \"$$\""));
        assert!(out.contains("error: User id \"b$$c\""));
        assert!(out.ends_with("no active games\n"));
    }
}
