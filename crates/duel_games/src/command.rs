//! Line command parsing.

use derive_more::{Display, Error};

/// A single driver command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `start A B`: start a game, A moves first.
    Start {
        /// First mover.
        user_a: String,
        /// Second mover.
        user_b: String,
    },
    /// `move A B MOVER X Y`
    Move {
        /// One user of the pair.
        user_a: String,
        /// The other user of the pair.
        user_b: String,
        /// Who is moving.
        mover: String,
        /// Row.
        x: i64,
        /// Column.
        y: i64,
    },
    /// `forfeit A B USER`
    Forfeit {
        /// One user of the pair.
        user_a: String,
        /// The other user of the pair.
        user_b: String,
        /// Who concedes.
        user: String,
    },
    /// `show A B [--json]`
    Show {
        /// One user of the pair.
        user_a: String,
        /// The other user of the pair.
        user_b: String,
        /// Print the snapshot as JSON.
        json: bool,
    },
    /// `clear A B`
    Clear {
        /// One user of the pair.
        user_a: String,
        /// The other user of the pair.
        user_b: String,
    },
    /// `list`
    List,
    /// `help`
    Help,
    /// `quit`
    Quit,
}

/// Error parsing a command line.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum ParseError {
    /// Unrecognized command word.
    #[display("unknown command '{name}' (try 'help')")]
    Unknown {
        /// The word that was given.
        name: String,
    },
    /// Wrong number of arguments.
    #[display("usage: {usage}")]
    Usage {
        /// Expected form.
        usage: &'static str,
    },
    /// A coordinate was not an integer.
    #[display("'{value}' is not a valid coordinate")]
    Coordinate {
        /// The offending text.
        value: String,
    },
}

/// Usage lines shown by `help`.
pub const HELP: &str = "\
start A B            start a game between A and B, A moves first
move A B MOVER X Y   place MOVER's piece at row X, column Y
forfeit A B USER     USER concedes the game
show A B [--json]    print the board
clear A B            remove the game
list                 list active games
quit                 exit";

impl Command {
    /// Parses one line. Blank lines and `#` comments yield `None`.
    pub fn parse(line: &str) -> Result<Option<Self>, ParseError> {
        let words: Vec<&str> = line.split_whitespace().collect();
        let Some((&name, args)) = words.split_first() else {
            return Ok(None);
        };
        if name.starts_with('#') {
            return Ok(None);
        }

        let command = match (name, args) {
            ("start", [a, b]) => Command::Start {
                user_a: a.to_string(),
                user_b: b.to_string(),
            },
            ("start", _) => return Err(ParseError::Usage { usage: "start A B" }),
            ("move", [a, b, mover, x, y]) => Command::Move {
                user_a: a.to_string(),
                user_b: b.to_string(),
                mover: mover.to_string(),
                x: coordinate(x)?,
                y: coordinate(y)?,
            },
            ("move", _) => {
                return Err(ParseError::Usage {
                    usage: "move A B MOVER X Y",
                });
            }
            ("forfeit", [a, b, user]) => Command::Forfeit {
                user_a: a.to_string(),
                user_b: b.to_string(),
                user: user.to_string(),
            },
            ("forfeit", _) => {
                return Err(ParseError::Usage {
                    usage: "forfeit A B USER",
                });
            }
            ("show", [a, b]) | ("show", [a, b, "--json"]) => Command::Show {
                user_a: a.to_string(),
                user_b: b.to_string(),
                json: args.len() == 3,
            },
            ("show", _) => {
                return Err(ParseError::Usage {
                    usage: "show A B [--json]",
                });
            }
            ("clear", [a, b]) => Command::Clear {
                user_a: a.to_string(),
                user_b: b.to_string(),
            },
            ("clear", _) => return Err(ParseError::Usage { usage: "clear A B" }),
            ("list", []) => Command::List,
            ("help", []) => Command::Help,
            ("quit" | "exit", []) => Command::Quit,
            _ => {
                return Err(ParseError::Unknown {
                    name: name.to_string(),
                });
            }
        };
        Ok(Some(command))
    }
}

fn coordinate(value: &str) -> Result<i64, ParseError> {
    value.parse().map_err(|_| ParseError::Coordinate {
        value: value.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_move() {
        assert_eq!(
            Command::parse("move alice bob alice 0 -1").unwrap(),
            Some(Command::Move {
                user_a: "alice".into(),
                user_b: "bob".into(),
                mover: "alice".into(),
                x: 0,
                y: -1,
            })
        );
    }

    #[test]
    fn test_parse_show_json() {
        assert_eq!(
            Command::parse("  show a b --json ").unwrap(),
            Some(Command::Show {
                user_a: "a".into(),
                user_b: "b".into(),
                json: true,
            })
        );
    }

    #[test]
    fn test_parse_forfeit() {
        assert_eq!(
            Command::parse("forfeit alice bob bob").unwrap(),
            Some(Command::Forfeit {
                user_a: "alice".into(),
                user_b: "bob".into(),
                user: "bob".into(),
            })
        );
        assert_eq!(
            Command::parse("forfeit alice bob"),
            Err(ParseError::Usage {
                usage: "forfeit A B USER"
            })
        );
    }

    #[test]
    fn test_blank_and_comment_lines() {
        assert_eq!(Command::parse("   ").unwrap(), None);
        assert_eq!(Command::parse("# opening").unwrap(), None);
    }

    #[test]
    fn test_errors() {
        assert_eq!(
            Command::parse("start alice"),
            Err(ParseError::Usage { usage: "start A B" })
        );
        assert_eq!(
            Command::parse("move a b a one 2"),
            Err(ParseError::Coordinate {
                value: "one".into()
            })
        );
        assert!(matches!(
            Command::parse("dance"),
            Err(ParseError::Unknown { .. })
        ));
    }
}
