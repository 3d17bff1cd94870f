use std::str::FromStr;

use snake_engine::Direction;
use snake_engine::controller::{MAX_STEP_SPEED, MIN_STEP_SPEED};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RunnerCommand {
    Turn(Direction),
    Start,
    Pause,
    Reset,
    ToggleWraparound,
    Speed(u32),
    Show,
    Help,
    Quit,
}

#[derive(Debug, PartialEq, Eq)]
pub enum ParseCommandError {
    Empty,
    Unknown(String),
    MissingArgument(&'static str),
    InvalidSpeed(String),
}

impl std::fmt::Display for ParseCommandError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParseCommandError::Empty => write!(f, "Empty command"),
            ParseCommandError::Unknown(cmd) => {
                write!(f, "Unknown command '{}', type 'help' for the list", cmd)
            }
            ParseCommandError::MissingArgument(cmd) => write!(f, "'{}' needs an argument", cmd),
            ParseCommandError::InvalidSpeed(value) => write!(
                f,
                "Invalid speed '{}', expected {}..={}",
                value, MIN_STEP_SPEED, MAX_STEP_SPEED
            ),
        }
    }
}

impl std::error::Error for ParseCommandError {}

impl FromStr for RunnerCommand {
    type Err = ParseCommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut words = s.split_whitespace();
        let Some(name) = words.next() else {
            return Err(ParseCommandError::Empty);
        };

        let command = match name.to_ascii_lowercase().as_str() {
            "up" | "w" => RunnerCommand::Turn(Direction::Up),
            "down" | "s" => RunnerCommand::Turn(Direction::Down),
            "left" | "a" => RunnerCommand::Turn(Direction::Left),
            "right" | "d" => RunnerCommand::Turn(Direction::Right),
            "start" => RunnerCommand::Start,
            "pause" | "p" => RunnerCommand::Pause,
            "reset" | "r" => RunnerCommand::Reset,
            "wrap" => RunnerCommand::ToggleWraparound,
            "show" => RunnerCommand::Show,
            "help" | "?" => RunnerCommand::Help,
            "quit" | "q" => RunnerCommand::Quit,
            "speed" => {
                let value = words
                    .next()
                    .ok_or(ParseCommandError::MissingArgument("speed"))?;
                let speed = value
                    .parse::<u32>()
                    .ok()
                    .filter(|speed| (MIN_STEP_SPEED..=MAX_STEP_SPEED).contains(speed))
                    .ok_or_else(|| ParseCommandError::InvalidSpeed(value.to_string()))?;
                RunnerCommand::Speed(speed)
            }
            _ => return Err(ParseCommandError::Unknown(name.to_string())),
        };

        Ok(command)
    }
}

pub const HELP: &str = "\
Commands (one per line):
  up|w  down|s  left|a  right|d   turn the snake
  start                           start or resume
  pause|p                         pause
  reset|r                         deal a new game
  wrap                            toggle wraparound mode
  speed <1-10>                    change step speed
  show                            print the current board
  help|?                          print this list
  quit|q                          exit";
