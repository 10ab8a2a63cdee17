//! # Commands
//!
//! Turns one line of user input into a [`Command`].
//!
//! ## Command Reference
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  amount <value>    Set the check amount ("50", "$1,234.50")             │
//! │  tip <percent>     Choose a tip: 10, 15, 20, 25, 30 or 0 ("15%" works) │
//! │  people <count>    Set the number of people (2-99)                      │
//! │  pick <index>      Choose from the people picker (0 = 2 people)         │
//! │  tips              List the tip choices                                 │
//! │  show              Show the current split                               │
//! │  reset             Back to an empty check                               │
//! │  help              This text                                            │
//! │  quit | exit       Leave                                                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Values are validated here, so a command that parses can always be applied.

use wesplit_core::validation::parse_check_amount;
use wesplit_core::{CheckAmount, PartySize, TipPercentage};

use crate::error::{AppError, AppResult};
use crate::state::InputEvent;

/// Help text listing every command.
pub const HELP: &str = "\
Commands:
  amount <value>   set the check amount
  tip <percent>    choose a tip (10, 15, 20, 25, 30, 0)
  people <count>   set the number of people (2-99)
  pick <index>     choose from the people picker (0 = 2 people)
  tips             list the tip choices
  show             show the current split
  reset            start over
  help             show this help
  quit             leave";

/// A parsed input line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Command {
    /// Change one input (or reset them)
    Input(InputEvent),
    /// Print the tip choices
    ListTips,
    /// Re-render the current split
    Show,
    Help,
    Quit,
}

/// Parses one line. Blank lines and `#` comments yield `None`.
///
/// ## Example
/// ```rust
/// use wesplit_terminal::commands::{parse, Command};
/// use wesplit_terminal::state::InputEvent;
///
/// let cmd = parse("pick 0").unwrap().unwrap();
/// match cmd {
///     Command::Input(InputEvent::PartyChanged(party)) => assert_eq!(party.count(), 2),
///     _ => unreachable!(),
/// }
/// assert!(parse("   ").unwrap().is_none());
/// assert!(parse("tip 17").is_err());
/// ```
pub fn parse(line: &str) -> AppResult<Option<Command>> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }

    let (verb, rest) = match line.split_once(char::is_whitespace) {
        Some((verb, rest)) => (verb, rest.trim()),
        None => (line, ""),
    };

    let command = match verb.to_lowercase().as_str() {
        "amount" => {
            let amount = CheckAmount::new(parse_check_amount(rest)?)?;
            Command::Input(InputEvent::CheckAmountChanged(amount))
        }
        "tip" => {
            let percent = parse_number::<u32>(verb, rest.trim_end_matches('%'))?;
            Command::Input(InputEvent::TipChanged(TipPercentage::new(percent)?))
        }
        "people" => {
            let count = parse_number::<u32>(verb, rest)?;
            Command::Input(InputEvent::PartyChanged(PartySize::new(count)?))
        }
        "pick" => {
            let index = parse_number::<usize>(verb, rest)?;
            Command::Input(InputEvent::PartyChanged(PartySize::from_picker_index(index)?))
        }
        "reset" => Command::Input(InputEvent::Reset),
        "tips" => Command::ListTips,
        "show" => Command::Show,
        "help" | "?" => Command::Help,
        "quit" | "exit" => Command::Quit,
        other => {
            return Err(AppError::unknown_command(format!(
                "unknown command '{}', type 'help' for a list",
                other
            )))
        }
    };

    Ok(Some(command))
}

/// Formats the tip choices in picker order.
pub fn tip_choices() -> String {
    let choices: Vec<String> = TipPercentage::ALL.iter().map(|tip| tip.to_string()).collect();
    format!("Tip choices: {}", choices.join(", "))
}

fn parse_number<T: std::str::FromStr>(verb: &str, value: &str) -> AppResult<T> {
    let value = value.trim();
    if value.is_empty() {
        return Err(AppError::unknown_command(format!(
            "'{}' needs a value, e.g. '{} 2'",
            verb, verb
        )));
    }

    value
        .parse()
        .map_err(|_| AppError::validation(format!("'{}' is not a whole number", value)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;

    fn input(line: &str) -> InputEvent {
        match parse(line).unwrap() {
            Some(Command::Input(event)) => event,
            other => panic!("expected an input event, got {:?}", other),
        }
    }

    #[test]
    fn test_amount() {
        assert_eq!(
            input("amount 50"),
            InputEvent::CheckAmountChanged(CheckAmount::new(50.0).unwrap())
        );
        assert_eq!(
            input("AMOUNT $1,234.50"),
            InputEvent::CheckAmountChanged(CheckAmount::new(1234.5).unwrap())
        );
        assert_eq!(input("amount"), InputEvent::CheckAmountChanged(CheckAmount::zero()));
    }

    #[test]
    fn test_tip() {
        assert_eq!(input("tip 15"), InputEvent::TipChanged(TipPercentage::new(15).unwrap()));
        assert_eq!(input("tip 0%"), InputEvent::TipChanged(TipPercentage::new(0).unwrap()));
    }

    #[test]
    fn test_party() {
        assert_eq!(input("people 4"), InputEvent::PartyChanged(PartySize::new(4).unwrap()));
        assert_eq!(input("pick 2"), InputEvent::PartyChanged(PartySize::new(4).unwrap()));
    }

    #[test]
    fn test_other_commands() {
        assert_eq!(input("reset"), InputEvent::Reset);
        assert_eq!(parse("tips").unwrap(), Some(Command::ListTips));
        assert_eq!(parse("show").unwrap(), Some(Command::Show));
        assert_eq!(parse("help").unwrap(), Some(Command::Help));
        assert_eq!(parse("exit").unwrap(), Some(Command::Quit));
        assert_eq!(parse("# comment").unwrap(), None);
    }

    #[test]
    fn test_rejected_values() {
        for line in ["amount -5", "amount lots", "amount 1e17", "tip 17", "tip x", "people 1", "people 100", "pick 98"] {
            let err = parse(line).unwrap_err();
            assert_eq!(err.code, ErrorCode::ValidationError, "{line}");
        }
    }

    #[test]
    fn test_unknown_and_incomplete() {
        assert_eq!(parse("split").unwrap_err().code, ErrorCode::UnknownCommand);
        assert_eq!(parse("people").unwrap_err().code, ErrorCode::UnknownCommand);
    }

    #[test]
    fn test_tip_choices() {
        assert_eq!(tip_choices(), "Tip choices: 10%, 15%, 20%, 25%, 30%, 0%");
    }
}
