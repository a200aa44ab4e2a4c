//! Command Line
//!
//! Arguments for the `rebate` binary, logging set-up, a terminal-bell feedback
//! capability, and the line-oriented interactive session. The session is a
//! presentation layer like any other: it turns input lines into [`Event`]s and
//! renders [`AppState::view`].

use std::{
    io::{self, BufRead, Write},
    path::PathBuf,
    str::FromStr,
};

use clap::Parser;
use thiserror::Error;
use tracing::{debug, info};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::{
    currency::{Currency, CurrencyError},
    feedback::{Feedback, FeedbackError},
    selector::PickerState,
    state::{AppState, Event},
    summary::{Summary, SummaryError, write_picker},
};

/// Arguments for the `rebate` binary
#[derive(Debug, Parser)]
#[command(name = "rebate", about = "Calculate savings and final price after a discount")]
pub struct CalculatorArgs {
    /// Original price, as typed; `,` and `.` are both decimal separators
    #[arg(short, long)]
    pub price: Option<String>,

    /// Discount percentage, clamped into 0..=100
    #[arg(short, long, allow_negative_numbers = true)]
    pub discount: Option<i32>,

    /// Currency symbol or ISO code, e.g. `€` or `GBP`
    #[arg(short, long)]
    pub currency: Option<Currency>,

    /// YAML file with the start-up discount and currency
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Read commands from stdin instead of printing once
    #[arg(short, long)]
    pub interactive: bool,

    /// Ring the terminal bell whenever the discount changes
    #[arg(long)]
    pub bell: bool,

    /// Log filter used when `RUST_LOG` is not set
    #[arg(long, default_value = "warn")]
    pub log_level: String,
}

impl CalculatorArgs {
    /// The events that replay the command-line values onto a fresh state.
    pub fn events(&self) -> Vec<Event> {
        let mut events = Vec::new();

        if let Some(price) = &self.price {
            events.push(Event::TextChanged(price.clone()));
        }

        if let Some(discount) = self.discount {
            events.push(Event::DiscountChanged(discount));
        }

        if let Some(currency) = self.currency {
            events.push(Event::CurrencyOptionTapped(currency));
        }

        events
    }
}

/// Installs the global tracing subscriber, writing to stderr.
///
/// `RUST_LOG` takes precedence over `default_level`.
///
/// # Errors
///
/// Returns an error if a global subscriber is already installed.
pub fn init_tracing(default_level: &str) -> Result<(), tracing_subscriber::util::TryInitError> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .compact()
                .with_target(true)
                .with_writer(io::stderr),
        )
        .with(filter)
        .try_init()
}

/// Feedback that rings the terminal bell on stderr.
#[derive(Debug, Default, Clone, Copy)]
pub struct TerminalBell;

impl Feedback for TerminalBell {
    fn selection_changed(&self) -> Result<(), FeedbackError> {
        let mut stderr = io::stderr().lock();

        stderr.write_all(b"\x07")?;
        stderr.flush()?;

        Ok(())
    }
}

/// Errors parsing a session line.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    /// The first word is not a command.
    #[error("unknown command `{0}`; type `help` for a list")]
    Unknown(String),

    /// The command needs an argument.
    #[error("`{0}` needs an argument")]
    MissingArgument(&'static str),

    /// The discount is not a whole number.
    #[error("discount must be a whole number, got `{0}`")]
    InvalidDiscount(String),

    /// The currency is not in the picker set.
    #[error(transparent)]
    Currency(#[from] CurrencyError),
}

/// One line of the interactive session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `price <text>`: replace the price text.
    Price(String),

    /// `discount <n>`: move the discount control.
    Discount(i32),

    /// `currency`: open the currency picker.
    OpenPicker,

    /// `pick <symbol|code>`: choose a currency.
    Pick(Currency),

    /// `cancel`: close the picker without choosing.
    Cancel,

    /// `show`: print the card.
    Show,

    /// `help`: list the commands.
    Help,

    /// `quit`: end the session.
    Quit,
}

impl Command {
    /// The state event this command triggers, if any.
    pub fn event(&self) -> Option<Event> {
        match self {
            Command::Price(text) => Some(Event::TextChanged(text.clone())),
            Command::Discount(value) => Some(Event::DiscountChanged(*value)),
            Command::OpenPicker => Some(Event::CurrencyGlyphTapped),
            Command::Pick(currency) => Some(Event::CurrencyOptionTapped(*currency)),
            Command::Cancel => Some(Event::CancelTapped),
            Command::Show | Command::Help | Command::Quit => None,
        }
    }
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (word, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
        let rest = rest.trim();

        match word.to_ascii_lowercase().as_str() {
            // An empty price argument clears the field.
            "price" => Ok(Command::Price(rest.to_string())),
            "discount" => {
                if rest.is_empty() {
                    return Err(CommandError::MissingArgument("discount"));
                }

                rest.parse()
                    .map(Command::Discount)
                    .map_err(|_err| CommandError::InvalidDiscount(rest.to_string()))
            }
            "currency" => Ok(Command::OpenPicker),
            "pick" => {
                if rest.is_empty() {
                    return Err(CommandError::MissingArgument("pick"));
                }

                Ok(Command::Pick(rest.parse()?))
            }
            "cancel" => Ok(Command::Cancel),
            "show" => Ok(Command::Show),
            "help" => Ok(Command::Help),
            "quit" | "exit" => Ok(Command::Quit),
            other => Err(CommandError::Unknown(other.to_string())),
        }
    }
}

/// Errors that end an interactive session.
#[derive(Debug, Error)]
pub enum SessionError {
    /// Reading input or writing output failed.
    #[error("session IO failed: {0}")]
    Io(#[from] io::Error),

    /// Rendering failed.
    #[error(transparent)]
    Summary(#[from] SummaryError),
}

const HELP: &str = "\
commands:
  price <text>      set the original price (`,` or `.` as decimal separator)
  discount <n>      set the discount percentage (0-100)
  currency          open the currency picker
  pick <symbol>     choose a currency by symbol or ISO code
  cancel            close the picker
  show              print the current result
  quit              leave";

/// Runs commands from `input` until `quit` or end of input, rendering to `out`.
///
/// Returns the final state.
///
/// # Errors
///
/// Returns a [`SessionError`] if reading or writing fails. Malformed commands
/// are reported on `out` and do not end the session.
pub fn run_session<F>(
    input: impl BufRead,
    mut out: impl Write,
    mut state: AppState,
    feedback: &F,
) -> Result<AppState, SessionError>
where
    F: Feedback + ?Sized,
{
    info!("interactive session started");

    Summary::from(&state.view()).write_to(&mut out)?;

    for line in input.lines() {
        let line = line?;

        if line.trim().is_empty() {
            continue;
        }

        let command = match line.parse::<Command>() {
            Ok(command) => command,
            Err(error) => {
                debug!(%error, line = line.as_str(), "rejected session line");
                writeln!(out, "{error}")?;
                continue;
            }
        };

        match command {
            Command::Quit => break,
            Command::Help => writeln!(out, "{HELP}")?,
            Command::Show => Summary::from(&state.view()).write_to(&mut out)?,
            command => {
                if let Some(event) = command.event() {
                    state = state.update(event, feedback);
                }

                render(&mut out, &state)?;
            }
        }
    }

    info!("interactive session ended");

    Ok(state)
}

/// Renders the picker while it is open, otherwise the card.
fn render(out: &mut impl Write, state: &AppState) -> Result<(), SummaryError> {
    let view = state.view();

    match view.picker {
        PickerState::Open => write_picker(out, view.currency),
        PickerState::Closed => Summary::from(&view).write_to(out),
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use testresult::TestResult;

    use crate::feedback::NoopFeedback;

    use super::*;

    fn session(script: &str) -> Result<(AppState, String), Box<dyn std::error::Error>> {
        let mut out = Vec::new();
        let state = run_session(Cursor::new(script), &mut out, AppState::new(), &NoopFeedback)?;

        Ok((state, String::from_utf8(out)?))
    }

    #[test]
    fn parses_commands() -> TestResult {
        assert_eq!("price 12,50".parse::<Command>()?, Command::Price("12,50".to_string()));
        assert_eq!("price".parse::<Command>()?, Command::Price(String::new()));
        assert_eq!("discount -5".parse::<Command>()?, Command::Discount(-5));
        assert_eq!("CURRENCY".parse::<Command>()?, Command::OpenPicker);
        assert_eq!("pick ₹".parse::<Command>()?, Command::Pick(Currency::Inr));
        assert_eq!("pick krw".parse::<Command>()?, Command::Pick(Currency::Krw));
        assert_eq!("  cancel  ".parse::<Command>()?, Command::Cancel);
        assert_eq!("exit".parse::<Command>()?, Command::Quit);

        Ok(())
    }

    #[test]
    fn rejects_malformed_commands() {
        assert_eq!(
            "jump".parse::<Command>(),
            Err(CommandError::Unknown("jump".to_string()))
        );
        assert_eq!(
            "discount".parse::<Command>(),
            Err(CommandError::MissingArgument("discount"))
        );
        assert_eq!(
            "discount 12.5".parse::<Command>(),
            Err(CommandError::InvalidDiscount("12.5".to_string()))
        );
        assert_eq!(
            "pick CHF".parse::<Command>(),
            Err(CommandError::Currency(CurrencyError::Unknown("CHF".to_string())))
        );
    }

    #[test]
    fn commands_map_to_events() {
        assert_eq!(Command::OpenPicker.event(), Some(Event::CurrencyGlyphTapped));
        assert_eq!(Command::Discount(3).event(), Some(Event::DiscountChanged(3)));
        assert_eq!(Command::Show.event(), None);
    }

    #[test]
    fn session_drives_state() -> TestResult {
        let (state, out) = session("price 100\ndiscount 25\ncurrency\npick $\n")?;
        let view = state.view();

        assert_eq!(view.formatted_savings(), "$25.00");
        assert_eq!(view.formatted_final_price(), "$75.00");
        assert_eq!(view.picker, PickerState::Closed);
        assert!(out.contains("Choose Currency"));

        Ok(())
    }

    #[test]
    fn session_reports_errors_and_continues() -> TestResult {
        let (state, out) = session("discount lots\n\nprice 10\n")?;

        assert!(out.contains("discount must be a whole number"));
        assert_eq!(state.price_text(), "10");

        Ok(())
    }

    #[test]
    fn session_stops_at_quit() -> TestResult {
        let (state, _out) = session("price 5\nquit\nprice 6\n")?;

        assert_eq!(state.price_text(), "5");

        Ok(())
    }

    #[test]
    fn cancel_keeps_currency() -> TestResult {
        let (state, _out) = session("currency\ncancel\n")?;

        assert_eq!(state.view().currency, Currency::Eur);
        assert_eq!(state.view().picker, PickerState::Closed);

        Ok(())
    }

    #[test]
    fn args_replay_as_events() {
        let args = CalculatorArgs::parse_from([
            "rebate",
            "--price",
            "99,99",
            "--discount",
            "-5",
            "--currency",
            "£",
        ]);

        assert_eq!(
            args.events(),
            [
                Event::TextChanged("99,99".to_string()),
                Event::DiscountChanged(-5),
                Event::CurrencyOptionTapped(Currency::Gbp),
            ]
        );
    }
}
