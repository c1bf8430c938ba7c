use clap::{Args, Parser, Subcommand};

use crate::action::Action;
use crate::criteria::{parse_event_code, Criteria, Criterion};
use crate::resolve::Request;

const USAGE: &str = "xdo ACTION [OPTIONS] [WID ...]";

#[derive(Parser, Debug)]
#[command(name = "xdo")]
#[command(about = "Perform actions on X11 windows")]
#[command(disable_help_subcommand = true)]
#[command(override_usage = USAGE, help_template = "{usage}")]
#[command(args_conflicts_with_subcommands = true, arg_required_else_help = true)]
pub struct Cli {
    /// Print the bare version string
    #[arg(short = 'v')]
    pub version: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Close windows gracefully
    #[command(override_usage = USAGE, help_template = "{usage}", args_override_self = true)]
    Close(Selection),
    /// Kill the clients owning the windows
    #[command(override_usage = USAGE, help_template = "{usage}", args_override_self = true)]
    Kill(Selection),
    /// Unmap windows
    #[command(override_usage = USAGE, help_template = "{usage}", args_override_self = true)]
    Hide(Selection),
    /// Map windows
    #[command(override_usage = USAGE, help_template = "{usage}", args_override_self = true)]
    Show(Selection),
    /// Ask the window manager to activate windows
    #[command(override_usage = USAGE, help_template = "{usage}", args_override_self = true)]
    Activate(Selection),
    /// Send a key press and release (keycode from -k)
    #[command(override_usage = USAGE, help_template = "{usage}", args_override_self = true)]
    Key(Selection),
    /// Send a button press and release (button from -k)
    #[command(override_usage = USAGE, help_template = "{usage}", args_override_self = true)]
    Button(Selection),
}

/// Target selection shared by every action.
///
/// Opposite flags on one axis override each other: the last one given wins.
#[derive(Args, Debug, Clone, Default)]
pub struct Selection {
    /// Only windows other than the active one
    #[arg(short = 'r')]
    pub other: bool,

    /// Only windows with the active window's class
    #[arg(short = 'c', overrides_with = "class_different")]
    pub class_same: bool,

    /// Only windows with a class different from the active window's
    #[arg(short = 'C', overrides_with = "class_same")]
    pub class_different: bool,

    /// Only windows on the current desktop
    #[arg(short = 'd', overrides_with = "desktop_different")]
    pub desktop_same: bool,

    /// Only windows not on the current desktop
    #[arg(short = 'D', overrides_with = "desktop_same")]
    pub desktop_different: bool,

    /// Keycode or button number for `key` and `button`
    #[arg(short = 'k', value_name = "CODE", allow_hyphen_values = true, value_parser = parse_code)]
    pub code: Option<u8>,

    /// Explicit window IDs; criteria are ignored when any are given
    #[arg(value_name = "WID")]
    pub windows: Vec<String>,
}

fn parse_code(value: &str) -> Result<u8, std::convert::Infallible> {
    Ok(parse_event_code(value))
}

impl Selection {
    pub fn criteria(&self) -> Criteria {
        Criteria {
            identity: if self.other {
                Criterion::Different
            } else {
                Criterion::Ignore
            },
            class: axis(self.class_same, self.class_different),
            desktop: axis(self.desktop_same, self.desktop_different),
        }
    }

    fn into_request(self, action: Action) -> Request {
        Request {
            action,
            criteria: self.criteria(),
            windows: self.windows,
        }
    }
}

fn axis(same: bool, different: bool) -> Criterion {
    match (same, different) {
        (true, _) => Criterion::Same,
        (_, true) => Criterion::Different,
        _ => Criterion::Ignore,
    }
}

impl Cli {
    /// Version string printed by `-v`
    pub fn version_string() -> &'static str {
        env!("CARGO_PKG_VERSION")
    }

    /// Convert to a resolver request. `None` when no action was given.
    pub fn into_request(self) -> Option<Request> {
        let request = match self.command? {
            Commands::Close(s) => s.into_request(Action::Close),
            Commands::Kill(s) => s.into_request(Action::Kill),
            Commands::Hide(s) => s.into_request(Action::Hide),
            Commands::Show(s) => s.into_request(Action::Show),
            Commands::Activate(s) => s.into_request(Action::Activate),
            Commands::Key(s) => {
                let code = s.code.unwrap_or(0);
                s.into_request(Action::KeyPress(code))
            }
            Commands::Button(s) => {
                let code = s.code.unwrap_or(0);
                s.into_request(Action::ButtonPress(code))
            }
        };
        Some(request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Request {
        Cli::try_parse_from(args).unwrap().into_request().unwrap()
    }

    #[test]
    fn test_action_without_options() {
        let request = parse(&["xdo", "hide"]);
        assert_eq!(request.action, Action::Hide);
        assert!(request.criteria.is_empty());
        assert!(request.windows.is_empty());
    }

    #[test]
    fn test_criteria_flags() {
        let request = parse(&["xdo", "close", "-r", "-C", "-d"]);
        assert_eq!(request.action, Action::Close);
        assert_eq!(
            request.criteria,
            Criteria {
                identity: Criterion::Different,
                class: Criterion::Different,
                desktop: Criterion::Same,
            }
        );
    }

    #[test]
    fn test_combined_short_flags() {
        let request = parse(&["xdo", "activate", "-cD"]);
        assert_eq!(request.criteria.class, Criterion::Same);
        assert_eq!(request.criteria.desktop, Criterion::Different);
        assert_eq!(request.criteria.identity, Criterion::Ignore);
    }

    #[test]
    fn test_last_axis_flag_wins() {
        let request = parse(&["xdo", "hide", "-c", "-C"]);
        assert_eq!(request.criteria.class, Criterion::Different);

        let request = parse(&["xdo", "hide", "-D", "-d"]);
        assert_eq!(request.criteria.desktop, Criterion::Same);

        let request = parse(&["xdo", "hide", "-c", "-c"]);
        assert_eq!(request.criteria.class, Criterion::Same);
    }

    #[test]
    fn test_key_code_and_windows() {
        let request = parse(&["xdo", "key", "-k", "42", "0x10", "abc", "20"]);
        assert_eq!(request.action, Action::KeyPress(42));
        assert_eq!(request.windows, vec!["0x10", "abc", "20"]);
    }

    #[test]
    fn test_attached_code() {
        let request = parse(&["xdo", "button", "-k3"]);
        assert_eq!(request.action, Action::ButtonPress(3));
    }

    #[test]
    fn test_non_numeric_code_is_zero() {
        let request = parse(&["xdo", "key", "-k", "enter"]);
        assert_eq!(request.action, Action::KeyPress(0));

        let request = parse(&["xdo", "button"]);
        assert_eq!(request.action, Action::ButtonPress(0));
    }

    #[test]
    fn test_unknown_action_is_rejected() {
        assert!(Cli::try_parse_from(["xdo", "frobnicate"]).is_err());
    }

    #[test]
    fn test_missing_action_is_rejected() {
        assert!(Cli::try_parse_from(["xdo"]).is_err());
    }

    #[test]
    fn test_help_and_version() {
        let help = Cli::try_parse_from(["xdo", "-h"]).unwrap_err();
        assert_eq!(help.kind(), clap::error::ErrorKind::DisplayHelp);
        assert!(help.to_string().contains(USAGE));

        let version = Cli::try_parse_from(["xdo", "-v"]).unwrap();
        assert!(version.version);
        assert!(version.into_request().is_none());
        assert_eq!(Cli::version_string(), env!("CARGO_PKG_VERSION"));
        assert!(!Cli::version_string().starts_with("xdo"));
    }

    #[test]
    fn test_version_flag_is_not_an_action_option() {
        assert!(Cli::try_parse_from(["xdo", "hide", "-v"]).is_err());
    }
}
