use std::fmt;

use dialoguer::theme::ColorfulTheme;

use crate::cli::output;
use crate::errors::FormError;
use crate::notify::Notifier;

/// Print an informational message via the standard CLI output helpers.
pub fn print_info(message: impl fmt::Display) {
    output::info(message);
}

/// Print a warning message via the standard CLI output helpers.
pub fn print_warning(message: impl fmt::Display) {
    output::warning(message);
}

/// Print an error message via the standard CLI output helpers.
pub fn print_error(message: impl fmt::Display) {
    output::error(message);
}

/// Print a success message via the standard CLI output helpers.
pub fn print_success(message: impl fmt::Display) {
    output::success(message);
}

/// Shared prompt theme for all interactive dialogs.
pub fn theme() -> ColorfulTheme {
    ColorfulTheme::default()
}

pub fn dialog_err(err: dialoguer::Error) -> FormError {
    match err {
        dialoguer::Error::IO(io) => FormError::Io(io),
    }
}

/// Notification channel backed by the CLI output helpers.
#[derive(Debug, Default)]
pub struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn warn(&mut self, title: &str, message: &str) {
        output::warning(format!("{title}: {message}"));
    }

    fn confirm(&mut self, title: &str, message: &str) {
        output::success(format!("{title}: {message}"));
    }
}
