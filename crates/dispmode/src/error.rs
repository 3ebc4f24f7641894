use std::fmt;

use dispmode_core::DisplayError;

/// Result type for CLI commands.
pub type CliResult<T> = Result<T, CliError>;

/// Errors a CLI command can end with.
#[derive(Debug)]
pub enum CliError {
    /// Enumeration or a mode change failed.
    Display(DisplayError),
    /// No monitor exists at the given index.
    NoSuchMonitor(usize),
    /// Output could not be encoded as JSON.
    Json(serde_json::Error),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Display(e) => write!(f, "{e}"),
            Self::NoSuchMonitor(index) => write!(f, "no monitor at index {index}"),
            Self::Json(e) => write!(f, "could not encode JSON: {e}"),
        }
    }
}

impl std::error::Error for CliError {}

impl From<DisplayError> for CliError {
    fn from(e: DisplayError) -> Self {
        Self::Display(e)
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        Self::Json(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_such_monitor_names_the_index() {
        assert_eq!(
            CliError::NoSuchMonitor(3).to_string(),
            "no monitor at index 3"
        );
    }

    #[test]
    fn json_errors_are_not_reported_as_platform_errors() {
        // Arrange
        let json_err = serde_json::from_str::<u32>("not json").unwrap_err();

        // Act
        let text = CliError::from(json_err).to_string();

        // Assert
        assert!(text.starts_with("could not encode JSON"));
        assert!(!text.contains("platform error"));
    }

    #[test]
    fn display_errors_keep_their_message() {
        let err = CliError::from(DisplayError::platform("Win32: Failed to set video mode"));

        assert_eq!(err.to_string(), "platform error: Win32: Failed to set video mode");
    }
}
