use std::fmt;

/// Result type for display enumeration and mode switching.
pub type DisplayResult<T> = Result<T, DisplayError>;

/// Errors surfaced by monitor enumeration and video mode changes.
///
/// Queries the OS can't answer (such as reading the current mode of a
/// detached adapter) are not errors: they come back as zeroed values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DisplayError {
    /// Growing a monitor or mode list failed. Partial results are discarded.
    OutOfMemory,
    /// The OS refused a request or an OS object could not be created.
    Platform(String),
    /// The monitor reported no usable video modes to choose from.
    NoVideoModes,
}

impl fmt::Display for DisplayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfMemory => write!(f, "out of memory"),
            Self::Platform(msg) => write!(f, "platform error: {msg}"),
            Self::NoVideoModes => write!(f, "monitor reports no usable video modes"),
        }
    }
}

impl std::error::Error for DisplayError {}

impl DisplayError {
    /// Shorthand for building a [`DisplayError::Platform`].
    pub fn platform(msg: impl Into<String>) -> Self {
        Self::Platform(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn platform_error_includes_message() {
        // Arrange
        let err = DisplayError::platform("Win32: Failed to set video mode");

        // Act
        let text = err.to_string();

        // Assert
        assert_eq!(text, "platform error: Win32: Failed to set video mode");
    }

    #[test]
    fn no_video_modes_has_readable_message() {
        assert_eq!(
            DisplayError::NoVideoModes.to_string(),
            "monitor reports no usable video modes"
        );
    }
}
