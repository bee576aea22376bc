//! Error types surfaced by the scroller host application.
//!
//! The viewport core never fails; these errors come from loading
//! configuration and driving the terminal.

use thiserror::Error;

/// Errors surfaced while configuring or running the terminal host.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ScrollerError {
    /// Configuration could not be loaded or is inconsistent.
    #[error("configuration error: {message}")]
    Configuration {
        /// Details about the configuration failure.
        message: String,
    },

    /// The terminal program failed to start or exited abnormally.
    #[error("terminal error: {message}")]
    Terminal {
        /// Error detail reported by the terminal runtime.
        message: String,
    },

    /// Local I/O operation failed.
    #[error("I/O error: {message}")]
    Io {
        /// Error detail from the underlying I/O operation.
        message: String,
    },
}

impl From<bubbletea_rs::Error> for ScrollerError {
    fn from(error: bubbletea_rs::Error) -> Self {
        Self::Terminal {
            message: error.to_string(),
        }
    }
}

impl From<std::io::Error> for ScrollerError {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: error.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::ScrollerError;

    #[rstest]
    #[case::configuration(
        ScrollerError::Configuration { message: "item_width must be positive".to_owned() },
        "configuration error: item_width must be positive"
    )]
    #[case::terminal(
        ScrollerError::Terminal { message: "no tty".to_owned() },
        "terminal error: no tty"
    )]
    #[case::io(
        ScrollerError::Io { message: "broken pipe".to_owned() },
        "I/O error: broken pipe"
    )]
    fn errors_render_with_context(#[case] error: ScrollerError, #[case] expected: &str) {
        assert_eq!(error.to_string(), expected);
    }

    #[test]
    fn io_errors_convert() {
        let error: ScrollerError = std::io::Error::other("disk full").into();
        assert_eq!(
            error,
            ScrollerError::Io {
                message: "disk full".to_owned()
            }
        );
    }
}
