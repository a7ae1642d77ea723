//! Error types for the wizard engine.
//!
//! Only two things can go wrong synchronously: a screen that cannot be
//! materialized and a malformed locale registration. Everything else a user
//! or application can request (a disabled button, a resolver that returns no
//! destination) is normal control flow and never surfaces as an error.

use std::path::PathBuf;

use crate::registry::ScreenId;

/// Result type alias for wizard operations.
pub type Result<T> = std::result::Result<T, WizardError>;

/// Errors that can occur while driving a wizard.
#[derive(Debug, thiserror::Error)]
pub enum WizardError {
    /// The destination screen cannot be materialized.
    #[error("Cannot instantiate screen '{id}': {reason}")]
    InvalidScreen { id: ScreenId, reason: String },

    /// A locale registration was rejected.
    #[error(transparent)]
    InvalidLocaleRegistration(#[from] LocaleRegistrationError),

    /// Configuration parse error.
    #[error("Invalid wizard configuration: {0}")]
    Config(String),

    /// File I/O error.
    #[error("Failed to read '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Image decoding error.
    #[error("Failed to load image '{path}': {source}")]
    Image {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}

impl WizardError {
    /// Create a materialization error.
    pub fn invalid_screen(id: ScreenId, reason: impl Into<String>) -> Self {
        Self::InvalidScreen {
            id,
            reason: reason.into(),
        }
    }

    /// Create a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Create an I/O error.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Create an image error.
    pub fn image(path: impl Into<PathBuf>, source: image::ImageError) -> Self {
        Self::Image {
            path: path.into(),
            source,
        }
    }

    /// Returns true if this error reports a screen that could not be built.
    pub fn is_invalid_screen(&self) -> bool {
        matches!(self, Self::InvalidScreen { .. })
    }
}

/// Reasons a locale registration is rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LocaleRegistrationError {
    /// No locale identifier was supplied.
    #[error("Invalid locale registration: locale is missing")]
    MissingLocale,

    /// No label list was supplied.
    #[error("Invalid locale registration: labels are missing")]
    MissingLabels,

    /// The label list does not hold exactly one label per action button.
    #[error("Invalid locale registration: expected {expected} labels, got {found}")]
    WrongLabelCount { expected: usize, found: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_screen_display() {
        let err = WizardError::invalid_screen(ScreenId::new("summary"), "not registered");
        assert!(err.is_invalid_screen());
        assert_eq!(
            err.to_string(),
            "Cannot instantiate screen 'summary': not registered"
        );
    }

    #[test]
    fn test_locale_error_converts() {
        let err: WizardError = LocaleRegistrationError::WrongLabelCount {
            expected: 4,
            found: 3,
        }
        .into();
        assert!(!err.is_invalid_screen());
        assert_eq!(
            err.to_string(),
            "Invalid locale registration: expected 4 labels, got 3"
        );
    }
}
