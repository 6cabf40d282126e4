//! Error types for LinkDeck

use thiserror::Error;

/// Main error type for library, data file, and backup operations
#[derive(Error, Debug)]
pub enum LinkError {
    /// Link was not found in the library
    #[error("Link not found: {0}")]
    LinkNotFound(String),

    /// Group was not found in the library
    #[error("Group not found: {0}")]
    GroupNotFound(String),

    /// Identifier could not be parsed
    #[error("Invalid id: {0}")]
    InvalidId(String),

    /// Backup document is well-formed JSON but not a usable library
    #[error("Invalid backup: {0}")]
    InvalidBackup(String),

    /// The data file could not be read, so writing it back is refused
    #[error("Saving disabled: {0} could not be read")]
    SavingDisabled(String),

    /// Error during serialization/deserialization
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// General I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias using LinkError
pub type LinkResult<T> = Result<T, LinkError>;

/// Failures reported by a camera/decoder engine.
///
/// None of these are fatal to the application; the scan session maps
/// them onto its own visible state.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScanError {
    /// No video input device is present
    #[error("Camera not available")]
    CameraUnavailable,

    /// The camera exists but could not be acquired (permission denied, busy)
    #[error("Camera acquisition failed: {0}")]
    Acquisition(String),

    /// Torch control is not supported by the active track
    #[error("Flash not supported: {0}")]
    FlashUnsupported(String),

    /// The engine was asked to act without an active capture
    #[error("No active capture")]
    NotStarted,
}

/// Failures writing to the system clipboard.
///
/// Never shown to the user; a failed copy simply shows no indicator.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ClipboardError {
    /// No clipboard could be opened (headless session, no display server)
    #[error("Clipboard unavailable: {0}")]
    Unavailable(String),

    /// The clipboard refused the text
    #[error("Clipboard write failed: {0}")]
    Write(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = LinkError::LinkNotFound("01HX".to_string());
        assert_eq!(format!("{}", err), "Link not found: 01HX");

        let err = ScanError::Acquisition("NotAllowedError".to_string());
        assert_eq!(format!("{}", err), "Camera acquisition failed: NotAllowedError");

        let err = ClipboardError::Unavailable("no display".to_string());
        assert_eq!(format!("{}", err), "Clipboard unavailable: no display");
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: LinkError = io_err.into();
        assert!(matches!(err, LinkError::Io(_)));
    }

    #[test]
    fn test_error_from_json() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: LinkError = json_err.into();
        assert!(matches!(err, LinkError::Serialization(_)));
    }
}
