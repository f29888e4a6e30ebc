//! Unified error types for chatview.
//!
//! This module provides a single [`ChatviewError`] enum that covers all error
//! cases in the library.
//!
//! # Error Handling Philosophy
//!
//! Very little in this crate is fatal. A line that matches no header pattern
//! becomes an orphan record, a missing media directory degrades to a text-only
//! page, a missing transcription sidecar simply omits the caption, and
//! undecodable bytes in the transcript are replaced at read time. The only
//! hard failures are the missing-transcript precondition and ordinary I/O
//! errors while reading or writing files.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// A specialized [`Result`] type for chatview operations.
///
/// # Example
///
/// ```rust
/// use chatview::error::Result;
/// use chatview::Message;
///
/// fn my_function() -> Result<Vec<Message>> {
///     // ... operations that may fail
///     Ok(vec![])
/// }
/// ```
pub type Result<T> = std::result::Result<T, ChatviewError>;

/// The error type for all chatview operations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ChatviewError {
    /// An I/O error occurred.
    ///
    /// This typically happens when:
    /// - Permission denied on a media file or sidecar
    /// - Disk is full (when writing the output page)
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// The transcript file does not exist.
    ///
    /// This is the one precondition the run aborts on before any parsing
    /// begins.
    #[error("Chat transcript not found: {}", path.display())]
    ChatNotFound {
        /// The path that was checked
        path: PathBuf,
    },

    /// An external collaborator (speech-to-text, correction, language
    /// detection) failed.
    ///
    /// Orchestration loops treat this as "skip this asset and continue";
    /// it is never fatal for a render run.
    #[error("{service} collaborator failed: {message}")]
    Collaborator {
        /// Which collaborator failed (e.g. "speech-to-text")
        service: &'static str,
        /// Description of the failure
        message: String,
    },
}

// ============================================================================
// Convenience constructors
// ============================================================================

impl ChatviewError {
    /// Creates a missing-transcript error.
    pub fn chat_not_found(path: impl Into<PathBuf>) -> Self {
        ChatviewError::ChatNotFound { path: path.into() }
    }

    /// Creates a collaborator failure.
    pub fn collaborator(service: &'static str, message: impl Into<String>) -> Self {
        ChatviewError::Collaborator {
            service,
            message: message.into(),
        }
    }

    /// Returns `true` if this is an IO error.
    pub fn is_io(&self) -> bool {
        matches!(self, ChatviewError::Io(_))
    }

    /// Returns `true` if this is the missing-transcript precondition.
    pub fn is_chat_not_found(&self) -> bool {
        matches!(self, ChatviewError::ChatNotFound { .. })
    }

    /// Returns `true` if this is a collaborator failure.
    pub fn is_collaborator(&self) -> bool {
        matches!(self, ChatviewError::Collaborator { .. })
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_display() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let err = ChatviewError::from(io_err);
        let display = err.to_string();
        assert!(display.contains("IO error"));
        assert!(display.contains("file not found"));
    }

    #[test]
    fn test_chat_not_found_display() {
        let err = ChatviewError::chat_not_found("/chats/missing.txt");
        let display = err.to_string();
        assert!(display.contains("not found"));
        assert!(display.contains("/chats/missing.txt"));
    }

    #[test]
    fn test_collaborator_display() {
        let err = ChatviewError::collaborator("speech-to-text", "rate limited");
        let display = err.to_string();
        assert!(display.contains("speech-to-text"));
        assert!(display.contains("rate limited"));
    }

    #[test]
    fn test_error_source_chain() {
        use std::error::Error;
        let io_err = io::Error::new(io::ErrorKind::PermissionDenied, "access denied");
        let err = ChatviewError::from(io_err);
        assert!(err.source().is_some());
    }

    #[test]
    fn test_is_methods() {
        let io_err = ChatviewError::Io(io::Error::new(io::ErrorKind::NotFound, ""));
        assert!(io_err.is_io());
        assert!(!io_err.is_chat_not_found());
        assert!(!io_err.is_collaborator());

        let missing = ChatviewError::chat_not_found("chat.txt");
        assert!(missing.is_chat_not_found());
        assert!(!missing.is_io());

        let collab = ChatviewError::collaborator("correction", "timeout");
        assert!(collab.is_collaborator());
        assert!(!collab.is_io());
    }

    #[test]
    fn test_error_debug() {
        let err = ChatviewError::chat_not_found("chat.txt");
        let debug = format!("{:?}", err);
        assert!(debug.contains("ChatNotFound"));
    }
}
