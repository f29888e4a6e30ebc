//! # Chatview
//!
//! A Rust library for turning an exported WhatsApp chat (a line-oriented
//! text log plus a media folder) into a single self-contained, browsable
//! HTML conversation page.
//!
//! ## Overview
//!
//! The pipeline runs in strict stages:
//!
//! 1. [`parser`] - classify each physical line and fold the stream into an
//!    ordered sequence of [`Message`] records
//! 2. [`media`] - walk the media tree once into a case-insensitive
//!    filename-to-relative-path index
//! 3. [`sender`] - assign each sender a visual lane, explicitly (`--me`) or
//!    by positional inference
//! 4. [`render`] - split each message into escaped text spans and media
//!    blocks in document order
//! 5. [`page`] - wrap everything in the fixed page shell and write once
//!
//! Audio transcriptions are read from sidecar files next to each asset
//! ([`sidecar`]); producing those sidecars is the job of external
//! collaborators specified as traits in [`transcribe`].
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::path::Path;
//! use chatview::config::ViewerConfig;
//! use chatview::media::MediaIndex;
//! use chatview::page::{render_page, write_page};
//! use chatview::parser::TranscriptParser;
//! use chatview::sender::SenderClasses;
//! use chatview::sidecar::TranscriptionIndex;
//!
//! fn main() -> chatview::Result<()> {
//!     let output = Path::new("export/output.html");
//!
//!     let messages = TranscriptParser::new().parse(Path::new("export/chat.txt"))?;
//!     let index = MediaIndex::build(Path::new("export"), output);
//!     let senders = SenderClasses::classify(&messages, Some("Ana"));
//!     let transcriptions = TranscriptionIndex::load(&index, output);
//!
//!     let config = ViewerConfig::new().with_me("Ana");
//!     let html = render_page(&messages, &index, &senders, &transcriptions, &config);
//!     write_page(output, &html)
//! }
//! ```
//!
//! ## Module Structure
//!
//! - [`parser`] - line classifier and transcript state machine
//! - [`media`] - [`MediaIndex`](media::MediaIndex), [`MediaKind`](media::MediaKind)
//! - [`sender`] - [`SenderClasses`](sender::SenderClasses), [`Lane`](sender::Lane)
//! - [`render`] - message-to-HTML projection, [`escape_html`](render::escape_html)
//! - [`page`] - document shell and final write
//! - [`sidecar`] - transcription sidecar conventions and loading
//! - [`transcribe`] - collaborator traits and sidecar-producing loops
//! - [`config`] - [`ViewerConfig`](config::ViewerConfig)
//! - [`cli`] - clap argument surface (feature `cli`)
//! - [`error`] - unified error types ([`ChatviewError`], [`Result`])

#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod error;
pub mod media;
pub mod message;
pub mod page;
pub mod parser;
pub mod render;
pub mod sender;
pub mod sidecar;
pub mod transcribe;

// Re-export the main types at the crate root for convenience
pub use error::{ChatviewError, Result};
pub use message::Message;

/// Convenient re-exports for common usage.
///
/// ```rust
/// use chatview::prelude::*;
/// ```
pub mod prelude {
    pub use crate::Message;

    pub use crate::error::{ChatviewError, Result};

    pub use crate::config::ViewerConfig;
    pub use crate::media::{MediaIndex, MediaKind};
    pub use crate::page::{render_page, write_page};
    pub use crate::parser::{LineClass, TranscriptParser};
    pub use crate::render::{escape_html, render_message};
    pub use crate::sender::{Lane, SenderClasses};
    pub use crate::sidecar::TranscriptionIndex;
    pub use crate::transcribe::{
        Corrector, LanguageDetector, SidecarStats, SpeechToText, correct_transcriptions,
        detect_language, transcribe_audios,
    };
}
