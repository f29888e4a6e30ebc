//! WhatsApp TXT transcript parser.
//!
//! The export format is irregular: multi-line messages, locale-dependent
//! timestamps, system notices distinguishable from user messages only by the
//! absence of a `Sender:` segment, and the occasional stray line with no
//! recognizable header at all. The parser is a small state machine over a
//! line classifier that never fails: every line is either a message header,
//! a system-notice header, or a continuation folded into the open record.
//!
//! Supported header shapes (numeric dates with `/` separators only, optional
//! case-insensitive AM/PM marker):
//!
//! - Message: `20/06/2025, 23:29 - John: Message`
//! - System notice: `20/06/2025, 23:29 - Messages and calls are end-to-end encrypted.`
//!
//! # Example
//!
//! ```rust
//! use chatview::parser::TranscriptParser;
//!
//! let parser = TranscriptParser::new();
//! let messages = parser.parse_str("20/06/2025, 23:29 - John: Hello\nsecond line");
//! assert_eq!(messages.len(), 1);
//! assert_eq!(messages[0].text, "Hello\nsecond line");
//! ```

use std::fs;
use std::path::Path;

use regex::Regex;

use crate::Message;
use crate::error::{ChatviewError, Result};

/// Classification of one physical transcript line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineClass {
    /// `date, time - sender: text`
    Header {
        date: String,
        time: String,
        sender: String,
        text: String,
    },
    /// `date, time - text` with no `sender:` segment.
    SystemHeader {
        date: String,
        time: String,
        text: String,
    },
    /// Anything else. The caller decides whether it continues an open record
    /// or opens an orphan one.
    Continuation,
}

/// Parser for WhatsApp TXT exports.
///
/// # Example
///
/// ```rust,no_run
/// use chatview::parser::TranscriptParser;
///
/// let parser = TranscriptParser::new();
/// let messages = parser.parse("chat.txt".as_ref())?;
/// # Ok::<(), chatview::ChatviewError>(())
/// ```
pub struct TranscriptParser {
    message_re: Regex,
    system_re: Regex,
}

// The sender group is non-greedy so it stops at the first `: ` separating the
// name from the text. The system pattern is a strict relaxation of the message
// pattern and must only be tried after it fails.
const MESSAGE_PATTERN: &str =
    r"^(\d{1,2}/\d{1,2}/\d{2,4}),?\s+(\d{1,2}:\d{2}(?:\s?[APap][Mm])?)\s+-\s+(.*?):\s+(.*)";
const SYSTEM_PATTERN: &str =
    r"^(\d{1,2}/\d{1,2}/\d{2,4}),?\s+(\d{1,2}:\d{2}(?:\s?[APap][Mm])?)\s+-\s+(.*)";

impl TranscriptParser {
    /// Creates a parser with the two header patterns compiled.
    pub fn new() -> Self {
        Self {
            message_re: Regex::new(MESSAGE_PATTERN).expect("message pattern is valid"),
            system_re: Regex::new(SYSTEM_PATTERN).expect("system pattern is valid"),
        }
    }

    /// Classifies one physical line (already stripped of its newline).
    ///
    /// Classification never fails; an unrecognized line always falls through
    /// to [`LineClass::Continuation`].
    pub fn classify(&self, line: &str) -> LineClass {
        if let Some(caps) = self.message_re.captures(line) {
            return LineClass::Header {
                date: caps[1].trim().to_string(),
                time: caps[2].trim().to_string(),
                sender: caps[3].trim().to_string(),
                text: caps[4].to_string(),
            };
        }
        if let Some(caps) = self.system_re.captures(line) {
            return LineClass::SystemHeader {
                date: caps[1].trim().to_string(),
                time: caps[2].trim().to_string(),
                text: caps[3].to_string(),
            };
        }
        LineClass::Continuation
    }

    /// Parses a transcript file into an ordered message sequence.
    ///
    /// The file is decoded lossily: undecodable bytes are replaced, never
    /// fatal. A missing file is the one precondition failure and returns
    /// [`ChatviewError::ChatNotFound`].
    pub fn parse(&self, path: &Path) -> Result<Vec<Message>> {
        if !path.is_file() {
            return Err(ChatviewError::chat_not_found(path));
        }
        let bytes = fs::read(path)?;
        let content = String::from_utf8_lossy(&bytes);
        Ok(self.parse_str(&content))
    }

    /// Parses transcript content from a string.
    ///
    /// Every line produces at most one record; continuation lines produce
    /// none, so the result length never exceeds the input line count.
    pub fn parse_str(&self, content: &str) -> Vec<Message> {
        let mut messages: Vec<Message> = Vec::new();

        for line in content.lines() {
            match self.classify(line) {
                LineClass::Header {
                    date,
                    time,
                    sender,
                    text,
                } => messages.push(Message::new(date, time, sender, text)),
                LineClass::SystemHeader { date, time, text } => {
                    messages.push(Message::system(date, time, text));
                }
                LineClass::Continuation => {
                    if let Some(current) = messages.last_mut() {
                        current.push_line(line);
                    } else {
                        // Stream begins mid-record or with malformed data.
                        messages.push(Message::orphan(line));
                    }
                }
            }
        }

        messages
    }
}

impl Default for TranscriptParser {
    fn default() -> Self {
        Self::new()
    }
}
