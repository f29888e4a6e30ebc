//! Message record type for parsed transcripts.
//!
//! This module provides [`Message`], one logical utterance or system notice
//! from a WhatsApp text export. The transcript parser produces an ordered
//! `Vec<Message>`; insertion order is conversation order and every downstream
//! stage preserves it.
//!
//! # Overview
//!
//! A message consists of:
//! - `date` and `time` - the raw locale strings from the header line, kept
//!   unparsed and unvalidated (exports vary by locale and the page shows them
//!   verbatim)
//! - `sender` - display name; the empty string marks a system notice
//! - `text` - message body; continuation lines are folded in with embedded
//!   newlines
//!
//! # Examples
//!
//! ```
//! use chatview::Message;
//!
//! let mut msg = Message::new("20/06/2025", "23:29", "John", "first line");
//! msg.push_line("second line");
//! assert_eq!(msg.text, "first line\nsecond line");
//! assert!(!msg.is_system());
//! ```

use serde::{Deserialize, Serialize};

/// One logical utterance or system notice from a chat export.
///
/// Constructed by the transcript parser when a line matches a header pattern,
/// or as an orphan when the stream begins mid-record. A record is mutated only
/// via [`push_line`](Self::push_line) until the next header line closes it;
/// after parsing the sequence is treated as an immutable snapshot.
///
/// # Serialization
///
/// Implements `Serialize` and `Deserialize`, so a parsed transcript can be
/// dumped for inspection or fed to other tooling.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    /// Raw date string from the header line (e.g. `20/06/2025`). Empty for
    /// orphan records.
    pub date: String,

    /// Raw time string from the header line, possibly with an AM/PM marker.
    /// Empty for orphan records.
    pub time: String,

    /// Display name of the author. The empty string means the record is a
    /// system notice (encryption banner, group events, ...).
    pub sender: String,

    /// Text content. Multiline messages carry embedded `\n` separators with
    /// each continuation line preserved exactly.
    pub text: String,
}

impl Message {
    /// Creates a message from the captured groups of a header line.
    pub fn new(
        date: impl Into<String>,
        time: impl Into<String>,
        sender: impl Into<String>,
        text: impl Into<String>,
    ) -> Self {
        Self {
            date: date.into(),
            time: time.into(),
            sender: sender.into(),
            text: text.into(),
        }
    }

    /// Creates a system notice (header line without a `Sender:` segment).
    pub fn system(date: impl Into<String>, time: impl Into<String>, text: impl Into<String>) -> Self {
        Self::new(date, time, "", text)
    }

    /// Creates an orphan record for a line with no recognizable header and no
    /// open record to fold into.
    pub fn orphan(line: impl Into<String>) -> Self {
        Self::new("", "", "", line)
    }

    /// Folds a continuation line into this record.
    ///
    /// The line is appended verbatim after a newline separator, including any
    /// leading or trailing whitespace it carries.
    pub fn push_line(&mut self, line: &str) {
        self.text.push('\n');
        self.text.push_str(line);
    }

    /// Returns `true` if this record is a system notice (no sender).
    pub fn is_system(&self) -> bool {
        self.sender.is_empty()
    }

    /// Returns the `"date time"` header string, trimmed when either part is
    /// empty.
    pub fn timestamp(&self) -> String {
        format!("{} {}", self.date, self.time).trim().to_string()
    }

    /// Returns `true` if this message's text is empty or whitespace-only.
    pub fn is_empty(&self) -> bool {
        self.text.trim().is_empty()
    }
}

impl Default for Message {
    fn default() -> Self {
        Self::new("", "", "", "")
    }
}
