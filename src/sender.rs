//! Sender lane classification.
//!
//! Each distinct sender is assigned a visual lane: `sent` messages align
//! right, `received` messages align left. Two modes:
//!
//! - **Explicit**: the viewer names themself (`--me`), and only exact,
//!   case-sensitive matches go to the `sent` lane.
//! - **Positional inference**: in conversation order, the first distinct
//!   non-empty sender is `received` and the second is `sent`. This models a
//!   two-party chat where the viewer is conventionally the second participant
//!   to speak. It is a heuristic and degrades for group chats with more than
//!   two senders; preserving that exact behavior is intentional.
//!
//! System notices (empty sender) are never classified and render as "System"
//! in the neutral default lane.

use std::collections::HashMap;

use crate::Message;

/// Visual placement of a message bubble.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lane {
    /// Right-aligned, the viewer's own messages
    Sent,
    /// Left-aligned, everyone else (and the default for unknown senders)
    Received,
}

impl Lane {
    /// CSS class emitted on the message wrapper.
    pub fn css_class(self) -> &'static str {
        match self {
            Lane::Sent => "sent",
            Lane::Received => "received",
        }
    }
}

/// Read-only sender-to-lane map, built once after parsing.
///
/// # Example
///
/// ```rust
/// use chatview::Message;
/// use chatview::sender::{Lane, SenderClasses};
///
/// let messages = vec![
///     Message::new("1/1/24", "10:00", "Bob", "hi"),
///     Message::new("1/1/24", "10:01", "Ana", "hello"),
/// ];
/// let classes = SenderClasses::infer(&messages);
/// assert_eq!(classes.lane_for("Bob"), Lane::Received);
/// assert_eq!(classes.lane_for("Ana"), Lane::Sent);
/// ```
#[derive(Debug, Clone, Default)]
pub struct SenderClasses {
    lanes: HashMap<String, Lane>,
}

impl SenderClasses {
    /// Explicit mode: `me` goes to the `sent` lane, every other non-empty
    /// sender to `received`.
    pub fn with_me(messages: &[Message], me: &str) -> Self {
        let mut lanes = HashMap::new();
        for msg in messages {
            if msg.sender.is_empty() {
                continue;
            }
            if msg.sender == me {
                lanes.insert(msg.sender.clone(), Lane::Sent);
            } else {
                lanes.entry(msg.sender.clone()).or_insert(Lane::Received);
            }
        }
        Self { lanes }
    }

    /// Positional inference over conversation order.
    pub fn infer(messages: &[Message]) -> Self {
        let mut lanes: HashMap<String, Lane> = HashMap::new();
        let mut first: Option<&str> = None;
        let mut second: Option<&str> = None;

        for msg in messages {
            let s = msg.sender.as_str();
            if s.is_empty() {
                continue;
            }
            if first.is_none() {
                first = Some(s);
                lanes.insert(s.to_string(), Lane::Received);
            } else if second.is_none() && first != Some(s) {
                second = Some(s);
                lanes.insert(s.to_string(), Lane::Sent);
            } else if !lanes.contains_key(s) {
                lanes.insert(s.to_string(), Lane::Received);
            }
        }

        Self { lanes }
    }

    /// Builds the map in the mode selected by `me`.
    pub fn classify(messages: &[Message], me: Option<&str>) -> Self {
        match me {
            Some(name) => Self::with_me(messages, name),
            None => Self::infer(messages),
        }
    }

    /// Lane for a sender; unknown senders (including the empty system
    /// sender) default to `received`.
    pub fn lane_for(&self, sender: &str) -> Lane {
        self.lanes.get(sender).copied().unwrap_or(Lane::Received)
    }

    /// Number of classified senders.
    pub fn len(&self) -> usize {
        self.lanes.len()
    }

    /// Returns `true` if no sender was classified.
    pub fn is_empty(&self) -> bool {
        self.lanes.is_empty()
    }
}
