//! Message rendering: text segmentation, escaping, and media blocks.
//!
//! For each message the renderer scans the text for occurrences of indexed
//! media filenames (case-insensitive, all non-overlapping occurrences per
//! key, earliest start wins globally) and splits it into plain-text and media
//! segments in document order. Plain segments are HTML-escaped; media
//! segments become a fixed-shape block per kind. Exporters append a redundant
//! attachment notice next to the filename, which is stripped from the
//! trailing text.
//!
//! Message text and filenames are attacker-uncontrolled but may contain
//! arbitrary Unicode and markup-like substrings from pasted content, so every
//! emitted text and attribute value goes through [`escape_html`].

use crate::Message;
use crate::media::{MediaIndex, MediaKind};
use crate::sender::SenderClasses;
use crate::sidecar::TranscriptionIndex;

/// Notices exporters append next to an attached filename, stripped from the
/// trailing text after the last media occurrence.
const ATTACHMENT_NOTICES: &[&str] = &["(arquivo anexado)", "(file attached)"];

/// Escapes the five HTML-unsafe characters: `& < > " '`.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(c),
        }
    }
    out
}

/// One case-insensitive match of an indexed filename inside message text.
///
/// Offsets are byte positions into the original text. Matching happens on the
/// lowercased text, whose byte offsets line up with the original for every
/// practical filename (ASCII); the original casing at the span is what gets
/// rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Occurrence<'a> {
    start: usize,
    end: usize,
    key: &'a str,
}

/// Collects all media-filename occurrences in `text`, sorted by start offset.
///
/// Per key the scan is left to right, resuming immediately after each match,
/// so a key's own occurrences never overlap. Distinct keys may still nest
/// when one filename is a substring of another; the global (start, end) sort
/// makes the earliest-starting occurrence win deterministically.
fn find_occurrences<'a>(text: &str, index: &'a MediaIndex) -> Vec<Occurrence<'a>> {
    let lower = text.to_lowercase();
    let mut occurrences = Vec::new();

    for (key, _) in index.iter() {
        let mut from = 0;
        while let Some(pos) = lower[from..].find(key) {
            let start = from + pos;
            let end = start + key.len();
            occurrences.push(Occurrence { start, end, key });
            from = end;
        }
    }

    occurrences.sort_by_key(|occ| (occ.start, occ.end));
    occurrences
}

/// Renders one media occurrence as its fixed-shape block.
fn render_media_block(
    filename: &str,
    rel_path: &str,
    transcriptions: &TranscriptionIndex,
) -> String {
    let src = escape_html(rel_path);

    match MediaKind::from_filename(filename) {
        MediaKind::Image => format!(
            "<div class=\"media\"><a href=\"{src}\" target=\"_blank\">\
             <img src=\"{src}\" loading=\"lazy\" /></a></div>"
        ),
        MediaKind::Video => format!(
            "<div class=\"media\"><video controls preload=\"metadata\">\
             <source src=\"{src}\">Your browser does not support video.</video></div>"
        ),
        MediaKind::Audio => {
            let caption = transcriptions
                .get(&filename.to_lowercase())
                .map(|text| format!("<div class=\"transcription\">{}</div>", escape_html(text)))
                .unwrap_or_default();
            format!(
                "<div class=\"media audio-wrap\"><audio controls preload=\"metadata\">\
                 <source src=\"{src}\">Your browser does not support audio.</audio>{caption}</div>"
            )
        }
        MediaKind::Pdf => format!(
            "<div class=\"media pdf\"><a href=\"{src}\" target=\"_blank\">\
             <div class=\"pdf-thumb\">\u{1F4C4}</div>\
             <div class=\"pdf-name\">{}</div></a></div>",
            escape_html(filename)
        ),
        MediaKind::File => format!(
            "<div class=\"media file\"><a href=\"{src}\" download>\u{1F4E6} {}</a></div>",
            escape_html(filename)
        ),
    }
}

/// Renders a message's content as interleaved escaped spans and media blocks.
fn render_content(
    text: &str,
    index: &MediaIndex,
    transcriptions: &TranscriptionIndex,
) -> String {
    let occurrences = find_occurrences(text, index);
    if occurrences.is_empty() {
        return format!("<span>{}</span>", escape_html(text));
    }

    let mut parts = String::new();
    let mut cursor = 0;

    for occ in &occurrences {
        if occ.start < cursor {
            // Nested inside the previous occurrence; already rendered.
            continue;
        }
        if occ.start > cursor {
            let before = text.get(cursor..occ.start).unwrap_or("");
            if !before.is_empty() {
                parts.push_str(&format!("<span>{}</span>", escape_html(before)));
            }
        }

        // Preserve the original casing from the message text, even though
        // matching was case-insensitive. Falls back to the indexed key when
        // lowercasing shifted byte offsets (non-ASCII surroundings).
        let filename = text.get(occ.start..occ.end).unwrap_or(occ.key);
        let rel_path = index.get(occ.key).unwrap_or_default();
        parts.push_str(&render_media_block(filename, rel_path, transcriptions));

        cursor = occ.end;
    }

    if cursor < text.len() {
        let mut after = text.get(cursor..).unwrap_or("").to_string();
        for notice in ATTACHMENT_NOTICES {
            after = after.replace(notice, "");
        }
        let after = after.trim();
        if !after.is_empty() {
            parts.push_str(&format!("<span>{}</span>", escape_html(after)));
        }
    }

    parts
}

/// Renders one message as a complete bubble block.
///
/// System notices (empty sender) render with the label "System" in the
/// neutral default lane.
pub fn render_message(
    msg: &Message,
    index: &MediaIndex,
    senders: &SenderClasses,
    transcriptions: &TranscriptionIndex,
) -> String {
    let lane = senders.lane_for(&msg.sender);
    let content = render_content(&msg.text, index, transcriptions);
    let sender_label = if msg.is_system() {
        "System".to_string()
    } else {
        escape_html(&msg.sender)
    };
    let timestamp = escape_html(&msg.timestamp());

    format!(
        "<div class=\"message {lane}\">\n\
         <div class=\"bubble\">\n\
         <div class=\"meta\"><span class=\"sender\">{sender_label}</span>\
         <span class=\"time\">{timestamp}</span></div>\n\
         <div class=\"text\">{content}</div>\n\
         </div>\n\
         </div>",
        lane = lane.css_class(),
    )
}
