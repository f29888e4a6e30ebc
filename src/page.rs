//! Page assembly: document shell, stylesheet, and final write.
//!
//! Pure templating over the pre-rendered message blocks. The shell carries
//! one global stylesheet and one small script that pauses every other
//! audio/video element on any play event, enforcing exclusive playback
//! declaratively at the document level. The whole document is written in one
//! final write, so an interrupted run never leaves a truncated page behind
//! mid-message.

use std::fs;
use std::path::Path;

use chrono::Local;

use crate::Message;
use crate::config::ViewerConfig;
use crate::error::Result;
use crate::media::MediaIndex;
use crate::render::{escape_html, render_message};
use crate::sender::SenderClasses;
use crate::sidecar::TranscriptionIndex;

const STYLESHEET: &str = "\
    body {
        margin: 0;
        font-family: -apple-system, BlinkMacSystemFont, \"Segoe UI\", sans-serif;
        background: #ece5dd;
    }
    .chat-container {
        max-width: 800px;
        margin: 0 auto;
        height: 100vh;
        display: flex;
        flex-direction: column;
    }
    .chat-header {
        background: #075E54;
        color: white;
        padding: 12px 16px;
        font-weight: 500;
        display: flex;
        align-items: center;
        gap: 8px;
    }
    .chat-header .title {
        font-size: 16px;
    }
    .chat-body {
        flex: 1;
        padding: 10px;
        overflow-y: auto;
        background: #ece5dd;
    }
    .message {
        display: flex;
        margin-bottom: 6px;
    }
    .message.sent {
        justify-content: flex-end;
    }
    .message.received {
        justify-content: flex-start;
    }
    .bubble {
        max-width: 70%;
        padding: 6px 8px;
        border-radius: 8px;
        font-size: 14px;
        position: relative;
        box-shadow: 0 1px 0.5px rgba(0,0,0,0.13);
        background: #ffffff;
    }
    .message.sent .bubble {
        background: #dcf8c6;
    }
    .meta {
        display: flex;
        justify-content: space-between;
        font-size: 11px;
        color: #667781;
        margin-bottom: 4px;
    }
    .text span {
        white-space: pre-wrap;
        word-wrap: break-word;
    }
    .media {
        margin-top: 4px;
        margin-bottom: 4px;
    }
    .media img {
        max-width: 260px;
        max-height: 260px;
        border-radius: 6px;
        display: block;
    }
    .media video,
    .media audio {
        width: 260px;
        max-width: 100%;
        outline: none;
    }
    .transcription {
        font-size: 13px;
        font-style: italic;
        color: #667781;
        margin-top: 4px;
        white-space: pre-wrap;
        word-wrap: break-word;
    }
    .media.pdf a {
        display: flex;
        align-items: center;
        gap: 8px;
        text-decoration: none;
        color: inherit;
    }
    .pdf-thumb {
        width: 32px;
        height: 40px;
        border-radius: 4px;
        background: #f44336;
        color: white;
        display: flex;
        align-items: center;
        justify-content: center;
        font-size: 20px;
    }
    .pdf-name {
        font-size: 13px;
        word-break: break-all;
    }
";

// On any play event, pause every other audio/video element in the document.
const PLAYBACK_SCRIPT: &str = "\
    document.addEventListener('play', function(e) {
        var players = document.querySelectorAll('audio, video');
        for (var i = 0; i < players.length; i++) {
            if (players[i] !== e.target) {
                players[i].pause();
            }
        }
    }, true);
";

/// Renders the complete HTML document for a message sequence.
///
/// A single forward pass over the messages; their order in the output is the
/// conversation order.
pub fn render_page(
    messages: &[Message],
    index: &MediaIndex,
    senders: &SenderClasses,
    transcriptions: &TranscriptionIndex,
    config: &ViewerConfig,
) -> String {
    let body: Vec<String> = messages
        .iter()
        .map(|msg| render_message(msg, index, senders, transcriptions))
        .collect();
    let body = body.join("\n");

    let title = format!(
        "{} - generated {}",
        config.title,
        Local::now().format("%Y-%m-%d %H:%M")
    );

    format!(
        "<!DOCTYPE html>\n\
<html lang=\"{lang}\">\n\
<head>\n\
    <meta charset=\"utf-8\" />\n\
    <title>{title}</title>\n\
    <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\" />\n\
    <style>\n{STYLESHEET}</style>\n\
</head>\n\
<body>\n\
    <div class=\"chat-container\">\n\
        <div class=\"chat-header\">\n\
            <div class=\"title\">{header}</div>\n\
        </div>\n\
        <div class=\"chat-body\">\n{body}\n        </div>\n\
    </div>\n\
    <script>\n{PLAYBACK_SCRIPT}</script>\n\
</body>\n\
</html>\n",
        lang = escape_html(&config.page_lang),
        title = escape_html(&title),
        header = escape_html(&config.title),
    )
}

/// Writes the assembled document to `path` in one call.
pub fn write_page(path: &Path, html: &str) -> Result<()> {
    fs::write(path, html)?;
    Ok(())
}
