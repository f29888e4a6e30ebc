//! Command-line interface definition using clap.
//!
//! The binary mirrors a typical export layout: the transcript, the media
//! folder, and the output page usually live in one directory, so all three
//! paths default to names inside the current directory and `--dir` re-roots
//! them at once.

use std::path::PathBuf;

use clap::Parser;

/// Generate a WhatsApp-style HTML page from an exported chat.
#[derive(Parser, Debug, Clone)]
#[command(name = "chatview")]
#[command(version, about, long_about = None)]
#[command(after_help = "EXAMPLES:
    chatview
    chatview --dir path/to/export
    chatview mychat.txt
    chatview mychat.txt --dir path/to/export --me YourName")]
pub struct Args {
    /// Exported WhatsApp chat text file
    #[arg(default_value = "chat.txt")]
    pub chat_txt: PathBuf,

    /// Media directory
    #[arg(default_value = ".")]
    pub media_dir: PathBuf,

    /// Output HTML file
    #[arg(default_value = "output.html")]
    pub output_html: PathBuf,

    /// Base directory prefixed to the chat file, media directory, and output
    #[arg(long, value_name = "DIR")]
    pub dir: Option<PathBuf>,

    /// Your name in the chat (right-aligns your messages)
    #[arg(long, value_name = "NAME")]
    pub me: Option<String>,

    /// Page header and title
    #[arg(long, default_value = "WhatsApp chat")]
    pub title: String,
}

impl Args {
    /// Applies the `--dir` prefix to all three paths.
    ///
    /// A media directory of `.` becomes the base directory itself.
    pub fn apply_base_dir(&mut self) {
        let Some(base) = self.dir.take() else {
            return;
        };
        self.chat_txt = base.join(&self.chat_txt);
        if self.media_dir == PathBuf::from(".") {
            self.media_dir.clone_from(&base);
        } else {
            self.media_dir = base.join(&self.media_dir);
        }
        self.output_html = base.join(&self.output_html);
    }
}
