//! Media discovery and extension classification.
//!
//! The export places media files next to the transcript, sometimes in
//! subdirectories, and references them from message text by bare filename.
//! [`MediaIndex`] scans the media tree once and maps each lowercased filename
//! to a forward-slash path relative to the output page's directory, so the
//! generated HTML can link to assets at their original on-disk locations.
//!
//! Keys are unique per lowercase filename; when two files share a lowercase
//! name across subdirectories the one encountered last in traversal order
//! wins. That is a documented policy, not arbitration.

use std::collections::BTreeMap;
use std::path::{Component, Path, PathBuf};

use walkdir::WalkDir;

/// Extensions treated as audio, shared with the sidecar loader.
pub const AUDIO_EXTS: &[&str] = &["opus", "ogg", "mp3", "wav", "m4a"];

/// All extensions the indexer keeps. `was` is WhatsApp's proprietary sticker
/// container, rendered as a generic file.
pub const MEDIA_EXTS: &[&str] = &[
    "jpg", "jpeg", "png", "gif", "webp", // image
    "mp4", "mov", "mkv", "webm", // video
    "opus", "ogg", "mp3", "wav", "m4a", // audio
    "pdf", "was",
];

/// How a media filename is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind {
    /// Clickable thumbnail linking to the full asset
    Image,
    /// Inline player with a single source
    Video,
    /// Inline player, optionally captioned with a transcription
    Audio,
    /// Icon tile with the filename as label
    Pdf,
    /// Generic download tile (recognized but unclassified, e.g. stickers)
    File,
}

impl MediaKind {
    /// Classifies a filename by the text after its last dot,
    /// case-insensitively.
    pub fn from_filename(filename: &str) -> Self {
        let ext = filename
            .rsplit('.')
            .next()
            .unwrap_or_default()
            .to_lowercase();
        match ext.as_str() {
            "jpg" | "jpeg" | "png" | "gif" | "webp" => MediaKind::Image,
            "mp4" | "mov" | "mkv" | "webm" => MediaKind::Video,
            "opus" | "ogg" | "mp3" | "wav" | "m4a" => MediaKind::Audio,
            "pdf" => MediaKind::Pdf,
            _ => MediaKind::File,
        }
    }

    /// Returns `true` for audio assets (the only kind with sidecars).
    pub fn is_audio(self) -> bool {
        self == MediaKind::Audio
    }
}

/// Case-insensitive filename lookup built once per run.
///
/// # Example
///
/// ```rust,no_run
/// use chatview::media::MediaIndex;
/// use std::path::Path;
///
/// let index = MediaIndex::build(Path::new("export/"), Path::new("export/output.html"));
/// if let Some(rel) = index.get("img-20250620-wa0001.jpg") {
///     println!("relative link: {rel}");
/// }
/// ```
#[derive(Debug, Clone, Default)]
pub struct MediaIndex {
    entries: BTreeMap<String, String>,
}

impl MediaIndex {
    /// Creates an empty index (used when the media root is missing and the
    /// run degrades to a text-only page).
    pub fn empty() -> Self {
        Self::default()
    }

    /// Walks `media_root` once and indexes every regular file with a
    /// recognized extension.
    ///
    /// Paths are stored relative to `output_path`'s directory with `/`
    /// separators regardless of host convention. The caller is expected to
    /// have checked that `media_root` exists; unreadable entries inside it
    /// are skipped.
    pub fn build(media_root: &Path, output_path: &Path) -> Self {
        let output_dir = absolute_parent(output_path);
        let mut entries = BTreeMap::new();

        for entry in WalkDir::new(media_root).into_iter().filter_map(|e| e.ok()) {
            if !entry.file_type().is_file() {
                continue;
            }
            let Some(name) = entry.file_name().to_str() else {
                continue;
            };
            let Some((_, ext)) = name.rsplit_once('.') else {
                continue;
            };
            if !MEDIA_EXTS.contains(&ext.to_lowercase().as_str()) {
                continue;
            }

            let full = std::path::absolute(entry.path()).unwrap_or_else(|_| entry.path().to_path_buf());
            let rel = relative_to(&full, &output_dir);
            let rel = rel
                .components()
                .map(|c| c.as_os_str().to_string_lossy())
                .collect::<Vec<_>>()
                .join("/");

            // Later matches overwrite earlier ones: last-write-wins.
            entries.insert(name.to_lowercase(), rel);
        }

        Self { entries }
    }

    /// Looks up a relative path by lowercase filename.
    pub fn get(&self, key_lower: &str) -> Option<&str> {
        self.entries.get(key_lower).map(String::as_str)
    }

    /// Iterates `(lowercase filename, relative path)` pairs in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Number of indexed files.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if nothing was indexed.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Resolves an indexed relative path back to a filesystem path, anchored
    /// at the output file's directory.
    pub fn resolve(&self, key_lower: &str, output_path: &Path) -> Option<PathBuf> {
        let rel = self.get(key_lower)?;
        Some(absolute_parent(output_path).join(rel))
    }
}

/// Absolute directory containing `path`, falling back to `.` for bare
/// filenames.
fn absolute_parent(path: &Path) -> PathBuf {
    let abs = std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf());
    abs.parent()
        .map_or_else(|| PathBuf::from("."), Path::to_path_buf)
}

/// Computes `path` relative to `base`, walking up with `..` components where
/// the two diverge. Both inputs are expected to be absolute.
fn relative_to(path: &Path, base: &Path) -> PathBuf {
    let path_components: Vec<Component> = path.components().collect();
    let base_components: Vec<Component> = base.components().collect();

    let common = path_components
        .iter()
        .zip(base_components.iter())
        .take_while(|(a, b)| a == b)
        .count();

    let mut rel = PathBuf::new();
    for _ in common..base_components.len() {
        rel.push("..");
    }
    for component in &path_components[common..] {
        rel.push(component);
    }
    if rel.as_os_str().is_empty() {
        rel.push(".");
    }
    rel
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_media_kind_classification() {
        assert_eq!(MediaKind::from_filename("photo.jpg"), MediaKind::Image);
        assert_eq!(MediaKind::from_filename("PHOTO.JPEG"), MediaKind::Image);
        assert_eq!(MediaKind::from_filename("clip.MP4"), MediaKind::Video);
        assert_eq!(MediaKind::from_filename("voice.opus"), MediaKind::Audio);
        assert_eq!(MediaKind::from_filename("doc.pdf"), MediaKind::Pdf);
        assert_eq!(MediaKind::from_filename("sticker.was"), MediaKind::File);
        assert_eq!(MediaKind::from_filename("noext"), MediaKind::File);
    }

    #[test]
    fn test_relative_to_sibling_dir() {
        let rel = relative_to(Path::new("/export/media/photo.jpg"), Path::new("/export/out"));
        assert_eq!(rel, PathBuf::from("../media/photo.jpg"));
    }

    #[test]
    fn test_relative_to_same_dir() {
        let rel = relative_to(Path::new("/export/photo.jpg"), Path::new("/export"));
        assert_eq!(rel, PathBuf::from("photo.jpg"));
    }

    #[test]
    fn test_build_keys_are_lowercase() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("IMG-Photo.JPG"), b"x").unwrap();
        fs::write(dir.path().join("notes.txt"), b"x").unwrap();

        let index = MediaIndex::build(dir.path(), &dir.path().join("output.html"));
        assert_eq!(index.len(), 1);
        assert_eq!(index.get("img-photo.jpg"), Some("IMG-Photo.JPG"));
        assert!(index.get("notes.txt").is_none());
    }

    #[test]
    fn test_build_unrecognized_extensions_skipped() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("archive.zip"), b"x").unwrap();
        fs::write(dir.path().join("noext"), b"x").unwrap();
        fs::write(dir.path().join("voice.opus"), b"x").unwrap();

        let index = MediaIndex::build(dir.path(), &dir.path().join("output.html"));
        assert_eq!(index.len(), 1);
        assert!(index.get("voice.opus").is_some());
    }

    #[test]
    fn test_build_subdirectory_relative_paths() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("media")).unwrap();
        fs::write(dir.path().join("media").join("photo.jpg"), b"x").unwrap();

        let index = MediaIndex::build(dir.path(), &dir.path().join("output.html"));
        assert_eq!(index.get("photo.jpg"), Some("media/photo.jpg"));
    }

    #[test]
    fn test_build_output_outside_media_root() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("media")).unwrap();
        fs::create_dir(dir.path().join("out")).unwrap();
        fs::write(dir.path().join("media").join("photo.jpg"), b"x").unwrap();

        let index = MediaIndex::build(
            &dir.path().join("media"),
            &dir.path().join("out").join("chat.html"),
        );
        assert_eq!(index.get("photo.jpg"), Some("../media/photo.jpg"));
    }

    #[test]
    fn test_duplicate_lowercase_names_last_write_wins() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("a")).unwrap();
        fs::create_dir(dir.path().join("b")).unwrap();
        fs::write(dir.path().join("a").join("photo.jpg"), b"x").unwrap();
        fs::write(dir.path().join("b").join("PHOTO.JPG"), b"x").unwrap();

        let index = MediaIndex::build(dir.path(), &dir.path().join("output.html"));
        // One key, pointing at whichever file the walk visited last.
        assert_eq!(index.len(), 1);
        let rel = index.get("photo.jpg").unwrap();
        assert!(rel == "a/photo.jpg" || rel == "b/PHOTO.JPG");
    }

    #[test]
    fn test_resolve_round_trips_to_disk() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("voice.opus"), b"x").unwrap();
        let output = dir.path().join("output.html");

        let index = MediaIndex::build(dir.path(), &output);
        let resolved = index.resolve("voice.opus", &output).unwrap();
        assert!(resolved.is_file());
    }
}
