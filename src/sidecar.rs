//! Transcription sidecar files.
//!
//! Audio transcriptions live next to the asset they describe, keyed by a
//! fixed suffix convention:
//!
//! - `<asset-path>.original.txt` - raw speech-to-text output
//! - `<asset-path>.txt` - corrected transcription, preferred over raw when
//!   both exist
//!
//! The precedence rule is the only conflict-resolution policy in the system
//! and is preserved exactly. A missing sidecar never raises an error; the
//! caption is simply omitted.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::media::{MediaIndex, MediaKind};

/// Sidecar path for the corrected transcription of `asset`.
pub fn corrected_path(asset: &Path) -> PathBuf {
    suffixed(asset, ".txt")
}

/// Sidecar path for the raw transcription of `asset`.
pub fn original_path(asset: &Path) -> PathBuf {
    suffixed(asset, ".original.txt")
}

fn suffixed(asset: &Path, suffix: &str) -> PathBuf {
    let mut name = asset.as_os_str().to_os_string();
    name.push(suffix);
    PathBuf::from(name)
}

/// Optional map from lowercased audio filename to transcription text.
///
/// Built once per run from whatever sidecars exist on disk; read-only
/// thereafter.
#[derive(Debug, Clone, Default)]
pub struct TranscriptionIndex {
    texts: HashMap<String, String>,
}

impl TranscriptionIndex {
    /// Creates an empty index (no captions rendered).
    pub fn empty() -> Self {
        Self::default()
    }

    /// Loads sidecars for every audio asset in the media index.
    ///
    /// Corrected sidecars take precedence over raw ones. Unreadable or
    /// missing sidecars suppress the caption for that asset, nothing more.
    pub fn load(index: &MediaIndex, output_path: &Path) -> Self {
        let mut texts = HashMap::new();

        for (key, _) in index.iter() {
            if !MediaKind::from_filename(key).is_audio() {
                continue;
            }
            let Some(asset) = index.resolve(key, output_path) else {
                continue;
            };
            let corrected = corrected_path(&asset);
            let original = original_path(&asset);
            let sidecar = if corrected.is_file() { corrected } else { original };
            if let Ok(text) = fs::read_to_string(&sidecar) {
                texts.insert(key.to_string(), text.trim().to_string());
            }
        }

        Self { texts }
    }

    /// Transcription for a lowercased audio filename, if one was loaded.
    pub fn get(&self, key_lower: &str) -> Option<&str> {
        self.texts.get(key_lower).map(String::as_str)
    }

    /// Number of loaded transcriptions.
    pub fn len(&self) -> usize {
        self.texts.len()
    }

    /// Returns `true` if no transcription was loaded.
    pub fn is_empty(&self) -> bool {
        self.texts.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sidecar_paths() {
        let asset = Path::new("/export/voice.opus");
        assert_eq!(corrected_path(asset), PathBuf::from("/export/voice.opus.txt"));
        assert_eq!(
            original_path(asset),
            PathBuf::from("/export/voice.opus.original.txt")
        );
    }

    #[test]
    fn test_load_prefers_corrected_over_raw() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("output.html");
        fs::write(dir.path().join("voice.opus"), b"x").unwrap();
        fs::write(dir.path().join("voice.opus.original.txt"), "raw words\n").unwrap();
        fs::write(dir.path().join("voice.opus.txt"), "fixed words\n").unwrap();

        let index = MediaIndex::build(dir.path(), &output);
        let transcriptions = TranscriptionIndex::load(&index, &output);
        assert_eq!(transcriptions.get("voice.opus"), Some("fixed words"));
    }

    #[test]
    fn test_load_falls_back_to_raw() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("output.html");
        fs::write(dir.path().join("voice.opus"), b"x").unwrap();
        fs::write(dir.path().join("voice.opus.original.txt"), "raw words").unwrap();

        let index = MediaIndex::build(dir.path(), &output);
        let transcriptions = TranscriptionIndex::load(&index, &output);
        assert_eq!(transcriptions.get("voice.opus"), Some("raw words"));
    }

    #[test]
    fn test_missing_sidecar_is_absent_not_error() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("output.html");
        fs::write(dir.path().join("voice.opus"), b"x").unwrap();
        fs::write(dir.path().join("photo.jpg"), b"x").unwrap();

        let index = MediaIndex::build(dir.path(), &output);
        let transcriptions = TranscriptionIndex::load(&index, &output);
        assert!(transcriptions.is_empty());
        assert!(transcriptions.get("voice.opus").is_none());
    }

    #[test]
    fn test_non_audio_assets_never_loaded() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("output.html");
        fs::write(dir.path().join("photo.jpg"), b"x").unwrap();
        // A stray sidecar-looking file for a non-audio asset is ignored.
        fs::write(dir.path().join("photo.jpg.txt"), "not a caption").unwrap();

        let index = MediaIndex::build(dir.path(), &output);
        let transcriptions = TranscriptionIndex::load(&index, &output);
        assert!(transcriptions.get("photo.jpg").is_none());
    }
}
