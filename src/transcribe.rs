//! Collaborator interfaces for audio transcription and correction.
//!
//! The actual speech-to-text, text-correction, and language-detection
//! services are external collaborators; this crate specifies them only as
//! traits and ships no network code. The orchestration loops here walk the
//! conversation in order, find audio assets referenced by messages, and read
//! or write the plain-text sidecar files the collaborators produce
//! ([`crate::sidecar`] holds the naming convention).
//!
//! Any collaborator failure is treated as "skip this asset and continue";
//! a failed item leaves no sidecar behind and never aborts the run.

use std::fs;
use std::path::Path;

use crate::Message;
use crate::error::Result;
use crate::media::{MediaIndex, MediaKind};
use crate::sidecar::{corrected_path, original_path};

/// Number of recent conversation lines handed to the corrector as context.
const CONTEXT_WINDOW: usize = 20;

/// Messages sampled when detecting the conversation language.
const LANGUAGE_SAMPLE_MESSAGES: usize = 50;

/// Speech-to-text collaborator: turns an audio file into raw text.
pub trait SpeechToText {
    /// Transcribes the audio at `audio` in the given language.
    fn transcribe(&self, audio: &Path, language: &str) -> Result<String>;
}

/// Correction collaborator: fixes mishearings in a raw transcription using
/// recent conversation context.
pub trait Corrector {
    /// Returns the corrected transcription.
    fn correct(&self, raw: &str, context: &str) -> Result<String>;
}

/// Language-detection collaborator.
pub trait LanguageDetector {
    /// Returns a language code for the sample text.
    fn detect(&self, sample: &str) -> Result<String>;
}

/// Counters returned by the orchestration loops.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SidecarStats {
    /// Audio occurrences considered (asset present on disk)
    pub considered: usize,
    /// Sidecar files written this run
    pub written: usize,
}

/// Detects the conversation language from early message text.
///
/// Samples up to the first 50 messages, keeping texts longer than ten
/// characters. Returns `fallback` when the sample is empty or the detector
/// fails.
pub fn detect_language(
    messages: &[Message],
    detector: &dyn LanguageDetector,
    fallback: &str,
) -> String {
    let sample: Vec<&str> = messages
        .iter()
        .take(LANGUAGE_SAMPLE_MESSAGES)
        .map(|m| m.text.trim())
        .filter(|t| t.len() > 10)
        .collect();

    if sample.is_empty() {
        return fallback.to_string();
    }

    detector
        .detect(&sample.join(" "))
        .unwrap_or_else(|_| fallback.to_string())
}

/// Audio assets referenced by `msg`, resolved to on-disk paths.
fn audio_assets(
    msg: &Message,
    index: &MediaIndex,
    output_path: &Path,
) -> Vec<(String, std::path::PathBuf)> {
    let text = msg.text.to_lowercase();
    let mut assets = Vec::new();
    for (key, _) in index.iter() {
        if !text.contains(key) || !MediaKind::from_filename(key).is_audio() {
            continue;
        }
        if let Some(full) = index.resolve(key, output_path) {
            if full.is_file() {
                assets.push((key.to_string(), full));
            }
        }
    }
    assets
}

/// Transcribes every referenced audio asset that has no raw sidecar yet.
///
/// Walks messages in conversation order; `limit` caps the number of audios
/// considered. A collaborator or write failure skips that asset.
pub fn transcribe_audios(
    messages: &[Message],
    index: &MediaIndex,
    output_path: &Path,
    stt: &dyn SpeechToText,
    language: &str,
    limit: Option<usize>,
) -> SidecarStats {
    let mut stats = SidecarStats::default();

    'outer: for msg in messages {
        for (_, asset) in audio_assets(msg, index, output_path) {
            if limit.is_some_and(|n| stats.considered >= n) {
                break 'outer;
            }
            stats.considered += 1;

            let sidecar = original_path(&asset);
            if sidecar.exists() {
                continue;
            }
            let Ok(raw) = stt.transcribe(&asset, language) else {
                continue;
            };
            if fs::write(&sidecar, raw).is_ok() {
                stats.written += 1;
            }
        }
    }

    stats
}

/// Corrects raw transcriptions using rolling conversation context.
///
/// For each referenced audio with a raw sidecar and no corrected one, hands
/// the raw text plus the last twenty conversation lines to the corrector and
/// writes `<asset>.txt`. Text messages and already-processed audios feed the
/// context so later corrections benefit from earlier ones.
pub fn correct_transcriptions(
    messages: &[Message],
    index: &MediaIndex,
    output_path: &Path,
    corrector: &dyn Corrector,
    limit: Option<usize>,
) -> SidecarStats {
    let mut stats = SidecarStats::default();
    let mut context_lines: Vec<String> = Vec::new();

    'outer: for msg in messages {
        let assets = audio_assets(msg, index, output_path);

        if assets.is_empty() {
            if !msg.is_empty() {
                context_lines.push(format!("{}: {}", msg.sender, msg.text));
            }
            continue;
        }

        for (_, asset) in assets {
            if limit.is_some_and(|n| stats.considered >= n) {
                break 'outer;
            }
            stats.considered += 1;

            let corrected = corrected_path(&asset);
            if corrected.is_file() {
                continue;
            }
            let Ok(raw) = fs::read_to_string(original_path(&asset)) else {
                continue;
            };
            let raw = raw.trim().to_string();
            if raw.is_empty() {
                continue;
            }

            let window_start = context_lines.len().saturating_sub(CONTEXT_WINDOW);
            let context = context_lines[window_start..].join("\n");

            if let Ok(fixed) = corrector.correct(&raw, &context) {
                if fs::write(&corrected, fixed).is_ok() {
                    stats.written += 1;
                }
            }
            // Feed the raw transcription to the context either way, so
            // subsequent audios see it.
            context_lines.push(format!("{}: [audio] {}", msg.sender, raw));
        }
    }

    stats
}
