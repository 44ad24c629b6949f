use serde::Serialize;
use strum::{Display, EnumIter, EnumString};

/// One synthesis attempt, parsed from a form submission
///
/// Immutable once constructed; discarded after handling.
#[derive(Debug, Clone)]
pub struct GenerationRequest {
    /// Upstream API key, as submitted
    pub api_key: String,
    /// Model identifier; checked against [`SpeechModel`] during validation
    pub model: String,
    /// Voice identifier, either curated or custom
    pub voice: String,
    /// Text to synthesize into speech
    pub text: String,
    /// Requested file stem; a timestamp default is used when absent
    pub file_name_hint: Option<String>,
    /// Whether the key should be remembered for the session
    pub remember_key: bool,
}

/// Models the studio accepts for synthesis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString, EnumIter)]
pub enum SpeechModel {
    #[strum(serialize = "gpt-4o-mini-tts")]
    Gpt4oMiniTts,
    #[strum(serialize = "gpt-4o-audio-preview")]
    Gpt4oAudioPreview,
    #[strum(serialize = "gpt-4o-mini-tts-stereo")]
    Gpt4oMiniTtsStereo,
}

/// Voices curated in the submission form
///
/// A structurally valid voice outside this list is still synthesized,
/// with an advisory attached to the success report.
pub const KNOWN_VOICES: [&str; 8] = ["alloy", "ballad", "echo", "fable", "onyx", "sage", "sol", "verse"];

/// Outcome of structural validation of one submission
#[derive(Debug, Default)]
pub struct ValidationVerdict {
    /// Human-readable problems, in field order; empty means valid
    pub errors: Vec<String>,
    /// Set when the voice is well-formed but not curated
    pub custom_voice_used: bool,
}

impl ValidationVerdict {
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Raw audio returned by a synthesis backend
pub struct SpeechAudio {
    /// Raw audio bytes
    pub audio: Vec<u8>,
    /// Content type of the audio (e.g. "audio/mpeg")
    pub content_type: String,
}

/// A persisted audio file under the output root
#[derive(Debug, Serialize)]
pub struct StoredArtifact {
    /// File name as stored, always ending in `.mp3`
    pub file_name: String,
    /// Size on disk
    pub size_bytes: u64,
    /// Modification time, RFC 3339, when the filesystem reports one
    pub modified: Option<String>,
}

/// User-facing result of handling one submission
#[derive(Debug, Default, Serialize)]
pub struct HandlingReport {
    /// Success and advisory messages, in the order produced
    pub messages: Vec<String>,
    /// Accumulated errors; a non-empty list means nothing was persisted
    pub errors: Vec<String>,
}
