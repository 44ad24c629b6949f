use std::str::FromStr;
use std::sync::OnceLock;

use regex::Regex;

use crate::types::{GenerationRequest, KNOWN_VOICES, SpeechModel, ValidationVerdict};

fn voice_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?i)^[a-z0-9_-]+$").expect("must be valid regex"))
}

/// Check a submission against the studio's structural rules
///
/// Every rule is evaluated independently so all problems surface at
/// once. An unknown but well-formed voice is not an error; it only
/// flags the verdict so an advisory can accompany a later success.
pub fn validate(request: &GenerationRequest) -> ValidationVerdict {
    let mut verdict = ValidationVerdict::default();

    if request.api_key.trim().is_empty() {
        verdict.errors.push("Enter an API key for the synthesis service.".to_owned());
    }

    if request.text.trim().is_empty() {
        verdict.errors.push("Enter text to synthesize.".to_owned());
    }

    if SpeechModel::from_str(&request.model).is_err() {
        verdict.errors.push("Choose one of the supported models.".to_owned());
    }

    let voice = request.voice.trim();
    if voice.is_empty() {
        verdict.errors.push("Specify a voice for the generation.".to_owned());
    } else if !voice_pattern().is_match(voice) {
        verdict
            .errors
            .push("Voice may only contain latin letters, digits, hyphen, and underscore.".to_owned());
    } else if !KNOWN_VOICES.contains(&voice) {
        verdict.custom_voice_used = true;
    }

    verdict
}
