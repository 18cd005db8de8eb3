use serde::Serialize;

pub const NO_SPEECH_USER_TEXT: &str = "(No speech detected)";
pub const NO_SPEECH_AI_TEXT: &str = "I couldn't hear anything, could you try again?";

/// Everything returned to the caller for one turn. All fields are always present.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TurnResult {
    pub user_text: String,
    pub ai_text: String,
    pub correction: String,
    /// Synthesized reply audio, base64 encoded; empty when nothing was synthesized
    pub audio_base64: String,
}

impl TurnResult {
    /// Canned answer for an upload with no audible speech.
    pub fn no_speech() -> Self {
        Self {
            user_text: NO_SPEECH_USER_TEXT.to_string(),
            ai_text: NO_SPEECH_AI_TEXT.to_string(),
            correction: String::new(),
            audio_base64: String::new(),
        }
    }
}
