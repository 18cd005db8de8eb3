use serde::Deserialize;

/// Used when the model leaves out `reply`.
pub const FALLBACK_REPLY: &str = "I'm not sure how to respond to that.";

/// The tutor's answer to one utterance
#[derive(Debug, Clone, PartialEq)]
pub struct TutorReply {
    /// Conversational reply
    pub reply: String,
    /// Grammar or phrasing fix; empty when the input had no errors
    pub correction: String,
}

#[derive(Deserialize)]
struct RawTutorReply {
    #[serde(default)]
    reply: Option<String>,
    #[serde(default)]
    correction: Option<String>,
}

impl TutorReply {
    /// Parse the model's content as a single JSON object.
    ///
    /// Missing or null keys fall back to defaults; anything that is not an
    /// object, or a key holding a non-string value, is an error.
    pub fn parse(content: &str) -> Result<Self, serde_json::Error> {
        let object: serde_json::Map<String, serde_json::Value> = serde_json::from_str(content)?;
        let raw: RawTutorReply = serde_json::from_value(serde_json::Value::Object(object))?;

        Ok(Self {
            reply: raw.reply.unwrap_or_else(|| FALLBACK_REPLY.to_string()),
            correction: raw.correction.unwrap_or_default(),
        })
    }
}
