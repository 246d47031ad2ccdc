// src/message.rs
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Deserialize)]
pub struct RecognizeRequest {
    // Any JSON type is accepted here so a wrong type reads as "no image".
    #[serde(default)]
    pub image: Option<Value>,
}

impl RecognizeRequest {
    /// The base64 payload, if it is a non-empty string.
    pub fn image(&self) -> Option<&str> {
        self.image
            .as_ref()
            .and_then(Value::as_str)
            .filter(|image| !image.is_empty())
    }
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct RecognizeResponse {
    pub success: bool,
    pub text: Option<String>,
}
