//! Local Ollama vision backend.
//!
//! Captions images through a locally running Ollama server's `/api/generate`
//! endpoint. The image travels base64-encoded in the `images` array and the
//! model's answer comes back in `response`:
//!
//! ```json
//! {"model": "llava", "prompt": "...", "images": ["<base64>"], "stream": false}
//! ```
//!
//! This backend produces captions only, no tags, and names files without a
//! density suffix.

use super::{Describe, Description, ProviderError};
use base64::Engine;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

const DEFAULT_ENDPOINT: &str = "http://localhost:11434/api/generate";

const DEFAULT_MODEL: &str = "llava";

const CAPTION_PROMPT: &str =
    "Describe this icon in one short phrase. Answer with the phrase only.";

// Local models can be slow to load on first call.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(120);

pub struct OllamaProvider {
    client: reqwest::blocking::Client,
    endpoint: String,
    model: String,
}

#[derive(Serialize)]
struct Request<'a> {
    model: &'a str,
    prompt: &'a str,
    images: Vec<String>,
    stream: bool,
}

#[derive(Deserialize)]
struct Response {
    response: String,
}

impl OllamaProvider {
    pub fn new(endpoint: Option<String>, model: Option<String>) -> Self {
        Self {
            client: reqwest::blocking::Client::builder()
                .timeout(REQUEST_TIMEOUT)
                .build()
                .unwrap_or_else(|_| reqwest::blocking::Client::new()),
            endpoint: endpoint.unwrap_or_else(|| DEFAULT_ENDPOINT.to_string()),
            model: model.unwrap_or_else(|| DEFAULT_MODEL.to_string()),
        }
    }
}

impl Describe for OllamaProvider {
    fn describe(&self, _path: &Path, bytes: &[u8]) -> Result<Description, ProviderError> {
        let encoded = base64::engine::general_purpose::STANDARD.encode(bytes);
        let request = Request {
            model: &self.model,
            prompt: CAPTION_PROMPT,
            images: vec![encoded],
            stream: false,
        };

        let response = self.client.post(&self.endpoint).json(&request).send()?;

        let status = response.status();
        if !status.is_success() {
            return Err(ProviderError::Status(status.as_u16()));
        }

        let body: Response = response
            .json()
            .map_err(|e| ProviderError::Shape(e.to_string()))?;

        let caption = body.response.trim().to_string();
        Ok(Description {
            caption: (!caption.is_empty()).then_some(caption),
            tags: Vec::new(),
        })
    }

    fn appends_density(&self) -> bool {
        false
    }

    fn name(&self) -> &'static str {
        "ollama"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_density_suffix_for_local_captions() {
        let provider = OllamaProvider::new(None, None);
        assert!(!provider.appends_density());
        assert_eq!(provider.name(), "ollama");
    }

    #[test]
    fn request_serializes_expected_shape() {
        let request = Request {
            model: "llava",
            prompt: "describe",
            images: vec!["aGVsbG8=".to_string()],
            stream: false,
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["model"], "llava");
        assert_eq!(json["stream"], false);
        assert_eq!(json["images"][0], "aGVsbG8=");
    }

    #[test]
    fn blank_response_becomes_no_caption() {
        let body: Response = serde_json::from_str(r#"{"response": "  \n"}"#).unwrap();
        let caption = body.response.trim().to_string();
        assert!(caption.is_empty());
    }
}
