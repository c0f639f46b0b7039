//! DeepAI image recognition backend.
//!
//! Uploads the image as a multipart form and reads the description and tags
//! out of the `output` object:
//!
//! ```json
//! {
//!   "output": {
//!     "general_description": "a red apple on a table",
//!     "tags": ["apple", "fruit", "red"]
//!   }
//! }
//! ```
//!
//! Missing fields are not an error: the API omits them for images it cannot
//! describe, and an empty [`Description`] downgrades to the fallback stem
//! downstream.

use super::{Describe, Description, ProviderError};
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;

const DEFAULT_ENDPOINT: &str = "https://api.deepai.org/api/image-recognition";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

pub struct DeepAiProvider {
    client: reqwest::blocking::Client,
    endpoint: String,
    api_key: String,
}

#[derive(Deserialize)]
struct Response {
    #[serde(default)]
    output: Option<Output>,
}

#[derive(Deserialize)]
struct Output {
    #[serde(default)]
    general_description: Option<String>,
    #[serde(default)]
    tags: Vec<String>,
}

impl DeepAiProvider {
    pub fn new(api_key: String, endpoint: Option<String>) -> Self {
        Self {
            client: reqwest::blocking::Client::builder()
                .timeout(REQUEST_TIMEOUT)
                .build()
                .unwrap_or_else(|_| reqwest::blocking::Client::new()),
            endpoint: endpoint.unwrap_or_else(|| DEFAULT_ENDPOINT.to_string()),
            api_key,
        }
    }
}

impl Describe for DeepAiProvider {
    fn describe(&self, path: &Path, bytes: &[u8]) -> Result<Description, ProviderError> {
        let filename = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| "image".to_string());
        let part = reqwest::blocking::multipart::Part::bytes(bytes.to_vec()).file_name(filename);
        let form = reqwest::blocking::multipart::Form::new().part("image", part);

        let response = self
            .client
            .post(&self.endpoint)
            .header("api-key", &self.api_key)
            .multipart(form)
            .send()?;

        let status = response.status();
        if !status.is_success() {
            return Err(ProviderError::Status(status.as_u16()));
        }

        let body: Response = response
            .json()
            .map_err(|e| ProviderError::Shape(e.to_string()))?;

        let output = body.output.unwrap_or(Output {
            general_description: None,
            tags: Vec::new(),
        });
        Ok(Description {
            caption: output.general_description,
            tags: output.tags,
        })
    }

    fn name(&self) -> &'static str {
        "deepai"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> Description {
        let body: Response = serde_json::from_str(json).unwrap();
        let output = body.output.unwrap_or(Output {
            general_description: None,
            tags: Vec::new(),
        });
        Description {
            caption: output.general_description,
            tags: output.tags,
        }
    }

    #[test]
    fn parses_description_and_tags() {
        let desc = parse(
            r#"{"output": {"general_description": "a red apple", "tags": ["apple", "fruit"]}}"#,
        );
        assert_eq!(desc.caption.as_deref(), Some("a red apple"));
        assert_eq!(desc.tags, vec!["apple", "fruit"]);
    }

    #[test]
    fn missing_output_yields_empty_description() {
        let desc = parse(r#"{"id": "abc123"}"#);
        assert_eq!(desc, Description::default());
    }

    #[test]
    fn tags_without_description() {
        let desc = parse(r#"{"output": {"tags": ["apple"]}}"#);
        assert_eq!(desc.caption, None);
        assert_eq!(desc.tags, vec!["apple"]);
    }

    #[test]
    fn density_suffix_applies() {
        let provider = DeepAiProvider::new("key".to_string(), None);
        assert!(provider.appends_density());
        assert_eq!(provider.name(), "deepai");
    }
}
