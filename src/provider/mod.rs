//! Image-description provider boundary.
//!
//! The [`Describe`] trait is the seam between the deterministic rename logic
//! and the remote classification service. The orchestrator is written against
//! the trait so backends stay interchangeable and the batch logic exists
//! exactly once.
//!
//! Production backends:
//! - [`DeepAiProvider`] — DeepAI's hosted image recognition API
//! - [`OllamaProvider`] — a local Ollama vision model
//!
//! Provider failures are never fatal to a batch: the orchestrator recovers
//! each one with the fallback stem and moves on.

mod deepai;
mod ollama;

pub use deepai::DeepAiProvider;
pub use ollama::OllamaProvider;

use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("API returned status {0}")]
    Status(u16),
    #[error("unexpected response shape: {0}")]
    Shape(String),
}

/// What a provider knows about one image.
///
/// Both fields are provider-supplied text with no invariants: possibly
/// empty, possibly junk. Sanitization happens downstream.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Description {
    /// Free-form description of the image content.
    pub caption: Option<String>,
    /// Short tag strings, most relevant first.
    pub tags: Vec<String>,
}

/// A backend that can describe an image.
pub trait Describe {
    /// Describes one image. `bytes` is the full file content; `path` is
    /// available for backends that key on the filename or extension.
    fn describe(&self, path: &Path, bytes: &[u8]) -> Result<Description, ProviderError>;

    /// Whether filenames produced with this backend carry the density suffix.
    fn appends_density(&self) -> bool {
        true
    }

    /// Short backend name for console output.
    fn name(&self) -> &'static str;
}

#[cfg(test)]
pub mod tests {
    use super::*;
    use std::sync::Mutex;

    /// Mock provider that pops queued results, recording each call.
    pub struct MockProvider {
        pub results: Mutex<Vec<Result<Description, ProviderError>>>,
        pub calls: Mutex<Vec<String>>,
        pub density_suffix: bool,
    }

    impl MockProvider {
        /// Queue of results, popped back-to-front (push in reverse call order).
        pub fn with_results(results: Vec<Result<Description, ProviderError>>) -> Self {
            Self {
                results: Mutex::new(results),
                calls: Mutex::new(Vec::new()),
                density_suffix: true,
            }
        }

        pub fn call_count(&self) -> usize {
            self.calls.lock().unwrap().len()
        }
    }

    impl Describe for MockProvider {
        fn describe(&self, path: &Path, _bytes: &[u8]) -> Result<Description, ProviderError> {
            self.calls
                .lock()
                .unwrap()
                .push(path.to_string_lossy().to_string());
            self.results
                .lock()
                .unwrap()
                .pop()
                .unwrap_or_else(|| Err(ProviderError::Shape("no mock result queued".to_string())))
        }

        fn appends_density(&self) -> bool {
            self.density_suffix
        }

        fn name(&self) -> &'static str {
            "mock"
        }
    }

    pub fn caption(text: &str) -> Result<Description, ProviderError> {
        Ok(Description {
            caption: Some(text.to_string()),
            tags: Vec::new(),
        })
    }

    #[test]
    fn mock_pops_in_reverse_order() {
        let provider = MockProvider::with_results(vec![caption("second"), caption("first")]);
        let desc = provider.describe(Path::new("a.png"), &[]).unwrap();
        assert_eq!(desc.caption.as_deref(), Some("first"));
        let desc = provider.describe(Path::new("b.png"), &[]).unwrap();
        assert_eq!(desc.caption.as_deref(), Some("second"));
        assert_eq!(provider.call_count(), 2);
    }

    #[test]
    fn mock_errors_when_queue_is_dry() {
        let provider = MockProvider::with_results(vec![]);
        assert!(provider.describe(Path::new("a.png"), &[]).is_err());
    }
}
