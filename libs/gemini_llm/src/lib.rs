use anyhow::Result;
use async_trait::async_trait;

pub mod gemini;

pub use gemini::GeminiService;

/// A text-generation provider: one opaque prompt in, generated text out.
///
/// Handlers depend on this trait rather than a concrete client so tests can
/// substitute a stub provider.
#[async_trait]
pub trait TextGenerationService: Send + Sync {
    async fn generate(&self, model: &str, prompt: &str) -> Result<String>;
}
