use std::sync::Arc;

use gemini_llm::TextGenerationService;

use crate::error::ApiError;
use crate::prompts::{
    ChatContext, ChatPrompt, LearningPathPrompt, QaDomain, ResumeAnalysisPrompt, TechnicalQaPrompt,
};

const MODEL_ID: &str = "gemini-pro";

/// Turns one validated request into one provider call and one reply.
///
/// The provider is injected so tests can swap in a stub; `None` means no
/// API key was configured at startup, and every operation short-circuits
/// before composing a prompt.
#[derive(Clone)]
pub struct PromptProxyService {
    provider: Option<Arc<dyn TextGenerationService>>,
}

impl PromptProxyService {
    pub fn new(provider: Option<Arc<dyn TextGenerationService>>) -> Self {
        Self { provider }
    }

    fn provider(&self) -> Result<&dyn TextGenerationService, ApiError> {
        self.provider
            .as_deref()
            .ok_or(ApiError::ApiKeyNotConfigured)
    }

    async fn generate(&self, action: &'static str, prompt: &str) -> Result<String, ApiError> {
        let provider = self.provider()?;

        provider.generate(MODEL_ID, prompt).await.map_err(|error| {
            tracing::error!("Gemini API error: {:#}", error);
            ApiError::provider(action, error)
        })
    }

    pub async fn chat(&self, context: ChatContext, message: &str) -> Result<String, ApiError> {
        self.generate("generate AI response", &ChatPrompt::prompt(context, message))
            .await
    }

    pub async fn analyze_resume(&self, resume_text: &str) -> Result<String, ApiError> {
        self.generate("analyze resume", &ResumeAnalysisPrompt::prompt(resume_text))
            .await
    }

    pub async fn learning_path(
        &self,
        skill_level: &str,
        interests: Option<&str>,
        goals: Option<&str>,
    ) -> Result<String, ApiError> {
        self.generate(
            "generate learning path",
            &LearningPathPrompt::prompt(skill_level, interests, goals),
        )
        .await
    }

    pub async fn technical_qa(&self, domain: QaDomain, question: &str) -> Result<String, ApiError> {
        self.generate(
            "answer technical question",
            &TechnicalQaPrompt::prompt(domain, question),
        )
        .await
    }
}
