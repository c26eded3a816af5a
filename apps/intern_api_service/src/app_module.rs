use std::sync::Arc;

use gemini_llm::TextGenerationService;

use crate::assistant::assistant_service::PromptProxyService;

#[derive(Clone)]
pub struct AppService {
    pub prompt_proxy: PromptProxyService,
}

impl AppService {
    pub fn new(provider: Option<Arc<dyn TextGenerationService>>) -> Self {
        let prompt_proxy = PromptProxyService::new(provider);

        Self { prompt_proxy }
    }
}

#[derive(Clone)]
pub struct AppState {
    pub service: AppService,
}

impl AppState {
    pub fn new(provider: Option<Arc<dyn TextGenerationService>>) -> Self {
        Self {
            service: AppService::new(provider),
        }
    }
}
