use axum::{routing::post, Extension, Json, Router};
use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::app_module::AppState;
use crate::error::ApiError;
use crate::prompts::{ChatContext, QaDomain};

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub message: String,
    pub context: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub success: bool,
    pub response: String,
    pub context: String,
    pub timestamp: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumeAnalysisRequest {
    #[serde(default)]
    pub resume_text: String,
}

#[derive(Debug, Serialize)]
pub struct ResumeAnalysisResponse {
    pub success: bool,
    pub analysis: String,
    pub timestamp: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LearningPathRequest {
    #[serde(default)]
    pub skill_level: String,
    pub interests: Option<String>,
    pub goals: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LearningPathResponse {
    pub success: bool,
    pub learning_path: String,
    pub timestamp: String,
}

#[derive(Debug, Deserialize)]
pub struct TechnicalQaRequest {
    #[serde(default)]
    pub question: String,
    pub domain: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct TechnicalQaResponse {
    pub success: bool,
    pub answer: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,
    pub timestamp: String,
}

pub fn assistant_router() -> Router {
    Router::new()
        .route("/chat", post(chat))
        .route("/analyze-resume", post(analyze_resume))
        .route("/learning-path", post(learning_path))
        .route("/technical-qa", post(technical_qa))
}

fn timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

fn to_envelope<T: Serialize>(response: &T) -> Result<Json<Value>, ApiError> {
    serde_json::to_value(response).map(Json).map_err(|error| {
        tracing::error!("Unhandled error: {}", error);
        ApiError::Internal
    })
}

pub async fn chat(
    Extension(state): Extension<AppState>,
    Json(request): Json<ChatRequest>,
) -> Result<Json<Value>, ApiError> {
    if request.message.is_empty() {
        return Err(ApiError::Validation("Message is required"));
    }

    let context = request
        .context
        .clone()
        .unwrap_or_else(|| "internship".to_string());
    let framing = ChatContext::from_key(request.context.as_deref());

    let text = state
        .service
        .prompt_proxy
        .chat(framing, &request.message)
        .await?;

    to_envelope(&ChatResponse {
        success: true,
        response: text,
        context,
        timestamp: timestamp(),
    })
}

pub async fn analyze_resume(
    Extension(state): Extension<AppState>,
    Json(request): Json<ResumeAnalysisRequest>,
) -> Result<Json<Value>, ApiError> {
    if request.resume_text.is_empty() {
        return Err(ApiError::Validation("Resume text is required"));
    }

    let analysis = state
        .service
        .prompt_proxy
        .analyze_resume(&request.resume_text)
        .await?;

    to_envelope(&ResumeAnalysisResponse {
        success: true,
        analysis,
        timestamp: timestamp(),
    })
}

pub async fn learning_path(
    Extension(state): Extension<AppState>,
    Json(request): Json<LearningPathRequest>,
) -> Result<Json<Value>, ApiError> {
    if request.skill_level.is_empty() {
        return Err(ApiError::Validation("Skill level is required"));
    }

    let learning_path = state
        .service
        .prompt_proxy
        .learning_path(
            &request.skill_level,
            request.interests.as_deref(),
            request.goals.as_deref(),
        )
        .await?;

    to_envelope(&LearningPathResponse {
        success: true,
        learning_path,
        timestamp: timestamp(),
    })
}

pub async fn technical_qa(
    Extension(state): Extension<AppState>,
    Json(request): Json<TechnicalQaRequest>,
) -> Result<Json<Value>, ApiError> {
    if request.question.is_empty() {
        return Err(ApiError::Validation("Question is required"));
    }

    let domain = QaDomain::from_key(request.domain.as_deref());

    let answer = state
        .service
        .prompt_proxy
        .technical_qa(domain, &request.question)
        .await?;

    to_envelope(&TechnicalQaResponse {
        success: true,
        answer,
        // The caller's own key is echoed back, not the post-fallback one.
        domain: request.domain,
        timestamp: timestamp(),
    })
}
