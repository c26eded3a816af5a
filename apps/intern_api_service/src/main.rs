use std::{env, sync::Arc};

use axum::{
    extract::DefaultBodyLimit,
    http::{header, HeaderValue, Method},
    Extension,
};
use dotenvy::dotenv;
use gemini_llm::{GeminiService, TextGenerationService};
use intern_api_service::{app_module::AppState, app_router::application_router};
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing_subscriber::{fmt::format::FmtSpan, FmtSubscriber};

const MAX_BODY_BYTES: usize = 10 * 1024 * 1024;

#[tokio::main]
async fn main() {
    dotenv().ok();
    let subscriber_builder = FmtSubscriber::builder()
        .with_level(true)
        .with_span_events(FmtSpan::CLOSE);

    if env::var("APP_ENVIRONMENT").unwrap_or("dev".to_string()) == "dev" {
        tracing::subscriber::set_global_default(
            subscriber_builder
                .compact()
                .pretty()
                .with_ansi(true)
                .finish(),
        )
        .expect("setting dev subscriber failed");
    } else {
        tracing::subscriber::set_global_default(
            subscriber_builder.json().with_ansi(false).finish(),
        )
        .expect("setting prod subscriber failed");
    }

    // Provider handle and credential are process-wide and built exactly once.
    // Absence of the key is not fatal here: AI endpoints report it per request.
    let provider = env::var("GEMINI_API_KEY")
        .ok()
        .filter(|key| !key.is_empty())
        .map(|key| Arc::new(GeminiService::new(key)) as Arc<dyn TextGenerationService>);
    let key_configured = provider.is_some();

    let state = AppState::new(provider);

    let frontend_url = env::var("FRONTEND_URL").unwrap_or("http://localhost:3000".to_string());
    let allowed_origin = frontend_url
        .parse::<HeaderValue>()
        .expect("invalid FRONTEND_URL");

    let app = application_router().layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(Extension(state))
            .layer(
                CorsLayer::new()
                    .allow_origin(allowed_origin)
                    .allow_methods([Method::GET, Method::POST])
                    .allow_headers([header::CONTENT_TYPE])
                    .allow_credentials(true),
            )
            .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
            .into_inner(),
    );

    let port = env::var("PORT")
        .ok()
        .and_then(|value| value.parse::<u16>().ok())
        .unwrap_or(5000);

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", port))
        .await
        .expect("unable to create listener");

    tracing::info!("AI/ML Intern Website Backend running on port {}", port);
    tracing::info!(
        "Gemini API configured: {}",
        if key_configured { "yes" } else { "no" }
    );
    axum::serve(listener, app)
        .await
        .expect("unable to start server");
}
