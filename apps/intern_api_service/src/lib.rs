pub mod app_module;
pub mod app_router;
pub mod assistant;
pub mod error;
pub mod health;
pub mod prompts;
