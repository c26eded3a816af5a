pub mod chat_prompt;
pub mod learning_path_prompt;
pub mod resume_analysis_prompt;
pub mod technical_qa_prompt;

pub use chat_prompt::{ChatContext, ChatPrompt};
pub use learning_path_prompt::LearningPathPrompt;
pub use resume_analysis_prompt::ResumeAnalysisPrompt;
pub use technical_qa_prompt::{QaDomain, TechnicalQaPrompt};
