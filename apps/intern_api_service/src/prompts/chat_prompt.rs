/// Which instruction framing wraps the user's chat message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatContext {
    Internship,
    Technical,
    General,
}

impl ChatContext {
    /// An omitted context means the internship framing; an unrecognized
    /// value gets the bare pass-through framing, never an empty prompt.
    pub fn from_key(key: Option<&str>) -> Self {
        match key {
            None => Self::Internship,
            Some("internship") => Self::Internship,
            Some("technical") => Self::Technical,
            Some(_) => Self::General,
        }
    }
}

pub struct ChatPrompt;

impl ChatPrompt {
    pub fn prompt(context: ChatContext, message: &str) -> String {
        match context {
            ChatContext::Internship => format!(
                r#"You are an AI assistant for an AI/ML internship website.
You help potential candidates understand the role, requirements, and technologies involved.
The internship focuses on:
- AI Agent Development with Flowise
- AI/ML Implementation with TensorFlow, PyTorch, LangChain
- RAG (Retrieval-Augmented Generation) Systems
- SSO Integration (OAuth, OpenID)
- API Integration and Documentation
- Production AI Applications

Respond helpfully and professionally about these topics and the internship opportunity.

User question: {}"#,
                message
            ),
            ChatContext::Technical => format!(
                r#"You are a technical AI assistant specializing in AI/ML technologies.
Help with questions about Flowise, LangChain, RAG systems, TensorFlow, PyTorch,
SSO protocols, and AI agent development.

User question: {}"#,
                message
            ),
            ChatContext::General => format!(
                r#"You are a helpful AI assistant. Please answer the following question:

{}"#,
                message
            ),
        }
    }
}
