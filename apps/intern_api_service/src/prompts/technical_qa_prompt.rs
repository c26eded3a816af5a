/// Known technology domains for the technical Q&A endpoint. Anything the
/// caller sends outside this table is treated as `General`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QaDomain {
    Flowise,
    Langchain,
    Rag,
    Tensorflow,
    Pytorch,
    Sso,
    Oauth,
    General,
}

impl QaDomain {
    pub fn from_key(key: Option<&str>) -> Self {
        match key {
            Some("flowise") => Self::Flowise,
            Some("langchain") => Self::Langchain,
            Some("rag") => Self::Rag,
            Some("tensorflow") => Self::Tensorflow,
            Some("pytorch") => Self::Pytorch,
            Some("sso") => Self::Sso,
            Some("oauth") => Self::Oauth,
            _ => Self::General,
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::Flowise => {
                "Flowise is a low-code platform for building AI agents and chatbots with visual workflow design."
            }
            Self::Langchain => {
                "LangChain is a framework for developing applications powered by language models."
            }
            Self::Rag => {
                "RAG (Retrieval-Augmented Generation) combines retrieval systems with generation for knowledge-based AI."
            }
            Self::Tensorflow => {
                "TensorFlow is a deep learning framework for building and deploying ML models."
            }
            Self::Pytorch => {
                "PyTorch is a deep learning framework known for its dynamic computation graphs."
            }
            Self::Sso => {
                "SSO (Single Sign-On) enables users to authenticate once and access multiple applications."
            }
            Self::Oauth => "OAuth is an authorization framework for secure API access.",
            Self::General => "General AI/ML knowledge and best practices.",
        }
    }
}

pub struct TechnicalQaPrompt;

impl TechnicalQaPrompt {
    pub fn prompt(domain: QaDomain, question: &str) -> String {
        format!(
            r#"You are an expert in AI/ML technologies. Answer this technical question with depth and accuracy.

Context: {}

Question: {}

Provide a comprehensive answer that includes:
1. Direct answer to the question
2. Technical details and implementation considerations
3. Best practices and common pitfalls
4. Real-world applications and examples
5. Related concepts or technologies"#,
            domain.description(),
            question
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_keys_map_to_their_domain() {
        assert_eq!(QaDomain::from_key(Some("flowise")), QaDomain::Flowise);
        assert_eq!(QaDomain::from_key(Some("oauth")), QaDomain::Oauth);
        assert_eq!(QaDomain::from_key(Some("general")), QaDomain::General);
    }

    #[test]
    fn unknown_or_missing_keys_fall_back_to_general() {
        assert_eq!(QaDomain::from_key(Some("made-up")), QaDomain::General);
        assert_eq!(QaDomain::from_key(None), QaDomain::General);
    }

    #[test]
    fn prompt_interpolates_description_and_question() {
        let prompt = TechnicalQaPrompt::prompt(QaDomain::Rag, "How do I chunk documents?");
        assert!(prompt.contains("combines retrieval systems with generation"));
        assert!(prompt.contains("Question: How do I chunk documents?"));
    }
}
