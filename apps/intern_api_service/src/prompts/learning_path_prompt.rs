const DEFAULT_INTERESTS: &str = "General AI/ML";
const DEFAULT_GOALS: &str = "Getting an AI/ML internship";

pub struct LearningPathPrompt;

impl LearningPathPrompt {
    /// Interests and goals fall back to fixed defaults when absent or empty.
    pub fn prompt(skill_level: &str, interests: Option<&str>, goals: Option<&str>) -> String {
        let interests = interests
            .filter(|value| !value.is_empty())
            .unwrap_or(DEFAULT_INTERESTS);
        let goals = goals
            .filter(|value| !value.is_empty())
            .unwrap_or(DEFAULT_GOALS);

        format!(
            r#"Create a personalized learning path for someone interested in AI/ML internships.

Current skill level: {}
Interests: {}
Goals: {}

Focus on technologies mentioned in our internship:
- Flowise for AI agent development
- LangChain for AI applications
- RAG (Retrieval-Augmented Generation)
- TensorFlow and PyTorch
- SSO protocols and API integration

Provide a structured learning path with:
1. Beginner level (if applicable)
2. Intermediate level
3. Advanced level
4. Practical projects to build
5. Timeline estimates
6. Resources and next steps"#,
            skill_level, interests, goals
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_fields_use_fallback_literals() {
        let prompt = LearningPathPrompt::prompt("beginner", None, None);
        assert!(prompt.contains("Interests: General AI/ML"));
        assert!(prompt.contains("Goals: Getting an AI/ML internship"));
    }

    #[test]
    fn empty_fields_use_fallback_literals() {
        let prompt = LearningPathPrompt::prompt("beginner", Some(""), Some(""));
        assert!(prompt.contains("Interests: General AI/ML"));
        assert!(prompt.contains("Goals: Getting an AI/ML internship"));
    }

    #[test]
    fn provided_fields_are_interpolated() {
        let prompt =
            LearningPathPrompt::prompt("advanced", Some("computer vision"), Some("a PhD"));
        assert!(prompt.contains("Current skill level: advanced"));
        assert!(prompt.contains("Interests: computer vision"));
        assert!(prompt.contains("Goals: a PhD"));
    }
}
