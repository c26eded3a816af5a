pub struct ResumeAnalysisPrompt;

impl ResumeAnalysisPrompt {
    pub fn prompt(resume_text: &str) -> String {
        format!(
            r#"Analyze this resume for an AI/ML internship position.
The ideal candidate should have experience with:
- Machine Learning and Deep Learning fundamentals
- TensorFlow, PyTorch, LangChain
- Flowise and RAG understanding
- SSO protocols (OAuth, OpenID)
- API integration experience
- Production AI applications

Please provide:
1. Strengths that match the role
2. Areas for improvement
3. Overall fit score (1-10)
4. Specific recommendations

Resume content:
{}"#,
            resume_text
        )
    }
}
