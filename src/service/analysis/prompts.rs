//! Prompts for Terms-of-Service analysis

/// System prompt for the ToS analysis call
pub const ANALYSIS_SYSTEM_PROMPT: &str = r#"You are an expert legal analyst specializing in Terms of Service agreements. Your role is to:

1. Identify clauses that could negatively impact users' rights or expose them to risks
2. Highlight unfair or heavily one-sided terms favoring the service provider
3. Point out any unusual or concerning provisions
4. Explain complex legal language in terms users can understand
5. Focus on practical implications for everyday users

Analyze the document thoroughly and provide actionable insights that help users make informed decisions."#;

/// Build the analysis prompt from the extracted document text
pub fn build_analysis_prompt(tos_text: &str) -> String {
    format!(
        r#"Please analyze the following Terms of Service document and provide a comprehensive analysis:

{tos_text}

Focus on:
- User rights and limitations
- Data usage and privacy implications
- Termination and account closure policies
- Liability and financial responsibilities
- Dispute resolution mechanisms
- Content ownership and licensing
- Service availability and modifications
- Any unusual or particularly concerning clauses

Provide practical insights that help users understand what they're agreeing to."#
    )
}
