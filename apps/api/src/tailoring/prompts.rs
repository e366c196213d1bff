// Prompt templates for the resume tailoring model.
// Placeholders are replaced verbatim; nothing is escaped or truncated.

use crate::llm_client::prompts::JSON_ONLY_SYSTEM;

/// Standing instructions for the tailoring model.
pub const TAILOR_INSTRUCTIONS: &str = "\
You are an expert resume tailoring specialist. Your role is to:

1. Analyze the provided resume text and job description
2. Identify key skills, experiences, and qualifications in the resume
3. Match relevant resume content to job requirements
4. Suggest specific improvements to better align the resume with the job
5. Recommend which sections to emphasize or de-emphasize
6. Provide actionable feedback for customizing the resume

Always provide:
- A summary of how well the resume matches the job
- Specific recommendations for improvements
- Key skills/experiences to highlight
- Suggested modifications to better target the role
- A confidence score for the match

Be concise but thorough in your analysis.";

/// Output contract appended to the instructions.
pub const TAILOR_OUTPUT_SCHEMA: &str = r#"Return a JSON object with this EXACT schema (no extra fields):
{"tailored_resume": "<your complete analysis as a single string>"}"#;

/// Template used when a job description is supplied.
/// Replace `{resume_text}` and `{job_description}` before sending.
pub const WITH_JOB_DESCRIPTION_TEMPLATE: &str = "\
Please analyze this resume against the job description and provide tailoring recommendations:

RESUME TEXT:
{resume_text}

JOB DESCRIPTION:
{job_description}

Please provide a detailed analysis with specific recommendations for improving this resume to better match the job requirements.";

/// Template used without a job description. Replace `{resume_text}`.
pub const GENERAL_TEMPLATE: &str = "\
Please analyze this resume and provide general improvement recommendations:

RESUME TEXT:
{resume_text}

Please provide a detailed analysis with recommendations for improving this resume.";

/// Full system prompt sent with every tailoring call.
pub fn tailor_system_prompt() -> String {
    format!("{TAILOR_INSTRUCTIONS}\n\n{JSON_ONLY_SYSTEM}\n\n{TAILOR_OUTPUT_SCHEMA}")
}
