//! Tailoring Request Builder — chooses one of two fixed prompt templates.

use crate::tailoring::prompts::{GENERAL_TEMPLATE, WITH_JOB_DESCRIPTION_TEMPLATE};

/// The prompt sent to the tailoring model.
///
/// The variant is decided once, in `build`: a job description that is
/// non-empty after trimming selects `WithJobDescription`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TailoringPrompt {
    WithJobDescription {
        resume_text: String,
        job_description: String,
    },
    General {
        resume_text: String,
    },
}

impl TailoringPrompt {
    pub fn build(resume_text: &str, job_description: &str) -> Self {
        if job_description.trim().is_empty() {
            TailoringPrompt::General {
                resume_text: resume_text.to_string(),
            }
        } else {
            TailoringPrompt::WithJobDescription {
                resume_text: resume_text.to_string(),
                job_description: job_description.to_string(),
            }
        }
    }

    /// Short label for logs.
    pub fn kind(&self) -> &'static str {
        match self {
            TailoringPrompt::WithJobDescription { .. } => "with_job_description",
            TailoringPrompt::General { .. } => "general",
        }
    }

    pub fn render(&self) -> String {
        match self {
            TailoringPrompt::WithJobDescription {
                resume_text,
                job_description,
            } => fill(
                WITH_JOB_DESCRIPTION_TEMPLATE,
                &[
                    ("{resume_text}", resume_text),
                    ("{job_description}", job_description),
                ],
            ),
            TailoringPrompt::General { resume_text } => {
                fill(GENERAL_TEMPLATE, &[("{resume_text}", resume_text)])
            }
        }
    }
}

/// Substitutes placeholders in a single left-to-right pass, so placeholder
/// text inside a substituted value is never expanded again.
fn fill(template: &str, values: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(
        template.len() + values.iter().map(|(_, v)| v.len()).sum::<usize>(),
    );
    let mut rest = template;

    loop {
        let next = values
            .iter()
            .filter_map(|(key, value)| rest.find(key).map(|pos| (pos, *key, *value)))
            .min_by_key(|(pos, _, _)| *pos);

        match next {
            Some((pos, key, value)) => {
                out.push_str(&rest[..pos]);
                out.push_str(value);
                rest = &rest[pos + key.len()..];
            }
            None => {
                out.push_str(rest);
                return out;
            }
        }
    }
}
