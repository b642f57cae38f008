//! Offline suggestion backend: canned text chosen by keyword.

use std::time::Duration;

use async_trait::async_trait;
use tracing::debug;

use crate::suggest::{SuggestError, SuggestionGenerator};

pub const DEFAULT_DELAY: Duration = Duration::from_millis(1500);

pub const EDUCATION_RESPONSE: &str = "Completed coursework in advanced algorithms, machine \
learning, and distributed systems. Participated in undergraduate research program focusing on \
natural language processing. Dean's List for all semesters.";

pub const EXPERIENCE_RESPONSE: &str = "Led cross-functional team to develop and launch \
customer-facing web application that increased user engagement by 45%. Implemented CI/CD \
pipeline reducing deployment time by 60%. Mentored junior developers and conducted code reviews \
to ensure quality standards.";

pub const PROJECT_RESPONSE: &str = "Developed a full-stack web application using React, \
Node.js, and MongoDB. Implemented user authentication, responsive UI design, and RESTful API \
endpoints. Deployed using Docker and AWS, resulting in 99.9% uptime.";

pub const SUMMARY_RESPONSE: &str = "Results-driven software engineer with a strong foundation \
in full-stack development and a passion for creating efficient, user-friendly applications. \
Proven ability to translate business requirements into technical solutions that drive user \
engagement and business growth.";

pub const SKILLS_RESPONSE: &str = "JavaScript, TypeScript, React, Node.js, Express, MongoDB, \
SQL, Git, Docker, AWS, RESTful APIs, GraphQL, Jest, Agile/Scrum";

pub const GENERIC_RESPONSE: &str = "I've generated a professional improvement to your content. \
This enhancement emphasizes your achievements and uses industry-standard terminology to make \
your resume more impactful.";

/// Keyword table in priority order; the first rule with a matching keyword wins.
const RULES: &[(&[&str], &str)] = &[
    (&["education"], EDUCATION_RESPONSE),
    (&["experience", "job"], EXPERIENCE_RESPONSE),
    (&["project"], PROJECT_RESPONSE),
    (&["summary", "objective"], SUMMARY_RESPONSE),
    (&["skill"], SKILLS_RESPONSE),
];

/// Picks the canned response for a prompt. Matching is a case-sensitive
/// substring test.
pub fn canned_response(prompt: &str) -> &'static str {
    RULES
        .iter()
        .find(|(keywords, _)| keywords.iter().any(|k| prompt.contains(k)))
        .map(|(_, response)| *response)
        .unwrap_or(GENERIC_RESPONSE)
}

/// Stand-in for a language model. Waits `delay`, then answers from the
/// keyword table.
#[derive(Debug, Clone)]
pub struct CannedSuggester {
    delay: Duration,
}

impl CannedSuggester {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

impl Default for CannedSuggester {
    fn default() -> Self {
        Self::new(DEFAULT_DELAY)
    }
}

#[async_trait]
impl SuggestionGenerator for CannedSuggester {
    fn backend(&self) -> &'static str {
        "canned"
    }

    async fn generate(&self, prompt: &str) -> Result<String, SuggestError> {
        tokio::time::sleep(self.delay).await;
        let response = canned_response(prompt);
        debug!(
            "Canned suggestion for prompt {:?}: {:?}",
            prompt.chars().take(60).collect::<String>(),
            response.chars().take(40).collect::<String>()
        );
        Ok(response.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::time::Instant;

    #[test]
    fn test_priority_education_beats_experience() {
        assert_eq!(
            canned_response("my education and work experience"),
            EDUCATION_RESPONSE
        );
    }

    #[test]
    fn test_job_maps_to_experience() {
        assert_eq!(canned_response("describe my last job"), EXPERIENCE_RESPONSE);
    }

    #[test]
    fn test_experience_beats_project() {
        assert_eq!(
            canned_response("project experience"),
            EXPERIENCE_RESPONSE
        );
    }

    #[test]
    fn test_objective_maps_to_summary() {
        assert_eq!(canned_response("write an objective"), SUMMARY_RESPONSE);
    }

    #[test]
    fn test_skill_is_lowest_keyword() {
        assert_eq!(canned_response("list a few skills"), SKILLS_RESPONSE);
        assert_eq!(canned_response("summary of skills"), SUMMARY_RESPONSE);
    }

    #[test]
    fn test_unmatched_prompt_gets_generic_response() {
        assert_eq!(canned_response("How do I explain gaps?"), GENERIC_RESPONSE);
        assert_eq!(canned_response(""), GENERIC_RESPONSE);
    }

    #[test]
    fn test_matching_is_case_sensitive() {
        assert_eq!(canned_response("Education"), GENERIC_RESPONSE);
    }

    #[tokio::test(start_paused = true)]
    async fn test_project_prompt_returns_project_text_after_delay() {
        let suggester = CannedSuggester::default();
        let start = Instant::now();

        let text = suggester.suggest("Describe my side project").await;

        assert_eq!(text, PROJECT_RESPONSE);
        assert!(
            start.elapsed() >= DEFAULT_DELAY,
            "response must arrive after the simulated delay"
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_custom_delay_is_respected() {
        let suggester = CannedSuggester::new(Duration::from_millis(20));
        let start = Instant::now();
        suggester.suggest("skill").await;
        let elapsed = start.elapsed();
        assert!(elapsed >= Duration::from_millis(20));
        assert!(elapsed < DEFAULT_DELAY);
    }
}
