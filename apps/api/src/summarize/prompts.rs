use super::{MAX_SUMMARY_WORDS, MIN_SUMMARY_WORDS};
use crate::llm_client::prompts::{GROUNDING_INSTRUCTION, PLAIN_TEXT_ONLY};

pub const SUMMARY_SYSTEM_BASE: &str = "You are a recruiter's assistant. \
    You write short, neutral summaries of candidate resumes.";

pub const SUMMARY_PROMPT_TEMPLATE: &str = "\
Summarize the following resume excerpt in {min_words} to {max_words} words. \
Focus on roles, skills, and measurable achievements.

Resume excerpt:
---
{chunk}
---";

pub fn summary_system() -> String {
    format!("{SUMMARY_SYSTEM_BASE} {GROUNDING_INSTRUCTION} {PLAIN_TEXT_ONLY}")
}

pub fn summary_prompt(chunk: &str) -> String {
    SUMMARY_PROMPT_TEMPLATE
        .replace("{min_words}", &MIN_SUMMARY_WORDS.to_string())
        .replace("{max_words}", &MAX_SUMMARY_WORDS.to_string())
        .replace("{chunk}", chunk)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_embeds_chunk_and_bounds() {
        let prompt = summary_prompt("Jane Doe, Rust engineer");
        assert!(prompt.contains("Jane Doe, Rust engineer"));
        assert!(prompt.contains("30 to 130 words"));
        assert!(!prompt.contains('{'));
    }

    #[test]
    fn test_system_prompt_forbids_markdown() {
        assert!(summary_system().contains("markdown"));
    }
}
