//! Prompt text for the generation calls.
//!
//! Templating is plain interpolation; the model is trusted to honor the
//! requested formats and nothing here re-parses its answers.

const TRANSLATE_SYSTEM: &str = include_str!("./prompts/translate_system.txt");
const TRANSLATE_USER: &str = include_str!("./prompts/translate_user.txt");
const SUMMARIZE_SYSTEM: &str = include_str!("./prompts/summarize_system.txt");
const TITLE: &str = include_str!("./prompts/title.txt");
const SUMMARY: &str = include_str!("./prompts/summary.txt");

pub fn translate_system_prompt() -> &'static str {
    TRANSLATE_SYSTEM.trim()
}

pub fn translate_user_prompt(source_text: &str) -> String {
    format!("{}\n\n{source_text}", TRANSLATE_USER.trim())
}

/// System prompt shared by the title and summary requests
pub fn summarize_system_prompt() -> &'static str {
    SUMMARIZE_SYSTEM.trim()
}

/// Asks for a `Week X: Day Y – NAME (Z)` title where `Z` is `episode`
pub fn title_user_prompt(content: &str, episode: i64) -> String {
    format!("{} and Z is the value {episode}\n{content}", TITLE.trim())
}

pub fn summary_user_prompt(content: &str) -> String {
    format!("{}\n{content}", SUMMARY.trim())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_prompt_carries_episode_and_content() {
        let prompt = title_user_prompt("Week 1 Day 2\nBody", 7);

        assert!(prompt.contains("Week X: Day Y – NAME (Z)"));
        assert!(prompt.contains("Z is the value 7\n"));
        assert!(prompt.ends_with("Week 1 Day 2\nBody"));
    }

    #[test]
    fn test_translate_prompt_appends_source_after_blank_line() {
        let prompt = translate_user_prompt("שלום");

        assert!(prompt.starts_with("Translate the following text to English"));
        assert!(prompt.ends_with("Week X Day Y\n\nשלום"));
    }

    #[test]
    fn test_summary_prompt_ends_with_content() {
        assert!(summary_user_prompt("Body text").ends_with("episode summary.\nBody text"));
    }

    #[test]
    fn test_system_prompts_are_trimmed() {
        assert!(!translate_system_prompt().ends_with('\n'));
        assert!(!summarize_system_prompt().ends_with('\n'));
    }
}
