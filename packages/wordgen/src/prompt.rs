const WORD_PROMPT: &str = include_str!("../prompts/word_of_the_moment.txt");
const QUIZ_PROMPT: &str = include_str!("../prompts/quiz.txt");

/// Optional tailoring of the generated word to a learner.
#[derive(Debug, Clone, Default)]
pub struct WordPreferences {
    /// Topics the learner cares about, e.g. "astronomy and sailing".
    pub interests: Option<String>,
    /// Free-form difficulty level, e.g. "beginner" or "advanced".
    pub difficulty: Option<String>,
}

impl WordPreferences {
    pub fn is_empty(&self) -> bool {
        non_blank(&self.interests).is_none() && non_blank(&self.difficulty).is_none()
    }
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

/// Build the instruction prompt for a single vocabulary word.
pub fn build_word_prompt() -> &'static str {
    WORD_PROMPT
}

/// Build the word prompt, tailored to `preferences` when any are set.
pub fn build_personalized_word_prompt(preferences: &WordPreferences) -> String {
    let mut prompt = WORD_PROMPT.to_string();
    if preferences.is_empty() {
        return prompt;
    }

    prompt.push('\n');
    if let Some(interests) = non_blank(&preferences.interests) {
        prompt.push_str(&format!(
            "Pick a word that would be interesting for someone interested in {interests}.\n"
        ));
    }
    if let Some(difficulty) = non_blank(&preferences.difficulty) {
        prompt.push_str(&format!(
            "The word should be at a {difficulty} difficulty level.\n"
        ));
    }

    prompt
}

/// Build the prompt asking for multiple-choice questions about `word`.
pub fn build_quiz_prompt(word: &str) -> String {
    QUIZ_PROMPT.replace("{word}", word)
}
