use std::sync::Arc;

use tracing::{debug, error, info};

use crate::client::{LlmClient, LlmRequest};
use crate::config::ProviderConfig;
use crate::error::{Result, ValidationError};
use crate::normalize::{clean_response, parse_record};
use crate::prompt::{self, WordPreferences};
use crate::quiz::{parse_quiz, QuizQuestion};
use crate::record::WordRecord;

/// Asks the provider for vocabulary words and validates the replies.
///
/// Holds no per-request state; concurrent calls are independent.
pub struct WordGenerator {
    client: Arc<dyn LlmClient>,
    temperature: Option<f64>,
}

impl WordGenerator {
    pub fn new(client: Arc<dyn LlmClient>, config: &ProviderConfig) -> Self {
        Self {
            client,
            temperature: config.temperature,
        }
    }

    /// Generate a fresh word record with exactly one provider call.
    pub async fn generate(&self) -> Result<WordRecord> {
        self.ask(prompt::build_word_prompt().to_string(), parse_record)
            .await
    }

    /// Like [`generate`](Self::generate), with the prompt tailored to
    /// `preferences`.
    pub async fn generate_for(&self, preferences: &WordPreferences) -> Result<WordRecord> {
        self.ask(prompt::build_personalized_word_prompt(preferences), parse_record)
            .await
    }

    /// Ask for multiple-choice questions about `word`.
    pub async fn generate_quiz(&self, word: &str) -> Result<Vec<QuizQuestion>> {
        info!(word, "generating quiz");
        self.ask(prompt::build_quiz_prompt(word), parse_quiz).await
    }

    /// One provider call, then fence cleanup and `parse` on the reply.
    async fn ask<T>(
        &self,
        prompt: String,
        parse: impl FnOnce(&str) -> std::result::Result<T, ValidationError>,
    ) -> Result<T> {
        let request = LlmRequest {
            prompt,
            temperature: self.temperature,
        };

        let response = self.client.complete(&request).await?;

        info!(raw = %response.content, "provider response");
        debug!(
            input_tokens = response.input_tokens,
            output_tokens = response.output_tokens,
            "token usage"
        );

        let cleaned = clean_response(&response.content);
        let parsed = parse(&cleaned).map_err(|e| {
            error!(
                error = %e,
                raw = %response.content,
                cleaned = %cleaned,
                "provider text failed validation"
            );
            e
        })?;

        Ok(parsed)
    }
}
