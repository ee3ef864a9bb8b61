//! Vocabulary word generation.
//!
//! Asks a generative text model for one vocabulary word, strips the markdown
//! fencing the model tends to add, parses the JSON and checks that every
//! required field is present. The same pipeline produces multiple-choice
//! quizzes about a word.

pub mod client;
pub mod config;
pub mod error;
pub mod generator;
pub mod normalize;
pub mod prompt;
pub mod quiz;
pub mod record;

#[cfg(any(test, feature = "test-utils"))]
pub use client::test_support::MockLlmClient;
pub use client::{GeminiClient, LlmClient, LlmRequest, LlmResponse};
pub use config::ProviderConfig;
pub use error::{ErrorKind, Result, ValidationError, WordGenError};
pub use generator::WordGenerator;
pub use normalize::{clean_response, normalize, parse_record, strip_fences};
pub use prompt::WordPreferences;
pub use quiz::{parse_quiz, score_quiz, QuizQuestion};
pub use record::{WordRecord, REQUIRED_FIELDS};
