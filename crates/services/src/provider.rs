use async_trait::async_trait;
use rand::Rng;
use reqwest::Client;
use serde::Deserialize;

use quiz_core::model::Question;

use crate::error::ProviderError;

/// Source of multiple-choice questions for a quiz run.
#[async_trait]
pub trait QuestionSource: Send + Sync {
    /// Load `count` questions. All-or-nothing: on any failure no partial
    /// set is returned.
    ///
    /// # Errors
    ///
    /// Returns `ProviderError` when the request, decode, or validation of
    /// any record fails.
    async fn load(&self, count: usize) -> Result<Vec<Question>, ProviderError>;
}

#[derive(Clone, Debug)]
pub struct TriviaConfig {
    pub base_url: String,
}

impl Default for TriviaConfig {
    fn default() -> Self {
        Self {
            base_url: "https://opentdb.com/api.php".into(),
        }
    }
}

/// Question provider adapter for the Open Trivia DB JSON API.
///
/// Prompt and answer texts arrive HTML-entity-encoded; each record is
/// decoded and its correct answer inserted at a uniformly random slot.
#[derive(Clone)]
pub struct TriviaService {
    client: Client,
    config: TriviaConfig,
}

impl TriviaService {
    #[must_use]
    pub fn new(config: TriviaConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }
}

impl Default for TriviaService {
    fn default() -> Self {
        Self::new(TriviaConfig::default())
    }
}

#[async_trait]
impl QuestionSource for TriviaService {
    async fn load(&self, count: usize) -> Result<Vec<Question>, ProviderError> {
        let url = format!(
            "{}?amount={count}&type=multiple",
            self.config.base_url.trim_end_matches('/')
        );

        let response = self.client.get(url).send().await?;
        if !response.status().is_success() {
            return Err(ProviderError::HttpStatus(response.status()));
        }

        let body: TriviaResponse = response.json().await?;
        if body.response_code != 0 {
            return Err(ProviderError::Api(body.response_code));
        }

        let mut rng = rand::rng();
        let mut questions = Vec::with_capacity(body.results.len());
        for record in body.results {
            questions.push(record.into_question(&mut rng)?);
        }
        Ok(questions)
    }
}

/// Fixed in-memory source for testing and prototyping.
#[derive(Clone, Default)]
pub struct FixedQuestionSource {
    questions: Vec<Question>,
}

impl FixedQuestionSource {
    #[must_use]
    pub fn new(questions: Vec<Question>) -> Self {
        Self { questions }
    }
}

#[async_trait]
impl QuestionSource for FixedQuestionSource {
    async fn load(&self, count: usize) -> Result<Vec<Question>, ProviderError> {
        let mut questions = self.questions.clone();
        questions.truncate(count);
        Ok(questions)
    }
}

//
// ─── WIRE FORMAT ──────────────────────────────────────────────────────────────
//

#[derive(Debug, Deserialize)]
struct TriviaResponse {
    response_code: u8,
    results: Vec<TriviaRecord>,
}

#[derive(Debug, Deserialize)]
struct TriviaRecord {
    question: String,
    correct_answer: String,
    incorrect_answers: Vec<String>,
}

impl TriviaRecord {
    fn into_question<R: Rng + ?Sized>(self, rng: &mut R) -> Result<Question, ProviderError> {
        let prompt = decode(&self.question);
        let correct = decode(&self.correct_answer);
        let incorrect = self.incorrect_answers.iter().map(|s| decode(s)).collect();
        let options = assemble_options(rng, correct.clone(), incorrect);
        Ok(Question::new(prompt, options, correct)?)
    }
}

fn decode(raw: &str) -> String {
    html_escape::decode_html_entities(raw).into_owned()
}

/// Insert the correct answer at a uniformly random slot among the
/// `incorrect.len() + 1` possible positions.
fn assemble_options<R: Rng + ?Sized>(
    rng: &mut R,
    correct: String,
    incorrect: Vec<String>,
) -> Vec<String> {
    let mut options = incorrect;
    let slot = rng.random_range(0..=options.len());
    options.insert(slot, correct);
    options
}

//
// ─── TESTS ────────────────────────────────────────────────────────────────────
//
