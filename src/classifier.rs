//! HTTP text classifier speaking the OpenAI-compatible chat-completions API.

use crate::error::StatementError;
use crate::rules::TextClassifier;
use crate::types::Category;
use reqwest::Url;
use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};

/// Connection settings for the classification service.
///
/// Constructed by the caller and passed in; nothing is read from the
/// process environment.
#[derive(Debug, Clone)]
pub struct ClassifierConfig {
    /// Full URL of the chat-completions endpoint.
    pub endpoint: String,
    /// Model name sent with every request.
    pub model: String,
    /// Optional bearer token.
    pub api_key: Option<String>,
}

/// Blocking HTTP classifier for expense descriptions.
///
/// Sends one batched chat request per call and expects the model to answer
/// with a JSON string array of labels, one per description, in order.
#[derive(Debug, Clone)]
pub struct HttpClassifier {
    http: Client,
    endpoint: Url,
    model: String,
    api_key: Option<String>,
}

impl HttpClassifier {
    /// Builds a classifier from explicit configuration.
    pub fn new(config: ClassifierConfig) -> Result<Self, StatementError> {
        let endpoint = Url::parse(&config.endpoint).map_err(|err| {
            StatementError::ClassificationService(format!(
                "invalid endpoint '{}': {err}",
                config.endpoint
            ))
        })?;
        let http = Client::builder()
            .build()
            .map_err(|err| StatementError::ClassificationService(err.to_string()))?;
        Ok(Self {
            http,
            endpoint,
            model: config.model,
            api_key: config.api_key,
        })
    }
}

impl TextClassifier for HttpClassifier {
    fn classify(&self, descriptions: &[&str]) -> Result<Vec<String>, StatementError> {
        if descriptions.is_empty() {
            return Ok(Vec::new());
        }

        let request = ChatRequest {
            model: self.model.clone(),
            messages: vec![
                Message {
                    role: "system".to_string(),
                    content: SYSTEM_PROMPT.to_string(),
                },
                Message {
                    role: "user".to_string(),
                    content: build_prompt(descriptions),
                },
            ],
            temperature: 0.0,
        };

        let mut builder = self.http.post(self.endpoint.clone()).json(&request);
        if let Some(key) = &self.api_key {
            builder = builder.bearer_auth(key);
        }

        let response: ChatResponse = builder
            .send()
            .map_err(service_error)?
            .error_for_status()
            .map_err(service_error)?
            .json()
            .map_err(service_error)?;

        let content = response
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or_else(|| {
                StatementError::ClassificationService("response had no choices".to_string())
            })?;

        parse_label_array(&content)
    }
}

const SYSTEM_PROMPT: &str =
    "You are a financial categorizer. Return only the requested format.";

/// Numbered transaction list plus the fixed label set the model may use.
fn build_prompt(descriptions: &[&str]) -> String {
    let mut prompt = String::from(
        "Categorize these Norwegian bank transactions into ONE of these categories:\n",
    );
    for label in Category::EXPENSE_LABELS {
        prompt.push_str("- ");
        prompt.push_str(label);
        prompt.push('\n');
    }
    prompt.push_str("\nTransactions:\n");
    for (idx, description) in descriptions.iter().enumerate() {
        prompt.push_str(&format!("{idx}: {description}\n"));
    }
    prompt.push_str(
        "\nReturn ONLY a JSON array of categories in the same order, like:\n\
         [\"mat_dagligvare\", \"bolig\", \"transport\"]\n",
    );
    prompt
}

/// Parses the model answer as a JSON string array, tolerating Markdown code
/// fences around it.
fn parse_label_array(content: &str) -> Result<Vec<String>, StatementError> {
    let trimmed = content
        .trim()
        .trim_start_matches("```json")
        .trim_start_matches("```")
        .trim_end_matches("```")
        .trim();
    serde_json::from_str(trimmed).map_err(|err| {
        StatementError::ClassificationService(format!("unparsable label list: {err}"))
    })
}

fn service_error(err: reqwest::Error) -> StatementError {
    StatementError::ClassificationService(err.to_string())
}

#[derive(Debug, Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<Message>,
    temperature: f64,
}

#[derive(Debug, Serialize, Deserialize)]
struct Message {
    role: String,
    content: String,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: Message,
}
