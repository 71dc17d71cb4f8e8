//! Name transformation: validate, prompt, call the provider, check the reply.

use super::prompt::build_prompt;
use super::providers::{ProviderError, TextProvider};
use metrics::counter;
use std::sync::Arc;
use thiserror::Error;

/// Failure kinds of a single name generation.
#[derive(Debug, Error)]
pub enum GenerateNameError {
    #[error("name is empty")]
    InvalidInput,

    #[error("provider returned no text")]
    EmptyResponse,

    #[error("reply has no bracketed reading: {0:?}")]
    UnexpectedFormat(String),

    #[error("provider call failed: {0}")]
    Upstream(#[from] ProviderError),
}

impl GenerateNameError {
    /// Message that may be shown to the caller.
    pub fn public_message(&self) -> &'static str {
        match self {
            GenerateNameError::InvalidInput => "名前が入力されていません。",
            GenerateNameError::EmptyResponse => "名前の生成に失敗しました(応答なし)。",
            GenerateNameError::UnexpectedFormat(_) => "名前の生成結果が予期せぬ形式です。",
            GenerateNameError::Upstream(_) => "名前の生成中にサーバーエラーが発生しました。",
        }
    }

    /// Metric label for this outcome.
    pub fn outcome(&self) -> &'static str {
        match self {
            GenerateNameError::InvalidInput => "invalid_input",
            GenerateNameError::EmptyResponse => "empty_response",
            GenerateNameError::UnexpectedFormat(_) => "unexpected_format",
            GenerateNameError::Upstream(_) => "upstream_failure",
        }
    }
}

/// True when `text` holds an ASCII `(`…`)` pair or a full-width `（`…`）` pair.
///
/// Only presence of both characters is checked, not their order.
pub fn has_reading_brackets(text: &str) -> bool {
    (text.contains('(') && text.contains(')')) || (text.contains('（') && text.contains('）'))
}

/// Turns a full name into a short name with its reading.
#[derive(Clone)]
pub struct NameGenerator {
    provider: Arc<dyn TextProvider>,
}

impl NameGenerator {
    pub fn new(provider: Arc<dyn TextProvider>) -> Self {
        Self { provider }
    }

    /// Generate the short name for `name`.
    ///
    /// Every call makes exactly one provider request unless `name` is empty,
    /// in which case none is made.
    pub async fn generate(&self, name: &str) -> Result<String, GenerateNameError> {
        let result = self.generate_inner(name).await;

        let outcome = match &result {
            Ok(_) => "success",
            Err(e) => e.outcome(),
        };
        counter!("name_generation_total", "outcome" => outcome).increment(1);

        result
    }

    async fn generate_inner(&self, name: &str) -> Result<String, GenerateNameError> {
        if name.is_empty() {
            tracing::warn!("Name generation requested with an empty name");
            return Err(GenerateNameError::InvalidInput);
        }

        tracing::info!(name = %name, model = %self.provider.model(), "Generating short name");

        let prompt = build_prompt(name);
        let response = self.provider.generate(&prompt).await.map_err(|e| {
            tracing::error!(error = %e, "Provider call failed");
            GenerateNameError::from(e)
        })?;

        let text = response
            .text
            .as_deref()
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .ok_or_else(|| {
                tracing::warn!(
                    finish_reason = ?response.finish_reason,
                    "Provider response contained no text"
                );
                GenerateNameError::EmptyResponse
            })?;

        if !has_reading_brackets(text) {
            tracing::warn!(reply = %text, "Provider reply is not in the expected format");
            return Err(GenerateNameError::UnexpectedFormat(text.to_string()));
        }

        tracing::info!(
            new_name = %text,
            input_tokens = response.input_tokens,
            output_tokens = response.output_tokens,
            "Generated short name"
        );

        Ok(text.to_string())
    }
}
