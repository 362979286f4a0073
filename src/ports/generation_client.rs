//! Text-generation client port definition.

use crate::domain::AppError;

/// Characters of the system prompt shown by a dry run.
const DRY_RUN_PREVIEW_CHARS: usize = 500;

/// Request sent to a text-generation service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    /// Assembled system prompt.
    pub system_text: String,
    /// The user turn.
    pub user_text: String,
}

/// Response from a text-generation service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationResponse {
    /// Generated text.
    pub text: String,
    /// Input tokens billed, when the service reports usage.
    pub input_tokens: Option<u64>,
    /// Output tokens billed, when the service reports usage.
    pub output_tokens: Option<u64>,
}

/// Port for text-generation operations.
pub trait GenerationClient {
    /// Send the system and user text and return the generated reply.
    fn generate(&self, request: GenerationRequest) -> Result<GenerationResponse, AppError>;
}

/// Client used when no API credential is configured.
///
/// Makes no network call; the response text describes what would have been sent.
#[derive(Debug, Clone, Default)]
pub struct DryRunGenerationClient;

impl GenerationClient for DryRunGenerationClient {
    fn generate(&self, request: GenerationRequest) -> Result<GenerationResponse, AppError> {
        tracing::info!(
            system_chars = request.system_text.chars().count(),
            "dry run, no request sent"
        );

        let banner = "=".repeat(80);
        let preview: String = request.system_text.chars().take(DRY_RUN_PREVIEW_CHARS).collect();
        let text = format!(
            "{banner}\nSYSTEM PROMPT:\n{banner}\n{preview}...\n\n{banner}\nUSER MESSAGE:\n{banner}\n{}",
            request.user_text
        );

        Ok(GenerationResponse { text, input_tokens: None, output_tokens: None })
    }
}
