use crate::adapters::{HttpGenerationClient, RetryPolicy, RetryingGenerationClient};
use crate::app::AppContext;
use crate::domain::{AppError, GenerationApiConfig, ModuleSelection};
use crate::ports::{
    DryRunGenerationClient, GenerationClient, GenerationRequest, GenerationResponse,
    ModuleFilesystem,
};

/// Built-in test messages for exercising a prompt.
pub const SAMPLE_MESSAGES: [&str; 3] = [
    "Hi! I forgot my password and need help logging in.",
    "I was charged twice this month! This is unacceptable!",
    "Does your app have dark mode?",
];

/// The user turn to send alongside the assembled prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserMessage {
    Text(String),
    /// 1-based index into [`SAMPLE_MESSAGES`].
    Sample(usize),
}

impl UserMessage {
    pub fn resolve(&self) -> Result<String, AppError> {
        match self {
            UserMessage::Text(text) => Ok(text.clone()),
            UserMessage::Sample(index) => index
                .checked_sub(1)
                .and_then(|i| SAMPLE_MESSAGES.get(i))
                .map(|message| message.to_string())
                .ok_or_else(|| {
                    AppError::InvalidSelection(format!(
                        "sample must be between 1 and {}, got {}",
                        SAMPLE_MESSAGES.len(),
                        index
                    ))
                }),
        }
    }
}

#[derive(Debug, Clone)]
pub struct SendOptions {
    pub selection: ModuleSelection,
    pub message: UserMessage,
}

#[derive(Debug, Clone)]
pub struct SendOutcome {
    pub user_text: String,
    pub response: GenerationResponse,
    /// The response is a local preview; nothing was sent.
    pub dry_run: bool,
}

/// Client selected for a send.
pub enum SendClient {
    /// Talks to the generation service.
    Live(Box<dyn GenerationClient>),
    /// Only previews the request.
    DryRun(DryRunGenerationClient),
}

impl SendClient {
    pub fn is_dry_run(&self) -> bool {
        matches!(self, SendClient::DryRun(_))
    }
}

impl GenerationClient for SendClient {
    fn generate(&self, request: GenerationRequest) -> Result<GenerationResponse, AppError> {
        match self {
            SendClient::Live(client) => client.generate(request),
            SendClient::DryRun(client) => client.generate(request),
        }
    }
}

/// Build the generation client.
///
/// Without an API key (or with `dry_run`) no request is made and the returned
/// client only previews what would be sent.
pub fn build_client(
    config: &GenerationApiConfig,
    api_key: Option<String>,
    dry_run: bool,
) -> Result<SendClient, AppError> {
    match api_key {
        Some(key) if !dry_run => {
            let http = HttpGenerationClient::new(key, config)?;
            Ok(SendClient::Live(Box::new(RetryingGenerationClient::new(
                Box::new(http),
                RetryPolicy::from_config(config),
            ))))
        }
        Some(_) => Ok(SendClient::DryRun(DryRunGenerationClient)),
        None => {
            if !dry_run {
                tracing::warn!("no API key provided, falling back to dry run");
            }
            Ok(SendClient::DryRun(DryRunGenerationClient))
        }
    }
}

pub fn execute<F>(
    ctx: &AppContext<F>,
    client: &SendClient,
    options: SendOptions,
) -> Result<SendOutcome, AppError>
where
    F: ModuleFilesystem + Clone,
{
    let user_text = options.message.resolve()?;
    let store = ctx.open_store()?;
    let response = crate::send(&store, &options.selection, &user_text, client)?;

    Ok(SendOutcome { user_text, response, dry_run: client.is_dry_run() })
}
