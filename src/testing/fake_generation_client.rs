use std::sync::{Arc, Mutex};

use crate::domain::AppError;
use crate::ports::{GenerationClient, GenerationRequest, GenerationResponse};

/// Records requests and answers with a fixed reply.
#[derive(Clone)]
pub struct FakeGenerationClient {
    pub requests: Arc<Mutex<Vec<GenerationRequest>>>,
    pub reply: String,
}

impl FakeGenerationClient {
    pub fn new(reply: impl Into<String>) -> Self {
        Self { requests: Arc::new(Mutex::new(vec![])), reply: reply.into() }
    }

    pub fn received(&self) -> Vec<GenerationRequest> {
        self.requests.lock().unwrap().clone()
    }
}

impl GenerationClient for FakeGenerationClient {
    fn generate(&self, request: GenerationRequest) -> Result<GenerationResponse, AppError> {
        self.requests.lock().unwrap().push(request);
        Ok(GenerationResponse {
            text: self.reply.clone(),
            input_tokens: Some(42),
            output_tokens: Some(7),
        })
    }
}
