use std::env;

use log::debug;
use regression::PredictionInput;

use super::{
    AnalysisErr, AnalysisPrompt, AnalysisResult, Analyst, Result, TextGenerator, parse_response,
};

/// An analyst backed by a remote text-generation service.
pub struct RemoteAnalyst<G: TextGenerator> {
    generator: G,
    key_var: String,
    api_key: Option<String>,
}

impl<G: TextGenerator> RemoteAnalyst<G> {
    /// Creates a new `RemoteAnalyst`.
    ///
    /// # Arguments
    /// * `generator` - The service client.
    /// * `key_var` - The name of the variable the key is read from, for reporting.
    /// * `api_key` - The service key, if any.
    pub fn new(generator: G, key_var: impl Into<String>, api_key: Option<String>) -> Self {
        Self {
            generator,
            key_var: key_var.into(),
            api_key,
        }
    }

    /// Creates a new `RemoteAnalyst` reading the key from the environment. An empty
    /// variable counts as a missing one.
    pub fn from_env(generator: G, key_var: impl Into<String>) -> Self {
        let key_var = key_var.into();
        let api_key = env::var(&key_var).ok().filter(|key| !key.is_empty());
        Self::new(generator, key_var, api_key)
    }
}

impl<G: TextGenerator + Sync> Analyst for RemoteAnalyst<G> {
    async fn analyze(
        &self,
        input: &PredictionInput,
        predicted_price: f64,
    ) -> Result<AnalysisResult> {
        let Some(api_key) = self.api_key.as_deref() else {
            return Err(AnalysisErr::MissingCredentials {
                var: self.key_var.clone(),
            });
        };

        let prompt = AnalysisPrompt::new(*input, predicted_price).render();
        debug!(chars = prompt.len(); "requesting analysis");

        let text = self.generator.generate(api_key, &prompt).await?;
        parse_response(&text)
    }
}

/// A `TextGenerator` with no service behind it, every request fails.
#[derive(Debug, Default, Clone, Copy)]
pub struct Disconnected;

impl TextGenerator for Disconnected {
    async fn generate(&self, _api_key: &str, _prompt: &str) -> Result<String> {
        Err(AnalysisErr::Unavailable(
            "no text generation service configured".into(),
        ))
    }
}
