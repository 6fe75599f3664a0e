//! Enrichment of a predicted price by an external text-generation service.
//!
//! The service itself lives outside this crate, behind the [`TextGenerator`] trait.
//! What lives here is the request it receives, the shape of its answer and the canned
//! answers used when it can't be reached.

mod error;
mod prompt;
mod remote;
mod result;

use log::{error, warn};
use regression::PredictionInput;

pub use error::{AnalysisErr, Result};
pub use prompt::{AnalysisPrompt, format_price, parse_response};
pub use remote::{Disconnected, RemoteAnalyst};
pub use result::AnalysisResult;

/// Refines a price predicted by the model.
#[allow(unused)]
#[trait_variant::make(Analyst: Send)]
pub trait LocalAnalyst {
    /// Should analyze the property and its predicted price.
    ///
    /// # Arguments
    /// * `input` - The features of the property.
    /// * `predicted_price` - The price given by the trained model.
    async fn analyze(&self, input: &PredictionInput, predicted_price: f64)
    -> Result<AnalysisResult>;
}

/// A text-generation backend answering prompts with JSON documents.
#[allow(unused)]
#[trait_variant::make(TextGenerator: Send)]
pub trait LocalTextGenerator {
    /// Should answer the prompt following the `AnalysisResult` schema.
    ///
    /// # Arguments
    /// * `api_key` - The credentials for the service.
    /// * `prompt` - The rendered request.
    async fn generate(&self, api_key: &str, prompt: &str) -> Result<String>;
}

/// Analyzes the property, falling back to a canned answer on any failure.
///
/// Missing credentials yield a result pointing at the variable to set, any other
/// failure a ±5% range around the predicted price.
pub async fn analyze_with_fallback<A>(
    analyst: &A,
    input: &PredictionInput,
    predicted_price: f64,
) -> AnalysisResult
where
    A: Analyst + Sync,
{
    match analyst.analyze(input, predicted_price).await {
        Ok(result) => result,
        Err(AnalysisErr::MissingCredentials { var }) => {
            error!(var = var.as_str(); "analysis credentials not found");
            AnalysisResult::missing_credentials(&var)
        }
        Err(e) => {
            warn!(error:% = e; "analysis failed, showing standard variance");
            AnalysisResult::standard_variance(predicted_price)
        }
    }
}
