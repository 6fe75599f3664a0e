use regression::{ModelParameters, PredictionInput};
use serde::Serialize;
use trainer::TrainingSample;

use crate::analysis::AnalysisResult;

/// Everything a session produces about the priced property.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PricingReport {
    pub params: ModelParameters,
    pub input: PredictionInput,
    pub predicted_price: f64,
    /// The last training sample, if the run published any.
    pub final_sample: Option<TrainingSample>,
    pub analysis: AnalysisResult,
}

impl PricingReport {
    /// Renders the report as pretty-printed JSON.
    ///
    /// # Errors
    /// Fails if a figure can't be represented in JSON.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
