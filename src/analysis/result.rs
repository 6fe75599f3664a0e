use serde::{Deserialize, Serialize};

/// The refined analysis of a predicted price.
///
/// Field names follow the schema requested to the service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    /// e.g. "$450,000 - $480,000".
    pub estimated_price_range: String,
    /// One or two sentences on the market demand.
    pub market_sentiment: String,
    pub key_factors: Vec<String>,
}

impl AnalysisResult {
    /// The answer given when the service credentials are not set.
    ///
    /// # Arguments
    /// * `var` - The environment variable expected to hold them.
    pub fn missing_credentials(var: &str) -> Self {
        Self {
            estimated_price_range: "N/A".into(),
            market_sentiment: "API Key Missing".into(),
            key_factors: vec![format!("Ensure {var} is set in environment variables.")],
        }
    }

    /// The answer given when the service fails, a ±5% range around the price in whole
    /// dollars, without separators.
    pub fn standard_variance(predicted_price: f64) -> Self {
        Self {
            estimated_price_range: format!(
                "${:.0} - ${:.0}",
                predicted_price * 0.95,
                predicted_price * 1.05
            ),
            market_sentiment:
                "Unable to retrieve real-time market data. Showing standard variance.".into(),
            key_factors: vec![
                "Location".into(),
                "Condition".into(),
                "Market Trends".into(),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_variance_range() {
        let result = AnalysisResult::standard_variance(500_000.);

        assert_eq!(result.estimated_price_range, "$475000 - $525000");
        assert_eq!(result.key_factors, ["Location", "Condition", "Market Trends"]);
    }

    #[test]
    fn missing_credentials_names_the_variable() {
        let result = AnalysisResult::missing_credentials("GEMINI_KEY");

        assert_eq!(result.estimated_price_range, "N/A");
        assert_eq!(result.market_sentiment, "API Key Missing");
        assert_eq!(
            result.key_factors,
            ["Ensure GEMINI_KEY is set in environment variables."]
        );
    }

    #[test]
    fn serializes_with_the_schema_names() {
        let json = serde_json::to_value(AnalysisResult::standard_variance(100.)).unwrap();

        assert!(json.get("estimatedPriceRange").is_some());
        assert!(json.get("marketSentiment").is_some());
        assert!(json.get("keyFactors").is_some());
    }
}
