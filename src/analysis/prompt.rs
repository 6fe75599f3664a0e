use regression::PredictionInput;

use super::{AnalysisErr, AnalysisResult, Result};

/// The request sent to the text-generation service.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnalysisPrompt {
    input: PredictionInput,
    predicted_price: f64,
}

impl AnalysisPrompt {
    /// Creates a new `AnalysisPrompt`.
    pub fn new(input: PredictionInput, predicted_price: f64) -> Self {
        Self {
            input,
            predicted_price,
        }
    }

    /// Renders the prompt text.
    pub fn render(&self) -> String {
        let PredictionInput {
            sqft,
            bedrooms,
            bathrooms,
        } = self.input;

        format!(
            "You are a luxury real estate appraiser.\n\
             A simple linear regression model has estimated a house price at {price}\n\
             for a property with the following specs:\n\
             - Square Footage: {sqft} sqft\n\
             - Bedrooms: {bedrooms}\n\
             - Bathrooms: {bathrooms}\n\
             \n\
             Please provide a refined analysis.\n\
             1. A realistic price range considering modern market volatility.\n\
             2. A brief sentiment analysis of the market for this size of home.\n\
             3. Three key factors that would increase this specific property's value.\n",
            price = format_price(self.predicted_price),
        )
    }
}

/// Parses the service's answer.
///
/// # Errors
/// `EmptyResponse` if there's no text at all, `Json` if it doesn't follow the schema.
pub fn parse_response(text: &str) -> Result<AnalysisResult> {
    let text = text.trim();
    if text.is_empty() {
        return Err(AnalysisErr::EmptyResponse);
    }

    Ok(serde_json::from_str(text)?)
}

/// Formats a price in whole dollars with thousands separators, e.g. `$1,250,000`.
pub fn format_price(price: f64) -> String {
    let rounded = format!("{:.0}", price.abs());
    let sign = if price < 0. && rounded != "0" { "-" } else { "" };

    // non finite values have no digits to group
    if !rounded.bytes().all(|b| b.is_ascii_digit()) {
        return format!("{sign}${rounded}");
    }

    let mut grouped = String::with_capacity(rounded.len() + rounded.len() / 3);
    for (i, digit) in rounded.chars().enumerate() {
        if i > 0 && (rounded.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    format!("{sign}${grouped}")
}
