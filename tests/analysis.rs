use prophet_estate::analysis::{
    AnalysisErr, AnalysisResult, Analyst, Disconnected, RemoteAnalyst, Result, TextGenerator,
    analyze_with_fallback,
};
use regression::PredictionInput;

struct Canned(&'static str);

impl TextGenerator for Canned {
    async fn generate(&self, api_key: &str, prompt: &str) -> Result<String> {
        assert_eq!(api_key, "secret");
        assert!(prompt.contains("$555,000"), "{prompt}");
        Ok(self.0.to_string())
    }
}

const ANSWER: &str = r#"{
    "estimatedPriceRange": "$540,000 - $575,000",
    "marketSentiment": "Demand for mid-sized homes remains strong.",
    "keyFactors": ["Renovated kitchen", "School district", "Lot size"]
}"#;

fn input() -> PredictionInput {
    PredictionInput::new(2000, 3, 2)
}

#[tokio::test]
async fn remote_answer_is_returned() {
    let analyst = RemoteAnalyst::new(Canned(ANSWER), "API_KEY", Some("secret".into()));

    let result = analyze_with_fallback(&analyst, &input(), 555_000.).await;

    assert_eq!(result.estimated_price_range, "$540,000 - $575,000");
    assert_eq!(result.key_factors.len(), 3);
}

#[tokio::test]
async fn missing_key_is_reported() {
    let analyst = RemoteAnalyst::new(Canned(ANSWER), "GEMINI_API_KEY", None);

    let err = analyst.analyze(&input(), 555_000.).await.unwrap_err();
    assert!(matches!(err, AnalysisErr::MissingCredentials { ref var } if var == "GEMINI_API_KEY"));

    let result = analyze_with_fallback(&analyst, &input(), 555_000.).await;
    assert_eq!(result, AnalysisResult::missing_credentials("GEMINI_API_KEY"));
}

#[tokio::test]
async fn malformed_answer_falls_back_to_variance() {
    let analyst = RemoteAnalyst::new(Canned("not json"), "API_KEY", Some("secret".into()));

    let result = analyze_with_fallback(&analyst, &input(), 555_000.).await;

    assert_eq!(result.estimated_price_range, "$527250 - $582750");
    assert_eq!(
        result.market_sentiment,
        "Unable to retrieve real-time market data. Showing standard variance."
    );
    assert_eq!(result.key_factors, ["Location", "Condition", "Market Trends"]);
}

#[tokio::test]
async fn empty_answer_falls_back_to_variance() {
    let analyst = RemoteAnalyst::new(Canned("\n"), "API_KEY", Some("secret".into()));

    let err = analyst.analyze(&input(), 555_000.).await.unwrap_err();
    assert!(matches!(err, AnalysisErr::EmptyResponse));

    let result = analyze_with_fallback(&analyst, &input(), 555_000.).await;
    assert_eq!(result, AnalysisResult::standard_variance(555_000.));
}

#[tokio::test]
async fn disconnected_service_falls_back_to_variance() {
    let analyst = RemoteAnalyst::new(Disconnected, "API_KEY", Some("secret".into()));

    let err = analyst.analyze(&input(), 200_000.).await.unwrap_err();
    assert!(matches!(err, AnalysisErr::Unavailable(_)));

    let result = analyze_with_fallback(&analyst, &input(), 200_000.).await;
    assert_eq!(result.estimated_price_range, "$190000 - $210000");
}
