//! ProphetEstate: trains a linear regression over synthetic housing data, prices a
//! property with it and asks an external analyst to refine the estimate.

pub mod analysis;
pub mod config;
pub mod error;
pub mod report;

pub use analysis::{AnalysisResult, Analyst, analyze_with_fallback};
pub use config::AppConfig;
pub use error::{LoadErr, Result};
pub use report::PricingReport;
