mod dataset;
mod generator;
mod record;

pub use dataset::Dataset;
pub use generator::{DEFAULT_DATASET_SIZE, SQFT_RANGE, base_price, generate};
pub use record::{HousingRecord, PredictionInput};
