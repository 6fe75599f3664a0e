use serde::{Deserialize, Serialize};

/// A single synthetic observation of the housing market.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HousingRecord {
    pub id: usize,
    pub sqft: u32,
    pub bedrooms: u32,
    pub bathrooms: u32,
    pub price: f64,
}

impl HousingRecord {
    /// The features of this record, without its identifier nor its price.
    pub fn features(&self) -> PredictionInput {
        PredictionInput {
            sqft: self.sqft,
            bedrooms: self.bedrooms,
            bathrooms: self.bathrooms,
        }
    }
}

/// The features of a property to be priced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PredictionInput {
    pub sqft: u32,
    pub bedrooms: u32,
    pub bathrooms: u32,
}

impl PredictionInput {
    /// Returns a new `PredictionInput`.
    pub fn new(sqft: u32, bedrooms: u32, bathrooms: u32) -> Self {
        Self {
            sqft,
            bedrooms,
            bathrooms,
        }
    }

    /// The features in model order: square footage, bedrooms, bathrooms.
    pub fn to_array(&self) -> [f64; 3] {
        [
            f64::from(self.sqft),
            f64::from(self.bedrooms),
            f64::from(self.bathrooms),
        ]
    }
}

impl Default for PredictionInput {
    fn default() -> Self {
        Self::new(2000, 3, 2)
    }
}
