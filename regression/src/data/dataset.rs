use ndarray::{Array1, Array2, ArrayView1, ArrayView2};

use super::HousingRecord;

/// The fixed training set of a run.
///
/// The records are laid out once into a feature matrix with one row per record and
/// one column per feature, and a price vector. Neither can change afterwards, so every
/// step of a run sees exactly the same data.
#[derive(Debug, Clone)]
pub struct Dataset {
    records: Vec<HousingRecord>,
    x: Array2<f64>,
    y: Array1<f64>,
}

impl Dataset {
    /// The amount of features per record.
    pub const FEATURES: usize = 3;

    /// Returns a new `Dataset`.
    ///
    /// # Arguments
    /// * `records` - The observations to train with.
    pub fn new(records: Vec<HousingRecord>) -> Self {
        let x = Array2::from_shape_fn((records.len(), Self::FEATURES), |(i, j)| {
            records[i].features().to_array()[j]
        });
        let y = Array1::from_iter(records.iter().map(|record| record.price));

        Self { records, x, y }
    }

    /// The amount of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// The records this dataset was built from.
    pub fn records(&self) -> &[HousingRecord] {
        &self.records
    }

    /// The feature matrix, `len() x FEATURES`.
    pub fn x(&self) -> ArrayView2<'_, f64> {
        self.x.view()
    }

    /// The price of every record.
    pub fn y(&self) -> ArrayView1<'_, f64> {
        self.y.view()
    }

    /// The mean price, `NaN` for an empty dataset.
    pub fn mean_price(&self) -> f64 {
        self.y.sum() / self.len() as f64
    }
}

impl From<Vec<HousingRecord>> for Dataset {
    fn from(records: Vec<HousingRecord>) -> Self {
        Self::new(records)
    }
}
