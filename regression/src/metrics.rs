use crate::{
    data::Dataset,
    model::{ModelParameters, predict_all},
};

/// The coefficient of determination of the model over the dataset, clamped at 0.
///
/// `1 - SSres / SStot`, the fraction of the price variance explained by the model
/// compared to always predicting the mean price. There is no upper clamp. A `NaN`
/// ratio, as given by an empty dataset, is returned as is.
pub fn accuracy(dataset: &Dataset, params: &ModelParameters) -> f64 {
    let y = dataset.y();
    let mean = dataset.mean_price();

    let ss_tot = y.mapv(|price| (price - mean).powi(2)).sum();
    let ss_res = (&y - &predict_all(dataset, params))
        .mapv(|e| e.powi(2))
        .sum();

    let r2 = 1. - ss_res / ss_tot;
    if r2.is_nan() { r2 } else { r2.max(0.) }
}
