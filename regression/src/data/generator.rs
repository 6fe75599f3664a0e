use std::ops::Range;

use rand::Rng;

use super::HousingRecord;

/// The amount of records generated when no other size is requested.
pub const DEFAULT_DATASET_SIZE: usize = 100;

/// The square footage domain, upper bound excluded.
pub const SQFT_RANGE: Range<u32> = 800..3500;

const SQFT_PER_BEDROOM: u32 = 800;
const NOISE_AMPLITUDE: f64 = 40_000.;

/// Generates `count` synthetic housing records.
///
/// The bedroom count loosely follows the square footage and the bathroom count the
/// bedroom count. Prices follow `base_price` plus a uniform noise in `[-20000, 20000)`,
/// rounded to the nearest integer.
///
/// # Arguments
/// * `rng` - A random number generator.
/// * `count` - The amount of records to generate.
///
/// # Returns
/// The records, identified by their position.
pub fn generate<R: Rng + ?Sized>(rng: &mut R, count: usize) -> Vec<HousingRecord> {
    (0..count).map(|id| sample_record(rng, id)).collect()
}

/// The noiseless price of a property.
pub fn base_price(sqft: u32, bedrooms: u32, bathrooms: u32) -> f64 {
    200. * f64::from(sqft) + 25_000. * f64::from(bedrooms) + 15_000. * f64::from(bathrooms) + 50_000.
}

fn sample_record<R: Rng + ?Sized>(rng: &mut R, id: usize) -> HousingRecord {
    let sqft = rng.random_range(SQFT_RANGE);
    let bedrooms = sqft / SQFT_PER_BEDROOM + rng.random_range(0..2);

    // floor(bedrooms / 1.5)
    let bathrooms = (bedrooms * 2 / 3 + u32::from(rng.random_bool(0.5))).max(1);

    let noise = (rng.random::<f64>() - 0.5) * NOISE_AMPLITUDE;
    let price = (base_price(sqft, bedrooms, bathrooms) + noise).round();

    HousingRecord {
        id,
        sqft,
        bedrooms,
        bathrooms,
        price,
    }
}

#[cfg(test)]
mod tests {
    use rand::{SeedableRng, rngs::StdRng};

    use super::*;

    #[test]
    fn records_stay_within_bounds() {
        let mut rng = StdRng::seed_from_u64(7);

        for record in generate(&mut rng, 50) {
            assert!(SQFT_RANGE.contains(&record.sqft), "{record:?}");
            assert!(record.bathrooms >= 1, "{record:?}");
            assert!(record.price > 0., "{record:?}");
            assert_eq!(record.price, record.price.round());

            let base = base_price(record.sqft, record.bedrooms, record.bathrooms);
            assert!((record.price - base).abs() <= NOISE_AMPLITUDE / 2., "{record:?}");
        }
    }

    #[test]
    fn rooms_follow_size() {
        let mut rng = StdRng::seed_from_u64(11);

        for record in generate(&mut rng, 200) {
            let floor = record.sqft / SQFT_PER_BEDROOM;
            assert!(record.bedrooms == floor || record.bedrooms == floor + 1);

            let bathrooms = (record.bedrooms as f64 / 1.5).floor() as u32;
            assert!(record.bathrooms == bathrooms.max(1) || record.bathrooms == bathrooms + 1);
        }
    }

    #[test]
    fn ids_follow_position() {
        let mut rng = StdRng::seed_from_u64(3);
        let records = generate(&mut rng, 10);

        assert_eq!(records.len(), 10);
        assert!(records.iter().enumerate().all(|(i, r)| r.id == i));
    }

    #[test]
    fn independent_draws_differ() {
        let mut rng = StdRng::seed_from_u64(5);

        let first = generate(&mut rng, DEFAULT_DATASET_SIZE);
        let second = generate(&mut rng, DEFAULT_DATASET_SIZE);
        assert_ne!(first, second);
    }

    #[test]
    fn zero_records() {
        let mut rng = StdRng::seed_from_u64(0);
        assert!(generate(&mut rng, 0).is_empty());
    }
}
