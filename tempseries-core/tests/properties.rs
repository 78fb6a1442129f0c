//! Property tests for TemperatureSeries statistics

use proptest::prelude::*;

use tempseries_core::{SeriesError, TemperatureSeries};

/// Readings in a realistic range, all above absolute zero
fn reading() -> impl Strategy<Value = f64> {
    -273.0f64..1000.0
}

fn readings() -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec(reading(), 1..64)
}

proptest! {
    #[test]
    fn mean_lies_between_extrema(values in readings()) {
        let series = TemperatureSeries::from_values(&values).unwrap();
        let mean = series.average().unwrap();
        let tolerance = 1e-9 * (1.0 + mean.abs());

        prop_assert!(series.min().unwrap() <= mean + tolerance);
        prop_assert!(mean <= series.max().unwrap() + tolerance);
    }

    #[test]
    fn identical_values_have_zero_deviation(value in reading(), count in 1usize..32) {
        let series = TemperatureSeries::from_values(&vec![value; count]).unwrap();
        prop_assert!(series.deviation().unwrap().abs() < 1e-9 * (1.0 + value.abs()));
    }

    #[test]
    fn filters_partition_live_values(values in readings(), threshold in reading()) {
        let series = TemperatureSeries::from_values(&values).unwrap();
        let below = series.less_than(threshold).unwrap();
        let above = series.greater_than(threshold).unwrap();
        let equal = values.iter().filter(|&&v| v == threshold).count();

        prop_assert_eq!(below.len() + above.len() + equal, values.len());

        let expected_below: Vec<f64> = values.iter().copied().filter(|&v| v < threshold).collect();
        prop_assert_eq!(below, expected_below);
    }

    #[test]
    fn closest_is_order_independent(values in readings(), target in reading()) {
        let series = TemperatureSeries::from_values(&values).unwrap();

        let mut reversed = values.clone();
        reversed.reverse();
        let reversed = TemperatureSeries::from_values(&reversed).unwrap();

        let closest = series.closest_to_value(target).unwrap();
        prop_assert_eq!(closest, reversed.closest_to_value(target).unwrap());
        prop_assert!(values.contains(&closest));

        let best = (closest - target).abs();
        prop_assert!(values.iter().all(|&v| (v - target).abs() >= best));
    }

    #[test]
    fn invalid_batch_leaves_series_unchanged(
        initial in readings(),
        batch in readings(),
        bad in -10_000.0f64..-273.001,
        position in any::<prop::sample::Index>(),
    ) {
        let mut series = TemperatureSeries::from_values(&initial).unwrap();
        let capacity = series.capacity();

        let mut batch = batch;
        let at = position.index(batch.len() + 1);
        batch.insert(at, bad);

        let result = series.add_temps(&batch);
        let rejected = matches!(result, Err(SeriesError::OutOfRange { .. }));
        prop_assert!(rejected);
        prop_assert_eq!(series.values(), &initial[..]);
        prop_assert_eq!(series.capacity(), capacity);
    }

    #[test]
    fn capacity_is_smallest_doubling(initial in readings(), batch in readings()) {
        let mut series = TemperatureSeries::from_values(&initial).unwrap();
        let start = series.capacity();

        let len = series.add_temps(&batch).unwrap();

        let mut expected = start.max(1);
        while expected < len {
            expected *= 2;
        }
        prop_assert_eq!(series.capacity(), expected);
        prop_assert_eq!(len, initial.len() + batch.len());
    }
}
