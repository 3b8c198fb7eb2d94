//! Property-based tests for the decomposition pipeline.
//!
//! These tests verify invariants that should hold for all valid inputs,
//! using randomly generated series.

use classical_forecast::core::{SeasonLength, Series};
use classical_forecast::models::{ClassicalDecomposition, Forecaster};
use classical_forecast::pipeline::{run, DecompositionConfig, Report};
use classical_forecast::seasonality::{smooth, DecompositionModel};
use proptest::prelude::*;

fn make_series(values: &[f64]) -> Series {
    Series::new(values).unwrap()
}

fn run_with(values: &[f64], season: usize, model: DecompositionModel, horizon: usize) -> Report {
    let config = DecompositionConfig::new()
        .with_season_length(SeasonLength::new(season).unwrap())
        .with_model(model)
        .with_horizon(horizon);
    run(&make_series(values), &config).unwrap()
}

/// Strategy for a season length and a positive series covering at least
/// two full seasons.
fn seasonal_series_strategy() -> impl Strategy<Value = (usize, Vec<f64>)> {
    (2usize..=12).prop_flat_map(|season| {
        (2 * season..6 * season).prop_flat_map(move |len| {
            prop::collection::vec(1.0..1000.0_f64, len).prop_map(move |v| (season, v))
        })
    })
}

/// Strategy for a straight line with no seasonality.
fn linear_values_strategy(min_len: usize, max_len: usize) -> impl Strategy<Value = Vec<f64>> {
    (min_len..max_len).prop_flat_map(|len| {
        (10.0..100.0_f64, -2.0..2.0_f64)
            .prop_map(move |(base, slope)| (1..=len).map(|p| base + slope * p as f64).collect())
    })
}

// =============================================================================
// Property: Seasonal indices are normalized
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn additive_indices_sum_to_zero((season, values) in seasonal_series_strategy()) {
        let report = run_with(&values, season, DecompositionModel::Additive, 0);
        let indices = report.indices().unwrap();

        prop_assert_eq!(indices.adjusted().len(), season);
        prop_assert!(indices.sum().abs() < 1e-6, "sum = {}", indices.sum());
    }

    #[test]
    fn multiplicative_indices_multiply_to_one((season, values) in seasonal_series_strategy()) {
        let report = run_with(&values, season, DecompositionModel::Multiplicative, 0);
        let indices = report.indices().unwrap();

        prop_assert_eq!(indices.adjusted().len(), season);
        prop_assert!((indices.product() - 1.0).abs() < 1e-6, "product = {}", indices.product());
    }
}

// =============================================================================
// Property: Indices repeat with the season
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(50))]

    #[test]
    fn indices_repeat_every_season(
        (season, values) in seasonal_series_strategy(),
        horizon in 0usize..30
    ) {
        let report = run_with(&values, season, DecompositionModel::Multiplicative, horizon);
        let rows = report.model().rows();

        for (row, later) in rows.iter().zip(rows.iter().skip(season)) {
            prop_assert_eq!(
                row.seasonal.adjusted_seasonal_component,
                later.seasonal.adjusted_seasonal_component
            );
        }

        let indices = report.indices().unwrap();
        for row in report.forecast().rows() {
            prop_assert_eq!(row.seasonal, indices.index_for(row.period));
            prop_assert_eq!(indices.index_for(row.period), indices.index_for(row.period + season));
        }
    }
}

// =============================================================================
// Property: Forecast length matches requested horizon
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(50))]

    #[test]
    fn forecast_periods_are_consecutive(
        (season, values) in seasonal_series_strategy(),
        horizon in 0usize..30
    ) {
        let report = run_with(&values, season, DecompositionModel::Additive, horizon);
        let forecast = report.forecast();

        prop_assert_eq!(forecast.horizon(), horizon);
        let expected: Vec<usize> = (values.len() + 1..=values.len() + horizon).collect();
        prop_assert_eq!(forecast.periods(), expected);
    }

    #[test]
    fn forecaster_matches_pipeline(
        (season, values) in seasonal_series_strategy(),
        horizon in 1usize..20
    ) {
        let report = run_with(&values, season, DecompositionModel::Additive, horizon);

        let mut model = ClassicalDecomposition::new()
            .with_season_length(SeasonLength::new(season).unwrap());
        model.fit(&make_series(&values)).unwrap();
        let predicted = model.predict(horizon).unwrap();

        prop_assert_eq!(predicted.values(), report.forecast().values());
        prop_assert_eq!(model.fitted_values().unwrap().len(), values.len());
    }
}

// =============================================================================
// Property: Short series are not smoothed
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(50))]

    #[test]
    fn short_series_has_no_moving_average(
        season in 2usize..=12,
        values in prop::collection::vec(-100.0..100.0_f64, 0..12)
    ) {
        prop_assume!(values.len() < season);
        let table = smooth(&make_series(&values), SeasonLength::new(season).unwrap());

        prop_assert!(table.rows().iter().all(|r| r.moving_average.is_none()));
    }
}

// =============================================================================
// Property: Deseasonalizing is undone by the index
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(50))]

    #[test]
    fn additive_round_trip((season, values) in seasonal_series_strategy()) {
        let report = run_with(&values, season, DecompositionModel::Additive, 0);

        for row in report.seasonal().rows() {
            let index = row.adjusted_seasonal_component.unwrap();
            let deseasonalized = row.deseasonalized.unwrap();
            prop_assert!((deseasonalized + index - row.value()).abs() < 1e-6);
        }
    }

    #[test]
    fn multiplicative_round_trip((season, values) in seasonal_series_strategy()) {
        let report = run_with(&values, season, DecompositionModel::Multiplicative, 0);

        for row in report.seasonal().rows() {
            let index = row.adjusted_seasonal_component.unwrap();
            let deseasonalized = row.deseasonalized.unwrap();
            prop_assert!((deseasonalized * index - row.value()).abs() < 1e-6 * row.value().abs().max(1.0));
        }
    }
}

// =============================================================================
// Property: A straight line has no season and no error
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(50))]

    #[test]
    fn linear_series_has_flat_season(values in linear_values_strategy(8, 60)) {
        let report = run_with(&values, 4, DecompositionModel::Additive, 4);

        for index in report.indices().unwrap().adjusted() {
            prop_assert!(index.abs() < 1e-6);
        }
        for row in report.model().rows() {
            prop_assert!(row.error.abs() < 1e-6, "error {} at period {}", row.error, row.period());
        }
    }
}
