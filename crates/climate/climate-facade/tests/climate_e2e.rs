//! End-to-end tests for the climate forecasting engine
//!
//! Drives the facade the way the CLI boundary does: typed records in,
//! combined tagged series out.

use climate_facade::ensemble::{combine_with_history, reduce_ensemble};
use climate_facade::ice::{compute_stats, extend_with_projection};
use climate_facade::regression::fit_linear_trend;
use climate_facade::series::validate_contiguous;
use climate_facade::summary::co2_summary;
use climate_facade::trend::moving_average;
use climate_facade::{
    EnsembleMatrix, ForecastConfig, IceMassRecord, IceMassRegression, SeriesLabel,
    TimeSeriesPoint,
};

fn keeling_like(n: usize) -> Vec<TimeSeriesPoint> {
    (0..n)
        .map(|i| {
            let value = 315.0
                + 0.12 * i as f64
                + 2.8 * ((i % 12) as f64 / 12.0 * std::f64::consts::PI * 2.0).sin();
            TimeSeriesPoint::historical(1958 + (i / 12) as i32, (i % 12) as u32 + 1, value)
        })
        .collect()
}

fn warming_like(n: usize) -> Vec<TimeSeriesPoint> {
    (0..n)
        .map(|i| {
            let t = i as f64;
            let value = -0.3
                + 1.0e-5 * t * t
                + 0.05 * ((i % 12) as f64 / 12.0 * std::f64::consts::PI * 2.0).sin();
            TimeSeriesPoint::historical(1950 + (i / 12) as i32, (i % 12) as u32 + 1, value)
        })
        .collect()
}

#[test]
fn e2e_co2_pipeline() {
    let history = keeling_like(240);
    let forecaster = ForecastConfig::co2().build().unwrap();
    let combined = forecaster.extend(&history).unwrap();

    assert_eq!(combined.len(), 240 + 36);
    assert!(combined[..240]
        .iter()
        .all(|p| p.label == SeriesLabel::Historical));
    assert!(combined[240..]
        .iter()
        .all(|p| p.label == SeriesLabel::Predicted));

    // seam is seamless in both value and calendar
    assert!((combined[240].value - combined[239].value).abs() < 1e-6);
    assert!(validate_contiguous(&combined).is_ok());

    // CO2 keeps rising over the forecast horizon
    let last = combined.last().unwrap();
    assert!(last.value > combined[239].value);

    let summary = co2_summary(&history).unwrap();
    assert!(summary.change > 0.0);
}

#[test]
fn e2e_temperature_pipeline() {
    let history = warming_like(600);
    let forecaster = ForecastConfig::temperature().build().unwrap();
    let combined = forecaster.extend(&history).unwrap();

    assert_eq!(combined.len(), 600 + 180);
    assert!((combined[600].value - combined[599].value).abs() < 1e-6);
    assert!(validate_contiguous(&combined).is_ok());

    // the quadratic fit keeps the acceleration: later forecast steps grow
    // faster than earlier ones
    let first_step = combined[612].value - combined[600].value;
    let last_step = combined[779].value - combined[767].value;
    assert!(last_step > first_step);
}

#[test]
fn e2e_trend_recovery_from_seasonal_series() {
    // linear growth of 0.5/month under a full seasonal cycle
    let values: Vec<f64> = (0..24)
        .map(|i| 0.5 * i as f64 + (i as f64 / 12.0 * std::f64::consts::PI * 2.0).sin())
        .collect();

    let trend = moving_average(&values, 12).unwrap();
    let model = fit_linear_trend(&trend, None).unwrap();

    // within 5% of the true monthly rate
    assert!(
        (model.slope - 0.5).abs() < 0.025,
        "slope {} too far from 0.5",
        model.slope
    );
}

#[test]
fn e2e_ice_pipeline() {
    // twelve years of monthly records losing ~120 Gt/year
    let records: Vec<IceMassRecord> = (0..144)
        .map(|i| {
            let wiggle = ((i % 12) as f64 / 12.0 * std::f64::consts::PI * 2.0).sin() * 8.0;
            IceMassRecord::new(
                2002 + (i / 12) as i32,
                (i % 12) as u32 + 1,
                15,
                -10.0 * i as f64 + wiggle,
                25.0,
            )
        })
        .collect();

    let regression = IceMassRegression::fit(&records).unwrap();
    assert!(regression.slope < -100.0);
    assert!(regression.r_squared > 0.99);

    let stats = compute_stats(&records, &regression).unwrap();
    assert!(stats.total_loss < 0.0);
    assert!((stats.years_span - (11.0 + 11.0 / 12.0)).abs() < 1e-9);
    assert!(stats.predicted_2050 < stats.predicted_2030);

    let combined = extend_with_projection(&records, &regression, 15).unwrap();
    assert_eq!(combined.len(), 144 + 180);
    assert_eq!(combined[144].year, 2014);
    assert_eq!(combined[144].month, 1);
    assert!(combined[144..]
        .iter()
        .all(|p| p.label == SeriesLabel::Predicted));
}

#[test]
fn e2e_ensemble_pipeline() {
    let mut matrix = EnsembleMatrix::new();
    let mut state: u64 = 0x0123_4567_89ab_cdef;
    for year in 2025..2035 {
        let base = f64::from(year - 2025) * 0.4;
        let values: Vec<f64> = (0..300)
            .map(|_| {
                state ^= state << 13;
                state ^= state >> 7;
                state ^= state << 17;
                base + (state % 2_000) as f64 / 1_000.0
            })
            .collect();
        matrix.insert(year, values);
    }

    let forecast = reduce_ensemble(&matrix).unwrap();
    assert_eq!(forecast.len(), 10);
    for point in &forecast {
        assert!(point.low.unwrap() <= point.value);
        assert!(point.value <= point.high.unwrap());
    }

    // medians follow the rising ensemble mean
    assert!(forecast[9].value > forecast[0].value);

    let history: Vec<TimeSeriesPoint> = (0..5)
        .map(|i| TimeSeriesPoint::historical(2020 + i, 1, f64::from(i) * 0.1))
        .collect();
    let combined = combine_with_history(&history, &forecast);

    assert_eq!(combined.len(), 15);
    let years: Vec<i32> = combined.iter().map(|p| p.year).collect();
    let mut sorted = years.clone();
    sorted.sort_unstable();
    assert_eq!(years, sorted);
}

#[test]
fn e2e_full_precision_survives_json() {
    let history = keeling_like(120);
    let forecaster = ForecastConfig::co2().build().unwrap();
    let combined = forecaster.extend(&history).unwrap();

    let json = serde_json::to_string(&combined).unwrap();
    let parsed: Vec<TimeSeriesPoint> = serde_json::from_str(&json).unwrap();

    assert_eq!(parsed.len(), combined.len());
    for (a, b) in combined.iter().zip(parsed.iter()) {
        assert_eq!(a.year, b.year);
        assert_eq!(a.month, b.month);
        assert_eq!(a.label, b.label);
        assert!((a.value - b.value).abs() < 1e-12);
    }
}

#[test]
fn e2e_pipelines_run_concurrently() {
    let co2_history = keeling_like(240);
    let temperature_history = warming_like(360);
    let ice_records: Vec<IceMassRecord> = (0..60)
        .map(|i| {
            IceMassRecord::new(
                2002 + (i / 12) as i32,
                (i % 12) as u32 + 1,
                15,
                -10.0 * i as f64,
                25.0,
            )
        })
        .collect();
    let mut matrix = EnsembleMatrix::new();
    for year in 2025..2030 {
        matrix.insert(year, (0..100).map(f64::from).collect());
    }

    std::thread::scope(|scope| {
        let co2 = scope.spawn(|| {
            ForecastConfig::co2()
                .build()
                .and_then(|f| f.extend(&co2_history))
        });
        let temperature = scope.spawn(|| {
            ForecastConfig::temperature()
                .build()
                .and_then(|f| f.extend(&temperature_history))
        });
        let ice = scope.spawn(|| {
            IceMassRegression::fit(&ice_records)
                .and_then(|r| extend_with_projection(&ice_records, &r, 15))
        });
        let ensemble = scope.spawn(|| reduce_ensemble(&matrix));

        assert_eq!(co2.join().unwrap().unwrap().len(), 240 + 36);
        assert_eq!(temperature.join().unwrap().unwrap().len(), 360 + 180);
        assert_eq!(ice.join().unwrap().unwrap().len(), 60 + 180);
        assert_eq!(ensemble.join().unwrap().unwrap().len(), 5);
    });
}
