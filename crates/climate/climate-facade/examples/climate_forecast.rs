//! Example: Forecast synthetic climate series
//!
//! Run with:
//! ```bash
//! cargo run --example climate_forecast
//! ```

use climate_facade::ensemble::reduce_ensemble;
use climate_facade::ice::{compute_stats, IceMassRegression};
use climate_facade::summary::co2_summary;
use climate_facade::{EnsembleMatrix, ForecastConfig, IceMassRecord, TimeSeriesPoint};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Climate Forecasting Demo ===\n");

    // Synthetic CO2-like record: 20 years of monthly readings with a
    // rising trend and an annual cycle
    let history: Vec<TimeSeriesPoint> = (0..240)
        .map(|i| {
            let value = 370.0
                + 0.18 * i as f64
                + 3.0 * ((i % 12) as f64 / 12.0 * std::f64::consts::TAU).sin();
            TimeSeriesPoint::historical(2000 + (i / 12) as i32, (i % 12) as u32 + 1, value)
        })
        .collect();

    println!("History: {} monthly points", history.len());
    let first = &history[0];
    let last = &history[history.len() - 1];
    println!(
        "Range: {}-{:02} ({:.2}) to {}-{:02} ({:.2})\n",
        first.year, first.month, first.value, last.year, last.month, last.value
    );

    // 1. Seasonal-trend forecast
    {
        let forecaster = ForecastConfig::co2().build()?;
        let forecast = forecaster.forecast(&history)?;

        println!("CO2 Forecast ({} months):", forecast.len());
        println!(
            "  First: {}-{:02}  {:.2} (last observed {:.2})",
            forecast[0].year, forecast[0].month, forecast[0].value, last.value
        );
        let end = &forecast[forecast.len() - 1];
        println!("  Last:  {}-{:02}  {:.2}\n", end.year, end.month, end.value);

        let summary = co2_summary(&history)?;
        println!("  Latest reading: {:.2}", summary.current);
        println!("  Change vs previous year mean: {:+.2}\n", summary.change);
    }

    // 2. Ice mass regression
    {
        let records: Vec<IceMassRecord> = (0..22)
            .map(|i| IceMassRecord::new(2002 + i, 4, 15, -130.0 * f64::from(i), 25.0))
            .collect();

        let regression = IceMassRegression::fit(&records)?;
        let stats = compute_stats(&records, &regression)?;

        println!("Ice Mass Regression ({} records):", records.len());
        println!("  Loss rate: {:.1} Gt/year", stats.annual_loss_rate);
        println!("  R^2: {:.4}", stats.r_squared);
        println!("  Predicted 2030: {:.0} Gt", stats.predicted_2030);
        println!("  Predicted 2050: {:.0} Gt\n", stats.predicted_2050);
    }

    // 3. Ensemble reduction
    {
        let mut matrix = EnsembleMatrix::new();
        for year in 2025..2031 {
            let spread: Vec<f64> = (0..100)
                .map(|i| f64::from(year - 2000) * 0.02 + f64::from(i % 11) * 0.05)
                .collect();
            matrix.insert(year, spread);
        }

        let bands = reduce_ensemble(&matrix)?;
        println!("Ensemble Reduction ({} years):", bands.len());
        println!("{:<8} {:>8} {:>8} {:>8}", "Year", "Low", "Median", "High");
        for point in &bands {
            println!(
                "{:<8} {:>8.2} {:>8.2} {:>8.2}",
                point.year,
                point.low.unwrap_or(f64::NAN),
                point.value,
                point.high.unwrap_or(f64::NAN)
            );
        }
    }

    Ok(())
}
