//! # climecast-cli
//!
//! Command-line interface for the climate forecasting engine. Loads
//! delimited source files, runs the requested pipeline, and writes tagged
//! series JSON for downstream presentation.

use clap::{Parser, Subcommand};
use climate_facade::ensemble::{combine_with_history, reduce_ensemble, reduce_ensemble_observed};
use climate_facade::ice::{compute_stats, extend_with_projection, IceMassRegression};
use climate_facade::summary::{co2_summary, temperature_summary};
use climate_facade::{
    EngineEvent, EngineObserver, EnsembleMatrix, ForecastConfig, IceMassRecord, TimeSeriesPoint,
};
use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

type CliResult<T> = std::result::Result<T, String>;

#[derive(Parser)]
#[command(name = "climecast")]
#[command(about = "Climate series forecasting CLI", long_about = None)]
struct Cli {
    /// Emit engine pipeline events via tracing
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Forecast monthly CO2 concentration
    Co2 {
        /// Input CSV with year,month,value rows
        #[arg(short, long)]
        input: PathBuf,

        /// Months to forecast past the end of the record
        #[arg(long, default_value = "36")]
        horizon: usize,

        /// Output file (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Forecast monthly temperature anomaly
    Temperature {
        /// Input CSV with year,month,value rows
        #[arg(short, long)]
        input: PathBuf,

        /// Months to forecast past the end of the record
        #[arg(long, default_value = "180")]
        horizon: usize,

        /// Output file (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Fit ice mass loss and project it forward
    Ice {
        /// Input CSV with year,month,day,mass,uncertainty rows
        #[arg(short, long)]
        input: PathBuf,

        /// Whole years of monthly predictions past the last record
        #[arg(long, default_value = "15")]
        years_ahead: usize,

        /// Output file (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Reduce an ensemble forecast to percentile bands
    Ensemble {
        /// Input CSV with year,sim0,sim1,... rows
        #[arg(short, long)]
        input: PathBuf,

        /// Annual history CSV (year,value) to prepend to the output
        #[arg(long)]
        history: Option<PathBuf>,

        /// Output file (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Print the headline summary for a series
    Summary {
        /// Metric: co2 (monthly year,month,value) or temperature (annual year,value)
        #[arg(short, long)]
        metric: String,

        /// Input CSV
        #[arg(short, long)]
        input: PathBuf,

        /// Output file (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// Observer that forwards engine events to tracing.
struct TracingObserver;

impl EngineObserver for TracingObserver {
    fn record(&self, event: &EngineEvent) {
        match event {
            EngineEvent::SeriesDecomposed { points, window } => {
                tracing::debug!(points, window, "series decomposed");
            }
            EngineEvent::TrendFitted { degree, points } => {
                tracing::debug!(degree, points, "trend fitted");
            }
            EngineEvent::ForecastSynthesized {
                horizon,
                adjustment,
            } => {
                tracing::info!(horizon, adjustment, "forecast synthesized");
            }
            EngineEvent::RegressionComputed { slope, r_squared } => {
                tracing::info!(slope, r_squared, "regression computed");
            }
            EngineEvent::EnsembleReduced { years } => {
                tracing::debug!(years, "ensemble reduced");
            }
        }
    }
}

/// Load monthly year,month,value rows, dropping malformed lines.
///
/// Header lines fall out naturally: they fail to parse. Negative values are
/// the missing-data sentinel in CO2 records and are dropped when asked.
fn load_monthly_csv(path: &PathBuf, drop_negative: bool) -> CliResult<Vec<TimeSeriesPoint>> {
    let file = File::open(path).map_err(|e| format!("Failed to open file: {}", e))?;
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .comment(Some(b'#'))
        .from_reader(BufReader::new(file));

    let mut points = Vec::new();
    for result in reader.records() {
        let record = match result {
            Ok(record) => record,
            Err(_) => continue,
        };
        let year = record.get(0).and_then(|v| v.trim().parse::<i32>().ok());
        let month = record.get(1).and_then(|v| v.trim().parse::<u32>().ok());
        let value = record.get(2).and_then(|v| v.trim().parse::<f64>().ok());

        if let (Some(year), Some(month), Some(value)) = (year, month, value) {
            if !(1..=12).contains(&month) {
                continue;
            }
            if drop_negative && value < 0.0 {
                continue;
            }
            points.push(TimeSeriesPoint::historical(year, month, value));
        }
    }

    if points.is_empty() {
        return Err("No usable rows found in input".to_string());
    }
    Ok(points)
}

/// Load annual year,value rows; points carry month 1.
fn load_annual_csv(path: &PathBuf) -> CliResult<Vec<TimeSeriesPoint>> {
    let file = File::open(path).map_err(|e| format!("Failed to open file: {}", e))?;
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .comment(Some(b'#'))
        .from_reader(BufReader::new(file));

    let mut points = Vec::new();
    for result in reader.records() {
        let record = match result {
            Ok(record) => record,
            Err(_) => continue,
        };
        let year = record.get(0).and_then(|v| v.trim().parse::<i32>().ok());
        let value = record.get(1).and_then(|v| v.trim().parse::<f64>().ok());
        if let (Some(year), Some(value)) = (year, value) {
            points.push(TimeSeriesPoint::historical(year, 1, value));
        }
    }

    if points.is_empty() {
        return Err("No usable rows found in input".to_string());
    }
    Ok(points)
}

/// Load ice records: year,month,day,mass,uncertainty rows.
fn load_ice_csv(path: &PathBuf) -> CliResult<Vec<IceMassRecord>> {
    let file = File::open(path).map_err(|e| format!("Failed to open file: {}", e))?;
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .comment(Some(b'#'))
        .from_reader(BufReader::new(file));

    let mut records = Vec::new();
    for result in reader.records() {
        let row = match result {
            Ok(row) => row,
            Err(_) => continue,
        };
        let year = row.get(0).and_then(|v| v.trim().parse::<i32>().ok());
        let month = row.get(1).and_then(|v| v.trim().parse::<u32>().ok());
        let day = row.get(2).and_then(|v| v.trim().parse::<u32>().ok());
        let mass = row.get(3).and_then(|v| v.trim().parse::<f64>().ok());
        let uncertainty = row
            .get(4)
            .and_then(|v| v.trim().parse::<f64>().ok())
            .unwrap_or(0.0);

        if let (Some(year), Some(month), Some(day), Some(mass)) = (year, month, day, mass) {
            records.push(IceMassRecord::new(year, month, day, mass, uncertainty));
        }
    }

    if records.is_empty() {
        return Err("No usable rows found in input".to_string());
    }
    Ok(records)
}

/// Load a wide ensemble file: one row per year, simulations in the
/// remaining columns. The first column may be a bare year or a dash-
/// separated date.
fn load_ensemble_csv(path: &PathBuf) -> CliResult<EnsembleMatrix> {
    let file = File::open(path).map_err(|e| format!("Failed to open file: {}", e))?;
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .comment(Some(b'#'))
        .from_reader(BufReader::new(file));

    let mut matrix = EnsembleMatrix::new();
    for result in reader.records() {
        let record = match result {
            Ok(record) => record,
            Err(_) => continue,
        };
        let year = record
            .get(0)
            .and_then(|field| field.trim().split('-').next())
            .and_then(|field| field.parse::<i32>().ok());
        let year = match year {
            Some(year) => year,
            None => continue,
        };

        let values: Vec<f64> = record
            .iter()
            .skip(1)
            .filter_map(|v| v.trim().parse::<f64>().ok())
            .collect();
        if !values.is_empty() {
            matrix.insert(year, values);
        }
    }

    if matrix.is_empty() {
        return Err("No usable rows found in input".to_string());
    }
    Ok(matrix)
}

/// Write a JSON document to a file or stdout.
fn write_json(value: &serde_json::Value, output: Option<&PathBuf>) -> CliResult<()> {
    if let Some(path) = output {
        let mut file =
            File::create(path).map_err(|e| format!("Failed to create output: {}", e))?;
        serde_json::to_writer_pretty(&mut file, value)
            .map_err(|e| format!("Failed to write JSON: {}", e))?;
        println!("Results written to {:?}", path);
    } else {
        let rendered = serde_json::to_string_pretty(value)
            .map_err(|e| format!("Failed to render JSON: {}", e))?;
        println!("{}", rendered);
    }
    Ok(())
}

/// Run a monthly forecast for either metric.
fn run_monthly_forecast(
    metric: &str,
    config: ForecastConfig,
    drop_negative: bool,
    input: PathBuf,
    output: Option<PathBuf>,
    verbose: bool,
) -> CliResult<()> {
    let history = load_monthly_csv(&input, drop_negative)?;
    println!(
        "Loaded {} monthly points from {:?}",
        history.len(),
        input.file_name().unwrap_or_default()
    );

    let forecaster = config.build().map_err(|e| e.to_string())?;
    let combined = if verbose {
        forecaster
            .extend_observed(&history, &TracingObserver)
            .map_err(|e| e.to_string())?
    } else {
        forecaster.extend(&history).map_err(|e| e.to_string())?
    };

    let horizon = combined.len() - history.len();
    println!("Forecast horizon: {} months", horizon);

    let json = serde_json::json!({
        "metric": metric,
        "horizon_months": horizon,
        "points": combined,
    });
    write_json(&json, output.as_ref())
}

/// Run the ice mass regression and projection.
fn run_ice(
    input: PathBuf,
    years_ahead: usize,
    output: Option<PathBuf>,
    verbose: bool,
) -> CliResult<()> {
    let records = load_ice_csv(&input)?;
    println!(
        "Loaded {} ice mass records from {:?}",
        records.len(),
        input.file_name().unwrap_or_default()
    );

    let regression = if verbose {
        IceMassRegression::fit_observed(&records, &TracingObserver).map_err(|e| e.to_string())?
    } else {
        IceMassRegression::fit(&records).map_err(|e| e.to_string())?
    };
    let stats = compute_stats(&records, &regression).map_err(|e| e.to_string())?;
    let combined =
        extend_with_projection(&records, &regression, years_ahead).map_err(|e| e.to_string())?;

    println!(
        "Loss rate: {:.1} Gt/year (R^2 {:.4}) over {:.1} years",
        stats.annual_loss_rate, stats.r_squared, stats.years_span
    );
    println!(
        "Predicted anomaly 2030: {:.0} Gt, 2050: {:.0} Gt",
        stats.predicted_2030, stats.predicted_2050
    );

    let json = serde_json::json!({
        "metric": "ice_mass",
        "stats": stats,
        "points": combined,
    });
    write_json(&json, output.as_ref())
}

/// Run ensemble reduction, optionally stitched onto an annual history.
fn run_ensemble(
    input: PathBuf,
    history: Option<PathBuf>,
    output: Option<PathBuf>,
    verbose: bool,
) -> CliResult<()> {
    let matrix = load_ensemble_csv(&input)?;
    println!(
        "Loaded ensemble for {} years from {:?}",
        matrix.len(),
        input.file_name().unwrap_or_default()
    );

    let forecast = if verbose {
        reduce_ensemble_observed(&matrix, &TracingObserver).map_err(|e| e.to_string())?
    } else {
        reduce_ensemble(&matrix).map_err(|e| e.to_string())?
    };

    let points = match history {
        Some(path) => {
            let annual = load_annual_csv(&path)?;
            println!("Prepending {} historical annual points", annual.len());
            combine_with_history(&annual, &forecast)
        }
        None => forecast,
    };

    let json = serde_json::json!({
        "metric": "ensemble",
        "points": points,
    });
    write_json(&json, output.as_ref())
}

/// Print the headline summary for a metric.
fn run_summary(metric: String, input: PathBuf, output: Option<PathBuf>) -> CliResult<()> {
    let summary = match metric.to_lowercase().as_str() {
        "co2" => {
            let points = load_monthly_csv(&input, true)?;
            co2_summary(&points).map_err(|e| e.to_string())?
        }
        "temperature" | "temp" => {
            let points = load_annual_csv(&input)?;
            temperature_summary(&points).map_err(|e| e.to_string())?
        }
        _ => {
            return Err(format!(
                "Unknown metric: {}. Use 'co2' or 'temperature'",
                metric
            ))
        }
    };

    println!("Current: {:.2}", summary.current);
    println!("Change: {:+.2}", summary.change);

    let json = serde_json::json!({
        "metric": metric,
        "summary": summary,
    });
    write_json(&json, output.as_ref())
}

fn main() {
    let cli = Cli::parse();

    if cli.verbose {
        tracing_subscriber::registry()
            .with(tracing_subscriber::fmt::layer())
            .with(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "info,climecast=debug".into()),
            )
            .init();
    }

    let result = match cli.command {
        Commands::Co2 {
            input,
            horizon,
            output,
        } => run_monthly_forecast(
            "co2",
            ForecastConfig {
                horizon_months: horizon,
                ..ForecastConfig::co2()
            },
            true,
            input,
            output,
            cli.verbose,
        ),

        Commands::Temperature {
            input,
            horizon,
            output,
        } => run_monthly_forecast(
            "temperature",
            ForecastConfig {
                horizon_months: horizon,
                ..ForecastConfig::temperature()
            },
            false,
            input,
            output,
            cli.verbose,
        ),

        Commands::Ice {
            input,
            years_ahead,
            output,
        } => run_ice(input, years_ahead, output, cli.verbose),

        Commands::Ensemble {
            input,
            history,
            output,
        } => run_ensemble(input, history, output, cli.verbose),

        Commands::Summary {
            metric,
            input,
            output,
        } => run_summary(metric, input, output),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
