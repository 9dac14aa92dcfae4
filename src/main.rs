// Command-line entry point.
//
// Loads one SPC employment extract, runs the requested projection and
// prints it as a markdown table. `export` writes every view to CSV plus a
// JSON bundle for the chart layer.
use clap::{Parser, Subcommand, ValueEnum};
use log::info;
use pict_employment::output;
use pict_employment::types::{
    AgeBreakdownRecord, CompositionRecord, CountryOption, EmploymentStatus, GenderTrendRecord,
    RatioTrendRecord, TimeSeriesRecord,
};
use pict_employment::util::format_int;
use pict_employment::{AppConfig, DataCache, Dataset, Result};
use serde::Serialize;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(
    name = "pict-employment",
    version = env!("CARGO_PKG_VERSION"),
    about = "Pacific Islands full-time/part-time employment views from an SPC CSV extract",
    long_about = None
)]
struct Cli {
    /// CSV extract to read (overrides `data_file` from the config)
    #[arg(global = true, long = "file", short = 'f')]
    file: Option<PathBuf>,

    /// YAML file with code vocabulary overrides
    #[arg(global = true, long = "config", short = 'c')]
    config: Option<PathBuf>,

    /// Maximum rows printed per table
    #[arg(global = true, long = "rows", default_value_t = 20)]
    rows: usize,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print load diagnostics
    Summary,
    /// Latest-year full-time/part-time split per country
    Composition,
    /// Employed totals per country and year
    Trends,
    /// Selectable countries
    Countries,
    /// Age composition of one country's latest year
    Age { country: String },
    /// Male/female trend for one country
    Gender {
        country: String,
        #[arg(long, value_enum, default_value_t = StatusArg::Total)]
        status: StatusArg,
    },
    /// Full-time/part-time share trend for one country
    Ratio { country: String },
    /// Write every view to CSV files and a JSON bundle
    Export {
        #[arg(long = "out-dir", default_value = ".")]
        out_dir: PathBuf,
        /// Country for the single-country views (defaults to Tonga or the first country)
        #[arg(long)]
        country: Option<String>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum StatusArg {
    Ft,
    Pt,
    Total,
}

impl From<StatusArg> for EmploymentStatus {
    fn from(s: StatusArg) -> Self {
        match s {
            StatusArg::Ft => EmploymentStatus::FullTime,
            StatusArg::Pt => EmploymentStatus::PartTime,
            StatusArg::Total => EmploymentStatus::Total,
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Bundle {
    composition: Vec<CompositionRecord>,
    time_series: Vec<TimeSeriesRecord>,
    countries: Vec<CountryOption>,
    age_breakdown: Option<AgeBreakdownRecord>,
    gender_trend: Option<GenderTrendRecord>,
    ratio_trend: Option<RatioTrendRecord>,
}

fn not_found(country: &str) {
    println!("No data for country {}.\n", country);
}

fn export(ds: &Dataset, out_dir: &Path, country: Option<String>) -> Result<()> {
    std::fs::create_dir_all(out_dir)?;
    let composition = ds.composition();
    let time_series = ds.time_series();
    let countries = ds.country_options();
    let code = country.or_else(|| ds.default_country().map(|c| c.code));

    let bundle = Bundle {
        age_breakdown: code.as_deref().and_then(|c| ds.age_breakdown(c)),
        gender_trend: code
            .as_deref()
            .and_then(|c| ds.gender_trend(c, EmploymentStatus::Total)),
        ratio_trend: code.as_deref().and_then(|c| ds.ratio_trend(c)),
        composition,
        time_series,
        countries,
    };

    output::write_csv(
        &out_dir.join("composition.csv"),
        &output::composition_rows(&bundle.composition),
    )?;
    output::write_csv(
        &out_dir.join("time_series.csv"),
        &output::trend_rows(&bundle.time_series),
    )?;
    if let Some(r) = &bundle.age_breakdown {
        output::write_csv(&out_dir.join("age_breakdown.csv"), &output::age_rows(r))?;
    }
    if let Some(r) = &bundle.gender_trend {
        output::write_csv(&out_dir.join("gender_trend.csv"), &output::gender_rows(r))?;
    }
    if let Some(r) = &bundle.ratio_trend {
        output::write_csv(&out_dir.join("ratio_trend.csv"), &output::ratio_rows(r))?;
    }
    output::write_json(&out_dir.join("dashboard.json"), &bundle)?;
    println!("Outputs saved to {}", out_dir.display());
    Ok(())
}

fn run(cli: Cli) -> Result<()> {
    let mut cfg = match &cli.config {
        Some(path) => AppConfig::load(path)?,
        None => AppConfig::default(),
    };
    if let Some(file) = cli.file {
        cfg.data_file = file;
    }

    let mut cache = DataCache::new(cfg.data_file.clone(), cfg.vocabulary);
    let ds = cache.get()?;
    let max = cli.rows;

    match cli.command {
        Commands::Summary => {
            let r = ds.report();
            println!(
                "Processing dataset... ({} rows read, {} observations kept)",
                format_int(r.total_rows),
                format_int(r.kept_rows)
            );
            println!(
                "Note: {} rows skipped, {} values treated as 0.",
                format_int(r.skipped_rows),
                format_int(r.coerced_values)
            );
            println!(
                "Countries: {}",
                format_int(ds.index().countries().count())
            );
        }
        Commands::Composition => {
            let rows = output::composition_rows(&ds.composition());
            output::preview(
                "Employment Composition by Country",
                Some("latest year per country"),
                &rows,
                max,
            );
        }
        Commands::Trends => {
            let rows = output::trend_rows(&ds.time_series());
            output::preview("Employment Trends", None, &rows, max);
        }
        Commands::Countries => {
            let rows = output::country_rows(&ds.country_options());
            output::preview("Countries", None, &rows, max);
        }
        Commands::Age { country } => match ds.age_breakdown(&country) {
            Some(rec) => {
                let note = format!("{}, {}", rec.country_name, rec.year);
                output::preview("Age Composition", Some(&note), &output::age_rows(&rec), max);
            }
            None => not_found(&country),
        },
        Commands::Gender { country, status } => {
            match ds.gender_trend(&country, status.into()) {
                Some(rec) => {
                    output::preview(
                        "Gender Disparity",
                        Some(&rec.country_name),
                        &output::gender_rows(&rec),
                        max,
                    );
                }
                None => not_found(&country),
            }
        }
        Commands::Ratio { country } => match ds.ratio_trend(&country) {
            Some(rec) => {
                output::preview(
                    "Full-time / Part-time Ratio",
                    Some(&rec.country_name),
                    &output::ratio_rows(&rec),
                    max,
                );
            }
            None => not_found(&country),
        },
        Commands::Export { out_dir, country } => export(&ds, &out_dir, country)?,
    }
    info!("Done");
    Ok(())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
