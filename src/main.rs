use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use colored::Colorize;
use tracing_subscriber::EnvFilter;

use crop_advisor::{
    analysis::Advisor,
    io,
    models::{AdvisoryRequest, SoilDataSource, SoilInput},
    visualization::{
        format_report, print_advisory_sections, print_crop_table, print_district_table,
        print_fertilizer_table, print_nutrient_status, print_scenario_chart,
    },
    AppConfig,
};

#[derive(Parser)]
#[command(
    name = "crop-advisor",
    about = "Crop Advisor - Fertilizer recommendations and yield estimates from soil NPK",
    version,
    author
)]
struct Cli {
    /// Path to a TOML config file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Soil readings shared by the fertilizer and predict commands.
#[derive(Args)]
struct SoilArgs {
    /// Available nitrogen (kg/ha)
    #[arg(short = 'n', long)]
    nitrogen: Option<f64>,

    /// Available phosphorus (kg/ha)
    #[arg(short = 'p', long)]
    phosphorus: Option<f64>,

    /// Available potassium (kg/ha)
    #[arg(short = 'k', long)]
    potassium: Option<f64>,

    /// Where the readings came from: soil_report, soil_image, manual, district_average
    #[arg(long, default_value = "manual")]
    source: SoilDataSource,

    /// Soil type whose default NPK fills missing readings
    #[arg(long)]
    soil_type: Option<String>,
}

impl SoilArgs {
    fn into_input(self) -> SoilInput {
        SoilInput {
            n: self.nitrogen,
            p: self.phosphorus,
            k: self.potassium,
            source: self.source,
            soil_type: self.soil_type,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Recommend Urea, DAP and MOP doses for a crop
    Fertilizer {
        /// Crop name
        #[arg(short, long)]
        crop: String,

        /// District, used for average soil values when no readings are given
        #[arg(short, long, default_value = "")]
        district: String,

        /// Farm size in acres
        #[arg(short, long, default_value = "1.0")]
        farm_size: f64,

        #[command(flatten)]
        soil: SoilArgs,
    },

    /// Predict yield and fertilizer needs for a planting
    Predict {
        /// Crop name
        #[arg(short, long)]
        crop: String,

        /// Crop variety
        #[arg(long)]
        variety: String,

        /// District
        #[arg(short, long)]
        district: String,

        /// Farm size in acres
        #[arg(short, long, default_value = "1.0")]
        farm_size: f64,

        /// Sowing date (YYYY-MM-DD)
        #[arg(short, long)]
        sowing_date: String,

        /// Irrigation type, e.g. "Canal Irrigation" or "Rainfed"
        #[arg(short, long)]
        irrigation: String,

        /// Crop grown last season
        #[arg(long, default_value = "none")]
        previous_crop: String,

        #[command(flatten)]
        soil: SoilArgs,

        /// Skip the yield scenario chart
        #[arg(long)]
        no_chart: bool,
    },

    /// Build a full advisory report from a JSON request file
    Report {
        /// Path to the request JSON
        #[arg(short, long)]
        input: PathBuf,

        /// Write the report to a file (.json or .csv)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Pretty-print JSON output
        #[arg(long)]
        pretty: bool,
    },

    /// List built-in or configured crops
    Crops,

    /// List district soil NPK averages
    Districts,
}

fn init_tracing(log_level: &str, verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => AppConfig::from_file(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?,
        None => AppConfig::default(),
    };
    init_tracing(&config.log_level, cli.verbose);

    let reference = config.load_reference_data()?;
    let advisor = Advisor::new(&reference);

    match cli.command {
        Commands::Fertilizer {
            crop,
            district,
            farm_size,
            soil,
        } => {
            if !(farm_size.is_finite() && farm_size > 0.0) {
                anyhow::bail!("Farm size must be positive, got {farm_size}");
            }
            let soil = soil.into_input();
            soil.validate()?;
            if reference.crop(&crop).is_none() {
                eprintln!(
                    "{}: unknown crop '{crop}', using default requirements",
                    "Warning".yellow()
                );
            }

            println!(
                "\n{}",
                format!("Fertilizer Plan: {crop} ({farm_size} acres)")
                    .bold()
                    .cyan()
            );

            let reading = advisor.resolve_soil(&soil, &district);
            let rec = advisor.fertilizer(&crop, &reading, farm_size);
            print_nutrient_status(&reading, &rec);
            print_fertilizer_table(&rec, None);
        }

        Commands::Predict {
            crop,
            variety,
            district,
            farm_size,
            sowing_date,
            irrigation,
            previous_crop,
            soil,
            no_chart,
        } => {
            let request = AdvisoryRequest {
                crop,
                variety,
                district,
                farm_size_acres: farm_size,
                sowing_date,
                irrigation_type: irrigation,
                previous_crop,
                soil: soil.into_input(),
            };
            let report = advisor.report(&request)?;
            print!("{}", format_report(&report));
            if !no_chart {
                print_scenario_chart(&report.yield_prediction);
            }
        }

        Commands::Report {
            input,
            output,
            pretty,
        } => {
            let request = io::read_request(&input)
                .with_context(|| format!("Failed to read request {}", input.display()))?;
            let report = advisor.report(&request)?;

            match output {
                Some(path) => {
                    io::writer_for_path(&path, pretty)?.write(&report, &path)?;
                    println!(
                        "{} Report written to {}",
                        "Success:".green().bold(),
                        path.display()
                    );
                }
                None => {
                    print!("{}", format_report(&report));
                    print_scenario_chart(&report.yield_prediction);
                    print_advisory_sections(&report.advisory);
                }
            }
        }

        Commands::Crops => print_crop_table(&reference),

        Commands::Districts => print_district_table(&reference),
    }

    Ok(())
}
