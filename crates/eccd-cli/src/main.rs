use std::path::PathBuf;

use clap::{Parser, Subcommand};
use eyre::Result;
use tracing::{info, warn};

use eccd_cli::config::{self, OutputFormat};
use eccd_cli::{input, output};
use eccd_core::models::request::ScoringRequest;
use eccd_instruments::error::InstrumentError;
use eccd_instruments::require_instrument;

const INSTRUMENT_ID: &str = "eccd_checklist";

#[derive(Parser)]
#[command(name = "eccd", version, about = "Score ECCD developmental checklists")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Score a student's evaluations from a JSON request file.
    Score {
        file: PathBuf,
        #[arg(long, value_enum)]
        format: Option<OutputFormat>,
        /// Fail when a raw count exceeds its domain's item count.
        #[arg(long)]
        strict: bool,
    },
    /// Print the checklist's domain structure as JSON.
    Domains,
    /// Show or initialise the config file.
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    Show,
    Init,
}

fn main() -> Result<()> {
    color_eyre::install()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Command::Score {
            file,
            format,
            strict,
        } => score(file, format, strict),
        Command::Domains => {
            let instrument = require_instrument(INSTRUMENT_ID)?;
            println!("{}", serde_json::to_string_pretty(instrument.domains())?);
            Ok(())
        }
        Command::Config { action } => match action {
            ConfigAction::Show => {
                let config = config::load_config()?;
                println!("{}", serde_json::to_string_pretty(&config)?);
                Ok(())
            }
            ConfigAction::Init => {
                let path = config::save_config(&config::load_config()?)?;
                println!("{}", path.display());
                Ok(())
            }
        },
    }
}

fn score(file: PathBuf, format: Option<OutputFormat>, strict: bool) -> Result<()> {
    let config = config::load_config()?;
    let format = format.unwrap_or(config.output_format);
    let strict = strict || config.strict;

    let contents = std::fs::read_to_string(&file)
        .map_err(|e| eyre::eyre!("failed to read {}: {e}", file.display()))?;
    let request = ScoringRequest::from_json(&contents)?;
    info!(
        student_id = %request.student.id,
        evaluations = request.evaluations.len(),
        "scoring request loaded"
    );

    let instrument = require_instrument(INSTRUMENT_ID)?;
    let inputs = input::period_inputs(&request);

    let problems = input::validate(instrument.as_ref(), &inputs);
    for (period, problem) in &problems {
        warn!(%period, domain = %problem.domain, value = problem.value, max = problem.max, "raw count out of range");
    }
    if strict && let Some((_, first)) = problems.into_iter().next() {
        return Err(InstrumentError::Validation(first).into());
    }

    let scores = instrument.score(request.student.birthdate(), &inputs);
    println!(
        "{}",
        output::render(format, instrument.as_ref(), &request.student, &scores)?
    );
    Ok(())
}
