//! Batch driver: loads a network snapshot, checks the initial loading
//! factors, scores every stop and writes the metric files.

mod config;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use gravitas_core::prelude::*;
use thiserror::Error;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use config::RunConfig;

#[derive(Parser, Debug)]
#[command(author, version, about = "Gravity accessibility of transit stops", long_about = None)]
struct Args {
    /// TOML run file with [files], [objective] and [output] sections
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// Directory holding the network files under their conventional names
    #[arg(short, long, default_value = "data")]
    data_dir: PathBuf,
    /// Directory receiving stop_metrics.txt and line_metrics.txt
    #[arg(short, long, default_value = "output")]
    output_dir: PathBuf,
    /// Worker threads for the searches, all cores when unset
    #[arg(short = 'j', long)]
    threads: Option<usize>,
    /// Score population centers instead of stops
    #[arg(long)]
    population: bool,
    /// Skip the loading factor diagnostic
    #[arg(long)]
    skip_loading_factors: bool,
}

#[derive(Error, Debug)]
pub enum CliError {
    #[error(transparent)]
    Core(#[from] Error),
    #[error("Failed to read run file {}: {source}", .path.display())]
    ReadConfig {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Invalid run file {}: {source}", .path.display())]
    ParseConfig {
        path: PathBuf,
        source: toml::de::Error,
    },
}

/// Everything a run needs, after merging the run file with the command line
#[derive(Debug)]
struct Plan {
    files: NetworkFiles,
    objective: AccessConfig,
    stop_metrics: PathBuf,
    line_metrics: PathBuf,
    loading_factors: bool,
}

impl Plan {
    fn resolve(args: &Args) -> Result<Self, CliError> {
        let run = match &args.config {
            Some(path) => RunConfig::load(path)?,
            None => RunConfig::default(),
        };

        let files = run
            .files
            .unwrap_or_else(|| NetworkFiles::in_dir(&args.data_dir));

        let mut objective = match run.objective {
            Some(objective) => objective,
            None => {
                let path = run
                    .objective_file
                    .unwrap_or_else(|| args.data_dir.join("objective_data.txt"));
                load_objective(&path)?
            }
        };
        if args.threads.is_some() {
            objective.threads = args.threads;
        }
        if args.population {
            objective.origins = Origins::Population;
        }

        Ok(Self {
            files,
            objective,
            stop_metrics: run
                .output
                .stop_metrics
                .unwrap_or_else(|| args.output_dir.join("stop_metrics.txt")),
            line_metrics: run
                .output
                .line_metrics
                .unwrap_or_else(|| args.output_dir.join("line_metrics.txt")),
            loading_factors: !args.skip_loading_factors,
        })
    }
}

fn run(plan: &Plan) -> Result<(), CliError> {
    let network = create_network(&plan.files)?;

    if plan.loading_factors {
        match plan.files.flow_file.as_deref().filter(|p| p.exists()) {
            Some(path) => {
                let flows = load_flows(path, &network)?;
                // the core logs the summary lines
                loading_factors(&network, &flows)?;
            }
            None => warn!("No initial flow file, skipping loading factors"),
        }
    }

    let result = compute_accessibility(&network, &plan.objective)?;
    write_stop_metrics(&plan.stop_metrics, &result)?;

    if plan.objective.origins == Origins::Stops {
        write_line_metrics(&plan.line_metrics, &line_metrics(&network, &result))?;
    } else {
        info!("Origins are population centers, no per-line stop metrics written");
    }

    Ok(())
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();
    match Plan::resolve(&args).and_then(|plan| run(&plan)) {
        Ok(()) => {
            info!("Done");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}
