//! coscientist - iterative hypothesis search for a research goal
//!
//! Generates candidate hypotheses, critiques them, ranks them in an Elo
//! tournament, rescales by goal proximity and evolves the best for a fixed
//! number of rounds, then prints a research overview and shortlist.

use anyhow::{bail, Context};
use clap::Parser;
use orchestrator::{AppConfig, FinalReport, Orchestrator, RoundState};
use research_core::ResearchGoal;
use std::collections::BTreeMap;
use std::fs::File;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing::{error, info};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "coscientist")]
#[command(about = "Generate, debate and evolve research hypotheses", long_about = None)]
#[command(version)]
struct Cli {
    /// Research goal
    #[arg(short, long)]
    goal: String,

    /// Hard constraint passed to generation, as KEY=VALUE (repeatable)
    #[arg(long = "constraint", value_parser = parse_key_value)]
    constraints: Vec<(String, String)>,

    /// Soft preference passed to generation, as KEY=VALUE (repeatable)
    #[arg(long = "preference", value_parser = parse_key_value)]
    preferences: Vec<(String, String)>,

    /// Configuration file path
    #[arg(short, long, env = "COSCIENTIST_CONFIG")]
    config: Option<PathBuf>,

    /// Number of rounds
    #[arg(short, long)]
    rounds: Option<u32>,

    /// Size of the initial population
    #[arg(short, long)]
    population: Option<usize>,

    /// Hypotheses kept for evolution each round
    #[arg(long)]
    keep_top: Option<usize>,

    /// Hypotheses shown in the final shortlist
    #[arg(long)]
    shortlist: Option<usize>,

    /// Tournament pairing seed
    #[arg(long)]
    seed: Option<u64>,

    /// Disable web lookup during reflection
    #[arg(long)]
    no_web: bool,

    /// Keep Elo ratings across rounds
    #[arg(long)]
    carry_ratings: bool,

    /// Write a markdown report to this path
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Write the full report as JSON to this path
    #[arg(long)]
    json_output: Option<PathBuf>,

    /// Use the built-in scripted model instead of a remote endpoint
    #[arg(long)]
    offline: bool,

    /// Log level
    #[arg(long, env = "COSCIENTIST_LOG_LEVEL", default_value = "info")]
    log_level: String,

    /// Enable JSON logging
    #[arg(long)]
    log_json: bool,

    /// Also write logs to this file
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn parse_key_value(raw: &str) -> Result<(String, String), String> {
    match raw.split_once('=') {
        Some((key, value)) if !key.trim().is_empty() => {
            Ok((key.trim().to_string(), value.trim().to_string()))
        }
        _ => Err(format!("expected KEY=VALUE, got '{}'", raw)),
    }
}

fn init_tracing(cli: &Cli) -> anyhow::Result<()> {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| cli.log_level.clone().into());

    let file_layer = match &cli.log_file {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("cannot create log file {}", path.display()))?;
            Some(fmt::layer().with_ansi(false).with_writer(Mutex::new(file)))
        }
        None => None,
    };

    let registry = tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer);
    if cli.log_json {
        registry
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(fmt::layer().with_writer(std::io::stderr))
            .init();
    }
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli)?;

    let mut config = AppConfig::load(cli.config.as_deref())?;

    // CLI overrides file
    let run = &mut config.run;
    if let Some(rounds) = cli.rounds {
        run.rounds = rounds;
    }
    if let Some(population) = cli.population {
        run.population = population;
    }
    if let Some(keep_top) = cli.keep_top {
        run.keep_top = keep_top;
    }
    if let Some(shortlist) = cli.shortlist {
        run.shortlist = shortlist;
    }
    if let Some(seed) = cli.seed {
        run.seed = seed;
    }
    if cli.no_web {
        run.web_search = false;
    }
    if cli.carry_ratings {
        run.carry_ratings = true;
    }
    run.validate()?;

    if cli.goal.trim().is_empty() {
        bail!("goal must not be empty");
    }
    let goal = ResearchGoal {
        text: cli.goal.trim().to_string(),
        constraints: cli.constraints.iter().cloned().collect::<BTreeMap<_, _>>(),
        preferences: cli.preferences.iter().cloned().collect::<BTreeMap<_, _>>(),
    };

    let collaborators = if cli.offline {
        info!("Using offline scripted model");
        agents::build_offline_collaborators()
    } else {
        let agents_config = config.agents_config()?;
        info!(
            "Using model {} at {}",
            agents_config.model.model, agents_config.model.base_url
        );
        agents::build_collaborators(agents_config)?
    };

    let orchestrator = Orchestrator::new(collaborators);
    let outcome = match orchestrator
        .run(RoundState::new(goal, config.run.clone()))
        .await
    {
        Ok(outcome) => outcome,
        Err(e) => {
            error!("Run aborted: {}", e);
            return Err(e.into());
        }
    };

    let report = FinalReport::from_state(&outcome.state);
    println!("{}", report.render_console());

    if let Some(path) = &cli.output {
        report.save_markdown(path)?;
        info!("Report written to {}", path.display());
    }
    if let Some(path) = &cli.json_output {
        report.save_json(path)?;
        info!("JSON report written to {}", path.display());
    }

    Ok(())
}
