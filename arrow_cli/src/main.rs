mod settings;
mod simulate;

use std::path::PathBuf;

use anyhow::Context;
use arrow_core::gameplay::gesture::GestureClassifier;
use arrow_core::ResolvePolicy;
use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "arrowpose")]
#[command(about = "Pose-driven arrow rhythm game engine", long_about = None)]
struct Cli {
    /// Log engine events to stderr (-v debug, -vv trace). Defaults to RUST_LOG.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Replay a recorded keypoint script through a game session
    Simulate {
        script: PathBuf,
        #[arg(short, long)]
        config: Option<PathBuf>,
        #[arg(long)]
        seed: Option<u64>,
        #[arg(long, value_enum)]
        policy: Option<PolicyArg>,
        #[arg(long, default_value_t = 60)]
        tick_hz: u32,
        /// Print the summary as JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Validate a config file
    CheckConfig { path: PathBuf },
    /// Print the arm directions seen in each frame of a script
    Classify {
        script: PathBuf,
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum PolicyArg {
    OnEntry,
    WithinWindow,
}

impl From<PolicyArg> for ResolvePolicy {
    fn from(arg: PolicyArg) -> Self {
        match arg {
            PolicyArg::OnEntry => ResolvePolicy::OnEntry,
            PolicyArg::WithinWindow => ResolvePolicy::WithinWindow,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Command::Simulate {
            script,
            config,
            seed,
            policy,
            tick_hz,
            json,
        } => {
            let pose_script = pose_runner::load_script_json_from_path(&script)
                .with_context(|| format!("failed to load keypoint script: {}", script.display()))?;

            let mut game_config = settings::load_config(config.as_deref())?;
            game_config.seed = seed.or(game_config.seed).or(pose_script.meta.seed);
            if let Some(policy) = policy {
                game_config.resolve_policy = policy.into();
            }

            let summary = simulate::run_simulation(&pose_script, game_config, tick_hz)
                .with_context(|| format!("simulation failed: {}", script.display()))?;
            if json {
                let out = serde_json::to_string_pretty(&summary).context("failed to serialize summary")?;
                println!("{out}");
            } else {
                simulate::print_table(&summary);
            }
        }
        Command::CheckConfig { path } => {
            let game_config = settings::load_config(Some(path.as_path()))?;
            game_config
                .validate()
                .map_err(|e| anyhow::anyhow!(e.to_string()))
                .with_context(|| format!("invalid config: {}", path.display()))?;
            println!(
                "ok: {} zones, policy {:?}, max_active {}",
                game_config.zones.len(),
                game_config.resolve_policy,
                game_config.max_active
            );
        }
        Command::Classify { script, config } => {
            let pose_script = pose_runner::load_script_json_from_path(&script)
                .with_context(|| format!("failed to load keypoint script: {}", script.display()))?;
            let game_config = settings::load_config(config.as_deref())?;
            let classifier = GestureClassifier::from_config(&game_config);

            println!("Time(ms) | Left | Right");
            for frame in &pose_script.frames {
                let limbs = classifier.classify_limbs(&frame.keypoints);
                println!(
                    "{:8} | {:4} | {}",
                    frame.time_ms,
                    label(limbs.left),
                    label(limbs.right)
                );
            }
        }
    }

    Ok(())
}

fn label(direction: Option<pose_schema::Direction>) -> String {
    direction.map_or_else(|| "-".to_string(), |d| format!("{d:?}"))
}

fn init_tracing(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
