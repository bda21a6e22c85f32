use std::path::PathBuf;

use clap::{Args as ClapArgs, Parser, Subcommand};
use eyre::Result;

mod commands;

#[derive(Parser, Debug)]
#[command(name = "kognit", about = "Adaptive assessment engine")]
struct Cli {
    /// Config file to use instead of the per-user default.
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the step list planned for a subject.
    Plan(PlanArgs),
    /// Score externally collected raw values and write an export.
    Score(ScoreArgs),
    /// Re-run a recorded session and write its export.
    Replay(ReplayArgs),
    /// Inspect or create the config file.
    #[command(subcommand)]
    Config(ConfigCommand),
}

#[derive(ClapArgs, Debug)]
struct PlanArgs {
    #[arg(long)]
    age: u32,
    /// Answer to "can the subject read?" (asked below age 8).
    #[arg(long)]
    can_read: Option<bool>,
    /// Answer to "can the subject count?" (asked below age 8).
    #[arg(long)]
    can_count: Option<bool>,
}

#[derive(ClapArgs, Debug)]
struct ScoreArgs {
    /// JSON file with `subject`, `scores` and optional `notes`.
    #[arg(long)]
    input: PathBuf,
    /// Output directory for the export.
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(ClapArgs, Debug)]
struct ReplayArgs {
    /// JSON script with `subject`, `seed` and timestamped `events`.
    #[arg(long)]
    script: PathBuf,
    /// Output directory for the export.
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Print the effective config.
    Show,
    /// Write the default config.
    Init {
        /// Replace an existing file.
        #[arg(long)]
        force: bool,
    },
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
    let config_path = match cli.config {
        Some(path) => path,
        None => kognit_cli::config::default_config_path()?,
    };

    match cli.command {
        Command::Plan(args) => commands::plan(args.age, args.can_read, args.can_count),
        Command::Score(args) => commands::score(&config_path, &args.input, args.out),
        Command::Replay(args) => commands::replay(&config_path, &args.script, args.out),
        Command::Config(ConfigCommand::Show) => commands::config_show(&config_path),
        Command::Config(ConfigCommand::Init { force }) => commands::config_init(&config_path, force),
    }
}
