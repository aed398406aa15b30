//! lifequiz CLI — the terminal front end for the quiz.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "lifequiz", version, about = "Life-expectancy guessing quiz over a public dataset")]
struct Cli {
    /// Config file path (default: ./lifequiz.toml when present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play the quiz interactively
    Play {
        /// Local dataset file instead of the remote URL
        #[arg(long)]
        dataset: Option<PathBuf>,

        /// Skip the feedback pause between questions
        #[arg(long)]
        no_delay: bool,
    },

    /// Print every generated question with its answer
    Answers {
        /// Local dataset file instead of the remote URL
        #[arg(long)]
        dataset: Option<PathBuf>,
    },

    /// Check which configured entities the dataset covers
    Check {
        /// Local dataset file instead of the remote URL
        #[arg(long)]
        dataset: Option<PathBuf>,
    },

    /// Create a starter lifequiz.toml
    Init,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("lifequiz=info".parse().unwrap()),
        )
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Play { dataset, no_delay } => {
            commands::play::execute(dataset, no_delay, cli.config).await
        }
        Commands::Answers { dataset } => commands::answers::execute(dataset, cli.config).await,
        Commands::Check { dataset } => commands::check::execute(dataset, cli.config).await,
        Commands::Init => commands::init::execute(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
