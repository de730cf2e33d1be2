use anyhow::{Context, Result};
use ar_chess::{Config, Session};
use chess_model::Game;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "ar-chess")]
#[command(about = "Play chess in the terminal by picking squares")]
struct Cli {
    /// Tracing filter directive; overrides the config file
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play an interactive game on stdin
    Play {
        /// Path to the configuration file
        #[arg(long)]
        config: Option<PathBuf>,
        /// Do not mark the selected piece's legal moves
        #[arg(long)]
        no_highlights: bool,
    },
    /// Print the starting board
    Show {
        /// Print a JSON snapshot instead of text
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Play {
            config,
            no_highlights,
        } => {
            let path = config.clone().unwrap_or_else(Config::config_path);
            let loaded = match config {
                Some(path) => Config::load_from(&path),
                None => Config::load(),
            };
            let mut config =
                loaded.with_context(|| format!("Failed to load {}", path.display()))?;
            if no_highlights {
                config.show_highlights = false;
            }
            init_tracing(cli.log_level.as_deref().unwrap_or(&config.log_level))?;
            tracing::info!(
                promotion = %config.promotion,
                show_highlights = config.show_highlights,
                "starting session"
            );

            let mut session = Session::from_config(&config)?;
            let stdin = std::io::stdin();
            let mut stdout = std::io::stdout();
            session.run(stdin.lock(), &mut stdout)?;
        }
        Commands::Show { json } => {
            init_tracing(cli.log_level.as_deref().unwrap_or("warn"))?;
            let game = Game::new();
            if json {
                println!("{}", serde_json::to_string_pretty(&game.snapshot())?);
            } else {
                print!("{}", game.board());
            }
        }
    }

    Ok(())
}

fn init_tracing(directive: &str) -> Result<()> {
    let filter = EnvFilter::try_new(directive)
        .with_context(|| format!("Invalid log level '{}'", directive))?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
    Ok(())
}
