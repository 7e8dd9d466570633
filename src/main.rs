use std::path::PathBuf;

use clap::{Parser, Subcommand};
use trivia_viewer::config::{API_URL_ENV, DEFAULT_API_URL};
use trivia_viewer::{check_health, logging, ApiConfig, TriviaApp, TriviaError};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Base URL of the trivia API
    #[arg(long, global = true, env = API_URL_ENV, default_value = DEFAULT_API_URL)]
    api_url: String,

    /// File to append logs to (the viewer itself owns the terminal)
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Show random questions (default)
    View,
    /// Check that the API answers on /healthz
    Health,
}

#[tokio::main]
async fn main() {
    let args = Args::parse();

    if let Err(e) = run(args).await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run(args: Args) -> Result<(), TriviaError> {
    let config = ApiConfig::new(&args.api_url)?;

    match args.command.unwrap_or(Command::View) {
        Command::View => {
            if let Some(path) = &args.log_file {
                logging::init_file(path)?;
            }
            TriviaApp::new(config).run().await
        }
        Command::Health => {
            match &args.log_file {
                Some(path) => logging::init_file(path)?,
                None => logging::init_stderr()?,
            }
            check_health(config).await?;
            println!("ok");
            Ok(())
        }
    }
}
