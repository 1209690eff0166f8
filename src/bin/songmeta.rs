mod commands;

use clap::Parser;
use commands::{execute_command, Commands};

/// Song and album metadata from Deezer and Spotify pages
#[derive(Parser)]
#[command(
    name = "songmeta",
    about = "Song and album metadata from Deezer and Spotify pages",
    long_about = None
)]
struct Cli {
    /// Show detailed debug information
    #[arg(long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[tokio::main]
async fn main() {
    let args = Cli::parse();

    let default_level = if args.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    match execute_command(args.command).await {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(e) => {
            eprintln!("❌ {e}");
            std::process::exit(2);
        }
    }
}
