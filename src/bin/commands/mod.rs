pub mod output;

use clap::{Args, Subcommand};
use songmeta::{MetadataProvider, Platform, ScraperConfig};

/// Options shared by every lookup command
#[derive(Args, Clone)]
pub struct LookupArgs {
    /// Page URL or bare track/album id
    pub input: String,

    /// Platform to query (detected from the URL when omitted, deezer for bare ids)
    #[arg(long)]
    pub platform: Option<Platform>,

    /// Backfill a missing release date from the page's embedded state
    #[arg(long)]
    pub experimental: bool,

    /// Print the record as JSON instead of a field list
    #[arg(long)]
    pub json: bool,

    /// Save every fetched page under debug_responses/
    #[arg(long)]
    pub save_responses: bool,
}

impl LookupArgs {
    pub fn platform(&self) -> Platform {
        self.platform
            .or_else(|| Platform::detect(&self.input))
            .unwrap_or(Platform::Deezer)
    }

    pub fn provider(&self) -> MetadataProvider {
        let platform = self.platform();
        let mut config = ScraperConfig::new()
            .with_experimental(self.experimental)
            .with_log_target(format!("songmeta::{platform}"));
        if self.save_responses {
            config = config.with_debug_save_responses(true);
        }

        let client = http_client::native::NativeClient::new();
        MetadataProvider::with_http_client_and_config(platform, Box::new(client), config)
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Look up a song and its album
    ///
    /// Usage examples:
    /// # Deezer track URL with locale and query string
    /// songmeta song "https://www.deezer.com/es/track/1566859182?host=0"
    ///
    /// # Spotify track id
    /// songmeta song 0ax4ZXW4EOk4zUvdP9Fu2H --platform spotify --json
    Song(LookupArgs),

    /// Look up an album
    ///
    /// Usage examples:
    /// songmeta album "https://www.deezer.com/es/album/275547892" --experimental
    Album(LookupArgs),
}

/// Run a command; `Ok(false)` means the lookup produced no record.
pub async fn execute_command(command: Commands) -> Result<bool, serde_json::Error> {
    match command {
        Commands::Song(args) => {
            let provider = args.provider();
            let Some(song) = provider.get_song(&args.input).await else {
                eprintln!("❌ No song metadata for {}", args.input);
                return Ok(false);
            };
            if args.json {
                println!("{}", serde_json::to_string_pretty(&song)?);
            } else {
                output::print_song(&song);
            }
            Ok(true)
        }
        Commands::Album(args) => {
            let provider = args.provider();
            let Some(album) = provider.get_album(&args.input).await else {
                eprintln!("❌ No album metadata for {}", args.input);
                return Ok(false);
            };
            if args.json {
                println!("{}", serde_json::to_string_pretty(&album)?);
            } else {
                output::print_album(&album, "");
            }
            Ok(true)
        }
    }
}
