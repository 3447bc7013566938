use std::process::ExitCode;

use clap::{Parser, Subcommand};
use serde_json::json;

use groupie_tracker::catalog::{filter, find_artist, find_relation, QueryParameters};
use groupie_tracker::config::UpstreamConfig;
use groupie_tracker::upstream::UpstreamClient;

#[derive(Parser)]
#[command(name = "groupie-cli")]
#[command(about = "Query the Groupie Trackers API from the command line", long_about = None)]
struct Cli {
    #[arg(short, long, default_value = "https://groupietrackers.herokuapp.com/api")]
    upstream: String,

    /// Derive sub-resource URLs instead of reading the API index.
    #[arg(long)]
    no_discover: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List artists matching the filters
    Artists {
        /// Substring of the artist or a member name
        #[arg(short, long, default_value = "")]
        q: String,
        #[arg(long, default_value = "")]
        year_min: String,
        #[arg(long, default_value = "")]
        year_max: String,
        #[arg(long, default_value = "")]
        members_min: String,
    },
    /// Show one artist and its concerts
    Artist {
        #[arg(long)]
        id: i64,
    },
}

#[tokio::main]
async fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = UpstreamClient::new(&UpstreamConfig {
        base_url: cli.upstream,
        discover_endpoints: !cli.no_discover,
        timeout_secs: None,
    })?;

    match cli.command {
        Commands::Artists {
            q,
            year_min,
            year_max,
            members_min,
        } => {
            let query = QueryParameters::new(&q, &year_min, &year_max, &members_min);
            let artists = client.artist_list().await?;
            let matched = filter(&artists, &query);
            println!("{}", serde_json::to_string_pretty(&matched)?);
        }
        Commands::Artist { id } => {
            let (artists, relations) = client.artists_with_relations().await?;
            let Some(artist) = find_artist(&artists, id) else {
                eprintln!("Error: artist {} not found", id);
                return Ok(ExitCode::FAILURE);
            };
            let concerts = find_relation(&relations, artist.id);
            let output = json!({
                "artist": artist,
                "concerts": concerts,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
    }

    Ok(ExitCode::SUCCESS)
}
