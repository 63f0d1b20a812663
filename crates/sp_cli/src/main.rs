//! SetPoint operations CLI.
//!
//! Drives a local filesystem store through the same JSON handlers the HTTP
//! server uses, so behavior stays identical across surfaces.

use std::path::PathBuf;

use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use serde_json::json;

use sp_core::{create_match_json, get_match_json, update_score_json, FsStore};

#[derive(Parser)]
#[command(name = "sp_cli")]
#[command(about = "Manage SetPoint matches in a local store", long_about = None)]
struct Cli {
    /// Store root directory
    #[arg(long, default_value = "./data")]
    data_dir: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a new match
    Create {
        /// Display name (defaults to "<teamA> x <teamB>")
        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        team_a: Option<String>,

        #[arg(long)]
        team_b: Option<String>,

        /// Total sets (majority wins the match)
        #[arg(long, default_value_t = 3)]
        sets: i64,

        /// Points that finish a set
        #[arg(long, default_value_t = 25)]
        max_points: i64,
    },

    /// Score points for one team
    Point {
        id: String,

        /// Team token: A or B
        #[arg(long)]
        team: String,

        #[arg(long, default_value_t = 1, allow_hyphen_values = true)]
        delta: i64,
    },

    /// Force-finish a match
    Finish { id: String },

    /// Print a stored match
    Show { id: String },
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let store = FsStore::open(&cli.data_dir)?;

    let response = match cli.command {
        Commands::Create {
            name,
            team_a,
            team_b,
            sets,
            max_points,
        } => {
            let body = json!({
                "name": name,
                "teamA": team_a,
                "teamB": team_b,
                "sets": sets,
                "maxPoints": max_points,
            });
            create_match_json(&store, &body.to_string())
        }
        Commands::Point { id, team, delta } => {
            let body = json!({ "action": "point", "team": team, "delta": delta });
            update_score_json(&store, &id, &body.to_string())
        }
        Commands::Finish { id } => update_score_json(&store, &id, r#"{"action": "finish"}"#),
        Commands::Show { id } => get_match_json(&store, &id),
    };

    println!("{}", serde_json::to_string_pretty(&response.body)?);
    if response.status >= 400 {
        bail!("request failed with status {}", response.status);
    }
    Ok(())
}
