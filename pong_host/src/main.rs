use std::path::PathBuf;

use anyhow::{ensure, Context, Result};
use clap::Parser;
use game_core::{GameRng, Match, Side};
use pong_host::{load_config, load_preferences, KeyScript, LocalGame, SessionOptions, Summary};

#[derive(Parser)]
#[command(name = "pong-host")]
#[command(about = "Run Pong matches headlessly and log what happens", long_about = None)]
struct Cli {
    /// Configuration JSON; missing fields keep their defaults
    #[arg(long)]
    config: Option<PathBuf>,

    /// Preferences JSON (left_autoplay, right_autoplay, volume)
    #[arg(long)]
    prefs: Option<PathBuf>,

    /// Points needed to win, overrides the config file
    #[arg(long)]
    play_to: Option<u32>,

    /// Seed for serve side, launch angles and bounce jitter
    #[arg(long, default_value_t = 12345)]
    seed: u64,

    /// Number of matches to play before stopping
    #[arg(long, default_value_t = 1)]
    matches: u32,

    /// Stop after this many simulated wall-clock seconds
    #[arg(long, default_value_t = 600.0)]
    max_seconds: f32,

    /// Frames per simulated second
    #[arg(long, default_value_t = 60)]
    fps: u32,

    /// Let the computer play both paddles
    #[arg(long)]
    autoplay_both: bool,

    /// Key event on a frame: `FRAME:KEY` taps, `FRAME:KEY:down` / `FRAME:KEY:up` hold and release (repeatable)
    #[arg(long = "press", value_name = "FRAME:KEY")]
    presses: Vec<String>,

    /// Print the summary as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::filter::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    ensure!(cli.fps > 0, "--fps must be at least 1");
    ensure!(cli.max_seconds > 0.0, "--max-seconds must be positive");

    let mut config = load_config(cli.config.as_deref())?;
    if let Some(play_to) = cli.play_to {
        config.play_to = play_to;
    }
    let game = Match::new(config, GameRng::new(cli.seed)).context("invalid match configuration")?;

    let mut prefs = load_preferences(cli.prefs.as_deref());
    if cli.autoplay_both {
        prefs.left_autoplay = true;
        prefs.right_autoplay = true;
    }

    let script = KeyScript::parse(cli.presses.as_slice()).context("parsing --press")?;
    if script.is_empty() && !(prefs.left_autoplay && prefs.right_autoplay) {
        tracing::warn!("no scripted keys and not both paddles on autoplay; serves may never happen");
    }

    let options = SessionOptions {
        fps: cli.fps,
        matches: cli.matches,
        max_seconds: cli.max_seconds,
    };
    tracing::info!(seed = cli.seed, ?options, "session starting");

    let mut session = LocalGame::new(game, &prefs, script, options);
    let summary = session.run();

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        print_summary(&summary);
    }
    Ok(())
}

fn print_summary(summary: &Summary) {
    println!("Pong session");
    println!("{}", "=".repeat(40));
    for (i, result) in summary.results.iter().enumerate() {
        let winner = match result.winner {
            Side::Left => "Left",
            Side::Right => "Right",
        };
        println!(
            "Match {}: {winner} wins {}-{} ({} paddle hits)",
            i + 1,
            result.left,
            result.right,
            result.rallies
        );
    }
    if summary.results.is_empty() {
        println!("No match finished");
    }
    println!(
        "{} frames, {:.1}s simulated, {} wall bounces, ended in {:?}",
        summary.frames, summary.seconds, summary.wall_bounces, summary.final_state
    );
}
