use anyhow::{Context, Result};
use battle_core::pacing::{NoPacing, Pacer, SleepPacer};
use battle_core::{InputJournal, replay::replay_battle};
use clap::Parser;
use scenario::Scenario;
use std::fs;
use std::path::PathBuf;

mod scenario;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the journal JSON file to replay
    #[arg(short, long)]
    journal: PathBuf,
    /// Scenario TOML (party, mode ups, level); the starter level when omitted
    #[arg(short, long)]
    scenario: Option<PathBuf>,
    /// Wait out the real-time pauses between attacks and after the wall falls
    #[arg(long)]
    pace: bool,
    /// Print the battlefield after the replay
    #[arg(long)]
    board: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let scenario = match &args.scenario {
        Some(path) => Scenario::load(path)?,
        None => Scenario::starter(),
    };
    let (party, summaries) = scenario.build_party()?;
    for line in &summaries {
        println!("{line}");
    }

    let journal_data = fs::read_to_string(&args.journal)
        .with_context(|| format!("Failed to read journal file: {}", args.journal.display()))?;
    let journal = InputJournal::from_json(&journal_data)
        .with_context(|| "Failed to deserialize journal JSON")?;

    let pacer: Box<dyn Pacer> = if args.pace { Box::new(SleepPacer) } else { Box::new(NoPacing) };
    let battle = replay_battle(&party, &scenario.level, &journal, pacer)
        .map_err(|e| anyhow::anyhow!("Replay failed during execution: {:?}", e))?;

    for event in battle.log() {
        println!("{event}");
    }
    if args.board {
        for row in battle.render_rows() {
            println!("{row}");
        }
    }

    println!("Replay complete.");
    println!("Final Round: {}", battle.round());
    println!("Wall HP: {}", battle.wall_hp());
    println!("Outcome: {:?}", battle.outcome());
    println!("Snapshot Hash: {}", battle.snapshot_hash());

    Ok(())
}
