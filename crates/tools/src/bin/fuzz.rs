use anyhow::{Result, bail};
use battle_core::content::{hero_roster, starter_level};
use battle_core::{Battle, Dir, InputJournal, InputPayload, UnitSpec, replay::replay_to_end};
use clap::Parser;
use rand_chacha::{
    ChaCha8Rng,
    rand_core::{Rng, SeedableRng},
};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(short, long, default_value_t = 42)]
    seed: u64,
    #[arg(short, long, default_value_t = 1000)]
    inputs: u32,
    /// Party size drawn from the roster (at most the starter level's width)
    #[arg(short, long, default_value_t = 3)]
    party: usize,
}

fn choose<T: Clone>(rng: &mut ChaCha8Rng, slice: &[T]) -> T {
    let p = rng.next_u64() as usize % slice.len();
    slice[p].clone()
}

fn random_input(rng: &mut ChaCha8Rng) -> InputPayload {
    let dir = choose(rng, &Dir::ALL);
    choose(
        rng,
        &[
            InputPayload::Move { dir },
            InputPayload::Move { dir },
            InputPayload::Move { dir },
            InputPayload::BeginAttack,
            InputPayload::CancelAttack,
            InputPayload::Attack { dir },
        ],
    )
}

fn main() -> Result<()> {
    let args = Args::parse();

    println!("Starting Fuzz harness on seed {} for max {} inputs...", args.seed, args.inputs);
    let level = starter_level();
    let mut rng = ChaCha8Rng::seed_from_u64(args.seed);
    let roster = hero_roster();
    let party: Vec<UnitSpec> =
        (0..args.party.min(level.cols)).map(|_| choose(&mut rng, &roster)).collect();

    let mut battle = Battle::new(args.seed, &party, &level);
    let mut journal = InputJournal::new(args.seed, &party, &level);

    for _ in 0..args.inputs {
        if battle.outcome().is_some() {
            break;
        }
        // Rejected inputs are part of the fuzz surface; they must leave the battle untouched.
        let before = battle.snapshot_hash();
        if journal.record(&mut battle, random_input(&mut rng)).is_err() {
            let after = battle.snapshot_hash();
            assert_eq!(before, after, "Invariant failed: rejected input mutated state");
        }
        if let Err(problem) = battle.audit() {
            bail!("Invariant failed after {} inputs: {problem}", journal.inputs.len());
        }
    }

    let replayed = replay_to_end(&party, &level, &journal)
        .map_err(|e| anyhow::anyhow!("Replay failed during execution: {:?}", e))?;
    let live_hash = battle.snapshot_hash();
    assert_eq!(replayed.final_snapshot_hash, live_hash, "Invariant failed: replay drift");

    println!(
        "Finished with outcome {:?} after {} accepted inputs ({} rounds)",
        battle.outcome(),
        journal.inputs.len(),
        battle.round()
    );
    println!("Fuzzing completed successfully.");
    Ok(())
}
