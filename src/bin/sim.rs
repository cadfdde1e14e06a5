#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    use broadside::{run_simulation, GameConfig, Side};
    use serde_json::json;

    let args: Vec<String> = std::env::args().collect();
    if args.len() != 2 {
        eprintln!("Usage: {} <seed>", args[0]);
        std::process::exit(1);
    }
    let seed: u64 = args[1].parse()?;

    let summary = run_simulation(GameConfig::default(), seed, 1000)?;
    let winner = match summary.winner {
        Some(Side::Player) => Some("player"),
        Some(Side::Ai) => Some("ai"),
        None => None,
    };

    let result = json!({
        "seed": summary.seed,
        "player": {"shots": summary.player_shots},
        "ai": {"shots": summary.ai_shots},
        "winner": winner,
    });

    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
