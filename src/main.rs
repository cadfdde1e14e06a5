#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use broadside::{
    heatmap, init_logging, run_simulation, ui, CliPlayer, Game, GameConfig, Phase, Player, Side,
    TargetingEngine, GRID_SIZE, MAX_LABELLED_SIZE,
};

#[cfg(feature = "std")]
use clap::{builder::RangedU64ValueParser, Args, Parser, Subcommand};
#[cfg(feature = "std")]
use rand::rngs::SmallRng;
#[cfg(feature = "std")]
use rand::{Rng, SeedableRng};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args, Clone, Debug)]
#[cfg(feature = "std")]
struct FleetArgs {
    #[arg(
        long,
        default_value_t = GRID_SIZE,
        value_parser = RangedU64ValueParser::<usize>::new().range(1..=MAX_LABELLED_SIZE as u64),
        help = "Board edge length (1-26)"
    )]
    size: usize,
    #[arg(long, value_delimiter = ',', default_value = "5,4,3,3,2", help = "Ship lengths")]
    ships: Vec<usize>,
}

#[cfg(feature = "std")]
impl FleetArgs {
    fn config(&self) -> GameConfig {
        GameConfig::new(self.size, self.ships.clone())
    }
}

#[derive(Subcommand)]
#[cfg(feature = "std")]
enum Commands {
    /// Play against the AI in the terminal.
    Play {
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
        #[command(flatten)]
        fleet: FleetArgs,
    },
    /// Run AI-vs-AI games and print one JSON summary per game.
    Sim {
        #[arg(long, help = "Seed of the first game; later games use seed+1, seed+2, ...")]
        seed: Option<u64>,
        #[arg(long, default_value_t = 1)]
        games: u64,
        #[arg(long, default_value_t = 1000, help = "Shot limit per game")]
        max_shots: usize,
        #[command(flatten)]
        fleet: FleetArgs,
    },
    /// Fire random shots at a random fleet and show the engine's heatmap.
    Heatmap {
        #[arg(long)]
        seed: Option<u64>,
        #[arg(long, default_value_t = 20, help = "Random shots fired before the snapshot")]
        shots: usize,
        #[command(flatten)]
        fleet: FleetArgs,
    },
}

#[cfg(feature = "std")]
fn resolve_seed(seed: Option<u64>) -> u64 {
    match seed {
        Some(s) => {
            log::info!("Using fixed seed: {} (game will be reproducible)", s);
            s
        }
        None => rand::rng().random(),
    }
}

#[cfg(feature = "std")]
fn play(seed: u64, config: GameConfig) -> anyhow::Result<()> {
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut player = CliPlayer::new(&config.ships);
    let mut game = Game::new(config, &mut rng)?;
    game.start();

    loop {
        match game.phase() {
            Phase::PlayerTurn => {
                ui::print_player_view(&game);
                if game.player_turn_with(&mut player).is_none()
                    && game.phase() == Phase::PlayerTurn
                {
                    println!("Leaving the game.");
                    return Ok(());
                }
            }
            Phase::AiTurn => {
                if let Some(report) = game.ai_shot() {
                    player.handle_opponent_guess((report.row, report.col), report.outcome.result);
                }
            }
            Phase::GameOver => {
                ui::print_player_view(&game);
                let (player_shots, ai_shots) = game.shot_counts();
                match game.winner() {
                    Some(Side::Player) => println!("You won in {} shots.", player_shots),
                    Some(Side::Ai) => println!("The AI won in {} shots.", ai_shots),
                    None => {}
                }
                return Ok(());
            }
            Phase::Ready => {
                game.start();
            }
        }
    }
}

#[cfg(feature = "std")]
fn show_heatmap(seed: u64, shots: usize, config: GameConfig) -> anyhow::Result<()> {
    anyhow::ensure!(config.size > 0, "board size must be positive");
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut board = broadside::Board::new(config.size);
    board.random_place_all(&config.ships, &mut rng)?;
    for _ in 0..shots {
        let r = rng.random_range(0..config.size);
        let c = rng.random_range(0..config.size);
        board.receive_shot(r, c);
    }
    let view = board.knowledge_view();
    let remaining = board.remaining_lengths();
    ui::print_knowledge(&view);
    ui::print_heatmap(&heatmap(&view, &remaining));

    let engine = TargetingEngine::new(&remaining);
    let own = broadside::KnowledgeGrid::new(config.size);
    let (r, c) = engine.choose_shot(&view, &own, &config.ships);
    println!("\nSuggested shot: {}", broadside::coord_to_string(r, c));
    Ok(())
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Play { seed, fleet } => {
            let seed = resolve_seed(seed);
            play(seed, fleet.config())?;
        }
        Commands::Sim {
            seed,
            games,
            max_shots,
            fleet,
        } => {
            let seed = resolve_seed(seed);
            for i in 0..games {
                let summary = run_simulation(fleet.config(), seed.wrapping_add(i), max_shots)?;
                println!("{}", serde_json::to_string(&summary)?);
            }
        }
        Commands::Heatmap { seed, shots, fleet } => {
            let seed = resolve_seed(seed);
            show_heatmap(seed, shots, fleet.config())?;
        }
    }
    Ok(())
}
