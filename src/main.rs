#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use gridshot::{
    init_logging, make_players, new_board, Game, GameConfig, Input, TerminalInput, TerminalView,
};

#[cfg(feature = "std")]
use clap::Parser;
#[cfg(feature = "std")]
use rand::rngs::SmallRng;
#[cfg(feature = "std")]
use rand::SeedableRng;

/// Local hot-seat battleship on a shared board.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[arg(long, help = "Fix RNG seed for reproducible ship placement (e.g., --seed 12345)")]
    seed: Option<u64>,
    #[arg(long, default_value_t = gridshot::DEFAULT_WIDTH)]
    width: usize,
    #[arg(long, default_value_t = gridshot::DEFAULT_HEIGHT)]
    height: usize,
    #[arg(long, default_value_t = gridshot::DEFAULT_SHIPS)]
    ships: usize,
    #[arg(long, default_value_t = gridshot::DEFAULT_GUESSES, help = "Rounds before the game ends")]
    guesses: u32,
    #[arg(
        long,
        value_parser = clap::value_parser!(u32).range(1..),
        help = "Number of players (at least 1); prompted for when omitted"
    )]
    players: Option<u32>,
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    let config = GameConfig {
        width: cli.width,
        height: cli.height,
        ship_count: cli.ships,
        guesses: cli.guesses,
        ..GameConfig::default()
    };
    config.validate().map_err(|e| anyhow::anyhow!(e))?;

    let mut rng = if let Some(s) = cli.seed {
        log::info!("using fixed seed {}", s);
        SmallRng::seed_from_u64(s)
    } else {
        let mut seed_rng = rand::rng();
        SmallRng::from_rng(&mut seed_rng)
    };
    let board = new_board(&config, &mut rng).map_err(|e| anyhow::anyhow!(e))?;

    let stdin = std::io::stdin();
    let mut input = TerminalInput::new(stdin.lock(), std::io::stdout(), config.input_attempts);
    let mut view = TerminalView::new(std::io::stdout());

    let count = match cli.players {
        Some(n) => n as usize,
        None => input.request_player_count()?,
    };
    let players = make_players(count);

    let mut game = Game::new(board, players, config.guesses).with_markers(config.markers);
    game.play(&mut input, &mut view)?;
    Ok(())
}
