use gridshot::{make_players, new_board, Game, GameConfig, NullView, RandomInput};
use rand::{rngs::SmallRng, SeedableRng};
use serde_json::json;

fn main() -> anyhow::Result<()> {
    gridshot::init_logging();
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 3 {
        eprintln!("Usage: {} <seed> <players>", args[0]);
        std::process::exit(1);
    }
    let seed: u64 = args[1].parse()?;
    let players: usize = args[2].parse()?;

    let config = GameConfig::default();
    let mut rng = SmallRng::seed_from_u64(seed);
    let board = new_board(&config, &mut rng).map_err(|e| anyhow::anyhow!(e))?;
    let mut input = RandomInput::new(SmallRng::seed_from_u64(seed.wrapping_add(1)), players);

    let mut game = Game::new(board, make_players(players), config.guesses);
    let outcome = game
        .play(&mut input, &mut NullView)
        .map_err(|e| anyhow::anyhow!(e))?;

    let result = json!({
        "winner": outcome.winner,
        "rounds": outcome.rounds_played,
        "guesses_remaining": outcome.guesses_remaining,
        "config": config,
    });

    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
