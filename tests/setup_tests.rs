use gridshot::{generate_unique_coordinates, make_players, new_board, BoardError, GameConfig};
use proptest::prelude::*;
use rand::rngs::SmallRng;
use rand::SeedableRng;

#[test]
fn test_three_of_four_cells() {
    let mut rng = SmallRng::seed_from_u64(7);
    let coords = generate_unique_coordinates(&mut rng, 3, 1, 1).unwrap();
    assert_eq!(coords.len(), 3);
    assert!(coords.iter().all(|&(x, y)| x <= 1 && y <= 1));
}

#[test]
fn test_whole_space_can_be_filled() {
    let mut rng = SmallRng::seed_from_u64(7);
    let coords = generate_unique_coordinates(&mut rng, 4, 1, 1).unwrap();
    assert_eq!(coords.len(), 4);
}

#[test]
fn test_capacity_exceeded() {
    let mut rng = SmallRng::seed_from_u64(7);
    assert_eq!(
        generate_unique_coordinates(&mut rng, 5, 1, 1).unwrap_err(),
        BoardError::CapacityExceeded {
            requested: 5,
            available: 4
        }
    );
}

#[test]
fn test_capacity_of_huge_space() {
    let mut rng = SmallRng::seed_from_u64(7);
    let coords = generate_unique_coordinates(&mut rng, 1, usize::MAX, 0).unwrap();
    assert_eq!(coords.len(), 1);
    let coords = generate_unique_coordinates(&mut rng, 2, 3, usize::MAX).unwrap();
    assert_eq!(coords.len(), 2);
}

#[test]
fn test_new_board_reference_config() {
    let mut rng = SmallRng::seed_from_u64(42);
    let board = new_board(&GameConfig::default(), &mut rng).unwrap();
    assert_eq!((board.width(), board.height()), (5, 5));
    assert_eq!(board.ships().len(), 1);
    let (x, y) = board.ships()[0].coordinates();
    assert!(x < 5 && y < 5);
}

#[test]
fn test_new_board_is_reproducible() {
    let cfg = GameConfig {
        ship_count: 6,
        ..GameConfig::default()
    };
    let a = new_board(&cfg, &mut SmallRng::seed_from_u64(3)).unwrap();
    let b = new_board(&cfg, &mut SmallRng::seed_from_u64(3)).unwrap();
    assert_eq!(a.ships(), b.ships());
}

#[test]
fn test_new_board_rejects_too_many_ships() {
    let cfg = GameConfig {
        width: 2,
        height: 2,
        ship_count: 5,
        ..GameConfig::default()
    };
    let mut rng = SmallRng::seed_from_u64(1);
    assert!(matches!(
        new_board(&cfg, &mut rng),
        Err(BoardError::CapacityExceeded { .. })
    ));
}

#[test]
fn test_make_players_names() {
    let players = make_players(3);
    let names: Vec<_> = players.iter().map(|p| p.name()).collect();
    assert_eq!(names, vec!["Player 1", "Player 2", "Player 3"]);
    assert_eq!(make_players(0).len(), 1);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn coordinates_distinct_and_in_range(seed in any::<u64>(), max_x in 0usize..6, max_y in 0usize..6, frac in 0.0f64..=1.0) {
        let n = (((max_x + 1) * (max_y + 1)) as f64 * frac) as usize;
        let mut rng = SmallRng::seed_from_u64(seed);
        let coords = generate_unique_coordinates(&mut rng, n, max_x, max_y).unwrap();
        prop_assert_eq!(coords.len(), n);
        prop_assert!(coords.iter().all(|&(x, y)| x <= max_x && y <= max_y));
    }
}
