use gridshot::{
    Board, Game, GameStatus, Grid, InputError, Markers, NullView, Outcome, Player, ScriptedInput,
    View,
};

/// Records the view calls made by the game.
#[derive(Default)]
struct RecordingView {
    events: Vec<String>,
}

impl View for RecordingView {
    fn remaining_guesses(&mut self, guesses: u32) {
        self.events.push(format!("remaining {}", guesses));
    }

    fn turn(&mut self, player: &Player) {
        self.events.push(format!("turn {}", player.name()));
    }

    fn render(&mut self, grid: &Grid, markers: &Markers) {
        self.events.push(grid.display(markers).to_string());
    }

    fn outcome(&mut self, outcome: &Outcome) {
        self.events
            .push(format!("winner {:?}", outcome.winner.as_deref()));
    }
}

fn board_with_ship(w: usize, h: usize, x: usize, y: usize) -> Board {
    let mut board = Board::new(w, h).unwrap();
    board.add_ship(x, y).unwrap();
    board
}

fn players(n: usize) -> Vec<Player> {
    gridshot::make_players(n)
}

#[test]
fn single_cell_board_won_on_first_guess() {
    let mut game = Game::new(board_with_ship(1, 1, 0, 0), players(1), 5);
    let mut input = ScriptedInput::new([(0, 0)]);
    let outcome = game.play(&mut input, &mut NullView).unwrap();

    assert_eq!(outcome.winner.as_deref(), Some("Player 1"));
    assert_eq!(outcome.rounds_played, 1);
    assert_eq!(outcome.guesses_remaining, 4);
    assert_eq!(game.status(), GameStatus::Won);
    assert_eq!(game.winner().map(|p| p.name()), Some("Player 1"));
}

#[test]
fn later_players_skipped_once_finished() {
    let mut game = Game::new(board_with_ship(5, 5, 2, 2), players(2), 1);
    // Player 2's answer must never be consumed
    let mut input = ScriptedInput::new([(2, 2), (0, 0)]);
    let mut view = RecordingView::default();
    let outcome = game.play(&mut input, &mut view).unwrap();

    assert_eq!(outcome.winner.as_deref(), Some("Player 1"));
    assert_eq!(input.remaining(), vec![(0, 0)]);
    assert!(!view.events.iter().any(|e| e == "turn Player 2"));
    assert_eq!(game.guesses_remaining(), 0);
}

#[test]
fn zero_budget_finishes_before_any_round() {
    let mut game = Game::new(board_with_ship(5, 5, 1, 1), players(2), 0);
    assert!(game.is_finished());
    let mut input = ScriptedInput::default();
    let mut view = RecordingView::default();
    let outcome = game.play(&mut input, &mut view).unwrap();

    assert_eq!(outcome.winner, None);
    assert_eq!(outcome.rounds_played, 0);
    assert_eq!(game.status(), GameStatus::NoWinner);
    assert_eq!(view.events, vec!["winner None".to_string()]);
}

#[test]
fn budget_is_spent_once_per_round() {
    let mut game = Game::new(board_with_ship(5, 5, 4, 4), players(3), 2);
    let mut input = ScriptedInput::new([(0, 0), (0, 1), (0, 2)]);
    game.play_round(&mut input, &mut NullView).unwrap();
    assert_eq!(game.guesses_remaining(), 1);
    assert_eq!(game.rounds_played(), 1);
    assert_eq!(game.board().guesses().len(), 3);
    assert_eq!(game.status(), GameStatus::InProgress);
}

#[test]
fn exhausted_budget_has_no_winner() {
    let mut game = Game::new(board_with_ship(5, 5, 4, 4), players(2), 2);
    let mut input = ScriptedInput::new([(0, 0), (1, 1), (2, 2), (3, 3)]);
    let mut view = RecordingView::default();
    let outcome = game.play(&mut input, &mut view).unwrap();

    assert_eq!(outcome.winner, None);
    assert_eq!(outcome.rounds_played, 2);
    assert_eq!(outcome.guesses_remaining, 0);
    assert_eq!(view.events.last().map(String::as_str), Some("winner None"));
    assert!(!game.board().all_sunk());
}

#[test]
fn finished_as_soon_as_all_ships_sunk() {
    let mut board = Board::new(3, 3).unwrap();
    board.add_ship(0, 0).unwrap();
    board.add_ship(2, 2).unwrap();
    let mut game = Game::new(board, players(2), 10);
    let mut input = ScriptedInput::new([(0, 0), (2, 2)]);
    game.play_round(&mut input, &mut NullView).unwrap();

    assert!(game.is_finished());
    assert_eq!(game.guesses_remaining(), 9);
    assert_eq!(game.winner().map(|p| p.name()), Some("Player 2"));
}

#[test]
fn round_renders_after_each_guess() {
    let mut game = Game::new(board_with_ship(2, 2, 1, 0), players(1), 3);
    let mut input = ScriptedInput::new([(0, 0)]);
    let mut view = RecordingView::default();
    game.play_round(&mut input, &mut view).unwrap();

    assert_eq!(
        view.events,
        vec![
            "remaining 3".to_string(),
            "turn Player 1".to_string(),
            "O O\nX O\n".to_string(),
        ]
    );
}

#[test]
fn custom_markers_reach_the_view() {
    let markers = Markers {
        blank: '.',
        miss: 'o',
        ship: '#',
    };
    let mut game = Game::new(board_with_ship(1, 2, 0, 1), players(1), 3).with_markers(markers);
    let mut input = ScriptedInput::new([(0, 1)]);
    let mut view = RecordingView::default();
    game.play(&mut input, &mut view).unwrap();
    assert!(view.events.contains(&". #\n".to_string()));
}

#[test]
fn input_failure_is_propagated() {
    let mut game = Game::new(board_with_ship(5, 5, 3, 3), players(1), 5);
    let mut input = ScriptedInput::new([(0, 0)]);
    assert_eq!(
        game.play(&mut input, &mut NullView).unwrap_err(),
        InputError::Closed
    );
    assert_eq!(game.rounds_played(), 1);
}
