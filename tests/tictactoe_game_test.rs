//! End-to-end game scenarios through the reducer.

use timeline_tictactoe::{
    Game, GameAction, GameView, MoveRejected, Player, Status, apply_move, calculate_turns,
    calculate_winner,
};

fn play(cells: &[usize]) -> Game {
    cells
        .iter()
        .fold(Game::new(), |game, &cell| game.reduce(GameAction::Click(cell)))
}

#[test]
fn test_diagonal_win() {
    let game = play(&[0, 1, 4, 2, 8]);
    assert_eq!(calculate_winner(game.board()), Some(Player::X));
    assert_eq!(game.status().to_string(), "Winner is X");
}

#[test]
fn test_draw() {
    // X O X / X O O / O X X
    let game = play(&[0, 1, 2, 4, 3, 5, 7, 6, 8]);
    assert_eq!(game.history().len(), 10);
    assert_eq!(calculate_winner(game.board()), None);
    assert_eq!(calculate_turns(game.board()), 0);
    assert_eq!(game.status(), Status::Draw);
    assert_eq!(game.status().to_string(), "Draw");
}

#[test]
fn test_no_moves_after_win() {
    let won = play(&[0, 1, 4, 2, 8]);
    let after = won.clone().reduce(GameAction::Click(5));
    assert_eq!(won, after);
    assert_eq!(
        apply_move(won.board(), 5, won.current_player()),
        Err(MoveRejected::GameOver)
    );
}

#[test]
fn test_terminal_state_still_navigable() {
    let won = play(&[0, 1, 4, 2, 8]);
    let rewound = won.reduce(GameAction::JumpTo(4));
    assert_eq!(rewound.status(), Status::NextPlayer(Player::X));

    // A different fifth move replaces the winning one.
    let branched = rewound.reduce(GameAction::Click(6));
    assert_eq!(branched.history().len(), 6);
    assert_eq!(branched.status(), Status::NextPlayer(Player::O));
}

#[test]
fn test_view_serializes() {
    let view = play(&[4]).view();
    let json = serde_json::to_string(&view).expect("serialize");
    let back: GameView = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(back, view);
    assert_eq!(back.status, Status::NextPlayer(Player::O));
    assert_eq!(back.entries.len(), 2);
}

#[test]
fn test_textual_actions_drive_game() {
    let actions: Vec<GameAction> = ["0", "1", "4", "jump:1", "8", "reset", "2"]
        .iter()
        .map(|s| s.parse().expect("valid action"))
        .collect();
    let game = actions
        .into_iter()
        .fold(Game::new(), |game, action| game.reduce(action));
    assert_eq!(game.history().len(), 2);
    assert_eq!(game.status().to_string(), "Next player: O");
}
