//! Tests for the tic-tac-toe turn engine.

use strictly_tictactoe::{
    Board, GameState, GameStatus, Move, MoveError, Position, Square, TicTacToePlayer as Player,
    check_winner, is_draw,
};

/// Plays 1-based square numbers the way the console does.
fn play_squares(game: &mut GameState, squares: &[usize]) -> GameStatus {
    let mut status = *game.status();
    for square in squares {
        status = game.play(square - 1).expect("Valid move");
    }
    status
}

#[test]
fn test_apply_move_touches_only_target() {
    let mut setup = GameState::new();
    play_squares(&mut setup, &[5, 1]);

    for index in 0..9 {
        let mut game = setup.clone();
        let before = game.board().clone();
        let player = game.current_player();
        let position = Position::from_index(index).unwrap();

        let result = game.apply_move(index);
        if before.is_empty(position) {
            assert_eq!(result, Ok(Move::new(player, position)));
            for other in Position::ALL {
                let expected = if other == position {
                    Square::Occupied(player)
                } else {
                    before.get(other)
                };
                assert_eq!(game.board().get(other), expected);
            }
        } else {
            assert_eq!(result, Err(MoveError::CellOccupied(position)));
            assert_eq!(game.board(), &before);
        }
    }
}

#[test]
fn test_switch_player_is_involution() {
    let mut game = GameState::new();
    game.switch_player();
    assert_eq!(game.current_player(), Player::O);
    game.switch_player();
    assert_eq!(game.current_player(), Player::X);
}

#[test]
fn test_top_row_win() {
    let mut game = GameState::new();
    assert_eq!(
        play_squares(&mut game, &[1, 5, 2, 8]),
        GameStatus::InProgress
    );
    assert_eq!(check_winner(game.board()), None);

    assert_eq!(play_squares(&mut game, &[3]), GameStatus::Won(Player::X));
    assert_eq!(check_winner(game.board()), Some(Player::X));
    assert!(game.is_over());
}

#[test]
fn test_full_board_draw() {
    let mut game = GameState::new();
    let status = play_squares(&mut game, &[1, 5, 3, 2, 4, 6, 8, 7, 9]);

    assert_eq!(status, GameStatus::Draw);
    assert_eq!(check_winner(game.board()), None);
    assert!(is_draw(game.board()));
    assert_eq!(game.history().len(), 9);
}

#[test]
fn test_occupied_square_rejected() {
    let mut game = GameState::new();
    game.play(0).unwrap();
    let board = game.board().clone();
    assert_eq!(game.current_player(), Player::O);

    assert_eq!(
        game.apply_move(0),
        Err(MoveError::CellOccupied(Position::TopLeft))
    );
    assert_eq!(game.board(), &board);
    assert_eq!(game.current_player(), Player::O);
    assert_eq!(game.history().len(), 1);
}

#[test]
fn test_players_alternate_in_history() {
    let mut game = GameState::new();
    play_squares(&mut game, &[5, 1, 9, 3]);

    let players: Vec<Player> = game.history().iter().map(|m| m.player).collect();
    assert_eq!(players, vec![Player::X, Player::O, Player::X, Player::O]);
    assert_eq!(game.current_player(), Player::X);
}

#[test]
fn test_game_record_serializes() {
    let mut game = GameState::new();
    play_squares(&mut game, &[5]);

    let json = serde_json::to_value(&game).unwrap();
    assert_eq!(json["current_player"], "O");
    assert_eq!(json["status"], "InProgress");
    assert_eq!(json["history"][0]["position"], "Center");
    assert_ne!(game.board(), &Board::new());
}
