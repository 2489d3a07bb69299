//! Tests for the game state machine across board sizes.

use strictly_grid::games::tictactoe::{
    Direction, MAX_BOARD_SIZE, MIN_BOARD_SIZE, RandomStarter, ScriptedStarter, evaluate,
};
use strictly_grid::{Board, GameState, Mark, Outcome, Phase, Square};
use strum::IntoEnumIterator;

fn game(size: usize, human: Mark, opener: Mark) -> GameState {
    GameState::with_starter(size, human, Box::new(ScriptedStarter::always(opener))).unwrap()
}

/// Full board with no three-in-a-row: columns follow XXOO, odd rows shifted by two.
fn drawn_board(size: usize) -> Board {
    let mut board = Board::new(size).unwrap();
    for row in 0..size {
        for col in 0..size {
            let mark = if (col + 2 * (row % 2)) % 4 < 2 {
                Mark::X
            } else {
                Mark::O
            };
            board
                .set(row * size + col, Square::Occupied(mark))
                .unwrap();
        }
    }
    board
}

#[test]
fn test_all_eight_lines_on_3x3_detected() {
    let lines: Vec<[usize; 3]> = Direction::iter().flat_map(|d| d.windows(3)).collect();
    assert_eq!(lines.len(), 8);

    for line in lines {
        let mut board = Board::new(3).unwrap();
        for index in line {
            board.set(index, Square::Occupied(Mark::O)).unwrap();
        }
        assert_eq!(evaluate(&board), Outcome::Winner(Mark::O), "line {:?}", line);
    }
}

#[test]
fn test_every_window_wins_on_every_size() {
    for size in MIN_BOARD_SIZE..=MAX_BOARD_SIZE {
        for direction in Direction::iter() {
            for line in direction.windows(size) {
                let mut board = Board::new(size).unwrap();
                for index in line {
                    board.set(index, Square::Occupied(Mark::X)).unwrap();
                }
                assert_eq!(
                    evaluate(&board),
                    Outcome::Winner(Mark::X),
                    "size {} {} {:?}",
                    size,
                    direction,
                    line
                );
            }
        }
    }
}

#[test]
fn test_full_board_without_line_is_tie_on_every_size() {
    for size in MIN_BOARD_SIZE..=MAX_BOARD_SIZE {
        assert_eq!(evaluate(&drawn_board(size)), Outcome::Tie, "size {}", size);
    }
}

#[test]
fn test_open_board_without_line_is_undecided() {
    for size in MIN_BOARD_SIZE..=MAX_BOARD_SIZE {
        let mut board = drawn_board(size);
        board.set(0, Square::Empty).unwrap();
        assert_eq!(evaluate(&board), Outcome::Undecided, "size {}", size);
    }
}

#[test]
fn test_two_in_a_row_is_not_a_win_on_large_board() {
    let board: Board = "XX______ ________ ________ ________ ________ ________ ________ ________"
        .parse()
        .unwrap();
    assert_eq!(evaluate(&board), Outcome::Undecided);
}

#[test]
fn test_opener_from_starter() {
    assert_eq!(game(3, Mark::X, Mark::X).current_player(), Mark::X);
    assert_eq!(game(3, Mark::X, Mark::O).current_player(), Mark::O);
}

#[test]
fn test_seeded_random_starter_is_repeatable() {
    let a = GameState::with_starter(3, Mark::X, Box::new(RandomStarter::from_seed(7))).unwrap();
    let b = GameState::with_starter(3, Mark::X, Box::new(RandomStarter::from_seed(7))).unwrap();
    assert_eq!(a.current_player(), b.current_player());
}

#[test]
fn test_invalid_size_rejected() {
    assert!(GameState::new(2, Mark::X).is_err());
    assert!(GameState::new(9, Mark::X).is_err());
    assert!(GameState::new(8, Mark::X).is_ok());
}

#[test]
fn test_turns_alternate() {
    let mut game = game(4, Mark::X, Mark::X);
    assert_eq!(game.apply_move(0), Some(Outcome::Undecided));
    assert_eq!(game.current_player(), Mark::O);
    assert_eq!(game.apply_move(15), Some(Outcome::Undecided));
    assert_eq!(game.current_player(), Mark::X);
}

#[test]
fn test_illegal_moves_are_no_ops() {
    let mut game = game(3, Mark::X, Mark::X);
    game.apply_move(4);
    let before = game.board().clone();

    // Occupied
    assert_eq!(game.apply_move(4), None);
    // Off the board
    assert_eq!(game.apply_move(9), None);
    assert_eq!(game.apply_move(usize::MAX), None);

    assert_eq!(game.board(), &before);
    assert_eq!(game.current_player(), Mark::O);
}

#[test]
fn test_win_scores_once_and_freezes_board() {
    let mut game = game(3, Mark::X, Mark::X);
    for index in [0, 3, 1, 4] {
        assert_eq!(game.apply_move(index), Some(Outcome::Undecided));
    }
    assert_eq!(game.apply_move(2), Some(Outcome::Winner(Mark::X)));
    assert_eq!(game.phase(), Phase::Won(Mark::X));
    assert_eq!(game.scores().human_wins(), 1);
    assert_eq!(game.scores().ai_wins(), 0);

    let frozen = game.board().clone();
    assert_eq!(game.apply_move(8), None);
    assert_eq!(game.board(), &frozen);
    assert_eq!(game.scores().total(), 1);
}

#[test]
fn test_ai_win_counted_for_ai() {
    let mut game = game(3, Mark::O, Mark::X);
    for index in [0, 3, 1, 4, 2] {
        game.apply_move(index);
    }
    assert_eq!(game.winner(), Some(Outcome::Winner(Mark::X)));
    assert_eq!(game.scores().ai_wins(), 1);
    assert_eq!(game.scores().human_wins(), 0);
}

#[test]
fn test_tie_scored() {
    let mut game = game(3, Mark::X, Mark::X);
    for index in [0, 1, 2, 4, 3, 5, 7, 6] {
        assert_eq!(game.apply_move(index), Some(Outcome::Undecided));
    }
    assert_eq!(game.apply_move(8), Some(Outcome::Tie));
    assert_eq!(game.phase(), Phase::Tied);
    assert_eq!(game.scores().ties(), 1);
}

#[test]
fn test_reset_keeps_scores_and_counts_games() {
    let mut game = GameState::with_starter(
        3,
        Mark::X,
        Box::new(ScriptedStarter::new([Mark::X, Mark::O])),
    )
    .unwrap();
    for index in [0, 3, 1, 4, 2] {
        game.apply_move(index);
    }
    game.reset();

    assert!(game.is_in_progress());
    assert!(game.board().is_blank());
    assert_eq!(game.current_player(), Mark::O);
    assert_eq!(game.scores().human_wins(), 1);
    assert_eq!(game.game_count(), 2);

    game.reset_scores();
    assert_eq!(game.scores().total(), 0);
    assert_eq!(game.game_count(), 1);
}

#[test]
fn test_resize_preserves_overlap() {
    let mut game = game(3, Mark::X, Mark::X);
    game.apply_move(0);
    game.apply_move(8);
    game.set_board_size(5).unwrap();

    let board = game.board();
    assert_eq!(board.size(), 5);
    assert_eq!(board.get(0), Some(Square::Occupied(Mark::X)));
    // (2, 2) moves from index 8 to 12.
    assert_eq!(board.get(12), Some(Square::Occupied(Mark::O)));
    assert_eq!(board.empty_positions().len(), 23);
    assert_eq!(game.current_player(), Mark::X);
}

#[test]
fn test_shrink_drops_outside_marks_and_keeps_phase() {
    let mut game = game(5, Mark::X, Mark::X);
    game.apply_move(24);
    game.apply_move(6);
    game.set_board_size(3).unwrap();

    assert_eq!(game.board().get(4), Some(Square::Occupied(Mark::O)));
    assert_eq!(game.board().empty_positions().len(), 8);
    assert!(game.is_in_progress());
}

#[test]
fn test_resize_out_of_range_rejected() {
    let mut game = game(3, Mark::X, Mark::X);
    assert!(game.set_board_size(2).is_err());
    assert!(game.set_board_size(9).is_err());
    assert_eq!(game.board().size(), 3);
}
