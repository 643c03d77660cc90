//! Whole-game scenarios through the public `Game` API

use renju::{CellStatus, Color, EndPolicy, EngineConfig, Game, Pos, RuleSet, Snapshot, WinReason};

fn moves(list: &[(i32, i32)]) -> Vec<Pos> {
    list.iter().map(|&(x, y)| Pos::new(x, y)).collect()
}

/// Ten moves, no result, with black stones in the middle of the board
const TEN_MOVES: [(i32, i32); 10] = [
    (7, 7),
    (8, 8),
    (6, 8),
    (8, 6),
    (9, 9),
    (5, 5),
    (10, 3),
    (1, 13),
    (3, 10),
    (13, 1),
];

/// Black sets up `_ B _ B _` in both directions around (7,7)
const DOUBLE_THREE: [(i32, i32); 8] = [
    (6, 7),
    (0, 14),
    (8, 7),
    (2, 14),
    (7, 6),
    (4, 14),
    (7, 8),
    (6, 14),
];

fn assert_alternating(snap: &Snapshot) {
    for (i, pos) in snap.history.iter().enumerate() {
        let cell = snap.board.cell(*pos).unwrap();
        let expected = Color::for_move(i as u32 + 1);
        assert_eq!(cell.status, expected.status(), "move {} at {}", i + 1, pos);
        assert_eq!(cell.counter, i as i32 + 1);
    }
}

#[test]
fn colors_alternate_from_black() {
    let mut game = Game::default();
    let snap = game.apply_moves(&moves(&TEN_MOVES));
    assert_eq!(snap.counter, 10);
    assert_eq!(snap.board.stone_count(), 10);
    assert_alternating(snap);
}

#[test]
fn black_five_along_top_edge() {
    let mut game = Game::default();
    let replies = [(0, 6), (3, 9), (8, 12), (12, 4)];
    for x in 0..4 {
        let snap = game.apply_move(Pos::new(x, 0));
        assert!(!snap.is_end());
        let (rx, ry) = replies[x as usize];
        game.apply_move(Pos::new(rx, ry));
    }

    let snap = game.apply_move(Pos::new(4, 0));
    assert_eq!(snap.winner(), Some(Color::Black));
    assert_eq!(snap.win_reason(), Some(WinReason::FiveInRow));
    assert_eq!(snap.board.forbidden_count(), 0);
}

#[test]
fn five_detected_regardless_of_order() {
    // the fifth stone lands in the middle of the line
    let mut game = Game::default();
    let snap = game.apply_moves(&moves(&[
        (3, 3),
        (0, 10),
        (4, 4),
        (2, 10),
        (6, 6),
        (4, 10),
        (7, 7),
        (6, 10),
        (5, 5),
    ]));
    assert_eq!(snap.winner(), Some(Color::Black));
}

#[test]
fn forbidden_marks_appear_only_while_black_to_move() {
    let mut game = Game::default();
    let snap = game.apply_moves(&moves(&DOUBLE_THREE));
    assert_eq!(snap.next_color(), Color::Black);
    assert!(snap.forbidden_cells().contains(&Pos::new(7, 7)));
    for pos in snap.forbidden_cells() {
        assert_eq!(snap.board.cell(pos).unwrap().counter, -1);
    }

    let snap = game.apply_move(Pos::new(12, 12));
    assert!(snap.forbidden_cells().is_empty());
    assert_eq!(snap.next_color(), Color::White);
}

#[test]
fn black_on_forbidden_cell_loses() {
    let mut game = Game::default();
    game.apply_moves(&moves(&DOUBLE_THREE));
    let snap = game.apply_move(Pos::new(7, 7));

    assert_eq!(snap.winner(), Some(Color::White));
    assert_eq!(snap.win_reason(), Some(WinReason::ForbiddenCapture));
    assert!(snap.forbidden_cells().is_empty());
    assert_eq!(snap.board.status(Pos::new(7, 7)), CellStatus::Blank);
    assert_eq!(snap.last_move(), Some(Pos::new(7, 7)));
}

#[test]
fn double_four_on_a_diagonal_and_column() {
    // black (1,1),(2,2),(3,3) and (4,1),(4,2),(4,3): (4,4) makes two fours
    let mut game = Game::default();
    let snap = game.apply_moves(&moves(&[
        (1, 1),
        (14, 0),
        (2, 2),
        (14, 2),
        (3, 3),
        (14, 4),
        (4, 1),
        (14, 6),
        (4, 2),
        (14, 8),
        (4, 3),
        (14, 10),
    ]));
    assert!(!snap.is_end());
    assert_eq!(snap.board.status(Pos::new(4, 4)), CellStatus::Forbidden);
}

#[test]
fn white_is_never_restricted() {
    // white builds the same double three black would be forbidden to make
    let mut game = Game::default();
    let snap = game.apply_moves(&moves(&[
        (0, 14),
        (6, 7),
        (2, 14),
        (8, 7),
        (4, 14),
        (7, 6),
        (6, 14),
        (7, 8),
        (14, 0),
        (7, 7),
    ]));
    assert!(!snap.is_end());
    assert_eq!(snap.board.status(Pos::new(7, 7)), CellStatus::White);
}

#[test]
fn strict_game_rejects_moves_after_end() {
    let mut game = Game::default();
    game.apply_moves(&moves(&DOUBLE_THREE));
    let ended = game.apply_move(Pos::new(7, 7)).clone();

    let snap = game.apply_move(Pos::new(10, 10));
    assert_eq!(snap, &ended);
}

#[test]
fn record_after_end_keeps_result() {
    let mut game = Game::new(EngineConfig::new(EndPolicy::RecordAfterEnd, RuleSet::V2));
    game.apply_moves(&moves(&DOUBLE_THREE));
    game.apply_move(Pos::new(7, 7));

    let snap = game.apply_move(Pos::new(10, 10));
    assert_eq!(snap.board.status(Pos::new(10, 10)), CellStatus::Black);
    assert_eq!(snap.win_reason(), Some(WinReason::ForbiddenCapture));
    assert_eq!(snap.history.len(), DOUBLE_THREE.len() + 2);
}

#[test]
fn undo_then_redo_restores_snapshot() {
    let mut game = Game::default();
    game.apply_moves(&moves(&DOUBLE_THREE));
    game.apply_move(Pos::new(7, 7));
    let tip = game.current().clone();

    game.undo();
    assert!(!game.current().is_end());
    assert_eq!(game.current().board.status(Pos::new(7, 7)), CellStatus::Forbidden);

    assert_eq!(game.redo(), &tip);
}

#[test]
fn undo_all_then_redo_all_from_move_ten() {
    let mut game = Game::default();
    game.apply_moves(&moves(&TEN_MOVES));
    let at_ten = game.current().clone();

    assert_eq!(game.undo_all(), &Snapshot::new());
    assert_eq!(game.redo_all(), &at_ten);
}

#[test]
fn new_move_after_undo_discards_redo() {
    let mut game = Game::default();
    game.apply_moves(&moves(&TEN_MOVES));
    game.undo();
    game.undo();
    game.apply_move(Pos::new(0, 0));

    assert!(!game.history().can_redo());
    let before = game.current().clone();
    assert_eq!(game.redo(), &before);
}

#[test]
fn clear_resets_everything() {
    let mut game = Game::default();
    game.apply_moves(&moves(&TEN_MOVES));
    game.undo();
    let snap = game.clear().clone();

    assert_eq!(snap, Snapshot::new());
    assert!(!game.history().can_undo());
    assert!(!game.history().can_redo());
}

#[test]
fn record_roundtrip_reproduces_snapshot() {
    let mut game = Game::default();
    game.apply_moves(&moves(&DOUBLE_THREE));
    game.apply_move(Pos::new(7, 7));
    let original = game.current().clone();
    let text = game.serialize_history().unwrap();

    let mut other = Game::default();
    other.apply_move(Pos::new(3, 3));
    let restored = other.restore_from_history(&text).unwrap();
    assert_eq!(restored, &original);
}

#[test]
fn restore_skips_illegal_moves_and_continues() {
    let mut game = Game::default();
    let snap = game
        .restore_from_history(r#"[{"x":7,"y":7},{"x":7,"y":7},{"x":8,"y":8},{"x":9,"y":9}]"#)
        .unwrap();
    assert_eq!(snap.counter, 3);
    assert_eq!(snap.board.status(Pos::new(8, 8)), CellStatus::White);
    assert_eq!(snap.board.status(Pos::new(9, 9)), CellStatus::Black);
}
