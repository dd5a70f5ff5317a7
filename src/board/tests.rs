use super::*;
use crate::error::GameError;

#[test]
fn test_tile_opponent() {
    assert_eq!(TileState::Black.opponent(), TileState::White);
    assert_eq!(TileState::White.opponent(), TileState::Black);
    assert_eq!(TileState::Empty.opponent(), TileState::Empty);
}

#[test]
fn test_player_tile_mapping() {
    assert_eq!(Player::White.tile(), TileState::White);
    assert_eq!(Player::Black.tile(), TileState::Black);
    assert_eq!(TileState::White.player(), Some(Player::White));
    assert_eq!(TileState::Empty.player(), None);
    assert_eq!(Player::White.opponent(), Player::Black);
    assert!(Player::White.is_maximizing());
    assert!(!Player::Black.is_maximizing());
}

#[test]
fn test_coords_conversion() {
    let pos = Coords::new(7, 7); // Center
    assert_eq!(pos.to_index(15), 112);
    assert_eq!(Coords::from_index(112, 15), pos);
    assert_eq!(Coords::from_index(224, 15), Coords::new(14, 14));
}

#[test]
fn test_coords_ordering() {
    let pos1 = Coords::new(0, 0);
    let pos2 = Coords::new(0, 1);
    let pos3 = Coords::new(1, 0);

    assert!(pos1 < pos2);
    assert!(pos2 < pos3);
    assert!(pos1 < pos3);
}

#[test]
fn test_board_constants() {
    let board = Board::new();
    assert_eq!(board.size(), DEFAULT_BOARD_SIZE);
    assert_eq!(board.cell_count(), 225);
    assert_eq!(board.center(), Coords::new(7, 7));
}

#[test]
fn test_with_size_bounds() {
    assert!(Board::with_size(5).is_ok());
    assert!(Board::with_size(MAX_BOARD_SIZE).is_ok());
    assert!(matches!(Board::with_size(0), Err(GameError::InvalidBoardSize(0))));
    assert!(matches!(
        Board::with_size(MAX_BOARD_SIZE + 1),
        Err(GameError::InvalidBoardSize(_))
    ));
}

#[test]
fn test_get_set() {
    let mut board = Board::new();
    let pos = Coords::new(3, 4);

    assert_eq!(board.get(pos).unwrap(), TileState::Empty);
    board.set(pos, TileState::Black).unwrap();
    assert_eq!(board.get(pos).unwrap(), TileState::Black);
    assert_eq!(board.stone_count(), 1);
    assert!(!board.is_board_empty());
}

#[test]
fn test_get_out_of_range() {
    let board = Board::new();
    let result = board.get(Coords::new(15, 0));
    assert!(matches!(
        result,
        Err(GameError::OutOfRange { row: 15, col: 0, size: 15 })
    ));
}

#[test]
fn test_set_out_of_range() {
    let mut board = Board::with_size(5).unwrap();
    let result = board.set(Coords::new(0, 5), TileState::White);
    assert!(matches!(result, Err(GameError::OutOfRange { .. })));
    assert!(board.is_board_empty());
}

#[test]
fn test_set_occupied_is_invalid() {
    let mut board = Board::new();
    let pos = Coords::new(7, 7);
    board.set(pos, TileState::White).unwrap();

    let result = board.set(pos, TileState::Black);
    assert!(matches!(result, Err(GameError::InvalidMove(p)) if p == pos));
    assert_eq!(board.get(pos).unwrap(), TileState::White, "Occupied cell must not change");
}

#[test]
fn test_set_empty_is_invalid() {
    let mut board = Board::new();
    let result = board.set(Coords::new(1, 1), TileState::Empty);
    assert!(matches!(result, Err(GameError::InvalidMove(_))));
}

#[test]
fn test_signed_coords() {
    let board = Board::new();
    assert!(board.contains(0, 0));
    assert!(board.contains(14, 14));
    assert!(!board.contains(-1, 0));
    assert!(!board.contains(0, -1));
    assert!(!board.contains(15, 0));
    assert_eq!(board.coords(2, 3).unwrap(), Coords::new(2, 3));
    assert!(matches!(
        board.coords(0, -1),
        Err(GameError::OutOfRange { row: 0, col: -1, .. })
    ));
    assert_eq!(board.tile(-1, 0), None);
    assert_eq!(board.tile(0, 0), Some(TileState::Empty));
}

#[test]
fn test_clone_independence() {
    let mut original = Board::new();
    original.set(Coords::new(7, 7), TileState::White).unwrap();

    let mut copy = original.clone();
    copy.set(Coords::new(7, 8), TileState::Black).unwrap();

    assert_eq!(original.get(Coords::new(7, 8)).unwrap(), TileState::Empty);
    assert_eq!(original.stone_count(), 1);
    assert_eq!(copy.stone_count(), 2);
}

#[test]
fn test_clone_independence_every_cell() {
    let mut original = Board::with_size(5).unwrap();
    original.set(Coords::new(2, 2), TileState::Black).unwrap();
    let snapshot = original.clone();

    for pos in original.available_moves() {
        for tile in [TileState::White, TileState::Black] {
            let mut copy = original.clone();
            copy.set(pos, tile).unwrap();
            assert_eq!(original, snapshot, "Writing to a clone changed the original");
        }
    }
}

#[test]
fn test_available_moves_row_major() {
    let mut board = Board::with_size(3).unwrap();
    board.set(Coords::new(0, 1), TileState::White).unwrap();
    board.set(Coords::new(2, 2), TileState::Black).unwrap();

    let moves = board.available_moves();
    assert_eq!(
        moves,
        vec![
            Coords::new(0, 0),
            Coords::new(0, 2),
            Coords::new(1, 0),
            Coords::new(1, 1),
            Coords::new(1, 2),
            Coords::new(2, 0),
            Coords::new(2, 1),
        ]
    );
}

#[test]
fn test_available_moves_full_board() {
    let mut board = Board::with_size(2).unwrap();
    for (i, pos) in board.available_moves().into_iter().enumerate() {
        let tile = if i % 2 == 0 { TileState::White } else { TileState::Black };
        board.set(pos, tile).unwrap();
    }
    assert!(board.is_full());
    assert!(board.available_moves().is_empty());
}

#[test]
fn test_stones_iterates_one_color() {
    let mut board = Board::new();
    board.set(Coords::new(9, 1), TileState::White).unwrap();
    board.set(Coords::new(0, 4), TileState::White).unwrap();
    board.set(Coords::new(5, 5), TileState::Black).unwrap();

    let white: Vec<Coords> = board.stones(TileState::White).collect();
    assert_eq!(white, vec![Coords::new(0, 4), Coords::new(9, 1)]);
    assert_eq!(board.stones(TileState::Empty).count(), 0);
}

#[test]
fn test_swapped_colors() {
    let mut board = Board::new();
    board.set(Coords::new(1, 1), TileState::White).unwrap();
    board.set(Coords::new(2, 2), TileState::Black).unwrap();

    let swapped = board.swapped_colors();
    assert_eq!(swapped.get(Coords::new(1, 1)).unwrap(), TileState::Black);
    assert_eq!(swapped.get(Coords::new(2, 2)).unwrap(), TileState::White);
    assert_eq!(swapped.swapped_colors(), board);
}

#[test]
fn test_display_marks_stones() {
    let mut board = Board::with_size(3).unwrap();
    board.set(Coords::new(0, 0), TileState::White).unwrap();
    board.set(Coords::new(1, 2), TileState::Black).unwrap();

    let text = board.to_string();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 4);
    assert!(lines[1].ends_with("O  .  ."));
    assert!(lines[2].ends_with(".  .  X"));
}
