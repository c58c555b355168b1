//! 結合テスト: ランダムな対局中の任意局面で盤面ルールの不変条件が成り立つことを確認する。

use othello_core::engine::{Board, Color, Square};
use proptest::prelude::*;

/// `choices` に従って合法手を選びながら進めた局面の列を返す（手番付き）。
fn playout(choices: &[usize]) -> Vec<(Board, Color)> {
    let mut board = Board::initial();
    let mut color = Color::Black;
    let mut positions = vec![(board, color)];

    for &choice in choices {
        if board.is_game_over() {
            break;
        }
        let moves = board.legal_moves(color);
        if let Some(&square) = moves.get(choice % moves.len().max(1)) {
            if board.apply_move(square, color).is_err() {
                break;
            }
        }
        color = color.opponent();
        positions.push((board, color));
    }

    positions
}

proptest! {
    #[test]
    fn legal_moves_agree_with_is_legal_move(choices in prop::collection::vec(0_usize..64, 0..60)) {
        for (board, _) in playout(&choices) {
            for color in [Color::Black, Color::White] {
                let moves = board.legal_moves(color);
                let expected: Vec<Square> = Square::all()
                    .filter(|&square| board.is_legal_move(square, color))
                    .collect();
                prop_assert_eq!(&moves, &expected);
                prop_assert_eq!(board.has_legal_move(color), !moves.is_empty());
            }
        }
    }

    #[test]
    fn applying_a_legal_move_grows_the_mover(choices in prop::collection::vec(0_usize..64, 0..60)) {
        for (board, color) in playout(&choices) {
            for square in board.legal_moves(color) {
                let mut next = board;
                let flips = next.apply_move(square, color);
                prop_assert!(flips.is_ok());
                let flipped = flips.map(|value| value.flipped().len()).unwrap_or_default();
                let flipped = u32::try_from(flipped).unwrap_or(u32::MAX);

                prop_assert!(flipped >= 1);
                prop_assert_eq!(next.count(color), board.count(color) + 1 + flipped);
                prop_assert_eq!(
                    next.count(color.opponent()),
                    board.count(color.opponent()) - flipped
                );
                let (black, white) = next.counts();
                let (black_before, white_before) = board.counts();
                prop_assert_eq!(black + white, black_before + white_before + 1);
            }
        }
    }

    #[test]
    fn undo_and_snapshot_restore_the_board(choices in prop::collection::vec(0_usize..64, 0..60)) {
        for (board, color) in playout(&choices) {
            let snapshot = board;
            let mut working = board;
            for square in snapshot.legal_moves(color) {
                let flips = working.apply_move(square, color);
                prop_assert!(flips.is_ok());
                if let Ok(flips) = flips {
                    working.undo(&flips);
                }
                prop_assert_eq!(working, snapshot);
            }
        }
    }

    #[test]
    fn game_over_means_nobody_can_move(choices in prop::collection::vec(0_usize..64, 0..80)) {
        if let Some((board, _)) = playout(&choices).last() {
            let nobody_moves = board.legal_moves(Color::Black).is_empty()
                && board.legal_moves(Color::White).is_empty();
            prop_assert_eq!(board.is_game_over(), nobody_moves);
        }
    }
}
