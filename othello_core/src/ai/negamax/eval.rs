use crate::engine::board::Board;
use crate::engine::types::{Color, Square};

/// 4隅のマス（行, 列）。
const CORNERS: [(u8, u8); 4] = [(0, 0), (0, 7), (7, 0), (7, 7)];

/// 盤端の行・列番号。
const EDGE_LINES: [u8; 2] = [0, 7];

/// 評価関数の重み。
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct EvalWeights {
    /// 隅1マスあたりの重み。
    pub corner: i32,
    /// 辺1マスあたりの重み（隅も辺として再度数える）。
    pub edge: i32,
    /// 合法手数の差1あたりの重み。
    pub mobility: i32,
}

impl EvalWeights {
    /// 既定の重み（隅 100、辺 10、モビリティ 1）。
    pub const DEFAULT: Self = Self {
        corner: 100,
        edge: 10,
        mobility: 1,
    };
}

impl Default for EvalWeights {
    #[inline]
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// 評価値の内訳（いずれも重み適用済み、黒視点）。
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct EvalTerms {
    /// 隅の項。
    pub corner: i32,
    /// 辺の項。
    pub edge: i32,
    /// モビリティの項。
    pub mobility: i32,
}

impl EvalTerms {
    /// 各項の合計を返す。
    #[inline]
    #[must_use]
    pub const fn total(self) -> i32 {
        self.corner
            .wrapping_add(self.edge)
            .wrapping_add(self.mobility)
    }
}

/// 静的評価（黒視点、正なら黒有利）。
#[inline]
#[must_use]
pub fn evaluate(board: &Board, weights: &EvalWeights) -> i32 {
    evaluate_terms(board, weights).total()
}

/// 静的評価の内訳を返す。
///
/// 辺の項は上下の行と左右の列を独立に数えるため、隅は辺として2回、隅として1回数えられる。
#[inline]
#[must_use]
pub fn evaluate_terms(board: &Board, weights: &EvalWeights) -> EvalTerms {
    let mut corner: i32 = 0;
    for (row, col) in CORNERS {
        corner = corner.wrapping_add(weights.corner.wrapping_mul(value_at(board, row, col)));
    }

    let mut edge: i32 = 0;
    for i in u8::MIN..Square::BOARD_LEN {
        for line in EDGE_LINES {
            edge = edge.wrapping_add(weights.edge.wrapping_mul(value_at(board, line, i)));
            edge = edge.wrapping_add(weights.edge.wrapping_mul(value_at(board, i, line)));
        }
    }

    let black_moves = len_i32(board.legal_moves(Color::Black).len());
    let white_moves = len_i32(board.legal_moves(Color::White).len());
    let mobility = weights
        .mobility
        .wrapping_mul(black_moves.wrapping_sub(white_moves));

    EvalTerms {
        corner,
        edge,
        mobility,
    }
}

/// 指定座標のマスの値（黒 1、白 -1、空き 0）。
fn value_at(board: &Board, row: u8, col: u8) -> i32 {
    Square::from_row_col(row, col).map_or(0, |square| board.cell(square).value())
}

/// 合法手数を `i32` に変換する。
fn len_i32(len: usize) -> i32 {
    i32::try_from(len).unwrap_or(i32::MAX)
}

#[cfg(test)]
mod tests {
    use super::{EvalTerms, EvalWeights, evaluate, evaluate_terms};
    use crate::engine::board::Board;

    fn board(text: &str) -> Board {
        text.parse::<Board>()
            .unwrap_or_else(|err| unreachable!("test board must parse: {err}"))
    }

    #[test]
    fn initial_position_is_balanced() {
        let terms = evaluate_terms(&Board::initial(), &EvalWeights::default());
        assert_eq!(terms, EvalTerms::default());
        assert_eq!(evaluate(&Board::initial(), &EvalWeights::default()), 0);
    }

    #[test]
    fn corner_counts_once_as_corner_and_twice_as_edge() {
        let board = board(
            "
            X . . . . . . .
            . . . . . . . .
            . . . . . . . .
            . . . . . . . .
            . . . . . . . .
            . . . . . . . .
            . . . . . . . .
            . . . . . . . .
            ",
        );
        let terms = evaluate_terms(&board, &EvalWeights::default());
        assert_eq!(terms.corner, 100);
        assert_eq!(terms.edge, 20);
        assert_eq!(terms.mobility, 0);
        assert_eq!(terms.total(), 120);
    }

    #[test]
    fn edge_and_mobility_terms() {
        // 白の辺石1つ（-10）。合法手数は初期局面と変わらない。
        let board = board(
            "
            . . . O . . . .
            . . . . . . . .
            . . . . . . . .
            . . . O X . . .
            . . . X O . . .
            . . . . . . . .
            . . . . . . . .
            . . . . . . . .
            ",
        );
        let terms = evaluate_terms(&board, &EvalWeights::default());
        assert_eq!(terms.corner, 0);
        assert_eq!(terms.edge, -10);
        assert_eq!(terms.mobility, 0);
        assert_eq!(evaluate(&board, &EvalWeights::default()), -10);
    }

    #[test]
    fn evaluation_is_pure() {
        let board = board(
            "
            X O . . . . . O
            . O X . . . . .
            . . O X . . . .
            . . . O X . . .
            . . . X O X . .
            . . . . . . . .
            . . . . . . . .
            X . . . . . . .
            ",
        );
        let before = board;
        let first = evaluate(&board, &EvalWeights::default());
        let second = evaluate(&board, &EvalWeights::default());
        assert_eq!(first, second);
        assert_eq!(board, before);
    }

    #[test]
    fn inverting_colours_negates_every_term() {
        let board = board(
            "
            X O . . . . . O
            . O X . . . . .
            . . O X . . . .
            . . . O X . . .
            . . . X O X . .
            . . . . . . . .
            . . . . . . . .
            X . . . . . . .
            ",
        );
        let weights = EvalWeights::default();
        let terms = evaluate_terms(&board, &weights);
        let inverted = evaluate_terms(&board.inverted(), &weights);

        assert_eq!(inverted.corner, -terms.corner);
        assert_eq!(inverted.edge, -terms.edge);
        assert_eq!(inverted.mobility, -terms.mobility);
        assert_eq!(inverted.total(), -terms.total());
    }

    #[test]
    fn custom_weights_scale_terms() {
        let weights = EvalWeights {
            corner: 1,
            edge: 0,
            mobility: 0,
        };
        let board = board(
            "
            X . . . . . . O
            . . . . . . . .
            . . . . . . . .
            . . . . . . . .
            . . . . . . . .
            . . . . . . . .
            . . . . . . . .
            X . . . . . . X
            ",
        );
        assert_eq!(evaluate(&board, &weights), 2);
    }
}
