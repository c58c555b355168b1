use crate::engine::board::Board;
use crate::engine::types::{Color, Square};

use super::config::{SearchContext, SearchStats};
use super::eval::evaluate;

/// 探索結果。
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct SearchResult {
    /// 選択した最善手（深さ0・パス・終局では `None`）。
    best_move: Option<Square>,
    /// 手番視点の評価値。
    score: i32,
    /// 探索統計。
    stats: SearchStats,
}

impl SearchResult {
    /// 選択した最善手を返す。
    #[inline]
    #[must_use]
    pub const fn best_move(&self) -> Option<Square> {
        self.best_move
    }

    /// 手番視点の評価値を返す。
    #[inline]
    #[must_use]
    pub const fn score(&self) -> i32 {
        self.score
    }

    /// 探索統計を返す。
    #[inline]
    #[must_use]
    pub const fn stats(&self) -> SearchStats {
        self.stats
    }
}

/// 盤面の複製上で探索し、結果をまとめて返す。
pub(super) fn search_root(
    board: &Board,
    depth: u8,
    alpha: i32,
    beta: i32,
    color: Color,
    ctx: &mut SearchContext<'_>,
) -> SearchResult {
    let mut scratch = *board;
    let (score, best_move) = negamax(&mut scratch, depth, alpha, beta, color, ctx);
    debug_assert_eq!(scratch, *board, "search must leave the board as it found it");

    SearchResult {
        best_move,
        score,
        stats: ctx.stats(),
    }
}

/// 手番視点の静的評価。
fn leaf_score(board: &Board, color: Color, ctx: &mut SearchContext<'_>) -> i32 {
    ctx.stats_mut().inc_leaves();
    evaluate(board, ctx.weights()).wrapping_mul(color.sign())
}

/// ネガマックス（αβ付き）。
///
/// 各手は `board` 上で着手してから再帰し、戻る前に取り消す。
/// 返り値は `color` 視点の評価値と、その値を最初に達成した手。
pub(super) fn negamax(
    board: &mut Board,
    depth: u8,
    mut alpha: i32,
    beta: i32,
    color: Color,
    ctx: &mut SearchContext<'_>,
) -> (i32, Option<Square>) {
    ctx.stats_mut().inc_nodes();

    if depth == u8::MIN {
        return (leaf_score(board, color, ctx), None);
    }

    let opponent = color.opponent();
    let next_depth = depth.wrapping_sub(1);
    let moves = board.legal_moves(color);

    if moves.is_empty() {
        if !board.has_legal_move(opponent) {
            return (leaf_score(board, color, ctx), None);
        }

        // パスは1 ply を消費するが、呼び出し側に返す手は無い。
        let (score, _) = negamax(
            board,
            next_depth,
            beta.wrapping_neg(),
            alpha.wrapping_neg(),
            opponent,
            ctx,
        );
        return (score.wrapping_neg(), None);
    }

    let mut best_score = i32::MIN;
    let mut best_move = moves.first().copied();

    for square in moves {
        let flips = board.place_unchecked(square, color);
        let (child, _) = negamax(
            board,
            next_depth,
            beta.wrapping_neg(),
            alpha.wrapping_neg(),
            opponent,
            ctx,
        );
        board.undo(&flips);

        let score = child.wrapping_neg();
        if score > best_score {
            best_score = score;
            best_move = Some(square);
        }
        if score > alpha {
            alpha = score;
        }
        if alpha >= beta {
            ctx.stats_mut().inc_cutoffs();
            break;
        }
    }

    (best_score, best_move)
}
