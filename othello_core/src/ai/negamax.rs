//! ネガマックス（αβ枝刈り付き）探索AI。
//!
//! 評価値は常に黒視点で計算し、手番の符号（黒 +1、白 -1）を掛けて手番視点に直す。
//! 子ノードの値は符号を反転して親の視点に戻す。

use crate::ai::types::{Ai, Move};
use crate::engine::board::Board;
use crate::engine::types::{Color, Square};

mod config;
mod eval;
mod search;

pub use config::{DEFAULT_DEPTH, SearchConfig, SearchStats};
pub use eval::{EvalTerms, EvalWeights, evaluate, evaluate_terms};
pub use search::SearchResult;

use config::SearchContext;

/// 探索窓の無限大として扱う値。
///
/// 評価値の絶対値はこれより十分小さく、符号反転してもあふれない。
pub const INF: i32 = 1_000_000;

/// ネガマックス探索を行うAI。
#[derive(Debug)]
#[non_exhaustive]
pub struct Agent {
    /// 探索設定。
    config: SearchConfig,
}

impl Agent {
    /// 探索設定を返す。
    #[inline]
    #[must_use]
    pub const fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// `depth` を指定して初期化する（重みは既定値）。
    #[inline]
    #[must_use]
    pub const fn new(depth: u8) -> Self {
        Self {
            config: SearchConfig::new(depth),
        }
    }

    /// 探索設定を指定して初期化する。
    #[inline]
    #[must_use]
    pub const fn with_config(config: SearchConfig) -> Self {
        Self { config }
    }
}

impl Default for Agent {
    #[inline]
    fn default() -> Self {
        Self::with_config(SearchConfig::default())
    }
}

impl Ai for Agent {
    #[inline]
    fn select_move(&mut self, board: &Board, color: Color) -> Move {
        Move::from(compute_best_move(board, &self.config, color))
    }
}

/// 探索深さを正規化する（0の場合は1にする）。
#[inline]
const fn normalize_depth(depth: u8) -> u8 {
    if depth == u8::MIN {
        u8::MIN.wrapping_add(1)
    } else {
        depth
    }
}

/// `color` の最善手を探索して返す（合法手が無ければ `None`）。
///
/// 深さ0は1として扱うので、合法手がある限り必ず手を返す。
#[inline]
#[must_use]
pub fn compute_best_move(board: &Board, config: &SearchConfig, color: Color) -> Option<Square> {
    let depth = normalize_depth(config.depth());
    let result = search(board, depth, INF.wrapping_neg(), INF, color, config.weights());
    let stats = result.stats();

    tracing::debug!(
        %color,
        depth,
        score = result.score(),
        best_move = ?result.best_move(),
        nodes = stats.nodes(),
        leaves = stats.leaves(),
        cutoffs = stats.cutoffs(),
        "search finished"
    );

    result.best_move()
}

/// 探索窓 `(alpha, beta)` でネガマックス探索を行う。
///
/// 盤面は内部で複製して探索するため、呼び出し側の盤面は変更されない。
/// `alpha`/`beta` には `-INF..=INF` の範囲の値を渡すこと。
#[inline]
#[must_use]
pub fn search(
    board: &Board,
    depth: u8,
    alpha: i32,
    beta: i32,
    color: Color,
    weights: &EvalWeights,
) -> SearchResult {
    let mut ctx = SearchContext::new(weights);
    search::search_root(board, depth, alpha, beta, color, &mut ctx)
}
