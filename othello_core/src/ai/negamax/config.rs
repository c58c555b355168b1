use super::eval::EvalWeights;

/// AI の既定探索深さ（ply）。
pub const DEFAULT_DEPTH: u8 = 4;

/// 探索の設定。
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct SearchConfig {
    /// 探索深さ（ply）。パスも1 ply を消費する。
    depth: u8,
    /// 評価関数の重み。
    weights: EvalWeights,
}

impl SearchConfig {
    /// 探索深さを返す。
    #[inline]
    #[must_use]
    pub const fn depth(&self) -> u8 {
        self.depth
    }

    /// 既定の重みで探索設定を生成する。
    #[inline]
    #[must_use]
    pub const fn new(depth: u8) -> Self {
        Self {
            depth,
            weights: EvalWeights::DEFAULT,
        }
    }

    /// 評価関数の重みを返す。
    #[inline]
    #[must_use]
    pub const fn weights(&self) -> &EvalWeights {
        &self.weights
    }

    /// 評価関数の重みを差し替える。
    #[inline]
    #[must_use]
    pub const fn with_weights(self, weights: EvalWeights) -> Self {
        Self {
            depth: self.depth,
            weights,
        }
    }
}

impl Default for SearchConfig {
    #[inline]
    fn default() -> Self {
        Self::new(DEFAULT_DEPTH)
    }
}

/// 探索統計。
#[derive(Default, Clone, Copy, Debug, Eq, PartialEq)]
pub struct SearchStats {
    /// αβ枝刈りで兄弟ノードを打ち切った回数。
    cutoffs: u64,
    /// 静的評価を行った末端ノード数。
    leaves: u64,
    /// 探索したノード数。
    nodes: u64,
}

impl SearchStats {
    /// 枝刈りの回数を返す。
    #[inline]
    #[must_use]
    pub const fn cutoffs(&self) -> u64 {
        self.cutoffs
    }

    /// 枝刈りの回数を加算する。
    pub(super) const fn inc_cutoffs(&mut self) {
        self.cutoffs = self.cutoffs.wrapping_add(1);
    }

    /// 末端ノード数を加算する。
    pub(super) const fn inc_leaves(&mut self) {
        self.leaves = self.leaves.wrapping_add(1);
    }

    /// 探索ノード数を加算する。
    pub(super) const fn inc_nodes(&mut self) {
        self.nodes = self.nodes.wrapping_add(1);
    }

    /// 末端ノード数を返す。
    #[inline]
    #[must_use]
    pub const fn leaves(&self) -> u64 {
        self.leaves
    }

    /// 探索ノード数を返す。
    #[inline]
    #[must_use]
    pub const fn nodes(&self) -> u64 {
        self.nodes
    }
}

/// 探索実行中に共有するコンテキスト。
pub(super) struct SearchContext<'ctx> {
    /// 探索統計。
    stats: SearchStats,
    /// 評価関数の重み。
    weights: &'ctx EvalWeights,
}

impl<'ctx> SearchContext<'ctx> {
    /// 探索コンテキストを生成する。
    pub(super) fn new(weights: &'ctx EvalWeights) -> Self {
        Self {
            stats: SearchStats::default(),
            weights,
        }
    }

    /// 探索統計を返す。
    pub(super) const fn stats(&self) -> SearchStats {
        self.stats
    }

    /// 探索統計への可変参照を返す。
    pub(super) const fn stats_mut(&mut self) -> &mut SearchStats {
        &mut self.stats
    }

    /// 評価関数の重みを返す。
    pub(super) const fn weights(&self) -> &'ctx EvalWeights {
        self.weights
    }
}
