use crate::ai::types::{Ai, Move};
use crate::engine::board::Board;
use crate::engine::types::Color;

/// 64-bit 線形合同法 (LCG) の簡易 RNG。
/// - `seed` で決定的に再現可能
#[derive(Debug, Clone, Copy)]
struct Lcg64 {
    /// 内部状態。
    state: u64,
}

impl Lcg64 {
    /// LCG の内部状態を `seed` から初期化する。
    #[inline]
    const fn new(seed: u64) -> Self {
        Self {
            state: seed ^ 0x9E37_79B9_7F4A_7C15,
        }
    }

    /// 次の u32 を生成する（上位 32bit を返す）。
    #[inline]
    fn next_u32(&mut self) -> u32 {
        const LCG_MULTIPLIER: u64 = 6_364_136_223_846_793_005;
        const LCG_INCREMENT: u64 = 1_442_695_040_888_963_407;

        self.state = self
            .state
            .wrapping_mul(LCG_MULTIPLIER)
            .wrapping_add(LCG_INCREMENT);

        u32::try_from(self.state >> 32).unwrap_or(u32::MAX)
    }
}

/// 合法手からランダムに1手を選択するAI。
///
/// 自己対戦テストやベンチマークで局面を作るための基準AI。
#[derive(Debug)]
#[non_exhaustive]
pub struct Agent {
    /// 乱数生成器。
    rng: Lcg64,
}

impl Agent {
    /// `seed` を用いて初期化する。
    #[inline]
    #[must_use]
    pub const fn new(seed: u64) -> Self {
        Self {
            rng: Lcg64::new(seed),
        }
    }
}

impl Ai for Agent {
    #[inline]
    fn select_move(&mut self, board: &Board, color: Color) -> Move {
        let moves = board.legal_moves(color);
        let index = pick_index(moves.len(), self.rng.next_u32());
        moves.get(index).copied().map_or(Move::Pass, Move::Place)
    }
}

/// `0..len` の範囲へ `random` を写像する（乗算して上位を取る）。
fn pick_index(len: usize, random: u32) -> usize {
    let len_u64 = u64::try_from(len).unwrap_or(u64::MAX);
    let product = u64::from(random).wrapping_mul(len_u64);
    usize::try_from(product.wrapping_shr(32)).unwrap_or(usize::MAX)
}
