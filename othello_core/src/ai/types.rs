use core::fmt;

use crate::engine::board::Board;
use crate::engine::types::{Color, Square};

/// AIが選択する手。
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub enum Move {
    /// パス。
    Pass,
    /// 指定マスへ着手。
    Place(Square),
}

impl Move {
    /// 着手するマスを返す（パスなら `None`）。
    #[inline]
    #[must_use]
    pub const fn square(self) -> Option<Square> {
        match self {
            Self::Pass => None,
            Self::Place(square) => Some(square),
        }
    }
}

impl From<Option<Square>> for Move {
    #[inline]
    fn from(square: Option<Square>) -> Self {
        square.map_or(Self::Pass, Self::Place)
    }
}

impl fmt::Display for Move {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::Pass => f.write_str("pass"),
            Self::Place(square) => write!(f, "{square}"),
        }
    }
}

/// 手を選択するAI。
pub trait Ai {
    /// 盤面と手番から次の手を選択する。
    fn select_move(&mut self, board: &Board, color: Color) -> Move;
}
