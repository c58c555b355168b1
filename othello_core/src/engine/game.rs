use core::cmp::Ordering;

use crate::engine::board::{ApplyMoveError, Board, Flips};
use crate::engine::types::{Color, Square};

/// ゲームの状態。
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub enum Status {
    /// 終局（双方とも打てない）。
    GameOver {
        /// 黒の石数。
        black: u32,
        /// 白の石数。
        white: u32,
    },
    /// 進行中（手番側に合法手がある）。
    InProgress,
    /// 手番側に合法手が無く、パスしなければならない。
    MustPass,
}

/// 終局時の勝者。
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub enum Winner {
    /// 黒の勝ち。
    Black,
    /// 引き分け。
    Draw,
    /// 白の勝ち。
    White,
}

impl Winner {
    /// 石数から勝者を決める。
    #[inline]
    #[must_use]
    pub fn from_counts(black: u32, white: u32) -> Self {
        match black.cmp(&white) {
            Ordering::Greater => Self::Black,
            Ordering::Less => Self::White,
            Ordering::Equal => Self::Draw,
        }
    }
}

/// 手の適用（打つ/パス）に失敗した理由。
#[derive(Copy, Clone, Debug, Eq, PartialEq, thiserror::Error)]
#[non_exhaustive]
pub enum PlayError {
    /// すでに終局している。
    #[error("the game is already over")]
    GameOver,
    /// 指定マスが合法手ではない。
    #[error("{0} is not a legal move")]
    IllegalMove(Square),
    /// 合法手があるのにパスしようとした。
    #[error("cannot pass while a legal move exists")]
    PassNotAllowed,
}

/// 1ゲームの進行を管理する構造体。
///
/// 盤面はゲーム開始時に1度だけ作られ、人間と AI の着手で書き換えられる。
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Game {
    /// 現在の盤面。
    board: Board,
    /// 連続パス回数。
    consecutive_passes: u8,
    /// 手番。
    side_to_move: Color,
}

impl Game {
    /// 現手番に合法手が無い場合、パスを自動適用する。
    ///
    /// - すでに終局している場合は何もしない（`false`）。
    /// - 合法手がある場合は何もしない（`false`）。
    /// - パスを適用できた場合は `true`。
    #[inline]
    pub fn auto_pass_if_needed(&mut self) -> bool {
        if self.status() != Status::MustPass {
            return false;
        }

        self.play(None).is_ok()
    }

    /// 現在の盤面を返す。
    #[inline]
    #[must_use]
    pub const fn board(&self) -> &Board {
        &self.board
    }

    /// 任意の盤面と手番からゲームを開始する。
    #[inline]
    #[must_use]
    pub const fn from_board(board: Board, side_to_move: Color) -> Self {
        Self {
            board,
            consecutive_passes: u8::MIN,
            side_to_move,
        }
    }

    /// 初期局面（黒番）からゲームを開始する。
    #[inline]
    #[must_use]
    pub fn initial() -> Self {
        Self::from_board(Board::initial(), Color::Black)
    }

    /// 終局しているかどうかを返す。
    #[inline]
    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.consecutive_passes >= 2 || self.board.is_game_over()
    }

    /// 現手番の合法手を返す。
    #[inline]
    #[must_use]
    pub fn legal_moves(&self) -> Vec<Square> {
        self.board.legal_moves(self.side_to_move)
    }

    /// 終局していれば勝者を返す。
    #[inline]
    #[must_use]
    pub fn outcome(&self) -> Option<Winner> {
        match self.status() {
            Status::GameOver { black, white } => Some(Winner::from_counts(black, white)),
            Status::InProgress | Status::MustPass => None,
        }
    }

    /// 1手（打つ/パス）を適用する。
    ///
    /// # Errors
    ///
    /// 次の場合にエラーを返す：
    /// - `PlayError::GameOver`: すでにゲームが終局している場合
    /// - `PlayError::IllegalMove`: 指定されたマスが合法手でない場合
    /// - `PlayError::PassNotAllowed`: 合法手が存在するのにパスを試みた場合
    #[inline]
    pub fn play(&mut self, mv: Option<Square>) -> Result<Status, PlayError> {
        if self.is_game_over() {
            return Err(PlayError::GameOver);
        }

        let color = self.side_to_move;
        if let Some(square) = mv {
            let flips: Flips = match self.board.apply_move(square, color) {
                Ok(value) => value,
                Err(ApplyMoveError::IllegalMove { .. }) => {
                    return Err(PlayError::IllegalMove(square));
                }
            };
            tracing::debug!(
                %color,
                %square,
                flipped = flips.flipped().len(),
                "move played"
            );

            self.consecutive_passes = u8::MIN;
        } else {
            if self.board.has_legal_move(color) {
                return Err(PlayError::PassNotAllowed);
            }
            tracing::debug!(%color, "pass");

            self.consecutive_passes = self.consecutive_passes.saturating_add(1);
        }

        self.side_to_move = color.opponent();
        Ok(self.status())
    }

    /// 手番を返す。
    #[inline]
    #[must_use]
    pub const fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    /// 現在のゲーム状態を返す。
    #[inline]
    #[must_use]
    pub fn status(&self) -> Status {
        if self.is_game_over() {
            let (black, white) = self.board.counts();
            return Status::GameOver { black, white };
        }

        if self.board.has_legal_move(self.side_to_move) {
            Status::InProgress
        } else {
            Status::MustPass
        }
    }
}

impl Default for Game {
    #[inline]
    fn default() -> Self {
        Self::initial()
    }
}

#[cfg(test)]
mod tests {
    use super::{Game, PlayError, Status, Winner};
    use crate::engine::board::Board;
    use crate::engine::types::{Color, Square};

    fn sq(row: u8, col: u8) -> Square {
        Square::from_row_col(row, col).unwrap_or_else(|| unreachable!("({row}, {col}) is on the board"))
    }

    fn board(text: &str) -> Board {
        text.parse::<Board>()
            .unwrap_or_else(|err| unreachable!("test board must parse: {err}"))
    }

    /// 白は打てないが黒は打てる局面（白番）。
    fn white_must_pass() -> Game {
        let board = board(
            "
            X O . . . . . .
            . . . . . . . .
            . . . . . . . .
            . . . . . . . .
            . . . . . . . .
            . . . . . . . .
            . . . . . . . .
            . . . . . . . .
            ",
        );
        Game::from_board(board, Color::White)
    }

    #[test]
    fn play_alternates_turns() {
        let mut game = Game::initial();
        assert_eq!(game.play(Some(sq(2, 3))), Ok(Status::InProgress));
        assert_eq!(game.side_to_move(), Color::White);
        assert_eq!(game.board().counts(), (4, 1));
    }

    #[test]
    fn illegal_move_and_pass_are_rejected() {
        let mut game = Game::initial();
        assert_eq!(game.play(Some(sq(0, 0))), Err(PlayError::IllegalMove(sq(0, 0))));
        assert_eq!(game.play(None), Err(PlayError::PassNotAllowed));
        assert_eq!(game, Game::initial());
    }

    #[test]
    fn forced_pass_is_distinct_from_game_over() {
        let mut game = white_must_pass();
        assert_eq!(game.status(), Status::MustPass);
        assert!(!game.is_game_over());
        assert_eq!(game.outcome(), None);

        assert!(game.auto_pass_if_needed());
        assert_eq!(game.side_to_move(), Color::Black);
        assert_eq!(game.status(), Status::InProgress);
        assert!(!game.auto_pass_if_needed());
    }

    #[test]
    fn game_over_reports_counts_and_winner() {
        let mut game = white_must_pass();
        assert!(game.auto_pass_if_needed());

        // 黒が c1 に打つと白石が無くなり、双方とも打てなくなる。
        let status = game.play(Some(sq(0, 2)));
        assert_eq!(status, Ok(Status::GameOver { black: 3, white: 0 }));
        assert_eq!(game.outcome(), Some(Winner::Black));
        assert_eq!(game.play(None), Err(PlayError::GameOver));
        assert!(!game.auto_pass_if_needed());
    }

    #[test]
    fn winner_is_decided_by_disc_count() {
        assert_eq!(Winner::from_counts(33, 31), Winner::Black);
        assert_eq!(Winner::from_counts(10, 54), Winner::White);
        assert_eq!(Winner::from_counts(32, 32), Winner::Draw);
    }

    #[test]
    fn drawn_full_board_is_game_over() {
        let text = "XXXXXXXX\n".repeat(4) + &"OOOOOOOO\n".repeat(4);
        let game = Game::from_board(board(&text), Color::Black);
        assert_eq!(game.status(), Status::GameOver { black: 32, white: 32 });
        assert_eq!(game.outcome(), Some(Winner::Draw));
    }
}
