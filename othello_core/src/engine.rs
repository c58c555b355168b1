/// 盤面（8x8 のマス目）と合法手/反転処理の実装。
pub mod board;
/// ゲーム進行（手番、パス、終局判定など）の実装。
pub mod game;
pub mod types;

pub type Board = board::Board;
pub type ApplyMoveError = board::ApplyMoveError;
pub type Flips = board::Flips;
pub type ParseBoardError = board::ParseBoardError;
pub type Game = game::Game;
pub type GameStatus = game::Status;
pub type PlayError = game::PlayError;
pub type Winner = game::Winner;
pub type Cell = types::Cell;
pub type Color = types::Color;
pub type Square = types::Square;
pub type ParseSquareError = types::ParseSquareError;
