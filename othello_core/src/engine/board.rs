use core::fmt;
use core::str::FromStr;

use crate::engine::types::{Cell, Color, Square};

/// 8方向の単位ベクトル（行, 列）。
const DIRECTIONS: [(i8, i8); 8] = [
    (0, 1),
    (1, 1),
    (1, 0),
    (1, -1),
    (0, -1),
    (-1, -1),
    (-1, 0),
    (-1, 1),
];

/// 初期配置（行, 列, 石）。
const START_DISCS: [(u8, u8, Cell); 4] = [
    (3, 3, Cell::White),
    (3, 4, Cell::Black),
    (4, 3, Cell::Black),
    (4, 4, Cell::White),
];

/// マスの総数（`usize`）。
const CELL_COUNT: usize = Square::COUNT as usize;

/// 盤面（8x8、行優先）。
///
/// 値型（`Copy`）なので、探索側は局面を複製して自由に書き換えられる。
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct Board {
    /// 各マスの状態。
    cells: [Cell; CELL_COUNT],
}

/// 着手の適用に失敗した理由。
#[derive(Copy, Clone, Debug, Eq, PartialEq, thiserror::Error)]
#[non_exhaustive]
pub enum ApplyMoveError {
    /// 指定マスが合法手ではない。
    #[error("{square} is not a legal move for {color}")]
    IllegalMove {
        /// 着手しようとしたマス。
        square: Square,
        /// 着手しようとした手番。
        color: Color,
    },
}

/// 1手で置いた石と反転した石の記録。
///
/// `Board::undo` に渡すと着手前の盤面に戻せる。
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Flips {
    /// 着手した手番。
    color: Color,
    /// 反転したマス（方向ごとに中心から外側へ）。
    flipped: Vec<Square>,
    /// 着手したマス。
    square: Square,
}

impl Flips {
    /// 着手した手番を返す。
    #[inline]
    #[must_use]
    pub const fn color(&self) -> Color {
        self.color
    }

    /// 反転したマスを返す。
    #[inline]
    #[must_use]
    pub fn flipped(&self) -> &[Square] {
        &self.flipped
    }

    /// 着手したマスを返す。
    #[inline]
    #[must_use]
    pub const fn square(&self) -> Square {
        self.square
    }
}

impl Board {
    /// 着手を適用し、反転した石の記録を返す。
    ///
    /// 盤面は着手が合法な場合にのみ変更される。
    ///
    /// # Errors
    ///
    /// 指定されたマスが `color` にとって合法手でない場合、`ApplyMoveError::IllegalMove` を返す。
    #[inline]
    pub fn apply_move(&mut self, square: Square, color: Color) -> Result<Flips, ApplyMoveError> {
        if !self.is_legal_move(square, color) {
            return Err(ApplyMoveError::IllegalMove { square, color });
        }

        Ok(self.place_unchecked(square, color))
    }

    /// 指定マスの状態を返す。
    #[inline]
    #[must_use]
    pub fn cell(&self, square: Square) -> Cell {
        self.cells
            .get(usize::from(square.index()))
            .copied()
            .unwrap_or_default()
    }

    /// 指定色の石数を返す。
    #[inline]
    #[must_use]
    pub fn count(&self, color: Color) -> u32 {
        let target = Cell::from_color(color);
        let mut total = u32::MIN;
        for cell in &self.cells {
            if *cell == target {
                total = total.wrapping_add(1);
            }
        }
        total
    }

    /// 石数（黒、白）を返す。
    #[inline]
    #[must_use]
    pub fn counts(&self) -> (u32, u32) {
        (self.count(Color::Black), self.count(Color::White))
    }

    /// 石の無い盤面を返す。
    #[inline]
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            cells: [Cell::Empty; CELL_COUNT],
        }
    }

    /// 行優先に並んだ64マスから盤面を生成する。
    #[inline]
    #[must_use]
    pub const fn from_cells(cells: [Cell; CELL_COUNT]) -> Self {
        Self { cells }
    }

    /// 指定手番に合法手が1つでもあるかを返す。
    #[inline]
    #[must_use]
    pub fn has_legal_move(&self, color: Color) -> bool {
        Square::all().any(|square| self.is_legal_move(square, color))
    }

    /// 初期局面を返す。
    #[inline]
    #[must_use]
    pub fn initial() -> Self {
        let mut board = Self::empty();
        for (row, col, cell) in START_DISCS {
            if let Some(square) = Square::from_row_col(row, col) {
                board.set(square, cell);
            }
        }
        board
    }

    /// 黒白を入れ替えた盤面を返す。
    #[inline]
    #[must_use]
    pub fn inverted(&self) -> Self {
        Self {
            cells: self.cells.map(Cell::inverted),
        }
    }

    /// 双方とも合法手が無い（終局）かを返す。
    #[inline]
    #[must_use]
    pub fn is_game_over(&self) -> bool {
        !self.has_legal_move(Color::Black) && !self.has_legal_move(Color::White)
    }

    /// 指定マスが `color` にとって合法手かを返す。
    ///
    /// 空きマスであり、いずれかの方向に「隣接する相手の石の連続＋自分の石」が並ぶ場合に合法。
    #[inline]
    #[must_use]
    pub fn is_legal_move(&self, square: Square, color: Color) -> bool {
        if self.cell(square) != Cell::Empty {
            return false;
        }

        DIRECTIONS
            .iter()
            .any(|&(dr, dc)| self.captures_in_dir(square, color, dr, dc))
    }

    /// 指定手番の合法手を行優先（上の行から、各行は左から）で返す。
    #[inline]
    #[must_use]
    pub fn legal_moves(&self, color: Color) -> Vec<Square> {
        Square::all()
            .filter(|&square| self.is_legal_move(square, color))
            .collect()
    }

    /// `apply_move` で適用した着手を取り消す。
    ///
    /// 記録を得た直後の盤面に対して呼ぶこと。
    #[inline]
    pub fn undo(&mut self, flips: &Flips) {
        let restored = Cell::from_color(flips.color.opponent());
        for &square in &flips.flipped {
            self.set(square, restored);
        }
        self.set(flips.square, Cell::Empty);
    }

    /// 石を置き、挟んだ石を反転する（合法性は検査しない）。
    ///
    /// 呼び出し側が合法手であることを保証する。挟めない方向の石は反転しない。
    pub(crate) fn place_unchecked(&mut self, square: Square, color: Color) -> Flips {
        let mut flipped = Vec::new();
        for (dr, dc) in DIRECTIONS {
            self.collect_flips_in_dir(square, color, dr, dc, &mut flipped);
        }

        let own = Cell::from_color(color);
        self.set(square, own);
        for &target in &flipped {
            self.set(target, own);
        }

        Flips {
            color,
            flipped,
            square,
        }
    }

    /// 1方向について、隣接する相手の石の連続が自分の石で閉じられているかを返す。
    fn captures_in_dir(&self, square: Square, color: Color, dr: i8, dc: i8) -> bool {
        let own = Cell::from_color(color);
        let opponent = Cell::from_color(color.opponent());

        let mut cursor = match square.offset(dr, dc) {
            Some(next) if self.cell(next) == opponent => next.offset(dr, dc),
            _ => return false,
        };

        while let Some(current) = cursor {
            let cell = self.cell(current);
            if cell == own {
                return true;
            }
            if cell != opponent {
                return false;
            }
            cursor = current.offset(dr, dc);
        }

        false
    }

    /// 1方向について反転対象の石を `out` に追加する（閉じていなければ何も追加しない）。
    fn collect_flips_in_dir(
        &self,
        square: Square,
        color: Color,
        dr: i8,
        dc: i8,
        out: &mut Vec<Square>,
    ) {
        let own = Cell::from_color(color);
        let opponent = Cell::from_color(color.opponent());
        let start = out.len();

        let mut cursor = square.offset(dr, dc);
        while let Some(current) = cursor {
            if self.cell(current) != opponent {
                break;
            }
            out.push(current);
            cursor = current.offset(dr, dc);
        }

        let closed = cursor.is_some_and(|end| self.cell(end) == own);
        if !closed {
            out.truncate(start);
        }
    }

    /// 指定マスの状態を書き換える。
    fn set(&mut self, square: Square, cell: Cell) {
        if let Some(slot) = self.cells.get_mut(usize::from(square.index())) {
            *slot = cell;
        }
    }
}

impl Default for Board {
    #[inline]
    fn default() -> Self {
        Self::initial()
    }
}

/// 1行8文字（`X` = 黒、`O` = 白、`.` = 空き）× 8行で表示する。
impl fmt::Display for Board {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, cell) in self.cells.iter().enumerate() {
            write!(f, "{}", cell.symbol())?;
            if index % usize::from(Square::BOARD_LEN) == usize::from(Square::BOARD_LEN) - 1 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

/// 盤面テキストの解析に失敗した理由。
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
#[non_exhaustive]
pub enum ParseBoardError {
    /// 行に解釈できない文字が含まれている。
    #[error("row {row}: unexpected symbol `{symbol}`")]
    InvalidSymbol {
        /// 0始まりの行番号。
        row: usize,
        /// 解釈できなかった文字。
        symbol: char,
    },
    /// 行数が8ではない。
    #[error("expected 8 rows, found {0}")]
    RowCount(usize),
    /// 行の長さが8ではない。
    #[error("row {row}: expected 8 cells, found {len}")]
    RowLength {
        /// 0始まりの行番号。
        row: usize,
        /// 実際のマス数。
        len: usize,
    },
}

/// `Display` と同じ形式を受け付ける（空行と行内の空白は無視する）。
impl FromStr for Board {
    type Err = ParseBoardError;

    #[inline]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let board_len = usize::from(Square::BOARD_LEN);
        let rows: Vec<&str> = s
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect();
        if rows.len() != board_len {
            return Err(ParseBoardError::RowCount(rows.len()));
        }

        let mut cells = [Cell::Empty; CELL_COUNT];
        let mut slots = cells.iter_mut();
        for (row, line) in rows.iter().enumerate() {
            let symbols: Vec<char> = line.chars().filter(|ch| !ch.is_whitespace()).collect();
            if symbols.len() != board_len {
                return Err(ParseBoardError::RowLength {
                    row,
                    len: symbols.len(),
                });
            }

            for symbol in symbols {
                let cell = match Cell::from_symbol(symbol) {
                    Some(value) => value,
                    None => return Err(ParseBoardError::InvalidSymbol { row, symbol }),
                };
                if let Some(slot) = slots.next() {
                    *slot = cell;
                }
            }
        }

        Ok(Self { cells })
    }
}
