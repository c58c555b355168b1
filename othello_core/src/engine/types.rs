use core::fmt;
use core::str::FromStr;

/// 手番（石の色）。
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Color {
    /// 先手（符号 +1）。
    Black,
    /// 後手（符号 -1）。
    White,
}

impl Color {
    /// 相手側の色を返す。
    #[inline]
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Self::Black => Self::White,
            Self::White => Self::Black,
        }
    }

    /// 黒を +1、白を -1 とした符号を返す。
    ///
    /// 評価値は常に黒視点なので、これを掛けると手番視点の値になる。
    #[inline]
    #[must_use]
    pub const fn sign(self) -> i32 {
        match self {
            Self::Black => 1,
            Self::White => -1,
        }
    }
}

impl fmt::Display for Color {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::Black => f.write_str("Black"),
            Self::White => f.write_str("White"),
        }
    }
}

/// マスの状態。
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum Cell {
    /// 空きマス。
    #[default]
    Empty,
    /// 黒石。
    Black,
    /// 白石。
    White,
}

impl Cell {
    /// 指定色の石を返す。
    #[inline]
    #[must_use]
    pub const fn from_color(color: Color) -> Self {
        match color {
            Color::Black => Self::Black,
            Color::White => Self::White,
        }
    }

    /// 石の色を返す（空きマスなら `None`）。
    #[inline]
    #[must_use]
    pub const fn color(self) -> Option<Color> {
        match self {
            Self::Empty => None,
            Self::Black => Some(Color::Black),
            Self::White => Some(Color::White),
        }
    }

    /// 黒 = 1、白 = -1、空き = 0 の値を返す。
    #[inline]
    #[must_use]
    pub const fn value(self) -> i32 {
        match self {
            Self::Empty => 0,
            Self::Black => 1,
            Self::White => -1,
        }
    }

    /// 石の色を入れ替えたマスを返す。
    #[inline]
    #[must_use]
    pub const fn inverted(self) -> Self {
        match self {
            Self::Empty => Self::Empty,
            Self::Black => Self::White,
            Self::White => Self::Black,
        }
    }

    /// 盤面テキスト表現での1文字を返す。
    #[inline]
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Empty => '.',
            Self::Black => 'X',
            Self::White => 'O',
        }
    }

    /// 盤面テキスト表現の1文字から生成する。
    #[inline]
    #[must_use]
    pub const fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '.' | '-' => Some(Self::Empty),
            'X' | 'x' | 'B' | 'b' => Some(Self::Black),
            'O' | 'o' | 'W' | 'w' => Some(Self::White),
            _ => None,
        }
    }
}

/// 盤面上のマス（行優先の 0..=63 インデックス）。
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct Square(
    /// `row * 8 + col` に対応する0..=63の値。
    u8,
);

impl Square {
    /// 盤の一辺の長さ。
    pub const BOARD_LEN: u8 = 8;

    /// マスの総数。
    pub const COUNT: u8 = 64;

    /// 全マスを行優先（上から下、左から右）で返す。
    #[inline]
    pub fn all() -> impl Iterator<Item = Self> {
        (u8::MIN..Self::COUNT).map(Self)
    }

    /// 行・列から `Square` を生成する（盤外なら `None`）。
    #[inline]
    #[must_use]
    pub const fn from_row_col(row: u8, col: u8) -> Option<Self> {
        if row >= Self::BOARD_LEN || col >= Self::BOARD_LEN {
            return None;
        }

        let idx = match row.checked_mul(Self::BOARD_LEN) {
            Some(value) => value,
            None => return None,
        };

        match idx.checked_add(col) {
            Some(value) => Some(Self(value)),
            None => None,
        }
    }

    /// 符号付き座標から `Square` を生成する（盤外なら `None`）。
    ///
    /// 方向ベクトルで盤上を辿る際の境界判定に使う。
    #[inline]
    #[must_use]
    pub const fn from_signed(row: i8, col: i8) -> Option<Self> {
        if row < 0 || col < 0 {
            return None;
        }

        #[allow(clippy::cast_sign_loss, reason = "non-negative checked above")]
        let (row, col) = (row as u8, col as u8);
        Self::from_row_col(row, col)
    }

    /// 0..=63 のインデックスを返す。
    #[inline]
    #[must_use]
    pub const fn index(self) -> u8 {
        self.0
    }

    /// 行（0..=7）を返す。
    #[inline]
    #[must_use]
    pub const fn row(self) -> u8 {
        match self.0.checked_div(Self::BOARD_LEN) {
            Some(value) => value,
            None => u8::MIN,
        }
    }

    /// 列（0..=7）を返す。
    #[inline]
    #[must_use]
    pub const fn col(self) -> u8 {
        match self.0.checked_rem(Self::BOARD_LEN) {
            Some(value) => value,
            None => u8::MIN,
        }
    }

    /// `(dr, dc)` だけ移動したマスを返す（盤外なら `None`）。
    #[inline]
    #[must_use]
    pub const fn offset(self, dr: i8, dc: i8) -> Option<Self> {
        #[allow(clippy::cast_possible_wrap, reason = "row/col are at most 7")]
        let (row, col) = (self.row() as i8, self.col() as i8);
        Self::from_signed(row.wrapping_add(dr), col.wrapping_add(dc))
    }
}

/// `"d3"` 形式（列の英字＋1始まりの行番号）で表示する。
impl fmt::Display for Square {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let file = char::from(b'a'.wrapping_add(self.col()));
        write!(f, "{file}{}", self.row().wrapping_add(1))
    }
}

/// マス表記の解析に失敗した理由。
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
#[non_exhaustive]
pub enum ParseSquareError {
    /// 表記の形式が不正。
    #[error("malformed square `{0}` (expected e.g. `d3` or `2 3`)")]
    Malformed(String),
    /// 盤外の座標。
    #[error("square `{0}` is off the board")]
    OutOfBounds(String),
}

/// `"d3"` 形式、または `"2 3"` / `"2,3"` 形式（0始まりの行・列）を受け付ける。
impl FromStr for Square {
    type Err = ParseSquareError;

    #[inline]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let text = s.trim();
        let malformed = || ParseSquareError::Malformed(text.to_owned());
        let off_board = || ParseSquareError::OutOfBounds(text.to_owned());

        let mut parts = text
            .split(|ch: char| ch == ',' || ch.is_whitespace())
            .filter(|part| !part.is_empty());
        let first = parts.next().ok_or_else(malformed)?;

        if let Some(second) = parts.next() {
            if parts.next().is_some() {
                return Err(malformed());
            }
            let row = first.parse::<u8>().map_err(|_err| malformed())?;
            let col = second.parse::<u8>().map_err(|_err| malformed())?;
            return Self::from_row_col(row, col).ok_or_else(off_board);
        }

        let mut chars = first.chars();
        let (file, rank) = match (chars.next(), chars.as_str()) {
            (Some(file), rank) if file.is_ascii_alphabetic() && !rank.is_empty() => (file, rank),
            _ => return Err(malformed()),
        };
        let rank = rank.parse::<u8>().map_err(|_err| malformed())?;
        let file = u8::try_from(file.to_ascii_lowercase()).map_err(|_err| malformed())?;
        let col = file.wrapping_sub(b'a');
        let row = match rank.checked_sub(1) {
            Some(value) => value,
            None => return Err(off_board()),
        };

        Self::from_row_col(row, col).ok_or_else(off_board)
    }
}
