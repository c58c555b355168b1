//! 端末で動作する最小 UI。
//!
//! 盤面の表示・入力の解釈・AI 手番前の待ち時間だけを担当し、ルールと探索は `othello_core` に任せる。

use std::io::{self, BufRead, Write};
use std::thread;
use std::time::Duration;

use anyhow::Context as _;
use clap::{Parser, ValueEnum};
use othello_core::ai::types::Ai;
use othello_core::{ai, engine};

/// コマンドライン引数。
#[derive(Debug, Parser)]
#[command(name = "othello", about = "Play Othello against a negamax AI in the terminal")]
struct Args {
    /// AI の探索深さ（ply）。
    #[arg(long, default_value_t = ai::negamax::DEFAULT_DEPTH)]
    depth: u8,

    /// 人間が持つ石の色。
    #[arg(long, value_enum, default_value_t = Side::Black)]
    human_color: Side,

    /// AI が手を打つ前の待ち時間（ミリ秒）。
    #[arg(long, default_value_t = 1000)]
    ai_delay_ms: u64,

    /// ログを JSON で出力する。
    #[arg(long)]
    log_json: bool,

    /// ログの最大レベル。
    #[arg(long, default_value = "warn")]
    log_level: tracing::Level,
}

/// 人間側の色の指定。
#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
enum Side {
    Black,
    White,
}

impl From<Side> for engine::Color {
    fn from(side: Side) -> Self {
        match side {
            Side::Black => Self::Black,
            Side::White => Self::White,
        }
    }
}

#[derive(Debug)]
enum Controller {
    Human,
    Negamax(ai::negamax::Agent),
}

impl Controller {
    fn is_human(&self) -> bool {
        matches!(self, Self::Human)
    }

    fn select_move(&mut self, board: &engine::Board, color: engine::Color) -> ai::Move {
        match self {
            Self::Negamax(agent) => agent.select_move(board, color),
            Self::Human => ai::Move::Pass,
        }
    }
}

/// 人間の入力を処理した結果。
#[derive(Debug, Eq, PartialEq)]
enum Input {
    /// 着手が適用された。
    Played,
    /// 入力が不正だった（理由付き）。
    Rejected(String),
    /// 終了要求。
    Quit,
}

#[derive(Debug)]
struct App {
    black: Controller,
    game: engine::Game,
    white: Controller,
}

impl App {
    fn new(human: engine::Color, depth: u8) -> Self {
        let agent = Controller::Negamax(ai::negamax::Agent::new(depth));
        let (black, white) = match human {
            engine::Color::Black => (Controller::Human, agent),
            engine::Color::White => (agent, Controller::Human),
        };

        Self {
            black,
            game: engine::Game::initial(),
            white,
        }
    }

    fn controller_for_mut(&mut self, color: engine::Color) -> &mut Controller {
        match color {
            engine::Color::Black => &mut self.black,
            engine::Color::White => &mut self.white,
        }
    }

    fn controller_for(&self, color: engine::Color) -> &Controller {
        match color {
            engine::Color::Black => &self.black,
            engine::Color::White => &self.white,
        }
    }

    fn human_to_move(&self) -> bool {
        self.controller_for(self.game.side_to_move()).is_human()
    }

    fn status_text(&self) -> String {
        let (black, white) = self.game.board().counts();
        let side = self.game.side_to_move();

        match self.game.status() {
            engine::GameStatus::InProgress => {
                format!("{side} to move | X={black} O={white}")
            }
            engine::GameStatus::MustPass => {
                format!("{side} has no legal move and passes | X={black} O={white}")
            }
            engine::GameStatus::GameOver { black: b, white: w } => {
                let result = match engine::Winner::from_counts(b, w) {
                    engine::Winner::Black => "Black wins",
                    engine::Winner::White => "White wins",
                    _ => "Draw",
                };
                format!("Game Over: {result} | X={b} O={w}")
            }
            _ => format!("Unknown status | X={black} O={white}"),
        }
    }

    fn step_ai_once(&mut self) {
        if self.game.is_game_over() {
            return;
        }

        let side = self.game.side_to_move();
        if self.controller_for(side).is_human() {
            return;
        }

        let board = *self.game.board();
        let mv = self.controller_for_mut(side).select_move(&board, side);
        if let Err(err) = self.game.play(mv.square()) {
            tracing::error!(%side, %mv, %err, "AI move was rejected");
        }
    }

    fn try_human_input(&mut self, line: &str) -> Input {
        let text = line.trim();
        if matches!(text, "q" | "quit" | "exit") {
            return Input::Quit;
        }

        let square = match text.parse::<engine::Square>() {
            Ok(value) => value,
            Err(err) => return Input::Rejected(err.to_string()),
        };

        match self.game.play(Some(square)) {
            Ok(_) => Input::Played,
            Err(err) => {
                tracing::warn!(%square, %err, "human move rejected");
                Input::Rejected(err.to_string())
            }
        }
    }
}

/// 盤面を文字列として描画する（`highlight` が真なら合法手を `*` で示す）。
fn render_board(game: &engine::Game, highlight: bool) -> String {
    let board = game.board();
    let legal_moves = if highlight {
        game.legal_moves()
    } else {
        Vec::new()
    };

    let mut out = String::from("  a b c d e f g h\n");
    for row in 0..engine::Square::BOARD_LEN {
        out.push_str(&format!("{}", row + 1));
        for col in 0..engine::Square::BOARD_LEN {
            let Some(square) = engine::Square::from_row_col(row, col) else {
                continue;
            };
            let symbol = if legal_moves.contains(&square) {
                '*'
            } else {
                board.cell(square).symbol()
            };
            out.push(' ');
            out.push(symbol);
        }
        out.push('\n');
    }
    out
}

fn init_tracing(args: &Args) {
    let builder = tracing_subscriber::fmt()
        .with_max_level(args.log_level)
        .with_writer(io::stderr);
    if args.log_json {
        builder.json().init();
    } else {
        builder.init();
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_tracing(&args);

    let mut app = App::new(args.human_color.into(), args.depth);
    let delay = Duration::from_millis(args.ai_delay_ms);
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    let mut stdout = io::stdout().lock();

    loop {
        let highlight = app.human_to_move();
        write!(stdout, "\n{}{}\n", render_board(&app.game, highlight), app.status_text())
            .context("failed to write the board")?;

        match app.game.status() {
            engine::GameStatus::GameOver { .. } => break,
            engine::GameStatus::MustPass => {
                app.game.auto_pass_if_needed();
                continue;
            }
            _ => {}
        }

        if highlight {
            write!(stdout, "Your move (e.g. d3), or q to quit: ").context("failed to write the prompt")?;
            stdout.flush().context("failed to flush stdout")?;

            let Some(line) = lines.next() else {
                break;
            };
            let line = line.context("failed to read a move")?;
            match app.try_human_input(&line) {
                Input::Played => {}
                Input::Rejected(reason) => writeln!(stdout, "{reason}").context("failed to write")?,
                Input::Quit => break,
            }
        } else {
            writeln!(stdout, "AI is thinking...").context("failed to write the status")?;
            stdout.flush().context("failed to flush stdout")?;
            thread::sleep(delay);
            app.step_ai_once();
        }
    }

    Ok(())
}
