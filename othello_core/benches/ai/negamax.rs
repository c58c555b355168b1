//! `othello_core::ai::negamax` の性能計測（1手選択）。

use core::hint::black_box;
use criterion::BenchmarkId;
use criterion::Criterion;
use othello_core::ai::types::Ai;
use othello_core::{ai, engine};

/// `cargo bench` の引数を取り込みつつ `Criterion` を生成する。
fn criterion_configured() -> Criterion {
    let base = Criterion::default();
    base.configure_from_args()
}

/// 乱数AI同士で指定手数だけ進めた局面を返す（途中で終局した場合はその時点で止める）。
fn position_after_plies(plies: u16) -> (engine::Board, engine::Color) {
    let mut black_agent = ai::random::Agent::new(u64::MIN);
    let mut game = engine::Game::initial();
    let mut white_agent = ai::random::Agent::new(u64::MIN.wrapping_add(1));

    for _turn in u16::MIN..plies {
        let board = *game.board();
        let color = game.side_to_move();
        let mv = match color {
            engine::Color::Black => black_agent.select_move(&board, color),
            engine::Color::White => white_agent.select_move(&board, color),
        };

        match game.play(mv.square()) {
            Ok(engine::GameStatus::GameOver { .. }) | Err(_) => break,
            Ok(_) => {}
        }
    }

    (*game.board(), game.side_to_move())
}

/// `negamax::Agent::select_move` を深さ別・局面別に計測する。
fn bench_select_move(criterion: &mut Criterion) {
    let samples = [
        position_after_plies(0),
        position_after_plies(16),
        position_after_plies(36),
    ];
    let mut group = criterion.benchmark_group("ai/negamax/select_move");

    for depth in [2_u8, 4] {
        for (index, (board, color)) in samples.iter().enumerate() {
            let bench_id = BenchmarkId::new(format!("depth{depth}"), index);
            group.bench_with_input(bench_id, board, |bench, input| {
                let mut agent = ai::negamax::Agent::new(depth);
                bench.iter(|| black_box(agent.select_move(input, *color)));
            });
        }
    }

    group.finish();
}

/// ベンチマークのエントリーポイント。
fn main() {
    let mut criterion = criterion_configured();
    bench_select_move(&mut criterion);
    criterion.final_summary();
}
