use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use tictactoe_engine::{BotController, Board, Difficulty, GameState, Mark, SessionRng};

fn bench_hard_single_move_empty_board() {
    let bot = BotController::new(Difficulty::Hard, Mark::X);
    let mut rng = SessionRng::new(0);
    let _ = bot.choose_move(black_box(&Board::empty()), Mark::O, &mut rng);
}

fn bench_hard_single_move_mid_game(board: &Board) {
    let bot = BotController::new(Difficulty::Hard, Mark::O);
    let mut rng = SessionRng::new(0);
    let _ = bot.choose_move(black_box(board), Mark::X, &mut rng);
}

fn bench_hard_vs_hard_round() {
    let x_bot = BotController::new(Difficulty::Hard, Mark::X);
    let o_bot = BotController::new(Difficulty::Hard, Mark::O);
    let mut rng = SessionRng::new(0);
    let mut state = GameState::new();

    while !state.is_over() {
        let bot = if state.current_mark == Mark::X { &x_bot } else { &o_bot };
        match bot.choose_move(&state.board, state.current_mark.opponent(), &mut rng) {
            Ok(position) => {
                let _ = state.place_mark(position.row, position.col);
            }
            Err(_) => break,
        }
    }
}

fn minimax_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("minimax");

    let mid_game: Board = "X../.O./..X".parse().unwrap_or_default();

    group.bench_function("single_move_empty", |b| {
        b.iter(bench_hard_single_move_empty_board)
    });

    group.bench_function("single_move_mid_game", |b| {
        b.iter(|| bench_hard_single_move_mid_game(&mid_game))
    });

    group.bench_function("hard_vs_hard_round", |b| b.iter(bench_hard_vs_hard_round));

    group.finish();
}

criterion_group!(benches, minimax_bench);
criterion_main!(benches);
