use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use tictactoe_common::games::SessionRng;
use tictactoe_common::games::tictactoe::{
    Board, Difficulty, Mark, Player, calculate_minimax_move, calculate_move, evaluate,
};

fn bench_minimax_self_play() {
    let mut board = Board::new();
    let mut mover = Player::X;
    let mut rng = SessionRng::new(0);

    while !evaluate(&board).is_over() {
        let Some(index) = calculate_move(Difficulty::Hard, &board, mover, &mut rng) else {
            break;
        };
        board = board.with_mark(index, mover.mark());
        mover = mover.opponent();
    }
}

fn mid_game_board() -> Board {
    Board::from_marks([
        Mark::X, Mark::Empty, Mark::Empty,
        Mark::Empty, Mark::O, Mark::Empty,
        Mark::Empty, Mark::Empty, Mark::X,
    ])
}

fn minimax_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("minimax");
    group.sample_size(10);

    group.bench_function("single_move_empty", |b| {
        b.iter(|| calculate_minimax_move(black_box(&Board::new()), Player::O))
    });

    group.bench_function("single_move_mid_game", |b| {
        let board = mid_game_board();
        b.iter(|| calculate_minimax_move(black_box(&board), Player::O))
    });

    group.bench_function("self_play", |b| b.iter(bench_minimax_self_play));

    group.finish();
}

criterion_group!(benches, minimax_bench);
criterion_main!(benches);
