use criterion::{black_box, criterion_group, criterion_main, Criterion};

use tile_merge::board::Board;
use tile_merge::core::{Direction, GameConfig, GameRng};
use tile_merge::engine::{advance, apply_move, has_moves};
use tile_merge::session::GameSession;

fn busy_board() -> Board {
    Board::from_grid(
        &GameConfig::default(),
        &[[2, 2, 4, 8], [0, 4, 4, 16], [2, 0, 2, 32], [8, 8, 0, 64]],
    )
    .unwrap()
}

fn bench_advance(c: &mut Criterion) {
    let board = busy_board();
    let mut group = c.benchmark_group("advance");
    for direction in Direction::ALL {
        group.bench_function(direction.to_string(), |b| {
            b.iter(|| advance(black_box(&board), direction))
        });
    }
    group.finish();
}

fn bench_turn(c: &mut Criterion) {
    let board = busy_board();
    c.bench_function("apply_move", |b| {
        let mut rng = GameRng::new(42);
        b.iter(|| apply_move(black_box(&board), Direction::Left, &mut rng))
    });
    c.bench_function("has_moves", |b| b.iter(|| has_moves(black_box(&board))));
}

fn bench_full_game(c: &mut Criterion) {
    c.bench_function("full_game", |b| {
        b.iter(|| {
            let mut session = GameSession::new(GameConfig::default().with_seed(7)).unwrap();
            let preference = [Direction::Down, Direction::Left, Direction::Right, Direction::Up];
            loop {
                let legal = session.legal_directions();
                let Some(&direction) = preference.iter().find(|d| legal.contains(d)) else {
                    break;
                };
                session.handle_direction(direction);
            }
            session.board().max_value()
        })
    });
}

criterion_group!(benches, bench_advance, bench_turn, bench_full_game);
criterion_main!(benches);
