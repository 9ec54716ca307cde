use cgrid::{generate_grid, Maze, Random};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::SeedableRng as _;

const HEIGHT: usize = 101;
const WIDTH: usize = 101;

pub fn backtracker_generate(c: &mut Criterion) {
    c.bench_function("backtracker_generate", |b| {
        let mut rng = Random::seed_from_u64(0);
        b.iter(|| generate_grid(black_box(HEIGHT), black_box(WIDTH), &mut rng).unwrap())
    });
}

pub fn path_finder_solve(c: &mut Criterion) {
    let maze = Maze::generate(HEIGHT, WIDTH, &mut Random::seed_from_u64(0)).unwrap();
    c.bench_function("path_finder_solve", |b| b.iter(|| black_box(&maze).solve()));
}

criterion_group! {name = benches; config = Criterion::default().sample_size(10); targets = backtracker_generate, path_finder_solve}
criterion_main!(benches);
