//! Performance measurement for complete maze generation

// Criterion macros generate undocumented functions
#![allow(missing_docs)]

use amazeing::maze::MazeGenerator;
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

/// Measures carving a 50x50 imperfect maze including the loop pass
fn bench_generate_50x50(c: &mut Criterion) {
    c.bench_function("generate_50x50", |b| {
        b.iter(|| {
            let Ok(mut generator) = MazeGenerator::new(50, 50, 12345) else {
                return;
            };
            generator.generate(false);
            black_box(generator.grid().history().len());
        });
    });
}

criterion_group!(benches, bench_generate_50x50);
criterion_main!(benches);
