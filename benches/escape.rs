#[macro_use]
extern crate criterion;
extern crate mandelcycle;
extern crate num;

use criterion::Criterion;
use mandelcycle::classes::{escape_time, ClassGenerator};
use mandelcycle::field::{FieldGenerator, Mapping};
use mandelcycle::grayscale::escape;
use mandelcycle::MAX_ITERATIONS;
use num::Complex;

fn escape_loops(c: &mut Criterion) {
    c.bench_function("complex escape, member", |b| {
        b.iter(|| escape_time(Complex::new(-0.1, 0.1), MAX_ITERATIONS))
    });
    c.bench_function("split escape, member", |b| {
        b.iter(|| escape(-0.1, 0.1, MAX_ITERATIONS))
    });
    c.bench_function("class field 80x60", |b| {
        let gen = ClassGenerator::new(80, 60, Mapping::Linear).unwrap();
        b.iter(|| gen.generate())
    });
}

criterion_group!(benches, escape_loops);
criterion_main!(benches);
