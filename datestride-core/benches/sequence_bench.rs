use criterion::{black_box, criterion_group, criterion_main, Criterion};
use datestride_core::{parse_date, CalendarUnit, DateSequence};

fn daily_iteration_benchmark(c: &mut Criterion) {
    c.bench_function("daily closed sequence, one year", |b| {
        b.iter(|| {
            DateSequence::through(black_box("2018-01-01"), black_box("2018-12-31"), 1, CalendarUnit::Day)
                .unwrap()
                .count()
        })
    });
}

fn monthly_contains_benchmark(c: &mut Criterion) {
    let target = parse_date("2118-01-31").unwrap();
    c.bench_function("monthly unbounded contains, one century", |b| {
        let mut seq = DateSequence::unbounded("2018-01-31", 1, CalendarUnit::Month).unwrap();
        b.iter(|| seq.contains(black_box(target)))
    });
}

fn parse_benchmark(c: &mut Criterion) {
    c.bench_function("parse YYYY-MM-DD", |b| b.iter(|| parse_date(black_box("2018-06-04"))));
}

criterion_group!(benches, daily_iteration_benchmark, monthly_contains_benchmark, parse_benchmark);
criterion_main!(benches);
