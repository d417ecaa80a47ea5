use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use serde::Serialize;
use strbuilder::{coerce, to_value, NumberMode, StringBuilder, Value};

#[derive(Serialize, Clone)]
struct Event {
    id: u32,
    kind: String,
    message: String,
    handled: bool,
}

fn benchmark_append_strings(c: &mut Criterion) {
    let mut group = c.benchmark_group("append_strings");

    let short = "short";
    let medium = "This is a medium length string with some content";
    let long = "This is a very long string that contains a lot of text and might require more processing time";

    group.bench_function("short_string", |b| {
        b.iter(|| {
            let mut builder = StringBuilder::new();
            builder.append(black_box(short)).unwrap();
            builder.into_string()
        })
    });

    group.bench_function("medium_string", |b| {
        b.iter(|| {
            let mut builder = StringBuilder::new();
            builder.append(black_box(medium)).unwrap();
            builder.into_string()
        })
    });

    group.bench_function("long_string", |b| {
        b.iter(|| {
            let mut builder = StringBuilder::new();
            builder.append(black_box(long)).unwrap();
            builder.into_string()
        })
    });

    group.finish();
}

fn benchmark_append_mixed(c: &mut Criterion) {
    c.bench_function("append_mixed_values", |b| {
        b.iter(|| {
            let mut builder = StringBuilder::new();
            builder.append(black_box("status: ")).unwrap();
            builder.append(black_box(true)).unwrap();
            builder.append(black_box(' ')).unwrap();
            builder.append(black_box(42)).unwrap();
            builder.append(black_box(' ')).unwrap();
            builder.append(black_box(10.5)).unwrap();
            builder.into_string()
        })
    });
}

fn benchmark_append_line(c: &mut Criterion) {
    c.bench_function("append_line_loop", |b| {
        b.iter(|| {
            let mut builder = StringBuilder::new();
            for i in 0..16 {
                builder.append_line(black_box(i)).unwrap();
            }
            builder.into_string()
        })
    });
}

fn benchmark_append_join(c: &mut Criterion) {
    let mut group = c.benchmark_group("append_join");

    for size in [10, 50, 100, 500].iter() {
        let values: Vec<i64> = (0..i64::from(*size)).collect();

        group.bench_with_input(BenchmarkId::from_parameter(size), &values, |b, values| {
            b.iter(|| {
                let mut builder = StringBuilder::new();
                builder.append_join(black_box(values.clone())).unwrap();
                builder.into_string()
            })
        });
    }
    group.finish();
}

fn benchmark_byte_mode_join(c: &mut Criterion) {
    let mut group = c.benchmark_group("byte_mode_join");

    for size in [10, 50, 100, 500].iter() {
        let codes: Vec<u8> = (0..*size).map(|i| (i % 256) as u8).collect();

        group.bench_with_input(BenchmarkId::from_parameter(size), &codes, |b, codes| {
            b.iter(|| {
                let mut builder = StringBuilder::new();
                builder
                    .append_join_with(black_box(codes.clone()), "", NumberMode::Byte)
                    .unwrap();
                builder.into_string()
            })
        });
    }
    group.finish();
}

fn benchmark_insert_middle(c: &mut Criterion) {
    let mut group = c.benchmark_group("insert_middle");

    for size in [10, 100, 1000].iter() {
        let base = "x".repeat(*size);

        group.bench_with_input(BenchmarkId::from_parameter(size), &base, |b, base| {
            b.iter(|| {
                let mut builder = StringBuilder::from(base.as_str());
                builder.insert(black_box(base.len() / 2), "y").unwrap();
                builder.into_string()
            })
        });
    }
    group.finish();
}

fn benchmark_remove_middle(c: &mut Criterion) {
    let mut group = c.benchmark_group("remove_middle");

    for size in [10, 100, 1000].iter() {
        let base = "x".repeat(*size);

        group.bench_with_input(BenchmarkId::from_parameter(size), &base, |b, base| {
            b.iter(|| {
                let mut builder = StringBuilder::from(base.as_str());
                builder
                    .remove(black_box(base.len() / 4), base.len() / 2)
                    .unwrap();
                builder.into_string()
            })
        });
    }
    group.finish();
}

fn benchmark_capacity_guard(c: &mut Criterion) {
    let mut group = c.benchmark_group("capacity_guard");

    group.bench_function("unbounded", |b| {
        b.iter(|| {
            let mut builder = StringBuilder::new();
            for _ in 0..64 {
                builder.append(black_box("chunk ")).unwrap();
            }
            builder.into_string()
        })
    });

    group.bench_function("bounded", |b| {
        b.iter(|| {
            let mut builder = StringBuilder::with_max_capacity(64 * 6);
            for _ in 0..64 {
                builder.append(black_box("chunk ")).unwrap();
            }
            builder.into_string()
        })
    });

    group.finish();
}

fn benchmark_coerce(c: &mut Criterion) {
    let mut group = c.benchmark_group("coerce");

    let number = Value::from(1_234_567);
    let array = Value::from((0..100).collect::<Vec<i32>>());
    let nested = Value::from(StringBuilder::from("content of a nested builder"));

    group.bench_function("number", |b| {
        b.iter(|| coerce(black_box(&number), NumberMode::Decimal))
    });

    group.bench_function("array_100", |b| {
        b.iter(|| coerce(black_box(&array), NumberMode::Decimal))
    });

    group.bench_function("builder", |b| {
        b.iter(|| coerce(black_box(&nested), NumberMode::Decimal))
    });

    group.finish();
}

fn benchmark_to_value(c: &mut Criterion) {
    let event = Event {
        id: 123,
        kind: "login".to_string(),
        message: "user signed in".to_string(),
        handled: true,
    };

    c.bench_function("to_value_struct", |b| {
        b.iter(|| to_value(black_box(&event)))
    });

    let events: Vec<Event> = (0..100)
        .map(|i| Event {
            id: i,
            kind: format!("kind{}", i),
            message: format!("event number {}", i),
            handled: i % 2 == 0,
        })
        .collect();

    c.bench_function("to_value_struct_array", |b| {
        b.iter(|| to_value(black_box(&events)))
    });
}

criterion_group!(
    benches,
    benchmark_append_strings,
    benchmark_append_mixed,
    benchmark_append_line,
    benchmark_append_join,
    benchmark_byte_mode_join,
    benchmark_insert_middle,
    benchmark_remove_middle,
    benchmark_capacity_guard,
    benchmark_coerce,
    benchmark_to_value
);
criterion_main!(benches);
