use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use pyson::{from_str, to_string, Reader, Record, Value};

fn sample_records(count: usize) -> Vec<Record> {
    (0..count)
        .map(|i| match i % 4 {
            0 => Record::new(format!("int_{}", i), i as i64),
            1 => Record::new(format!("float_{}", i), i as f64 * 0.25),
            2 => Record::new(format!("str_{}", i), format!("value number {}", i)),
            _ => Record::new(
                format!("list_{}", i),
                vec!["alpha", "beta", "gamma", "delta"],
            ),
        })
        .collect()
}

fn benchmark_encode_line(c: &mut Criterion) {
    let record = Record::new("tags", vec!["red", "green", "blue", "cyan", "magenta"]);

    c.bench_function("encode_list_line", |b| b.iter(|| black_box(&record).to_line()));
}

fn benchmark_decode_line(c: &mut Criterion) {
    let line = "tags:list:red(*)green(*)blue(*)cyan(*)magenta";

    c.bench_function("decode_list_line", |b| {
        b.iter(|| Record::from_line(black_box(line)))
    });
}

fn benchmark_split_list(c: &mut Criterion) {
    let payload = vec!["element"; 64].join("(*)");

    c.bench_function("split_list_64", |b| {
        b.iter(|| Value::from_pyson_list(black_box(&payload)))
    });
}

fn benchmark_read_all(c: &mut Criterion) {
    let mut group = c.benchmark_group("read_all");

    for size in [10, 100, 1000].iter() {
        let text = to_string(&sample_records(*size)).unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(size), &text, |b, text| {
            b.iter(|| from_str(black_box(text)))
        });
    }

    group.finish();
}

fn benchmark_find_by_name(c: &mut Criterion) {
    let text = to_string(&sample_records(1000)).unwrap();

    c.bench_function("find_by_name_last", |b| {
        b.iter(|| {
            let mut reader = Reader::from_str(black_box(&text));
            reader.find_by_name("list_999")
        })
    });
}

criterion_group!(
    benches,
    benchmark_encode_line,
    benchmark_decode_line,
    benchmark_split_list,
    benchmark_read_all,
    benchmark_find_by_name
);
criterion_main!(benches);
