use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use structmap::{names, to_map, MapOptions, Record};

#[derive(Record, Clone)]
struct User {
    id: u32,
    name: String,
    email: String,
    active: bool,
}

#[derive(Record, Clone)]
struct NestedData {
    id: u32,
    metadata: Metadata,
    tags: Vec<String>,
}

#[derive(Record, Clone)]
struct Metadata {
    #[tags(structmap = "created_at")]
    created: String,
    #[tags(structmap = "updated_at")]
    updated: String,
    #[tags(structmap = ",omitempty")]
    version: u32,
}

#[derive(Record, Clone)]
struct Server {
    name: String,
    addr: String,
    users: Vec<User>,
}

fn benchmark_expand_simple(c: &mut Criterion) {
    let user = User {
        id: 123,
        name: "Alice".to_string(),
        email: "alice@example.com".to_string(),
        active: true,
    };

    c.bench_function("expand_simple_record", |b| {
        b.iter(|| to_map(black_box(&user)))
    });
}

fn benchmark_expand_nested(c: &mut Criterion) {
    let data = NestedData {
        id: 1,
        metadata: Metadata {
            created: "2024-01-01".to_string(),
            updated: "2024-06-01".to_string(),
            version: 3,
        },
        tags: vec!["a".to_string(), "b".to_string(), "c".to_string()],
    };

    c.bench_function("expand_nested_record", |b| {
        b.iter(|| to_map(black_box(&data)))
    });
}

fn benchmark_expand_sequence(c: &mut Criterion) {
    let mut group = c.benchmark_group("expand_sequence");

    for size in [10, 50, 100, 500].iter() {
        let server = Server {
            name: "web-1".to_string(),
            addr: "10.0.0.1:8080".to_string(),
            users: (0..*size)
                .map(|i| User {
                    id: i,
                    name: format!("user-{}", i),
                    email: format!("user-{}@example.com", i),
                    active: i % 2 == 0,
                })
                .collect(),
        };

        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| to_map(black_box(&server)))
        });
    }

    group.finish();
}

fn benchmark_names(c: &mut Criterion) {
    let user = User {
        id: 123,
        name: "Alice".to_string(),
        email: "alice@example.com".to_string(),
        active: true,
    };

    let options = MapOptions::default();
    c.bench_function("names", |b| {
        b.iter(|| names(black_box(&user), black_box(&options)))
    });
}

criterion_group!(
    benches,
    benchmark_expand_simple,
    benchmark_expand_nested,
    benchmark_expand_sequence,
    benchmark_names
);
criterion_main!(benches);
