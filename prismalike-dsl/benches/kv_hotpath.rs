use criterion::{criterion_group, criterion_main, Criterion};
use prismalike_dsl::{parse_block_str, pretty_print, round_trip, ParseResult};
use std::hint::black_box;

const DATASOURCE: &str = r#"
  /// Which database engine to talk to
  provider = "postgresql"
  url      = env("DATABASE_URL") // never commit the real one
  shadowDatabaseUrl = env( "SHADOW_URL" )

  pool_size = 12
  timeout   = 2.5
  relationMode = false /// keep foreign keys
}
"#;

fn bench_parse_block(c: &mut Criterion) {
    c.bench_function("kv/parse_datasource", |b| {
        b.iter(|| {
            let result = parse_block_str(black_box(DATASOURCE), "db", Vec::new());
            black_box(result.value().map(|block| block.lines.len()));
        });
    });
}

fn bench_round_trip(c: &mut Criterion) {
    let ParseResult::Success { value: block, .. } = parse_block_str(DATASOURCE, "db", Vec::new())
    else {
        panic!("bench fixture must parse");
    };

    c.bench_function("kv/pretty_print", |b| {
        b.iter(|| black_box(pretty_print(black_box(&block)).len()));
    });

    c.bench_function("kv/round_trip", |b| {
        b.iter(|| black_box(round_trip(black_box(&block)).is_success()));
    });
}

criterion_group!(benches, bench_parse_block, bench_round_trip);
criterion_main!(benches);
