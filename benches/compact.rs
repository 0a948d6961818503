//! Benchmarks for hosts-file domain extraction.

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};

use hosts_compact::hosts;

fn generate_hosts(lines: usize) -> String {
    let mut content = String::from("# synthetic blocklist\n127.0.0.1 localhost\n");
    for i in 0..lines {
        content.push_str(&format!(
            "0.0.0.0 ads{i}.example.com tracker{i}.example.net\n"
        ));
    }
    content
}

fn bench_collect_domains(c: &mut Criterion) {
    let mut group = c.benchmark_group("collect_domains");

    for size in &[100, 1_000, 10_000] {
        let content = generate_hosts(*size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &content, |b, content| {
            b.iter(|| hosts::collect_domains(black_box(content.as_bytes())).unwrap());
        });
    }

    group.finish();
}

criterion_group!(benches, bench_collect_domains);
criterion_main!(benches);
