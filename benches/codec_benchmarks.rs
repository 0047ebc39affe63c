// ABOUTME: Benchmark suite for the RP/TP codec hot paths
// ABOUTME: Measures inbound parse and outbound generate throughput

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use smspdu::builder::PduBuilder;
use smspdu::datatypes::OutboundRequest;
use smspdu::parser;

fn bench_parse(c: &mut Criterion) {
    // A 140-character message to a ten-digit destination, pre-generated so
    // the bench sees only the decode path.
    let request = OutboundRequest::new("6285777000", "1000", "a".repeat(140));
    let pdu = PduBuilder::new()
        .with_reference(0x42)
        .generate(&request)
        .unwrap()
        .into_string();

    c.bench_function("parse_140_chars", |b| {
        b.iter(|| parser::parse(black_box(&pdu)).unwrap())
    });
}

fn bench_generate(c: &mut Criterion) {
    let short = OutboundRequest::new("6285777000", "1000", "hi");
    let long = OutboundRequest::new("6285777000", "1000", "a".repeat(140));
    let builder = PduBuilder::new().with_reference(0x42);

    c.bench_function("generate_short", |b| {
        b.iter(|| builder.generate(black_box(&short)).unwrap())
    });
    c.bench_function("generate_140_chars", |b| {
        b.iter(|| builder.generate(black_box(&long)).unwrap())
    });
}

criterion_group!(benches, bench_parse, bench_generate);
criterion_main!(benches);
