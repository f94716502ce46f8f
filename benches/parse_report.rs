use criterion::{Criterion, black_box, criterion_group, criterion_main};
use nifty_cards::{compose_record, parse};

fn build_report(blocks: usize) -> String {
    let mut text = String::from("# Nifty 50 Technical Analysis Report\n\n| Stock Analysis | Technical Chart |\n|---|---|\n");
    for i in 0..blocks {
        text.push_str(&format!(
            "| **SYM{i}.NS**<br>\nSignal: Strong Buy<br>\nPrice: ₹1,{i:03}.50 (+0.{i}%)<br>\nRSI: {}<br>\nMACD: -1.250<br>\nSignal Strength: 1.10<br>\nSMA20: ₹1,000.00<br>\nSMA50: ₹990.00<br>\nVolume: Normal (1.01x) | ![chart](charts/SYM{i}.png) |\n",
            i % 100
        ));
    }
    text
}

fn bench_parse(c: &mut Criterion) {
    let report = build_report(50);
    c.bench_function("parse_nifty50_report", |b| {
        b.iter(|| parse(black_box(&report)))
    });
    c.bench_function("parse_and_compose", |b| {
        b.iter(|| {
            parse(black_box(&report))
                .iter()
                .map(compose_record)
                .count()
        })
    });
}

criterion_group!(benches, bench_parse);
criterion_main!(benches);
