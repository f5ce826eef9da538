use ckpe_ini::{IniDocument, parse_str, render};
use criterion::{Criterion, black_box, criterion_group, criterion_main};

fn sample(sections: usize, entries: usize) -> String {
    let mut text = String::new();
    for s in 0..sections {
        text.push_str(&format!("; section {s}\n[Section{s}]\n"));
        for e in 0..entries {
            text.push_str(&format!("; entry {e}\n  key{e} = {e} ; inline\n"));
        }
        text.push('\n');
    }
    text
}

fn parse_benchmark(c: &mut Criterion) {
    let text = sample(20, 50);
    c.bench_function("parser::parse_str (20x50)", |b| {
        b.iter(|| parse_str(black_box(&text)))
    });
}

fn render_benchmark(c: &mut Criterion) {
    let parsed = parse_str(&sample(20, 50));
    c.bench_function("writer::render (20x50)", |b| {
        b.iter(|| render(black_box(&parsed.lines), black_box(&parsed.sections)))
    });
}

fn diff_benchmark(c: &mut Criterion) {
    let mut doc = IniDocument::parse(&sample(20, 50));
    doc.set_value("Section10", "key25", "changed").unwrap();
    c.bench_function("document::diff (one edit)", |b| b.iter(|| black_box(&doc).diff()));
}

criterion_group!(benches, parse_benchmark, render_benchmark, diff_benchmark);
criterion_main!(benches);
