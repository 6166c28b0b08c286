use criterion::{black_box, criterion_group, criterion_main, Criterion};
use spotdiff_diff::{compare, diff_lines, tokenize, tokenize_document};
use spotdiff_types::Document;

const CLAUSE: &str = "2.1. Стоимость услуг составляет 5 000 000 (Пять миллионов) тенге, \
                      пеня 0,1% за каждый день просрочки с 01.09.2025.";

fn document(lines: usize, changed_every: usize) -> Document {
    let text: Vec<String> = (0..lines)
        .map(|i| {
            if changed_every > 0 && i % changed_every == 0 {
                CLAUSE.replace("0,1%", "0,2%")
            } else {
                CLAUSE.to_owned()
            }
        })
        .collect();
    Document::from_text(&text.join("\n"))
}

fn bench_tokenize(c: &mut Criterion) {
    c.bench_function("tokenize_line", |b| b.iter(|| tokenize(black_box(CLAUSE))));

    let doc = document(5_000, 0);
    c.bench_function("tokenize_document_5k", |b| {
        b.iter(|| tokenize_document(black_box(&doc)))
    });
}

fn bench_diff(c: &mut Criterion) {
    let a = document(5_000, 0);
    let b = document(5_000, 7);
    let ta = tokenize_document(&a);
    let tb = tokenize_document(&b);

    c.bench_function("diff_lines_5k", |bench| {
        bench.iter(|| diff_lines(black_box(&ta), black_box(&tb)))
    });
    c.bench_function("compare_5k", |bench| {
        bench.iter(|| compare(black_box(&a), black_box(&b)))
    });
}

criterion_group!(benches, bench_tokenize, bench_diff);
criterion_main!(benches);
