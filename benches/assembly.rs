//! Performance measurement for parsing, grid assembly, and pattern scanning

// Criterion macros generate undocumented functions
#![allow(missing_docs)]

use criterion::{Criterion, criterion_group, criterion_main};
use jigsawtile::algorithm::assembler::Assembler;
use jigsawtile::algorithm::merge::merge;
use jigsawtile::analysis::patterns::SearchPattern;
use jigsawtile::analysis::roughness::roughness;
use jigsawtile::io::parser::parse_tiles;
use std::hint::black_box;

const SAMPLE: &str = include_str!("../tests/data/sample.txt");

/// Measures the parse-and-assemble path through corner product
fn bench_parse_and_assemble(c: &mut Criterion) {
    c.bench_function("parse_and_assemble", |b| {
        b.iter(|| {
            parse_tiles(black_box(SAMPLE))
                .and_then(Assembler::new)
                .and_then(Assembler::solve)
                .map_or(0, |assembly| black_box(assembly.corner_product()))
        });
    });
}

/// Measures merging plus the eight-orientation pattern scan
fn bench_merge_and_scan(c: &mut Criterion) {
    let Ok(tiles) = parse_tiles(SAMPLE) else {
        return;
    };
    let Ok(assembly) = Assembler::new(tiles).and_then(Assembler::solve) else {
        return;
    };
    let pattern = SearchPattern::sea_monster();

    c.bench_function("merge_and_scan", |b| {
        b.iter(|| {
            let composite = merge(black_box(&assembly));
            black_box(roughness(&composite, &pattern))
        });
    });
}

criterion_group!(benches, bench_parse_and_assemble, bench_merge_and_scan);
criterion_main!(benches);
