// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Criterion benchmarks for IPP Print-Job encoding in the quickprint-print
// crate.

use criterion::{Criterion, black_box, criterion_group, criterion_main};

use quickprint_core::types::{ColorMode, Orientation, PrintJobRequest, Sides};
use quickprint_print::encode_print_job;

/// Build a bench fixture; the document is empty because the encoder never
/// touches it.
fn request(job_name: &str, with_options: bool) -> PrintJobRequest {
    PrintJobRequest {
        document: Vec::new(),
        printer_host: "192.168.1.50".into(),
        job_name: job_name.into(),
        color_mode: with_options.then_some(ColorMode::Color),
        sides: with_options.then_some(Sides::TwoSidedLongEdge),
        orientation: with_options.then_some(Orientation::Landscape),
    }
}

fn bench_encode_print_job(c: &mut Criterion) {
    let minimal = request("report.pdf", false);
    c.bench_function("encode_print_job (no options)", |b| {
        b.iter(|| {
            let encoded = encode_print_job(black_box(&minimal)).unwrap();
            black_box(encoded);
        });
    });

    let full = request("report.pdf", true);
    c.bench_function("encode_print_job (all options)", |b| {
        b.iter(|| {
            let encoded = encode_print_job(black_box(&full)).unwrap();
            black_box(encoded);
        });
    });

    // Exercises the growable buffer well past its initial capacity.
    let long_name = request(&"n".repeat(60_000), true);
    c.bench_function("encode_print_job (60 KiB job name)", |b| {
        b.iter(|| {
            let encoded = encode_print_job(black_box(&long_name)).unwrap();
            black_box(encoded);
        });
    });
}

criterion_group!(benches, bench_encode_print_job);
criterion_main!(benches);
