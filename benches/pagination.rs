//! Cover sheet pagination benchmarks
//!
//! Measures building and rendering a cover sheet onto the in-memory display
//! list as the items table grows across pages.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use taxsheet::{
    CoverSheet, DisplayList, HelveticaMetrics, InvoiceRecord, LineItem, Party, SheetConfig,
    render_cover_sheet,
};

fn record(items: usize) -> InvoiceRecord {
    let mut record = InvoiceRecord {
        supplier: Party {
            name: "Acme Components s.r.o.".to_string(),
            address: vec!["Industrial 12".to_string(), "602 00 Brno".to_string()],
            ..Default::default()
        },
        items: (1..=items)
            .map(|n| LineItem {
                code: format!("A-{:04}", n),
                description: format!(
                    "Component {} with a description long enough to wrap now and then",
                    n
                ),
                quantity: "2".to_string(),
                unit: "pcs".to_string(),
                unit_price: "50.00".to_string(),
                vat_rate: "21".to_string(),
                total: "100.00".to_string(),
            })
            .collect(),
        ..Default::default()
    };
    record.identification.number = "FV-2024/0815".to_string();
    record
}

fn benchmark_render_cover_sheet(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_cover_sheet");
    let config = SheetConfig::default();

    for item_count in [10, 100, 1000] {
        let record = record(item_count);
        group.bench_with_input(
            BenchmarkId::new("items", item_count),
            &item_count,
            |b, _| {
                b.iter(|| {
                    let mut surface = DisplayList::new(HelveticaMetrics);
                    let summary = render_cover_sheet(&record, &config, &mut surface)
                        .expect("Failed to render cover sheet");
                    black_box(summary.page_count())
                });
            },
        );
    }

    group.finish();
}

fn benchmark_build_only(c: &mut Criterion) {
    let config = SheetConfig::default();
    let record = record(100);
    c.bench_function("build_cover_sheet", |b| {
        b.iter(|| {
            let document = CoverSheet::build(&record, &config).expect("Failed to build layout");
            black_box(document.table().row_count())
        });
    });
}

criterion_group!(benches, benchmark_render_cover_sheet, benchmark_build_only);
criterion_main!(benches);
