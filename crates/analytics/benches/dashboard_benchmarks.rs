use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use smartstock_analytics::{Dashboard, SeriesWindow, predict_demand, sales_performance};
use smartstock_products::{Month, Product, ProductDraft};

/// Deterministic catalog: product `i` sells in `i % 12 + 1` months.
fn catalog(size: usize) -> Vec<Product> {
    (0..size)
        .map(|i| {
            let mut draft = ProductDraft::new(format!("Item {i}")).with_price(1.5, "USD");
            for (m, month) in Month::ALL.iter().enumerate().take(i % 12 + 1) {
                draft = draft.with_sales(month.name(), ((i * 31 + m * 7) % 500) as i64);
            }
            Product::new(draft).expect("valid bench product")
        })
        .collect()
}

fn bench_forecast(c: &mut Criterion) {
    let products = catalog(1_000);
    let mut group = c.benchmark_group("predict_demand");
    group.throughput(Throughput::Elements(products.len() as u64));
    group.bench_function("1000_products", |b| {
        b.iter(|| {
            for p in &products {
                black_box(predict_demand(black_box(p)));
            }
        })
    });
    group.finish();
}

fn bench_series(c: &mut Criterion) {
    let products = catalog(10_000);
    let mut group = c.benchmark_group("sales_performance");
    for window in [SeriesWindow::OneMonth, SeriesWindow::ThreeMonths, SeriesWindow::TwelveMonths] {
        group.bench_with_input(BenchmarkId::from_parameter(window.months()), &window, |b, &w| {
            b.iter(|| black_box(sales_performance(black_box(&products), w, Month::November)))
        });
    }
    group.finish();
}

fn bench_dashboard(c: &mut Criterion) {
    let mut group = c.benchmark_group("dashboard");
    for size in [100usize, 1_000, 10_000] {
        let products = catalog(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &products, |b, products| {
            b.iter(|| black_box(Dashboard::build(products, SeriesWindow::ThreeMonths, Month::March, 5)))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_forecast, bench_series, bench_dashboard);
criterion_main!(benches);
