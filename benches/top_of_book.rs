//! Benchmarks comparing the two store representations.
//!
//! The flat store pays O(m log m) on every top-of-book query; the sorted
//! store pays a linear shift on every insert and reads the top as a
//! prefix copy. These benches measure both sides of that trade-off.
//!
//! ## Running Benchmarks
//!
//! ```bash
//! # Run all benchmarks
//! cargo bench
//!
//! # Run specific benchmark
//! cargo bench -- top_of_book
//! ```
//!
//! Results are saved to `target/criterion/` with HTML reports.

use criterion::{
    black_box, criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion, Throughput,
};

use depthbook::{Book, FlatBook, Order, Side, SortedBook};

// ============================================================================
// HELPER FUNCTIONS - Deterministic order generation
// ============================================================================

/// Generate a deterministic order batch. Same seed = same orders.
fn generate_orders(count: usize, seed: u64) -> Vec<Order> {
    use rand::{Rng, SeedableRng};
    use rand_chacha::ChaCha8Rng;

    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut orders = Vec::with_capacity(count);

    for _ in 0..count {
        // Price 50.00000000 - 200.00000000 in fixed-point
        let price: u64 = rng.gen_range(5_000..=20_000) * 1_000_000;
        let volume: u64 = rng.gen_range(1..=1_000);
        let side = if rng.gen_bool(0.5) { Side::Buy } else { Side::Sell };
        orders.push(Order::new(price, volume, side));
    }

    orders
}

fn populate<B: Book>(book: &mut B, orders: &[Order]) {
    for order in orders {
        book.insert(*order);
    }
}

// ============================================================================
// BENCHMARK: Top-of-book query cost vs book size
// ============================================================================
// The flat store re-sorts the whole collection per query; the sorted
// store copies a 5-element prefix regardless of size.

fn bench_top_of_book(c: &mut Criterion) {
    let mut group = c.benchmark_group("top_of_book");

    for size in [1_000, 10_000, 50_000] {
        let orders = generate_orders(size, 42);

        let mut flat = FlatBook::with_capacity(size);
        populate(&mut flat, &orders);

        let mut sorted = SortedBook::with_capacity(size);
        populate(&mut sorted, &orders);

        group.bench_with_input(BenchmarkId::new("flat", size), &flat, |b, book| {
            b.iter(|| {
                let bids = book.top(Side::Buy, 5);
                let asks = book.top(Side::Sell, 5);
                black_box((bids, asks))
            });
        });

        group.bench_with_input(BenchmarkId::new("sorted", size), &sorted, |b, book| {
            b.iter(|| {
                let bids = book.top(Side::Buy, 5);
                let asks = book.top(Side::Sell, 5);
                black_box((bids, asks))
            });
        });
    }

    group.finish();
}

// ============================================================================
// BENCHMARK: Insert cost vs book size
// ============================================================================
// The other side of the trade-off: the flat store appends, the sorted
// store locates and shifts.

fn bench_insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("insert");

    for size in [1_000, 10_000, 50_000] {
        let orders = generate_orders(size, 42);
        let incoming = Order::new(12_345_000_000, 7, Side::Buy);

        group.bench_with_input(BenchmarkId::new("flat", size), &size, |b, _| {
            let mut base = FlatBook::with_capacity(size + 1);
            populate(&mut base, &orders);
            let base = base.snapshot();

            b.iter_batched(
                || {
                    let mut book = FlatBook::with_capacity(size + 1);
                    book.replace(base.clone());
                    book
                },
                |mut book| {
                    book.insert(black_box(incoming));
                    book.len()
                },
                BatchSize::SmallInput,
            );
        });

        group.bench_with_input(BenchmarkId::new("sorted", size), &size, |b, _| {
            let mut base = SortedBook::with_capacity(size + 1);
            populate(&mut base, &orders);
            let base = base.snapshot();

            b.iter_batched(
                || {
                    let mut book = SortedBook::with_capacity(size + 1);
                    book.replace(base.clone());
                    book
                },
                |mut book| {
                    book.insert(black_box(incoming));
                    book.len()
                },
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

// ============================================================================
// BENCHMARK: Bulk load throughput
// ============================================================================

fn bench_bulk_insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("bulk_insert");

    for size in [1_000, 10_000] {
        let orders = generate_orders(size, 12345);
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("sorted", size), &orders, |b, orders| {
            b.iter_batched(
                || orders.clone(),
                |orders| {
                    let mut book = SortedBook::with_capacity(orders.len());
                    for order in orders {
                        book.insert(order);
                    }
                    black_box(book.len())
                },
                BatchSize::LargeInput,
            );
        });
    }

    group.finish();
}

// ============================================================================
// CRITERION ENTRY POINT
// ============================================================================

criterion_group!(benches, bench_top_of_book, bench_insert, bench_bulk_insert);
criterion_main!(benches);
