//! Performance benchmarks for fxta indicators.
//!
//! Run with: `cargo bench -p fxta`
//!
//! Windowed indicators re-sum their window at every position, so cost grows
//! with `n × period`; the sizes below cover a dashboard's typical history
//! lengths.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use fxta::batch::BatchProcessor;
use fxta::indicators::{atr, bollinger, cci, ema, ichimoku, macd, mfi, rsi, sar, sma, stochastic, vwap};
use fxta::plan::{DirectExecutor, IndicatorKind, IndicatorRequest, MemoizedExecutor};
use fxta::{Candle, EngineConfig};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Seeded random-walk candles around EUR/USD.
fn generate_candles(size: usize) -> Vec<Candle> {
    let mut rng = ChaCha8Rng::seed_from_u64(42);
    let mut price = 1.0850;
    (0..size)
        .map(|i| {
            let open = price;
            price += (rng.random::<f64>() - 0.5) * 0.002;
            let close = price;
            let high = open.max(close) + rng.random::<f64>() * 0.0005;
            let low = open.min(close) - rng.random::<f64>() * 0.0005;
            let volume = rng.random_range(1_000.0..11_000.0);
            Candle::new(i as i64 * 60, open, high, low, close, volume)
        })
        .collect()
}

fn columns(candles: &[Candle]) -> (Vec<f64>, Vec<f64>, Vec<f64>, Vec<f64>) {
    (
        candles.iter().map(|c| c.high).collect(),
        candles.iter().map(|c| c.low).collect(),
        candles.iter().map(|c| c.close).collect(),
        candles.iter().map(|c| c.volume).collect(),
    )
}

// Standard sizes for benchmarking
const SIZES: &[usize] = &[100, 1_000, 10_000];

fn bench_single_series(c: &mut Criterion) {
    let mut group = c.benchmark_group("single_series");
    for &size in SIZES {
        let (_, _, close, _) = columns(&generate_candles(size));
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::new("sma20", size), &close, |b, data| {
            b.iter(|| sma(black_box(data), black_box(20)));
        });
        group.bench_with_input(BenchmarkId::new("ema12", size), &close, |b, data| {
            b.iter(|| ema(black_box(data), black_box(12)));
        });
        group.bench_with_input(BenchmarkId::new("rsi14", size), &close, |b, data| {
            b.iter(|| rsi(black_box(data), black_box(14)));
        });
        group.bench_with_input(BenchmarkId::new("bollinger20", size), &close, |b, data| {
            b.iter(|| bollinger(black_box(data), black_box(20), black_box(2.0)));
        });
        group.bench_with_input(BenchmarkId::new("macd", size), &close, |b, data| {
            b.iter(|| macd(black_box(data), 12, 26, 9));
        });
    }
    group.finish();
}

fn bench_ohlcv(c: &mut Criterion) {
    let mut group = c.benchmark_group("ohlcv");
    for &size in SIZES {
        let data = columns(&generate_candles(size));
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::new("atr14", size), &data, |b, (h, l, c, _)| {
            b.iter(|| atr(black_box(h), black_box(l), black_box(c), 14));
        });
        group.bench_with_input(BenchmarkId::new("stochastic", size), &data, |b, (h, l, c, _)| {
            b.iter(|| stochastic(black_box(h), black_box(l), black_box(c), 14, 3));
        });
        group.bench_with_input(BenchmarkId::new("cci20", size), &data, |b, (h, l, c, _)| {
            b.iter(|| cci(black_box(h), black_box(l), black_box(c), 20));
        });
        group.bench_with_input(BenchmarkId::new("ichimoku", size), &data, |b, (h, l, c, _)| {
            b.iter(|| ichimoku(black_box(h), black_box(l), black_box(c), 9, 26, 52));
        });
        group.bench_with_input(BenchmarkId::new("sar", size), &data, |b, (h, l, _, _)| {
            b.iter(|| sar(black_box(h), black_box(l), 0.02, 0.02, 0.2));
        });
        group.bench_with_input(BenchmarkId::new("mfi14", size), &data, |b, (h, l, c, v)| {
            b.iter(|| mfi(black_box(h), black_box(l), black_box(c), black_box(v), 14));
        });
        group.bench_with_input(BenchmarkId::new("vwap", size), &data, |b, (h, l, c, v)| {
            b.iter(|| vwap(black_box(h), black_box(l), black_box(c), black_box(v)));
        });
    }
    group.finish();
}

fn bench_engine(c: &mut Criterion) {
    let requests: Vec<IndicatorRequest> = IndicatorKind::ALL
        .into_iter()
        .map(|kind| IndicatorRequest::new(kind.id()))
        .collect();

    let mut group = c.benchmark_group("engine_all_indicators");
    for &size in SIZES {
        let candles = generate_candles(size);
        group.throughput(Throughput::Elements(size as u64));

        let direct = DirectExecutor::new(EngineConfig::default());
        group.bench_with_input(BenchmarkId::new("direct", size), &candles, |b, candles| {
            b.iter(|| direct.execute(black_box(candles), &requests));
        });

        let batch = BatchProcessor::new(EngineConfig::default());
        group.bench_with_input(BenchmarkId::new("batch", size), &candles, |b, candles| {
            b.iter(|| batch.execute(black_box(candles), &requests));
        });

        let mut memo = MemoizedExecutor::new(EngineConfig::default());
        group.bench_with_input(BenchmarkId::new("memoized_hit", size), &candles, |b, candles| {
            b.iter(|| memo.execute(black_box(candles), &requests).map(|set| set.len()));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_single_series, bench_ohlcv, bench_engine);
criterion_main!(benches);
