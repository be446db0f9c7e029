//! Shared test utilities for fxta tests.

use fxta::Candle;

/// Standard epsilon for high-precision comparisons.
#[allow(dead_code)]
pub const EPSILON: f64 = 1e-10;

/// Looser epsilon for comparisons involving accumulated floating-point operations.
#[allow(dead_code)]
pub const LOOSE_EPSILON: f64 = 1e-6;

/// One-minute candles built from closes.
///
/// Each candle opens at the previous close and its high/low extend a fixed
/// amount past the body, so the OHLCV invariants hold.
#[allow(dead_code)]
pub fn candles_from_closes(closes: &[f64]) -> Vec<Candle> {
    closes
        .iter()
        .enumerate()
        .map(|(i, &close)| {
            let open = if i == 0 { close } else { closes[i - 1] };
            let high = open.max(close) + 0.0005;
            let low = open.min(close) - 0.0005;
            Candle::new(1_700_000_000 + i as i64 * 60, open, high, low, close, 1_000.0 + (i % 10) as f64 * 50.0)
        })
        .collect()
}

/// A deterministic EUR/USD-like close series with trend and oscillation.
#[allow(dead_code)]
pub fn sample_closes(n: usize) -> Vec<f64> {
    (0..n)
        .map(|i| {
            let t = i as f64;
            1.0850 + t * 0.00002 + (t * 0.17).sin() * 0.0015 + (t * 0.031).cos() * 0.0008
        })
        .collect()
}

/// `sample_closes(n)` as candles.
#[allow(dead_code)]
pub fn sample_candles(n: usize) -> Vec<Candle> {
    candles_from_closes(&sample_closes(n))
}

/// Number of leading `None` positions.
#[allow(dead_code)]
pub fn undefined_prefix(series: &[Option<f64>]) -> usize {
    series.iter().take_while(|v| v.is_none()).count()
}

/// True if every position after the undefined prefix is defined.
#[allow(dead_code)]
pub fn defined_after_prefix(series: &[Option<f64>]) -> bool {
    series.iter().skip(undefined_prefix(series)).all(Option::is_some)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixture_candles_are_valid() {
        assert!(fxta::candle::validate_candles(&sample_candles(500)).is_ok());
    }

    #[test]
    fn test_undefined_prefix() {
        assert_eq!(undefined_prefix(&[None, None, Some(1.0), None]), 2);
        assert!(!defined_after_prefix(&[None, Some(1.0), None]));
        assert!(defined_after_prefix(&[None, Some(1.0), Some(2.0)]));
    }
}
