//! Seeded synthetic candle feed.
//!
//! Produces a random walk with forex-like bars: each candle opens at the
//! previous close and moves by at most 0.1% of the starting price, with
//! wicks of up to another 0.1% beyond the body. Prices are rounded to five
//! decimals and volume is a whole number in `[1000, 11000)`.
//!
//! The same settings always produce the same candles, so fixtures and demos
//! are reproducible.

use fxta::Candle;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::csv_writer::round_to;

/// Starting prices for the pairs the dashboard lists.
const PAIR_PRICES: &[(&str, f64)] = &[
    ("EUR/USD", 1.0850),
    ("GBP/USD", 1.2650),
    ("USD/JPY", 149.50),
    ("USD/CHF", 0.8850),
    ("AUD/USD", 0.6550),
    ("USD/CAD", 1.3650),
    ("NZD/USD", 0.6050),
    ("EUR/GBP", 0.8580),
    ("EUR/JPY", 162.20),
    ("GBP/JPY", 189.10),
    ("XAU/USD", 2050.00),
    ("XAG/USD", 24.50),
];

/// Starting price for a currency pair.
///
/// Accepts `EUR/USD`, `eurusd` or `EUR-USD`. Unknown pairs start at 1.0.
#[must_use]
pub fn pair_base_price(pair: &str) -> f64 {
    let wanted: String = pair
        .chars()
        .filter(char::is_ascii_alphabetic)
        .map(|c| c.to_ascii_uppercase())
        .collect();
    PAIR_PRICES
        .iter()
        .find(|(name, _)| name.replace('/', "") == wanted)
        .map_or(1.0, |&(_, price)| price)
}

/// Known pair names in display order.
pub fn known_pairs() -> impl Iterator<Item = &'static str> {
    PAIR_PRICES.iter().map(|&(name, _)| name)
}

/// Feed parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeedSettings {
    /// RNG seed.
    pub seed: u64,
    /// First open price.
    pub base_price: f64,
    /// Time of the first candle, epoch seconds.
    pub start: i64,
    /// Seconds between candles.
    pub interval: i64,
}

impl Default for FeedSettings {
    fn default() -> Self {
        Self {
            seed: 42,
            base_price: 1.0850,
            start: 1_700_000_000,
            interval: 60,
        }
    }
}

/// Endless iterator of synthetic candles.
#[derive(Debug, Clone)]
pub struct MockFeed {
    rng: ChaCha8Rng,
    volatility: f64,
    price: f64,
    time: i64,
    interval: i64,
}

impl MockFeed {
    /// Creates a feed from `settings`.
    #[must_use]
    pub fn new(settings: FeedSettings) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(settings.seed),
            volatility: settings.base_price * 0.001,
            price: settings.base_price,
            time: settings.start,
            interval: settings.interval,
        }
    }

    /// Collects the next `count` candles.
    pub fn take_candles(&mut self, count: usize) -> Vec<Candle> {
        self.by_ref().take(count).collect()
    }
}

impl Iterator for MockFeed {
    type Item = Candle;

    fn next(&mut self) -> Option<Candle> {
        let vol = self.volatility;
        let open = self.price;
        let change = (self.rng.random::<f64>() - 0.5) * vol * 2.0;
        let high = open + change.abs() + self.rng.random::<f64>() * vol;
        let low = open - change.abs() - self.rng.random::<f64>() * vol;
        let close = open + change;
        let volume = f64::from(self.rng.random_range(1_000_u32..11_000));

        let candle = Candle::new(
            self.time,
            round_to(open, 5),
            round_to(high, 5),
            round_to(low, 5),
            round_to(close, 5),
            volume,
        );
        self.price = close;
        self.time = self.time.saturating_add(self.interval);
        Some(candle)
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::all, clippy::pedantic, clippy::nursery)]
    use super::*;
    use fxta::candle::validate_candles;

    #[test]
    fn test_pair_lookup() {
        assert_eq!(pair_base_price("EUR/USD"), 1.0850);
        assert_eq!(pair_base_price("usdjpy"), 149.50);
        assert_eq!(pair_base_price("xau-usd"), 2050.00);
        assert_eq!(pair_base_price("BTC/USD"), 1.0);
        assert_eq!(known_pairs().count(), 12);
    }

    #[test]
    fn test_deterministic() {
        let settings = FeedSettings::default();
        let a = MockFeed::new(settings).take_candles(50);
        let b = MockFeed::new(settings).take_candles(50);
        assert_eq!(a, b);

        let c = MockFeed::new(FeedSettings { seed: 7, ..settings }).take_candles(50);
        assert_ne!(a, c);
    }

    #[test]
    fn test_candles_are_valid() {
        for pair in known_pairs() {
            let settings = FeedSettings {
                base_price: pair_base_price(pair),
                ..FeedSettings::default()
            };
            let candles = MockFeed::new(settings).take_candles(500);
            assert!(validate_candles(&candles).is_ok(), "{pair}");
        }
    }

    #[test]
    fn test_bar_shape() {
        let settings = FeedSettings::default();
        let candles = MockFeed::new(settings).take_candles(200);
        let bound = settings.base_price * 0.002 + 1e-5;

        assert_eq!(candles[0].open, 1.085);
        for (i, c) in candles.iter().enumerate() {
            assert_eq!(c.time, settings.start + i as i64 * 60);
            assert!(c.high - c.low <= 2.0 * bound);
            assert!((1_000.0..11_000.0).contains(&c.volume));
            assert_eq!(c.volume.fract(), 0.0);
            assert_eq!(round_to(c.close, 5), c.close);
        }
        for pair in candles.windows(2) {
            // opens at the previous close, up to rounding
            assert!((pair[1].open - pair[0].close).abs() < 1e-9);
        }
    }
}
