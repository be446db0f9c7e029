//! Integration tests for the public API.
//!
//! These exercise the engine the way the dashboard does: a candle array in,
//! identifiers with optional overrides, aligned series out.

#![allow(clippy::needless_range_loop)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::unreadable_literal)]
#![allow(clippy::float_cmp)]

mod common;

use common::{candles_from_closes, defined_after_prefix, sample_candles, undefined_prefix, EPSILON};
use fxta::plan::{catalog, Category};
use fxta::prelude::*;

fn all_requests() -> Vec<IndicatorRequest> {
    IndicatorKind::ALL
        .into_iter()
        .map(|kind| IndicatorRequest::new(kind.id()))
        .collect()
}

// ==================== Concrete Scenarios ====================

#[test]
fn test_sma_of_one_to_five() {
    let result = sma(&[1.0_f64, 2.0, 3.0, 4.0, 5.0], 3).unwrap();
    assert_eq!(result, vec![None, None, Some(2.0), Some(3.0), Some(4.0)]);
}

#[test]
fn test_obv_scenario() {
    let close = [10.0_f64, 11.0, 10.0, 10.0, 12.0];
    let volume = [100.0_f64; 5];
    let result = obv(&close, &volume).unwrap();
    assert_eq!(
        result,
        vec![Some(100.0), Some(200.0), Some(100.0), Some(100.0), Some(200.0)]
    );
}

#[test]
fn test_rsi_needs_period_plus_one_closes() {
    let closes: Vec<f64> = (0..14).map(|i| 1.0 + f64::from(i) * 0.01).collect();
    assert!(rsi(&closes, 14).unwrap().iter().all(Option::is_none));

    let mut longer = closes;
    longer.push(1.5);
    let result = rsi(&longer, 14).unwrap();
    assert_eq!(result[14], Some(100.0));
}

#[test]
fn test_ad_flat_candle_contributes_zero() {
    let candles = vec![
        Candle::new(0, 1.0, 2.0, 1.0, 2.0, 100.0),
        Candle::new(60, 1.5, 1.5, 1.5, 1.5, 9_999.0),
        Candle::new(120, 2.0, 2.0, 1.0, 1.0, 40.0),
    ];
    let set = DirectExecutor::default()
        .execute(&candles, &[IndicatorRequest::new("adl")])
        .unwrap();
    let line = set.get("adl").unwrap().output.as_line().unwrap();
    assert_eq!(line, &vec![Some(100.0), Some(100.0), Some(60.0)]);
}

// ==================== Alignment and Warm-up ====================

#[test]
fn test_every_indicator_is_aligned() {
    let candles = sample_candles(300);
    let set = DirectExecutor::default().execute(&candles, &all_requests()).unwrap();
    assert_eq!(set.len(), IndicatorKind::ALL.len());
    for computed in &set {
        for (name, series) in computed.output.components() {
            assert_eq!(series.len(), 300, "{}.{name}", computed.id);
            assert!(defined_after_prefix(series), "{}.{name}", computed.id);
        }
    }
}

#[test]
fn test_default_warm_up_lengths() {
    let candles = sample_candles(300);
    let set = DirectExecutor::default().execute(&candles, &all_requests()).unwrap();

    let expected: &[(&str, &str, usize)] = &[
        ("sma", "value", 19),
        ("ema", "value", 11),
        ("wma", "value", 13),
        ("bollinger", "upper", 19),
        ("bollinger", "lower", 19),
        ("vwap", "value", 0),
        ("keltner", "middle", 19),
        ("donchian", "upper", 19),
        ("ichimoku", "tenkan", 8),
        ("ichimoku", "kijun", 25),
        ("ichimoku", "senkou_a", 25),
        ("ichimoku", "senkou_b", 51),
        ("ichimoku", "chikou", 0),
        ("parabolic", "value", 2),
        ("rsi", "value", 14),
        ("macd", "macd", 25),
        ("macd", "signal", 33),
        ("macd", "histogram", 33),
        ("stochastic", "k", 13),
        ("stochastic", "d", 15),
        ("cci", "value", 19),
        ("williams", "value", 13),
        ("momentum", "value", 10),
        ("atr", "value", 13),
        ("mfi", "value", 14),
        ("obv", "value", 0),
        ("adl", "value", 0),
        ("stddev", "value", 19),
    ];

    for &(id, component, warm_up) in expected {
        let series = set.get(id).unwrap().output.component(component).unwrap();
        assert_eq!(undefined_prefix(series), warm_up, "{id}.{component}");
    }
}

#[test]
fn test_lookback_helpers_match_outputs() {
    let closes = common::sample_closes(120);
    assert_eq!(undefined_prefix(&sma(&closes, 7).unwrap()), sma_lookback(7));
    assert_eq!(undefined_prefix(&ema(&closes, 7).unwrap()), ema_lookback(7));
    assert_eq!(undefined_prefix(&wma(&closes, 7).unwrap()), wma_lookback(7));
    assert_eq!(undefined_prefix(&rsi(&closes, 7).unwrap()), rsi_lookback(7));
    assert_eq!(undefined_prefix(&mom(&closes, 7).unwrap()), mom_lookback(7));
    assert_eq!(undefined_prefix(&stddev(&closes, 7).unwrap()), stddev_lookback(7));
    let m = macd(&closes, 5, 13, 4).unwrap();
    assert_eq!(undefined_prefix(&m.macd_line), macd_line_lookback(5, 13));
    assert_eq!(undefined_prefix(&m.signal_line), macd_signal_lookback(5, 13, 4));
}

#[test]
fn test_empty_and_single_candle() {
    for n in [0, 1] {
        let candles = sample_candles(n);
        let set = DirectExecutor::default().execute(&candles, &all_requests()).unwrap();
        assert_eq!(set.len(), IndicatorKind::ALL.len());
        assert!(set.failures.is_empty());
        for computed in &set {
            for (_, series) in computed.output.components() {
                assert_eq!(series.len(), n);
            }
        }
    }
}

#[test]
fn test_obv_vwap_fully_defined() {
    let candles = sample_candles(50);
    let set = DirectExecutor::default()
        .execute(&candles, &[IndicatorRequest::new("obv"), IndicatorRequest::new("vwap")])
        .unwrap();
    for computed in &set {
        assert!(computed.output.as_line().unwrap().iter().all(Option::is_some));
    }
}

// ==================== Bounds ====================

#[test]
fn test_oscillator_bounds_on_sample_data() {
    let candles = sample_candles(400);
    let set = DirectExecutor::default()
        .execute(
            &candles,
            &[
                IndicatorRequest::new("rsi"),
                IndicatorRequest::new("mfi"),
                IndicatorRequest::new("stochastic"),
                IndicatorRequest::new("williams"),
            ],
        )
        .unwrap();

    for id in ["rsi", "mfi"] {
        for v in set.get(id).unwrap().output.as_line().unwrap().iter().flatten() {
            assert!((0.0..=100.0).contains(v), "{id} {v}");
        }
    }
    for (_, series) in set.get("stochastic").unwrap().output.components() {
        for v in series.iter().flatten() {
            assert!((0.0 - EPSILON..=100.0 + EPSILON).contains(v));
        }
    }
    for v in set.get("williams").unwrap().output.as_line().unwrap().iter().flatten() {
        assert!((-100.0..=0.0).contains(v));
    }
}

#[test]
fn test_band_ordering() {
    let candles = sample_candles(250);
    let set = DirectExecutor::default()
        .execute(
            &candles,
            &[
                IndicatorRequest::new("BB"),
                IndicatorRequest::new("keltner"),
                IndicatorRequest::new("donchian"),
            ],
        )
        .unwrap();
    for computed in &set {
        let upper = computed.output.component("upper").unwrap();
        let middle = computed.output.component("middle").unwrap();
        let lower = computed.output.component("lower").unwrap();
        for i in 0..candles.len() {
            if let (Some(u), Some(m), Some(l)) = (upper[i], middle[i], lower[i]) {
                assert!(u >= m && m >= l, "{} at {i}", computed.id);
            }
        }
    }
}

#[test]
fn test_donchian_tracks_monotone_trend() {
    let closes: Vec<f64> = (0..60).map(|i| 1.0 + f64::from(i) * 0.001).collect();
    let candles = candles_from_closes(&closes);
    let set = DirectExecutor::default()
        .execute(&candles, &[IndicatorRequest::new("donchian").with_param("period", 10.0)])
        .unwrap();
    let upper = set.get("donchian").unwrap().output.component("upper").unwrap();
    let lower = set.get("donchian").unwrap().output.component("lower").unwrap();
    let defined_upper: Vec<f64> = upper.iter().flatten().copied().collect();
    let defined_lower: Vec<f64> = lower.iter().flatten().copied().collect();
    assert!(defined_upper.windows(2).all(|w| w[1] >= w[0]));
    assert!(defined_lower.windows(2).all(|w| w[1] >= w[0]));
}

// ==================== Dispatch ====================

#[test]
fn test_aliases_equal_canonical_requests() {
    let candles = sample_candles(120);
    let pairs = [
        ("MA5", IndicatorRequest::new("sma").with_param("period", 5.0)),
        ("MA10", IndicatorRequest::new("sma").with_param("period", 10.0)),
        ("MA20", IndicatorRequest::new("sma").with_param("period", 20.0)),
        ("MA50", IndicatorRequest::new("sma").with_param("period", 50.0)),
        ("EMA12", IndicatorRequest::new("ema").with_param("period", 12.0)),
        ("EMA26", IndicatorRequest::new("ema").with_param("period", 26.0)),
        ("BB", IndicatorRequest::new("bollinger")),
    ];
    let executor = DirectExecutor::default();
    for (alias, canonical) in pairs {
        let set = executor
            .execute(&candles, &[IndicatorRequest::new(alias), canonical])
            .unwrap();
        assert_eq!(set.indicators[0].output, set.indicators[1].output, "{alias}");
        assert_eq!(set.indicators[0].pane, set.indicators[1].pane, "{alias}");
    }
}

#[test]
fn test_unknown_and_failing_requests() {
    let candles = sample_candles(60);
    let requests = vec![
        IndicatorRequest::new("sma"),
        IndicatorRequest::new("supertrend"),
        IndicatorRequest::new("ema").with_param("period", 1.5),
        IndicatorRequest::new("macd").with_param("histogram", 3.0),
        IndicatorRequest::new("rsi"),
    ];
    let set = DirectExecutor::default().execute(&candles, &requests).unwrap();
    let ids: Vec<&str> = set.iter().map(|c| c.id.as_str()).collect();
    assert_eq!(ids, ["sma", "rsi"]);
    let failed: Vec<&str> = set.failures.iter().map(|f| f.id.as_str()).collect();
    assert_eq!(failed, ["ema", "macd"]);
}

#[test]
fn test_largest_accepted_period_is_undefined() {
    let candles = sample_candles(10);
    let largest = f64::from(u32::MAX);
    let factors = ["multiplier", "af_start", "af_step", "af_max"];

    let requests: Vec<IndicatorRequest> = IndicatorKind::ALL
        .into_iter()
        .flat_map(|kind| {
            kind.param_names()
                .iter()
                .filter(|name| !factors.contains(*name))
                .map(move |name| IndicatorRequest::new(kind.id()).with_param(*name, largest))
        })
        .collect();
    let set = DirectExecutor::default().execute(&candles, &requests).unwrap();

    assert!(set.failures.is_empty(), "{:?}", set.failures);
    assert_eq!(set.len(), requests.len());
    for computed in &set {
        assert_eq!(computed.output.len(), 10);
        for (name, series) in computed.output.components() {
            if name != "chikou" {
                assert!(series.iter().all(Option::is_none), "{} {name}", computed.id);
            }
        }
    }
    for id in ["donchian", "stochastic", "williams", "ichimoku"] {
        assert!(set.iter().any(|c| c.id == id), "{id}");
    }
}

#[test]
fn test_panes() {
    let candles = sample_candles(80);
    let set = DirectExecutor::default().execute(&candles, &all_requests()).unwrap();
    let overlays: Vec<&str> = set.in_pane(Pane::Overlay).map(|c| c.id.as_str()).collect();
    assert_eq!(
        overlays,
        ["sma", "ema", "wma", "bollinger", "vwap", "keltner", "donchian", "ichimoku", "parabolic"]
    );
    assert_eq!(set.in_pane(Pane::Oscillator).count(), 11);
}

#[test]
fn test_malformed_candles() {
    let mut candles = sample_candles(20);
    candles[11].time = candles[10].time;
    let err = DirectExecutor::default()
        .execute(&candles, &[IndicatorRequest::new("sma")])
        .unwrap_err();
    assert!(matches!(err, Error::MalformedCandle { index: 11, .. }));
}

#[test]
fn test_typical_price_source() {
    let candles = sample_candles(40);
    let config = EngineConfig::default().with_price_source(PriceSource::Typical);
    let set = DirectExecutor::new(config)
        .execute(&candles, &[IndicatorRequest::new("sma").with_param("period", 1.0)])
        .unwrap();
    let line = set.get("sma").unwrap().output.as_line().unwrap();
    for (value, candle) in line.iter().zip(&candles) {
        assert!(fxta::approx_eq(value.unwrap(), candle.typical_price(), EPSILON));
    }
}

#[test]
fn test_memoized_and_batch_agree_with_direct() {
    let candles = sample_candles(200);
    let requests = all_requests();
    let direct = DirectExecutor::default().execute(&candles, &requests).unwrap();

    let mut memo = MemoizedExecutor::new(EngineConfig::default());
    assert_eq!(memo.execute(&candles, &requests).unwrap(), &direct);
    assert_eq!(memo.execute(&candles, &requests).unwrap(), &direct);

    let batch = BatchProcessor::default().execute(&candles, &requests).unwrap();
    assert_eq!(batch, direct);
}

#[test]
fn test_catalog_covers_every_kind() {
    let entries = catalog(&Registry::standard());
    let volume: Vec<&str> = entries
        .iter()
        .filter(|e| e.category == Category::Volume)
        .map(|e| e.id)
        .collect();
    assert_eq!(volume, ["obv", "adl"]);
    assert!(entries.iter().all(|e| e.components == IndicatorKind::from_id(e.id).unwrap().component_names()));
}

// ==================== Generic Element Types ====================

#[test]
fn test_f32_indicators() {
    let closes: Vec<f32> = (0..30).map(|i| 1.0 + i as f32 * 0.01).collect();
    let result = sma(&closes, 5).unwrap();
    assert_eq!(result.len(), 30);
    assert!((result[4].unwrap() - 1.02).abs() < 1e-5);
    let bands = bollinger(&closes, 5, 2.0_f32).unwrap();
    assert!(bands.upper[10] >= bands.lower[10]);
}
