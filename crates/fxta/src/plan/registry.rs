//! Indicator registry: identifier lookup and parameter overrides.
//!
//! The registry maps request identifiers to configured [`IndicatorSpec`]s.
//! [`Registry::standard`] holds the canonical identifiers with their default
//! parameters plus the dashboard's legacy aliases:
//!
//! | Alias | Resolves to |
//! |-------|-------------|
//! | `MA5`, `MA10`, `MA20`, `MA50` | SMA with that period |
//! | `EMA12`, `EMA26` | EMA with that period |
//! | `BB` | Bollinger Bands (20, 2) |
//!
//! # Example
//!
//! ```
//! use std::collections::BTreeMap;
//!
//! use fxta::plan::{IndicatorKind, Registry};
//!
//! let registry = Registry::standard();
//! assert!(registry.contains("MA20"));
//! assert_eq!(registry.get("MA20"), registry.resolve("sma", &BTreeMap::new()).unwrap().as_ref());
//!
//! let mut overrides = BTreeMap::new();
//! overrides.insert("period".to_string(), 9.0);
//! let spec = registry.resolve("ema", &overrides).unwrap().unwrap();
//! assert_eq!(spec.kind(), IndicatorKind::Ema);
//! assert_eq!(spec.params(), vec![("period", 9.0)]);
//!
//! // Unknown identifiers resolve to nothing rather than failing.
//! assert!(registry.resolve("ichimoku_cloud", &BTreeMap::new()).unwrap().is_none());
//! ```

use std::collections::{BTreeMap, HashMap};

use serde::Serialize;

use super::spec::{Category, IndicatorKind, IndicatorSpec, Pane};
use crate::error::Result;
use crate::indicators::{Bollinger, Ema, Sma};

/// Registry for indicator specifications.
///
/// Identifiers are case-sensitive. The registry is immutable once built and
/// can be shared freely between threads.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    /// Map from identifier to specification
    indicators: HashMap<String, IndicatorSpec>,
}

impl Registry {
    /// Creates a new empty registry.
    ///
    /// # Example
    ///
    /// ```
    /// use fxta::plan::Registry;
    ///
    /// let registry = Registry::new();
    /// assert!(registry.is_empty());
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates the registry the dashboard uses: every canonical identifier
    /// with default parameters, plus the legacy aliases.
    #[must_use]
    pub fn standard() -> Self {
        let mut registry = Self {
            indicators: HashMap::with_capacity(IndicatorKind::ALL.len() + 7),
        };
        for kind in IndicatorKind::ALL {
            registry.register(kind.id(), IndicatorSpec::default_for(kind));
        }
        for period in [5, 10, 20, 50] {
            registry.register(format!("MA{period}"), IndicatorSpec::Sma(Sma::new().period(period)));
        }
        for period in [12, 26] {
            registry.register(format!("EMA{period}"), IndicatorSpec::Ema(Ema::new().period(period)));
        }
        registry.register("BB", IndicatorSpec::Bollinger(Bollinger::new()));
        registry
    }

    /// Registers a specification under `id`.
    ///
    /// Returns the specification previously registered under the same id.
    ///
    /// # Example
    ///
    /// ```
    /// use fxta::indicators::Sma;
    /// use fxta::plan::{IndicatorSpec, Registry};
    ///
    /// let mut registry = Registry::new();
    /// assert!(registry.register("MA100", IndicatorSpec::Sma(Sma::new().period(100))).is_none());
    /// assert!(registry.register("MA100", IndicatorSpec::Sma(Sma::new().period(99))).is_some());
    /// ```
    pub fn register(&mut self, id: impl Into<String>, spec: IndicatorSpec) -> Option<IndicatorSpec> {
        self.indicators.insert(id.into(), spec)
    }

    /// Removes an identifier from the registry.
    pub fn unregister(&mut self, id: &str) -> Option<IndicatorSpec> {
        self.indicators.remove(id)
    }

    /// Gets the specification registered under `id`.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&IndicatorSpec> {
        self.indicators.get(id)
    }

    /// Checks whether `id` is registered.
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.indicators.contains_key(id)
    }

    /// Returns the number of registered identifiers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.indicators.len()
    }

    /// Returns true if nothing is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.indicators.is_empty()
    }

    /// Registered identifiers in sorted order.
    #[must_use]
    pub fn ids(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = self.indicators.keys().map(String::as_str).collect();
        ids.sort_unstable();
        ids
    }

    /// Identifiers other than the canonical one that resolve to `kind`.
    #[must_use]
    pub fn aliases_of(&self, kind: IndicatorKind) -> Vec<&str> {
        let mut aliases: Vec<&str> = self
            .indicators
            .iter()
            .filter(|(id, spec)| spec.kind() == kind && id.as_str() != kind.id())
            .map(|(id, _)| id.as_str())
            .collect();
        aliases.sort_unstable();
        aliases
    }

    /// Resolves an identifier and applies parameter overrides.
    ///
    /// Returns `Ok(None)` for identifiers that are not registered.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidParameter` if an override names a parameter the
    /// indicator does not have or carries an invalid value.
    pub fn resolve(&self, id: &str, overrides: &BTreeMap<String, f64>) -> Result<Option<IndicatorSpec>> {
        let Some(base) = self.get(id) else {
            return Ok(None);
        };
        let spec = overrides
            .iter()
            .try_fold(*base, |spec, (name, &value)| spec.with_param(name, value))?;
        Ok(Some(spec))
    }
}

/// One catalog row describing an indicator the engine offers.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CatalogEntry {
    /// Canonical identifier.
    pub id: &'static str,
    /// Display name.
    pub name: &'static str,
    /// One-line description.
    pub description: &'static str,
    /// Drawing pane.
    pub pane: Pane,
    /// Catalog grouping.
    pub category: Category,
    /// Decimal places the dashboard displays.
    pub precision: usize,
    /// Output component names.
    pub components: &'static [&'static str],
    /// Default parameters, in display order.
    pub defaults: Vec<(&'static str, f64)>,
    /// Other identifiers that resolve to this kind.
    pub aliases: Vec<String>,
}

/// Builds the catalog of every indicator kind, in catalog order, with the
/// aliases known to `registry`.
#[must_use]
pub fn catalog(registry: &Registry) -> Vec<CatalogEntry> {
    IndicatorKind::ALL
        .into_iter()
        .map(|kind| CatalogEntry {
            id: kind.id(),
            name: kind.name(),
            description: kind.description(),
            pane: kind.pane(),
            category: kind.category(),
            precision: kind.display_precision(),
            components: kind.component_names(),
            defaults: IndicatorSpec::default_for(kind).params(),
            aliases: registry.aliases_of(kind).into_iter().map(str::to_string).collect(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    #![allow(clippy::all, clippy::pedantic, clippy::nursery)]
    use super::*;
    use crate::error::Error;

    fn overrides(pairs: &[(&str, f64)]) -> BTreeMap<String, f64> {
        pairs.iter().map(|(k, v)| (k.to_string(), *v)).collect()
    }

    // ==================== Registration ====================

    #[test]
    fn test_new_registry_is_empty() {
        let registry = Registry::new();
        assert!(registry.is_empty());
        assert_eq!(registry.len(), 0);
        assert!(registry.get("sma").is_none());
    }

    #[test]
    fn test_register_and_unregister() {
        let mut registry = Registry::new();
        registry.register("fast", IndicatorSpec::Ema(Ema::new().period(5)));
        assert!(registry.contains("fast"));
        assert_eq!(registry.len(), 1);

        let removed = registry.unregister("fast").unwrap();
        assert_eq!(removed.kind(), IndicatorKind::Ema);
        assert!(registry.is_empty());
        assert!(registry.unregister("fast").is_none());
    }

    // ==================== Standard Registry ====================

    #[test]
    fn test_standard_contains_canonical_ids() {
        let registry = Registry::standard();
        for kind in IndicatorKind::ALL {
            let spec = registry.get(kind.id()).unwrap();
            assert_eq!(*spec, IndicatorSpec::default_for(kind));
        }
        assert_eq!(registry.len(), 20 + 7);
    }

    #[test]
    fn test_aliases_match_canonical_specs() {
        let registry = Registry::standard();
        let sma20 = registry.resolve("sma", &overrides(&[("period", 20.0)])).unwrap();
        assert_eq!(registry.get("MA20").copied(), sma20);

        let ema26 = registry.resolve("ema", &overrides(&[("period", 26.0)])).unwrap();
        assert_eq!(registry.get("EMA26").copied(), ema26);

        assert_eq!(registry.get("BB"), registry.get("bollinger"));
        assert_eq!(registry.get("MA5").unwrap().params(), vec![("period", 5.0)]);
    }

    #[test]
    fn test_identifiers_are_case_sensitive() {
        let registry = Registry::standard();
        assert!(!registry.contains("SMA"));
        assert!(!registry.contains("ma20"));
    }

    #[test]
    fn test_aliases_of() {
        let registry = Registry::standard();
        assert_eq!(registry.aliases_of(IndicatorKind::Sma), vec!["MA10", "MA20", "MA5", "MA50"]);
        assert_eq!(registry.aliases_of(IndicatorKind::Bollinger), vec!["BB"]);
        assert!(registry.aliases_of(IndicatorKind::Rsi).is_empty());
    }

    // ==================== Resolution ====================

    #[test]
    fn test_resolve_unknown_is_none() {
        let registry = Registry::standard();
        assert_eq!(registry.resolve("supertrend", &BTreeMap::new()).unwrap(), None);
        // Overrides are not checked for identifiers that do not resolve
        assert_eq!(registry.resolve("supertrend", &overrides(&[("x", 1.0)])).unwrap(), None);
    }

    #[test]
    fn test_resolve_alias_with_override() {
        let registry = Registry::standard();
        let spec = registry.resolve("MA20", &overrides(&[("period", 30.0)])).unwrap().unwrap();
        assert_eq!(spec, IndicatorSpec::Sma(Sma::new().period(30)));
    }

    #[test]
    fn test_resolve_multiple_overrides() {
        let registry = Registry::standard();
        let spec = registry
            .resolve("keltner", &overrides(&[("atr_period", 14.0), ("multiplier", 1.5)]))
            .unwrap()
            .unwrap();
        assert_eq!(
            spec.params(),
            vec![("ema_period", 20.0), ("atr_period", 14.0), ("multiplier", 1.5)]
        );
    }

    #[test]
    fn test_resolve_bad_override_fails() {
        let registry = Registry::standard();
        let err = registry.resolve("rsi", &overrides(&[("period", 0.0)])).unwrap_err();
        assert!(matches!(err, Error::InvalidParameter { .. }));
        let err = registry.resolve("vwap", &overrides(&[("period", 5.0)])).unwrap_err();
        assert!(matches!(err, Error::InvalidParameter { .. }));
    }

    // ==================== Catalog ====================

    #[test]
    fn test_catalog() {
        let registry = Registry::standard();
        let entries = catalog(&registry);
        assert_eq!(entries.len(), IndicatorKind::ALL.len());

        let bollinger = entries.iter().find(|e| e.id == "bollinger").unwrap();
        assert_eq!(bollinger.name, "Bollinger Bands");
        assert_eq!(bollinger.pane, Pane::Overlay);
        assert_eq!(bollinger.category, Category::Trend);
        assert_eq!(bollinger.defaults, vec![("period", 20.0), ("multiplier", 2.0)]);
        assert_eq!(bollinger.aliases, vec!["BB".to_string()]);

        let adl = entries.iter().find(|e| e.id == "adl").unwrap();
        assert_eq!(adl.precision, 0);
        assert!(adl.defaults.is_empty());
    }

    #[test]
    fn test_catalog_serializes() {
        let entries = catalog(&Registry::standard());
        let json = serde_json::to_value(&entries[0]).unwrap();
        assert_eq!(json["id"], "sma");
        assert_eq!(json["pane"], "overlay");
        assert_eq!(json["defaults"][0][0], "period");
    }
}
