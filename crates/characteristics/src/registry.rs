//! Name to characteristic lookup.

use std::{collections::BTreeMap, sync::Arc};

use charsort_traits::Characteristic;

use crate::VolatilityCharacteristic;

/// Registered characteristics, keyed by name.
#[derive(Debug, Clone, Default)]
pub struct CharacteristicRegistry {
    entries: BTreeMap<String, Arc<dyn Characteristic>>,
}

impl CharacteristicRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry holding the built-in characteristics (`vol`).
    #[must_use]
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register_default(VolatilityCharacteristic::new());
        registry
    }

    /// Register `characteristic` under `name`, returning any entry it replaces.
    pub fn register(
        &mut self,
        name: impl Into<String>,
        characteristic: Arc<dyn Characteristic>,
    ) -> Option<Arc<dyn Characteristic>> {
        self.entries.insert(name.into(), characteristic)
    }

    /// Register `characteristic` under its own name.
    pub fn register_default<C: Characteristic + 'static>(
        &mut self,
        characteristic: C,
    ) -> Option<Arc<dyn Characteristic>> {
        let name = characteristic.name().to_string();
        self.register(name, Arc::new(characteristic))
    }

    /// Look up a characteristic by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<Arc<dyn Characteristic>> {
        self.entries.get(name).cloned()
    }

    /// Whether `name` is registered.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Registered names in sorted order.
    #[must_use]
    pub fn names(&self) -> Vec<String> {
        self.entries.keys().cloned().collect()
    }

    /// Number of registered characteristics.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use charsort_traits::ConfigurableCharacteristic;
    use rstest::rstest;

    use super::*;
    use crate::VolatilityConfig;

    #[test]
    fn defaults_register_vol() {
        let registry = CharacteristicRegistry::with_defaults();
        assert_eq!(registry.names(), vec!["vol"]);
        assert_eq!(registry.get("vol").unwrap().name(), "vol");
    }

    #[rstest]
    #[case("")]
    #[case("beta")]
    #[case("VOL")]
    fn unknown_names_are_absent(#[case] name: &str) {
        let registry = CharacteristicRegistry::with_defaults();
        assert!(!registry.contains(name));
        assert!(registry.get(name).is_none());
    }

    #[test]
    fn register_under_alias() {
        let mut registry = CharacteristicRegistry::new();
        assert!(registry.is_empty());

        let vol = VolatilityCharacteristic::with_config(VolatilityConfig { min_observations: 15, ddof: 1 });
        assert!(registry.register("vol15", Arc::new(vol)).is_none());
        assert!(registry.register_default(VolatilityCharacteristic::new()).is_none());

        assert_eq!(registry.len(), 2);
        assert_eq!(registry.names(), vec!["vol", "vol15"]);
        assert!(registry.register_default(VolatilityCharacteristic::new()).is_some());
    }
}
