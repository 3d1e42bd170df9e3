//! Standalone [`ParamStore`] implementation backed by atomic floats.
//!
//! [`AtomicParamStore`] keeps one bit-cast `AtomicU32` per parameter key.
//! The presentation thread writes through `set()`; an automation source (or
//! a second thread in tests) can do the same. Every accepted write fires
//! the store's [`ChangeHub`]. In a plugin build the host's parameter state
//! replaces this store behind the same trait.

use banda_core::{ParamDescriptor, ParamKey, descriptor, keys};
use banda_gui_core::{ChangeHub, ParamStore, Subscription};
use std::sync::atomic::{AtomicU32, Ordering};

/// Thread-safe keyed parameter storage for the preview shell.
pub struct AtomicParamStore {
    band_count: usize,
    values: Vec<AtomicU32>,
    descriptors: Vec<ParamDescriptor>,
    hub: ChangeHub,
}

impl AtomicParamStore {
    /// Build a store for `band_count` bands, every parameter at its
    /// descriptor default.
    pub fn new(band_count: usize) -> Self {
        let all = keys(band_count);
        let descriptors: Vec<ParamDescriptor> = all.iter().map(|&k| descriptor(k)).collect();
        let values = descriptors
            .iter()
            .map(|d| AtomicU32::new(d.default.to_bits()))
            .collect();
        Self {
            band_count,
            values,
            descriptors,
            hub: ChangeHub::new(),
        }
    }

    /// The store's notification hub, for wiring repaint hooks and external
    /// automation sources.
    pub fn hub(&self) -> &ChangeHub {
        &self.hub
    }

    /// Slot index for `key` in the canonical ordering of
    /// [`banda_core::keys`]; `None` for bands outside the configured count.
    fn slot(&self, key: ParamKey) -> Option<usize> {
        match key {
            ParamKey::Band { band, param } if band < self.band_count => {
                Some(band * banda_core::BandParam::ALL.len() + param.slot())
            }
            ParamKey::Band { .. } => None,
            ParamKey::Output => Some(self.band_count * banda_core::BandParam::ALL.len()),
        }
    }
}

impl ParamStore for AtomicParamStore {
    fn get(&self, key: ParamKey) -> f32 {
        self.slot(key)
            .map(|i| f32::from_bits(self.values[i].load(Ordering::Acquire)))
            .unwrap_or(0.0)
    }

    fn set(&self, key: ParamKey, value: f32) {
        if let Some(i) = self.slot(key) {
            let clamped = self.descriptors[i].clamp(value);
            self.values[i].store(clamped.to_bits(), Ordering::Release);
            self.hub.notify();
        }
    }

    fn subscribe(&self) -> Subscription {
        self.hub.subscribe()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use banda_core::{BandParam, FilterType};

    #[test]
    fn defaults_come_from_descriptors() {
        let store = AtomicParamStore::new(3);
        for key in keys(3) {
            assert_eq!(store.get(key), descriptor(key).default, "{}", key.id());
        }
    }

    #[test]
    fn set_clamps_to_descriptor_range() {
        let store = AtomicParamStore::new(3);
        let key = ParamKey::band(1, BandParam::Frequency);

        store.set(key, 5.0);
        assert_eq!(store.get(key), 20.0);

        store.set(key, 99_999.0);
        assert_eq!(store.get(key), 20_000.0);
    }

    #[test]
    fn set_notifies_subscribers() {
        let store = AtomicParamStore::new(3);
        let sub = store.subscribe();

        store.set(ParamKey::Output, -6.0);
        assert!(sub.drain());
        assert_eq!(store.get(ParamKey::Output), -6.0);
    }

    #[test]
    fn out_of_range_band_is_ignored() {
        let store = AtomicParamStore::new(3);
        let sub = store.subscribe();
        let key = ParamKey::band(99, BandParam::Gain);

        assert_eq!(store.get(key), 0.0);
        store.set(key, 12.0);
        assert!(!sub.drain(), "rejected writes do not notify");
    }

    #[test]
    fn filter_type_survives_the_round_trip() {
        let store = AtomicParamStore::new(3);
        let key = ParamKey::band(2, BandParam::Type);

        store.set(key, FilterType::Notch.index() as f32);
        assert_eq!(
            FilterType::from_index(store.get(key) as usize),
            Some(FilterType::Notch)
        );
    }
}
