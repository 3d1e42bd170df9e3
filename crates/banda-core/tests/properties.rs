//! Property tests for the parameter model.

use banda_core::{BandParam, FilterType, ParamKey, descriptor};
use proptest::prelude::*;

proptest! {
    #[test]
    fn frequency_normalize_round_trips(value in 20.0f32..20_000.0) {
        let desc = descriptor(ParamKey::band(0, BandParam::Frequency));
        let rt = desc.denormalize(desc.normalize(value));
        prop_assert!((rt - value).abs() / value < 1e-4, "round-trip {value} -> {rt}");
    }

    #[test]
    fn gain_normalize_round_trips(value in -24.0f32..24.0) {
        let desc = descriptor(ParamKey::band(0, BandParam::Gain));
        let rt = desc.denormalize(desc.normalize(value));
        prop_assert!((rt - value).abs() < 1e-3, "round-trip {value} -> {rt}");
    }

    #[test]
    fn normalized_values_stay_in_unit_range(
        band in 0usize..8,
        value in 0.1f32..10.0,
    ) {
        let desc = descriptor(ParamKey::band(band, BandParam::Quality));
        let n = desc.normalize(desc.clamp(value));
        prop_assert!((0.0..=1.0).contains(&n));
    }

    #[test]
    fn filter_type_from_index_total_over_known_range(index in 0usize..11) {
        prop_assert!(FilterType::from_index(index).is_some());
    }

    #[test]
    fn filter_type_from_index_none_beyond(index in 11usize..100_000) {
        prop_assert!(FilterType::from_index(index).is_none());
    }

    #[test]
    fn key_ids_never_collide(a in 0usize..16, b in 0usize..16) {
        for pa in BandParam::ALL {
            for pb in BandParam::ALL {
                let ka = ParamKey::band(a, pa);
                let kb = ParamKey::band(b, pb);
                if ka != kb {
                    prop_assert_ne!(ka.id(), kb.id());
                }
            }
        }
    }
}
