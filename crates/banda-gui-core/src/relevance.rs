//! Which of a band's controls matter for its filter type.
//!
//! A pass or all-pass filter has no meaningful gain or quality; a shelf has
//! gain but a fixed slope; a peak uses all three. The table below is the
//! single source of that domain knowledge — panels apply it verbatim and
//! never derive enabled state any other way.

use banda_core::FilterType;

/// Enabled state for the three continuous band controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControlRelevance {
    /// Frequency knob enabled.
    pub frequency: bool,
    /// Quality knob enabled.
    pub quality: bool,
    /// Gain knob enabled.
    pub gain: bool,
}

impl ControlRelevance {
    /// All three controls enabled.
    pub const ALL: Self = Self {
        frequency: true,
        quality: true,
        gain: true,
    };

    const fn new(frequency: bool, quality: bool, gain: bool) -> Self {
        Self {
            frequency,
            quality,
            gain,
        }
    }
}

/// Relevance for a known filter type. Pure lookup, never mutated.
pub fn relevance_for(filter: FilterType) -> ControlRelevance {
    use FilterType::{
        AllPass, AllPass1st, BandPass, HighPass, HighPass1st, HighShelf, LowPass, LowPass1st,
        LowShelf, Notch, Peak,
    };
    match filter {
        LowPass | LowPass1st | AllPass | AllPass1st | HighPass1st => {
            ControlRelevance::new(true, false, false)
        }
        LowShelf => ControlRelevance::new(true, false, true),
        BandPass | Notch | HighPass => ControlRelevance::new(true, true, false),
        Peak | HighShelf => ControlRelevance::ALL,
    }
}

/// Relevance for a raw type index as delivered by the parameter store.
///
/// Unknown indices enable all three controls: a parameter model that grows
/// new filter types ahead of this UI degrades to fully-editable controls
/// rather than a disabled bank.
pub fn relevance_for_raw(raw: usize) -> ControlRelevance {
    FilterType::from_index(raw).map_or(ControlRelevance::ALL, relevance_for)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn tuple(r: ControlRelevance) -> (bool, bool, bool) {
        (r.frequency, r.quality, r.gain)
    }

    #[test]
    fn table_matches_filter_semantics() {
        use FilterType::*;

        for ft in [LowPass, LowPass1st, AllPass, AllPass1st, HighPass1st] {
            assert_eq!(tuple(relevance_for(ft)), (true, false, false), "{ft:?}");
        }
        assert_eq!(tuple(relevance_for(LowShelf)), (true, false, true));
        for ft in [BandPass, Notch, HighPass] {
            assert_eq!(tuple(relevance_for(ft)), (true, true, false), "{ft:?}");
        }
        for ft in [Peak, HighShelf] {
            assert_eq!(tuple(relevance_for(ft)), (true, true, true), "{ft:?}");
        }
    }

    #[test]
    fn frequency_is_always_relevant() {
        for ft in FilterType::ALL {
            assert!(relevance_for(ft).frequency, "{ft:?}");
        }
    }

    #[test]
    fn raw_lookup_agrees_with_typed_lookup() {
        for ft in FilterType::ALL {
            assert_eq!(relevance_for_raw(ft.index()), relevance_for(ft));
        }
    }

    proptest! {
        #[test]
        fn unknown_raw_values_fail_open(raw in FilterType::ALL.len()..1_000_000usize) {
            prop_assert_eq!(relevance_for_raw(raw), ControlRelevance::ALL);
        }
    }
}
