//! Static per-band display data and defaults.

use crate::FilterType;

/// Band count of the standard editor configuration.
pub const DEFAULT_BAND_COUNT: usize = 6;

/// Initial filter configuration for one band.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BandDefaults {
    /// Filter type the band starts with.
    pub filter_type: FilterType,
    /// Center/corner frequency the band starts at, in Hz.
    pub frequency: f32,
}

const NAMES: [&str; DEFAULT_BAND_COUNT] =
    ["Lowest", "Low", "Low Mids", "High Mids", "High", "Highest"];

const DEFAULTS: [BandDefaults; DEFAULT_BAND_COUNT] = [
    BandDefaults {
        filter_type: FilterType::HighPass,
        frequency: 40.0,
    },
    BandDefaults {
        filter_type: FilterType::LowShelf,
        frequency: 250.0,
    },
    BandDefaults {
        filter_type: FilterType::Peak,
        frequency: 500.0,
    },
    BandDefaults {
        filter_type: FilterType::Peak,
        frequency: 1_000.0,
    },
    BandDefaults {
        filter_type: FilterType::HighShelf,
        frequency: 5_000.0,
    },
    BandDefaults {
        filter_type: FilterType::LowPass,
        frequency: 12_000.0,
    },
];

/// Display name for a band. Deterministic and stable for a given index.
pub fn band_name(index: usize) -> &'static str {
    NAMES.get(index).copied().unwrap_or("Band")
}

/// Initial configuration for a band.
///
/// Indices beyond the named set get a neutral mid-range peak, so an editor
/// constructed with more bands than the standard six still starts sane.
pub fn band_defaults(index: usize) -> BandDefaults {
    DEFAULTS.get(index).copied().unwrap_or(BandDefaults {
        filter_type: FilterType::Peak,
        frequency: 1_000.0,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn named_bands_are_distinct() {
        for i in 0..DEFAULT_BAND_COUNT {
            for j in 0..DEFAULT_BAND_COUNT {
                if i != j {
                    assert_ne!(band_name(i), band_name(j));
                }
            }
        }
    }

    #[test]
    fn defaults_cover_any_index() {
        let extra = band_defaults(DEFAULT_BAND_COUNT + 5);
        assert_eq!(extra.filter_type, FilterType::Peak);
        assert!(extra.frequency > 0.0);
    }

    #[test]
    fn default_frequencies_ascend() {
        for i in 1..DEFAULT_BAND_COUNT {
            assert!(band_defaults(i).frequency >= band_defaults(i - 1).frequency);
        }
    }
}
