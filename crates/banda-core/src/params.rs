//! Parameter keys and descriptors.
//!
//! Every editable value in the editor is addressed by a [`ParamKey`]: one
//! key per (band, field) pair plus a single output-gain key. Keys are typed
//! but carry stable string ids (`band0-frequency`, `output`, …) so hosts can
//! persist and automate by identifier rather than by position.
//!
//! [`ParamDescriptor`] carries the range, default, unit, and scaling needed
//! by stores (clamping) and widgets (display formatting, log skew).

use crate::bands::band_defaults;

/// The four per-band parameter fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BandParam {
    /// Filter type, stored as the wire index of [`crate::FilterType`].
    Type,
    /// Center/corner frequency in Hz.
    Frequency,
    /// Quality (bandwidth) factor.
    Quality,
    /// Band gain in dB.
    Gain,
}

impl BandParam {
    /// All band parameter fields, in slot order.
    pub const ALL: [BandParam; 4] = [
        BandParam::Type,
        BandParam::Frequency,
        BandParam::Quality,
        BandParam::Gain,
    ];

    /// Position of this field within a band's slot group.
    pub fn slot(self) -> usize {
        match self {
            BandParam::Type => 0,
            BandParam::Frequency => 1,
            BandParam::Quality => 2,
            BandParam::Gain => 3,
        }
    }

    fn id_suffix(self) -> &'static str {
        match self {
            BandParam::Type => "type",
            BandParam::Frequency => "frequency",
            BandParam::Quality => "quality",
            BandParam::Gain => "gain",
        }
    }
}

/// Address of one editable parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParamKey {
    /// A per-band field.
    Band {
        /// Band index, `0..band_count`.
        band: usize,
        /// Which of the band's four fields.
        param: BandParam,
    },
    /// The global output gain.
    Output,
}

impl ParamKey {
    /// Key for one band field.
    pub fn band(band: usize, param: BandParam) -> Self {
        ParamKey::Band { band, param }
    }

    /// Stable string id, e.g. `band2-quality` or `output`.
    ///
    /// Ids identify parameters across sessions and hosts; they never encode
    /// layout positions.
    pub fn id(self) -> String {
        match self {
            ParamKey::Band { band, param } => format!("band{band}-{}", param.id_suffix()),
            ParamKey::Output => "output".to_string(),
        }
    }
}

/// Every key for an editor with `band_count` bands, bands first, output last.
///
/// The ordering is the canonical slot layout used by index-backed stores.
pub fn keys(band_count: usize) -> Vec<ParamKey> {
    let mut out = Vec::with_capacity(band_count * BandParam::ALL.len() + 1);
    for band in 0..band_count {
        for param in BandParam::ALL {
            out.push(ParamKey::band(band, param));
        }
    }
    out.push(ParamKey::Output);
    out
}

/// Scaling curve mapping a parameter's plain value to normalized `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ParamScale {
    /// Equal resolution across the range.
    #[default]
    Linear,
    /// More resolution at low values; requires `min > 0`.
    /// Used for frequency and quality, where perception is ratio-based.
    Logarithmic,
}

/// Unit for value display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParamUnit {
    /// Decibels.
    Decibels,
    /// Hertz.
    Hertz,
    /// Dimensionless.
    None,
}

impl ParamUnit {
    /// Display suffix for this unit.
    pub const fn suffix(self) -> &'static str {
        match self {
            ParamUnit::Decibels => " dB",
            ParamUnit::Hertz => " Hz",
            ParamUnit::None => "",
        }
    }
}

/// Range, default, and display metadata for one parameter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParamDescriptor {
    /// Display name.
    pub name: &'static str,
    /// Unit for value formatting.
    pub unit: ParamUnit,
    /// Minimum allowed value.
    pub min: f32,
    /// Maximum allowed value.
    pub max: f32,
    /// Default value.
    pub default: f32,
    /// Normalization curve.
    pub scale: ParamScale,
}

impl ParamDescriptor {
    /// Clamp `value` to this parameter's range.
    #[inline]
    pub fn clamp(&self, value: f32) -> f32 {
        value.clamp(self.min, self.max)
    }

    /// Plain value to normalized `[0, 1]`, respecting [`ParamScale`].
    #[inline]
    pub fn normalize(&self, value: f32) -> f32 {
        let range = self.max - self.min;
        if range == 0.0 {
            return 0.0;
        }
        match self.scale {
            ParamScale::Linear => (value - self.min) / range,
            ParamScale::Logarithmic => {
                if self.min <= 0.0 || value <= 0.0 {
                    return 0.0;
                }
                libm::logf(value / self.min) / libm::logf(self.max / self.min)
            }
        }
    }

    /// Normalized `[0, 1]` back to the plain range; inverse of
    /// [`normalize`](Self::normalize).
    #[inline]
    pub fn denormalize(&self, normalized: f32) -> f32 {
        match self.scale {
            ParamScale::Linear => self.min + normalized * (self.max - self.min),
            ParamScale::Logarithmic => {
                if self.min <= 0.0 {
                    return self.min;
                }
                self.min * libm::powf(self.max / self.min, normalized)
            }
        }
    }
}

/// Descriptor for any parameter key.
///
/// Frequency and type defaults vary per band (see
/// [`band_defaults`](crate::bands::band_defaults)); everything else is
/// uniform across bands.
pub fn descriptor(key: ParamKey) -> ParamDescriptor {
    match key {
        ParamKey::Band { band, param } => {
            let defaults = band_defaults(band);
            match param {
                BandParam::Type => ParamDescriptor {
                    name: "Filter Type",
                    unit: ParamUnit::None,
                    min: 0.0,
                    max: (crate::FilterType::ALL.len() - 1) as f32,
                    default: defaults.filter_type.index() as f32,
                    scale: ParamScale::Linear,
                },
                BandParam::Frequency => ParamDescriptor {
                    name: "Frequency",
                    unit: ParamUnit::Hertz,
                    min: 20.0,
                    max: 20_000.0,
                    default: defaults.frequency,
                    scale: ParamScale::Logarithmic,
                },
                BandParam::Quality => ParamDescriptor {
                    name: "Quality",
                    unit: ParamUnit::None,
                    min: 0.1,
                    max: 10.0,
                    default: 0.707,
                    scale: ParamScale::Logarithmic,
                },
                BandParam::Gain => ParamDescriptor {
                    name: "Gain",
                    unit: ParamUnit::Decibels,
                    min: -24.0,
                    max: 24.0,
                    default: 0.0,
                    scale: ParamScale::Linear,
                },
            }
        }
        ParamKey::Output => ParamDescriptor {
            name: "Output",
            unit: ParamUnit::Decibels,
            min: -40.0,
            max: 12.0,
            default: 0.0,
            scale: ParamScale::Linear,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_stable_and_distinct() {
        let all = keys(3);
        assert_eq!(all.len(), 3 * 4 + 1);
        for (i, a) in all.iter().enumerate() {
            for b in &all[i + 1..] {
                assert_ne!(a.id(), b.id());
            }
        }
        assert_eq!(ParamKey::band(0, BandParam::Frequency).id(), "band0-frequency");
        assert_eq!(ParamKey::Output.id(), "output");
    }

    #[test]
    fn descriptor_clamps_to_range() {
        let freq = descriptor(ParamKey::band(0, BandParam::Frequency));
        assert_eq!(freq.clamp(5.0), 20.0);
        assert_eq!(freq.clamp(99_999.0), 20_000.0);
        assert_eq!(freq.clamp(440.0), 440.0);
    }

    #[test]
    fn log_scale_midpoint_is_geometric_mean() {
        let freq = descriptor(ParamKey::band(0, BandParam::Frequency));
        let mid = freq.denormalize(0.5);
        let expected = libm::sqrtf(20.0 * 20_000.0);
        assert!(
            (mid - expected).abs() < 1.0,
            "log midpoint: expected ~{expected}, got {mid}"
        );
    }

    #[test]
    fn type_default_matches_band_defaults() {
        for band in 0..crate::DEFAULT_BAND_COUNT {
            let desc = descriptor(ParamKey::band(band, BandParam::Type));
            let expected = band_defaults(band).filter_type.index() as f32;
            assert_eq!(desc.default, expected);
        }
    }

    #[test]
    fn normalize_zero_range_is_zero() {
        let desc = ParamDescriptor {
            name: "Fixed",
            unit: ParamUnit::None,
            min: 1.0,
            max: 1.0,
            default: 1.0,
            scale: ParamScale::Linear,
        };
        assert_eq!(desc.normalize(1.0), 0.0);
    }
}
