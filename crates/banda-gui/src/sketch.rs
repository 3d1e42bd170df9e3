//! Schematic response curves for the preview shell.
//!
//! [`ResponseSketch`] draws recognizable per-band shapes — bells, shelves,
//! roll-offs — in dB space on a log-frequency axis, purely from the current
//! parameter values. It is display geometry for the standalone preview:
//! the magnitude response of the actual filters comes from the host DSP
//! behind [`CurveProvider`], not from here.

use banda_core::{BandParam, FilterType, ParamKey};
use banda_gui_core::{CurveProvider, ParamStore};
use egui::{Pos2, Rect, pos2};
use std::sync::Arc;

const MIN_HZ: f32 = 20.0;
const MAX_HZ: f32 = 20_000.0;
/// Vertical span of the plot, in dB either side of center.
const SPAN_DB: f32 = 26.0;
/// Roll-off slope per octave for second-order pass filters.
const SLOPE_2ND: f32 = 12.0;
const SLOPE_1ST: f32 = 6.0;
const NOTCH_DEPTH: f32 = 24.0;

/// Curve provider that sketches band shapes from parameter values.
pub struct ResponseSketch {
    store: Arc<dyn ParamStore>,
    band_count: usize,
}

impl ResponseSketch {
    /// Sketch provider over `store` for `band_count` bands.
    pub fn new(store: Arc<dyn ParamStore>, band_count: usize) -> Self {
        Self { store, band_count }
    }

    /// Schematic level of one band at `freq`, in dB.
    fn band_db(&self, band: usize, freq: f32) -> f32 {
        let raw = self.store.get(ParamKey::band(band, BandParam::Type)) as usize;
        let center = self
            .store
            .get(ParamKey::band(band, BandParam::Frequency))
            .max(MIN_HZ);
        let quality = self.store.get(ParamKey::band(band, BandParam::Quality)).max(0.1);
        let gain = self.store.get(ParamKey::band(band, BandParam::Gain));

        // Octave distance from the band's center; all shapes are functions
        // of this, which keeps them symmetric on the log axis.
        let d = (freq / center).log2();

        match FilterType::from_index(raw) {
            Some(FilterType::Peak) => gain * bell(d, quality),
            Some(FilterType::Notch) => -NOTCH_DEPTH * bell(d, quality),
            Some(FilterType::LowShelf) => gain * shelf(-d),
            Some(FilterType::HighShelf) => gain * shelf(d),
            Some(FilterType::LowPass) => -SLOPE_2ND * d.max(0.0),
            Some(FilterType::LowPass1st) => -SLOPE_1ST * d.max(0.0),
            Some(FilterType::HighPass) => -SLOPE_2ND * (-d).max(0.0),
            Some(FilterType::HighPass1st) => -SLOPE_1ST * (-d).max(0.0),
            Some(FilterType::BandPass) => {
                let width = 1.0 / quality;
                -SLOPE_2ND * (d.abs() - width * 0.5).max(0.0)
            }
            Some(FilterType::AllPass | FilterType::AllPass1st) | None => 0.0,
        }
    }

    fn level_db(&self, band: Option<usize>, freq: f32) -> f32 {
        match band {
            Some(index) => self.band_db(index, freq),
            None => (0..self.band_count).map(|i| self.band_db(i, freq)).sum(),
        }
    }
}

impl CurveProvider for ResponseSketch {
    fn curve(&self, band: Option<usize>, plot: Rect) -> Vec<Pos2> {
        if plot.width() < 2.0 || plot.height() <= 0.0 {
            return Vec::new();
        }

        // One sample per two pixels keeps the path light at any size.
        let samples = ((plot.width() / 2.0) as usize).max(2);
        let half = plot.height() / 2.0;
        (0..samples)
            .map(|s| {
                let t = s as f32 / (samples - 1) as f32;
                let freq = MIN_HZ * (MAX_HZ / MIN_HZ).powf(t);
                let db = self.level_db(band, freq).clamp(-SPAN_DB, SPAN_DB);
                pos2(
                    plot.left() + t * plot.width(),
                    plot.center().y - db / SPAN_DB * half,
                )
            })
            .collect()
    }
}

/// Unit bell centered on `d = 0`, narrowed by `quality`.
fn bell(d: f32, quality: f32) -> f32 {
    let x = d * quality * 1.5;
    (-0.5 * x * x).exp()
}

/// Unit shelf: ~0 below the corner, ~1 above, smooth through `d = 0`.
fn shelf(d: f32) -> f32 {
    1.0 / (1.0 + (-3.0 * d).exp())
}
