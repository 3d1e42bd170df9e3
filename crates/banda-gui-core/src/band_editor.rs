//! One band's control panel.
//!
//! A panel owns no parameter values: the filter-type selector and the three
//! knobs read from and write to the [`ParamStore`] every frame. The only
//! state cached here is derived — the band's [`ControlRelevance`] and its
//! response curve — and both are refreshed exclusively through the editor's
//! change-notification round-trip, never by the controls themselves.

use crate::curve::CurveProvider;
use crate::param_store::ParamStore;
use crate::relevance::{ControlRelevance, relevance_for_raw};
use crate::theme::Theme;
use crate::widgets::Knob;
use egui::{Align2, CornerRadius, FontId, Pos2, Rect, Stroke, StrokeKind, Ui, UiBuilder, pos2, vec2};

use banda_core::{BandParam, FilterType, ParamKey, band_name, descriptor};

/// Control panel for a single equalizer band.
pub struct BandEditor {
    index: usize,
    name: &'static str,
    relevance: ControlRelevance,
    curve: Vec<Pos2>,
}

impl BandEditor {
    /// Create the panel for band `index`.
    ///
    /// The enabled-control state is derived from the band's *current*
    /// filter type as the store reports it now — not from an assumed
    /// default — so a panel constructed against a live session starts
    /// consistent.
    pub fn new(index: usize, store: &dyn ParamStore) -> Self {
        let raw = store.get(ParamKey::band(index, BandParam::Type)) as usize;
        tracing::debug!(band = index, filter_type = raw, "band editor created");
        Self {
            index,
            name: band_name(index),
            relevance: relevance_for_raw(raw),
            curve: Vec::new(),
        }
    }

    /// Band index this panel controls.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Current enabled-control state.
    pub fn relevance(&self) -> ControlRelevance {
        self.relevance
    }

    /// Cached response curve in pixel space.
    pub fn curve(&self) -> &[Pos2] {
        &self.curve
    }

    /// Re-derive the enabled-control state from the store's current filter
    /// type for this band.
    pub fn refresh_relevance(&mut self, store: &dyn ParamStore) {
        let raw = store.get(ParamKey::band(self.index, BandParam::Type)) as usize;
        self.relevance = relevance_for_raw(raw);
    }

    /// Clear and rebuild this band's curve for `plot`.
    ///
    /// A degenerate plot region leaves the curve empty.
    pub fn rebuild_curve(&mut self, curves: &dyn CurveProvider, plot: Rect) {
        self.curve.clear();
        if plot.width() > 0.0 && plot.height() > 0.0 {
            self.curve = curves.curve(Some(self.index), plot);
        }
    }

    /// Render the panel into `bounds`.
    ///
    /// Layout is a fixed proportional split: the band name on the frame, a
    /// selector strip across the top, frequency across the bottom
    /// two-thirds, quality and gain sharing the top third left/right.
    /// Control edits write straight through the store; relevance and curve
    /// updates arrive via the notification round-trip.
    pub fn ui(&self, ui: &mut Ui, bounds: Rect, store: &dyn ParamStore, theme: &Theme) {
        let color = theme.band_color(self.index);

        ui.painter().rect_stroke(
            bounds.shrink(1.0),
            CornerRadius::same(4),
            Stroke::new(1.0, color),
            StrokeKind::Inside,
        );
        ui.painter().text(
            pos2(bounds.center().x, bounds.top() + 4.0),
            Align2::CENTER_TOP,
            self.name,
            FontId::proportional(11.0),
            color,
        );

        let inner = bounds.shrink2(vec2(8.0, 18.0));
        if inner.width() <= 0.0 || inner.height() <= 0.0 {
            return;
        }

        let (selector, controls) = inner.split_top_bottom_at_y(inner.top() + 20.0);
        let (upper, frequency_rect) =
            controls.split_top_bottom_at_y(controls.top() + controls.height() / 3.0);
        let (quality_rect, gain_rect) = upper.split_left_right_at_fraction(0.5);

        self.filter_type_ui(ui, selector, store);

        let relevance = self.relevance;
        self.knob_ui(
            ui,
            frequency_rect,
            store,
            BandParam::Frequency,
            "FREQ",
            relevance.frequency,
        );
        self.knob_ui(ui, quality_rect, store, BandParam::Quality, "Q", relevance.quality);
        self.knob_ui(ui, gain_rect, store, BandParam::Gain, "GAIN", relevance.gain);
    }

    fn filter_type_ui(&self, ui: &mut Ui, strip: Rect, store: &dyn ParamStore) {
        let key = ParamKey::band(self.index, BandParam::Type);
        let current = FilterType::from_index(store.get(key) as usize);

        ui.scope_builder(UiBuilder::new().max_rect(strip), |ui| {
            egui::ComboBox::from_id_salt(("band-filter-type", self.index))
                .selected_text(current.map_or("—", FilterType::name))
                .width(strip.width())
                .show_ui(ui, |ui| {
                    for ft in FilterType::ALL {
                        if ui.selectable_label(current == Some(ft), ft.name()).clicked() {
                            store.set(key, ft.index() as f32);
                        }
                    }
                });
        });
    }

    fn knob_ui(
        &self,
        ui: &mut Ui,
        rect: Rect,
        store: &dyn ParamStore,
        param: BandParam,
        label: &str,
        enabled: bool,
    ) {
        let key = ParamKey::band(self.index, param);
        let desc = descriptor(key);
        let mut value = store.get(key);

        let diameter = (rect.width().min(rect.height() - 24.0)).clamp(16.0, 56.0);
        let response = ui.add_enabled_ui(enabled, |ui| {
            ui.put(rect, Knob::new(&mut value, &desc, label).diameter(diameter))
        });
        if response.inner.changed() {
            store.set(key, value);
        }
    }
}
