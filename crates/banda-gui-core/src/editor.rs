//! The equalizer editor root.
//!
//! Owns the band panels, the output-gain control, the plot region, and the
//! aggregate response curve. Recomputation happens in exactly two places —
//! [`EqualizerEditor::layout`] (the plot rect moved) and
//! [`EqualizerEditor::on_params_changed`] (a parameter changed) — while
//! painting only ever reads the cached curves.

use crate::band_editor::BandEditor;
use crate::curve::CurveProvider;
use crate::param_store::{ParamStore, Subscription};
use crate::theme::Theme;
use crate::widgets::Knob;
use egui::{
    Align2, CornerRadius, FontId, Painter, Pos2, Rect, Shape, Stroke, StrokeKind, Ui, pos2, vec2,
};
use std::sync::Arc;

use banda_core::{ParamKey, descriptor};

/// Visual editor for the multi-band equalizer.
pub struct EqualizerEditor {
    // First field: the subscription must deregister from the hub before any
    // other editor state is torn down, on every exit path.
    subscription: Subscription,
    store: Arc<dyn ParamStore>,
    curves: Arc<dyn CurveProvider>,
    theme: Theme,
    bands: Vec<BandEditor>,
    aggregate: Vec<Pos2>,
    plot_rect: Rect,
    band_rects: Vec<Rect>,
    output_rect: Rect,
}

impl EqualizerEditor {
    /// Construct an editor with `band_count` bands plus one output control.
    ///
    /// Subscribes to the store's change notification immediately;
    /// notifications arriving before the first frame are queued and drained
    /// then. Each panel reads its band's current filter type from the store
    /// at construction.
    pub fn new(
        store: Arc<dyn ParamStore>,
        curves: Arc<dyn CurveProvider>,
        band_count: usize,
    ) -> Self {
        let subscription = store.subscribe();
        let bands = (0..band_count)
            .map(|i| BandEditor::new(i, store.as_ref()))
            .collect();
        tracing::debug!(bands = band_count, "equalizer editor constructed");
        Self {
            subscription,
            store,
            curves,
            theme: Theme::default(),
            bands,
            aggregate: Vec::new(),
            plot_rect: Rect::NOTHING,
            band_rects: Vec::new(),
            output_rect: Rect::NOTHING,
        }
    }

    /// Number of band panels.
    pub fn band_count(&self) -> usize {
        self.bands.len()
    }

    /// The panel for one band.
    pub fn band(&self, index: usize) -> &BandEditor {
        &self.bands[index]
    }

    /// The cached composite response curve.
    pub fn aggregate_curve(&self) -> &[Pos2] {
        &self.aggregate
    }

    /// The current plot region in pixel space.
    pub fn plot_rect(&self) -> Rect {
        self.plot_rect
    }

    /// Partition `region` into the plot area, the band strip, and the
    /// output frame.
    ///
    /// Pure geometry with one exception: when the plot rect actually
    /// changes, every band curve plus the aggregate is rebuilt once, since
    /// curve coordinates depend on the plot's pixel extent.
    pub fn layout(&mut self, region: Rect) {
        let bounds = region.shrink(3.0);
        let (plot_area, strip) = bounds.split_top_bottom_at_fraction(0.5);

        let slots = self.bands.len() + 1;
        let slot_width = strip.width() / slots as f32;
        self.band_rects = (0..self.bands.len())
            .map(|i| {
                Rect::from_min_size(
                    pos2(strip.left() + i as f32 * slot_width, strip.top()),
                    vec2(slot_width, strip.height()),
                )
            })
            .collect();

        let output_slot = Rect::from_min_size(
            pos2(strip.left() + self.bands.len() as f32 * slot_width, strip.top()),
            vec2(slot_width, strip.height()),
        );
        self.output_rect = output_slot.split_top_bottom_at_fraction(0.5).0.shrink(4.0);

        let plot = plot_area.shrink(3.0);
        if plot != self.plot_rect {
            self.plot_rect = plot;
            self.rebuild_curves();
        }
    }

    /// Handle external parameter change.
    ///
    /// Re-derives every band's enabled-control state from its current
    /// filter type, then clears and rebuilds each band curve and the
    /// aggregate. Idempotent: with no intervening store mutation, a second
    /// call produces bit-identical curves.
    pub fn on_params_changed(&mut self) {
        for band in &mut self.bands {
            band.refresh_relevance(self.store.as_ref());
        }
        self.rebuild_curves();
    }

    fn rebuild_curves(&mut self) {
        for band in &mut self.bands {
            band.rebuild_curve(self.curves.as_ref(), self.plot_rect);
        }
        self.aggregate.clear();
        if self.plot_rect.width() > 0.0 && self.plot_rect.height() > 0.0 {
            self.aggregate = self.curves.curve(None, self.plot_rect);
        }
        tracing::trace!(bands = self.bands.len(), "response curves rebuilt");
    }

    /// Render one frame.
    ///
    /// Drains queued change notifications first — the marshal point onto
    /// the presentation thread — then lays out against the available region
    /// and paints. Painting reads cached curves only.
    pub fn ui(&mut self, ui: &mut Ui) {
        if self.subscription.drain() {
            self.on_params_changed();
        }

        self.layout(ui.available_rect_before_wrap());
        self.paint_plot(ui.painter());

        let store = self.store.as_ref();
        let theme = &self.theme;
        for (band, rect) in self.bands.iter().zip(self.band_rects.iter()) {
            band.ui(ui, *rect, store, theme);
        }

        self.output_ui(ui);
    }

    fn paint_plot(&self, painter: &Painter) {
        if self.plot_rect.width() <= 0.0 || self.plot_rect.height() <= 0.0 {
            return;
        }

        painter.rect_filled(
            self.plot_rect.expand(2.0),
            CornerRadius::same(4),
            self.theme.plot_bg,
        );
        painter.rect_stroke(
            self.plot_rect.expand(2.0),
            CornerRadius::same(4),
            Stroke::new(1.0, self.theme.knob_track),
            StrokeKind::Inside,
        );

        for (i, band) in self.bands.iter().enumerate() {
            if band.curve().len() >= 2 {
                painter.add(Shape::line(
                    band.curve().to_vec(),
                    Stroke::new(1.0, self.theme.band_color(i)),
                ));
            }
        }
        if self.aggregate.len() >= 2 {
            painter.add(Shape::line(
                self.aggregate.clone(),
                Stroke::new(2.0, self.theme.aggregate_curve),
            ));
        }
    }

    fn output_ui(&mut self, ui: &mut Ui) {
        let frame = self.output_rect;
        if frame.width() <= 0.0 || frame.height() <= 0.0 {
            return;
        }

        ui.painter().rect_stroke(
            frame,
            CornerRadius::same(4),
            Stroke::new(1.0, self.theme.text_secondary),
            StrokeKind::Inside,
        );
        ui.painter().text(
            pos2(frame.center().x, frame.top() + 4.0),
            Align2::CENTER_TOP,
            "Output",
            FontId::proportional(11.0),
            self.theme.text_secondary,
        );

        let desc = descriptor(ParamKey::Output);
        let mut value = self.store.get(ParamKey::Output);
        let inner = frame.shrink2(vec2(8.0, 18.0));
        let diameter = (inner.width().min(inner.height())).clamp(16.0, 56.0);
        let response = ui.put(inner, Knob::new(&mut value, &desc, "OUT").diameter(diameter));
        if response.changed() {
            self.store.set(ParamKey::Output, value);
        }
    }
}
