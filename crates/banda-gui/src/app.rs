//! Application state for the preview shell.

use crate::atomic_store::AtomicParamStore;
use crate::sketch::ResponseSketch;
use banda_gui_core::{CurveProvider, EqualizerEditor, ParamStore, Theme};
use egui::CentralPanel;
use std::sync::Arc;

/// Main application: one equalizer editor over an atomic store.
pub struct BandaApp {
    /// Shared with the repaint hook and (potentially) automation threads.
    store: Arc<AtomicParamStore>,
    editor: EqualizerEditor,
}

impl BandaApp {
    /// Create the application with `band_count` bands.
    pub fn new(cc: &eframe::CreationContext<'_>, band_count: usize) -> Self {
        let store = Arc::new(AtomicParamStore::new(band_count));

        // Off-thread writes must wake the event loop, not wait for the next
        // natural frame. request_repaint is thread-safe.
        let ctx = cc.egui_ctx.clone();
        store.hub().set_repaint_hook(move || ctx.request_repaint());

        let curves = Arc::new(ResponseSketch::new(
            Arc::clone(&store) as Arc<dyn ParamStore>,
            band_count,
        ));
        let editor = EqualizerEditor::new(
            Arc::clone(&store) as Arc<dyn ParamStore>,
            curves as Arc<dyn CurveProvider>,
            band_count,
        );

        Theme::default().apply(&cc.egui_ctx);
        tracing::info!(bands = band_count, "preview shell ready");

        Self { store, editor }
    }

    /// The parameter store, for wiring external automation sources.
    pub fn store(&self) -> &Arc<AtomicParamStore> {
        &self.store
    }
}

impl eframe::App for BandaApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        CentralPanel::default().show(ctx, |ui| {
            self.editor.ui(ui);
        });
    }
}
