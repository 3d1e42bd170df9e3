//! Standalone preview shell for the Banda equalizer editor.
//!
//! Hosts [`banda_gui_core::EqualizerEditor`] in an eframe window, backed by
//! an atomic-float parameter store and a schematic curve provider. In a
//! plugin build the same editor runs against the host's parameter state and
//! the processor's real magnitude response instead.

pub mod app;
pub mod atomic_store;
pub mod sketch;

pub use app::BandaApp;
pub use atomic_store::AtomicParamStore;
pub use sketch::ResponseSketch;
