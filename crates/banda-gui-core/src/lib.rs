//! Equalizer editor view for the Banda parametric EQ.
//!
//! This crate provides the editor component itself — band control panels,
//! the frequency-response plot, and the relevance state machine — plus the
//! [`ParamStore`] and [`CurveProvider`] traits that decouple it from the
//! hosting plugin's parameter storage and DSP. The standalone preview shell
//! (`banda-gui`) and plugin wrappers both embed [`EqualizerEditor`].
//!
//! # Modules
//!
//! - [`param_store`] — keyed parameter access trait and change-notification hub
//! - [`curve`] — frequency-response curve provider trait
//! - [`relevance`] — filter-type → enabled-controls table
//! - [`band_editor`] — one band's control panel
//! - [`editor`] — the editor root: layout, recompute pipeline, painting
//! - [`theme`] — visual styling and band colors
//! - [`widgets`] — audio-specific widgets (knob)

pub mod band_editor;
pub mod curve;
pub mod editor;
pub mod param_store;
pub mod relevance;
pub mod theme;
pub mod widgets;

pub use band_editor::BandEditor;
pub use curve::CurveProvider;
pub use editor::EqualizerEditor;
pub use param_store::{ChangeHub, ParamStore, Subscription};
pub use relevance::{ControlRelevance, relevance_for, relevance_for_raw};
pub use theme::Theme;
pub use widgets::Knob;
