//! Core domain model for the Banda multi-band equalizer editor.
//!
//! This crate is GUI-free: it defines the filter-type taxonomy, the stable
//! parameter key space, parameter descriptors with display/scaling metadata,
//! and the static per-band display data. The editor crates build on these
//! types; nothing here depends on egui or on any DSP code.

pub mod bands;
pub mod filter_type;
pub mod params;

pub use bands::{BandDefaults, DEFAULT_BAND_COUNT, band_defaults, band_name};
pub use filter_type::FilterType;
pub use params::{BandParam, ParamDescriptor, ParamKey, ParamScale, ParamUnit, descriptor, keys};
