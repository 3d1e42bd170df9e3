//! Audio-specific widgets.

mod knob;

pub use knob::Knob;
