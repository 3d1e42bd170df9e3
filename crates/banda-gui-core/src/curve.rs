//! Frequency-response curve provider interface.

use egui::{Pos2, Rect};

/// Source of frequency-response geometry.
///
/// Implementations sample the magnitude response of one band (or of the
/// whole chain) across `plot` and return the path in pixel space. Results
/// must be deterministic given the current parameter values and region —
/// the editor calls back whenever either changes and caches nothing else.
///
/// There is no caching contract: the caller decides when to call. A
/// degenerate (zero-area) `plot` yields an empty path.
pub trait CurveProvider: Send + Sync {
    /// Response path for `band`, or for the composite chain when `band` is
    /// `None`, sampled across `plot`.
    fn curve(&self, band: Option<usize>, plot: Rect) -> Vec<Pos2>;
}
