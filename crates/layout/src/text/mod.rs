//! Text measurement without font metrics.
//!
//! Widths are approximated from character counts, so every height produced here is
//! a planning hint. Callers reserve space with [`crate::LayoutConfig::safety_factor`].

mod estimator;
mod wrap;

pub use estimator::{TextEstimate, TextEstimator};
pub use wrap::wrap_words;
