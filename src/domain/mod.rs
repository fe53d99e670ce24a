//! Domain layer - pure analysis and synthesis logic.
//!
//! Everything in this layer is side-effect free: the extractors, the HTML
//! analyzer, the domain heuristics, and the config document model perform
//! no I/O and never fail.

pub mod analysis;
pub mod project;
