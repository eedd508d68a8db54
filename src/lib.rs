//! Widget grid layout and persistence engine for a personal
//! weather-research dashboard.
//!
//! The dashboard itself (weather feeds, market polling, the notes editor)
//! lives elsewhere and is declarative UI over external APIs. This crate is
//! the part with real state: breakpoint-driven column reflow, constrained
//! resize, bin-packing placement for new widgets, threshold-derived
//! expansion, and debounced durable persistence, one layout per owner id
//! (a city, or an arbitrary workspace id).

pub mod grid;
pub mod logging;
pub mod registry;

pub use grid::{GridEngine, GridItem, Layout, LayoutStore};
pub use registry::{WidgetRegistry, WidgetSpec};
