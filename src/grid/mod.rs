pub mod cache;
pub mod engine;
pub mod expansion;
pub mod item;
pub mod placement;
pub mod store;

pub use cache::LayoutCache;
pub use engine::{
    columns_for_width, EngineDiagnostics, ExpansionCallback, GridEngine, PlacedWidget,
    WidgetEntry, DEBOUNCE_INTERVAL,
};
pub use expansion::{should_expand, ExpansionThreshold};
pub use item::{GridItem, Layout, WidgetConstraint};
pub use placement::{find_free_position, Placement, MAX_SCAN_ROWS};
pub use store::{LayoutStore, DEFAULT_NAMESPACE};
