use serde::{Deserialize, Serialize};

/// Size limits for a widget, sourced from the registry.
///
/// Constraints are never persisted. They are re-merged onto stored geometry
/// on every load, so a registry change retroactively applies to layouts
/// saved before the change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WidgetConstraint {
    pub min_w: u32,
    pub min_h: u32,
    pub max_w: u32,
    pub max_h: u32,
}

impl WidgetConstraint {
    /// Clamp a size into this constraint. Constraints always win over
    /// whatever the interactive surface transiently allowed.
    pub fn clamp(&self, w: u32, h: u32) -> (u32, u32) {
        let min_w = self.min_w.max(1);
        let min_h = self.min_h.max(1);
        (
            w.clamp(min_w, self.max_w.max(min_w)),
            h.clamp(min_h, self.max_h.max(min_h)),
        )
    }
}

/// One widget's cell position and size on the grid.
///
/// Coordinates are zero-based, y-down. Only `i`/`x`/`y`/`w`/`h` are durable;
/// the constraint annotation is skipped by serde so `save` strips it
/// structurally. `x + w <= columns` is enforced at render time only, never
/// against stored geometry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GridItem {
    #[serde(rename = "i")]
    pub id: String,
    pub x: u32,
    pub y: u32,
    pub w: u32,
    pub h: u32,
    #[serde(skip)]
    pub constraint: Option<WidgetConstraint>,
}

impl GridItem {
    pub fn new(id: &str, x: u32, y: u32, w: u32, h: u32) -> Self {
        Self {
            id: id.to_string(),
            x,
            y,
            w: w.max(1),
            h: h.max(1),
            constraint: None,
        }
    }

    /// Annotate with a registry constraint without touching geometry.
    pub fn with_constraint(mut self, constraint: WidgetConstraint) -> Self {
        self.constraint = Some(constraint);
        self
    }

    /// True when this item's cells overlap `other`'s.
    pub fn overlaps(&self, other: &GridItem) -> bool {
        self.x < other.x + other.w
            && other.x < self.x + self.w
            && self.y < other.y + other.h
            && other.y < self.y + self.h
    }
}

/// Ordered collection of grid items, one per known widget id, associated
/// 1:1 with an owner id.
pub type Layout = Vec<GridItem>;
