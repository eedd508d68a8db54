use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Per-widget size at which the widget switches to its expanded content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExpansionThreshold {
    pub expand_w: u32,
    pub expand_h: u32,
}

impl ExpansionThreshold {
    /// Either axis crossing its threshold suffices: a user stretching a
    /// widget along just one axis still expects richer content.
    pub fn crossed(&self, w: u32, h: u32) -> bool {
        w >= self.expand_w || h >= self.expand_h
    }
}

static THRESHOLDS: Lazy<HashMap<&'static str, ExpansionThreshold>> = Lazy::new(|| {
    HashMap::from([
        ("forecast", ExpansionThreshold { expand_w: 3, expand_h: 3 }),
        ("map", ExpansionThreshold { expand_w: 2, expand_h: 3 }),
        ("markets", ExpansionThreshold { expand_w: 3, expand_h: 3 }),
        ("satellite", ExpansionThreshold { expand_w: 3, expand_h: 3 }),
        ("history", ExpansionThreshold { expand_w: 3, expand_h: 3 }),
    ])
});

/// Derive the expanded flag for a widget at its current size.
///
/// A widget absent from the threshold table is never auto-expanded.
pub fn should_expand(widget_id: &str, w: u32, h: u32) -> bool {
    THRESHOLDS
        .get(widget_id)
        .map(|t| t.crossed(w, h))
        .unwrap_or(false)
}
