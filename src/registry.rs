use crate::grid::item::WidgetConstraint;
use std::collections::HashMap;

/// Static size catalog entry for one widget kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WidgetSpec {
    pub default_w: u32,
    pub default_h: u32,
    pub min_w: u32,
    pub min_h: u32,
    pub max_w: u32,
    pub max_h: u32,
}

impl WidgetSpec {
    pub fn constraint(&self) -> WidgetConstraint {
        WidgetConstraint {
            min_w: self.min_w,
            min_h: self.min_h,
            max_w: self.max_w,
            max_h: self.max_h,
        }
    }
}

/// Read-only catalog mapping widget id to default/min/max size.
///
/// Shared by reference between the store and the engine; the engine never
/// mutates it.
#[derive(Clone, Default)]
pub struct WidgetRegistry {
    map: HashMap<String, WidgetSpec>,
}

impl WidgetRegistry {
    /// Registry covering the first-class widgets of the weather dashboard.
    pub fn with_defaults() -> Self {
        let mut reg = Self::default();
        reg.register("conditions", WidgetSpec { default_w: 1, default_h: 2, min_w: 1, min_h: 1, max_w: 2, max_h: 3 });
        reg.register("forecast", WidgetSpec { default_w: 2, default_h: 2, min_w: 1, min_h: 1, max_w: 4, max_h: 4 });
        reg.register("map", WidgetSpec { default_w: 1, default_h: 2, min_w: 1, min_h: 1, max_w: 4, max_h: 4 });
        reg.register("markets", WidgetSpec { default_w: 2, default_h: 2, min_w: 1, min_h: 2, max_w: 4, max_h: 4 });
        reg.register("satellite", WidgetSpec { default_w: 2, default_h: 2, min_w: 1, min_h: 1, max_w: 4, max_h: 3 });
        reg.register("alerts", WidgetSpec { default_w: 1, default_h: 1, min_w: 1, min_h: 1, max_w: 2, max_h: 2 });
        reg.register("history", WidgetSpec { default_w: 2, default_h: 2, min_w: 1, min_h: 1, max_w: 4, max_h: 4 });
        reg.register("notes", WidgetSpec { default_w: 1, default_h: 2, min_w: 1, min_h: 1, max_w: 2, max_h: 4 });
        reg
    }

    pub fn register(&mut self, name: &str, spec: WidgetSpec) {
        self.map.insert(name.to_string(), spec);
    }

    pub fn contains(&self, name: &str) -> bool {
        self.map.contains_key(name)
    }

    pub fn spec(&self, name: &str) -> Option<WidgetSpec> {
        self.map.get(name).copied()
    }

    pub fn constraint(&self, name: &str) -> Option<WidgetConstraint> {
        self.map.get(name).map(|spec| spec.constraint())
    }

    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.map.keys().cloned().collect();
        names.sort();
        names
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_cover_first_class_widgets() {
        let reg = WidgetRegistry::with_defaults();
        for name in [
            "conditions",
            "forecast",
            "map",
            "markets",
            "satellite",
            "alerts",
            "history",
            "notes",
        ] {
            assert!(reg.contains(name), "missing {name}");
        }
        assert_eq!(reg.names().len(), 8);
    }

    #[test]
    fn names_are_sorted() {
        let reg = WidgetRegistry::with_defaults();
        let names = reg.names();
        let mut sorted = names.clone();
        sorted.sort();
        assert_eq!(names, sorted);
    }

    #[test]
    fn spec_round_trips_into_constraint() {
        let reg = WidgetRegistry::with_defaults();
        let spec = reg.spec("map").unwrap();
        let constraint = reg.constraint("map").unwrap();
        assert_eq!(spec.min_w, constraint.min_w);
        assert_eq!(spec.max_h, constraint.max_h);
        assert!(reg.constraint("unknown").is_none());
    }
}
