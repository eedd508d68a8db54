use crate::grid::expansion::should_expand;
use crate::grid::item::{GridItem, Layout};
use crate::grid::placement::find_free_position;
use crate::grid::store::LayoutStore;
use crate::registry::WidgetRegistry;
use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Quiet period between the last mutation and the durable write. A burst of
/// drags and resizes inside this window produces exactly one write.
pub const DEBOUNCE_INTERVAL: Duration = Duration::from_millis(500);

/// Step function from container pixel width to column count.
pub fn columns_for_width(width: f32) -> u32 {
    if width < 400.0 {
        1
    } else if width < 550.0 {
        2
    } else if width < 700.0 {
        3
    } else {
        4
    }
}

/// Fired when a widget's derived expanded flag flips.
pub type ExpansionCallback = Arc<dyn Fn(&str, bool) + Send + Sync>;

/// Typed widget content handed to the engine by the hosting page, keyed by
/// widget id. The engine never inspects the content.
pub struct WidgetEntry<C> {
    pub id: String,
    pub content: C,
}

impl<C> WidgetEntry<C> {
    pub fn new(id: &str, content: C) -> Self {
        Self {
            id: id.to_string(),
            content,
        }
    }
}

/// A visible widget with its render-time geometry.
pub struct PlacedWidget<'a, C> {
    pub item: GridItem,
    pub content: &'a C,
}

/// Counters surfaced for the diagnostics panel.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EngineDiagnostics {
    pub saves: u64,
    pub write_failures: u64,
    pub placement_fallbacks: u64,
}

/// Interactive layout runtime for one owner id.
///
/// Owns the transient in-session copy of the layout; the store owns the
/// persisted representation. Every mutation updates in-memory state
/// immediately and schedules a debounced save, so redraws never wait on
/// storage. Single-threaded: the host calls `tick` from its frame loop to
/// drive the pending write.
pub struct GridEngine {
    store: LayoutStore,
    registry: WidgetRegistry,
    owner: String,
    layout: Layout,
    columns: u32,
    expanded: HashMap<String, bool>,
    dirty: bool,
    last_mutation: Option<Instant>,
    debounce: Duration,
    expansion_cb: Option<ExpansionCallback>,
    diagnostics: EngineDiagnostics,
    disposed: bool,
}

impl GridEngine {
    pub fn new(mut store: LayoutStore, registry: WidgetRegistry, owner: &str) -> Self {
        let layout = store.load(owner, &registry);
        let mut engine = Self {
            store,
            registry,
            owner: owner.to_string(),
            layout,
            columns: 4,
            expanded: HashMap::new(),
            dirty: false,
            last_mutation: None,
            debounce: DEBOUNCE_INTERVAL,
            expansion_cb: None,
            diagnostics: EngineDiagnostics::default(),
            disposed: false,
        };
        engine.seed_expansion();
        engine
    }

    pub fn with_debounce(mut self, debounce: Duration) -> Self {
        self.debounce = debounce;
        self
    }

    pub fn set_expansion_callback(&mut self, cb: ExpansionCallback) {
        self.expansion_cb = Some(cb);
    }

    pub fn owner(&self) -> &str {
        &self.owner
    }

    pub fn columns(&self) -> u32 {
        self.columns
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    pub fn is_expanded(&self, id: &str) -> bool {
        self.expanded.get(id).copied().unwrap_or(false)
    }

    pub fn has_pending_save(&self) -> bool {
        self.dirty
    }

    pub fn diagnostics(&self) -> EngineDiagnostics {
        self.diagnostics
    }

    /// Recompute the column count from the observed container width. Display
    /// state only; stored geometry is untouched.
    pub fn set_container_width(&mut self, width: f32) {
        let columns = columns_for_width(width);
        if columns != self.columns {
            self.columns = columns;
            tracing::debug!(columns, "breakpoint changed");
        }
    }

    /// Items to render right now: widgets in the caller-supplied absent set
    /// are excluded (but stay in the persisted layout, so they reappear once
    /// no longer absent), and geometry is clamped to the active column
    /// count. The clamp is read-time only; widening the viewport later
    /// restores the original width.
    pub fn visible_items(&self, absent: &HashSet<String>) -> Vec<GridItem> {
        let cols = self.columns.max(1);
        self.layout
            .iter()
            .filter(|item| !absent.contains(item.id.as_str()))
            .map(|item| {
                let mut shown = item.clone();
                shown.x = shown.x.min(cols - 1);
                shown.w = shown.w.min(cols);
                shown
            })
            .collect()
    }

    /// Pair visible items with host-supplied content by widget id. Entries
    /// without a layout item (and items without an entry) are skipped.
    pub fn arrange<'a, C>(
        &self,
        entries: &'a [WidgetEntry<C>],
        absent: &HashSet<String>,
    ) -> Vec<PlacedWidget<'a, C>> {
        let by_id: HashMap<&str, &C> = entries
            .iter()
            .map(|entry| (entry.id.as_str(), &entry.content))
            .collect();
        self.visible_items(absent)
            .into_iter()
            .filter_map(|item| {
                by_id
                    .get(item.id.as_str())
                    .map(|&content| PlacedWidget { item, content })
            })
            .collect()
    }

    /// Interaction-end contract: take the full new geometry array from the
    /// drag/resize surface, re-merge static constraints (constraints win
    /// over whatever the surface transiently allowed), compact vertically,
    /// re-derive expansion flags, and schedule a debounced save.
    pub fn apply_geometry(&mut self, items: Vec<GridItem>) {
        if self.disposed {
            return;
        }
        for incoming in items {
            let Some(slot) = self.layout.iter_mut().find(|it| it.id == incoming.id) else {
                continue;
            };
            let constraint = self.registry.constraint(&incoming.id);
            let (w, h) = match constraint {
                Some(c) => c.clamp(incoming.w.max(1), incoming.h.max(1)),
                None => (incoming.w.max(1), incoming.h.max(1)),
            };
            slot.x = incoming.x;
            slot.y = incoming.y;
            slot.w = w;
            slot.h = h;
            slot.constraint = constraint;
        }
        self.compact();
        self.evaluate_expansion();
        self.schedule_save();
    }

    /// Place a widget that is not yet part of the layout, using its registry
    /// default size and the first free origin on the current grid.
    pub fn add_widget(&mut self, id: &str) -> bool {
        if self.disposed || self.layout.iter().any(|item| item.id == id) {
            return false;
        }
        let Some(spec) = self.registry.spec(id) else {
            tracing::warn!(widget = id, "unknown widget not added");
            return false;
        };
        let constraint = spec.constraint();
        let (w, h) = constraint.clamp(spec.default_w, spec.default_h);
        let placement = find_free_position(&self.layout, self.columns, w, h);
        if placement.exhausted {
            self.diagnostics.placement_fallbacks += 1;
            tracing::debug!(widget = id, "placement scan exhausted, appending at bottom");
        }
        self.layout
            .push(GridItem::new(id, placement.x, placement.y, w, h).with_constraint(constraint));
        self.evaluate_expansion();
        self.schedule_save();
        true
    }

    pub fn remove_widget(&mut self, id: &str) -> bool {
        if self.disposed {
            return false;
        }
        let before = self.layout.len();
        self.layout.retain(|item| item.id != id);
        if self.layout.len() == before {
            return false;
        }
        self.expanded.remove(id);
        self.compact();
        self.schedule_save();
        true
    }

    /// Discard the in-memory layout and the persisted record, then reload
    /// the default template with current constraints.
    pub fn reset(&mut self) {
        if self.disposed {
            return;
        }
        self.dirty = false;
        self.last_mutation = None;
        self.store.reset(&self.owner);
        self.layout = self.store.load(&self.owner, &self.registry);
        self.seed_expansion();
    }

    /// Drive the debounced save. Fire-and-forget: a failed write is logged,
    /// counted, and dropped; the next mutation reschedules its own write.
    pub fn tick(&mut self) {
        if self.disposed || !self.dirty {
            return;
        }
        let Some(last) = self.last_mutation else {
            return;
        };
        if last.elapsed() < self.debounce {
            return;
        }
        self.dirty = false;
        self.last_mutation = None;
        match self.store.save(&self.owner, &self.layout) {
            Ok(()) => self.diagnostics.saves += 1,
            Err(err) => {
                self.diagnostics.write_failures += 1;
                tracing::warn!(owner = %self.owner, %err, "layout save failed");
            }
        }
    }

    /// Release callbacks and cancel any pending debounced write. A write not
    /// yet due at teardown is not flushed; the data-loss window is bounded
    /// by the debounce interval.
    pub fn dispose(&mut self) {
        self.disposed = true;
        self.expansion_cb = None;
        self.dirty = false;
        self.last_mutation = None;
    }

    fn schedule_save(&mut self) {
        self.dirty = true;
        self.last_mutation = Some(Instant::now());
    }

    fn seed_expansion(&mut self) {
        self.expanded = self
            .layout
            .iter()
            .map(|item| (item.id.clone(), should_expand(&item.id, item.w, item.h)))
            .collect();
    }

    fn evaluate_expansion(&mut self) {
        for item in &self.layout {
            let now = should_expand(&item.id, item.w, item.h);
            let prev = self.expanded.insert(item.id.clone(), now).unwrap_or(false);
            if prev != now {
                if let Some(cb) = &self.expansion_cb {
                    cb(&item.id, now);
                }
            }
        }
    }

    /// Vertical compaction only: each item shifts upward until it would
    /// overlap an already-settled item or hit row zero. Horizontal position
    /// is never auto-adjusted, and overlap is not resolved by nudging.
    fn compact(&mut self) {
        let mut order: Vec<usize> = (0..self.layout.len()).collect();
        order.sort_by_key(|&i| (self.layout[i].y, self.layout[i].x));
        let mut settled: Vec<GridItem> = Vec::with_capacity(order.len());
        for idx in order {
            let mut item = self.layout[idx].clone();
            while item.y > 0 {
                let mut probe = item.clone();
                probe.y -= 1;
                if settled.iter().any(|p| p.overlaps(&probe)) {
                    break;
                }
                item.y = probe.y;
            }
            self.layout[idx].y = item.y;
            settled.push(item);
        }
    }
}
