use crate::grid::cache::LayoutCache;
use crate::grid::item::{GridItem, Layout};
use crate::registry::WidgetRegistry;
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const DEFAULT_NAMESPACE: &str = "weatherdeck";

/// Durable per-owner-id storage for layouts.
///
/// One JSON file per owner id under the store directory, named
/// `<namespace>_<slug(owner)>.json`, holding an array of `{i,x,y,w,h}`.
/// Constraints and thresholds are never embedded; they are recomputed from
/// the registry at load time, keeping the format forward-compatible with
/// constraint changes.
pub struct LayoutStore {
    dir: PathBuf,
    namespace: String,
    cache: Option<LayoutCache>,
}

impl LayoutStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self::with_namespace(dir, DEFAULT_NAMESPACE)
    }

    pub fn with_namespace(dir: impl Into<PathBuf>, namespace: &str) -> Self {
        Self {
            dir: dir.into(),
            namespace: namespace.to_string(),
            cache: None,
        }
    }

    /// Serve repeat loads from memory for `ttl` before re-reading disk.
    pub fn with_cache(mut self, ttl: Duration) -> Self {
        self.cache = Some(LayoutCache::new(ttl));
        self
    }

    pub fn default_dir() -> PathBuf {
        dirs_next::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("weatherdeck")
    }

    pub fn path_for(&self, owner: &str) -> PathBuf {
        self.dir
            .join(format!("{}_{}.json", self.namespace, slug::slugify(owner)))
    }

    /// Read the persisted layout for `owner`, falling back to the default
    /// template when nothing usable is stored. Each item's constraint is
    /// re-merged from `registry` before returning; stored geometry itself is
    /// never auto-corrected, only annotated.
    pub fn load(&mut self, owner: &str, registry: &WidgetRegistry) -> Layout {
        let cached = self.cache.as_ref().and_then(|cache| cache.get(owner));
        let mut layout = match cached {
            Some(layout) => layout,
            None => match read_stored(&self.path_for(owner)) {
                Some(layout) => {
                    if let Some(cache) = self.cache.as_mut() {
                        cache.put(owner, layout.clone());
                    }
                    layout
                }
                None => Self::default_template(registry),
            },
        };
        merge_constraints(&mut layout, registry);
        layout
    }

    /// Persist `layout` for `owner`. Only `{i,x,y,w,h}` is durable; the
    /// constraint annotation is stripped by serialization.
    pub fn save(&mut self, owner: &str, layout: &Layout) -> anyhow::Result<()> {
        std::fs::create_dir_all(&self.dir)?;
        let json = serde_json::to_string_pretty(layout)?;
        std::fs::write(self.path_for(owner), json)?;
        if let Some(cache) = self.cache.as_mut() {
            cache.put(owner, layout.clone());
        }
        tracing::debug!(owner, items = layout.len(), "layout saved");
        Ok(())
    }

    /// Delete the persisted record; the next `load` yields the default
    /// template with current constraints merged in.
    pub fn reset(&mut self, owner: &str) {
        if let Err(err) = std::fs::remove_file(self.path_for(owner)) {
            tracing::debug!(owner, %err, "no stored layout removed on reset");
        }
        if let Some(cache) = self.cache.as_mut() {
            cache.invalidate(owner);
        }
    }

    /// Fixed hand-authored layout covering all first-class widgets,
    /// pre-populated with registry constraints.
    pub fn default_template(registry: &WidgetRegistry) -> Layout {
        [
            ("conditions", 0, 0, 1, 2),
            ("forecast", 1, 0, 2, 2),
            ("map", 3, 0, 1, 2),
            ("markets", 0, 2, 2, 2),
            ("satellite", 2, 2, 2, 2),
            ("history", 0, 4, 2, 2),
            ("alerts", 2, 4, 1, 1),
            ("notes", 3, 4, 1, 2),
        ]
        .iter()
        .map(|&(id, x, y, w, h)| {
            let mut item = GridItem::new(id, x, y, w, h);
            item.constraint = registry.constraint(id);
            item
        })
        .collect()
    }
}

/// Annotate every item with its current registry constraint. Items for
/// widget ids the registry no longer knows keep their geometry, unannotated.
pub fn merge_constraints(layout: &mut Layout, registry: &WidgetRegistry) {
    for item in layout.iter_mut() {
        item.constraint = registry.constraint(&item.id);
    }
}

/// Anything not a non-empty array of items with an id field is treated as
/// absent; read and parse failures are swallowed here.
fn read_stored(path: &Path) -> Option<Layout> {
    let content = std::fs::read_to_string(path).ok()?;
    match serde_json::from_str::<Layout>(&content) {
        Ok(layout) if !layout.is_empty() => Some(layout),
        Ok(_) => None,
        Err(err) => {
            tracing::warn!(path = %path.display(), %err, "stored layout unreadable, using defaults");
            None
        }
    }
}
