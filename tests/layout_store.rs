use weatherdeck::grid::item::GridItem;
use weatherdeck::grid::store::LayoutStore;
use weatherdeck::registry::{WidgetRegistry, WidgetSpec};

fn geometry(layout: &[GridItem]) -> Vec<(String, u32, u32, u32, u32)> {
    layout
        .iter()
        .map(|item| (item.id.clone(), item.x, item.y, item.w, item.h))
        .collect()
}

#[test]
fn save_then_load_round_trips_geometry() {
    let dir = tempfile::tempdir().unwrap();
    let registry = WidgetRegistry::with_defaults();
    let mut store = LayoutStore::new(dir.path());

    let layout = vec![
        GridItem::new("map", 1, 0, 2, 2),
        GridItem::new("forecast", 0, 2, 3, 2),
    ];
    store.save("austin", &layout).unwrap();
    let loaded = store.load("austin", &registry);
    assert_eq!(geometry(&loaded), geometry(&layout));
}

#[test]
fn constraint_change_applies_on_next_load_without_touching_geometry() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = LayoutStore::new(dir.path());

    let registry = WidgetRegistry::with_defaults();
    let layout = vec![GridItem::new("map", 0, 0, 4, 4)];
    store.save("austin", &layout).unwrap();

    let mut tightened = WidgetRegistry::with_defaults();
    tightened.register(
        "map",
        WidgetSpec {
            default_w: 1,
            default_h: 2,
            min_w: 1,
            min_h: 1,
            max_w: 2,
            max_h: 2,
        },
    );

    let loaded = store.load("austin", &tightened);
    let map = &loaded[0];
    // Annotation reflects the new registry; stored geometry is untouched
    // until the user resizes again.
    assert_eq!(map.constraint.unwrap().max_w, 2);
    assert_eq!((map.x, map.y, map.w, map.h), (0, 0, 4, 4));

    let reloaded = store.load("austin", &registry);
    assert_eq!(reloaded[0].constraint.unwrap().max_w, 4);
}

#[test]
fn reset_restores_the_default_template() {
    let dir = tempfile::tempdir().unwrap();
    let registry = WidgetRegistry::with_defaults();
    let mut store = LayoutStore::new(dir.path());

    store
        .save("austin", &vec![GridItem::new("map", 0, 0, 1, 1)])
        .unwrap();
    store.reset("austin");
    let loaded = store.load("austin", &registry);
    assert_eq!(loaded, LayoutStore::default_template(&registry));
}

#[test]
fn default_template_includes_the_map_slot() {
    let registry = WidgetRegistry::with_defaults();
    let template = LayoutStore::default_template(&registry);
    let map = template.iter().find(|item| item.id == "map").unwrap();
    assert_eq!((map.x, map.y, map.w, map.h), (3, 0, 1, 2));
    assert!(
        template.iter().all(|item| item.constraint.is_some()),
        "template is pre-populated with registry constraints"
    );
}

#[test]
fn non_array_payload_is_treated_as_absent() {
    let dir = tempfile::tempdir().unwrap();
    let registry = WidgetRegistry::with_defaults();
    let mut store = LayoutStore::new(dir.path());
    std::fs::write(store.path_for("austin"), r#"{"i":"map","x":0}"#).unwrap();
    let loaded = store.load("austin", &registry);
    assert_eq!(loaded, LayoutStore::default_template(&registry));
}

#[test]
fn owners_do_not_share_records() {
    let dir = tempfile::tempdir().unwrap();
    let registry = WidgetRegistry::with_defaults();
    let mut store = LayoutStore::new(dir.path());

    store
        .save("austin", &vec![GridItem::new("map", 1, 0, 2, 2)])
        .unwrap();
    let boston = store.load("boston", &registry);
    assert_eq!(boston, LayoutStore::default_template(&registry));
}
