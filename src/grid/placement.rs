use crate::grid::item::GridItem;
use std::collections::HashSet;

/// Row bound on the origin scan so it always terminates.
pub const MAX_SCAN_ROWS: u32 = 200;

/// Free origin found for a new widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub x: u32,
    pub y: u32,
    /// Set when the scan was exhausted and the origin is the
    /// append-at-bottom fallback.
    pub exhausted: bool,
}

/// Find the top-left-most free origin hosting a `w x h` rectangle on a
/// column-bounded grid without overlapping `placed`.
///
/// Candidate origins are scanned in row-major order (`y` ascending, `x`
/// from 0 to `columns - w`); the first whose full footprint is unoccupied
/// wins. Worst case `O(rows * cols * w * h)`, which is fine at dashboard
/// grid sizes. Never fails: an exhausted scan (or `w > columns`) degrades
/// to appending at column 0 below the lowest occupied row.
pub fn find_free_position(placed: &[GridItem], columns: u32, w: u32, h: u32) -> Placement {
    let columns = columns.max(1);
    let w = w.max(1);
    let h = h.max(1);

    if w <= columns {
        // Stored geometry is taken as-is, so an item can carry arbitrary
        // coordinates; cells beyond the scan bound (or past the last
        // column) can never match a candidate footprint and are not built.
        let y_limit = MAX_SCAN_ROWS.saturating_add(h);
        let mut occupied: HashSet<(u32, u32)> = HashSet::new();
        for item in placed {
            let y_end = item.y.saturating_add(item.h).min(y_limit);
            let x_end = item.x.saturating_add(item.w).min(columns);
            for yy in item.y..y_end {
                for xx in item.x..x_end {
                    occupied.insert((xx, yy));
                }
            }
        }

        for y in 0..MAX_SCAN_ROWS {
            for x in 0..=columns - w {
                let free = (y..y + h).all(|yy| (x..x + w).all(|xx| !occupied.contains(&(xx, yy))));
                if free {
                    return Placement { x, y, exhausted: false };
                }
            }
        }
    }

    let bottom = placed
        .iter()
        .map(|item| item.y.saturating_add(item.h))
        .max()
        .unwrap_or(0);
    Placement { x: 0, y: bottom, exhausted: true }
}
