// File: crates/trend-core/src/scene.rs
// Summary: Retained marker set with keyed enter/update/exit reconciliation and pointer hit testing.
// Notes:
// - Markers are keyed by (year, occurrence of that year in the data), so duplicate
//   years within one scenario still get one marker each.
// - A matched marker keeps its `id`; only entered markers get fresh ids.

use std::collections::HashMap;

use crate::geometry::Point;
use crate::record::Record;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MarkerKey {
    pub year: i32,
    pub occurrence: u32,
}

/// One point marker bound to its record. `center` is in plot-local units.
#[derive(Clone, Debug, PartialEq)]
pub struct Marker {
    pub id: u64,
    pub key: MarkerKey,
    pub center: Point,
    pub datum: Record,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ReconcileStats {
    pub entered: usize,
    pub updated: usize,
    pub exited: usize,
}

#[derive(Clone, Debug, Default)]
pub struct Scene {
    markers: Vec<Marker>,
    next_id: u64,
}

impl Scene {
    pub fn new() -> Self { Self::default() }

    /// Markers in draw order (later ones are on top).
    pub fn markers(&self) -> &[Marker] { &self.markers }

    /// Make the marker set match `data` (in order): create missing keys,
    /// update matched ones in place, drop stale ones.
    pub fn reconcile<'a, I>(&mut self, data: I) -> ReconcileStats
    where
        I: IntoIterator<Item = (&'a Record, Point)>,
    {
        let mut existing: HashMap<MarkerKey, Marker> =
            self.markers.drain(..).map(|m| (m.key, m)).collect();
        let mut seen: HashMap<i32, u32> = HashMap::new();
        let mut stats = ReconcileStats::default();
        let mut next = Vec::new();

        for (record, center) in data {
            let occurrence = seen.entry(record.year).or_insert(0);
            let key = MarkerKey { year: record.year, occurrence: *occurrence };
            *occurrence += 1;

            match existing.remove(&key) {
                Some(mut m) => {
                    m.center = center;
                    m.datum = record.clone();
                    stats.updated += 1;
                    next.push(m);
                }
                None => {
                    let id = self.next_id;
                    self.next_id += 1;
                    stats.entered += 1;
                    next.push(Marker { id, key, center, datum: record.clone() });
                }
            }
        }

        stats.exited = existing.len();
        self.markers = next;
        stats
    }

    /// Topmost marker whose center lies within `radius` of `p`.
    pub fn hit_test(&self, p: Point, radius: f32) -> Option<&Marker> {
        self.markers.iter().rev().find(|m| m.center.distance(p) <= radius)
    }
}
