use fnv::{FnvHashMap, FnvHashSet};
use glam::Vec2;
use smallvec::SmallVec;

use super::dot::Dot;

pub type CellKey = (i32, i32);

/// Uniform grid hash from cell coordinates to the dots inside that cell.
///
/// Built in one pass from a dot slice and never patched afterwards; any
/// geometry change goes through [`SpatialIndex::build`] again.
#[derive(Clone, Debug)]
pub struct SpatialIndex {
    cell_size: f32,
    inv_cell_size: f32,
    cells: FnvHashMap<CellKey, SmallVec<[u32; 8]>>,
    len: usize,
}

impl SpatialIndex {
    pub fn empty(cell_size: f32) -> Self {
        let cell_size = if cell_size.is_finite() && cell_size > 0.0 {
            cell_size
        } else {
            1.0
        };
        Self {
            cell_size,
            inv_cell_size: 1.0 / cell_size,
            cells: FnvHashMap::default(),
            len: 0,
        }
    }

    pub fn build(dots: &[Dot], cell_size: f32) -> Self {
        let mut index = Self::empty(cell_size);
        for (i, dot) in dots.iter().enumerate() {
            let key = index.cell_of(dot.position);
            index.cells.entry(key).or_default().push(i as u32);
        }
        index.len = dots.len();
        index
    }

    #[inline]
    pub fn cell_size(&self) -> f32 {
        self.cell_size
    }

    /// Number of indexed dots.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    pub fn cell_of(&self, pos: Vec2) -> CellKey {
        (
            (pos.x * self.inv_cell_size).floor() as i32,
            (pos.y * self.inv_cell_size).floor() as i32,
        )
    }

    pub fn bucket(&self, key: CellKey) -> &[u32] {
        self.cells.get(&key).map(|b| b.as_slice()).unwrap_or(&[])
    }

    pub fn keys(&self) -> impl Iterator<Item = &CellKey> {
        self.cells.keys()
    }

    /// Visit every dot in the square block of cells covering `radius` around
    /// `center`. This is a broad phase: callers still filter by distance.
    pub fn query(&self, center: Vec2, radius: f32, mut visit: impl FnMut(u32)) {
        if self.cells.is_empty() || !center.is_finite() || radius.is_nan() || radius < 0.0 {
            return;
        }
        let reach = (radius * self.inv_cell_size).ceil().min(i32::MAX as f32) as i64;
        let block = (2 * reach + 1).saturating_mul(2 * reach + 1);
        if block >= self.cells.len() as i64 {
            // The block covers at least as many keys as exist; scan buckets directly.
            let (cx, cy) = self.cell_of(center);
            for (&(kx, ky), bucket) in &self.cells {
                let near = (kx as i64 - cx as i64).abs() <= reach
                    && (ky as i64 - cy as i64).abs() <= reach;
                if near {
                    for &i in bucket {
                        visit(i);
                    }
                }
            }
            return;
        }
        let reach = reach as i32;
        let (cx, cy) = self.cell_of(center);
        for dy in -reach..=reach {
            for dx in -reach..=reach {
                let key = (cx.saturating_add(dx), cy.saturating_add(dy));
                if let Some(bucket) = self.cells.get(&key) {
                    for &i in bucket {
                        visit(i);
                    }
                }
            }
        }
    }

    pub fn query_set(&self, center: Vec2, radius: f32) -> FnvHashSet<u32> {
        let mut out = FnvHashSet::default();
        self.query(center, radius, |i| {
            out.insert(i);
        });
        out
    }
}
