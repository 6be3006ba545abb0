//! Per-cell-type scatter positions inside the wound bed.

use glam::Vec2;
use rand::Rng;

use crate::cell::CellKind;
use crate::wound::WoundBed;

/// The visible scatter for one cell type.
///
/// The population curve decides how many cells exist at a given
/// progress value; a `CellField` owns where they sit. Positions persist
/// across syncs so the scatter stays stable from frame to frame while
/// the population grows and shrinks around it.
#[derive(Debug)]
pub struct CellField {
    pub kind: CellKind,
    pub points: Vec<Vec2>,
}

impl CellField {
    pub fn new(kind: CellKind) -> Self {
        Self {
            kind,
            points: Vec::new(),
        }
    }

    /// Brings the scatter to exactly `target` points inside `bed`.
    ///
    /// Points stranded outside the (possibly shrunken) bed are culled
    /// first, then fresh random points are spawned until the target is
    /// met; any excess beyond the target is dropped from the end.
    pub fn sync_to(&mut self, target: usize, bed: &WoundBed, rng: &mut impl Rng) {
        self.points.retain(|&p| bed.contains(p));
        while self.points.len() < target {
            self.points.push(bed.random_point(rng));
        }
        self.points.truncate(target);
    }
}
