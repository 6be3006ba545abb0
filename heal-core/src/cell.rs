//! Cell types and their population envelopes.
//!
//! Each cell type follows the same arrival / peak / decline shape over
//! normalized progress: absent until `arrival_t`, ramping up to
//! `max_count` at `peak_t`, holding that plateau until `decline_t`, then
//! fading back to zero by the end of the timeline. [`CellCurve::count_at`]
//! evaluates the envelope; [`CELL_CURVES`] holds the tuning for all six
//! cell types.

use crate::easing::{ease_in_quad, ease_out_quad};
use crate::types::Rgb;

/// Identifier for one of the six simulated cell types.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CellKind {
    Platelet,
    Neutrophil,
    Macrophage,
    Fibroblast,
    EndothelialCell,
    Keratinocyte,
}

impl CellKind {
    /// Human-readable plural name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Platelet => "Platelets",
            Self::Neutrophil => "Neutrophils",
            Self::Macrophage => "Macrophages",
            Self::Fibroblast => "Fibroblasts",
            Self::EndothelialCell => "Endothelial cells",
            Self::Keratinocyte => "Keratinocytes",
        }
    }

    /// All cell types, in arrival order.
    pub fn all() -> &'static [CellKind] {
        &[
            Self::Platelet,
            Self::Neutrophil,
            Self::Macrophage,
            Self::Fibroblast,
            Self::EndothelialCell,
            Self::Keratinocyte,
        ]
    }

    /// The population curve for this cell type.
    ///
    /// Table order matches variant order, so the discriminant indexes
    /// straight into [`CELL_CURVES`].
    pub fn curve(&self) -> &'static CellCurve {
        &CELL_CURVES[*self as usize]
    }
}

/// One cell type's population envelope and display attributes.
#[derive(Clone, Copy, Debug)]
pub struct CellCurve {
    pub kind: CellKind,
    /// Progress at which the first cells appear.
    pub arrival_t: f32,
    /// Progress at which the population reaches `max_count`.
    pub peak_t: f32,
    /// Progress at which the population starts to fall off.
    pub decline_t: f32,
    /// Population size across the plateau.
    pub max_count: u32,
    /// Scatter color.
    pub color: Rgb,
    /// Draw radius in world units.
    pub radius: f32,
}

impl CellCurve {
    /// Population at progress `t`.
    ///
    /// The envelope has four regions:
    /// - before `arrival_t` the count is zero;
    /// - on `[arrival_t, peak_t)` it ramps up along [`ease_out_quad`];
    /// - on `[peak_t, decline_t)` it holds exactly `max_count`;
    /// - from `decline_t` it falls off along [`ease_in_quad`] of the
    ///   remaining progress toward `t = 1`, clamped so the count reaches
    ///   zero there and stays at zero beyond.
    ///
    /// Fractional populations truncate toward zero, so the result is
    /// always within `[0, max_count]`.
    pub fn count_at(&self, t: f32) -> u32 {
        if t < self.arrival_t {
            return 0;
        }
        if t < self.peak_t {
            let ramp = (t - self.arrival_t) / (self.peak_t - self.arrival_t);
            return (self.max_count as f32 * ease_out_quad(ramp)) as u32;
        }
        if t < self.decline_t {
            return self.max_count;
        }
        let fall = ((t - self.decline_t) / (1.0 - self.decline_t)).min(1.0);
        (self.max_count as f32 * (1.0 - ease_in_quad(fall))) as u32
    }
}

/// The cell-curve table, ordered by arrival. Row `i` belongs to the
/// `i`-th [`CellKind`] variant.
pub static CELL_CURVES: [CellCurve; 6] = [
    CellCurve {
        kind: CellKind::Platelet,
        arrival_t: 0.0,
        peak_t: 0.02,
        decline_t: 0.08,
        max_count: 60,
        color: [186, 140, 196],
        radius: 1.2,
    },
    CellCurve {
        kind: CellKind::Neutrophil,
        arrival_t: 0.02,
        peak_t: 0.12,
        decline_t: 0.25,
        max_count: 80,
        color: [126, 174, 230],
        radius: 1.6,
    },
    CellCurve {
        kind: CellKind::Macrophage,
        arrival_t: 0.08,
        peak_t: 0.2,
        decline_t: 0.45,
        max_count: 48,
        color: [84, 146, 168],
        radius: 2.4,
    },
    CellCurve {
        kind: CellKind::Fibroblast,
        arrival_t: 0.18,
        peak_t: 0.42,
        decline_t: 0.75,
        max_count: 72,
        color: [118, 178, 98],
        radius: 2.0,
    },
    CellCurve {
        kind: CellKind::EndothelialCell,
        arrival_t: 0.22,
        peak_t: 0.48,
        decline_t: 0.82,
        max_count: 36,
        color: [205, 92, 92],
        radius: 1.4,
    },
    CellCurve {
        kind: CellKind::Keratinocyte,
        arrival_t: 0.3,
        peak_t: 0.65,
        decline_t: 0.95,
        max_count: 56,
        color: [222, 184, 135],
        radius: 1.8,
    },
];
