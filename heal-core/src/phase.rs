//! Healing phases and the day-label formatter.
//!
//! The timeline splits into three contiguous phases, each owning a
//! half-open slice `[t_start, t_end)` of normalized progress and the
//! matching range of simulated days:
//!
//! 1. Inflammatory: clotting, debris clearance, immune recruitment.
//! 2. Proliferative: granulation tissue and re-epithelialization.
//! 3. Remodeling: collagen realignment and scar maturation.
//!
//! [`phase_at`] resolves progress to a phase, [`day_at`] interpolates
//! the simulated day, and [`day_label`] formats it for display.

use crate::types::Rgb;

/// Identifier for one of the three healing phases.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PhaseKind {
    Inflammatory,
    Proliferative,
    Remodeling,
}

impl PhaseKind {
    /// Human-readable phase name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Inflammatory => "Inflammatory",
            Self::Proliferative => "Proliferative",
            Self::Remodeling => "Remodeling",
        }
    }

    /// All phases, in timeline order.
    pub fn all() -> &'static [PhaseKind] {
        &[Self::Inflammatory, Self::Proliferative, Self::Remodeling]
    }
}

/// One healing phase: a progress slice, its day range, and display data.
#[derive(Clone, Copy, Debug)]
pub struct Phase {
    pub kind: PhaseKind,
    /// Start of the half-open progress interval `[t_start, t_end)`.
    pub t_start: f32,
    /// End of the half-open progress interval.
    pub t_end: f32,
    /// Simulated day at `t_start`.
    pub day_start: f32,
    /// Simulated day at `t_end`.
    pub day_end: f32,
    /// One-line description shown in the phase card.
    pub summary: &'static str,
    /// Tint for the open wound while this phase is active.
    pub color: Rgb,
}

/// The phase table. Intervals are contiguous and cover `[0, 1]`, and day
/// ranges chain so interpolation is continuous across boundaries.
pub static PHASES: [Phase; 3] = [
    Phase {
        kind: PhaseKind::Inflammatory,
        t_start: 0.0,
        t_end: 0.15,
        day_start: 0.0,
        day_end: 4.0,
        summary: "Clotting, debris clearance, and immune cell recruitment.",
        color: [214, 69, 56],
    },
    Phase {
        kind: PhaseKind::Proliferative,
        t_start: 0.15,
        t_end: 0.6,
        day_start: 4.0,
        day_end: 30.0,
        summary: "Granulation tissue, new vessels, and re-epithelialization.",
        color: [226, 125, 96],
    },
    Phase {
        kind: PhaseKind::Remodeling,
        t_start: 0.6,
        t_end: 1.0,
        day_start: 30.0,
        day_end: 365.0,
        summary: "Collagen realignment and scar maturation.",
        color: [201, 168, 154],
    },
];

/// Returns the phase whose interval contains `t`.
///
/// Scans the table in order and takes the first phase with
/// `t_start <= t < t_end`. Progress outside `[0, 1)`, including the
/// endpoint `t == 1`, falls through to the last phase; the input is
/// never validated.
pub fn phase_at(t: f32) -> &'static Phase {
    PHASES
        .iter()
        .find(|p| t >= p.t_start && t < p.t_end)
        .unwrap_or(&PHASES[PHASES.len() - 1])
}

/// Interpolates the simulated day for a progress value.
///
/// The fractional position of `t` inside the resolved phase's progress
/// interval maps linearly onto the phase's day range. Relies on the
/// table invariant that every interval is non-degenerate.
pub fn day_at(t: f32) -> f32 {
    let phase = phase_at(t);
    let frac = (t - phase.t_start) / (phase.t_end - phase.t_start);
    phase.day_start + (phase.day_end - phase.day_start) * frac
}

/// Formats the simulated day for `t` into a coarse human-readable bucket.
///
/// Under one day reads "Hours after injury"; after that the label steps
/// through "Day N", "Week N", "Month N", and "Year N" at the 7, 30, and
/// 365 day marks. Unit counts truncate toward zero.
pub fn day_label(t: f32) -> String {
    let day = day_at(t);
    if day < 1.0 {
        "Hours after injury".to_owned()
    } else if day < 7.0 {
        format!("Day {}", day as u32)
    } else if day < 30.0 {
        format!("Week {}", (day / 7.0) as u32)
    } else if day < 365.0 {
        format!("Month {}", (day / 30.0) as u32)
    } else {
        format!("Year {}", (day / 365.0) as u32)
    }
}
