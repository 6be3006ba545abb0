//! Discrete milestone events on the healing timeline.

/// A named, single-instant biological event.
#[derive(Clone, Copy, Debug)]
pub struct Milestone {
    /// Progress at which the event fires.
    pub t: f32,
    /// Short display label.
    pub label: &'static str,
    /// One-line description for the event log.
    pub detail: &'static str,
}

/// The milestone table, in ascending trigger order.
pub static MILESTONES: [Milestone; 10] = [
    Milestone {
        t: 0.02,
        label: "Clot Formation",
        detail: "Platelets aggregate into a fibrin plug that seals the wound.",
    },
    Milestone {
        t: 0.06,
        label: "Neutrophil Influx",
        detail: "Neutrophils flood the site to clear debris and bacteria.",
    },
    Milestone {
        t: 0.12,
        label: "Macrophage Arrival",
        detail: "Macrophages take over phagocytosis and direct the repair.",
    },
    Milestone {
        t: 0.2,
        label: "Granulation Begins",
        detail: "Fibroblasts lay down the provisional collagen matrix.",
    },
    Milestone {
        t: 0.28,
        label: "New Vessels Sprout",
        detail: "Angiogenesis grows capillaries into the wound bed.",
    },
    Milestone {
        t: 0.36,
        label: "Re-epithelialization",
        detail: "Keratinocytes migrate across the granulation tissue.",
    },
    Milestone {
        t: 0.45,
        label: "Collagen Deposition Peaks",
        detail: "Type III collagen production reaches its height.",
    },
    Milestone {
        t: 0.55,
        label: "Wound Contraction",
        detail: "Myofibroblasts draw the wound edges together.",
    },
    Milestone {
        t: 0.7,
        label: "Epithelium Closes",
        detail: "A continuous epithelial layer seals the surface.",
    },
    Milestone {
        t: 0.9,
        label: "Scar Maturation",
        detail: "Collagen remodels and cross-links while the scar pales.",
    },
];

/// Returns every milestone whose trigger has been reached by `t`.
///
/// A milestone at exactly `t` counts as reached. Since the table
/// ascends, the result is always a prefix of [`MILESTONES`] in declared
/// order.
pub fn reached_by(t: f32) -> impl Iterator<Item = &'static Milestone> {
    MILESTONES.iter().filter(move |m| m.t <= t)
}
