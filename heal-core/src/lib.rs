//! Core library for the wound-healing timeline model.
//!
//! Everything is driven by a single normalized progress value `t` in
//! `[0, 1]`, covering roughly a year of healing from the moment of
//! injury. The modules answer different questions about that instant:
//!
//! - [`phase`]: which healing phase is active, and what day is it?
//! - [`cell`]: how many cells of each type populate the wound?
//! - [`milestone`]: which discrete biological events have occurred?
//! - [`wound`]: how far has the wound closed, and what region is it?
//! - [`field`]: where do the individual cells sit inside that region?
//! - [`easing`]: the shared easing curves behind the envelopes.
//!
//! All timeline queries are pure functions over static tables; only
//! [`field::CellField`] carries state, and that state is purely visual.

pub mod cell;
pub mod easing;
pub mod field;
pub mod milestone;
pub mod phase;
pub mod types;
pub mod wound;
