//! Ordering of the `FixedUpdate` schedule.
//!
//! ```text
//! PreSim  →  Simulation  →  PostSim
//! ```
//!
//! * **PreSim** – tick counter. Everything later in the tick sees the new
//!   tick number.
//! * **Simulation** – systems that mutate the tile map or the industry
//!   registry (construction progress).
//! * **PostSim** – read-only aggregation over the state left by `Simulation`.
//!
//! Every system added to `FixedUpdate` must sit in one of these sets.

use bevy::prelude::*;

/// Configured as a chain by `SimulationPlugin`.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum SimulationSet {
    PreSim,
    Simulation,
    PostSim,
}
