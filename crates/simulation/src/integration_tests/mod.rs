//! Integration tests driven by the `TestMap` harness.
//!
//! These spin up a headless Bevy App with `SimulationPlugin` and check the
//! industry tile state across systems, save/load and world seeding.
