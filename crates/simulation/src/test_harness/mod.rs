//! # TestMap — headless integration test harness
//!
//! Wraps `bevy::app::App` + `SimulationPlugin` without a window or renderer.
//! Builder methods lay out tiles and industries; `tick()` runs `FixedUpdate`
//! directly so tests do not depend on wall-clock time.

mod assertions;
mod queries;
mod setup;

use bevy::app::App;
use bevy::prelude::*;

use crate::industry::IndustryRegistry;
use crate::tile_map::TileMap;
use crate::world_init::SkipWorldInit;
use crate::SimulationPlugin;

pub struct TestMap {
    app: App,
}

impl TestMap {
    /// Blank map of the given size: every tile clear, no industries.
    pub fn new(width: usize, height: usize) -> Self {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins);

        // Insert the marker BEFORE SimulationPlugin so init_world skips.
        app.insert_resource(SkipWorldInit);
        app.add_plugins(SimulationPlugin);
        app.insert_resource(TileMap::new(width, height));
        app.insert_resource(IndustryRegistry::default());

        // Run Startup once (init_world no-ops).
        app.update();

        Self { app }
    }

    /// Full `init_world` generation with the default seed.
    pub fn generated() -> Self {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins);
        app.add_plugins(SimulationPlugin);
        app.update();
        Self { app }
    }
}

impl Default for TestMap {
    fn default() -> Self {
        Self::new(64, 64)
    }
}
