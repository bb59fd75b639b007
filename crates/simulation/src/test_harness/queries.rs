use bevy::prelude::*;

use crate::construction::ConstructionStats;
use crate::industry::{Industry, IndustryRegistry};
use crate::industry_tile::{IndustryIndex, IndustryTile};
use crate::tile_map::{TileIndex, TileMap};
use crate::TickCounter;

use super::TestMap;

impl TestMap {
    // -----------------------------------------------------------------------
    // Simulation control
    // -----------------------------------------------------------------------

    /// Run `n` fixed-update ticks.
    pub fn tick(&mut self, n: u32) {
        for _ in 0..n {
            self.app.world_mut().run_schedule(FixedUpdate);
        }
    }

    // -----------------------------------------------------------------------
    // Queries
    // -----------------------------------------------------------------------

    pub fn world_mut(&mut self) -> &mut World {
        self.app.world_mut()
    }

    pub fn resource<T: Resource>(&self) -> &T {
        self.app.world().resource::<T>()
    }

    pub fn map(&self) -> &TileMap {
        self.resource::<TileMap>()
    }

    pub fn map_mut(&mut self) -> Mut<'_, TileMap> {
        self.app.world_mut().resource_mut::<TileMap>()
    }

    pub fn registry(&self) -> &IndustryRegistry {
        self.resource::<IndustryRegistry>()
    }

    pub fn industry(&self, index: IndustryIndex) -> Option<&Industry> {
        self.registry().get(index)
    }

    pub fn tile(&self, x: usize, y: usize) -> TileIndex {
        self.map().tile_index(x, y)
    }

    /// Industry payload at `(x, y)`. Panics if the tile is not an industry tile.
    pub fn industry_tile(&self, x: usize, y: usize) -> IndustryTile {
        let map = self.map();
        *map.industry(map.tile_index(x, y))
            .unwrap_or_else(|e| panic!("({x}, {y}): {e}"))
    }

    pub fn construction_stats(&self) -> &ConstructionStats {
        self.resource::<ConstructionStats>()
    }

    pub fn tick_count(&self) -> u64 {
        self.resource::<TickCounter>().0
    }
}
