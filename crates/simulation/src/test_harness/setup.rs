//! Builder methods for tile and industry layout in integration tests.

use bevy::prelude::*;

use crate::construction::ConstructionParams;
use crate::industry::{place_industry, IndustryRegistry};
use crate::industry_tile::{IndustryCategory, IndustryIndex};
use crate::tile_map::TileMap;

use super::TestMap;

impl TestMap {
    /// Place an industry and return its index. Panics if the footprint does
    /// not fit, since that is a mistake in the test itself.
    pub fn add_industry(
        &mut self,
        category: IndustryCategory,
        x: usize,
        y: usize,
        width: u8,
        height: u8,
    ) -> IndustryIndex {
        let world = self.app.world_mut();
        world.resource_scope(|world, mut map: Mut<TileMap>| {
            let mut registry = world.resource_mut::<IndustryRegistry>();
            place_industry(&mut map, &mut registry, category, x, y, width, height)
                .unwrap_or_else(|e| panic!("test industry placement failed: {e}"))
        })
    }

    pub fn with_industry(
        mut self,
        category: IndustryCategory,
        x: usize,
        y: usize,
        width: u8,
        height: u8,
    ) -> Self {
        self.add_industry(category, x, y, width, height);
        self
    }

    pub fn with_water(mut self, x: usize, y: usize) -> Self {
        let mut map = self.app.world_mut().resource_mut::<TileMap>();
        let tile = map.tile_index(x, y);
        map.make_water(tile);
        self
    }

    pub fn with_road(mut self, x: usize, y: usize, pieces: u8) -> Self {
        let mut map = self.app.world_mut().resource_mut::<TileMap>();
        let tile = map.tile_index(x, y);
        map.make_road(tile, pieces);
        self
    }

    /// Take a construction step every `interval` ticks (1 = every tick).
    pub fn with_construction_interval(mut self, interval: u32) -> Self {
        self.app
            .world_mut()
            .resource_mut::<ConstructionParams>()
            .tick_interval = interval;
        self
    }
}
