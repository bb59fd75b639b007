//! Construction progress of industry tiles.
//!
//! A fresh tile counts up through four counter steps per stage and four stages
//! before it is marked completed, i.e. 16 construction steps in total. One step
//! is taken every `ConstructionParams::tick_interval` fixed ticks.

use bevy::prelude::*;

use crate::config::CONSTRUCTION_TICK_INTERVAL;
use crate::industry::{industry_at, IndustryRegistry};
use crate::industry_tile::IndustryTile;
use crate::tile_map::{TileIndex, TileMap};
use crate::TickCounter;

const LAST_STAGE: u8 = 3;
const COUNTER_STEPS: u8 = 4;

// ---------------------------------------------------------------------------
// Params
// ---------------------------------------------------------------------------

#[derive(Resource, Debug, Clone, PartialEq, Eq, bitcode::Encode, bitcode::Decode)]
pub struct ConstructionParams {
    /// Fixed ticks between construction steps. Zero pauses construction.
    pub tick_interval: u32,
}

impl Default for ConstructionParams {
    fn default() -> Self {
        Self {
            tick_interval: CONSTRUCTION_TICK_INTERVAL,
        }
    }
}

impl crate::Saveable for ConstructionParams {
    const SAVE_KEY: &'static str = "construction_params";

    fn save_to_bytes(&self) -> Option<Vec<u8>> {
        if *self == Self::default() {
            return None;
        }
        Some(bitcode::encode(self))
    }

    fn load_from_bytes(bytes: &[u8]) -> Self {
        crate::decode_or_warn(Self::SAVE_KEY, bytes)
    }
}

// ---------------------------------------------------------------------------
// Progress step
// ---------------------------------------------------------------------------

/// Take one construction step. Returns `true` only on the step that completes
/// the tile; completed tiles are left alone.
pub fn advance_construction(tile: &mut IndustryTile) -> bool {
    if tile.is_completed() {
        return false;
    }
    let counter = tile.counter() + 1;
    if counter < COUNTER_STEPS {
        tile.set_counter(counter);
        return false;
    }
    tile.set_counter(0);
    let stage = tile.stage();
    if stage < LAST_STAGE {
        tile.set_stage(stage + 1);
        false
    } else {
        tile.set_completed(true);
        true
    }
}

// ---------------------------------------------------------------------------
// System
// ---------------------------------------------------------------------------

/// Running totals, mainly for logging and tests.
#[derive(Resource, Debug, Default, Clone, PartialEq, Eq)]
pub struct ConstructionStats {
    pub tiles_completed: u64,
    pub industries_completed: u64,
}

pub fn tick_industry_construction(
    tick: Res<TickCounter>,
    params: Res<ConstructionParams>,
    registry: Res<IndustryRegistry>,
    mut map: ResMut<TileMap>,
    mut stats: ResMut<ConstructionStats>,
) {
    if params.tick_interval == 0 || !tick.0.is_multiple_of(u64::from(params.tick_interval)) {
        return;
    }

    let mut finished: Vec<TileIndex> = Vec::new();
    for (tile, industry) in map.industry_tiles_mut() {
        if advance_construction(industry) {
            finished.push(tile);
        }
    }
    if finished.is_empty() {
        return;
    }
    stats.tiles_completed += finished.len() as u64;

    // An industry is done once its last footprint tile completes.
    let mut reported = Vec::new();
    for &tile in &finished {
        let Ok(index) = map.industry(tile).map(IndustryTile::index) else {
            continue;
        };
        if reported.contains(&index) {
            continue;
        }
        let Some(industry) = industry_at(&map, &registry, tile) else {
            warn!("Industry tile {} references missing {}", tile, index);
            continue;
        };
        let done = industry.footprint(&map).all(|t| {
            map.industry(t)
                .map(|it| it.index() != index || it.is_completed())
                .unwrap_or(true)
        });
        if done {
            stats.industries_completed += 1;
            info!(
                "{} ({}) finished construction",
                industry.category.name(),
                index
            );
        }
        reported.push(index);
    }
}

pub struct ConstructionPlugin;

impl Plugin for ConstructionPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ConstructionParams>()
            .init_resource::<ConstructionStats>()
            .add_systems(
                FixedUpdate,
                tick_industry_construction.in_set(crate::SimulationSet::Simulation),
            );

        app.init_resource::<crate::SaveableRegistry>();
        app.world_mut()
            .resource_mut::<crate::SaveableRegistry>()
            .register::<ConstructionParams>();
    }
}
