// =============================================================================
// World seeding: scattered water and a set of industries under construction.
// =============================================================================

use bevy::prelude::*;
use rand::Rng;

use crate::config::{
    INITIAL_INDUSTRY_COUNT, MAP_HEIGHT, MAP_WIDTH, PLACEMENT_ATTEMPTS, WATER_FRACTION, WORLD_SEED,
};
use crate::industry::{place_industry, IndustryRegistry};
use crate::industry_tile::IndustryCategory;
use crate::sim_rng::SimRng;
use crate::tile_map::TileMap;

/// Marker resource that, when present, makes `init_world` leave the blank
/// default map in place. Used by the test harness.
#[derive(Resource)]
pub struct SkipWorldInit;

#[derive(Resource, Debug, Clone, PartialEq)]
pub struct WorldInitParams {
    pub width: usize,
    pub height: usize,
    pub industry_count: u32,
    /// Share of tiles turned into water before industries are placed.
    pub water_fraction: f32,
    /// `init_world` reseeds `SimRng` with this before generating.
    pub seed: u64,
}

impl Default for WorldInitParams {
    fn default() -> Self {
        Self {
            width: MAP_WIDTH,
            height: MAP_HEIGHT,
            industry_count: INITIAL_INDUSTRY_COUNT,
            water_fraction: WATER_FRACTION,
            seed: WORLD_SEED,
        }
    }
}

/// Build a fresh map and registry from `params`, drawing all randomness from
/// `rng`. The same seed always yields the same world.
pub fn generate_world(params: &WorldInitParams, rng: &mut SimRng) -> (TileMap, IndustryRegistry) {
    let mut map = TileMap::new(params.width, params.height);
    let mut registry = IndustryRegistry::default();
    if map.is_empty() {
        return (map, registry);
    }

    let water_tiles = (map.len() as f32 * params.water_fraction.clamp(0.0, 1.0)) as usize;
    for _ in 0..water_tiles {
        let x = rng.0.gen_range(0..params.width);
        let y = rng.0.gen_range(0..params.height);
        let tile = map.tile_index(x, y);
        map.make_water(tile);
    }

    for _ in 0..params.industry_count {
        let category = IndustryCategory::ALL[rng.0.gen_range(0..IndustryCategory::COUNT)];
        let width = rng.0.gen_range(2..=4u8);
        let height = rng.0.gen_range(2..=4u8);

        let mut placed = false;
        for _ in 0..PLACEMENT_ATTEMPTS {
            let x = rng.0.gen_range(0..params.width);
            let y = rng.0.gen_range(0..params.height);
            if place_industry(&mut map, &mut registry, category, x, y, width, height).is_ok() {
                placed = true;
                break;
            }
        }
        if !placed {
            warn!(
                "init_world: no room for {} ({}x{}) after {} attempts",
                category.name(),
                width,
                height,
                PLACEMENT_ATTEMPTS
            );
        }
    }

    (map, registry)
}

pub fn init_world(
    mut commands: Commands,
    mut rng: ResMut<SimRng>,
    params: Res<WorldInitParams>,
    skip: Option<Res<SkipWorldInit>>,
) {
    if skip.is_some() {
        return;
    }
    *rng = SimRng::from_seed_u64(params.seed);
    let (map, registry) = generate_world(&params, &mut rng);
    info!(
        "Generated {}x{} map (seed {}) with {} industries on {} tiles",
        map.width,
        map.height,
        params.seed,
        registry.len(),
        map.industry_tiles().count()
    );
    commands.insert_resource(map);
    commands.insert_resource(registry);
}
