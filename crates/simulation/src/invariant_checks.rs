//! Periodic audit of industry tiles against the registry and the graphics
//! range table.
//!
//! Neither the tile accessors nor the registry enforce these relations, so
//! this pass only reports: violations are logged and counted, never repaired.

use bevy::prelude::*;

use crate::industry::IndustryRegistry;
use crate::industry_tile::graphics_in_range;
use crate::tile_map::TileMap;
use crate::TickCounter;

/// Fixed ticks between two audits.
pub const AUDIT_INTERVAL: u64 = 100;

/// Result of the most recent audit. Used by integration tests.
#[derive(Resource, Default, Debug, Clone, PartialEq, Eq)]
pub struct IndustryInvariantViolations {
    /// Industry tiles whose index resolves to no live industry.
    pub dangling_references: u32,
    /// Industry tiles whose graphics id lies outside their category's range.
    pub gfx_out_of_range: u32,
}

/// Count violations over the whole map. Pure; the system wraps it.
pub fn audit_industry_tiles(map: &TileMap, registry: &IndustryRegistry) -> IndustryInvariantViolations {
    let mut violations = IndustryInvariantViolations::default();
    for (tile, industry_tile) in map.industry_tiles() {
        match registry.get(industry_tile.index()) {
            None => {
                violations.dangling_references += 1;
                debug!(
                    "Industry tile {} references missing {}",
                    tile,
                    industry_tile.index()
                );
            }
            Some(industry) if !graphics_in_range(industry.category, industry_tile.gfx()) => {
                violations.gfx_out_of_range += 1;
                debug!(
                    "Industry tile {} has gfx {} outside the {} range",
                    tile,
                    industry_tile.gfx(),
                    industry.category.name()
                );
            }
            Some(_) => {}
        }
    }
    violations
}

pub fn validate_industry_tiles(
    tick: Res<TickCounter>,
    map: Res<TileMap>,
    registry: Res<IndustryRegistry>,
    mut violations: ResMut<IndustryInvariantViolations>,
) {
    if !tick.0.is_multiple_of(AUDIT_INTERVAL) {
        return;
    }
    *violations = audit_industry_tiles(&map, &registry);
    if violations.dangling_references > 0 || violations.gfx_out_of_range > 0 {
        warn!(
            "Invariant violation: {} dangling industry references, {} graphics ids out of range",
            violations.dangling_references, violations.gfx_out_of_range
        );
    }
}

pub struct InvariantChecksPlugin;

impl Plugin for InvariantChecksPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<IndustryInvariantViolations>().add_systems(
            FixedUpdate,
            validate_industry_tiles.in_set(crate::SimulationSet::PostSim),
        );
    }
}
