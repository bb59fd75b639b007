//! Map-level accessors for industry tiles.
//!
//! Every function except [`initialize_industry_tile`] requires the tile to be
//! tagged as an industry tile and panics otherwise. A tag mismatch is a bug in
//! the caller, not a condition to recover from; callers that genuinely do not
//! know the tag should use [`TileMap::industry`] instead.
//!
//! Setters touch exactly one field. Stage and counter values are truncated to
//! two bits rather than rejected.

use crate::tile_map::{Tile, TileIndex, TileMap};

use super::types::{IndustryGfx, IndustryIndex, IndustryTile};

#[inline]
#[track_caller]
fn industry(map: &TileMap, tile: TileIndex) -> &IndustryTile {
    match map.get(tile) {
        Tile::Industry(industry) => industry,
        other => panic!(
            "tile {tile} is a {} tile, expected an industry tile",
            other.tile_type().name()
        ),
    }
}

#[inline]
#[track_caller]
fn industry_mut(map: &mut TileMap, tile: TileIndex) -> &mut IndustryTile {
    match map.get_mut(tile) {
        Tile::Industry(industry) => industry,
        other => panic!(
            "tile {tile} is a {} tile, expected an industry tile",
            other.tile_type().name()
        ),
    }
}

/// Index of the industry owning this tile.
#[track_caller]
pub fn get_industry_reference(map: &TileMap, tile: TileIndex) -> IndustryIndex {
    industry(map, tile).index()
}

#[track_caller]
pub fn is_construction_completed(map: &TileMap, tile: TileIndex) -> bool {
    industry(map, tile).is_completed()
}

#[track_caller]
pub fn set_construction_completed(map: &mut TileMap, tile: TileIndex, completed: bool) {
    industry_mut(map, tile).set_completed(completed);
}

#[track_caller]
pub fn get_construction_stage(map: &TileMap, tile: TileIndex) -> u8 {
    industry(map, tile).stage()
}

#[track_caller]
pub fn set_construction_stage(map: &mut TileMap, tile: TileIndex, stage: u8) {
    industry_mut(map, tile).set_stage(stage);
}

#[track_caller]
pub fn get_construction_counter(map: &TileMap, tile: TileIndex) -> u8 {
    industry(map, tile).counter()
}

#[track_caller]
pub fn set_construction_counter(map: &mut TileMap, tile: TileIndex, counter: u8) {
    industry_mut(map, tile).set_counter(counter);
}

#[track_caller]
pub fn get_graphics_id(map: &TileMap, tile: TileIndex) -> IndustryGfx {
    industry(map, tile).gfx()
}

/// No range check: callers pick `gfx` from
/// [`lookup_graphics_range`](super::lookup_graphics_range).
#[track_caller]
pub fn set_graphics_id(map: &mut TileMap, tile: TileIndex, gfx: IndustryGfx) {
    industry_mut(map, tile).set_gfx(gfx);
}

/// Zero completion, stage and counter in a single write.
#[track_caller]
pub fn reset_construction(map: &mut TileMap, tile: TileIndex) {
    industry_mut(map, tile).reset_construction();
}

/// Turn `tile` into a freshly started industry tile, whatever it held before.
pub fn initialize_industry_tile(
    map: &mut TileMap,
    tile: TileIndex,
    index: IndustryIndex,
    gfx: IndustryGfx,
) {
    map.set_tile(tile, Tile::Industry(IndustryTile::new(index, gfx)));
}
