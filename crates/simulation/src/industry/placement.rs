use std::fmt;

use bevy::prelude::*;

use crate::industry_tile::{
    initialize_industry_tile, lookup_graphics_range, IndustryCategory, IndustryGfx, IndustryIndex,
};
use crate::tile_map::{Tile, TileIndex, TileMap, TileType};

use super::types::{Industry, IndustryRegistry};

/// Why an industry could not be placed. The map and registry are untouched
/// whenever one of these is returned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlacementError {
    /// The footprint is empty (zero width or height).
    EmptyFootprint,
    /// Part of the footprint lies outside the map.
    OutOfBounds { x: usize, y: usize },
    /// A footprint tile is not clear land.
    Occupied { tile: TileIndex, found: TileType },
    /// The registry has no free index left.
    RegistryFull,
}

impl fmt::Display for PlacementError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlacementError::EmptyFootprint => write!(f, "industry footprint is empty"),
            PlacementError::OutOfBounds { x, y } => {
                write!(f, "footprint tile ({x}, {y}) is outside the map")
            }
            PlacementError::Occupied { tile, found } => {
                write!(f, "footprint tile {tile} is occupied by {}", found.name())
            }
            PlacementError::RegistryFull => write!(f, "no free industry index"),
        }
    }
}

impl std::error::Error for PlacementError {}

/// Graphics id of the `n`th footprint tile: cycles through the category's
/// registered range so every id stays inside it.
fn footprint_gfx(category: IndustryCategory, n: usize) -> IndustryGfx {
    let (min, max) = lookup_graphics_range(category);
    let span = usize::from(max - min) + 1;
    min + (n % span) as IndustryGfx
}

/// Register a new industry and turn its `width x height` footprint, anchored
/// at `(x, y)`, into freshly started industry tiles.
pub fn place_industry(
    map: &mut TileMap,
    registry: &mut IndustryRegistry,
    category: IndustryCategory,
    x: usize,
    y: usize,
    width: u8,
    height: u8,
) -> Result<IndustryIndex, PlacementError> {
    if width == 0 || height == 0 {
        return Err(PlacementError::EmptyFootprint);
    }
    let (w, h) = (usize::from(width), usize::from(height));
    let x_end = x.checked_add(w).filter(|&end| end <= map.width);
    let y_end = y.checked_add(h).filter(|&end| end <= map.height);
    let (Some(x_end), Some(y_end)) = (x_end, y_end) else {
        // Report the first footprint tile that falls off the map.
        let bad_x = if x_end.is_none() { x.max(map.width) } else { x };
        let bad_y = if x_end.is_none() { y } else { y.max(map.height) };
        return Err(PlacementError::OutOfBounds { x: bad_x, y: bad_y });
    };
    for fy in y..y_end {
        for fx in x..x_end {
            let tile = map.tile_index(fx, fy);
            if *map.get(tile) != Tile::Clear {
                return Err(PlacementError::Occupied {
                    tile,
                    found: map.tile_type(tile),
                });
            }
        }
    }

    let industry = Industry {
        category,
        origin: map.tile_index(x, y),
        width,
        height,
    };
    let index = registry
        .insert(industry)
        .ok_or(PlacementError::RegistryFull)?;

    let tiles: Vec<TileIndex> = industry.footprint(map).collect();
    for (n, tile) in tiles.into_iter().enumerate() {
        initialize_industry_tile(map, tile, index, footprint_gfx(category, n));
    }

    debug!(
        "Placed {} ({}) at ({}, {}) size {}x{}",
        category.name(),
        index,
        x,
        y,
        width,
        height
    );
    Ok(index)
}

/// Free `index` and clear every footprint tile that still points at it.
pub fn remove_industry(
    map: &mut TileMap,
    registry: &mut IndustryRegistry,
    index: IndustryIndex,
) -> Option<Industry> {
    let industry = registry.remove(index)?;
    let tiles: Vec<TileIndex> = industry.footprint(map).collect();
    for tile in tiles {
        if matches!(map.try_get(tile), Ok(Tile::Industry(t)) if t.index() == index) {
            map.make_clear(tile);
        }
    }
    debug!("Removed {} ({})", industry.category.name(), index);
    Some(industry)
}
