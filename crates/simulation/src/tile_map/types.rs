use std::fmt;

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::config::{MAP_HEIGHT, MAP_WIDTH};
use crate::industry_tile::IndustryTile;

// =============================================================================
// Tile handles and tags
// =============================================================================

/// Linear handle into the [`TileMap`] arena (`y * width + x`).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
pub struct TileIndex(pub u32);

impl TileIndex {
    #[inline]
    pub fn as_usize(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for TileIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Payload-free tag of a [`Tile`]. Discriminants are stable and persisted.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TileType {
    Clear = 0,
    Road = 2,
    Water = 6,
    Industry = 8,
}

impl TileType {
    pub fn to_u8(self) -> u8 {
        self as u8
    }

    pub fn from_u8(v: u8) -> Option<Self> {
        match v {
            0 => Some(Self::Clear),
            2 => Some(Self::Road),
            6 => Some(Self::Water),
            8 => Some(Self::Industry),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Clear => "clear",
            Self::Road => "road",
            Self::Water => "water",
            Self::Industry => "industry",
        }
    }
}

/// One map cell. The variant is the tile's type tag; the payload is the
/// state that only makes sense for that type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Tile {
    #[default]
    Clear,
    Road {
        /// Bitmask of connected road pieces (N, E, S, W in bits 0..4).
        pieces: u8,
    },
    Water,
    Industry(IndustryTile),
}

impl Tile {
    pub fn tile_type(&self) -> TileType {
        match self {
            Tile::Clear => TileType::Clear,
            Tile::Road { .. } => TileType::Road,
            Tile::Water => TileType::Water,
            Tile::Industry(_) => TileType::Industry,
        }
    }
}

// =============================================================================
// Errors
// =============================================================================

/// Recoverable tile access failures, for callers that branch on the tile tag
/// instead of asserting it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TileError {
    /// The handle does not address a tile of this map.
    OutOfBounds { tile: TileIndex, len: usize },
    /// The tile exists but is not tagged as an industry tile.
    NotIndustry { tile: TileIndex, found: TileType },
    /// A raw tile record carried a tag this build does not know.
    UnknownTileType(u8),
}

impl fmt::Display for TileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TileError::OutOfBounds { tile, len } => {
                write!(f, "tile {tile} is outside the map ({len} tiles)")
            }
            TileError::NotIndustry { tile, found } => {
                write!(f, "tile {tile} is a {} tile, not an industry tile", found.name())
            }
            TileError::UnknownTileType(tag) => write!(f, "unknown tile type tag {tag}"),
        }
    }
}

impl std::error::Error for TileError {}

// =============================================================================
// TileMap resource
// =============================================================================

/// The shared tile array. Owned by the world map; accessors take a
/// [`TileIndex`] into it and never allocate.
#[derive(Resource, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TileMap {
    pub tiles: Vec<Tile>,
    pub width: usize,
    pub height: usize,
}

impl Default for TileMap {
    fn default() -> Self {
        Self::new(MAP_WIDTH, MAP_HEIGHT)
    }
}

impl TileMap {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            tiles: vec![Tile::Clear; width * height],
            width,
            height,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    #[inline]
    pub fn tile_index(&self, x: usize, y: usize) -> TileIndex {
        TileIndex((y * self.width + x) as u32)
    }

    #[inline]
    pub fn coords(&self, tile: TileIndex) -> (usize, usize) {
        let idx = tile.as_usize();
        (idx % self.width, idx / self.width)
    }

    #[inline]
    pub fn in_bounds(&self, x: usize, y: usize) -> bool {
        x < self.width && y < self.height
    }

    /// Panics if `tile` is outside the map, like slice indexing.
    #[inline]
    pub fn get(&self, tile: TileIndex) -> &Tile {
        &self.tiles[tile.as_usize()]
    }

    #[inline]
    pub fn get_mut(&mut self, tile: TileIndex) -> &mut Tile {
        &mut self.tiles[tile.as_usize()]
    }

    pub fn try_get(&self, tile: TileIndex) -> Result<&Tile, TileError> {
        self.tiles.get(tile.as_usize()).ok_or(TileError::OutOfBounds {
            tile,
            len: self.tiles.len(),
        })
    }

    #[inline]
    pub fn tile_type(&self, tile: TileIndex) -> TileType {
        self.get(tile).tile_type()
    }

    #[inline]
    pub fn is_tile_type(&self, tile: TileIndex, ty: TileType) -> bool {
        self.tile_type(tile) == ty
    }

    /// Replace the whole tile, tag included. Any prior content is lost.
    #[inline]
    pub fn set_tile(&mut self, tile: TileIndex, value: Tile) {
        *self.get_mut(tile) = value;
    }

    pub fn make_clear(&mut self, tile: TileIndex) {
        self.set_tile(tile, Tile::Clear);
    }

    pub fn make_water(&mut self, tile: TileIndex) {
        self.set_tile(tile, Tile::Water);
    }

    pub fn make_road(&mut self, tile: TileIndex, pieces: u8) {
        self.set_tile(tile, Tile::Road { pieces });
    }

    /// Checked industry view: errors instead of panicking on a tag mismatch.
    pub fn industry(&self, tile: TileIndex) -> Result<&IndustryTile, TileError> {
        match self.try_get(tile)? {
            Tile::Industry(industry) => Ok(industry),
            other => Err(TileError::NotIndustry {
                tile,
                found: other.tile_type(),
            }),
        }
    }

    pub fn industry_mut(&mut self, tile: TileIndex) -> Result<&mut IndustryTile, TileError> {
        let len = self.tiles.len();
        match self.tiles.get_mut(tile.as_usize()) {
            Some(Tile::Industry(industry)) => Ok(industry),
            Some(other) => Err(TileError::NotIndustry {
                tile,
                found: other.tile_type(),
            }),
            None => Err(TileError::OutOfBounds { tile, len }),
        }
    }

    pub fn indices(&self) -> impl Iterator<Item = TileIndex> {
        (0..self.tiles.len() as u32).map(TileIndex)
    }

    pub fn industry_tiles(&self) -> impl Iterator<Item = (TileIndex, &IndustryTile)> {
        self.tiles
            .iter()
            .enumerate()
            .filter_map(|(i, tile)| match tile {
                Tile::Industry(industry) => Some((TileIndex(i as u32), industry)),
                _ => None,
            })
    }

    pub fn industry_tiles_mut(&mut self) -> impl Iterator<Item = (TileIndex, &mut IndustryTile)> {
        self.tiles
            .iter_mut()
            .enumerate()
            .filter_map(|(i, tile)| match tile {
                Tile::Industry(industry) => Some((TileIndex(i as u32), industry)),
                _ => None,
            })
    }

    pub fn count_of(&self, ty: TileType) -> usize {
        self.tiles.iter().filter(|t| t.tile_type() == ty).count()
    }
}
