// ---------------------------------------------------------------------------
// RawTile: flattened per-tile storage record
// ---------------------------------------------------------------------------
//
// Field use per tile type:
//   Clear / Water : all zero
//   Road          : m5 = connected pieces bitmask
//   Industry      : m1 = construction byte (bit 7 completed, bits 0-1 stage,
//                   bits 2-3 counter), m2 = industry index, m5 = graphics id
//
// m3 and m4 are reserved and always written as zero.

use crate::industry_tile::{IndustryIndex, IndustryTile};

use super::types::{Tile, TileError, TileType};

/// The five raw storage fields of one tile plus its type tag, as persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, bitcode::Encode, bitcode::Decode)]
pub struct RawTile {
    pub tile_type: u8,
    pub m1: u8,
    pub m2: u16,
    pub m3: u8,
    pub m4: u8,
    pub m5: u16,
}

impl From<&Tile> for RawTile {
    fn from(tile: &Tile) -> Self {
        let mut raw = RawTile {
            tile_type: tile.tile_type().to_u8(),
            ..Default::default()
        };
        match tile {
            Tile::Clear | Tile::Water => {}
            Tile::Road { pieces } => raw.m5 = u16::from(*pieces),
            Tile::Industry(industry) => {
                raw.m1 = industry.construction_bits();
                raw.m2 = industry.index().0;
                raw.m5 = industry.gfx();
            }
        }
        raw
    }
}

impl TryFrom<RawTile> for Tile {
    type Error = TileError;

    fn try_from(raw: RawTile) -> Result<Self, Self::Error> {
        let ty = TileType::from_u8(raw.tile_type).ok_or(TileError::UnknownTileType(raw.tile_type))?;
        Ok(match ty {
            TileType::Clear => Tile::Clear,
            TileType::Water => Tile::Water,
            TileType::Road => Tile::Road {
                pieces: (raw.m5 & 0xFF) as u8,
            },
            TileType::Industry => Tile::Industry(IndustryTile::from_raw_parts(
                raw.m1,
                IndustryIndex(raw.m2),
                raw.m5,
            )),
        })
    }
}
