//! Saveable implementations for the tile map and the industry registry.
//!
//! Tiles are written as [`RawTile`] records, so industry tiles persist their
//! construction byte, industry index and graphics id exactly as they are held
//! in memory. The registry is written slot by slot to keep every
//! `IndustryIndex` stored on the map valid after a reload.

use bevy::prelude::*;

use crate::industry::{Industry, IndustryRegistry};
use crate::industry_tile::IndustryCategory;
use crate::tile_map::{RawTile, Tile, TileIndex, TileMap};
use crate::Saveable;

// ---------------------------------------------------------------------------
// TileMap
// ---------------------------------------------------------------------------

#[derive(bitcode::Encode, bitcode::Decode)]
struct TileMapData {
    width: u32,
    height: u32,
    tiles: Vec<RawTile>,
}

impl TileMapData {
    fn into_map(self) -> Result<TileMap, String> {
        let (width, height) = (self.width as usize, self.height as usize);
        if self.tiles.len() != width * height {
            return Err(format!(
                "{} tiles stored for a {}x{} map",
                self.tiles.len(),
                width,
                height
            ));
        }
        let tiles = self
            .tiles
            .into_iter()
            .map(Tile::try_from)
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| e.to_string())?;
        Ok(TileMap {
            tiles,
            width,
            height,
        })
    }
}

impl Saveable for TileMap {
    const SAVE_KEY: &'static str = "tile_map";

    fn save_to_bytes(&self) -> Option<Vec<u8>> {
        if *self == Self::default() {
            return None;
        }
        let data = TileMapData {
            width: self.width as u32,
            height: self.height as u32,
            tiles: self.tiles.iter().map(RawTile::from).collect(),
        };
        Some(bitcode::encode(&data))
    }

    fn load_from_bytes(bytes: &[u8]) -> Self {
        let data = match bitcode::decode::<TileMapData>(bytes) {
            Ok(data) => data,
            Err(e) => {
                warn!(
                    "Saveable {}: failed to decode {} bytes, falling back to default: {}",
                    Self::SAVE_KEY,
                    bytes.len(),
                    e
                );
                return Self::default();
            }
        };
        match data.into_map() {
            Ok(map) => map,
            Err(e) => {
                warn!(
                    "Saveable {}: invalid tile data, falling back to default: {}",
                    Self::SAVE_KEY,
                    e
                );
                Self::default()
            }
        }
    }
}

// ---------------------------------------------------------------------------
// IndustryRegistry
// ---------------------------------------------------------------------------

#[derive(bitcode::Encode, bitcode::Decode)]
struct IndustryData {
    category: u8,
    origin: u32,
    width: u8,
    height: u8,
}

#[derive(bitcode::Encode, bitcode::Decode, Default)]
struct IndustryRegistryData {
    slots: Vec<Option<IndustryData>>,
}

impl Saveable for IndustryRegistry {
    const SAVE_KEY: &'static str = "industry_registry";

    fn save_to_bytes(&self) -> Option<Vec<u8>> {
        if self.slots.is_empty() {
            return None;
        }
        let data = IndustryRegistryData {
            slots: self
                .slots
                .iter()
                .map(|slot| {
                    slot.map(|industry| IndustryData {
                        category: industry.category.to_u8(),
                        origin: industry.origin.0,
                        width: industry.width,
                        height: industry.height,
                    })
                })
                .collect(),
        };
        Some(bitcode::encode(&data))
    }

    fn load_from_bytes(bytes: &[u8]) -> Self {
        let data: IndustryRegistryData = crate::decode_or_warn(Self::SAVE_KEY, bytes);
        let slots = data
            .slots
            .into_iter()
            .map(|slot| {
                let slot = slot?;
                let Some(category) = IndustryCategory::from_u8(slot.category) else {
                    warn!(
                        "Saveable {}: unknown industry category {}, dropping entry",
                        Self::SAVE_KEY,
                        slot.category
                    );
                    return None;
                };
                Some(Industry {
                    category,
                    origin: TileIndex(slot.origin),
                    width: slot.width,
                    height: slot.height,
                })
            })
            .collect();
        Self { slots }
    }
}

// ---------------------------------------------------------------------------
// Plugin
// ---------------------------------------------------------------------------

pub struct IndustrySavePlugin;

impl Plugin for IndustrySavePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<crate::SaveableRegistry>();
        app.world_mut()
            .resource_mut::<crate::SaveableRegistry>()
            .register::<TileMap>();
    }
}
