use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::industry_tile::{get_industry_reference, IndustryCategory, IndustryIndex};
use crate::tile_map::{TileIndex, TileMap};

// =============================================================================
// Industry record
// =============================================================================

/// A multi-tile industry. Its tiles point back here through their
/// [`IndustryIndex`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Industry {
    pub category: IndustryCategory,
    /// North-west corner of the footprint.
    pub origin: TileIndex,
    pub width: u8,
    pub height: u8,
}

impl Industry {
    /// Tiles covered by this industry on `map`, row by row. The footprint is
    /// clipped to the map: rows never wrap and nothing past the edge is
    /// yielded, even for records that do not fit the map they are used with.
    pub fn footprint<'a>(&self, map: &'a TileMap) -> impl Iterator<Item = TileIndex> + 'a {
        let (xs, ys) = if map.width == 0 {
            (0..0, 0..0)
        } else {
            let (ox, oy) = map.coords(self.origin);
            let x_end = (ox + usize::from(self.width)).min(map.width);
            let y_end = (oy + usize::from(self.height)).min(map.height);
            (ox.min(x_end)..x_end, oy.min(y_end)..y_end)
        };
        ys.flat_map(move |y| xs.clone().map(move |x| map.tile_index(x, y)))
    }
}

// =============================================================================
// Registry
// =============================================================================

/// Slot arena of live industries. Removed slots are reused lowest first, so a
/// stale [`IndustryIndex`] may later resolve to a different industry.
#[derive(Resource, Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndustryRegistry {
    pub(crate) slots: Vec<Option<Industry>>,
}

impl IndustryRegistry {
    /// Store `industry` and return its index, or `None` once all
    /// `u16::MAX + 1` slots are taken.
    pub fn insert(&mut self, industry: Industry) -> Option<IndustryIndex> {
        if let Some(pos) = self.slots.iter().position(Option::is_none) {
            self.slots[pos] = Some(industry);
            return Some(IndustryIndex(pos as u16));
        }
        if self.slots.len() > usize::from(u16::MAX) {
            return None;
        }
        self.slots.push(Some(industry));
        Some(IndustryIndex((self.slots.len() - 1) as u16))
    }

    pub fn remove(&mut self, index: IndustryIndex) -> Option<Industry> {
        let removed = self.slots.get_mut(usize::from(index.0))?.take();
        while matches!(self.slots.last(), Some(None)) {
            self.slots.pop();
        }
        removed
    }

    pub fn get(&self, index: IndustryIndex) -> Option<&Industry> {
        self.slots.get(usize::from(index.0))?.as_ref()
    }

    /// Number of live industries.
    pub fn len(&self) -> usize {
        self.slots.iter().filter(|s| s.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(Option::is_none)
    }

    pub fn iter(&self) -> impl Iterator<Item = (IndustryIndex, &Industry)> {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(i, slot)| slot.as_ref().map(|ind| (IndustryIndex(i as u16), ind)))
    }
}

/// The industry owning `tile`. Panics if the tile is not an industry tile;
/// returns `None` if its reference does not resolve.
#[track_caller]
pub fn industry_at<'a>(
    map: &TileMap,
    registry: &'a IndustryRegistry,
    tile: TileIndex,
) -> Option<&'a Industry> {
    registry.get(get_industry_reference(map, tile))
}

#[track_caller]
pub fn industry_category_at(
    map: &TileMap,
    registry: &IndustryRegistry,
    tile: TileIndex,
) -> Option<IndustryCategory> {
    industry_at(map, registry, tile).map(|industry| industry.category)
}
