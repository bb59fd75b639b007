//! World map arena: a flat `Vec<Tile>` addressed by [`TileIndex`].
//!
//! Every cell carries a tagged [`Tile`]. Type-specific state lives inside the
//! variant payload, so code that has matched `Tile::Industry` can only touch
//! industry fields. [`RawTile`] is the flattened five-field form used when the
//! map is persisted.

pub(crate) mod raw;
pub(crate) mod types;

pub use raw::RawTile;
pub use types::{Tile, TileError, TileIndex, TileMap, TileType};
