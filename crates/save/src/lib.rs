//! World snapshots for the tile simulation.
//!
//! A snapshot is the `SaveableRegistry` extension map of a world, bitcode
//! encoded, lz4 compressed and wrapped in a checksummed header. Each resource
//! owns its byte format through `Saveable`; this crate only moves the opaque
//! `(key, bytes)` pairs in and out of files.

use std::collections::BTreeMap;
use std::path::Path;

use bevy::prelude::*;

use simulation::SaveableRegistry;

mod atomic_write;
pub mod file_header;
mod save_codec;
mod save_error;


pub use atomic_write::atomic_write;
pub use save_codec::{decode_snapshot, encode_snapshot, CURRENT_SNAPSHOT_VERSION};
pub use save_error::SaveError;

/// Collect every registered saveable in `world` into snapshot bytes.
pub fn save_world(world: &World) -> Result<Vec<u8>, SaveError> {
    let registry = world
        .get_resource::<SaveableRegistry>()
        .ok_or(SaveError::MissingResource("SaveableRegistry"))?;
    let extensions = registry.save_all(world);
    encode_snapshot(&extensions)
}

/// Replace the saveable state of `world` with the snapshot in `bytes`.
///
/// Registered resources are reset to their defaults first, so anything absent
/// from the snapshot comes back in its default state. On error the world is
/// left untouched.
pub fn load_world(world: &mut World, bytes: &[u8]) -> Result<(), SaveError> {
    let extensions = decode_snapshot(bytes)?;
    restore_extensions(world, &extensions)
}

fn restore_extensions(
    world: &mut World,
    extensions: &BTreeMap<String, Vec<u8>>,
) -> Result<(), SaveError> {
    if !world.contains_resource::<SaveableRegistry>() {
        return Err(SaveError::MissingResource("SaveableRegistry"));
    }
    world.resource_scope(|world, registry: Mut<SaveableRegistry>| {
        registry.reset_all(world);
        registry.load_all(world, extensions);
    });
    info!("Loaded snapshot with {} entries", extensions.len());
    Ok(())
}

/// Save `world` to `path`, replacing any previous snapshot atomically.
pub fn save_to_file(world: &World, path: &Path) -> Result<(), SaveError> {
    let bytes = save_world(world)?;
    atomic_write(path, &bytes)?;
    info!("Saved snapshot to {} ({} bytes)", path.display(), bytes.len());
    Ok(())
}

/// Load the snapshot stored at `path` into `world`.
pub fn load_from_file(world: &mut World, path: &Path) -> Result<(), SaveError> {
    let bytes = std::fs::read(path)?;
    load_world(world, &bytes).inspect_err(|e| {
        warn!("Failed to load snapshot {}: {}", path.display(), e);
    })
}
