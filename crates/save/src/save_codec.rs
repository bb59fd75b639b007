// ---------------------------------------------------------------------------
// Snapshot codec: extension map <-> header-wrapped lz4/bitcode bytes
// ---------------------------------------------------------------------------

use std::collections::BTreeMap;

use bevy::prelude::*;

use crate::file_header::{unwrap_header, wrap_with_header, FLAG_COMPRESSED};
use crate::save_error::SaveError;

/// Snapshot payload version.
/// v1 = extension map only
pub const CURRENT_SNAPSHOT_VERSION: u32 = 1;

#[derive(bitcode::Encode, bitcode::Decode)]
struct SnapshotData {
    version: u32,
    /// Each key is a `Saveable::SAVE_KEY`, each value that resource's bytes.
    extensions: BTreeMap<String, Vec<u8>>,
}

/// Encode an extension map into snapshot bytes: header, then the lz4
/// compressed bitcode payload.
pub fn encode_snapshot(extensions: &BTreeMap<String, Vec<u8>>) -> Result<Vec<u8>, SaveError> {
    let data = SnapshotData {
        version: CURRENT_SNAPSHOT_VERSION,
        extensions: extensions.clone(),
    };
    let encoded = bitcode::encode(&data);
    let uncompressed_size = u32::try_from(encoded.len()).map_err(|_| {
        SaveError::Encode(format!(
            "snapshot payload of {} bytes does not fit the header size field",
            encoded.len()
        ))
    })?;
    let compressed = lz4_flex::compress_prepend_size(&encoded);
    debug!(
        "Encoded snapshot: {} entries, {} bytes ({} compressed)",
        extensions.len(),
        encoded.len(),
        compressed.len()
    );
    Ok(wrap_with_header(&compressed, uncompressed_size, FLAG_COMPRESSED))
}

/// Decode snapshot bytes back into the extension map.
pub fn decode_snapshot(bytes: &[u8]) -> Result<BTreeMap<String, Vec<u8>>, SaveError> {
    let (header, payload) = unwrap_header(bytes)?;
    let decompressed;
    let encoded = if header.is_compressed() {
        // The lz4 size prefix sizes the output buffer; it must agree with the
        // checksummed header before anything is allocated.
        let prefix = payload
            .get(..4)
            .map(|b| u32::from_le_bytes([b[0], b[1], b[2], b[3]]))
            .ok_or_else(|| SaveError::Decompress("payload has no size prefix".to_string()))?;
        if prefix != header.uncompressed_size {
            return Err(SaveError::Decompress(format!(
                "payload claims {prefix} bytes, header says {}",
                header.uncompressed_size
            )));
        }
        decompressed = lz4_flex::decompress_size_prepended(payload)?;
        decompressed.as_slice()
    } else {
        payload
    };
    if encoded.len() != header.uncompressed_size as usize {
        return Err(SaveError::Decompress(format!(
            "payload is {} bytes, header says {}",
            encoded.len(),
            header.uncompressed_size
        )));
    }

    let data: SnapshotData = bitcode::decode(encoded)?;
    if data.version > CURRENT_SNAPSHOT_VERSION {
        return Err(SaveError::Decode(format!(
            "snapshot version {} is newer than the supported version {}",
            data.version, CURRENT_SNAPSHOT_VERSION
        )));
    }
    Ok(data.extensions)
}
