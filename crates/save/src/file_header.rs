// ---------------------------------------------------------------------------
// file_header – Snapshot header with magic bytes, version, and checksum
// ---------------------------------------------------------------------------
//
// Header format (28 bytes, fixed-size, little-endian):
//   [0..4]   Magic bytes: "TILE" (0x54494C45)
//   [4..8]   Format version (u32)
//   [8..12]  Flags (u32: bit 0 = lz4 compressed payload)
//   [12..20] Timestamp (Unix epoch, u64)
//   [20..24] Uncompressed payload size (u32)
//   [24..28] xxHash32 checksum of the payload (everything after the header)
//
// On save: encode snapshot -> compress -> prepend header (checksum of the
// compressed bytes). On load: check magic -> validate checksum -> strip header.

use xxhash_rust::xxh32::xxh32;

use crate::save_error::SaveError;

/// Magic bytes identifying a tile snapshot.
pub const MAGIC: [u8; 4] = *b"TILE";

/// Size of the file header in bytes.
pub const HEADER_SIZE: usize = 28;

/// Layout version of the header itself, not of the payload it wraps.
pub const HEADER_FORMAT_VERSION: u32 = 1;

/// Payload is lz4 block data with a prepended size.
pub const FLAG_COMPRESSED: u32 = 1;

const XXHASH_SEED: u32 = 0;

/// Parsed file header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileHeader {
    pub format_version: u32,
    pub flags: u32,
    pub timestamp: u64,
    pub uncompressed_size: u32,
    pub checksum: u32,
}

impl FileHeader {
    /// Header for `payload`, stamped with the current time.
    pub fn new(payload: &[u8], uncompressed_size: u32, flags: u32) -> Self {
        let timestamp = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(0);

        Self {
            format_version: HEADER_FORMAT_VERSION,
            flags,
            timestamp,
            uncompressed_size,
            checksum: xxh32(payload, XXHASH_SEED),
        }
    }

    pub fn is_compressed(&self) -> bool {
        self.flags & FLAG_COMPRESSED != 0
    }

    fn write_to(&self, out: &mut Vec<u8>) {
        out.extend_from_slice(&MAGIC);
        out.extend_from_slice(&self.format_version.to_le_bytes());
        out.extend_from_slice(&self.flags.to_le_bytes());
        out.extend_from_slice(&self.timestamp.to_le_bytes());
        out.extend_from_slice(&self.uncompressed_size.to_le_bytes());
        out.extend_from_slice(&self.checksum.to_le_bytes());
    }
}

/// Returns bytes: [header (28 bytes)] ++ [payload].
pub fn wrap_with_header(payload: &[u8], uncompressed_size: u32, flags: u32) -> Vec<u8> {
    let header = FileHeader::new(payload, uncompressed_size, flags);
    let mut out = Vec::with_capacity(HEADER_SIZE + payload.len());
    header.write_to(&mut out);
    out.extend_from_slice(payload);
    out
}

fn read_u32(bytes: &[u8], at: usize) -> u32 {
    u32::from_le_bytes([bytes[at], bytes[at + 1], bytes[at + 2], bytes[at + 3]])
}

/// Parse and validate the header, returning it with the payload that follows.
///
/// # Errors
///
/// Returns `SaveError::Header` if:
/// - The buffer does not start with the "TILE" magic
/// - The buffer is shorter than the header
/// - The header format version is newer than this build
/// - The payload checksum does not match
pub fn unwrap_header(bytes: &[u8]) -> Result<(FileHeader, &[u8]), SaveError> {
    if bytes.len() < MAGIC.len() || bytes[..MAGIC.len()] != MAGIC {
        return Err(SaveError::Header(
            "missing TILE magic bytes, not a snapshot file".to_string(),
        ));
    }
    if bytes.len() < HEADER_SIZE {
        return Err(SaveError::Header(format!(
            "snapshot is too short ({} bytes, need at least {} for the header)",
            bytes.len(),
            HEADER_SIZE
        )));
    }

    let format_version = read_u32(bytes, 4);
    let flags = read_u32(bytes, 8);
    let mut timestamp = [0u8; 8];
    timestamp.copy_from_slice(&bytes[12..20]);
    let timestamp = u64::from_le_bytes(timestamp);
    let uncompressed_size = read_u32(bytes, 20);
    let checksum = read_u32(bytes, 24);

    if format_version > HEADER_FORMAT_VERSION {
        return Err(SaveError::Header(format!(
            "header format version {} is newer than the supported version {}",
            format_version, HEADER_FORMAT_VERSION,
        )));
    }

    let payload = &bytes[HEADER_SIZE..];
    let computed = xxh32(payload, XXHASH_SEED);
    if computed != checksum {
        return Err(SaveError::Header(format!(
            "checksum mismatch (expected {:#010X}, got {:#010X}), the snapshot is corrupted",
            checksum, computed,
        )));
    }

    Ok((
        FileHeader {
            format_version,
            flags,
            timestamp,
            uncompressed_size,
            checksum,
        },
        payload,
    ))
}
