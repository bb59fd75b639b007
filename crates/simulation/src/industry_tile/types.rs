use std::fmt;

use serde::{Deserialize, Serialize};

// =============================================================================
// Handles
// =============================================================================

/// Weak reference to an entry of the `IndustryRegistry`. Carries no ownership;
/// resolving it is the registry's job and may fail.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
pub struct IndustryIndex(pub u16);

impl fmt::Display for IndustryIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "industry {}", self.0)
    }
}

/// Sprite-set selector of an industry tile.
pub type IndustryGfx = u16;

// =============================================================================
// Construction byte layout
// =============================================================================

const STAGE_SHIFT: u8 = 0;
const STAGE_BITS: u8 = 2;
const COUNTER_SHIFT: u8 = 2;
const COUNTER_BITS: u8 = 2;
const COMPLETED_SHIFT: u8 = 7;

/// Extract `len` bits of `value` starting at bit `start`.
#[inline]
const fn get_bits(value: u8, start: u8, len: u8) -> u8 {
    (value >> start) & ((1 << len) - 1)
}

/// Overwrite `len` bits of `value` starting at `start`. Bits of `bits` above
/// `len` are dropped.
#[inline]
fn set_bits(value: &mut u8, start: u8, len: u8, bits: u8) {
    let mask = ((1u8 << len) - 1) << start;
    *value = (*value & !mask) | ((bits << start) & mask);
}

// =============================================================================
// IndustryTile
// =============================================================================

/// Industry payload of a tile.
///
/// Completion, stage and counter share one construction byte so that
/// [`reset_construction`](Self::reset_construction) is a single store and the
/// persisted form matches the in-memory form bit for bit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct IndustryTile {
    construction: u8,
    index: IndustryIndex,
    gfx: IndustryGfx,
}

impl IndustryTile {
    /// A freshly constructed tile: not completed, stage 0, counter 0.
    pub const fn new(index: IndustryIndex, gfx: IndustryGfx) -> Self {
        Self {
            construction: 0,
            index,
            gfx,
        }
    }

    /// Rebuild a tile from its persisted fields. The construction byte is
    /// taken verbatim, unused bits included.
    pub const fn from_raw_parts(construction: u8, index: IndustryIndex, gfx: IndustryGfx) -> Self {
        Self {
            construction,
            index,
            gfx,
        }
    }

    #[inline]
    pub const fn construction_bits(&self) -> u8 {
        self.construction
    }

    #[inline]
    pub const fn index(&self) -> IndustryIndex {
        self.index
    }

    #[inline]
    pub const fn is_completed(&self) -> bool {
        get_bits(self.construction, COMPLETED_SHIFT, 1) != 0
    }

    #[inline]
    pub fn set_completed(&mut self, completed: bool) {
        set_bits(&mut self.construction, COMPLETED_SHIFT, 1, u8::from(completed));
    }

    #[inline]
    pub const fn stage(&self) -> u8 {
        get_bits(self.construction, STAGE_SHIFT, STAGE_BITS)
    }

    /// Values above 3 are truncated to their low two bits.
    #[inline]
    pub fn set_stage(&mut self, stage: u8) {
        set_bits(&mut self.construction, STAGE_SHIFT, STAGE_BITS, stage);
    }

    #[inline]
    pub const fn counter(&self) -> u8 {
        get_bits(self.construction, COUNTER_SHIFT, COUNTER_BITS)
    }

    /// Values above 3 are truncated to their low two bits.
    #[inline]
    pub fn set_counter(&mut self, counter: u8) {
        set_bits(&mut self.construction, COUNTER_SHIFT, COUNTER_BITS, counter);
    }

    #[inline]
    pub const fn gfx(&self) -> IndustryGfx {
        self.gfx
    }

    #[inline]
    pub fn set_gfx(&mut self, gfx: IndustryGfx) {
        self.gfx = gfx;
    }

    /// Restart construction from the ground up: clears completion, stage and
    /// counter in one write. Index and graphics are kept.
    #[inline]
    pub fn reset_construction(&mut self) {
        self.construction = 0;
    }
}
