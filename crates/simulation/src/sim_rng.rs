//! Deterministic randomness for world seeding.
//!
//! All random draws go through the [`SimRng`] resource. The generator state is
//! persisted, so a loaded world continues the exact stream it was saved with.

use bevy::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::config::WORLD_SEED;

/// Shared `ChaCha8Rng`. Systems take `ResMut<SimRng>` and draw from `.0`.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct SimRng(pub ChaCha8Rng);

impl Default for SimRng {
    fn default() -> Self {
        Self::from_seed_u64(WORLD_SEED)
    }
}

impl SimRng {
    pub fn from_seed_u64(seed: u64) -> Self {
        Self(ChaCha8Rng::seed_from_u64(seed))
    }
}

/// Position of a `ChaCha8Rng` in its keystream.
#[derive(bitcode::Encode, bitcode::Decode)]
struct ChaChaState {
    key: [u8; 32],
    stream: u64,
    word_pos: u128,
}

impl Default for ChaChaState {
    fn default() -> Self {
        (&SimRng::default().0).into()
    }
}

impl From<&ChaCha8Rng> for ChaChaState {
    fn from(rng: &ChaCha8Rng) -> Self {
        Self {
            key: rng.get_seed(),
            stream: rng.get_stream(),
            word_pos: rng.get_word_pos(),
        }
    }
}

impl From<ChaChaState> for ChaCha8Rng {
    fn from(state: ChaChaState) -> Self {
        let mut rng = ChaCha8Rng::from_seed(state.key);
        rng.set_stream(state.stream);
        rng.set_word_pos(state.word_pos);
        rng
    }
}

impl crate::Saveable for SimRng {
    const SAVE_KEY: &'static str = "sim_rng";

    fn save_to_bytes(&self) -> Option<Vec<u8>> {
        Some(bitcode::encode(&ChaChaState::from(&self.0)))
    }

    fn load_from_bytes(bytes: &[u8]) -> Self {
        let state: ChaChaState = crate::decode_or_warn(Self::SAVE_KEY, bytes);
        Self(state.into())
    }
}

pub struct SimRngPlugin;

impl Plugin for SimRngPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<SimRng>();

        app.init_resource::<crate::SaveableRegistry>();
        app.world_mut()
            .resource_mut::<crate::SaveableRegistry>()
            .register::<SimRng>();
    }
}
