use bevy::prelude::*;
use std::collections::BTreeMap;

pub mod config;
pub mod construction;
pub mod industry;
pub mod industry_save;
pub mod industry_tile;
pub mod invariant_checks;
pub mod sim_rng;
pub mod simulation_sets;
pub mod tile_map;
pub mod world_init;

#[cfg(test)]
mod integration_tests;
#[cfg(test)]
pub mod test_harness;

pub use simulation_sets::SimulationSet;

use tile_map::TileMap;

// ---------------------------------------------------------------------------
// Saveable trait + registry for the extension map save pattern
// ---------------------------------------------------------------------------

/// Trait for resources that can be saved/loaded via the extension map.
///
/// Each implementing resource owns its byte format; the save crate only sees
/// opaque `(key, bytes)` pairs.
pub trait Saveable: Resource + Default + Send + Sync + 'static {
    /// Unique key for this resource in the save file's extension map.
    /// Must be stable across versions (used for deserialization lookup).
    const SAVE_KEY: &'static str;

    /// Serialize this resource to bytes.
    /// Return `None` to skip saving (e.g. when the resource is at its default state).
    fn save_to_bytes(&self) -> Option<Vec<u8>>;

    /// Deserialize from bytes, returning the restored resource.
    fn load_from_bytes(bytes: &[u8]) -> Self;
}

/// Decode bytes via `bitcode::decode`, logging a warning and returning `Default` on failure.
pub fn decode_or_warn<T: bitcode::DecodeOwned + Default>(key: &str, bytes: &[u8]) -> T {
    match bitcode::decode(bytes) {
        Ok(v) => v,
        Err(e) => {
            warn!(
                "Saveable {}: failed to decode {} bytes, falling back to default: {}",
                key,
                bytes.len(),
                e
            );
            T::default()
        }
    }
}

pub type SaveFn = Box<dyn Fn(&World) -> Option<Vec<u8>> + Send + Sync>;
pub type LoadFn = Box<dyn Fn(&mut World, &[u8]) + Send + Sync>;
pub type ResetFn = Box<dyn Fn(&mut World) + Send + Sync>;

/// Type-erased save/load/reset operations for a single registered resource.
pub struct SaveableEntry {
    pub key: String,
    pub save_fn: SaveFn,
    pub load_fn: LoadFn,
    pub reset_fn: ResetFn,
}

/// Registry of all saveable resources, populated during plugin setup.
#[derive(Resource, Default)]
pub struct SaveableRegistry {
    pub entries: Vec<SaveableEntry>,
}

impl SaveableRegistry {
    /// Register a resource type that implements `Saveable`.
    ///
    /// Panics in debug builds if a resource with the same `SAVE_KEY` is already
    /// registered.
    pub fn register<T: Saveable>(&mut self) {
        let key = T::SAVE_KEY.to_string();
        if self.entries.iter().any(|e| e.key == key) {
            warn!(
                "SaveableRegistry: duplicate key '{}', ignoring second registration",
                key
            );
            debug_assert!(false, "SaveableRegistry: duplicate key '{}'", key);
            return;
        }
        self.entries.push(SaveableEntry {
            key,
            save_fn: Box::new(|world: &World| {
                world.get_resource::<T>().and_then(|r| r.save_to_bytes())
            }),
            load_fn: Box::new(|world: &mut World, bytes: &[u8]| {
                let value = T::load_from_bytes(bytes);
                world.insert_resource(value);
            }),
            reset_fn: Box::new(|world: &mut World| {
                world.insert_resource(T::default());
            }),
        });
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.key.as_str())
    }

    /// Save all registered resources into an extension map.
    pub fn save_all(&self, world: &World) -> BTreeMap<String, Vec<u8>> {
        let mut extensions = BTreeMap::new();
        for entry in &self.entries {
            if let Some(bytes) = (entry.save_fn)(world) {
                extensions.insert(entry.key.clone(), bytes);
            }
        }
        extensions
    }

    /// Load registered resources from an extension map.
    /// Resources whose key is absent are left unchanged.
    pub fn load_all(&self, world: &mut World, extensions: &BTreeMap<String, Vec<u8>>) {
        for entry in &self.entries {
            if let Some(bytes) = extensions.get(&entry.key) {
                (entry.load_fn)(world, bytes);
            }
        }
        for key in extensions.keys() {
            if !self.entries.iter().any(|e| &e.key == key) {
                warn!("SaveableRegistry: no resource registered for key '{}'", key);
            }
        }
    }

    /// Reset all registered resources to their defaults.
    pub fn reset_all(&self, world: &mut World) {
        for entry in &self.entries {
            (entry.reset_fn)(world);
        }
    }
}

// ---------------------------------------------------------------------------
// Core resources
// ---------------------------------------------------------------------------

/// Global tick counter incremented at the start of each FixedUpdate.
#[derive(Resource, Default)]
pub struct TickCounter(pub u64);

pub fn advance_tick_counter(mut tick: ResMut<TickCounter>) {
    tick.0 = tick.0.wrapping_add(1);
}

pub struct SimulationPlugin;

impl Plugin for SimulationPlugin {
    fn build(&self, app: &mut App) {
        app.configure_sets(
            FixedUpdate,
            (
                SimulationSet::PreSim,
                SimulationSet::Simulation,
                SimulationSet::PostSim,
            )
                .chain(),
        );

        app.init_resource::<TickCounter>()
            .init_resource::<TileMap>()
            .init_resource::<world_init::WorldInitParams>()
            .add_systems(Startup, world_init::init_world)
            .add_systems(
                FixedUpdate,
                advance_tick_counter.in_set(SimulationSet::PreSim),
            );

        app.add_plugins((
            sim_rng::SimRngPlugin,
            industry::IndustryPlugin,
            industry_save::IndustrySavePlugin,
            construction::ConstructionPlugin,
            invariant_checks::InvariantChecksPlugin,
        ));
    }
}

#[cfg(test)]
mod saveable_tests {
    use super::*;

    #[derive(Resource, Default, Debug, PartialEq)]
    struct TestCounter {
        value: u32,
    }

    impl Saveable for TestCounter {
        const SAVE_KEY: &'static str = "test_counter";

        fn save_to_bytes(&self) -> Option<Vec<u8>> {
            if self.value == 0 {
                None
            } else {
                Some(self.value.to_le_bytes().to_vec())
            }
        }

        fn load_from_bytes(bytes: &[u8]) -> Self {
            let value = u32::from_le_bytes(bytes.try_into().unwrap_or([0; 4]));
            TestCounter { value }
        }
    }

    #[test]
    fn test_registry_save_reset_load() {
        let mut world = World::new();
        world.insert_resource(TestCounter { value: 42 });

        let mut registry = SaveableRegistry::default();
        registry.register::<TestCounter>();

        let extensions = registry.save_all(&world);
        assert_eq!(extensions["test_counter"], 42u32.to_le_bytes().to_vec());

        registry.reset_all(&mut world);
        assert_eq!(world.resource::<TestCounter>().value, 0);

        registry.load_all(&mut world, &extensions);
        assert_eq!(world.resource::<TestCounter>().value, 42);
    }

    #[test]
    fn test_default_state_is_skipped() {
        let mut world = World::new();
        world.insert_resource(TestCounter::default());
        let mut registry = SaveableRegistry::default();
        registry.register::<TestCounter>();
        assert!(registry.save_all(&world).is_empty());
    }

    #[test]
    fn test_absent_key_leaves_resource_alone() {
        let mut world = World::new();
        world.insert_resource(TestCounter { value: 9 });
        let mut registry = SaveableRegistry::default();
        registry.register::<TestCounter>();
        registry.load_all(&mut world, &BTreeMap::new());
        assert_eq!(world.resource::<TestCounter>().value, 9);
    }

    #[test]
    fn test_simulation_plugin_registers_industry_state() {
        let mut app = App::new();
        app.add_plugins(SimulationPlugin);
        let registry = app.world().resource::<SaveableRegistry>();
        let keys: Vec<&str> = registry.keys().collect();
        for key in [
            "tile_map",
            "industry_registry",
            "construction_params",
            "sim_rng",
        ] {
            assert!(keys.contains(&key), "missing saveable '{key}'");
        }
    }
}
