pub(crate) mod placement;
pub(crate) mod types;

pub use placement::{place_industry, remove_industry, PlacementError};
pub use types::{industry_at, industry_category_at, Industry, IndustryRegistry};

use bevy::prelude::*;

pub struct IndustryPlugin;

impl Plugin for IndustryPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<IndustryRegistry>();

        app.init_resource::<crate::SaveableRegistry>();
        app.world_mut()
            .resource_mut::<crate::SaveableRegistry>()
            .register::<IndustryRegistry>();
    }
}
