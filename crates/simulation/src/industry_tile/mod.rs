pub mod accessors;
pub(crate) mod gfx_ranges;
#[cfg(test)]
mod tests;
pub(crate) mod types;

pub use accessors::{
    get_construction_counter, get_construction_stage, get_graphics_id, get_industry_reference,
    initialize_industry_tile, is_construction_completed, reset_construction,
    set_construction_completed, set_construction_counter, set_construction_stage,
    set_graphics_id,
};
pub use gfx_ranges::{
    category_for_graphics, graphics_in_range, lookup_graphics_range, IndustryCategory,
};
pub use types::{IndustryGfx, IndustryIndex, IndustryTile};
