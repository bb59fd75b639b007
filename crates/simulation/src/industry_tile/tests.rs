use crate::tile_map::{TileIndex, TileMap, TileType};

use super::*;

fn map_with_industry(index: u16, gfx: IndustryGfx) -> (TileMap, TileIndex) {
    let mut map = TileMap::new(8, 8);
    let tile = map.tile_index(3, 4);
    initialize_industry_tile(&mut map, tile, IndustryIndex(index), gfx);
    (map, tile)
}

// ---------------------------------------------------------------------------
// Construction primitive
// ---------------------------------------------------------------------------

#[test]
fn test_initialize_sets_reference_and_gfx_and_clears_progress() {
    let (map, t) = map_with_industry(17, 42);
    assert!(map.is_tile_type(t, TileType::Industry));
    assert_eq!(get_industry_reference(&map, t), IndustryIndex(17));
    assert_eq!(get_graphics_id(&map, t), 42);
    assert!(!is_construction_completed(&map, t));
    assert_eq!(get_construction_stage(&map, t), 0);
    assert_eq!(get_construction_counter(&map, t), 0);
}

#[test]
fn test_initialize_overwrites_previous_tile() {
    let mut map = TileMap::new(4, 4);
    let t = map.tile_index(2, 2);
    map.make_road(t, 0b1111);
    initialize_industry_tile(&mut map, t, IndustryIndex(1), 5);
    assert_eq!(get_graphics_id(&map, t), 5);

    // Re-initializing an in-progress industry tile starts over.
    set_construction_stage(&mut map, t, 3);
    set_construction_completed(&mut map, t, true);
    initialize_industry_tile(&mut map, t, IndustryIndex(2), 6);
    assert_eq!(get_industry_reference(&map, t), IndustryIndex(2));
    assert_eq!(get_construction_stage(&map, t), 0);
    assert!(!is_construction_completed(&map, t));
}

// ---------------------------------------------------------------------------
// Field setters
// ---------------------------------------------------------------------------

#[test]
fn test_stage_roundtrip_for_every_valid_value() {
    let (mut map, t) = map_with_industry(0, 0);
    for stage in 0..=3 {
        set_construction_stage(&mut map, t, stage);
        assert_eq!(get_construction_stage(&map, t), stage);
    }
}

#[test]
fn test_counter_roundtrip_for_every_valid_value() {
    let (mut map, t) = map_with_industry(0, 0);
    for counter in 0..=3 {
        set_construction_counter(&mut map, t, counter);
        assert_eq!(get_construction_counter(&map, t), counter);
    }
}

#[test]
fn test_stage_and_counter_are_independent() {
    let (mut map, t) = map_with_industry(0, 0);
    for stage in 0..=3 {
        for counter in 0..=3 {
            set_construction_stage(&mut map, t, stage);
            set_construction_counter(&mut map, t, counter);
            assert_eq!(get_construction_stage(&map, t), stage);
            assert_eq!(get_construction_counter(&map, t), counter);

            // Writing the counter again must leave the stage alone and vice versa.
            set_construction_counter(&mut map, t, 3 - counter);
            assert_eq!(get_construction_stage(&map, t), stage);
            set_construction_stage(&mut map, t, 3 - stage);
            assert_eq!(get_construction_counter(&map, t), 3 - counter);
        }
    }
}

#[test]
fn test_out_of_range_stage_and_counter_are_truncated() {
    let (mut map, t) = map_with_industry(0, 0);
    set_construction_stage(&mut map, t, 6);
    assert_eq!(get_construction_stage(&map, t), 2);
    assert_eq!(get_construction_counter(&map, t), 0);
    assert!(!is_construction_completed(&map, t));

    set_construction_counter(&mut map, t, 0xFF);
    assert_eq!(get_construction_counter(&map, t), 3);
    assert_eq!(get_construction_stage(&map, t), 2);
    assert!(!is_construction_completed(&map, t));
}

#[test]
fn test_completed_toggle_leaves_other_fields() {
    let (mut map, t) = map_with_industry(99, 120);
    set_construction_stage(&mut map, t, 2);
    set_construction_counter(&mut map, t, 1);

    set_construction_completed(&mut map, t, true);
    assert!(is_construction_completed(&map, t));
    set_construction_completed(&mut map, t, false);
    assert!(!is_construction_completed(&map, t));

    assert_eq!(get_construction_stage(&map, t), 2);
    assert_eq!(get_construction_counter(&map, t), 1);
    assert_eq!(get_industry_reference(&map, t), IndustryIndex(99));
    assert_eq!(get_graphics_id(&map, t), 120);
}

#[test]
fn test_graphics_id_is_unchecked() {
    let (mut map, t) = map_with_industry(0, 0);
    set_graphics_id(&mut map, t, u16::MAX);
    assert_eq!(get_graphics_id(&map, t), u16::MAX);
    assert_eq!(get_construction_stage(&map, t), 0);
}

#[test]
fn test_reset_construction_clears_progress_only() {
    let (mut map, t) = map_with_industry(7, 33);
    set_construction_stage(&mut map, t, 3);
    set_construction_counter(&mut map, t, 2);
    set_construction_completed(&mut map, t, true);
    set_graphics_id(&mut map, t, 36);

    reset_construction(&mut map, t);

    assert!(!is_construction_completed(&map, t));
    assert_eq!(get_construction_stage(&map, t), 0);
    assert_eq!(get_construction_counter(&map, t), 0);
    assert_eq!(get_industry_reference(&map, t), IndustryIndex(7));
    assert_eq!(get_graphics_id(&map, t), 36);
}

#[test]
fn test_reset_clears_unused_construction_bits() {
    let mut tile = IndustryTile::from_raw_parts(0xFF, IndustryIndex(1), 2);
    assert!(tile.is_completed());
    assert_eq!(tile.stage(), 3);
    assert_eq!(tile.counter(), 3);
    tile.reset_construction();
    assert_eq!(tile.construction_bits(), 0);
}

// ---------------------------------------------------------------------------
// Precondition: the tile must be an industry tile
// ---------------------------------------------------------------------------

#[test]
#[should_panic(expected = "expected an industry tile")]
fn test_reading_reference_of_clear_tile_panics() {
    let map = TileMap::new(4, 4);
    get_industry_reference(&map, map.tile_index(0, 0));
}

#[test]
#[should_panic(expected = "is a road tile")]
fn test_writing_stage_of_road_tile_panics() {
    let mut map = TileMap::new(4, 4);
    let t = map.tile_index(1, 1);
    map.make_road(t, 1);
    set_construction_stage(&mut map, t, 1);
}

#[test]
#[should_panic(expected = "is a water tile")]
fn test_reset_on_water_tile_panics() {
    let mut map = TileMap::new(4, 4);
    let t = map.tile_index(1, 1);
    map.make_water(t);
    reset_construction(&mut map, t);
}

#[test]
fn test_mismatch_panic_does_not_touch_tile() {
    let mut map = TileMap::new(4, 4);
    let t = map.tile_index(1, 1);
    map.make_road(t, 0b0110);
    let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
        set_graphics_id(&mut map, t, 10);
    }));
    assert!(result.is_err());
    assert_eq!(*map.get(t), crate::tile_map::Tile::Road { pieces: 0b0110 });
}

// ---------------------------------------------------------------------------
// Graphics range table
// ---------------------------------------------------------------------------

#[test]
fn test_graphics_range_known_entries() {
    assert_eq!(lookup_graphics_range(IndustryCategory::CoalMine), (0, 6));
    assert_eq!(lookup_graphics_range(IndustryCategory::PowerStation), (7, 10));
    assert_eq!(lookup_graphics_range(IndustryCategory::IronMine), (100, 115));
    assert_eq!(lookup_graphics_range(IndustryCategory::WaterTower), (120, 120));
    assert_eq!(lookup_graphics_range(IndustryCategory::ToffeeQuarry), (164, 166));
    assert_eq!(lookup_graphics_range(IndustryCategory::SugarMine), (167, 174));
}

#[test]
fn test_toffee_quarry_and_sugar_mine_split_shared_block() {
    assert_eq!(IndustryCategory::COUNT, 36);
    for gfx in 164..=166 {
        assert_eq!(category_for_graphics(gfx), Some(IndustryCategory::ToffeeQuarry));
    }
    for gfx in 167..=174 {
        assert_eq!(category_for_graphics(gfx), Some(IndustryCategory::SugarMine));
    }
}

#[test]
fn test_graphics_ranges_are_contiguous_and_deterministic() {
    let mut next = 0;
    for category in IndustryCategory::ALL {
        let (min, max) = lookup_graphics_range(category);
        assert_eq!(min, next, "{} should start where the previous ended", category.name());
        assert!(min <= max);
        assert_eq!(lookup_graphics_range(category), (min, max));
        next = max + 1;
    }
    assert_eq!(next, 175);
}

#[test]
fn test_category_reverse_lookup() {
    assert_eq!(category_for_graphics(0), Some(IndustryCategory::CoalMine));
    assert_eq!(category_for_graphics(58), Some(IndustryCategory::BankTemperate));
    assert_eq!(category_for_graphics(174), Some(IndustryCategory::SugarMine));
    assert_eq!(category_for_graphics(175), None);
    assert!(graphics_in_range(IndustryCategory::Farm, 35));
    assert!(!graphics_in_range(IndustryCategory::Farm, 39));
}

#[test]
fn test_category_u8_roundtrip() {
    for category in IndustryCategory::ALL {
        assert_eq!(IndustryCategory::from_u8(category.to_u8()), Some(category));
    }
    assert_eq!(IndustryCategory::from_u8(36), None);
}
