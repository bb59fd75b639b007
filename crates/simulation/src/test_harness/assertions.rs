//! Assertion helpers for `TestMap` integration tests.

use crate::industry_tile::IndustryIndex;

use super::TestMap;

impl TestMap {
    /// Assert every footprint tile of `index` has finished construction.
    pub fn assert_industry_completed(&self, index: IndustryIndex) {
        let industry = self
            .industry(index)
            .unwrap_or_else(|| panic!("{index} is not registered"));
        let map = self.map();
        for tile in industry.footprint(map) {
            let t = map.industry(tile).unwrap_or_else(|e| panic!("{e}"));
            assert!(t.is_completed(), "tile {tile} of {index} is still under construction");
        }
    }

    /// Assert no footprint tile of `index` has finished construction yet.
    pub fn assert_industry_under_construction(&self, index: IndustryIndex) {
        let industry = self
            .industry(index)
            .unwrap_or_else(|| panic!("{index} is not registered"));
        let map = self.map();
        for tile in industry.footprint(map) {
            let t = map.industry(tile).unwrap_or_else(|e| panic!("{e}"));
            assert!(!t.is_completed(), "tile {tile} of {index} completed early");
        }
    }

    /// Assert the tile at `(x, y)` shows the given construction progress.
    pub fn assert_progress(&self, x: usize, y: usize, stage: u8, counter: u8) {
        let t = self.industry_tile(x, y);
        assert_eq!(
            (t.stage(), t.counter()),
            (stage, counter),
            "unexpected (stage, counter) at ({x}, {y})"
        );
    }
}
