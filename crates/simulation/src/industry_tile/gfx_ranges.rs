use serde::{Deserialize, Serialize};

use super::types::IndustryGfx;

// =============================================================================
// Industry categories
// =============================================================================

/// Every kind of industry that can appear on the map, across all climates.
/// The discriminant indexes [`GFX_RANGES`] and is what gets persisted.
/// There are 36 categories: toffee quarry owns 164..=166, so sugar mine
/// spans 167..=174 rather than the full 164..=174 block.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum IndustryCategory {
    CoalMine,
    PowerStation,
    Sawmill,
    Forest,
    OilRefinery,
    OilRig,
    OilWell,
    Farm,
    Factory,
    PrintingWorks,
    CopperMine,
    SteelMill,
    BankTemperate,
    FoodProcessingPlant,
    PaperMill,
    GoldMine,
    BankSubtropicArctic,
    DiamondMine,
    IronMine,
    FruitPlantation,
    RubberPlantation,
    WaterSupply,
    WaterTower,
    FactorySubtropic,
    LumberMill,
    CottonCandyForest,
    CandyFactory,
    BatteryFarm,
    ColaWells,
    ToyShop,
    ToyFactory,
    PlasticFountains,
    FizzyDrinkFactory,
    BubbleGenerator,
    ToffeeQuarry,
    SugarMine,
}

impl IndustryCategory {
    pub const COUNT: usize = 36;

    pub const ALL: [IndustryCategory; Self::COUNT] = [
        Self::CoalMine,
        Self::PowerStation,
        Self::Sawmill,
        Self::Forest,
        Self::OilRefinery,
        Self::OilRig,
        Self::OilWell,
        Self::Farm,
        Self::Factory,
        Self::PrintingWorks,
        Self::CopperMine,
        Self::SteelMill,
        Self::BankTemperate,
        Self::FoodProcessingPlant,
        Self::PaperMill,
        Self::GoldMine,
        Self::BankSubtropicArctic,
        Self::DiamondMine,
        Self::IronMine,
        Self::FruitPlantation,
        Self::RubberPlantation,
        Self::WaterSupply,
        Self::WaterTower,
        Self::FactorySubtropic,
        Self::LumberMill,
        Self::CottonCandyForest,
        Self::CandyFactory,
        Self::BatteryFarm,
        Self::ColaWells,
        Self::ToyShop,
        Self::ToyFactory,
        Self::PlasticFountains,
        Self::FizzyDrinkFactory,
        Self::BubbleGenerator,
        Self::ToffeeQuarry,
        Self::SugarMine,
    ];

    pub fn to_u8(self) -> u8 {
        self as u8
    }

    pub fn from_u8(v: u8) -> Option<Self> {
        Self::ALL.get(usize::from(v)).copied()
    }

    /// Human-readable name.
    pub fn name(self) -> &'static str {
        match self {
            Self::CoalMine => "Coal Mine",
            Self::PowerStation => "Power Station",
            Self::Sawmill => "Sawmill",
            Self::Forest => "Forest",
            Self::OilRefinery => "Oil Refinery",
            Self::OilRig => "Oil Rig",
            Self::OilWell => "Oil Wells",
            Self::Farm => "Farm",
            Self::Factory => "Factory",
            Self::PrintingWorks => "Printing Works",
            Self::CopperMine => "Copper Ore Mine",
            Self::SteelMill => "Steel Mill",
            Self::BankTemperate | Self::BankSubtropicArctic => "Bank",
            Self::FoodProcessingPlant => "Food Processing Plant",
            Self::PaperMill => "Paper Mill",
            Self::GoldMine => "Gold Mine",
            Self::DiamondMine => "Diamond Mine",
            Self::IronMine => "Iron Ore Mine",
            Self::FruitPlantation => "Fruit Plantation",
            Self::RubberPlantation => "Rubber Plantation",
            Self::WaterSupply => "Water Supply",
            Self::WaterTower => "Water Tower",
            Self::FactorySubtropic => "Factory",
            Self::LumberMill => "Lumber Mill",
            Self::CottonCandyForest => "Cotton Candy Forest",
            Self::CandyFactory => "Candy Factory",
            Self::BatteryFarm => "Battery Farm",
            Self::ColaWells => "Cola Wells",
            Self::ToyShop => "Toy Shop",
            Self::ToyFactory => "Toy Factory",
            Self::PlasticFountains => "Plastic Fountains",
            Self::FizzyDrinkFactory => "Fizzy Drink Factory",
            Self::BubbleGenerator => "Bubble Generator",
            Self::ToffeeQuarry => "Toffee Quarry",
            Self::SugarMine => "Sugar Mine",
        }
    }
}

// =============================================================================
// Graphics ranges
// =============================================================================

/// Inclusive `(min, max)` graphics ids per category, indexed by discriminant.
/// Ranges are contiguous and do not overlap.
const GFX_RANGES: [(IndustryGfx, IndustryGfx); IndustryCategory::COUNT] = [
    (0, 6),     // CoalMine
    (7, 10),    // PowerStation
    (11, 15),   // Sawmill
    (16, 17),   // Forest
    (18, 23),   // OilRefinery
    (24, 28),   // OilRig
    (29, 31),   // OilWell
    (32, 38),   // Farm
    (39, 42),   // Factory
    (43, 46),   // PrintingWorks
    (47, 51),   // CopperMine
    (52, 57),   // SteelMill
    (58, 59),   // BankTemperate
    (60, 63),   // FoodProcessingPlant
    (64, 71),   // PaperMill
    (72, 88),   // GoldMine
    (89, 90),   // BankSubtropicArctic
    (91, 99),   // DiamondMine
    (100, 115), // IronMine
    (116, 116), // FruitPlantation
    (117, 117), // RubberPlantation
    (118, 119), // WaterSupply
    (120, 120), // WaterTower
    (121, 124), // FactorySubtropic
    (125, 128), // LumberMill
    (129, 130), // CottonCandyForest
    (131, 134), // CandyFactory
    (135, 136), // BatteryFarm
    (137, 137), // ColaWells
    (138, 141), // ToyShop
    (142, 147), // ToyFactory
    (148, 155), // PlasticFountains
    (156, 159), // FizzyDrinkFactory
    (160, 163), // BubbleGenerator
    (164, 166), // ToffeeQuarry
    (167, 174), // SugarMine
];

/// Inclusive graphics-id range registered for `category`.
#[inline]
pub fn lookup_graphics_range(category: IndustryCategory) -> (IndustryGfx, IndustryGfx) {
    GFX_RANGES[category as usize]
}

#[inline]
pub fn graphics_in_range(category: IndustryCategory, gfx: IndustryGfx) -> bool {
    let (min, max) = lookup_graphics_range(category);
    (min..=max).contains(&gfx)
}

/// Reverse lookup: the category whose range contains `gfx`, if any.
pub fn category_for_graphics(gfx: IndustryGfx) -> Option<IndustryCategory> {
    IndustryCategory::ALL
        .iter()
        .copied()
        .find(|&category| graphics_in_range(category, gfx))
}
