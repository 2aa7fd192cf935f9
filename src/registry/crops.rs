use crate::types::profile::{CropProfile, Season, Sustainability, WaterNeed};

use Season::{Kharif, Rabi};

/// Built-in crop reference table covering the major Indian field crops.
/// Yields are quintals per acre unless the unit says otherwise; profits are
/// rupees per acre.
pub const CROPS: &[CropProfile] = &[
    CropProfile {
        name: "Rice",
        soil_types: &["loamy", "clay"],
        water_requirement: WaterNeed::High,
        yield_range: (20.0, 35.0),
        profit_range: (35000.0, 55000.0),
        sustainability: Sustainability::Medium,
        seasons: &[Kharif, Rabi],
        regions: &[
            "punjab",
            "haryana",
            "uttar pradesh",
            "west bengal",
            "tamil nadu",
            "karnataka",
            "andhra pradesh",
        ],
        glyph: "🍚",
        yield_unit: "q/acre",
        yield_decimals: 1,
    },
    CropProfile {
        name: "Wheat",
        soil_types: &["loamy", "clay", "silty"],
        water_requirement: WaterNeed::Medium,
        yield_range: (25.0, 45.0),
        profit_range: (30000.0, 50000.0),
        sustainability: Sustainability::High,
        seasons: &[Rabi],
        regions: &[
            "punjab",
            "haryana",
            "uttar pradesh",
            "madhya pradesh",
            "rajasthan",
            "bihar",
        ],
        glyph: "🌾",
        yield_unit: "q/acre",
        yield_decimals: 1,
    },
    CropProfile {
        name: "Maize",
        soil_types: &["loamy", "sandy", "clay"],
        water_requirement: WaterNeed::Medium,
        yield_range: (25.0, 40.0),
        profit_range: (28000.0, 45000.0),
        sustainability: Sustainability::Medium,
        seasons: &[Kharif, Rabi],
        regions: &[
            "karnataka",
            "andhra pradesh",
            "tamil nadu",
            "maharashtra",
            "bihar",
            "uttar pradesh",
        ],
        glyph: "🌽",
        yield_unit: "q/acre",
        yield_decimals: 1,
    },
    CropProfile {
        name: "Sugarcane",
        soil_types: &["loamy", "clay"],
        water_requirement: WaterNeed::High,
        yield_range: (300.0, 500.0),
        profit_range: (45000.0, 80000.0),
        sustainability: Sustainability::Low,
        seasons: &[Kharif],
        regions: &[
            "uttar pradesh",
            "maharashtra",
            "karnataka",
            "tamil nadu",
            "andhra pradesh",
            "punjab",
            "haryana",
        ],
        glyph: "🧃",
        yield_unit: "tonnes/acre",
        yield_decimals: 0,
    },
    CropProfile {
        name: "Cotton",
        soil_types: &["loamy", "sandy", "clay"],
        water_requirement: WaterNeed::Medium,
        yield_range: (8.0, 15.0),
        profit_range: (40000.0, 70000.0),
        sustainability: Sustainability::Medium,
        seasons: &[Kharif],
        regions: &[
            "gujarat",
            "maharashtra",
            "andhra pradesh",
            "punjab",
            "haryana",
            "rajasthan",
            "karnataka",
        ],
        glyph: "🧵",
        yield_unit: "q/acre",
        yield_decimals: 1,
    },
    CropProfile {
        name: "Pulses",
        soil_types: &["loamy", "sandy", "clay"],
        water_requirement: WaterNeed::Low,
        yield_range: (10.0, 20.0),
        profit_range: (35000.0, 60000.0),
        sustainability: Sustainability::High,
        seasons: &[Rabi, Kharif],
        regions: &[
            "madhya pradesh",
            "rajasthan",
            "maharashtra",
            "karnataka",
            "uttar pradesh",
            "andhra pradesh",
        ],
        glyph: "🫘",
        yield_unit: "q/acre",
        yield_decimals: 1,
    },
    CropProfile {
        name: "Soybean",
        soil_types: &["loamy", "clay"],
        water_requirement: WaterNeed::Medium,
        yield_range: (15.0, 25.0),
        profit_range: (32000.0, 48000.0),
        sustainability: Sustainability::High,
        seasons: &[Kharif],
        regions: &[
            "madhya pradesh",
            "maharashtra",
            "rajasthan",
            "karnataka",
            "andhra pradesh",
        ],
        glyph: "🫘",
        yield_unit: "q/acre",
        yield_decimals: 1,
    },
    CropProfile {
        name: "Groundnut",
        soil_types: &["sandy", "loamy"],
        water_requirement: WaterNeed::Low,
        yield_range: (12.0, 22.0),
        profit_range: (30000.0, 50000.0),
        sustainability: Sustainability::High,
        seasons: &[Kharif, Rabi],
        regions: &[
            "gujarat",
            "andhra pradesh",
            "tamil nadu",
            "karnataka",
            "rajasthan",
            "maharashtra",
        ],
        glyph: "🥜",
        yield_unit: "q/acre",
        yield_decimals: 1,
    },
    CropProfile {
        name: "Sunflower",
        soil_types: &["loamy", "sandy"],
        water_requirement: WaterNeed::Low,
        yield_range: (8.0, 15.0),
        profit_range: (25000.0, 40000.0),
        sustainability: Sustainability::Medium,
        seasons: &[Rabi],
        regions: &["karnataka", "andhra pradesh", "maharashtra", "tamil nadu"],
        glyph: "🌻",
        yield_unit: "q/acre",
        yield_decimals: 1,
    },
    CropProfile {
        name: "Potato",
        soil_types: &["loamy", "sandy"],
        water_requirement: WaterNeed::Medium,
        yield_range: (200.0, 350.0),
        profit_range: (40000.0, 80000.0),
        sustainability: Sustainability::Medium,
        seasons: &[Rabi, Kharif],
        regions: &[
            "uttar pradesh",
            "west bengal",
            "bihar",
            "punjab",
            "assam",
            "gujarat",
        ],
        glyph: "🥔",
        yield_unit: "q/acre",
        yield_decimals: 0,
    },
    CropProfile {
        name: "Pearl Millet",
        soil_types: &["sandy", "loamy"],
        water_requirement: WaterNeed::Low,
        yield_range: (15.0, 25.0),
        profit_range: (25000.0, 40000.0),
        sustainability: Sustainability::High,
        seasons: &[Kharif],
        regions: &[
            "rajasthan",
            "gujarat",
            "haryana",
            "uttar pradesh",
            "maharashtra",
        ],
        glyph: "🌾",
        yield_unit: "q/acre",
        yield_decimals: 1,
    },
    CropProfile {
        name: "Sorghum",
        soil_types: &["sandy", "loamy"],
        water_requirement: WaterNeed::Low,
        yield_range: (12.0, 20.0),
        profit_range: (22000.0, 35000.0),
        sustainability: Sustainability::High,
        seasons: &[Kharif],
        regions: &[
            "maharashtra",
            "karnataka",
            "andhra pradesh",
            "tamil nadu",
            "rajasthan",
        ],
        glyph: "🌾",
        yield_unit: "q/acre",
        yield_decimals: 1,
    },
];
