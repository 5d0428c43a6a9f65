//! Compiled-in reference tables for Odisha.
//!
//! District averages are simulated survey values, in kg/ha.

use crate::models::{CropProfile, CropRequirement, NpkValues, WaterRequirement, YieldRange};

struct CropRow {
    name: &'static str,
    varieties: &'static [&'static str],
    ideal_npk: CropRequirement,
    yield_range: YieldRange,
    growing_days: u32,
    water: WaterRequirement,
}

const CROPS: &[CropRow] = &[
    CropRow {
        name: "Rice",
        varieties: &["Swarna", "MTU-1010", "IR-36", "Naveen", "Lalat", "Khandagiri", "NDR-359", "Ranjit"],
        ideal_npk: CropRequirement::from_static(120.0, 60.0, 60.0),
        yield_range: YieldRange::new(15.0, 25.0),
        growing_days: 120,
        water: WaterRequirement::High,
    },
    CropRow {
        name: "Maize",
        varieties: &["HQPM-1", "DHM-117", "Ganga-11", "Bio-9681", "Kanchan", "Vivek-165", "African Tall"],
        ideal_npk: CropRequirement::from_static(150.0, 75.0, 50.0),
        yield_range: YieldRange::new(20.0, 35.0),
        growing_days: 100,
        water: WaterRequirement::Medium,
    },
    CropRow {
        name: "Pigeon Pea (Arhar)",
        varieties: &["PUSA-9", "ICPL-88039", "ICPH-2671", "T-21", "Maruti", "RTA-1", "MALS-25"],
        ideal_npk: CropRequirement::from_static(25.0, 50.0, 25.0),
        yield_range: YieldRange::new(5.0, 10.0),
        growing_days: 180,
        water: WaterRequirement::Low,
    },
    CropRow {
        name: "Green Gram (Moong)",
        varieties: &["Pusa-9531", "TARM-1", "IPM 02-3", "Samrat", "ML-131", "Asha", "Konkan Ghati-1"],
        ideal_npk: CropRequirement::from_static(20.0, 40.0, 20.0),
        yield_range: YieldRange::new(4.0, 8.0),
        growing_days: 65,
        water: WaterRequirement::Low,
    },
    CropRow {
        name: "Black Gram (Urad)",
        varieties: &["TU-40", "PU-19", "Vamban-6", "IPU-2", "Pant U-19", "KU-301", "Trombay"],
        ideal_npk: CropRequirement::from_static(20.0, 40.0, 20.0),
        yield_range: YieldRange::new(4.0, 7.0),
        growing_days: 70,
        water: WaterRequirement::Low,
    },
    CropRow {
        name: "Groundnut",
        varieties: &["K-6", "TAG-24", "ICGV 91114", "JL-24", "Girnar", "TG-37A", "GG-2"],
        ideal_npk: CropRequirement::from_static(25.0, 50.0, 45.0),
        yield_range: YieldRange::new(8.0, 15.0),
        growing_days: 110,
        water: WaterRequirement::Medium,
    },
    CropRow {
        name: "Sesame",
        varieties: &["Krishna", "RT-346", "TKG-22", "Swetha", "BSR-2", "Samrat", "K-6 (til)"],
        ideal_npk: CropRequirement::from_static(40.0, 20.0, 20.0),
        yield_range: YieldRange::new(3.0, 6.0),
        growing_days: 90,
        water: WaterRequirement::Low,
    },
    CropRow {
        name: "Ragi",
        varieties: &["GPU-28", "VL-352", "PR-202", "CO-9", "MR-1", "Indaf-9", "GPU-67"],
        ideal_npk: CropRequirement::from_static(60.0, 30.0, 30.0),
        yield_range: YieldRange::new(10.0, 18.0),
        growing_days: 110,
        water: WaterRequirement::Low,
    },
];

const DISTRICTS: &[(&str, NpkValues)] = &[
    ("Angul", NpkValues::new(245.0, 18.0, 180.0)),
    ("Balangir", NpkValues::new(220.0, 15.0, 165.0)),
    ("Balasore", NpkValues::new(265.0, 22.0, 195.0)),
    ("Bargarh", NpkValues::new(255.0, 20.0, 185.0)),
    ("Bhadrak", NpkValues::new(270.0, 24.0, 200.0)),
    ("Boudh", NpkValues::new(230.0, 16.0, 170.0)),
    ("Cuttack", NpkValues::new(280.0, 26.0, 210.0)),
    ("Deogarh", NpkValues::new(215.0, 14.0, 160.0)),
    ("Dhenkanal", NpkValues::new(250.0, 19.0, 185.0)),
    ("Gajapati", NpkValues::new(210.0, 13.0, 155.0)),
    ("Ganjam", NpkValues::new(240.0, 17.0, 175.0)),
    ("Jagatsinghpur", NpkValues::new(275.0, 25.0, 205.0)),
    ("Jajpur", NpkValues::new(260.0, 21.0, 190.0)),
    ("Jharsuguda", NpkValues::new(235.0, 16.0, 170.0)),
    ("Kalahandi", NpkValues::new(225.0, 15.0, 165.0)),
    ("Kandhamal", NpkValues::new(205.0, 12.0, 150.0)),
    ("Kendrapara", NpkValues::new(278.0, 25.0, 208.0)),
    ("Kendujhar", NpkValues::new(230.0, 16.0, 168.0)),
    ("Khordha", NpkValues::new(285.0, 28.0, 215.0)),
    ("Koraput", NpkValues::new(200.0, 11.0, 145.0)),
    ("Malkangiri", NpkValues::new(195.0, 10.0, 140.0)),
    ("Mayurbhanj", NpkValues::new(238.0, 17.0, 175.0)),
    ("Nabarangpur", NpkValues::new(208.0, 12.0, 152.0)),
    ("Nayagarh", NpkValues::new(248.0, 19.0, 182.0)),
    ("Nuapada", NpkValues::new(218.0, 14.0, 162.0)),
    ("Puri", NpkValues::new(272.0, 24.0, 202.0)),
    ("Rayagada", NpkValues::new(202.0, 11.0, 148.0)),
    ("Sambalpur", NpkValues::new(242.0, 18.0, 178.0)),
    ("Subarnapur", NpkValues::new(228.0, 15.0, 168.0)),
    ("Sundargarh", NpkValues::new(232.0, 16.0, 172.0)),
];

const IRRIGATION_TYPES: &[&str] = &[
    "Rainfed",
    "Canal Irrigation",
    "Tube Well",
    "Bore Well",
    "Drip Irrigation",
    "Sprinkler",
    "Pond/Tank",
];

const SOIL_TYPES: &[&str] = &[
    "Alluvial",
    "Red Soil",
    "Black Cotton",
    "Laterite",
    "Sandy Loam",
    "Clay Loam",
    "Mixed",
];

pub(super) const FALLBACK_SOIL_NPK: &[(&str, NpkValues)] = &[
    ("Alluvial", NpkValues::new(240.0, 18.0, 175.0)),
    ("Red Soil", NpkValues::new(200.0, 15.0, 160.0)),
    ("Black Cotton", NpkValues::new(260.0, 22.0, 190.0)),
];

pub(super) fn crops() -> Vec<CropProfile> {
    CROPS
        .iter()
        .map(|row| CropProfile {
            name: row.name.to_string(),
            varieties: row.varieties.iter().map(|v| v.to_string()).collect(),
            ideal_npk: row.ideal_npk,
            yield_range: row.yield_range,
            growing_days: row.growing_days,
            water_requirement: row.water,
        })
        .collect()
}

pub(super) fn districts() -> Vec<(String, NpkValues)> {
    DISTRICTS
        .iter()
        .map(|(name, npk)| (name.to_string(), *npk))
        .collect()
}

pub(super) fn irrigation_types() -> Vec<String> {
    IRRIGATION_TYPES.iter().map(|s| s.to_string()).collect()
}

pub(super) fn soil_types() -> Vec<String> {
    SOIL_TYPES.iter().map(|s| s.to_string()).collect()
}
