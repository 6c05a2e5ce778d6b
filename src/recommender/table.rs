use std::collections::HashMap;

/// Crops the table knows about, in the order they are advertised.
pub const SUPPORTED_CROPS: [&str; 6] = ["wheat", "rice", "corn", "cotton", "sugarcane", "potato"];

/// Farming stages, in cycle order.
pub const SUPPORTED_STAGES: [&str; 5] = [
    "land-preparation",
    "sowing",
    "maintenance",
    "harvesting",
    "post-harvest",
];

pub const EQUIPMENT_TYPES: [&str; 5] = ["tractor", "harvester", "planter", "sprayer", "cultivator"];

/// Returned for any (stage, crop) pair the table does not cover, and embedded
/// in 500 responses.
pub const DEFAULT_EQUIPMENT: [&str; 4] = ["tractor", "harvester", "planter", "sprayer"];

/// Primary and secondary equipment per stage. Every crop currently shares its
/// stage's row.
const STAGE_EQUIPMENT: [(&str, [&str; 2]); 5] = [
    ("land-preparation", ["tractor", "cultivator"]),
    ("sowing", ["planter", "tractor"]),
    ("maintenance", ["sprayer", "tractor"]),
    ("harvesting", ["harvester", "tractor"]),
    ("post-harvest", ["tractor", "sprayer"]),
];

/// Immutable stage -> crop -> equipment mapping, built once at startup.
#[derive(Debug, Clone)]
pub struct StageCropTable {
    entries: HashMap<&'static str, HashMap<&'static str, [&'static str; 2]>>,
}

impl StageCropTable {
    pub fn new() -> Self {
        let entries = STAGE_EQUIPMENT
            .iter()
            .map(|(stage, equipment)| {
                let crops = SUPPORTED_CROPS
                    .iter()
                    .map(|crop| (*crop, *equipment))
                    .collect();
                (*stage, crops)
            })
            .collect();

        Self { entries }
    }

    /// Exact-match lookup. Keys are expected to be normalized already.
    pub fn get(&self, stage: &str, crop: &str) -> Option<&[&'static str]> {
        self.entries
            .get(stage)
            .and_then(|crops| crops.get(crop))
            .map(|equipment| equipment.as_slice())
    }

    pub fn stage_count(&self) -> usize {
        self.entries.len()
    }

    pub fn pair_count(&self) -> usize {
        self.entries.values().map(HashMap::len).sum()
    }
}

impl Default for StageCropTable {
    fn default() -> Self {
        Self::new()
    }
}
