//! Curated nature search terms, grouped by theme.

/// Seasonal scenes.
pub const SEASONS: &[&str] = &[
    "autumn leaves",
    "fall foliage",
    "winter landscape",
    "snow mountain",
    "spring flowers",
    "summer meadow",
    "cherry blossom",
    "winter forest",
    "autumn forest",
    "spring garden",
    "summer beach",
    "winter wonderland",
];

/// Landscapes.
pub const LANDSCAPES: &[&str] = &[
    "mountain peak",
    "ocean waves",
    "desert dunes",
    "canyon view",
    "waterfall",
    "lake reflection",
    "river valley",
    "coastal cliff",
    "prairie grassland",
    "rolling hills",
    "volcanic landscape",
    "glacier",
];

/// Weather and sky.
pub const WEATHER_AND_SKY: &[&str] = &[
    "sunrise mountain",
    "sunset ocean",
    "storm clouds",
    "rainbow after rain",
    "misty forest",
    "golden hour",
    "dramatic sky",
    "northern lights",
    "starry night",
    "cloudy mountains",
    "foggy lake",
    "clear blue sky",
];

/// Wildlife habitats.
pub const HABITATS: &[&str] = &[
    "savanna",
    "rainforest",
    "tundra",
    "coral reef",
    "bamboo forest",
    "pine forest",
    "redwood trees",
    "cactus desert",
    "tropical beach",
    "rocky shore",
    "wildflower field",
    "moss covered rocks",
];

/// Specific natural features.
pub const NATURAL_FEATURES: &[&str] = &[
    "natural arch",
    "hot springs",
    "cave entrance",
    "sand dunes",
    "ice formation",
    "rock formation",
    "tree silhouette",
    "mountain reflection",
    "forest path",
    "stone bridge",
    "natural pool",
    "cliff edge",
];

/// Theme name paired with its terms, in display order.
pub const TERM_GROUPS: &[(&str, &[&str])] = &[
    ("Seasons", SEASONS),
    ("Landscapes", LANDSCAPES),
    ("Weather & Sky", WEATHER_AND_SKY),
    ("Wildlife habitats", HABITATS),
    ("Natural features", NATURAL_FEATURES),
];

/// Every curated term across all themes.
///
/// # Examples
///
/// ```
/// let terms: Vec<&str> = verdant_core::nature_queries().collect();
/// assert!(terms.contains(&"golden hour"));
/// ```
pub fn nature_queries() -> impl Iterator<Item = &'static str> {
    TERM_GROUPS.iter().flat_map(|(_, terms)| terms.iter().copied())
}
