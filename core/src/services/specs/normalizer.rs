//! Maps free-form specification keys entered by staff ("Processor Model",
//! "RAM Type", "Power Consumption") onto a canonical vocabulary.

use std::collections::BTreeMap;

use tracing::trace;

/// Synonym table as (synonym, canonical key). Order matters: the first
/// synonym equal to or contained in the key wins, so specific phrases come
/// before the single words they contain.
const SYNONYMS: &[(&str, &str)] = &[
    ("model", "model"),
    ("brand", "brand"),
    ("manufacturer", "brand"),
    ("socket", "socket"),
    ("chipset", "chipset"),
    ("form factor", "form_factor"),
    ("formfactor", "form_factor"),
    ("memory type", "memory_type"),
    ("ram type", "memory_type"),
    ("memory support", "memory_type"),
    ("supported memory", "memory_type"),
    ("memory size", "memory_size"),
    ("vram", "vram"),
    ("video memory", "vram"),
    ("capacity", "capacity"),
    ("cores", "cores"),
    ("threads", "threads"),
    ("boost clock", "boost_clock"),
    ("base clock", "base_clock"),
    ("frequency", "frequency"),
    ("speed", "frequency"),
    ("tdp", "tdp"),
    ("power consumption", "tdp"),
    ("power draw", "tdp"),
    ("wattage", "wattage"),
    ("power output", "wattage"),
    ("efficiency", "efficiency"),
    ("interface", "interface"),
    ("processor", "cpu"),
    ("cpu", "cpu"),
    ("graphics", "gpu"),
    ("gpu", "gpu"),
    ("memory", "memory"),
    ("ram", "memory"),
    ("storage", "storage"),
    ("color", "color"),
    ("colour", "color"),
];

/// Canonical form of a specification key.
///
/// Unknown keys come back trimmed and lowercased.
pub fn normalize_spec_key(key: &str) -> String {
    let lowered = key.trim().to_lowercase();

    match SYNONYMS
        .iter()
        .find(|(synonym, _)| lowered == *synonym || lowered.contains(synonym))
    {
        Some((_, canonical)) => (*canonical).to_string(),
        None => {
            trace!(key = %lowered, "No canonical specification key");
            lowered
        }
    }
}

/// Normalize every key of a specification map.
///
/// Values are trimmed. When two source keys share a canonical key, the one
/// that sorts first keeps its value.
pub fn normalize_specifications(specs: &BTreeMap<String, String>) -> BTreeMap<String, String> {
    let mut normalized = BTreeMap::new();
    for (key, value) in specs {
        normalized
            .entry(normalize_spec_key(key))
            .or_insert_with(|| value.trim().to_string());
    }
    normalized
}

/// Distinct canonical keys in table order
pub fn canonical_keys() -> Vec<&'static str> {
    let mut keys: Vec<&'static str> = Vec::new();
    for (_, canonical) in SYNONYMS {
        if !keys.contains(canonical) {
            keys.push(canonical);
        }
    }
    keys
}
