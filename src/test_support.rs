//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::collections::BTreeMap;
use std::sync::Arc;

use crate::core::catalog::{FeatureRules, HeroRecord, Perk, StaticCatalog};
use crate::core::sort::SortState;
use crate::core::state::App;

pub fn hero(name: &str, species: &[&str], class_name: &str, cost: u32) -> HeroRecord {
    HeroRecord {
        name: name.to_string(),
        species: species.iter().map(|s| s.to_string()).collect(),
        class_name: class_name.to_string(),
        cost,
    }
}

/// The two-hero catalog: Ogre (Brute/Tank, 3) and Elf (Fae/Ranger, 1).
pub fn ogre_elf_catalog() -> StaticCatalog {
    let heroes = vec![
        hero("Ogre", &["Brute"], "Tank", 3),
        hero("Elf", &["Fae"], "Ranger", 1),
    ];
    StaticCatalog::new(heroes, BTreeMap::new()).unwrap()
}

/// A small catalog with perk rules on Brute and Fae.
pub fn test_catalog() -> StaticCatalog {
    let heroes = vec![
        hero("Ogre", &["Brute"], "Tank", 3),
        hero("Elf", &["Fae"], "Ranger", 1),
        hero("Troll", &["Brute", "Beast"], "Warrior", 1),
        hero("Dryad", &["Fae"], "Shaman", 2),
        hero("Boar", &["Beast"], "Tank", 2),
    ];
    let mut features = BTreeMap::new();
    features.insert(
        "Brute".to_string(),
        FeatureRules {
            perks: vec![Perk {
                required_count: 2,
                description: "Brutes hit harder.".to_string(),
            }],
        },
    );
    features.insert(
        "Fae".to_string(),
        FeatureRules {
            perks: vec![Perk {
                required_count: 2,
                description: "Fae dodge the first attack.".to_string(),
            }],
        },
    );
    StaticCatalog::new(heroes, features).unwrap()
}

/// Creates a test App over `test_catalog()` with the default sort.
pub fn test_app() -> App {
    App::new(Arc::new(test_catalog()), SortState::default())
}

pub fn ogre_elf_app() -> App {
    App::new(Arc::new(ogre_elf_catalog()), SortState::default())
}
