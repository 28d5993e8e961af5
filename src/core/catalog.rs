//! # Hero Catalog
//!
//! The catalog is the data source the core reads from: an immutable list of
//! heroes plus the perk rules for each feature (species or class tag).
//!
//! ```text
//! Catalog (trait)
//! ├── heroes()          -> &[HeroRecord]
//! ├── hero(name)        -> Option<&HeroRecord>
//! └── count_features()  -> Vec<FeatureCount>
//!
//! StaticCatalog
//! ├── heroes: Vec<HeroRecord>               // catalog order
//! └── features: BTreeMap<String, Rules>     // perk thresholds per tag
//! ```
//!
//! The core only talks to the trait, so tests can swap in a hand-built
//! catalog and a future data source needs no changes elsewhere.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};
use std::fmt;
use std::fs;
use std::path::Path;

const BUILTIN_CATALOG: &str = include_str!("../../assets/heroes.toml");

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct HeroRecord {
    pub name: String,
    pub species: Vec<String>,
    #[serde(rename = "class")]
    pub class_name: String,
    pub cost: u32,
}

impl HeroRecord {
    /// Every feature tag this hero contributes, species first, each tag once.
    pub fn features(&self) -> Vec<&str> {
        let mut tags: Vec<&str> = Vec::with_capacity(self.species.len() + 1);
        for tag in self
            .species
            .iter()
            .map(String::as_str)
            .chain(std::iter::once(self.class_name.as_str()))
        {
            if !tags.contains(&tag) {
                tags.push(tag);
            }
        }
        tags
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Perk {
    pub required_count: u32,
    pub description: String,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct FeatureRules {
    #[serde(default)]
    pub perks: Vec<Perk>,
}

/// Per-feature tally for the current team.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeatureCount {
    pub feature: String,
    pub count: u32,
    /// Perks whose threshold is met, lowest threshold first.
    pub active_perks: Vec<Perk>,
    /// The lowest threshold not yet reached, if any.
    pub next_required: Option<u32>,
}

/// Read-only source of heroes and feature counting.
pub trait Catalog {
    fn heroes(&self) -> &[HeroRecord];

    /// Tally features over the named heroes. Names not in the catalog are skipped.
    fn count_features(&self, selected: &[String]) -> Vec<FeatureCount>;

    fn hero(&self, name: &str) -> Option<&HeroRecord> {
        self.heroes().iter().find(|hero| hero.name == name)
    }
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum CatalogError {
    Io(std::io::Error),
    Toml(toml::de::Error),
    Json(serde_json::Error),
    DuplicateHero(String),
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogError::Io(e) => write!(f, "catalog I/O error: {e}"),
            CatalogError::Toml(e) => write!(f, "catalog parse error: {e}"),
            CatalogError::Json(e) => write!(f, "catalog parse error: {e}"),
            CatalogError::DuplicateHero(name) => {
                write!(f, "catalog lists hero '{name}' more than once")
            }
        }
    }
}

impl std::error::Error for CatalogError {}

// ============================================================================
// Static Catalog
// ============================================================================

/// On-disk layout shared by the TOML and JSON formats.
#[derive(Debug, Default, Deserialize, Serialize)]
struct CatalogFile {
    #[serde(default)]
    heroes: Vec<HeroRecord>,
    #[serde(default)]
    features: BTreeMap<String, FeatureRules>,
}

#[derive(Debug, Clone)]
pub struct StaticCatalog {
    heroes: Vec<HeroRecord>,
    features: BTreeMap<String, FeatureRules>,
}

impl StaticCatalog {
    /// Build a catalog, rejecting duplicate hero names.
    ///
    /// Perk lists are sorted by threshold so counting can walk them in order.
    pub fn new(
        heroes: Vec<HeroRecord>,
        mut features: BTreeMap<String, FeatureRules>,
    ) -> Result<Self, CatalogError> {
        let mut seen: HashSet<&str> = HashSet::with_capacity(heroes.len());
        for hero in &heroes {
            if !seen.insert(hero.name.as_str()) {
                return Err(CatalogError::DuplicateHero(hero.name.clone()));
            }
        }

        for (feature, rules) in features.iter_mut() {
            rules.perks.sort_by_key(|perk| perk.required_count);
            if !heroes.iter().any(|hero| hero.features().contains(&feature.as_str())) {
                warn!("Perk rules for '{}' match no hero in the catalog", feature);
            }
        }

        Ok(Self { heroes, features })
    }

    pub fn from_toml_str(contents: &str) -> Result<Self, CatalogError> {
        let file: CatalogFile = toml::from_str(contents).map_err(CatalogError::Toml)?;
        Self::new(file.heroes, file.features)
    }

    pub fn from_json_str(contents: &str) -> Result<Self, CatalogError> {
        let file: CatalogFile = serde_json::from_str(contents).map_err(CatalogError::Json)?;
        Self::new(file.heroes, file.features)
    }

    /// The catalog bundled with the binary.
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::from_toml_str(BUILTIN_CATALOG)
    }

    /// Load a catalog file. `.json` files are read as JSON, anything else as TOML.
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let contents = fs::read_to_string(path).map_err(CatalogError::Io)?;
        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
        let catalog = if is_json {
            Self::from_json_str(&contents)?
        } else {
            Self::from_toml_str(&contents)?
        };
        info!(
            "Loaded {} heroes from {}",
            catalog.heroes.len(),
            path.display()
        );
        Ok(catalog)
    }

    pub fn rules(&self, feature: &str) -> Option<&FeatureRules> {
        self.features.get(feature)
    }
}

impl Catalog for StaticCatalog {
    fn heroes(&self) -> &[HeroRecord] {
        &self.heroes
    }

    fn count_features(&self, selected: &[String]) -> Vec<FeatureCount> {
        // Tally in first-seen order; the final sort fixes the presentation order.
        let mut tally: Vec<(&str, u32)> = Vec::new();
        for name in selected {
            let Some(hero) = self.hero(name) else {
                debug!("Skipping unknown hero '{}' while counting", name);
                continue;
            };
            for tag in hero.features() {
                match tally.iter_mut().find(|(feature, _)| *feature == tag) {
                    Some((_, count)) => *count += 1,
                    None => tally.push((tag, 1)),
                }
            }
        }

        let mut counts: Vec<FeatureCount> = tally
            .into_iter()
            .map(|(feature, count)| {
                let perks = self
                    .features
                    .get(feature)
                    .map(|rules| rules.perks.as_slice())
                    .unwrap_or_default();
                FeatureCount {
                    feature: feature.to_string(),
                    count,
                    active_perks: perks
                        .iter()
                        .filter(|perk| perk.required_count <= count)
                        .cloned()
                        .collect(),
                    next_required: perks
                        .iter()
                        .map(|perk| perk.required_count)
                        .find(|required| *required > count),
                }
            })
            .collect();

        counts.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.feature.cmp(&b.feature)));
        counts
    }
}

/// Load the configured catalog, or the built-in one when no path is set.
pub fn load_catalog(path: Option<&Path>) -> Result<StaticCatalog, CatalogError> {
    match path {
        Some(path) => StaticCatalog::load(path),
        None => {
            info!("No catalog file configured, using built-in catalog");
            StaticCatalog::builtin()
        }
    }
}
