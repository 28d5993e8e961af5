//! # Sorting
//!
//! A header click picks a column; the column picks a chain of comparators.
//! The first comparator that finds a difference decides the order, and
//! `sort_heroes` uses a stable sort, so heroes equal on every key keep their
//! catalog order.
//!
//! ```text
//! Column    Primary (per direction)    Secondary (always ascending)
//! ───────   ───────────────────────    ────────────────────────────
//! Name      name                       -
//! Species   first species tag          cost
//! Class     class                      cost
//! Cost      cost                       name
//! ```

use clap::ValueEnum;
use log::warn;
use std::cmp::Ordering;
use std::fmt;

use crate::core::catalog::HeroRecord;

/// Sortable table column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum SortColumn {
    Name,
    Species,
    Class,
    /// Default column, and the fallback for names that don't parse.
    #[default]
    Cost,
}

impl SortColumn {
    pub const ALL: [SortColumn; 4] = [
        SortColumn::Name,
        SortColumn::Species,
        SortColumn::Class,
        SortColumn::Cost,
    ];

    /// Parse a column name from config or env. Unknown names fall back to `Cost`.
    pub fn from_name(name: &str) -> SortColumn {
        match name.trim().to_ascii_lowercase().as_str() {
            "name" => SortColumn::Name,
            "species" => SortColumn::Species,
            "class" => SortColumn::Class,
            "cost" => SortColumn::Cost,
            other => {
                warn!("Unknown sort column '{}', falling back to cost", other);
                SortColumn::Cost
            }
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SortColumn::Name => "Name",
            SortColumn::Species => "Species",
            SortColumn::Class => "Class",
            SortColumn::Cost => "Cost",
        }
    }
}

impl fmt::Display for SortColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label().to_ascii_lowercase())
    }
}

/// Active column and direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortState {
    pub column: SortColumn,
    pub ascending: bool,
}

impl Default for SortState {
    fn default() -> Self {
        Self {
            column: SortColumn::Cost,
            ascending: true,
        }
    }
}

impl SortState {
    pub fn new(column: SortColumn, ascending: bool) -> Self {
        Self { column, ascending }
    }

    /// Header click: the same column flips direction, a new column keeps it.
    pub fn click(&mut self, column: SortColumn) {
        if self.column == column {
            self.ascending = !self.ascending;
        } else {
            self.column = column;
        }
    }

    pub fn indicator(&self) -> &'static str {
        if self.ascending { "▲" } else { "▼" }
    }
}

/// Field a comparator reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Name,
    FirstSpecies,
    ClassName,
    Cost,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Comparator {
    pub key: SortKey,
    pub ascending: bool,
}

impl Comparator {
    pub fn ascend(key: SortKey) -> Self {
        Self { key, ascending: true }
    }

    pub fn directed(key: SortKey, ascending: bool) -> Self {
        Self { key, ascending }
    }

    pub fn compare(&self, a: &HeroRecord, b: &HeroRecord) -> Ordering {
        let ordering = match self.key {
            SortKey::Name => a.name.cmp(&b.name),
            // A hero without species sorts before any tag.
            SortKey::FirstSpecies => a.species.first().cmp(&b.species.first()),
            SortKey::ClassName => a.class_name.cmp(&b.class_name),
            SortKey::Cost => a.cost.cmp(&b.cost),
        };
        if self.ascending {
            ordering
        } else {
            ordering.reverse()
        }
    }
}

/// Comparator chain for a column, primary first.
pub fn comparators(column: SortColumn, ascending: bool) -> Vec<Comparator> {
    match column {
        SortColumn::Name => vec![Comparator::directed(SortKey::Name, ascending)],
        SortColumn::Species => vec![
            Comparator::directed(SortKey::FirstSpecies, ascending),
            Comparator::ascend(SortKey::Cost),
        ],
        SortColumn::Class => vec![
            Comparator::directed(SortKey::ClassName, ascending),
            Comparator::ascend(SortKey::Cost),
        ],
        SortColumn::Cost => vec![
            Comparator::directed(SortKey::Cost, ascending),
            Comparator::ascend(SortKey::Name),
        ],
    }
}

/// Apply a chain lexicographically.
pub fn compare_with(chain: &[Comparator], a: &HeroRecord, b: &HeroRecord) -> Ordering {
    chain
        .iter()
        .map(|comparator| comparator.compare(a, b))
        .find(|ordering| ordering.is_ne())
        .unwrap_or(Ordering::Equal)
}

/// Stable sort of the catalog under `sort`.
pub fn sort_heroes(heroes: &[HeroRecord], sort: SortState) -> Vec<&HeroRecord> {
    let chain = comparators(sort.column, sort.ascending);
    let mut sorted: Vec<&HeroRecord> = heroes.iter().collect();
    sorted.sort_by(|a, b| compare_with(&chain, a, b));
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::hero;

    fn order(sorted: &[&HeroRecord]) -> Vec<String> {
        sorted.iter().map(|h| h.name.clone()).collect()
    }

    fn sample() -> Vec<HeroRecord> {
        vec![
            hero("Ogre", &["Brute"], "Tank", 3),
            hero("Elf", &["Fae"], "Ranger", 1),
            hero("Troll", &["Brute", "Beast"], "Warrior", 1),
            hero("Dryad", &["Fae"], "Shaman", 2),
            hero("Boar", &["Beast"], "Tank", 2),
        ]
    }

    #[test]
    fn test_default_sort_state() {
        let sort = SortState::default();
        assert_eq!(sort.column, SortColumn::Cost);
        assert!(sort.ascending);
    }

    #[test]
    fn test_cost_ascending_breaks_ties_by_name() {
        let heroes = sample();
        let sorted = sort_heroes(&heroes, SortState::new(SortColumn::Cost, true));
        assert_eq!(order(&sorted), vec!["Elf", "Troll", "Boar", "Dryad", "Ogre"]);
    }

    #[test]
    fn test_cost_descending_keeps_name_ascending() {
        let heroes = sample();
        let sorted = sort_heroes(&heroes, SortState::new(SortColumn::Cost, false));
        assert_eq!(order(&sorted), vec!["Ogre", "Boar", "Dryad", "Elf", "Troll"]);
    }

    #[test]
    fn test_species_ties_sorted_by_cost() {
        let heroes = sample();
        let sorted = sort_heroes(&heroes, SortState::new(SortColumn::Species, true));
        assert_eq!(order(&sorted), vec!["Boar", "Troll", "Ogre", "Elf", "Dryad"]);
    }

    #[test]
    fn test_species_descending_cost_still_ascending() {
        let heroes = sample();
        let sorted = sort_heroes(&heroes, SortState::new(SortColumn::Species, false));
        assert_eq!(order(&sorted), vec!["Elf", "Dryad", "Troll", "Ogre", "Boar"]);
    }

    #[test]
    fn test_class_sort() {
        let heroes = sample();
        let sorted = sort_heroes(&heroes, SortState::new(SortColumn::Class, true));
        assert_eq!(order(&sorted), vec!["Elf", "Dryad", "Boar", "Ogre", "Troll"]);
    }

    #[test]
    fn test_name_sort_both_directions() {
        let heroes = sample();
        let asc = sort_heroes(&heroes, SortState::new(SortColumn::Name, true));
        assert_eq!(order(&asc), vec!["Boar", "Dryad", "Elf", "Ogre", "Troll"]);
        let desc = sort_heroes(&heroes, SortState::new(SortColumn::Name, false));
        assert_eq!(order(&desc), vec!["Troll", "Ogre", "Elf", "Dryad", "Boar"]);
    }

    #[test]
    fn test_exact_ties_keep_catalog_order() {
        let heroes = vec![
            hero("B", &["Fae"], "Mage", 1),
            hero("A", &["Fae"], "Mage", 1),
        ];
        let sorted = sort_heroes(&heroes, SortState::new(SortColumn::Class, true));
        assert_eq!(order(&sorted), vec!["B", "A"]);
    }

    #[test]
    fn test_empty_species_sorts_first() {
        let heroes = vec![hero("Tagged", &["Beast"], "Tank", 1), hero("Bare", &[], "Tank", 5)];
        let sorted = sort_heroes(&heroes, SortState::new(SortColumn::Species, true));
        assert_eq!(order(&sorted), vec!["Bare", "Tagged"]);
    }

    #[test]
    fn test_comparator_chains() {
        assert_eq!(
            comparators(SortColumn::Name, false),
            vec![Comparator::directed(SortKey::Name, false)]
        );
        assert_eq!(
            comparators(SortColumn::Cost, false),
            vec![
                Comparator::directed(SortKey::Cost, false),
                Comparator::ascend(SortKey::Name),
            ]
        );
    }

    #[test]
    fn test_click_same_column_reverses() {
        let mut sort = SortState::default();
        sort.click(SortColumn::Cost);
        assert_eq!(sort, SortState::new(SortColumn::Cost, false));
        sort.click(SortColumn::Cost);
        assert_eq!(sort, SortState::new(SortColumn::Cost, true));
    }

    #[test]
    fn test_click_new_column_keeps_direction() {
        let mut sort = SortState::new(SortColumn::Cost, false);
        sort.click(SortColumn::Name);
        assert_eq!(sort, SortState::new(SortColumn::Name, false));
    }

    #[test]
    fn test_from_name_falls_back_to_cost() {
        assert_eq!(SortColumn::from_name("Species"), SortColumn::Species);
        assert_eq!(SortColumn::from_name(" class "), SortColumn::Class);
        assert_eq!(SortColumn::from_name("ability"), SortColumn::Cost);
        assert_eq!(SortColumn::from_name(""), SortColumn::Cost);
    }
}
