use proptest::prelude::*;
use roster::core::selection::Selection;
use roster::core::sort::{Comparator, SortKey, comparators, compare_with, sort_heroes};
use roster::core::view::split_halves;
use roster::{HeroRecord, SortColumn, SortState};
use std::cmp::Ordering;

// ============================================================================
// Strategies
// ============================================================================

fn column() -> impl Strategy<Value = SortColumn> {
    prop_oneof![
        Just(SortColumn::Name),
        Just(SortColumn::Species),
        Just(SortColumn::Class),
        Just(SortColumn::Cost),
    ]
}

/// Heroes drawn from small tag/cost pools so ties are common.
fn heroes() -> impl Strategy<Value = Vec<HeroRecord>> {
    let tag = prop::sample::select(vec!["Beast", "Brute", "Fae", "Human"]);
    let class = prop::sample::select(vec!["Mage", "Ranger", "Tank"]);
    proptest::collection::vec(
        (
            "[A-D]{1,2}",
            proptest::collection::vec(tag, 0..3),
            class,
            1u32..4,
        ),
        0..24,
    )
    .prop_map(|rows| {
        rows.into_iter()
            .enumerate()
            .map(|(i, (name, species, class, cost))| HeroRecord {
                // Suffix keeps names unique, as the catalog requires
                name: format!("{name}{i:02}"),
                species: species.into_iter().map(String::from).collect(),
                class_name: class.to_string(),
                cost,
            })
            .collect()
    })
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #[test]
    fn sorted_pairs_respect_comparator_chain(
        heroes in heroes(),
        column in column(),
        ascending in any::<bool>(),
    ) {
        let chain = comparators(column, ascending);
        let sorted = sort_heroes(&heroes, SortState::new(column, ascending));
        prop_assert_eq!(sorted.len(), heroes.len());

        for pair in sorted.windows(2) {
            let ordering = compare_with(&chain, pair[0], pair[1]);
            prop_assert_ne!(ordering, Ordering::Greater);

            // Full ties keep catalog order
            if ordering == Ordering::Equal {
                let pos = |h: &HeroRecord| heroes.iter().position(|x| x.name == h.name);
                prop_assert!(pos(pair[0]) < pos(pair[1]));
            }
        }
    }

    #[test]
    fn secondary_key_is_always_ascending(
        heroes in heroes(),
        column in column(),
        ascending in any::<bool>(),
    ) {
        let chain = comparators(column, ascending);
        prop_assert!(chain[0].ascending == ascending);
        prop_assert!(chain.iter().skip(1).all(|c| c.ascending));

        let sorted = sort_heroes(&heroes, SortState::new(column, ascending));
        if let [primary, secondary] = chain.as_slice() {
            for pair in sorted.windows(2) {
                if primary.compare(pair[0], pair[1]) == Ordering::Equal {
                    prop_assert_ne!(secondary.compare(pair[0], pair[1]), Ordering::Greater);
                }
            }
        }
    }

    #[test]
    fn split_halves_reconstructs_input(items in proptest::collection::vec(any::<u16>(), 0..64)) {
        let (left, right) = split_halves(&items);
        prop_assert_eq!(left.len(), items.len().div_ceil(2));
        prop_assert_eq!(right.len(), items.len() / 2);
        prop_assert_eq!([left, right].concat(), items.clone());
        if items.len() >= 2 {
            prop_assert!(!left.is_empty() && !right.is_empty());
        }
    }

    #[test]
    fn toggle_twice_restores_membership(
        initial in proptest::collection::hash_set("[a-e]{1,3}", 0..6),
        name in "[a-e]{1,3}",
    ) {
        let mut selection = Selection::new();
        for picked in &initial {
            selection.toggle(picked);
        }
        let before: std::collections::HashSet<String> =
            selection.names().iter().cloned().collect();

        selection.toggle(&name);
        selection.toggle(&name);

        let after: std::collections::HashSet<String> =
            selection.names().iter().cloned().collect();
        prop_assert_eq!(before, after);
        prop_assert_eq!(selection.len(), initial.len());
    }
}

#[test]
fn species_chain_uses_cost_as_tie_break() {
    assert_eq!(
        comparators(SortColumn::Species, false),
        vec![
            Comparator::directed(SortKey::FirstSpecies, false),
            Comparator::ascend(SortKey::Cost),
        ]
    );
}
