//! # Render Model
//!
//! `view()` turns the current `App` into everything the screen needs:
//! the sorted catalog split over two tables, which rows are picked, and the
//! feature summary for the team. It reads state and never changes it, so the
//! same state always yields the same model.
//!
//! ```text
//! sorted catalog:  [h0 h1 h2 h3 h4]
//!                   └─left──┘└right┘     left gets ceil(n/2)
//! ```

use crate::core::catalog::{FeatureCount, HeroRecord};
use crate::core::sort::{SortState, sort_heroes};
use crate::core::state::App;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeroRow<'a> {
    pub hero: &'a HeroRecord,
    pub selected: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderModel<'a> {
    pub left: Vec<HeroRow<'a>>,
    pub right: Vec<HeroRow<'a>>,
    pub sort: SortState,
    pub team_size: usize,
    pub features: Vec<FeatureCount>,
}

impl<'a> RenderModel<'a> {
    /// Row at `index` in the full sorted order (left table first).
    pub fn row(&self, index: usize) -> Option<&HeroRow<'a>> {
        if index < self.left.len() {
            self.left.get(index)
        } else {
            self.right.get(index - self.left.len())
        }
    }

    pub fn len(&self) -> usize {
        self.left.len() + self.right.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Position of `name` in the full sorted order.
    pub fn position(&self, name: &str) -> Option<usize> {
        self.left
            .iter()
            .chain(self.right.iter())
            .position(|row| row.hero.name == name)
    }
}

/// Split into two contiguous halves; the first takes the extra element.
pub fn split_halves<T>(items: &[T]) -> (&[T], &[T]) {
    items.split_at(items.len().div_ceil(2))
}

pub fn view(app: &App) -> RenderModel<'_> {
    let rows: Vec<HeroRow<'_>> = sort_heroes(app.catalog.heroes(), app.sort)
        .into_iter()
        .map(|hero| HeroRow {
            hero,
            selected: app.is_picked(&hero.name),
        })
        .collect();
    let (left, right) = split_halves(&rows);

    RenderModel {
        left: left.to_vec(),
        right: right.to_vec(),
        sort: app.sort,
        team_size: app.selection.len(),
        features: app.catalog.count_features(app.selection.names()),
    }
}
