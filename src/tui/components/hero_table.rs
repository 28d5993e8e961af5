//! # HeroTable Component
//!
//! One of the two side-by-side hero tables. Each table shows a contiguous
//! slice of the sorted catalog; both share the same header, sort state and
//! team.
//!
//! Follows the persistent state + transient wrapper pattern:
//! - the `TableState` (scroll offset + cursor row) lives in `TuiState`
//! - `HeroTable` is created each frame with borrowed rows and state
//!
//! ```text
//! ┌ Heroes 1-12 ───────────────────────────────┐
//! │Name          Species     Class       Cost ▲│
//! │Footman       Human       Knight      1     │  ← name colored by cost
//! │Bramble       Elf         Ranger      1     │  ← picked rows get SELECTED_BG
//! └────────────────────────────────────────────┘
//! ```

use ratatui::Frame;
use ratatui::layout::{Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Cell, HighlightSpacing, Row, Table, TableState};

use crate::core::sort::{SortColumn, SortState};
use crate::core::view::HeroRow;
use crate::tui::component::Component;
use crate::tui::theme::{SELECTED_BG, cost_color, feature_color};

/// Column widths, in `SortColumn::ALL` order.
pub const COLUMN_WIDTHS: [Constraint; 4] = [
    Constraint::Fill(4),
    Constraint::Fill(3),
    Constraint::Fill(3),
    Constraint::Length(6),
];
pub const COLUMN_SPACING: u16 = 1;

/// What a click inside a table landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableHit {
    Header(SortColumn),
    /// Row index within this table's slice.
    Row(usize),
}

pub struct HeroTable<'a> {
    rows: &'a [HeroRow<'a>],
    sort: SortState,
    /// Cursor row within this table, if the cursor is here.
    cursor: Option<usize>,
    /// Index of the first row in the full sorted order (for the title).
    first_index: usize,
    state: &'a mut TableState,
}

impl<'a> HeroTable<'a> {
    pub fn new(
        rows: &'a [HeroRow<'a>],
        sort: SortState,
        cursor: Option<usize>,
        first_index: usize,
        state: &'a mut TableState,
    ) -> Self {
        Self {
            rows,
            sort,
            cursor,
            first_index,
            state,
        }
    }

    fn title(&self) -> String {
        if self.rows.is_empty() {
            " Heroes ".to_string()
        } else {
            format!(
                " Heroes {}-{} ",
                self.first_index + 1,
                self.first_index + self.rows.len()
            )
        }
    }
}

impl Component for HeroTable<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let header = Row::new(
            SortColumn::ALL
                .iter()
                .map(|column| header_cell(*column, self.sort)),
        )
        .style(Style::default().fg(Color::White).add_modifier(Modifier::BOLD));

        let rows = self.rows.iter().map(hero_row);

        let table = Table::new(rows, COLUMN_WIDTHS)
            .header(header)
            .column_spacing(COLUMN_SPACING)
            .flex(Flex::Start)
            .block(
                Block::bordered()
                    .title(self.title())
                    .border_style(Style::default().fg(Color::DarkGray)),
            )
            .row_highlight_style(Style::default().add_modifier(Modifier::REVERSED))
            .highlight_spacing(HighlightSpacing::Never);

        self.state.select(self.cursor);
        frame.render_stateful_widget(table, area, self.state);
    }
}

fn header_cell(column: SortColumn, sort: SortState) -> Cell<'static> {
    if sort.column == column {
        Cell::from(format!("{} {}", column.label(), sort.indicator()))
    } else {
        Cell::from(column.label())
    }
}

fn hero_row<'a>(row: &HeroRow<'a>) -> Row<'a> {
    let hero = row.hero;

    let mut species: Vec<Span<'a>> = Vec::with_capacity(hero.species.len() * 2);
    for (i, tag) in hero.species.iter().enumerate() {
        if i > 0 {
            species.push(Span::raw(" "));
        }
        species.push(feature_span(tag));
    }

    let cells = vec![
        Cell::from(Span::styled(
            hero.name.as_str(),
            Style::default()
                .fg(cost_color(hero.cost))
                .add_modifier(Modifier::BOLD),
        )),
        Cell::from(Line::from(species)),
        Cell::from(feature_span(&hero.class_name)),
        Cell::from(Span::styled(
            hero.cost.to_string(),
            Style::default().fg(Color::White),
        )),
    ];

    let style = if row.selected {
        Style::default().bg(SELECTED_BG)
    } else {
        Style::default()
    };
    Row::new(cells).style(style)
}

fn feature_span(tag: &str) -> Span<'_> {
    Span::styled(tag, Style::default().fg(feature_color(tag)))
}

/// Map a screen position inside a table's `area` to a header column or row.
///
/// `offset` is the table's scroll offset and `len` its row count.
pub fn hit_test_table(area: Rect, x: u16, y: u16, offset: usize, len: usize) -> Option<TableHit> {
    let inner = Block::bordered().inner(area);
    if x < inner.x || x >= inner.right() || y < inner.y || y >= inner.bottom() {
        return None;
    }

    if y == inner.y {
        let columns = Layout::horizontal(COLUMN_WIDTHS)
            .flex(Flex::Start)
            .spacing(COLUMN_SPACING)
            .split(inner);
        return columns
            .iter()
            .position(|rect| x >= rect.x && x < rect.right())
            .map(|i| TableHit::Header(SortColumn::ALL[i]));
    }

    let index = offset + usize::from(y - inner.y - 1);
    (index < len).then_some(TableHit::Row(index))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::hero;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_render_shows_header_and_indicator() {
        let ogre = hero("Ogre", &["Brute"], "Tank", 3);
        let rows = [HeroRow { hero: &ogre, selected: true }];
        let mut state = TableState::default();

        let mut terminal = Terminal::new(TestBackend::new(60, 6)).unwrap();
        terminal
            .draw(|f| {
                let area = f.area();
                HeroTable::new(&rows, SortState::default(), Some(0), 0, &mut state).render(f, area);
            })
            .unwrap();

        let text = buffer_text(&terminal);
        assert!(text.contains("Heroes 1-1"));
        assert!(text.contains("Species"));
        assert!(text.contains("Cost ▲"));
        assert!(text.contains("Ogre"));
        assert!(text.contains("Brute"));
        assert_eq!(state.selected(), Some(0));
    }

    #[test]
    fn test_selected_row_background() {
        let ogre = hero("Ogre", &["Brute"], "Tank", 3);
        let rows = [HeroRow { hero: &ogre, selected: true }];
        let mut state = TableState::default();

        let mut terminal = Terminal::new(TestBackend::new(60, 6)).unwrap();
        terminal
            .draw(|f| {
                let area = f.area();
                HeroTable::new(&rows, SortState::default(), None, 0, &mut state).render(f, area);
            })
            .unwrap();

        // First body row sits below the top border and the header
        let cell = &terminal.backend().buffer()[(1, 2)];
        assert_eq!(cell.symbol(), "O");
        assert_eq!(cell.bg, SELECTED_BG);
    }

    #[test]
    fn test_hit_test_header_and_rows() {
        let area = Rect::new(0, 0, 60, 10);

        assert_eq!(
            hit_test_table(area, 1, 1, 0, 5),
            Some(TableHit::Header(SortColumn::Name))
        );
        assert_eq!(
            hit_test_table(area, 57, 1, 0, 5),
            Some(TableHit::Header(SortColumn::Cost))
        );
        assert_eq!(hit_test_table(area, 5, 2, 0, 5), Some(TableHit::Row(0)));
        assert_eq!(hit_test_table(area, 5, 4, 3, 10), Some(TableHit::Row(5)));
    }

    #[test]
    fn test_hit_test_outside_rows() {
        let area = Rect::new(0, 0, 60, 10);
        // Border
        assert_eq!(hit_test_table(area, 0, 3, 0, 5), None);
        // Below last row
        assert_eq!(hit_test_table(area, 5, 8, 0, 2), None);
        // Outside the table entirely
        assert_eq!(hit_test_table(area, 70, 3, 0, 5), None);
    }
}
