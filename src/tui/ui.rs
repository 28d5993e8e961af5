use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};

use crate::core::sort::SortColumn;
use crate::core::state::App;
use crate::core::view::{RenderModel, view};
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::hero_table::hit_test_table;
use crate::tui::components::{HeroTable, TableHit, TeamSummary, TitleBar};

/// Screen regions, shared by drawing and hit testing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenLayout {
    pub title: Rect,
    pub left: Rect,
    pub right: Rect,
    pub summary: Rect,
}

pub fn screen_layout(area: Rect) -> ScreenLayout {
    use Constraint::{Length, Min, Ratio};
    let [title, main] = Layout::vertical([Length(1), Min(0)]).areas(area);
    let [left, right, summary] =
        Layout::horizontal([Ratio(1, 3), Ratio(1, 3), Ratio(1, 3)]).areas(main);
    ScreenLayout {
        title,
        left,
        right,
        summary,
    }
}

/// What a mouse click landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hit {
    Header(SortColumn),
    /// Index in the full sorted order.
    Row(usize),
}

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState) {
    let model = view(app);
    let layout = screen_layout(frame.area());

    TitleBar::new(app.status_message.clone()).render(frame, layout.title);

    let left_len = model.left.len();
    let (left_cursor, right_cursor) = if tui.cursor < left_len {
        (Some(tui.cursor), None)
    } else {
        (None, Some(tui.cursor - left_len))
    };
    let right_cursor = right_cursor.filter(|i| *i < model.right.len());

    HeroTable::new(&model.left, model.sort, left_cursor, 0, &mut tui.left_table)
        .render(frame, layout.left);
    HeroTable::new(
        &model.right,
        model.sort,
        right_cursor,
        left_len,
        &mut tui.right_table,
    )
    .render(frame, layout.right);

    TeamSummary::new(model.team_size, &model.features, &mut tui.summary)
        .render(frame, layout.summary);
}

/// Map a click at (`x`, `y`) on a frame of size `frame_area` to a header or row.
pub fn hit_test(
    frame_area: Rect,
    x: u16,
    y: u16,
    model: &RenderModel<'_>,
    tui: &TuiState,
) -> Option<Hit> {
    let layout = screen_layout(frame_area);
    let left_len = model.left.len();

    let hit = hit_test_table(layout.left, x, y, tui.left_table.offset(), left_len)
        .map(|hit| (hit, 0))
        .or_else(|| {
            hit_test_table(
                layout.right,
                x,
                y,
                tui.right_table.offset(),
                model.right.len(),
            )
            .map(|hit| (hit, left_len))
        })?;

    Some(match hit {
        (TableHit::Header(column), _) => Hit::Header(column),
        (TableHit::Row(index), base) => Hit::Row(base + index),
    })
}
