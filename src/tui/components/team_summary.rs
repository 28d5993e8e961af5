//! # TeamSummary Component
//!
//! Side panel with the team size and one entry per feature the team
//! carries, in the order the catalog returns them. Unlocked perks are listed
//! under their feature.
//!
//! ```text
//! Team size: 3
//!
//! Brute x 2  (next: 3)
//!   (2): Brutes shrug off the first stun each round.
//!
//! Tank x 1  (next: 2)
//! ```
//!
//! The panel scrolls (PageUp/PageDown, mouse wheel) when a large team
//! lists more features than fit.

use ratatui::Frame;
use ratatui::layout::{Rect, Size};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Wrap};
use tui_scrollview::{ScrollView, ScrollViewState, ScrollbarVisibility};

use crate::core::catalog::FeatureCount;
use crate::tui::component::Component;
use crate::tui::theme::feature_color;

pub struct TeamSummary<'a> {
    team_size: usize,
    features: &'a [FeatureCount],
    state: &'a mut ScrollViewState,
}

impl<'a> TeamSummary<'a> {
    pub fn new(team_size: usize, features: &'a [FeatureCount], state: &'a mut ScrollViewState) -> Self {
        Self {
            team_size,
            features,
            state,
        }
    }
}

impl Component for TeamSummary<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::bordered()
            .title(" Team ")
            .border_style(Style::default().fg(Color::DarkGray));
        let inner = block.inner(area);
        frame.render_widget(block, area);
        if inner.is_empty() {
            return;
        }

        // Leave a column for the scrollbar
        let content_width = inner.width.saturating_sub(1);
        let paragraph = Paragraph::new(summary_lines(self.team_size, self.features))
            .wrap(Wrap { trim: false });
        let height = paragraph.line_count(content_width) as u16;

        let mut scroll_view = ScrollView::new(Size::new(content_width, height))
            .vertical_scrollbar_visibility(ScrollbarVisibility::Automatic)
            .horizontal_scrollbar_visibility(ScrollbarVisibility::Never);
        scroll_view.render_widget(paragraph, Rect::new(0, 0, content_width, height));

        frame.render_stateful_widget(scroll_view, inner, self.state);
    }
}

pub fn summary_lines(team_size: usize, features: &[FeatureCount]) -> Vec<Line<'_>> {
    let mut lines = vec![
        Line::from(Span::styled(
            format!("Team size: {team_size}"),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        )),
        Line::default(),
    ];

    for entry in features {
        let mut heading = vec![
            Span::styled(
                entry.feature.as_str(),
                Style::default().fg(feature_color(&entry.feature)),
            ),
            Span::styled(format!(" x {}", entry.count), Style::default().fg(Color::White)),
        ];
        if let Some(next) = entry.next_required {
            heading.push(Span::styled(
                format!("  (next: {next})"),
                Style::default().fg(Color::DarkGray),
            ));
        }
        lines.push(Line::from(heading));

        for perk in &entry.active_perks {
            lines.push(Line::from(Span::styled(
                format!("  ({}): {}", perk.required_count, perk.description),
                Style::default().fg(Color::Gray),
            )));
        }
        lines.push(Line::default());
    }

    lines
}
