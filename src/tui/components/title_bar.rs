//! # TitleBar Component
//!
//! Top status bar: app name, the latest status message, and key hints on the
//! right when the terminal is wide enough.
//!
//! ## Design Decisions
//!
//! ### Stateless Component
//!
//! TitleBar is purely presentational: it receives all data as props and has
//! no internal state.
//!
//! ```rust,ignore
//! let mut title_bar = TitleBar::new(app.status_message.clone());
//! title_bar.render(frame, title_area);
//! ```
//!
//! ### Narrow Terminals
//!
//! Hints are dropped first, then the short hint set is tried, so the status
//! message always stays visible. Widths are measured with `unicode-width`
//! because the hints contain arrows.

use crate::tui::component::Component;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use unicode_width::UnicodeWidthStr;

const FULL_HINTS: &str = "click/␣ pick · 1-4 sort · ←↑↓→ move · PgUp/PgDn team · q quit ";
const SHORT_HINTS: &str = "␣ pick · 1-4 sort · q quit ";

pub struct TitleBar {
    /// Status message (e.g., "Added Ogre (team size 1)")
    pub status_message: String,
}

impl TitleBar {
    pub fn new(status_message: String) -> Self {
        Self { status_message }
    }

    /// Left-hand text: app name plus status.
    fn title_text(&self) -> String {
        if self.status_message.is_empty() {
            " Roster".to_string()
        } else {
            format!(" Roster | {}", self.status_message)
        }
    }

    /// Pick the widest hint set that fits next to the title, if any.
    fn hints_for_width(&self, width: u16) -> Option<&'static str> {
        let title_width = self.title_text().width();
        [FULL_HINTS, SHORT_HINTS]
            .into_iter()
            .find(|hints| title_width + 1 + hints.width() <= usize::from(width))
    }
}

impl Component for TitleBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let title = self.title_text();
        let mut spans = vec![Span::styled(title.clone(), Style::default().fg(Color::White))];

        if let Some(hints) = self.hints_for_width(area.width) {
            let gap = usize::from(area.width) - title.width() - hints.width();
            spans.push(Span::raw(" ".repeat(gap)));
            spans.push(Span::styled(hints, Style::default().fg(Color::DarkGray)));
        }

        frame.render_widget(Line::from(spans), area);
    }
}
