use ratatui::Frame;
use ratatui::layout::Rect;

/// Something that draws itself into one region of the screen.
///
/// Data comes in through constructor arguments. Persistent widget state
/// (`TableState`, `ScrollViewState`) is borrowed from `TuiState`, which is
/// why `render` takes `&mut self`: ratatui updates offsets while rendering.
pub trait Component {
    fn render(&mut self, frame: &mut Frame, area: Rect);
}
