use super::geometry::{DisplayContext, Point, Size, SizeClass};
use super::{ColorRole, DateCell};
use crate::theme::{role_color, DAY_LABEL_MODIFIER};
use ratatui::{buffer::Buffer, layout::Rect, style::Style, text::Line, widgets::Widget};

/// Nominal width of one terminal column, in points
const POINTS_PER_COLUMN: f64 = 8.0;

/// Nominal height of one terminal row, in points
const POINTS_PER_ROW: f64 = 16.0;

/// Screens narrower than this are treated as having a compact horizontal size
/// class
const REGULAR_MIN_WIDTH: f64 = 600.0;

pub(crate) fn rect_size(area: Rect) -> Size {
    Size::new(
        f64::from(area.width) * POINTS_PER_COLUMN,
        f64::from(area.height) * POINTS_PER_ROW,
    )
}

/// Derive the display context for a terminal whose full area is `screen`.
/// If `forced` is given, it is used as the size class instead of the one
/// implied by the terminal's width.
pub(crate) fn terminal_context(screen: Rect, forced: Option<SizeClass>) -> DisplayContext {
    let screen = rect_size(screen);
    let size_class = forced.unwrap_or(if screen.width < REGULAR_MIN_WIDTH {
        SizeClass::Compact
    } else {
        SizeClass::Regular
    });
    DisplayContext::new(size_class, screen)
}

/// Draws a laid-out [`DateCell`]
#[derive(Clone, Copy, Debug)]
pub(crate) struct CellWidget<'a>(pub(crate) &'a DateCell);

impl Widget for CellWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let background = self.0.selection_background();
        if background.visible && background.circle.diameter > 0.0 {
            // Fill every terminal cell whose center falls inside the circle
            let fill = Style::new().bg(role_color(ColorRole::SelectionBackground));
            for y in 0..area.height {
                for x in 0..area.width {
                    let center = Point {
                        x: (f64::from(x) + 0.5) * POINTS_PER_COLUMN,
                        y: (f64::from(y) + 0.5) * POINTS_PER_ROW,
                    };
                    if background.circle.contains(center) {
                        if let Some(c) = buf.cell_mut((area.x + x, area.y + y)) {
                            c.set_style(fill);
                        }
                    }
                }
            }
        }
        if area.height > 0 {
            let label = self.0.label();
            let row = Rect {
                y: area.y + area.height / 2,
                height: 1,
                ..area
            };
            Line::styled(
                label.text.as_str(),
                Style::new()
                    .fg(role_color(label.color))
                    .add_modifier(DAY_LABEL_MODIFIER),
            )
            .centered()
            .render(row, buf);
        }
    }
}
