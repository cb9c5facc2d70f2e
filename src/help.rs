use crate::keymap::{Binding, BINDINGS};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Rect},
    style::Style,
    text::Line,
    widgets::{Block, Clear, Row, Table, Widget},
};

const COLUMN_SPACING: u16 = 2;

/// A table of the picker's key bindings, drawn centered over the area it is
/// given (normally the date grid) and cut down to fit it
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct Help {
    bindings: &'static [Binding],
    style: Style,
}

impl Help {
    pub(crate) fn new(style: Style) -> Help {
        Help {
            bindings: BINDINGS,
            style,
        }
    }

    fn column_widths(&self) -> (u16, u16) {
        let widest = |f: fn(&Binding) -> usize| {
            self.bindings
                .iter()
                .map(f)
                .max()
                .and_then(|w| u16::try_from(w).ok())
                .unwrap_or(u16::MAX)
        };
        (
            widest(|b| b.key_names().len()),
            widest(|b| b.description.len()),
        )
    }

    /// Where the table goes within `area`, border included
    fn popup_area(&self, area: Rect) -> Rect {
        let (keys, descriptions) = self.column_widths();
        let width = keys
            .saturating_add(COLUMN_SPACING)
            .saturating_add(descriptions)
            .saturating_add(2)
            .min(area.width);
        let height = u16::try_from(self.bindings.len())
            .unwrap_or(u16::MAX)
            .saturating_add(2)
            .min(area.height);
        Rect {
            x: area.x + (area.width - width) / 2,
            y: area.y + (area.height - height) / 2,
            width,
            height,
        }
    }
}

impl Widget for Help {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let popup = self.popup_area(area);
        let (keys, _) = self.column_widths();
        let rows = self
            .bindings
            .iter()
            .map(|b| Row::new([b.key_names(), String::from(b.description)]));
        let table = Table::new(rows, [Constraint::Length(keys), Constraint::Fill(1)])
            .column_spacing(COLUMN_SPACING)
            .block(
                Block::bordered()
                    .title(Line::from(" Keys ").centered())
                    .title_bottom(Line::from(" any key to dismiss ").right_aligned()),
            )
            .style(self.style);
        Clear.render(popup, buf);
        table.render(popup, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::BASE_STYLE;

    fn row_text(buffer: &Buffer, y: u16) -> String {
        (buffer.area.x..buffer.area.right())
            .map(|x| buffer[(x, y)].symbol())
            .collect()
    }

    #[test]
    fn test_lists_every_binding() {
        let area = Rect::new(0, 0, 77, 18);
        let mut buffer = Buffer::empty(area);
        Help::new(BASE_STYLE).render(area, &mut buffer);
        let text = (0..area.height)
            .map(|y| row_text(&buffer, y))
            .collect::<Vec<_>>();
        assert!(text.iter().any(|line| line.contains(" Keys ")));
        assert!(text.iter().any(|line| line.contains("any key to dismiss")));
        for binding in BINDINGS {
            assert!(
                text.iter()
                    .any(|line| line.contains(&binding.key_names())
                        && line.contains(binding.description)),
                "{binding:?} not shown"
            );
        }
    }

    #[test]
    fn test_centered_in_area() {
        let help = Help::new(BASE_STYLE);
        let area = Rect::new(0, 2, 80, 21);
        let popup = help.popup_area(area);
        // "n, PAGE DOWN" + 2 + description + 2 border columns
        assert_eq!(popup.width, 12 + 2 + 39 + 2);
        assert_eq!(popup.height, 12);
        assert_eq!(popup.x, 12);
        assert_eq!(popup.y, 6);
    }

    #[test]
    fn test_clipped_to_small_area() {
        let help = Help::new(BASE_STYLE);
        let area = Rect::new(5, 5, 20, 6);
        assert_eq!(help.popup_area(area), area);
        let mut buffer = Buffer::empty(Rect::new(0, 0, 30, 12));
        help.render(area, &mut buffer);
        assert_eq!(buffer[(5, 5)].symbol(), "┌");
        assert_eq!(buffer[(5, 6)].symbol(), "│");
        assert_eq!(buffer[(24, 6)].symbol(), "│");
        assert_eq!(buffer[(4, 5)].symbol(), " ");
    }
}
