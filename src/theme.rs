use crate::cell::ColorRole;
use ratatui::style::{Color, Modifier, Style};

pub(crate) const BASE_STYLE: Style = Style::new().fg(Color::White).bg(Color::Black);

pub(crate) const MONTH_STYLE: Style = BASE_STYLE.add_modifier(Modifier::BOLD);

pub(crate) const WEEKDAY_STYLE: Style = BASE_STYLE.fg(Color::Gray);

pub(crate) const STATUS_STYLE: Style = BASE_STYLE.fg(Color::Gray);

/// Day numbers are drawn heavier than the surrounding text
pub(crate) const DAY_LABEL_MODIFIER: Modifier = Modifier::BOLD;

pub(crate) const fn role_color(role: ColorRole) -> Color {
    match role {
        ColorRole::Primary => Color::White,
        ColorRole::Secondary => Color::DarkGray,
        ColorRole::Accent => Color::LightRed,
        ColorRole::Inverse => Color::Black,
        ColorRole::SelectionBackground => Color::Red,
    }
}
