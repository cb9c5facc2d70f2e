use super::accessibility::SELECT_HINT;
use super::geometry::DisplayContext;
use crate::day::Day;

/// Semantic colors used by a cell.  Concrete colors are chosen by whatever
/// draws the cell.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub(crate) enum ColorRole {
    /// Ordinary text
    #[default]
    Primary,
    /// Dimmed text for days outside the displayed month
    Secondary,
    /// Selection shown through the text alone
    Accent,
    /// Text drawn on top of the selection background
    Inverse,
    /// Fill of the selection circle
    SelectionBackground,
}

/// Everything about a cell's appearance that depends on its day's selection
/// state
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct CellStyle {
    pub(crate) label_color: ColorRole,
    pub(crate) show_selection_background: bool,
    pub(crate) selected: bool,
    pub(crate) hint: Option<&'static str>,
}

impl CellStyle {
    pub(crate) fn derive(day: &Day, context: &DisplayContext) -> CellStyle {
        if day.is_selected {
            let small = context.is_small_layout();
            CellStyle {
                label_color: if small {
                    ColorRole::Accent
                } else {
                    ColorRole::Inverse
                },
                show_selection_background: !small,
                selected: true,
                hint: None,
            }
        } else {
            CellStyle {
                label_color: if day.is_within_displayed_month {
                    ColorRole::Primary
                } else {
                    ColorRole::Secondary
                },
                show_selection_background: false,
                selected: false,
                hint: Some(SELECT_HINT),
            }
        }
    }
}
