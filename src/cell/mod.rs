mod accessibility;
mod geometry;
mod style;
mod widget;
pub(crate) use self::accessibility::{locale_from_env, Accessibility, FALLBACK_LOCALE};
pub(crate) use self::geometry::{Circle, DisplayContext, Size, SizeClass};
pub(crate) use self::style::ColorRole;
pub(crate) use self::widget::{rect_size, terminal_context, CellWidget};
use self::accessibility::long_date_label;
use self::style::CellStyle;
use crate::day::Day;
use chrono::Locale;

/// Something a grid can assign values to, lay out, and query for
/// accessibility
pub(crate) trait Renderable {
    type Value;

    fn assign(&mut self, value: Self::Value);

    fn layout(&mut self, bounds: Size, context: DisplayContext);

    fn accessibility(&self) -> &Accessibility;
}

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub(crate) struct Label {
    pub(crate) text: String,
    pub(crate) color: ColorRole,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub(crate) struct SelectionBackground {
    pub(crate) visible: bool,
    pub(crate) circle: Circle,
}

/// A recyclable date-picker cell.
///
/// Everything observable about a cell (label, selection background,
/// accessibility attributes) is recomputed from scratch from the current
/// `Day`, display context, and bounds whenever any of them changes, so a
/// reused cell never shows leftovers from an earlier day.  A cell that has
/// never been given a day is blank.
///
/// The accessibility label names the weekday & month in the cell's locale,
/// which is fixed when the cell is created.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct DateCell {
    locale: Locale,
    day: Option<Day>,
    context: DisplayContext,
    label: Label,
    background: SelectionBackground,
    accessibility: Accessibility,
}

impl DateCell {
    pub(crate) fn new() -> DateCell {
        DateCell::with_locale(FALLBACK_LOCALE)
    }

    pub(crate) fn with_locale(locale: Locale) -> DateCell {
        DateCell {
            locale,
            day: None,
            context: DisplayContext::default(),
            label: Label::default(),
            background: SelectionBackground::default(),
            accessibility: Accessibility::for_button(),
        }
    }

    pub(crate) fn set_day(&mut self, day: Day) {
        self.label.text.clone_from(&day.number);
        self.accessibility.label = long_date_label(day.date, self.locale);
        self.day = Some(day);
        self.update_selection_status();
    }

    pub(crate) fn day(&self) -> Option<&Day> {
        self.day.as_ref()
    }

    pub(crate) fn label(&self) -> &Label {
        &self.label
    }

    pub(crate) fn selection_background(&self) -> &SelectionBackground {
        &self.background
    }

    fn update_selection_status(&mut self) {
        let Some(day) = self.day.as_ref() else {
            return;
        };
        let style = CellStyle::derive(day, &self.context);
        self.accessibility.traits.selected = style.selected;
        self.accessibility.hint = style.hint;
        self.label.color = style.label_color;
        self.background.visible = style.show_selection_background;
    }
}

impl Default for DateCell {
    fn default() -> DateCell {
        DateCell::new()
    }
}

impl Renderable for DateCell {
    type Value = Day;

    fn assign(&mut self, value: Day) {
        self.set_day(value);
    }

    fn layout(&mut self, bounds: Size, context: DisplayContext) {
        log::trace!(
            "laying out cell {:?} at {}x{} ({})",
            self.label.text,
            bounds.width,
            bounds.height,
            context.size_class
        );
        self.context = context;
        self.background.circle = Circle::for_cell(bounds, context.size_class);
        // The small-layout test depends on the context, so the selection
        // style has to follow it.
        self.update_selection_status();
    }

    fn accessibility(&self) -> &Accessibility {
        &self.accessibility
    }
}
