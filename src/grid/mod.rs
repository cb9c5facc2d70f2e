mod month;
pub(crate) use self::month::MonthPage;
use self::month::DAYS_IN_WEEK;
use crate::cell::{
    rect_size, CellWidget, DateCell, DisplayContext, Renderable, FALLBACK_LOCALE,
};
use crate::day::Day;
use crate::theme::WEEKDAY_STYLE;
use chrono::Locale;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    text::Line,
    widgets::{StatefulWidget, Widget},
};
use std::rc::Rc;

static WEEKDAYS: [&str; DAYS_IN_WEEK] = ["Su", "Mo", "Tu", "We", "Th", "Fr", "Sa"];

fn columns(area: Rect) -> Rc<[Rect]> {
    Layout::horizontal([Constraint::Fill(1); DAYS_IN_WEEK]).split(area)
}

/// Cells that are reused from one render to the next.  The pool only ever
/// grows; cells past `active` are idle until a later month needs more rows.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct CellPool {
    /// Locale given to every cell the pool creates
    locale: Locale,
    cells: Vec<DateCell>,
    active: usize,
}

impl CellPool {
    pub(crate) fn new(locale: Locale) -> CellPool {
        CellPool {
            locale,
            cells: Vec::new(),
            active: 0,
        }
    }

    fn dequeue(&mut self, qty: usize) -> &mut [DateCell] {
        if self.cells.len() < qty {
            log::debug!("growing cell pool from {} to {qty} cells", self.cells.len());
            let locale = self.locale;
            self.cells.resize_with(qty, || DateCell::with_locale(locale));
        } else {
            log::trace!("reusing {qty} of {} pooled cells", self.cells.len());
        }
        self.active = qty;
        &mut self.cells[..qty]
    }

    pub(crate) fn visible(&self) -> &[DateCell] {
        &self.cells[..self.active]
    }

    /// The visible cell showing the selected day, if any
    pub(crate) fn selected(&self) -> Option<&DateCell> {
        self.visible()
            .iter()
            .find(|c| c.day().is_some_and(|d| d.is_selected))
    }
}

impl Default for CellPool {
    fn default() -> CellPool {
        CellPool::new(FALLBACK_LOCALE)
    }
}

/// Lays out a month of day slots as a seven-column grid, one row per week.
/// Empty slots are left blank and take no cell from the pool.
#[derive(Clone, Copy, Debug)]
pub(crate) struct DateGrid<'a> {
    days: &'a [Option<Day>],
    context: DisplayContext,
}

impl<'a> DateGrid<'a> {
    pub(crate) fn new(days: &'a [Option<Day>], context: DisplayContext) -> DateGrid<'a> {
        DateGrid { days, context }
    }
}

impl StatefulWidget for DateGrid<'_> {
    type State = CellPool;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut CellPool) {
        let week_qty = self.days.len().div_ceil(DAYS_IN_WEEK);
        let rows = Layout::vertical(vec![Constraint::Fill(1); week_qty]).split(area);
        let mut cells = state
            .dequeue(self.days.iter().flatten().count())
            .iter_mut();
        for (row, week) in rows.iter().zip(self.days.chunks(DAYS_IN_WEEK)) {
            for (rect, slot) in columns(*row).iter().zip(week) {
                let Some(day) = slot else {
                    continue;
                };
                let Some(cell) = cells.next() else {
                    return;
                };
                cell.layout(rect_size(*rect), self.context);
                cell.assign(day.clone());
                CellWidget(cell).render(*rect, buf);
            }
        }
    }
}

/// The row of weekday abbreviations above the grid
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct WeekdayHeader;

impl Widget for WeekdayHeader {
    fn render(self, area: Rect, buf: &mut Buffer) {
        for (rect, name) in columns(area).iter().zip(WEEKDAYS) {
            Line::styled(name, WEEKDAY_STYLE).centered().render(*rect, buf);
        }
    }
}
