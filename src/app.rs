use crate::cell::{terminal_context, DisplayContext, Renderable, SizeClass};
use crate::grid::{CellPool, DateGrid, MonthPage, WeekdayHeader};
use crate::help::Help;
use crate::keymap::{action_for, Action};
use crate::theme::{BASE_STYLE, MONTH_STYLE, STATUS_STYLE};
use chrono::Locale;
use crossterm::event::{read, KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    backend::Backend,
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    text::Line,
    widgets::{StatefulWidget, Widget},
    Terminal,
};
use std::io::{self, Write};
use time::{Date, Duration};

#[derive(Clone, Debug, PartialEq)]
pub(crate) struct App {
    today: Date,
    selected: Date,
    page: MonthPage,
    cells: CellPool,
    /// `None` means "derive from the terminal's width"
    size_class: Option<SizeClass>,
    state: AppState,
}

impl App {
    pub(crate) fn new(today: Date) -> App {
        App {
            today,
            selected: today,
            page: MonthPage::containing(today),
            cells: CellPool::default(),
            size_class: None,
            state: AppState::Picker,
        }
    }

    pub(crate) fn selected(mut self, date: Date) -> App {
        self.select(date);
        self
    }

    /// Name weekdays & months in `locale` in the cells' accessibility labels
    pub(crate) fn locale(mut self, locale: Locale) -> App {
        self.cells = CellPool::new(locale);
        self
    }

    pub(crate) fn size_class(mut self, size_class: Option<SizeClass>) -> App {
        self.size_class = size_class;
        self
    }

    pub(crate) fn run<B: Backend>(mut self, mut terminal: Terminal<B>) -> io::Result<()> {
        while !self.quitting() {
            self.draw(&mut terminal)?;
            self.handle_input()?;
        }
        Ok(())
    }

    fn draw<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        terminal.draw(|frame| frame.render_widget(self, frame.area()))?;
        Ok(())
    }

    fn handle_input(&mut self) -> io::Result<()> {
        let normal_modifiers = KeyModifiers::NONE | KeyModifiers::SHIFT;
        if let Some(KeyEvent {
            code, modifiers, ..
        }) = read()?.as_key_press_event()
        {
            if modifiers == KeyModifiers::CONTROL && code == KeyCode::Char('c') {
                self.state = AppState::Quitting;
            } else if !normal_modifiers.contains(modifiers) || !self.handle_key(code) {
                self.beep()?;
            }
        }
        // else: Redraw on resize, and we might as well redraw on other stuff
        // too
        Ok(())
    }

    // Returns `false` if the user pressed an invalid key or tried to move
    // past the end of time
    fn handle_key(&mut self, key: KeyCode) -> bool {
        match self.state {
            AppState::Picker => match action_for(key) {
                Some(action) => self.perform(action),
                None => false,
            },
            AppState::Helping => {
                self.state = AppState::Picker;
                true
            }
            AppState::Quitting => false,
        }
    }

    fn perform(&mut self, action: Action) -> bool {
        match action {
            Action::PreviousDay => self.move_selection(-1),
            Action::NextDay => self.move_selection(1),
            Action::PreviousWeek => self.move_selection(-7),
            Action::NextWeek => self.move_selection(7),
            Action::PreviousMonth => self.turn_page(MonthPage::previous),
            Action::NextMonth => self.turn_page(MonthPage::next),
            Action::Today => {
                self.select(self.today);
                true
            }
            Action::CycleSizeClass => {
                self.cycle_size_class();
                true
            }
            Action::Help => {
                self.state = AppState::Helping;
                true
            }
            Action::Quit => {
                self.state = AppState::Quitting;
                true
            }
        }
    }

    fn beep(&self) -> io::Result<()> {
        io::stdout().write_all(b"\x07")
    }

    fn quitting(&self) -> bool {
        self.state == AppState::Quitting
    }

    /// Select `date` and show the month containing it
    fn select(&mut self, date: Date) {
        self.selected = date;
        self.page = MonthPage::containing(date);
    }

    fn move_selection(&mut self, days: i64) -> bool {
        if let Some(date) = self.selected.checked_add(Duration::days(days)) {
            self.select(date);
            true
        } else {
            log::debug!("cannot move selection {days} days from {}", self.selected);
            false
        }
    }

    fn turn_page<F, E>(&mut self, turn: F) -> bool
    where
        F: FnOnce(MonthPage) -> Result<MonthPage, E>,
        E: std::fmt::Display,
    {
        match turn(self.page) {
            Ok(page) => {
                self.page = page;
                true
            }
            Err(e) => {
                log::debug!("cannot turn page from {} {}: {e}", self.page.month(), self.page.year());
                false
            }
        }
    }

    fn cycle_size_class(&mut self) {
        self.size_class = match self.size_class {
            None => Some(SizeClass::Compact),
            Some(SizeClass::Compact) => Some(SizeClass::Regular),
            Some(SizeClass::Regular) => None,
        };
        log::debug!("size class override is now {:?}", self.size_class);
    }

    fn describe_context(&self, context: &DisplayContext) -> String {
        let mut s = context.size_class.to_string();
        if self.size_class.is_none() {
            s.push_str(" (auto)");
        }
        if context.is_small_layout() {
            s.push_str(", small layout");
        }
        s
    }
}

impl Widget for &mut App {
    fn render(self, area: Rect, buf: &mut Buffer) {
        buf.set_style(area, BASE_STYLE);
        let context = terminal_context(area, self.size_class);
        let [title_area, header_area, grid_area, status_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Fill(1),
            Constraint::Length(1),
        ])
        .areas(area);
        Line::styled(
            format!("{} {}", self.page.month(), self.page.year()),
            MONTH_STYLE,
        )
        .centered()
        .render(title_area, buf);
        WeekdayHeader.render(header_area, buf);
        let days = self.page.days(self.selected);
        DateGrid::new(&days, context).render(grid_area, buf, &mut self.cells);
        // What a screen reader would say about the selected cell
        let readout = match self.cells.selected() {
            Some(cell) => cell.accessibility().announcement(),
            None => String::from("No selection in this month"),
        };
        Line::styled(readout, STATUS_STYLE).render(status_area, buf);
        Line::styled(self.describe_context(&context), STATUS_STYLE)
            .right_aligned()
            .render(status_area, buf);
        if self.state == AppState::Helping {
            Help::new(BASE_STYLE).render(grid_area, buf);
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum AppState {
    Picker,
    Helping,
    Quitting,
}
