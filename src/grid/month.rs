use crate::day::Day;
use std::iter::successors;
use thiserror::Error;
use time::{Date, Month, Weekday};

pub(crate) const DAYS_IN_WEEK: usize = 7;

pub(crate) trait WeekdayExt {
    fn index0(&self) -> usize;
}

impl WeekdayExt for Weekday {
    fn index0(&self) -> usize {
        self.number_days_from_sunday().into()
    }
}

/// The month currently displayed by the picker
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub(crate) struct MonthPage {
    first: Date,
}

impl MonthPage {
    pub(crate) fn containing(date: Date) -> MonthPage {
        let first = iter_days_before(date)
            .take(usize::from(date.day() - 1))
            .last()
            .unwrap_or(date);
        MonthPage { first }
    }

    pub(crate) fn year(self) -> i32 {
        self.first.year()
    }

    pub(crate) fn month(self) -> Month {
        self.first.month()
    }

    pub(crate) fn contains(self, date: Date) -> bool {
        (date.year(), date.month()) == (self.year(), self.month())
    }

    fn last_day(self) -> Date {
        iter_days_after(self.first)
            .take_while(|d| d.month() == self.month())
            .last()
            .unwrap_or(self.first)
    }

    /// The slots to show for this month: whole Sunday-to-Saturday weeks, with
    /// the first and last weeks padded out by days of the adjacent months.
    /// A padding slot that would fall outside the range of representable
    /// dates is `None`, so every day keeps its weekday's column.
    pub(crate) fn days(self, selected: Date) -> Vec<Option<Day>> {
        let last = self.last_day();
        let lead = self.first.weekday().index0();
        let trail = DAYS_IN_WEEK - 1 - last.weekday().index0();
        let mut before = iter_days_before(self.first)
            .take(lead)
            .map(Some)
            .collect::<Vec<_>>();
        before.resize(lead, None);
        before.reverse();
        let mut after = iter_days_after(last)
            .take(trail)
            .map(Some)
            .collect::<Vec<_>>();
        after.resize(trail, None);
        let month = successors(Some(self.first), |&d| d.next_day())
            .take_while(|&d| d <= last)
            .map(Some);
        before
            .into_iter()
            .chain(month)
            .chain(after)
            .map(|slot| slot.map(|d| Day::new(d, d == selected, self.contains(d))))
            .collect()
    }

    pub(crate) fn next(self) -> Result<MonthPage, OutOfTimeError> {
        self.last_day()
            .next_day()
            .map(|first| MonthPage { first })
            .ok_or(OutOfTimeError)
    }

    pub(crate) fn previous(self) -> Result<MonthPage, OutOfTimeError> {
        self.first
            .previous_day()
            .map(MonthPage::containing)
            .ok_or(OutOfTimeError)
    }
}

#[derive(Copy, Clone, Debug, Eq, Error, PartialEq)]
#[error("reached the end of time")]
pub(crate) struct OutOfTimeError;

fn iter_days_after(date: Date) -> impl Iterator<Item = Date> {
    successors(Some(date), |&d| d.next_day()).skip(1)
}

fn iter_days_before(date: Date) -> impl Iterator<Item = Date> {
    successors(Some(date), |&d| d.previous_day()).skip(1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::date;

    #[test]
    fn test_containing() {
        let page = MonthPage::containing(date!(2025 - 04 - 07));
        assert_eq!(page.year(), 2025);
        assert_eq!(page.month(), Month::April);
        assert!(page.contains(date!(2025 - 04 - 30)));
        assert!(!page.contains(date!(2025 - 05 - 01)));
        assert!(!page.contains(date!(2024 - 04 - 07)));
    }

    fn present(days: &[Option<Day>]) -> Vec<&Day> {
        days.iter().flatten().collect()
    }

    #[test]
    fn test_days_pads_weeks() {
        let slots = MonthPage::containing(date!(2025 - 04 - 07)).days(date!(2025 - 04 - 07));
        assert_eq!(slots.len(), 35);
        let days = present(&slots);
        assert_eq!(days.len(), 35);
        assert_eq!(days[0].date, date!(2025 - 03 - 30));
        assert_eq!(days[0].number, "30");
        assert!(!days[0].is_within_displayed_month);
        assert!(!days[1].is_within_displayed_month);
        assert_eq!(days[2].date, date!(2025 - 04 - 01));
        assert!(days[2].is_within_displayed_month);
        assert_eq!(days[31].date, date!(2025 - 04 - 30));
        assert!(days[31].is_within_displayed_month);
        assert_eq!(days[34].date, date!(2025 - 05 - 03));
        assert!(!days[34].is_within_displayed_month);
        let selected = days.iter().filter(|d| d.is_selected).collect::<Vec<_>>();
        assert_eq!(selected.len(), 1);
        assert_eq!(selected[0].date, date!(2025 - 04 - 07));
        assert_eq!(days[0].date.weekday(), Weekday::Sunday);
        assert_eq!(days[34].date.weekday(), Weekday::Saturday);
    }

    #[test]
    fn test_days_six_weeks() {
        let slots = MonthPage::containing(date!(2025 - 03 - 15)).days(date!(2025 - 04 - 07));
        assert_eq!(slots.len(), 42);
        let days = present(&slots);
        assert_eq!(days.len(), 42);
        assert_eq!(days[0].date, date!(2025 - 02 - 23));
        assert_eq!(days[41].date, date!(2025 - 04 - 05));
        assert!(days.iter().all(|d| !d.is_selected));
    }

    #[test]
    fn test_days_selection_in_padding() {
        let slots = MonthPage::containing(date!(2025 - 02 - 10)).days(date!(2025 - 03 - 01));
        assert_eq!(slots.len(), 35);
        let last = slots[34].as_ref().unwrap();
        assert_eq!(last.date, date!(2025 - 03 - 01));
        assert!(last.is_selected);
        assert!(!last.is_within_displayed_month);
    }

    #[test]
    fn test_days_at_end_of_time() {
        let slots = MonthPage::containing(Date::MAX).days(Date::MAX);
        assert_eq!(slots.len(), 35);
        assert_eq!(slots[0].as_ref().map(|d| d.date), Some(date!(9999 - 11 - 28)));
        assert_eq!(slots[33].as_ref().map(|d| d.date), Some(Date::MAX));
        assert_eq!(slots[34], None);
        assert_eq!(present(&slots).len(), 34);
    }

    #[test]
    fn test_days_at_start_of_time() {
        let slots = MonthPage::containing(Date::MIN).days(Date::MIN);
        assert_eq!(Date::MIN.weekday(), Weekday::Monday);
        assert_eq!(slots.len(), 35);
        assert_eq!(slots[0], None);
        let first = slots[1].as_ref().unwrap();
        assert_eq!(first.date, Date::MIN);
        assert!(first.is_selected);
        for (i, slot) in slots.iter().enumerate() {
            if let Some(day) = slot {
                assert_eq!(i % DAYS_IN_WEEK, day.date.weekday().index0(), "{}", day.date);
            }
        }
    }

    #[test]
    fn test_next_previous() {
        let page = MonthPage::containing(date!(2024 - 12 - 25));
        let next = page.next().unwrap();
        assert_eq!((next.year(), next.month()), (2025, Month::January));
        let back = next.previous().unwrap();
        assert_eq!(back, page);
        let feb = MonthPage::containing(date!(2024 - 01 - 31)).next().unwrap();
        assert_eq!(feb.month(), Month::February);
    }

    #[test]
    fn test_out_of_time() {
        assert_eq!(MonthPage::containing(Date::MAX).next(), Err(OutOfTimeError));
        assert_eq!(MonthPage::containing(Date::MIN).previous(), Err(OutOfTimeError));
    }
}
