use time::Date;

/// The data shown by a single cell of the date picker
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub(crate) struct Day {
    /// Text of the day-of-month label
    pub(crate) number: String,
    pub(crate) date: Date,
    pub(crate) is_selected: bool,
    /// False for the leading & trailing days borrowed from adjacent months to
    /// fill out the first and last weeks
    pub(crate) is_within_displayed_month: bool,
}

impl Day {
    pub(crate) fn new(date: Date, is_selected: bool, is_within_displayed_month: bool) -> Day {
        Day {
            number: date.day().to_string(),
            date,
            is_selected,
            is_within_displayed_month,
        }
    }
}
