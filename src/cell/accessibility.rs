use chrono::{Locale, NaiveDate};
use std::fmt;
use time::Date;

/// "Monday, April 7", with the names in the cell's locale
const LONG_DATE_FMT: &str = "%A, %B %-d";

/// Used when the environment names no locale, or one we don't know
pub(crate) const FALLBACK_LOCALE: Locale = Locale::en_US;

/// Environment variables consulted for the date locale, highest priority
/// first
const LOCALE_VARS: [&str; 3] = ["LC_ALL", "LC_TIME", "LANG"];

pub(crate) const SELECT_HINT: &str = "Tap to select";

/// What assistive technology is told about a cell
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub(crate) struct Accessibility {
    pub(crate) label: Option<String>,
    pub(crate) traits: Traits,
    pub(crate) hint: Option<&'static str>,
}

impl Accessibility {
    pub(crate) fn for_button() -> Accessibility {
        Accessibility {
            label: None,
            traits: Traits {
                button: true,
                selected: false,
            },
            hint: None,
        }
    }

    /// The spoken form of the attributes, e.g. "Monday, April 7 (button,
    /// selected)"
    pub(crate) fn announcement(&self) -> String {
        let mut s = self.label.clone().unwrap_or_default();
        if !self.traits.is_empty() {
            if !s.is_empty() {
                s.push(' ');
            }
            s.push('(');
            s.push_str(&self.traits.to_string());
            s.push(')');
        }
        if let Some(hint) = self.hint {
            s.push_str(" - ");
            s.push_str(hint);
        }
        s
    }
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub(crate) struct Traits {
    pub(crate) button: bool,
    pub(crate) selected: bool,
}

impl Traits {
    pub(crate) fn is_empty(self) -> bool {
        !self.button && !self.selected
    }
}

impl fmt::Display for Traits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (on, name) in [(self.button, "button"), (self.selected, "selected")] {
            if on {
                if !std::mem::replace(&mut first, false) {
                    write!(f, ", ")?;
                }
                write!(f, "{name}")?;
            }
        }
        Ok(())
    }
}

/// Formats `date` the way it is read aloud for a day cell, with weekday &
/// month names in `locale`
pub(crate) fn long_date_label(date: Date, locale: Locale) -> Option<String> {
    let Some(naive) = NaiveDate::from_ymd_opt(
        date.year(),
        u32::from(u8::from(date.month())),
        u32::from(date.day()),
    ) else {
        log::warn!("could not format accessibility label for {date}");
        return None;
    };
    Some(naive.format_localized(LONG_DATE_FMT, locale).to_string())
}

/// The locale named by the first of `LC_ALL`, `LC_TIME` & `LANG` that is set
/// and non-empty, or [`FALLBACK_LOCALE`]
pub(crate) fn locale_from_env() -> Locale {
    let Some((var, value)) = LOCALE_VARS.iter().find_map(|&var| {
        std::env::var(var)
            .ok()
            .filter(|v| !v.is_empty())
            .map(|v| (var, v))
    }) else {
        return FALLBACK_LOCALE;
    };
    match parse_locale(&value) {
        Some(locale) => {
            log::debug!("using date locale {locale:?} from {var}={value:?}");
            locale
        }
        None => {
            log::debug!("{var}={value:?} is not a known date locale; using {FALLBACK_LOCALE:?}");
            FALLBACK_LOCALE
        }
    }
}

/// Parse a POSIX locale name like "de_DE.UTF-8" or "sr_RS@latin".  The "C"
/// and "POSIX" locales map to [`FALLBACK_LOCALE`].
fn parse_locale(name: &str) -> Option<Locale> {
    let (base, modifier) = match name.split_once('@') {
        Some((base, modifier)) => (base, Some(modifier)),
        None => (name, None),
    };
    let base = base.split_once('.').map_or(base, |(b, _)| b);
    if base == "C" || base == "POSIX" {
        return Some(FALLBACK_LOCALE);
    }
    modifier
        .and_then(|m| Locale::try_from(format!("{base}@{m}").as_str()).ok())
        .or_else(|| Locale::try_from(base).ok())
}
