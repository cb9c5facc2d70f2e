use crossterm::event::KeyCode;

/// Something the user can ask the picker to do
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub(crate) enum Action {
    PreviousDay,
    NextDay,
    PreviousWeek,
    NextWeek,
    PreviousMonth,
    NextMonth,
    Today,
    CycleSizeClass,
    Help,
    Quit,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Binding {
    pub(crate) keys: &'static [KeyCode],
    pub(crate) action: Action,
    pub(crate) description: &'static str,
}

/// The picker's key bindings, in the order they are listed in the help
pub(crate) static BINDINGS: &[Binding] = &[
    Binding {
        keys: &[KeyCode::Char('h'), KeyCode::Left],
        action: Action::PreviousDay,
        description: "Select previous day",
    },
    Binding {
        keys: &[KeyCode::Char('l'), KeyCode::Right],
        action: Action::NextDay,
        description: "Select next day",
    },
    Binding {
        keys: &[KeyCode::Char('k'), KeyCode::Up],
        action: Action::PreviousWeek,
        description: "Select same day last week",
    },
    Binding {
        keys: &[KeyCode::Char('j'), KeyCode::Down],
        action: Action::NextWeek,
        description: "Select same day next week",
    },
    Binding {
        keys: &[KeyCode::Char('p'), KeyCode::PageUp],
        action: Action::PreviousMonth,
        description: "Show previous month",
    },
    Binding {
        keys: &[KeyCode::Char('n'), KeyCode::PageDown],
        action: Action::NextMonth,
        description: "Show next month",
    },
    Binding {
        keys: &[KeyCode::Char('0'), KeyCode::Home],
        action: Action::Today,
        description: "Select today",
    },
    Binding {
        keys: &[KeyCode::Char('c')],
        action: Action::CycleSizeClass,
        description: "Cycle size class (auto/compact/regular)",
    },
    Binding {
        keys: &[KeyCode::Char('?')],
        action: Action::Help,
        description: "Show this help",
    },
    Binding {
        keys: &[KeyCode::Char('q'), KeyCode::Esc],
        action: Action::Quit,
        description: "Quit",
    },
];

pub(crate) fn action_for(key: KeyCode) -> Option<Action> {
    BINDINGS
        .iter()
        .find(|b| b.keys.contains(&key))
        .map(|b| b.action)
}

impl Binding {
    /// The binding's keys as shown to the user, e.g. "p, PAGE UP"
    pub(crate) fn key_names(&self) -> String {
        self.keys
            .iter()
            .map(|&k| key_name(k))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

fn key_name(key: KeyCode) -> String {
    match key {
        KeyCode::Char(c) => c.to_string(),
        KeyCode::Left => String::from("LEFT"),
        KeyCode::Right => String::from("RIGHT"),
        KeyCode::Up => String::from("UP"),
        KeyCode::Down => String::from("DOWN"),
        KeyCode::PageUp => String::from("PAGE UP"),
        KeyCode::PageDown => String::from("PAGE DOWN"),
        KeyCode::Home => String::from("HOME"),
        KeyCode::Esc => String::from("ESC"),
        other => format!("{other:?}").to_uppercase(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_action_for() {
        assert_eq!(action_for(KeyCode::Left), Some(Action::PreviousDay));
        assert_eq!(action_for(KeyCode::Char('n')), Some(Action::NextMonth));
        assert_eq!(action_for(KeyCode::Esc), Some(Action::Quit));
        assert_eq!(action_for(KeyCode::Char('x')), None);
        assert_eq!(action_for(KeyCode::Char('L')), None);
    }

    #[test]
    fn test_no_key_bound_twice() {
        let mut seen = HashSet::new();
        for key in BINDINGS.iter().flat_map(|b| b.keys) {
            assert!(seen.insert(*key), "{key:?} is bound twice");
        }
    }

    #[test]
    fn test_key_names() {
        assert_eq!(BINDINGS.len(), 10);
        assert_eq!(BINDINGS[0].key_names(), "h, LEFT");
        assert_eq!(BINDINGS[5].key_names(), "n, PAGE DOWN");
        assert_eq!(BINDINGS[7].key_names(), "c");
    }
}
