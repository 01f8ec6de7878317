/// What a menu entry does when chosen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    Search,
    ListAll,
    Exit,
}

/// One numbered line of the menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuEntry {
    pub key: i64,
    pub label: &'static str,
    pub action: MenuAction,
}

impl MenuEntry {
    pub const fn new(key: i64, label: &'static str, action: MenuAction) -> Self {
        Self { key, label, action }
    }
}

/// Default menu, in display order
pub const MAIN_MENU: [MenuEntry; 3] = [
    MenuEntry::new(1, "Find item", MenuAction::Search),
    MenuEntry::new(2, "Print all items", MenuAction::ListAll),
    MenuEntry::new(0, "Exit", MenuAction::Exit),
];

/// Result of interpreting one line typed at the menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Choice {
    Selected(MenuAction),
    /// A number that no entry uses
    OutOfRange,
    /// Not a number at all; silently ignored
    Ignored,
}

/// Interpret a menu input line against `menu`
pub fn parse_choice(menu: &[MenuEntry], line: &str) -> Choice {
    let line = line.trim_end_matches(['\n', '\r']);
    let Ok(key) = line.parse::<i64>() else {
        return Choice::Ignored;
    };

    menu.iter()
        .find(|entry| entry.key == key)
        .map(|entry| Choice::Selected(entry.action))
        .unwrap_or(Choice::OutOfRange)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_choice_selects_entry() {
        assert_eq!(parse_choice(&MAIN_MENU, "1\n"), Choice::Selected(MenuAction::Search));
        assert_eq!(parse_choice(&MAIN_MENU, "2"), Choice::Selected(MenuAction::ListAll));
        assert_eq!(parse_choice(&MAIN_MENU, "0\r\n"), Choice::Selected(MenuAction::Exit));
        assert_eq!(parse_choice(&MAIN_MENU, "+1"), Choice::Selected(MenuAction::Search));
    }

    #[test]
    fn test_parse_choice_out_of_range() {
        assert_eq!(parse_choice(&MAIN_MENU, "3"), Choice::OutOfRange);
        assert_eq!(parse_choice(&MAIN_MENU, "-1"), Choice::OutOfRange);
    }

    #[test]
    fn test_parse_choice_ignores_non_numbers() {
        assert_eq!(parse_choice(&MAIN_MENU, "find"), Choice::Ignored);
        assert_eq!(parse_choice(&MAIN_MENU, ""), Choice::Ignored);
        assert_eq!(parse_choice(&MAIN_MENU, " 1"), Choice::Ignored);
    }

    #[test]
    fn test_custom_menu() {
        let menu = [MenuEntry::new(9, "Quit", MenuAction::Exit)];
        assert_eq!(parse_choice(&menu, "9"), Choice::Selected(MenuAction::Exit));
        assert_eq!(parse_choice(&menu, "1"), Choice::OutOfRange);
    }
}
