//! The 8-action menu

/// One menu selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    Load,
    ListAll,
    SearchByDirection,
    SearchCombined,
    Sort,
    Add,
    Save,
    Exit,
}

impl MenuAction {
    /// Maps a menu number to an action. Out-of-range numbers are `None`
    /// and the caller re-prompts; an invalid selection is never fatal.
    pub fn from_choice(choice: i64) -> Option<Self> {
        match choice {
            1 => Some(MenuAction::Load),
            2 => Some(MenuAction::ListAll),
            3 => Some(MenuAction::SearchByDirection),
            4 => Some(MenuAction::SearchCombined),
            5 => Some(MenuAction::Sort),
            6 => Some(MenuAction::Add),
            7 => Some(MenuAction::Save),
            8 => Some(MenuAction::Exit),
            _ => None,
        }
    }
}

/// Menu text shown before each selection.
pub const MENU: &str = "\n--- MENU ---\n\
                        1. Load from file\n\
                        2. List records\n\
                        3. Search by direction\n\
                        4. Combined search\n\
                        5. Sort\n\
                        6. Add record\n\
                        7. Save to file\n\
                        8. Exit\n\
                        Choice (1-8): ";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_eight_actions_mapped() {
        assert_eq!(MenuAction::from_choice(1), Some(MenuAction::Load));
        assert_eq!(MenuAction::from_choice(2), Some(MenuAction::ListAll));
        assert_eq!(
            MenuAction::from_choice(3),
            Some(MenuAction::SearchByDirection)
        );
        assert_eq!(MenuAction::from_choice(4), Some(MenuAction::SearchCombined));
        assert_eq!(MenuAction::from_choice(5), Some(MenuAction::Sort));
        assert_eq!(MenuAction::from_choice(6), Some(MenuAction::Add));
        assert_eq!(MenuAction::from_choice(7), Some(MenuAction::Save));
        assert_eq!(MenuAction::from_choice(8), Some(MenuAction::Exit));
    }

    #[test]
    fn test_out_of_range_is_none() {
        assert_eq!(MenuAction::from_choice(0), None);
        assert_eq!(MenuAction::from_choice(9), None);
        assert_eq!(MenuAction::from_choice(-1), None);
    }
}
