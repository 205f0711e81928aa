//! Main menu.

pub const MENU_TEXT: &str = "\n--- Car Dealership System Menu ---\n\
----------------------------------\n \
A - Show Available Cars\n \
R - Show Daily Report\n \
L - Load Cars from File\n \
W - Save Cars to File\n \
S - Sell a Car\n \
D - Add a New Car\n \
X - Exit\n\
----------------------------------\n";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuOption {
    ShowAvailable,
    DailyReport,
    Load,
    Save,
    Sell,
    Add,
    Exit,
    Invalid,
}

impl MenuOption {
    /// Case-insensitive; only the first non-blank character counts.
    pub fn parse(input: &str) -> Self {
        match input.trim_start().chars().next().map(|c| c.to_ascii_uppercase()) {
            Some('A') => MenuOption::ShowAvailable,
            Some('R') => MenuOption::DailyReport,
            Some('L') => MenuOption::Load,
            Some('W') => MenuOption::Save,
            Some('S') => MenuOption::Sell,
            Some('D') => MenuOption::Add,
            Some('X') => MenuOption::Exit,
            _ => MenuOption::Invalid,
        }
    }
}
