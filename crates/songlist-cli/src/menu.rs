/// Lines printed before every menu prompt.
pub const MENU: [&str; 5] = [
    "Menu:",
    "D - Display songs",
    "A - Add new song",
    "C - Complete a song",
    "Q - Quit",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Display,
    Add,
    Complete,
    Quit,
    Unknown,
}

impl MenuChoice {
    /// Parse a menu answer, ignoring surrounding whitespace and case.
    pub fn parse(input: &str) -> Self {
        match input.trim().to_lowercase().as_str() {
            "d" => Self::Display,
            "a" => Self::Add,
            "c" => Self::Complete,
            "q" => Self::Quit,
            _ => Self::Unknown,
        }
    }
}
