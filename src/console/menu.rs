//! Main menu choices

use std::str::FromStr;

use crate::error::AppError;

/// One entry of the main menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    List,
    Search,
    Borrow,
    Return,
    Summary,
    SaveAndExit,
}

impl MenuChoice {
    /// Menu entries in display order
    pub const ALL: [MenuChoice; 6] = [
        MenuChoice::List,
        MenuChoice::Search,
        MenuChoice::Borrow,
        MenuChoice::Return,
        MenuChoice::Summary,
        MenuChoice::SaveAndExit,
    ];

    /// Number the operator types to pick this entry
    pub fn key(&self) -> u8 {
        match self {
            MenuChoice::List => 1,
            MenuChoice::Search => 2,
            MenuChoice::Borrow => 3,
            MenuChoice::Return => 4,
            MenuChoice::Summary => 5,
            MenuChoice::SaveAndExit => 6,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            MenuChoice::List => "List all books",
            MenuChoice::Search => "Search books",
            MenuChoice::Borrow => "Borrow a book",
            MenuChoice::Return => "Return a book",
            MenuChoice::Summary => "Collection summary",
            MenuChoice::SaveAndExit => "Save and exit",
        }
    }
}

impl FromStr for MenuChoice {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        MenuChoice::ALL
            .into_iter()
            .find(|choice| trimmed == choice.key().to_string())
            .ok_or_else(|| {
                AppError::InvalidInput(format!("unrecognized menu choice: {:?}", trimmed))
            })
    }
}
