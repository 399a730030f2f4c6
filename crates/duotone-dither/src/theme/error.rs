//! Error type for theme name parsing.

use std::fmt;

use super::Theme;

/// Returned when a theme name is not in the table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseThemeError {
    /// The name that failed to parse
    pub name: String,
}

impl fmt::Display for ParseThemeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = Theme::ALL.iter().map(|t| t.name()).collect();
        write!(
            f,
            "unknown theme {:?} (expected one of: {})",
            self.name,
            names.join(", ")
        )
    }
}

impl std::error::Error for ParseThemeError {}
