//! Theme preference

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::Store;

/// Color theme options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Dark,
    Red,
    Blue,
    Green,
}

impl Theme {
    /// Every selectable theme, in display order.
    pub const ALL: [Self; 4] = [Self::Dark, Self::Red, Self::Blue, Self::Green];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Red => "red",
            Self::Blue => "blue",
            Self::Green => "green",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|theme| theme.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| {
                format!("unknown theme '{wanted}' (expected one of: dark, red, blue, green)")
            })
    }
}

/// Observable theme cell, defaulting to [`Theme::Dark`]
#[derive(Debug, Clone, Default)]
pub struct ThemeState {
    pub theme: Store<Theme>,
}

impl ThemeState {
    pub fn set_theme(&self, theme: Theme) {
        self.theme.set(theme);
    }

    pub fn current(&self) -> Theme {
        self.theme.get()
    }
}
