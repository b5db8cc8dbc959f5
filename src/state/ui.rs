#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

use crate::state::session::Role;

/// Presentation theme, applied via the `data-theme` attribute on the
/// document element.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Value written to the `data-theme` attribute and to storage.
    pub fn as_attr(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Cosmetic theme shown while a role is picked on the auth forms:
    /// admin gets the dark look.
    pub fn for_role(role: Role) -> Self {
        match role {
            Role::User => Self::Light,
            Role::Admin => Self::Dark,
        }
    }
}

/// UI chrome state.
#[derive(Clone, Debug, Default)]
pub struct UiState {
    pub theme: Theme,
}
