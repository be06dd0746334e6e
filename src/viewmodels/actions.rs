// ============================================================================
// UI ACTIONS - Acciones declaradas en el DOM con data-action
// ============================================================================

use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiAction {
    ToggleMobileMenu,
    CloseMobileMenu,
    ToggleUserDropdown,
    CloseUserDropdown,
    SignOut,
    SubmitLogin,
}

impl UiAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            UiAction::ToggleMobileMenu => "toggle-mobile-menu",
            UiAction::CloseMobileMenu => "close-mobile-menu",
            UiAction::ToggleUserDropdown => "toggle-user-dropdown",
            UiAction::CloseUserDropdown => "close-user-dropdown",
            UiAction::SignOut => "sign-out",
            UiAction::SubmitLogin => "submit-login",
        }
    }
}

impl fmt::Display for UiAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UiAction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "toggle-mobile-menu" => Ok(UiAction::ToggleMobileMenu),
            "close-mobile-menu" => Ok(UiAction::CloseMobileMenu),
            "toggle-user-dropdown" => Ok(UiAction::ToggleUserDropdown),
            "close-user-dropdown" => Ok(UiAction::CloseUserDropdown),
            "sign-out" => Ok(UiAction::SignOut),
            "submit-login" => Ok(UiAction::SubmitLogin),
            other => Err(format!("acción desconocida: {}", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn attribute_values_parse_back() {
        for action in [
            UiAction::ToggleMobileMenu,
            UiAction::CloseMobileMenu,
            UiAction::ToggleUserDropdown,
            UiAction::CloseUserDropdown,
            UiAction::SignOut,
            UiAction::SubmitLogin,
        ] {
            assert_eq!(action.as_str().parse::<UiAction>(), Ok(action));
        }
        assert!("open-chatbot".parse::<UiAction>().is_err());
    }
}
