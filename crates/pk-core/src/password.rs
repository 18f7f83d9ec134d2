//! Password show/hide toggle.
//!
//! Optional affordances (the show/hide icon pair) are resolved once when the
//! toggle is bound, instead of being probed on every click.

use serde::{Deserialize, Serialize};

/// Input type attribute to apply to the password field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputType {
    Password,
    Text,
}

impl InputType {
    pub fn as_str(&self) -> &'static str {
        match self {
            InputType::Password => "password",
            InputType::Text => "text",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Visibility {
    #[default]
    Hidden,
    Shown,
}

/// Which optional UI pieces the toggle has.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ToggleAffordances {
    /// Both the "show" and the "hide" icon are present.
    pub icon_pair: bool,
}

/// Active flags for the icon pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IconState {
    pub show_active: bool,
    pub hide_active: bool,
}

/// What the host must apply after a toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToggleOutcome {
    pub input_type: InputType,
    /// `None` when the toggle has no icon pair.
    pub icons: Option<IconState>,
}

#[derive(Debug, Clone)]
pub struct PasswordToggle {
    visibility: Visibility,
    affordances: ToggleAffordances,
    icons: IconState,
}

impl PasswordToggle {
    /// `show_icon_active` is the markup's initial state of the "show" icon;
    /// the "hide" icon starts opposite to it.
    pub fn new(affordances: ToggleAffordances, show_icon_active: bool) -> Self {
        Self {
            visibility: Visibility::Hidden,
            affordances,
            icons: IconState {
                show_active: show_icon_active,
                hide_active: !show_icon_active,
            },
        }
    }

    pub fn visibility(&self) -> Visibility {
        self.visibility
    }

    pub fn toggle(&mut self) -> ToggleOutcome {
        self.visibility = match self.visibility {
            Visibility::Hidden => Visibility::Shown,
            Visibility::Shown => Visibility::Hidden,
        };
        let input_type = match self.visibility {
            Visibility::Hidden => InputType::Password,
            Visibility::Shown => InputType::Text,
        };

        if !self.affordances.icon_pair {
            return ToggleOutcome {
                input_type,
                icons: None,
            };
        }

        self.icons = IconState {
            show_active: !self.icons.show_active,
            hide_active: !self.icons.hide_active,
        };
        ToggleOutcome {
            input_type,
            icons: Some(self.icons),
        }
    }
}

/// Picks the input a toggle controls: the explicitly targeted one, else the
/// input found in the toggle's own container.
pub fn resolve_target<'a>(
    explicit: Option<&'a str>,
    container_input: Option<&'a str>,
) -> Option<&'a str> {
    explicit
        .filter(|id| !id.is_empty())
        .or(container_input.filter(|id| !id.is_empty()))
}
