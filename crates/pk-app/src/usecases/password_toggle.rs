//! Password show/hide binding.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use pk_core::password::{resolve_target, PasswordToggle, ToggleAffordances, ToggleOutcome};
use pk_core::ports::PasswordFieldPort;
use tracing::debug;

/// One toggle button bound to one password field.
pub struct PasswordToggleBinding {
    toggle: Mutex<PasswordToggle>,
    field: Arc<dyn PasswordFieldPort>,
}

impl PasswordToggleBinding {
    pub fn new(
        field: Arc<dyn PasswordFieldPort>,
        affordances: ToggleAffordances,
        show_icon_active: bool,
    ) -> Self {
        Self {
            toggle: Mutex::new(PasswordToggle::new(affordances, show_icon_active)),
            field,
        }
    }

    /// Binds a toggle to the field named by `explicit_target`, falling back to
    /// the input inside the toggle's container. Returns `None` (toggle left
    /// unbound) when neither resolves to a known field.
    pub fn resolve(
        explicit_target: Option<&str>,
        container_input: Option<&str>,
        fields: &HashMap<String, Arc<dyn PasswordFieldPort>>,
        affordances: ToggleAffordances,
        show_icon_active: bool,
    ) -> Option<Self> {
        let explicit = explicit_target.filter(|id| fields.contains_key(*id));
        let target = resolve_target(explicit, container_input)?;
        let Some(field) = fields.get(target) else {
            debug!(target, "password toggle target not found");
            return None;
        };
        Some(Self::new(field.clone(), affordances, show_icon_active))
    }

    pub fn on_click(&self) -> ToggleOutcome {
        let outcome = match self.toggle.lock() {
            Ok(mut toggle) => toggle.toggle(),
            Err(poisoned) => poisoned.into_inner().toggle(),
        };
        self.field.set_input_type(outcome.input_type);
        if let Some(icons) = outcome.icons {
            self.field.set_icons(icons);
        }
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pk_core::password::{IconState, InputType};

    #[derive(Default)]
    struct Field {
        input_type: Mutex<Option<InputType>>,
        icons: Mutex<Vec<IconState>>,
    }

    impl PasswordFieldPort for Field {
        fn set_input_type(&self, input_type: InputType) {
            *self.input_type.lock().unwrap() = Some(input_type);
        }

        fn set_icons(&self, icons: IconState) {
            self.icons.lock().unwrap().push(icons);
        }
    }

    #[test]
    fn password_toggle_click_reveals_then_hides() {
        let field = Arc::new(Field::default());
        let binding =
            PasswordToggleBinding::new(field.clone(), ToggleAffordances { icon_pair: true }, true);

        binding.on_click();
        assert_eq!(*field.input_type.lock().unwrap(), Some(InputType::Text));
        binding.on_click();
        assert_eq!(*field.input_type.lock().unwrap(), Some(InputType::Password));
        assert_eq!(field.icons.lock().unwrap().len(), 2);
    }

    #[test]
    fn password_toggle_without_icon_pair_never_touches_icons() {
        let field = Arc::new(Field::default());
        let binding = PasswordToggleBinding::new(field.clone(), ToggleAffordances::default(), true);

        binding.on_click();
        assert!(field.icons.lock().unwrap().is_empty());
    }

    #[test]
    fn password_toggle_resolve_falls_back_to_container_input() {
        let nested = Arc::new(Field::default());
        let mut fields: HashMap<String, Arc<dyn PasswordFieldPort>> = HashMap::new();
        fields.insert("confirm".to_string(), nested.clone());

        let binding = PasswordToggleBinding::resolve(
            Some("missing"),
            Some("confirm"),
            &fields,
            ToggleAffordances::default(),
            true,
        )
        .expect("bound to container input");
        binding.on_click();
        assert_eq!(*nested.input_type.lock().unwrap(), Some(InputType::Text));

        assert!(PasswordToggleBinding::resolve(
            None,
            None,
            &fields,
            ToggleAffordances::default(),
            true
        )
        .is_none());
    }
}
