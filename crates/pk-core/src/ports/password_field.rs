use crate::password::{IconState, InputType};

/// Password input plus its optional show/hide icons.
pub trait PasswordFieldPort: Send + Sync {
    fn set_input_type(&self, input_type: InputType);
    /// Only called when the toggle was bound with an icon pair.
    fn set_icons(&self, icons: IconState);
}
