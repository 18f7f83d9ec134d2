/// A single-line text input bound to the phone mask.
///
/// The displayed value is the field's only durable state.
pub trait TextFieldPort: Send + Sync {
    fn value(&self) -> String;
    fn set_value(&self, value: &str);
    /// Collapse the selection to `position` (in characters).
    fn set_cursor(&self, position: usize);
}
