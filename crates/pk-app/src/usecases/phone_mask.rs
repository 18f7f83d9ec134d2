//! Phone mask binding.
//!
//! Applies the mask rule to bound text fields on input and paste.

use std::sync::Arc;

use pk_core::ports::TextFieldPort;
use pk_core::MaskedField;
use tracing::trace;

/// Mask adapter for a single text field.
#[derive(Clone)]
pub struct PhoneMaskBinding {
    field: Arc<dyn TextFieldPort>,
}

impl PhoneMaskBinding {
    pub fn new(field: Arc<dyn TextFieldPort>) -> Self {
        Self { field }
    }

    /// Handles an input-changing event. Returns whether the field was rewritten.
    pub fn on_input(&self) -> bool {
        let current = self.field.value();
        match MaskedField::reformat(&current) {
            Some(update) => {
                trace!(from = %current, to = %update.value, "phone mask rewrite");
                self.field.set_value(&update.value);
                self.field.set_cursor(update.cursor);
                true
            }
            None => false,
        }
    }

    /// Handles a paste. The pasted text lands after the paste event itself,
    /// so formatting waits for the next scheduler tick.
    pub async fn on_paste(&self) -> bool {
        tokio::task::yield_now().await;
        self.on_input()
    }
}

/// All mask-bound fields of a page.
///
/// A paste anywhere reformats every bound field.
#[derive(Clone, Default)]
pub struct PhoneMaskGroup {
    bindings: Vec<PhoneMaskBinding>,
}

impl PhoneMaskGroup {
    /// Binds `fields` and formats whatever they already contain.
    pub fn attach(fields: Vec<Arc<dyn TextFieldPort>>) -> Self {
        let bindings: Vec<PhoneMaskBinding> = fields.into_iter().map(PhoneMaskBinding::new).collect();
        for binding in &bindings {
            binding.on_input();
        }
        Self { bindings }
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    pub fn binding(&self, index: usize) -> Option<&PhoneMaskBinding> {
        self.bindings.get(index)
    }

    /// Input on field `index`. Unknown indices are ignored.
    pub fn on_input(&self, index: usize) -> bool {
        self.bindings
            .get(index)
            .map(PhoneMaskBinding::on_input)
            .unwrap_or(false)
    }

    /// Paste anywhere on the page. Returns how many fields were rewritten.
    pub async fn on_paste(&self) -> usize {
        tokio::task::yield_now().await;
        self.bindings
            .iter()
            .filter(|binding| binding.on_input())
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[derive(Default)]
    struct Field {
        value: Mutex<String>,
        cursor: Mutex<Option<usize>>,
        writes: Mutex<usize>,
    }

    impl Field {
        fn with(value: &str) -> Arc<Self> {
            let field = Self::default();
            *field.value.lock().unwrap() = value.to_string();
            Arc::new(field)
        }
    }

    impl TextFieldPort for Field {
        fn value(&self) -> String {
            self.value.lock().unwrap().clone()
        }

        fn set_value(&self, value: &str) {
            *self.value.lock().unwrap() = value.to_string();
            *self.writes.lock().unwrap() += 1;
        }

        fn set_cursor(&self, position: usize) {
            *self.cursor.lock().unwrap() = Some(position);
        }
    }

    #[test]
    fn phone_mask_input_rewrites_and_moves_cursor() {
        let field = Field::with("11987654321");
        let binding = PhoneMaskBinding::new(field.clone());

        assert!(binding.on_input());
        assert_eq!(field.value(), "(11) 98765-4321");
        assert_eq!(*field.cursor.lock().unwrap(), Some(15));
    }

    #[test]
    fn phone_mask_input_leaves_formatted_value_alone() {
        let field = Field::with("(11) 98765-4321");
        let binding = PhoneMaskBinding::new(field.clone());

        assert!(!binding.on_input());
        assert_eq!(*field.writes.lock().unwrap(), 0);
        assert_eq!(*field.cursor.lock().unwrap(), None);
    }

    #[test]
    fn phone_mask_group_formats_existing_values_on_attach() {
        let first = Field::with("21 3333 4444");
        let second = Field::with("");
        let group = PhoneMaskGroup::attach(vec![
            first.clone() as Arc<dyn TextFieldPort>,
            second.clone(),
        ]);

        assert_eq!(group.len(), 2);
        assert_eq!(first.value(), "(21) 33334-444");
        assert_eq!(*second.writes.lock().unwrap(), 0);
        assert!(!group.on_input(7));
    }
}
