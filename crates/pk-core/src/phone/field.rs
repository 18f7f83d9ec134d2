//! Mask adapter rule for a bound text field.

use super::mask::format_phone;

/// Class marker a host uses to bind the mask to a text field.
pub const MASK_CLASS: &str = "telefone-mask";

/// New value and caret position to write back to the field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldUpdate {
    pub value: String,
    /// Caret index (in characters); always the end of `value`.
    pub cursor: usize,
}

/// Stateless mask rule for a field whose only durable state is its displayed value.
pub struct MaskedField;

impl MaskedField {
    /// Computes the write-back for the field's current value.
    ///
    /// Returns `None` when the value is already formatted, so hosts never
    /// rewrite the field (and never move the caret) without a reason.
    pub fn reformat(current: &str) -> Option<FieldUpdate> {
        let formatted = format_phone(current);
        if formatted == current {
            return None;
        }

        let cursor = formatted.chars().count();
        Some(FieldUpdate {
            value: formatted,
            cursor,
        })
    }
}
