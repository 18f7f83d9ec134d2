//! Phone number input mask.
//!
//! Turns arbitrary typed or pasted text into the fixed regional display
//! pattern `(AA) NNNNN-NNNN`. Formatting is a pure function of the digits
//! found in the input; nothing is remembered between events.

pub mod digits;
pub mod field;
pub mod mask;

pub use digits::{DigitStream, COUNTRY_CODE, MAX_DIGITS};
pub use field::{FieldUpdate, MaskedField, MASK_CLASS};
pub use mask::{format_phone, FormattedPhone};
