use std::fmt;

/// Maximum number of digits kept: 2 area digits + 9 subscriber digits.
pub const MAX_DIGITS: usize = 11;

/// Country code stripped when the input carries more than [`MAX_DIGITS`] digits.
pub const COUNTRY_CODE: &str = "55";

/// Number of leading digits that form the area code.
pub const AREA_CODE_LEN: usize = 2;

/// Digits extracted from raw input, normalized and capped at [`MAX_DIGITS`].
///
/// 从原始输入中提取的数字序列（已归一化，最多 11 位）。
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DigitStream(String);

impl DigitStream {
    /// Extracts ASCII digits in order, strips a leading country code when the
    /// stream is too long, then truncates.
    ///
    /// Country-code stripping runs before truncation, so `"5511987654321"`
    /// keeps `"11987654321"` instead of `"55119876543"`.
    pub fn from_raw(raw: &str) -> Self {
        let mut digits: String = raw.chars().filter(|c| c.is_ascii_digit()).collect();

        if digits.len() > MAX_DIGITS && digits.starts_with(COUNTRY_CODE) {
            digits.drain(..COUNTRY_CODE.len());
        }
        digits.truncate(MAX_DIGITS);

        Self(digits)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Up to the first two digits.
    pub fn area(&self) -> &str {
        &self.0[..self.0.len().min(AREA_CODE_LEN)]
    }

    /// Everything after the area code (0 to 9 digits).
    pub fn rest(&self) -> &str {
        &self.0[self.0.len().min(AREA_CODE_LEN)..]
    }
}

impl fmt::Display for DigitStream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
