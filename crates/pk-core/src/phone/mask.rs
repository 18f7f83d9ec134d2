use std::fmt;

use super::digits::DigitStream;

/// Length of the subscriber block before the hyphen.
const HEAD_LEN: usize = 5;

/// Display form of a phone number, always derived from a [`DigitStream`].
///
/// 由数字序列派生的显示格式，不保存任何格式化状态。
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FormattedPhone(String);

impl FormattedPhone {
    pub fn render(digits: &DigitStream) -> Self {
        let area = digits.area();
        let rest = digits.rest();

        let rendered = if area.is_empty() {
            String::new()
        } else if rest.len() <= HEAD_LEN {
            format!("({area}) {rest}")
        } else {
            let (head, tail) = rest.split_at(HEAD_LEN);
            format!("({area}) {head}-{tail}")
        };

        Self(rendered)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for FormattedPhone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Formats any input into `(AA) NNNNN-NNNN` (or a prefix of it).
///
/// Total over all strings and idempotent on its own output.
pub fn format_phone(raw: &str) -> String {
    FormattedPhone::render(&DigitStream::from_raw(raw)).into_inner()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input_renders_nothing() {
        assert_eq!(format_phone(""), "");
        assert_eq!(format_phone("abc-()"), "");
    }

    #[test]
    fn test_short_digit_strings_render_area_only() {
        assert_eq!(format_phone("1"), "(1) ");
        assert_eq!(format_phone("11"), "(11) ");
    }

    #[test]
    fn test_partial_subscriber_has_no_hyphen() {
        assert_eq!(format_phone("11987"), "(11) 987");
        assert_eq!(format_phone("1198765"), "(11) 98765");
    }

    #[test]
    fn test_hyphen_after_fifth_subscriber_digit() {
        assert_eq!(format_phone("11987654"), "(11) 98765-4");
        assert_eq!(format_phone("11987654321"), "(11) 98765-4321");
    }

    #[test]
    fn test_country_code_prefixed_number() {
        assert_eq!(format_phone("5511987654321"), "(11) 98765-4321");
    }

    #[test]
    fn test_overlong_number_is_truncated() {
        assert_eq!(format_phone("119876543219999"), "(11) 98765-4321");
    }

    #[test]
    fn test_non_digits_are_discarded() {
        assert_eq!(format_phone("abc11spp987"), "(11) 987");
    }

    #[test]
    fn test_format_is_idempotent() {
        let inputs = [
            "",
            "1",
            "11",
            "(11) ",
            "11987",
            "1198765432",
            "5511987654321",
            "+55 11 9 8765 4321 ramal 22",
            "ligue: 21-3333-4444",
            "55555555555555",
        ];
        for input in inputs {
            let once = format_phone(input);
            assert_eq!(format_phone(&once), once, "not idempotent for {input:?}");
        }
    }
}
