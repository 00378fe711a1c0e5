//! Property-based tests for field validation

use contact_book::domain::{normalize_phone, Birthday, Phone, ValidationError};
use proptest::prelude::*;

/// Ten digits with formatting characters sprinkled in between.
fn formatted_phone() -> impl Strategy<Value = (String, String)> {
    prop::collection::vec((0u8..10, prop::sample::select(vec!["", "", "+", "(", ")", "-"])), 10)
        .prop_map(|parts| {
            let digits: String = parts.iter().map(|(d, _)| char::from(b'0' + d)).collect();
            let raw: String = parts
                .iter()
                .map(|(d, sep)| format!("{}{}", sep, d))
                .collect();
            (raw, digits)
        })
}

proptest! {
    #[test]
    fn props_formatted_ten_digits_normalize_to_digits((raw, digits) in formatted_phone()) {
        let phone = Phone::new(&raw).unwrap();
        prop_assert_eq!(phone.as_str(), digits.as_str());
        prop_assert_eq!(phone.to_string(), digits);
    }

    #[test]
    fn props_wrong_digit_count_is_rejected(digits in "[0-9]{0,9}|[0-9]{11,20}") {
        prop_assert_eq!(
            normalize_phone(&digits),
            Err(ValidationError::InvalidPhone(digits.clone()))
        );
    }

    #[test]
    fn props_other_characters_are_rejected(
        prefix in "[0-9]{0,5}",
        bad in "[a-zA-Z .#*/]",
        suffix in "[0-9]{5}",
    ) {
        let raw = format!("{}{}{}", prefix, bad, suffix);
        prop_assert!(Phone::new(&raw).is_err());
    }

    #[test]
    fn props_birthday_separators_agree(
        day in 1u32..=28,
        month in 1u32..=12,
        year in 1900i32..=2100,
    ) {
        let dashed = Birthday::new(format!("{:02}-{:02}-{}", day, month, year)).unwrap();
        let slashed = Birthday::new(format!("{:02}/{:02}/{}", day, month, year)).unwrap();
        let dotted = Birthday::new(format!("{}.{}.{}", day, month, year)).unwrap();

        prop_assert_eq!(dashed, slashed);
        prop_assert_eq!(dashed, dotted);
        prop_assert_eq!(dashed.to_string(), format!("{}-{}-{}", day, month, year));
    }
}
