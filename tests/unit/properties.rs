//! Property-based construction validity
//!
//! For every raw value satisfying a primitive's predicate, construction
//! succeeds and preserves the value; for every other raw value it fails with
//! a range error led by the default message.

use domain_primitives::prelude::*;
use proptest::prelude::*;
use proptest::test_runner::Config;

fn config() -> Config {
    Config {
        cases: 128,
        ..Config::default()
    }
}

proptest! {
    #![proptest_config(config())]

    #[test]
    fn prop_positive_integer(raw in any::<i32>()) {
        let result = PositiveInteger::new(raw);
        if raw > 0 {
            prop_assert_eq!(result.unwrap().value(), raw);
        } else {
            let error = result.unwrap_err();
            prop_assert_eq!(error.kind(), ErrorKind::Range);
            prop_assert!(error.to_string().starts_with(PositiveInteger::DEFAULT_MESSAGE.as_str()));
        }
    }

    #[test]
    fn prop_negative_integer(raw in any::<i32>()) {
        let result = NegativeInteger::new(raw);
        prop_assert_eq!(result.is_ok(), raw < 0);
        if let Ok(value) = result {
            prop_assert_eq!(value.value(), raw);
        }
    }

    #[test]
    fn prop_negative_long(raw in any::<i64>()) {
        let result = NegativeLong::new(raw);
        prop_assert_eq!(result.is_ok(), raw < 0);
    }

    #[test]
    fn prop_positive_long(raw in any::<i64>()) {
        let result = PositiveLong::new(raw);
        prop_assert_eq!(result.is_ok(), raw > 0);
    }

    #[test]
    fn prop_string_length(raw in any::<i32>()) {
        prop_assert_eq!(StringLength::new(raw).is_ok(), raw >= 0);
    }

    #[test]
    fn prop_length_range_requires_ordered_bounds(min in 0..1000i32, max in 0..1000i32) {
        let range = StringLengthRange::new(
            StringLength::new(min).unwrap(),
            StringLength::new(max).unwrap(),
        );
        prop_assert_eq!(range.is_ok(), min <= max);
    }

    #[test]
    fn prop_ordering_matches_raw_ordering(a in 1..i32::MAX, b in 1..i32::MAX) {
        let left = PositiveInteger::new(a).unwrap();
        let right = PositiveInteger::new(b).unwrap();
        prop_assert_eq!(left.cmp(&right), a.cmp(&b));
        prop_assert_eq!(left == right, a == b);
    }

    #[test]
    fn prop_non_empty_string(value in "\\PC{0,12}") {
        let result = NonEmptyOrWhiteSpaceString::new(value.clone());
        let expected = !value.trim().is_empty();
        prop_assert_eq!(result.is_ok(), expected);
    }

    #[test]
    fn prop_builder_length_bounds(value in "[a-z]{0,10}", min in 0..6i32, extra in 0..6i32) {
        let max = min + extra;
        let result = ConfigurableStringBuilder::new()
            .with_min_length(StringLength::new(min).unwrap())
            .with_max_length(StringLength::new(max).unwrap())
            .build(value.clone());
        let length = value.chars().count() as i32;
        prop_assert_eq!(result.is_ok(), min <= length && length <= max);
    }

    #[test]
    fn prop_ignore_case_equality_is_case_blind(value in "[a-zA-Z]{1,16}") {
        let build = |text: String| {
            ConfigurableStringBuilder::new()
                .with_comparison(StringComparison::OrdinalIgnoreCase)
                .build(text)
                .unwrap()
        };
        prop_assert_eq!(build(value.to_uppercase()), build(value.to_lowercase()));
    }
}
