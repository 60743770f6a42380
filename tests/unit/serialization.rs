//! Serde integration: transparent output, validating input.
#![cfg(feature = "serde")]

use domain_primitives::prelude::*;
use serde_json::json;

#[test]
fn test_numeric_serializes_as_raw_value() {
    let value = NegativeInteger::new(-3).unwrap();
    assert_eq!(serde_json::to_value(value).unwrap(), json!(-3));
}

#[test]
fn test_numeric_deserialization_validates() {
    let value: PositiveLong = serde_json::from_str("12").unwrap();
    assert_eq!(value.value(), 12);

    let result: Result<PositiveLong, _> = serde_json::from_str("-12");
    let error = result.unwrap_err();
    assert!(
        error
            .to_string()
            .starts_with(PositiveLong::DEFAULT_MESSAGE.as_str())
    );
}

#[test]
fn test_string_primitives_serialize_as_strings() {
    let value = NonEmptyOrWhiteSpaceString::new("hello").unwrap();
    assert_eq!(serde_json::to_string(&value).unwrap(), "\"hello\"");

    let built = ConfigurableStringBuilder::new().build("built").unwrap();
    assert_eq!(serde_json::to_string(&built).unwrap(), "\"built\"");
}

#[test]
fn test_non_empty_string_deserialization_validates() {
    let result: Result<NonEmptyOrWhiteSpaceString, _> = serde_json::from_str("\"   \"");
    assert!(result.is_err());
}

#[test]
fn test_length_range_deserializes_from_pair() {
    let range: StringLengthRange = serde_json::from_value(json!([2, 8])).unwrap();
    assert!(range.contains(5));

    let inverted: Result<StringLengthRange, _> = serde_json::from_value(json!([8, 2]));
    assert!(inverted.is_err());

    let negative: Result<StringLengthRange, _> = serde_json::from_value(json!([-1, 2]));
    assert!(negative.is_err());
}

#[test]
fn test_past_timestamp_round_trip() {
    let value: PastOrPresentTimestamp =
        serde_json::from_str("\"2001-09-09T01:46:40Z\"").unwrap();
    let text = serde_json::to_string(&value).unwrap();
    assert_eq!(text, "\"2001-09-09T01:46:40Z\"");
}
