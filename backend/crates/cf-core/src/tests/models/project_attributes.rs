use crate::ProjectAttributes;

use googletest::prelude::*;
use serde_json::json;

#[test]
fn given_numeric_string_amount_when_deserialized_then_parsed() {
    let attributes: ProjectAttributes =
        serde_json::from_value(json!({ "target_amount": "75000000" })).unwrap();

    assert_that!(attributes.target_amount, some(eq(75_000_000.0)));
}

#[test]
fn given_number_amount_when_deserialized_then_kept() {
    let attributes: ProjectAttributes =
        serde_json::from_value(json!({ "target_amount": 700000 })).unwrap();

    assert_that!(attributes.target_amount, some(eq(700_000.0)));
}

#[test]
fn given_blank_or_null_amount_when_deserialized_then_absent() {
    let blank: ProjectAttributes =
        serde_json::from_value(json!({ "target_amount": "  " })).unwrap();
    let null: ProjectAttributes =
        serde_json::from_value(json!({ "target_amount": null })).unwrap();
    let missing: ProjectAttributes = serde_json::from_value(json!({})).unwrap();

    assert_that!(blank.target_amount, none());
    assert_that!(null.target_amount, none());
    assert_that!(missing.target_amount, none());
}

#[test]
fn given_non_numeric_amount_when_deserialized_then_error() {
    let result = serde_json::from_value::<ProjectAttributes>(json!({ "target_amount": "lots" }));

    assert_that!(result, err(anything()));
}

#[test]
fn given_amount_beyond_limit_when_deserialized_then_error() {
    let number = serde_json::from_value::<ProjectAttributes>(json!({ "target_amount": 1e37 }));
    let text = serde_json::from_value::<ProjectAttributes>(json!({ "target_amount": "1e37" }));

    assert_that!(number, err(anything()));
    assert_that!(text, err(anything()));
}

#[test]
fn given_amount_at_limit_when_deserialized_then_kept() {
    let attributes: ProjectAttributes =
        serde_json::from_value(json!({ "target_amount": crate::models::amount::MAX_TARGET_AMOUNT }))
            .unwrap();

    assert_that!(
        attributes.target_amount,
        some(eq(crate::models::amount::MAX_TARGET_AMOUNT))
    );
}
