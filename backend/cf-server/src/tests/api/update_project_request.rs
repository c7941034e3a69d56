use crate::UpdateProjectRequest;

use cf_core::ProjectAttributes;

use googletest::prelude::*;

fn stored() -> ProjectAttributes {
    ProjectAttributes {
        name: "Community Garden".into(),
        description: "Raised beds and a tool library for the block".into(),
        looking_for: "Volunteers".into(),
        target_amount: Some(12_000.0),
        teams: "Green Thumbs".into(),
        ..Default::default()
    }
}

#[test]
fn test_absent_fields_keep_stored_values() {
    let req: UpdateProjectRequest = serde_json::from_str(r#"{"name": "Rooftop Garden"}"#).unwrap();

    let merged = req.apply_to(stored());

    assert_that!(merged.name.as_str(), eq("Rooftop Garden"));
    assert_that!(merged.looking_for.as_str(), eq("Volunteers"));
    assert_that!(merged.target_amount, some(eq(12_000.0)));
}

#[test]
fn test_numeric_string_amount_is_accepted() {
    let req: UpdateProjectRequest =
        serde_json::from_str(r#"{"target_amount": "75000000"}"#).unwrap();

    let merged = req.apply_to(stored());

    assert_that!(merged.target_amount, some(eq(75_000_000.0)));
}

#[test]
fn test_blank_amount_clears_it() {
    let req: UpdateProjectRequest = serde_json::from_str(r#"{"target_amount": ""}"#).unwrap();

    let merged = req.apply_to(stored());

    assert_that!(merged.target_amount, none());
    assert_that!(merged.is_valid(), eq(false));
}

#[test]
fn test_non_numeric_amount_is_rejected() {
    let result = serde_json::from_str::<UpdateProjectRequest>(r#"{"target_amount": "lots"}"#);

    assert_that!(result, err(anything()));
}
