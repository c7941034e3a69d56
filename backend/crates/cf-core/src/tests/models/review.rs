use crate::{FieldError, Review, ReviewAttributes};

use serde_json::json;
use uuid::Uuid;

#[test]
fn test_review_create_attributes_owner_and_project() {
    let project_id = Uuid::new_v4();
    let user_id = Uuid::new_v4();
    let attributes = ReviewAttributes {
        name: "Larry".to_string(),
        remark: "Great team".to_string(),
        stars: Some(5),
    };

    let review = Review::create(project_id, attributes, user_id).unwrap();

    assert_eq!(review.project_id, project_id);
    assert_eq!(review.user_id, Some(user_id));
    assert_eq!(review.stars, 5);
    assert_eq!(review.remark, "Great team");
}

#[test]
fn test_review_create_rejects_out_of_range_stars() {
    let attributes = ReviewAttributes {
        name: "Larry".to_string(),
        remark: String::new(),
        stars: Some(6),
    };

    let err = Review::create(Uuid::new_v4(), attributes, Uuid::new_v4()).unwrap_err();

    assert_eq!(
        err.errors().on("stars"),
        vec![FieldError::NotInRange { min: 1, max: 5 }]
    );
}

#[test]
fn test_review_attributes_drop_unknown_fields() {
    let smuggled_project = Uuid::new_v4();
    let attributes: ReviewAttributes = serde_json::from_value(json!({
        "name": "Larry",
        "remark": "Nice",
        "stars": 4,
        "project_id": smuggled_project,
        "user_id": Uuid::new_v4(),
        "admin": true
    }))
    .unwrap();

    assert_eq!(
        attributes,
        ReviewAttributes {
            name: "Larry".to_string(),
            remark: "Nice".to_string(),
            stars: Some(4),
        }
    );
}

#[test]
fn test_review_attributes_accept_form_style_stars() {
    let text: ReviewAttributes = serde_json::from_value(json!({ "stars": "5" })).unwrap();
    let blank: ReviewAttributes = serde_json::from_value(json!({ "stars": "" })).unwrap();
    let null: ReviewAttributes = serde_json::from_value(json!({ "stars": null })).unwrap();

    assert_eq!(text.stars, Some(5));
    assert_eq!(blank.stars, None);
    assert_eq!(null.stars, None);
}

#[test]
fn test_review_attributes_reject_non_numeric_stars() {
    let words = serde_json::from_value::<ReviewAttributes>(json!({ "stars": "five" }));
    let huge = serde_json::from_value::<ReviewAttributes>(json!({ "stars": 9_000_000_000_i64 }));

    assert!(words.is_err());
    assert!(huge.is_err());
}

#[test]
fn test_review_created_at_is_whole_seconds() {
    let attributes = ReviewAttributes {
        name: "Larry".to_string(),
        remark: String::new(),
        stars: Some(3),
    };

    let review = Review::create(Uuid::new_v4(), attributes, Uuid::new_v4()).unwrap();

    assert_eq!(review.created_at.timestamp_subsec_nanos(), 0);
}
