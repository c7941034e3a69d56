//! One-time success messages returned alongside mutation results.

pub const PROJECT_CREATED: &str = "Project successfully created!";
pub const PROJECT_UPDATED: &str = "Project successfully updated!";
pub const PROJECT_DELETED: &str = "Project successfully deleted!";
pub const REVIEW_CREATED: &str = "Thanks for your review!";
pub const REVIEW_DELETED: &str = "Review successfully deleted!";
