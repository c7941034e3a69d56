pub mod amount;
pub mod project;
pub mod project_attributes;
pub mod review;
pub mod review_attributes;
