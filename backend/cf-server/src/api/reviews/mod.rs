pub mod delete_review_response;
pub mod review_dto;
pub mod review_list_response;
pub mod review_response;
#[allow(clippy::module_inception)]
pub mod reviews;
