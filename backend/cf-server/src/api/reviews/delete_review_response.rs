use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct DeleteReviewResponse {
    pub deleted_id: String,
    pub notice: String,
}
