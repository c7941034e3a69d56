use crate::ReviewDto;

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ReviewResponse {
    pub review: ReviewDto,
    pub notice: String,
}
