use crate::ReviewDto;

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ReviewListResponse {
    pub reviews: Vec<ReviewDto>,
}
