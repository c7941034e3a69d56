use cf_core::Review;

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ReviewDto {
    pub id: String,
    pub project_id: String,
    pub name: String,
    pub remark: String,
    pub stars: i32,
    pub user_id: Option<String>,
    pub created_at: i64,
}

impl From<Review> for ReviewDto {
    fn from(r: Review) -> Self {
        Self {
            id: r.id.to_string(),
            project_id: r.project_id.to_string(),
            name: r.name,
            remark: r.remark,
            stars: r.stars,
            user_id: r.user_id.map(|u| u.to_string()),
            created_at: r.created_at.timestamp(),
        }
    }
}
