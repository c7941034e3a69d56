use crate::{CoreError, Result as CoreResult, ReviewAttributes};

use chrono::{DateTime, SubsecRound, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Review {
    pub id: Uuid,
    pub project_id: Uuid,

    pub name: String,
    pub remark: String,
    pub stars: i32,

    // Audit
    pub user_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
}

impl Review {
    /// Validate `attributes` and build a review owned by `project_id`,
    /// attributed to `user_id`.
    #[track_caller]
    pub fn create(project_id: Uuid, attributes: ReviewAttributes, user_id: Uuid) -> CoreResult<Self> {
        let errors = attributes.validate();
        if !errors.is_empty() {
            return Err(CoreError::validation(errors));
        }

        Ok(Self {
            id: Uuid::new_v4(),
            project_id,
            name: attributes.name,
            remark: attributes.remark,
            stars: attributes.stars.unwrap_or_default(),
            user_id: Some(user_id),
            created_at: Utc::now().trunc_subsecs(0),
        })
    }
}
