use crate::repositories::columns::{parse_timestamp, parse_uuid};
use crate::{DbError, Result as DbErrorResult};

use cf_core::Review;

use sqlx::{FromRow, SqlitePool};
use uuid::Uuid;

#[derive(FromRow)]
struct ReviewRow {
    id: String,
    project_id: String,
    name: String,
    remark: String,
    stars: i64,
    user_id: Option<String>,
    created_at: i64,
}

impl TryFrom<ReviewRow> for Review {
    type Error = DbError;

    fn try_from(r: ReviewRow) -> DbErrorResult<Self> {
        Ok(Review {
            id: parse_uuid(&r.id, "review.id")?,
            project_id: parse_uuid(&r.project_id, "review.project_id")?,
            name: r.name,
            remark: r.remark,
            stars: r.stars as i32,
            user_id: r
                .user_id
                .as_deref()
                .map(|u| parse_uuid(u, "review.user_id"))
                .transpose()?,
            created_at: parse_timestamp(r.created_at, "review.created_at")?,
        })
    }
}

pub struct ReviewRepository {
    pool: SqlitePool,
}

impl ReviewRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, review: &Review) -> DbErrorResult<()> {
        sqlx::query(
            r#"
              INSERT INTO cf_reviews (
                  id, project_id, name, remark, stars, user_id, created_at
              ) VALUES (?, ?, ?, ?, ?, ?, ?)
              "#,
        )
        .bind(review.id.to_string())
        .bind(review.project_id.to_string())
        .bind(&review.name)
        .bind(&review.remark)
        .bind(review.stars)
        .bind(review.user_id.map(|u| u.to_string()))
        .bind(review.created_at.timestamp())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Reviews of one project, oldest first.
    pub async fn find_by_project(&self, project_id: Uuid) -> DbErrorResult<Vec<Review>> {
        let rows = sqlx::query_as::<_, ReviewRow>(
            r#"
              SELECT id, project_id, name, remark, stars, user_id, created_at
              FROM cf_reviews
              WHERE project_id = ?
              ORDER BY created_at ASC, rowid ASC
              "#,
        )
        .bind(project_id.to_string())
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter()
            .map(Review::try_from)
            .collect::<DbErrorResult<Vec<_>>>()
    }

    /// Look up a review only if it belongs to `project_id`.
    pub async fn find_in_project(
        &self,
        project_id: Uuid,
        id: Uuid,
    ) -> DbErrorResult<Option<Review>> {
        let row = sqlx::query_as::<_, ReviewRow>(
            r#"
              SELECT id, project_id, name, remark, stars, user_id, created_at
              FROM cf_reviews
              WHERE id = ? AND project_id = ?
              "#,
        )
        .bind(id.to_string())
        .bind(project_id.to_string())
        .fetch_optional(&self.pool)
        .await?;

        row.map(Review::try_from).transpose()
    }

    pub async fn count(&self) -> DbErrorResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM cf_reviews")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }

    pub async fn count_by_project(&self, project_id: Uuid) -> DbErrorResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM cf_reviews WHERE project_id = ?")
            .bind(project_id.to_string())
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }

    /// Returns `true` if a row was removed.
    pub async fn delete(&self, id: Uuid) -> DbErrorResult<bool> {
        let result = sqlx::query("DELETE FROM cf_reviews WHERE id = ?")
            .bind(id.to_string())
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
