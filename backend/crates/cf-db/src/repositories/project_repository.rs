//! Project repository for CRUD operations on projects.
//!
//! Deleting a project goes through [`ProjectRepository::delete_with_reviews`],
//! which removes the project's reviews and the project itself in a single
//! transaction. There is no soft delete.

use crate::repositories::columns::{parse_timestamp, parse_uuid};
use crate::{DbError, Result as DbErrorResult};

use cf_core::Project;

use sqlx::{FromRow, SqlitePool};
use uuid::Uuid;

#[derive(FromRow)]
struct ProjectRow {
    id: String,
    name: String,
    description: String,
    looking_for: String,
    target_amount: f64,
    teams: String,
    github_link: String,
    web_url: String,
    image_file: String,
    created_at: i64,
    updated_at: i64,
}

impl TryFrom<ProjectRow> for Project {
    type Error = DbError;

    fn try_from(r: ProjectRow) -> DbErrorResult<Self> {
        Ok(Project {
            id: parse_uuid(&r.id, "project.id")?,
            name: r.name,
            description: r.description,
            looking_for: r.looking_for,
            target_amount: r.target_amount,
            teams: r.teams,
            github_link: r.github_link,
            web_url: r.web_url,
            image_file: r.image_file,
            created_at: parse_timestamp(r.created_at, "project.created_at")?,
            updated_at: parse_timestamp(r.updated_at, "project.updated_at")?,
        })
    }
}

const SELECT_PROJECT: &str = r#"
    SELECT id, name, description, looking_for, target_amount,
        teams, github_link, web_url, image_file, created_at, updated_at
    FROM cf_projects
"#;

pub struct ProjectRepository {
    pool: SqlitePool,
}

impl ProjectRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, project: &Project) -> DbErrorResult<()> {
        sqlx::query(
            r#"
                INSERT INTO cf_projects (
                    id, name, description, looking_for, target_amount,
                    teams, github_link, web_url, image_file, created_at, updated_at
                ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(project.id.to_string())
        .bind(&project.name)
        .bind(&project.description)
        .bind(&project.looking_for)
        .bind(project.target_amount)
        .bind(&project.teams)
        .bind(&project.github_link)
        .bind(&project.web_url)
        .bind(&project.image_file)
        .bind(project.created_at.timestamp())
        .bind(project.updated_at.timestamp())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    pub async fn find_by_id(&self, id: Uuid) -> DbErrorResult<Option<Project>> {
        let row = sqlx::query_as::<_, ProjectRow>(&format!("{SELECT_PROJECT} WHERE id = ?"))
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await?;

        row.map(Project::try_from).transpose()
    }

    pub async fn find_all(&self) -> DbErrorResult<Vec<Project>> {
        let rows =
            sqlx::query_as::<_, ProjectRow>(&format!("{SELECT_PROJECT} ORDER BY name, created_at"))
                .fetch_all(&self.pool)
                .await?;

        rows.into_iter()
            .map(Project::try_from)
            .collect::<DbErrorResult<Vec<_>>>()
    }

    pub async fn count(&self) -> DbErrorResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM cf_projects")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }

    /// Overwrite every mutable column. Returns `false` if no such project exists.
    pub async fn update(&self, project: &Project) -> DbErrorResult<bool> {
        let result = sqlx::query(
            r#"
                UPDATE cf_projects
                SET name = ?, description = ?, looking_for = ?, target_amount = ?,
                    teams = ?, github_link = ?, web_url = ?, image_file = ?,
                    updated_at = ?
                WHERE id = ?
            "#,
        )
        .bind(&project.name)
        .bind(&project.description)
        .bind(&project.looking_for)
        .bind(project.target_amount)
        .bind(&project.teams)
        .bind(&project.github_link)
        .bind(&project.web_url)
        .bind(&project.image_file)
        .bind(project.updated_at.timestamp())
        .bind(project.id.to_string())
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Delete a project together with all of its reviews.
    ///
    /// Returns the number of reviews removed, or `None` when the project does
    /// not exist (in which case nothing is written).
    pub async fn delete_with_reviews(&self, id: Uuid) -> DbErrorResult<Option<u64>> {
        let id_str = id.to_string();
        let mut tx = self.pool.begin().await?;

        let reviews = sqlx::query("DELETE FROM cf_reviews WHERE project_id = ?")
            .bind(&id_str)
            .execute(&mut *tx)
            .await?;

        let project = sqlx::query("DELETE FROM cf_projects WHERE id = ?")
            .bind(&id_str)
            .execute(&mut *tx)
            .await?;

        if project.rows_affected() == 0 {
            tx.rollback().await?;
            return Ok(None);
        }

        tx.commit().await?;

        Ok(Some(reviews.rows_affected()))
    }
}
