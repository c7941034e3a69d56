use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct DeleteProjectResponse {
    pub deleted_id: String,
    /// Reviews removed along with the project
    pub reviews_deleted: u64,
    pub notice: String,
}
