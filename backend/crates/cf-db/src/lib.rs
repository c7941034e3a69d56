pub mod connection;
pub mod error;
pub mod repositories;

pub use connection::pool::{connect, migrate};
pub use error::{DbError, Result};
pub use repositories::project_repository::ProjectRepository;
pub use repositories::review_repository::ReviewRepository;
