pub mod error;
pub mod extractors;
pub mod notices;
pub mod projects;
pub mod reviews;
