pub mod project_repository;
pub mod review_repository;

mod columns;
