mod error;
mod update_project_request;
