mod project_attributes;
mod review;
