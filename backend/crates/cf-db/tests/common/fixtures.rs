use cf_core::{Project, ProjectAttributes, Review, ReviewAttributes};

use uuid::Uuid;

/// Creates a valid test Project
pub fn create_test_project(name: &str) -> Project {
    Project::create(ProjectAttributes {
        name: name.to_string(),
        description: "A lot of the most popular sites on the web are for photo sharing".to_string(),
        looking_for: "Partnership".to_string(),
        target_amount: Some(700_000.0),
        teams: "K Wellie".to_string(),
        github_link: "http://github.com/sct".to_string(),
        web_url: "http://masfr.com/sct".to_string(),
        image_file: "image.png".to_string(),
    })
    .expect("fixture project attributes are valid")
}

/// Creates a valid test Review on `project_id`
pub fn create_test_review(project_id: Uuid, user_id: Uuid) -> Review {
    Review::create(
        project_id,
        ReviewAttributes {
            name: "Larry".to_string(),
            remark: "Looks promising".to_string(),
            stars: Some(4),
        },
        user_id,
    )
    .expect("fixture review attributes are valid")
}
