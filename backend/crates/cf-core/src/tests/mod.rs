mod models;

use crate::ProjectAttributes;

/// Attributes that pass every project rule
pub(crate) fn project_attributes() -> ProjectAttributes {
    ProjectAttributes {
        name: "Solar Kiosk".to_string(),
        description: "Off-grid charging stations for rural markets".to_string(),
        looking_for: "Partnership".to_string(),
        target_amount: Some(700_000.0),
        teams: "K Wellie".to_string(),
        github_link: "http://github.com/sct".to_string(),
        web_url: "http://masfr.com/sct".to_string(),
        image_file: "image.png".to_string(),
    }
}
