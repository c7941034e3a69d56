use cf_core::ProjectAttributes;
use cf_core::models::amount::deserialize_amount_patch;

use serde::Deserialize;

/// Partial project update. Absent fields keep their stored value.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateProjectRequest {
    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub looking_for: Option<String>,

    /// `Some(None)` clears the amount, which then fails validation
    #[serde(default, deserialize_with = "deserialize_amount_patch")]
    pub target_amount: Option<Option<f64>>,

    #[serde(default)]
    pub teams: Option<String>,

    #[serde(default)]
    pub github_link: Option<String>,

    #[serde(default)]
    pub web_url: Option<String>,

    #[serde(default)]
    pub image_file: Option<String>,
}

impl UpdateProjectRequest {
    /// Overlay the supplied fields onto `attributes`.
    pub fn apply_to(self, mut attributes: ProjectAttributes) -> ProjectAttributes {
        if let Some(name) = self.name {
            attributes.name = name;
        }
        if let Some(description) = self.description {
            attributes.description = description;
        }
        if let Some(looking_for) = self.looking_for {
            attributes.looking_for = looking_for;
        }
        if let Some(target_amount) = self.target_amount {
            attributes.target_amount = target_amount;
        }
        if let Some(teams) = self.teams {
            attributes.teams = teams;
        }
        if let Some(github_link) = self.github_link {
            attributes.github_link = github_link;
        }
        if let Some(web_url) = self.web_url {
            attributes.web_url = web_url;
        }
        if let Some(image_file) = self.image_file {
            attributes.image_file = image_file;
        }
        attributes
    }
}
