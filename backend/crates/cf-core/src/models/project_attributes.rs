use crate::models::amount::deserialize_amount;
use crate::{Project, ValidationErrors, validate_project};

use serde::{Deserialize, Serialize};

/// Candidate project fields as submitted by a client, before validation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectAttributes {
    pub name: String,
    pub description: String,
    pub looking_for: String,
    #[serde(deserialize_with = "deserialize_amount")]
    pub target_amount: Option<f64>,
    pub teams: String,
    pub github_link: String,
    pub web_url: String,
    pub image_file: String,
}

impl ProjectAttributes {
    pub fn validate(&self) -> ValidationErrors {
        validate_project(self)
    }

    pub fn is_valid(&self) -> bool {
        self.validate().is_empty()
    }
}

impl From<&Project> for ProjectAttributes {
    fn from(p: &Project) -> Self {
        Self {
            name: p.name.clone(),
            description: p.description.clone(),
            looking_for: p.looking_for.clone(),
            target_amount: Some(p.target_amount),
            teams: p.teams.clone(),
            github_link: p.github_link.clone(),
            web_url: p.web_url.clone(),
            image_file: p.image_file.clone(),
        }
    }
}
