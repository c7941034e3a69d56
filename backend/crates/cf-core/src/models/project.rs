//! Project entity - a fundable initiative that collects reviews.

use crate::{CoreError, ProjectAttributes, Result as CoreResult, format_currency};

use chrono::{DateTime, SubsecRound, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A persisted project. Only ever constructed from attributes that passed
/// validation, so `target_amount` is always present.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    /// What kind of help the project is after (e.g. "Partnership")
    pub looking_for: String,
    pub target_amount: f64,
    pub teams: String,
    pub github_link: String,
    pub web_url: String,
    /// Path or file name of the project's cover image
    pub image_file: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Project {
    /// Validate `attributes` and build a new project with a fresh id.
    #[track_caller]
    pub fn create(attributes: ProjectAttributes) -> CoreResult<Self> {
        let errors = attributes.validate();
        if !errors.is_empty() {
            return Err(CoreError::validation(errors));
        }

        // Whole seconds, matching what storage keeps
        let now = Utc::now().trunc_subsecs(0);
        Ok(Self {
            id: Uuid::new_v4(),
            name: attributes.name,
            description: attributes.description,
            looking_for: attributes.looking_for,
            target_amount: attributes.target_amount.unwrap_or_default(),
            teams: attributes.teams,
            github_link: attributes.github_link,
            web_url: attributes.web_url,
            image_file: attributes.image_file,
            created_at: now,
            updated_at: now,
        })
    }

    /// Replace this project's fields with `attributes`.
    ///
    /// On validation failure `self` is left exactly as it was.
    #[track_caller]
    pub fn apply(&mut self, attributes: ProjectAttributes) -> CoreResult<()> {
        let errors = attributes.validate();
        if !errors.is_empty() {
            return Err(CoreError::validation(errors));
        }

        self.name = attributes.name;
        self.description = attributes.description;
        self.looking_for = attributes.looking_for;
        self.target_amount = attributes.target_amount.unwrap_or_default();
        self.teams = attributes.teams;
        self.github_link = attributes.github_link;
        self.web_url = attributes.web_url;
        self.image_file = attributes.image_file;
        self.updated_at = Utc::now().trunc_subsecs(0);

        Ok(())
    }

    /// Target amount as shown to users, e.g. "$700,000.00"
    pub fn target_amount_display(&self) -> String {
        format_currency(self.target_amount)
    }
}
