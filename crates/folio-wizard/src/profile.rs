//! Profile files: a wizard session written down as YAML or JSON.
//!
//! A profile is replayed through [`Wizard`] the same way a user would fill the
//! steps in, so every validation the interactive flow applies also applies here.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::image::{ImageError, ImageRef};
use crate::record::{Features, PersonalInfo};
use crate::skills::SkillLevel;
use crate::step::Step;
use crate::wizard::{Wizard, WizardError};

/// Parsed profile document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Profile {
    /// Theme identifier
    pub theme: String,

    /// Personal and contact details
    pub personal: PersonalInfo,

    /// Profile photo path, relative to the profile file
    pub photo: Option<PathBuf>,

    /// Skills in display order
    pub skills: Vec<ProfileSkill>,

    /// Projects in display order
    pub projects: Vec<ProfileProject>,

    /// Optional sections
    pub features: Features,
}

/// A skill entry in a profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileSkill {
    pub name: String,

    #[serde(default)]
    pub level: SkillLevel,
}

/// A project entry in a profile.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfileProject {
    pub name: String,
    pub technologies: String,
    pub description: String,
    pub live_url: String,
    pub source_url: String,

    /// Image path, relative to the profile file
    pub image: Option<PathBuf>,
}

/// Errors that can occur when loading or applying a profile.
#[derive(Debug, thiserror::Error)]
pub enum ProfileError {
    #[error("Failed to read profile {path}: {message}")]
    Read { path: String, message: String },

    #[error("Invalid profile: {0}")]
    Parse(String),

    #[error("Unsupported profile format: {0} (expected .yaml, .yml or .json)")]
    UnsupportedFormat(String),

    #[error(transparent)]
    Image(#[from] ImageError),

    #[error(transparent)]
    Wizard(#[from] WizardError),
}

impl Profile {
    /// Load a profile, choosing the parser from the file extension.
    pub fn load(path: &Path) -> Result<Self, ProfileError> {
        let content = fs::read_to_string(path).map_err(|e| ProfileError::Read {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;

        let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");
        let profile = match ext {
            "yaml" | "yml" => Self::from_yaml(&content)?,
            "json" => Self::from_json(&content)?,
            other => return Err(ProfileError::UnsupportedFormat(other.to_string())),
        };

        tracing::info!("Loaded profile from {}", path.display());
        Ok(profile)
    }

    pub fn from_yaml(source: &str) -> Result<Self, ProfileError> {
        serde_yaml::from_str(source).map_err(|e| ProfileError::Parse(e.to_string()))
    }

    pub fn from_json(source: &str) -> Result<Self, ProfileError> {
        serde_json::from_str(source).map_err(|e| ProfileError::Parse(e.to_string()))
    }

    /// Replay this profile into `wizard`, ending on the review step.
    ///
    /// Relative image paths are resolved against `base_dir`. Projects fill
    /// blank drafts first, then new drafts are added.
    pub fn apply(&self, base_dir: &Path, wizard: &mut Wizard) -> Result<(), ProfileError> {
        if !self.theme.is_empty() {
            wizard.select_theme(&self.theme);
        }

        *wizard.personal_mut() = self.personal.clone();
        *wizard.features_mut() = self.features;

        if let Some(photo) = &self.photo {
            wizard.set_photo(Some(ImageRef::from_file(&base_dir.join(photo))?));
        }

        for skill in &self.skills {
            wizard.add_skill(&skill.name, skill.level)?;
        }

        for project in &self.projects {
            let image = project
                .image
                .as_ref()
                .map(|p| ImageRef::from_file(&base_dir.join(p)))
                .transpose()?;

            let id = match wizard.projects().iter().find(|d| d.is_blank()) {
                Some(draft) => draft.id(),
                None => {
                    let position = wizard.add_project();
                    wizard.projects()[position].id()
                }
            };

            if let Some(draft) = wizard.project_mut(id) {
                draft.name = project.name.clone();
                draft.technologies = project.technologies.clone();
                draft.description = project.description.clone();
                draft.live_url = project.live_url.clone();
                draft.source_url = project.source_url.clone();
                draft.image = image;
            }
        }

        while wizard.step() != Step::Review {
            wizard.advance()?;
        }

        Ok(())
    }
}
