//! Personal info, feature flags, and the finalized portfolio record.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::image::ImageRef;
use crate::project::ProjectRecord;
use crate::skills::SkillRecord;
use crate::wizard::WizardError;

/// Personal and contact details.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PersonalInfo {
    pub name: String,
    pub title: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub website: String,
    pub about: String,
    pub linkedin: String,
    pub github: String,
    pub twitter: String,
}

/// Addressable personal info fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PersonalField {
    Name,
    Title,
    Email,
    Phone,
    Location,
    Website,
    About,
    Linkedin,
    Github,
    Twitter,
}

impl PersonalField {
    /// Fields that must be filled before leaving the personal info step.
    pub const REQUIRED: [PersonalField; 3] =
        [PersonalField::Name, PersonalField::Title, PersonalField::About];

    pub fn as_str(self) -> &'static str {
        match self {
            PersonalField::Name => "name",
            PersonalField::Title => "title",
            PersonalField::Email => "email",
            PersonalField::Phone => "phone",
            PersonalField::Location => "location",
            PersonalField::Website => "website",
            PersonalField::About => "about",
            PersonalField::Linkedin => "linkedin",
            PersonalField::Github => "github",
            PersonalField::Twitter => "twitter",
        }
    }
}

impl FromStr for PersonalField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let field = match s.trim().to_lowercase().as_str() {
            "name" | "fullname" => PersonalField::Name,
            "title" => PersonalField::Title,
            "email" => PersonalField::Email,
            "phone" => PersonalField::Phone,
            "location" => PersonalField::Location,
            "website" => PersonalField::Website,
            "about" => PersonalField::About,
            "linkedin" => PersonalField::Linkedin,
            "github" => PersonalField::Github,
            "twitter" => PersonalField::Twitter,
            other => return Err(format!("Unknown personal field: {}", other)),
        };
        Ok(field)
    }
}

impl PersonalInfo {
    pub fn field(&self, field: PersonalField) -> &str {
        match field {
            PersonalField::Name => &self.name,
            PersonalField::Title => &self.title,
            PersonalField::Email => &self.email,
            PersonalField::Phone => &self.phone,
            PersonalField::Location => &self.location,
            PersonalField::Website => &self.website,
            PersonalField::About => &self.about,
            PersonalField::Linkedin => &self.linkedin,
            PersonalField::Github => &self.github,
            PersonalField::Twitter => &self.twitter,
        }
    }

    pub fn field_mut(&mut self, field: PersonalField) -> &mut String {
        match field {
            PersonalField::Name => &mut self.name,
            PersonalField::Title => &mut self.title,
            PersonalField::Email => &mut self.email,
            PersonalField::Phone => &mut self.phone,
            PersonalField::Location => &mut self.location,
            PersonalField::Website => &mut self.website,
            PersonalField::About => &mut self.about,
            PersonalField::Linkedin => &mut self.linkedin,
            PersonalField::Github => &mut self.github,
            PersonalField::Twitter => &mut self.twitter,
        }
    }

    /// Names of required fields that are blank after trimming.
    pub fn missing_required(&self) -> Vec<&'static str> {
        PersonalField::REQUIRED
            .into_iter()
            .filter(|f| self.field(*f).trim().is_empty())
            .map(PersonalField::as_str)
            .collect()
    }

    /// Copy with every field trimmed.
    pub fn trimmed(&self) -> Self {
        Self {
            name: self.name.trim().to_string(),
            title: self.title.trim().to_string(),
            email: self.email.trim().to_string(),
            phone: self.phone.trim().to_string(),
            location: self.location.trim().to_string(),
            website: self.website.trim().to_string(),
            about: self.about.trim().to_string(),
            linkedin: self.linkedin.trim().to_string(),
            github: self.github.trim().to_string(),
            twitter: self.twitter.trim().to_string(),
        }
    }
}

/// Optional sections of the generated site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Features {
    /// Contact form section and nav entry
    pub include_contact: bool,

    /// "Download Resume" link in the about section
    pub include_resume: bool,

    /// Collected but not rendered
    pub include_blog: bool,
}

impl Default for Features {
    fn default() -> Self {
        Self {
            include_contact: true,
            include_resume: false,
            include_blog: false,
        }
    }
}

/// Immutable snapshot of a completed wizard, handed to the site emitter.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PortfolioRecord {
    /// Selected theme identifier, possibly empty
    pub theme_id: String,

    /// Trimmed personal info
    pub personal: PersonalInfo,

    /// Profile photo
    pub photo: Option<ImageRef>,

    /// Skills in display order
    pub skills: Vec<SkillRecord>,

    /// Complete projects in display order
    pub projects: Vec<ProjectRecord>,

    /// Optional sections
    pub features: Features,
}

impl PortfolioRecord {
    /// Check the record can be emitted.
    pub fn validate(&self) -> Result<(), WizardError> {
        let missing = self.personal.missing_required();
        if !missing.is_empty() {
            return Err(WizardError::MissingRequiredFields(missing));
        }

        if self.projects.is_empty() {
            return Err(WizardError::NoProjects);
        }

        Ok(())
    }
}
