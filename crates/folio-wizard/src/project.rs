//! Project drafts with stable identities.
//!
//! Each draft carries a [`ProjectId`] that never changes, so removing a
//! project only shifts display positions. Field edits are addressed by id.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use uuid::Uuid;

use crate::image::ImageRef;

/// Opaque, stable project identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ProjectId(Uuid);

impl ProjectId {
    fn generate() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for ProjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Editable text fields of a project.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectField {
    Name,
    Technologies,
    Description,
    LiveUrl,
    SourceUrl,
}

impl FromStr for ProjectField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "name" => Ok(ProjectField::Name),
            "tech" | "technologies" => Ok(ProjectField::Technologies),
            "desc" | "description" => Ok(ProjectField::Description),
            "live" | "live_url" => Ok(ProjectField::LiveUrl),
            "source" | "source_url" => Ok(ProjectField::SourceUrl),
            other => Err(format!("Unknown project field: {}", other)),
        }
    }
}

/// A project as it is being edited in the wizard.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectDraft {
    id: ProjectId,
    pub name: String,
    pub technologies: String,
    pub description: String,
    pub live_url: String,
    pub source_url: String,
    pub image: Option<ImageRef>,
}

impl ProjectDraft {
    fn new() -> Self {
        Self {
            id: ProjectId::generate(),
            name: String::new(),
            technologies: String::new(),
            description: String::new(),
            live_url: String::new(),
            source_url: String::new(),
            image: None,
        }
    }

    pub fn id(&self) -> ProjectId {
        self.id
    }

    pub fn field(&self, field: ProjectField) -> &str {
        match field {
            ProjectField::Name => &self.name,
            ProjectField::Technologies => &self.technologies,
            ProjectField::Description => &self.description,
            ProjectField::LiveUrl => &self.live_url,
            ProjectField::SourceUrl => &self.source_url,
        }
    }

    pub fn field_mut(&mut self, field: ProjectField) -> &mut String {
        match field {
            ProjectField::Name => &mut self.name,
            ProjectField::Technologies => &mut self.technologies,
            ProjectField::Description => &mut self.description,
            ProjectField::LiveUrl => &mut self.live_url,
            ProjectField::SourceUrl => &mut self.source_url,
        }
    }

    /// Both a name and a description are filled in.
    pub fn is_complete(&self) -> bool {
        !self.name.trim().is_empty() && !self.description.trim().is_empty()
    }

    /// Nothing has been entered yet.
    pub fn is_blank(&self) -> bool {
        self.image.is_none()
            && [
                &self.name,
                &self.technologies,
                &self.description,
                &self.live_url,
                &self.source_url,
            ]
            .iter()
            .all(|s| s.trim().is_empty())
    }

    /// Trimmed snapshot, or `None` if the draft has no name.
    pub fn finalize(&self) -> Option<ProjectRecord> {
        if self.name.trim().is_empty() {
            return None;
        }

        Some(ProjectRecord {
            name: self.name.trim().to_string(),
            technologies: self.technologies.trim().to_string(),
            description: self.description.trim().to_string(),
            live_url: self.live_url.trim().to_string(),
            source_url: self.source_url.trim().to_string(),
            image: self.image.clone(),
        })
    }
}

/// A finalized project.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectRecord {
    pub name: String,
    pub technologies: String,
    pub description: String,
    pub live_url: String,
    pub source_url: String,
    pub image: Option<ImageRef>,
}

impl ProjectRecord {
    pub fn has_image(&self) -> bool {
        self.image.is_some()
    }
}

/// Ordered list of project drafts.
#[derive(Debug, Clone, Default)]
pub struct ProjectList {
    drafts: Vec<ProjectDraft>,
}

impl ProjectList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an empty draft and return its position.
    pub fn add(&mut self) -> usize {
        self.drafts.push(ProjectDraft::new());
        self.drafts.len() - 1
    }

    /// Remove the draft at `index`. Later drafts move up one position.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range.
    pub fn remove(&mut self, index: usize) -> ProjectDraft {
        assert!(
            index < self.drafts.len(),
            "project index {} out of range ({} projects)",
            index,
            self.drafts.len()
        );
        self.drafts.remove(index)
    }

    pub fn get(&self, id: ProjectId) -> Option<&ProjectDraft> {
        self.drafts.iter().find(|d| d.id == id)
    }

    pub fn get_mut(&mut self, id: ProjectId) -> Option<&mut ProjectDraft> {
        self.drafts.iter_mut().find(|d| d.id == id)
    }

    /// Current display position of a draft.
    pub fn position_of(&self, id: ProjectId) -> Option<usize> {
        self.drafts.iter().position(|d| d.id == id)
    }

    pub fn as_slice(&self) -> &[ProjectDraft] {
        &self.drafts
    }

    pub fn len(&self) -> usize {
        self.drafts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.drafts.is_empty()
    }

    /// Finalized records for every complete draft, in display order.
    pub fn finalize(&self) -> Vec<ProjectRecord> {
        self.drafts.iter().filter_map(ProjectDraft::finalize).collect()
    }
}
