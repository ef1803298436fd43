//! Skill list with case-insensitive uniqueness.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::wizard::WizardError;

/// Proficiency level attached to a skill.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SkillLevel {
    Beginner,
    #[default]
    Intermediate,
    Advanced,
    Expert,
}

impl SkillLevel {
    /// All levels, lowest first.
    pub const ALL: [SkillLevel; 4] = [
        SkillLevel::Beginner,
        SkillLevel::Intermediate,
        SkillLevel::Advanced,
        SkillLevel::Expert,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            SkillLevel::Beginner => "Beginner",
            SkillLevel::Intermediate => "Intermediate",
            SkillLevel::Advanced => "Advanced",
            SkillLevel::Expert => "Expert",
        }
    }
}

impl fmt::Display for SkillLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a skill level name is not recognized.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown skill level: {0} (expected Beginner, Intermediate, Advanced or Expert)")]
pub struct ParseSkillLevelError(pub String);

impl FromStr for SkillLevel {
    type Err = ParseSkillLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|level| level.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ParseSkillLevelError(wanted.to_string()))
    }
}

/// A named skill with a level.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillRecord {
    pub name: String,
    pub level: SkillLevel,
}

/// Ordered skill list. Insertion order is display order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SkillSet {
    skills: Vec<SkillRecord>,
}

impl SkillSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a skill.
    ///
    /// The name is trimmed. Blank names and names that already exist
    /// (ignoring case) are rejected and leave the list untouched.
    pub fn add(&mut self, name: &str, level: SkillLevel) -> Result<&SkillRecord, WizardError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(WizardError::EmptySkillName);
        }

        if self.contains(name) {
            return Err(WizardError::DuplicateSkill(name.to_string()));
        }

        self.skills.push(SkillRecord {
            name: name.to_string(),
            level,
        });

        Ok(&self.skills[self.skills.len() - 1])
    }

    /// Remove the skill at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range.
    pub fn remove(&mut self, index: usize) -> SkillRecord {
        assert!(
            index < self.skills.len(),
            "skill index {} out of range ({} skills)",
            index,
            self.skills.len()
        );
        self.skills.remove(index)
    }

    /// Whether a skill with this name exists (case-insensitive, trimmed).
    pub fn contains(&self, name: &str) -> bool {
        let wanted = name.trim().to_lowercase();
        self.skills.iter().any(|s| s.name.to_lowercase() == wanted)
    }

    pub fn as_slice(&self) -> &[SkillRecord] {
        &self.skills
    }

    pub fn len(&self) -> usize {
        self.skills.len()
    }

    pub fn is_empty(&self) -> bool {
        self.skills.is_empty()
    }
}
