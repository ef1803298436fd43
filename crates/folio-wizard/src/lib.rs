//! Step wizard for collecting portfolio data.
//!
//! This crate owns the five-step wizard state machine, the in-memory model the
//! steps fill in (personal info, skills, projects, images, feature flags), and
//! the finalization that turns that model into an immutable [`PortfolioRecord`]
//! for the site emitter.

pub mod image;
pub mod profile;
pub mod project;
pub mod record;
pub mod skills;
pub mod step;
pub mod wizard;

pub use image::{ImageError, ImageRef};
pub use profile::{Profile, ProfileError, ProfileProject, ProfileSkill};
pub use project::{ProjectDraft, ProjectField, ProjectId, ProjectList, ProjectRecord};
pub use record::{Features, PersonalField, PersonalInfo, PortfolioRecord};
pub use skills::{SkillLevel, SkillRecord, SkillSet};
pub use step::Step;
pub use wizard::{GenerationState, Wizard, WizardError};
