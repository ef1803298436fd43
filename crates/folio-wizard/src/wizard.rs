//! Wizard controller.

use crate::image::ImageRef;
use crate::project::{ProjectDraft, ProjectId, ProjectList};
use crate::record::{Features, PersonalInfo, PortfolioRecord};
use crate::skills::{SkillLevel, SkillRecord, SkillSet};
use crate::step::Step;

/// User-recoverable wizard errors. None of them change wizard state.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WizardError {
    #[error("Please fill in all required fields ({})", .0.join(", "))]
    MissingRequiredFields(Vec<&'static str>),

    #[error("This skill already exists: {0}")]
    DuplicateSkill(String),

    #[error("Skill name cannot be empty")]
    EmptySkillName,

    #[error("Please add at least one project with a name")]
    NoProjects,

    #[error("Generation is only available from the review step (currently at step {0})")]
    NotAtReview(Step),

    #[error("A portfolio is already being generated")]
    GenerationInProgress,
}

/// Progress of finalize-and-package on the review step.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum GenerationState {
    #[default]
    Ready,
    InProgress,
    Succeeded,
    Failed { message: String },
}

/// The wizard controller.
///
/// Holds the canonical in-memory model. UI layers call these methods on
/// every change and read state back for display.
#[derive(Debug, Clone)]
pub struct Wizard {
    step: Step,
    theme_id: String,
    personal: PersonalInfo,
    skills: SkillSet,
    projects: ProjectList,
    photo: Option<ImageRef>,
    features: Features,
    generation: GenerationState,
}

impl Default for Wizard {
    fn default() -> Self {
        Self::new()
    }
}

impl Wizard {
    /// Create a wizard at step 1 with one empty project.
    pub fn new() -> Self {
        let mut projects = ProjectList::new();
        projects.add();

        Self {
            step: Step::Theme,
            theme_id: String::new(),
            personal: PersonalInfo::default(),
            skills: SkillSet::new(),
            projects,
            photo: None,
            features: Features::default(),
            generation: GenerationState::Ready,
        }
    }

    pub fn step(&self) -> Step {
        self.step
    }

    /// Move to the next step.
    ///
    /// Leaving the personal info step requires name, title, and about. At
    /// the review step this does nothing.
    pub fn advance(&mut self) -> Result<Step, WizardError> {
        let Some(next) = self.step.next() else {
            return Ok(self.step);
        };

        if self.step == Step::Personal {
            self.validate_personal_info()?;
        }

        tracing::debug!("Step {} completed", self.step.index());
        self.step = next;
        Ok(next)
    }

    /// Move to the previous step. No validation; does nothing at step 1.
    pub fn retreat(&mut self) -> Step {
        if let Some(prev) = self.step.prev() {
            tracing::debug!("Back to step {}", prev.index());
            self.step = prev;
        }
        self.step
    }

    pub fn validate_personal_info(&self) -> Result<(), WizardError> {
        let missing = self.personal.missing_required();
        if missing.is_empty() {
            Ok(())
        } else {
            Err(WizardError::MissingRequiredFields(missing))
        }
    }

    pub fn theme_id(&self) -> &str {
        &self.theme_id
    }

    pub fn select_theme(&mut self, theme_id: impl Into<String>) {
        self.theme_id = theme_id.into().trim().to_string();
        tracing::debug!("Selected theme '{}'", self.theme_id);
    }

    pub fn personal(&self) -> &PersonalInfo {
        &self.personal
    }

    pub fn personal_mut(&mut self) -> &mut PersonalInfo {
        &mut self.personal
    }

    pub fn features(&self) -> Features {
        self.features
    }

    pub fn features_mut(&mut self) -> &mut Features {
        &mut self.features
    }

    pub fn photo(&self) -> Option<&ImageRef> {
        self.photo.as_ref()
    }

    pub fn set_photo(&mut self, photo: Option<ImageRef>) {
        self.photo = photo;
    }

    pub fn skills(&self) -> &[SkillRecord] {
        self.skills.as_slice()
    }

    /// Append a skill unless one with the same name exists.
    pub fn add_skill(&mut self, name: &str, level: SkillLevel) -> Result<(), WizardError> {
        let skill = self.skills.add(name, level)?;
        tracing::debug!("Added skill {} ({})", skill.name, skill.level);
        Ok(())
    }

    /// Remove the skill at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range.
    pub fn remove_skill(&mut self, index: usize) -> SkillRecord {
        self.skills.remove(index)
    }

    pub fn projects(&self) -> &[ProjectDraft] {
        self.projects.as_slice()
    }

    /// Append an empty project and return its position.
    pub fn add_project(&mut self) -> usize {
        let position = self.projects.add();
        tracing::debug!("Added project {}", position + 1);
        position
    }

    /// Remove the project at `index`; later projects move up one position.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range.
    pub fn remove_project(&mut self, index: usize) -> ProjectDraft {
        self.projects.remove(index)
    }

    pub fn project(&self, id: ProjectId) -> Option<&ProjectDraft> {
        self.projects.get(id)
    }

    pub fn project_mut(&mut self, id: ProjectId) -> Option<&mut ProjectDraft> {
        self.projects.get_mut(id)
    }

    pub fn position_of(&self, id: ProjectId) -> Option<usize> {
        self.projects.position_of(id)
    }

    /// Snapshot the current model. Projects without a name are left out.
    pub fn collect_record(&self) -> PortfolioRecord {
        PortfolioRecord {
            theme_id: self.theme_id.clone(),
            personal: self.personal.trimmed(),
            photo: self.photo.clone(),
            skills: self.skills.as_slice().to_vec(),
            projects: self.projects.finalize(),
            features: self.features,
        }
    }

    pub fn validate_record(&self, record: &PortfolioRecord) -> Result<(), WizardError> {
        record.validate()
    }

    /// Collect and validate in one go.
    pub fn finalize(&self) -> Result<PortfolioRecord, WizardError> {
        let record = self.collect_record();
        self.validate_record(&record)?;
        Ok(record)
    }

    /// Record for regenerating the preview from the review step.
    pub fn preview_record(&self) -> Result<PortfolioRecord, WizardError> {
        self.require_review()?;
        self.finalize()
    }

    pub fn generation(&self) -> &GenerationState {
        &self.generation
    }

    /// Start finalize-and-package.
    ///
    /// On success the wizard is marked in progress and the record to package
    /// is returned. On error nothing changes.
    pub fn begin_generation(&mut self) -> Result<PortfolioRecord, WizardError> {
        self.require_review()?;

        if self.generation == GenerationState::InProgress {
            return Err(WizardError::GenerationInProgress);
        }

        let record = self.finalize()?;
        self.generation = GenerationState::InProgress;
        Ok(record)
    }

    /// Finish finalize-and-package with its outcome.
    pub fn finish_generation(&mut self, outcome: Result<(), String>) {
        self.generation = match outcome {
            Ok(()) => GenerationState::Succeeded,
            Err(message) => {
                tracing::warn!("Portfolio generation failed: {}", message);
                GenerationState::Failed { message }
            }
        };
    }

    /// Return to the pre-generation display.
    pub fn reset_generation(&mut self) {
        if self.generation != GenerationState::InProgress {
            self.generation = GenerationState::Ready;
        }
    }

    fn require_review(&self) -> Result<(), WizardError> {
        if self.step == Step::Review {
            Ok(())
        } else {
            Err(WizardError::NotAtReview(self.step))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn fill_personal(wizard: &mut Wizard) {
        let p = wizard.personal_mut();
        p.name = "Grace Hopper".to_string();
        p.title = "Rear Admiral".to_string();
        p.about = "Compilers.".to_string();
    }

    fn fill_project(wizard: &mut Wizard, index: usize, name: &str, desc: &str) -> ProjectId {
        let id = wizard.projects()[index].id();
        let draft = wizard.project_mut(id).unwrap();
        draft.name = name.to_string();
        draft.description = desc.to_string();
        id
    }

    fn at_review() -> Wizard {
        let mut wizard = Wizard::new();
        fill_personal(&mut wizard);
        fill_project(&mut wizard, 0, "COBOL", "Business language");
        while wizard.step() != Step::Review {
            wizard.advance().unwrap();
        }
        wizard
    }

    #[test]
    fn starts_at_theme_step_with_one_project() {
        let wizard = Wizard::new();

        assert_eq!(wizard.step(), Step::Theme);
        assert_eq!(wizard.projects().len(), 1);
        assert!(wizard.projects()[0].is_blank());
        assert_eq!(wizard.generation(), &GenerationState::Ready);
    }

    #[test]
    fn retreat_from_first_step_is_noop() {
        let mut wizard = Wizard::new();

        assert_eq!(wizard.retreat(), Step::Theme);
        assert_eq!(wizard.step(), Step::Theme);
    }

    #[test]
    fn advance_from_personal_requires_all_fields() {
        let blanks: [fn(&mut PersonalInfo); 3] = [
            |p| p.name = " ".to_string(),
            |p| p.title = String::new(),
            |p| p.about = "\n".to_string(),
        ];

        for blank in blanks {
            let mut wizard = Wizard::new();
            wizard.advance().unwrap();
            fill_personal(&mut wizard);
            blank(wizard.personal_mut());

            assert!(matches!(
                wizard.advance(),
                Err(WizardError::MissingRequiredFields(_))
            ));
            assert_eq!(wizard.step(), Step::Personal);
        }
    }

    #[test]
    fn advance_from_personal_with_fields_moves_to_skills() {
        let mut wizard = Wizard::new();
        wizard.advance().unwrap();
        fill_personal(&mut wizard);

        assert_eq!(wizard.advance().unwrap(), Step::Skills);
        assert_eq!(wizard.step().index(), 3);
    }

    #[test]
    fn theme_step_is_not_gated() {
        let mut wizard = Wizard::new();

        assert_eq!(wizard.advance().unwrap(), Step::Personal);
    }

    #[test]
    fn advance_stops_at_review() {
        let mut wizard = at_review();

        assert_eq!(wizard.advance().unwrap(), Step::Review);
        assert_eq!(wizard.step(), Step::Review);
    }

    #[test]
    fn retreat_skips_validation() {
        let mut wizard = at_review();
        wizard.personal_mut().name.clear();

        assert_eq!(wizard.retreat(), Step::Projects);
        assert_eq!(wizard.retreat(), Step::Skills);
        assert_eq!(wizard.retreat(), Step::Personal);
        assert_eq!(wizard.retreat(), Step::Theme);
    }

    #[test]
    fn duplicate_skill_leaves_list_unchanged() {
        let mut wizard = Wizard::new();
        wizard.add_skill("Rust", SkillLevel::Expert).unwrap();
        let before = wizard.skills().to_vec();

        let err = wizard.add_skill("RUST", SkillLevel::Beginner).unwrap_err();

        assert_eq!(err, WizardError::DuplicateSkill("RUST".to_string()));
        assert_eq!(wizard.skills(), before.as_slice());
    }

    #[test]
    fn remove_project_keeps_bound_fields() {
        let mut wizard = Wizard::new();
        wizard.add_project();
        wizard.add_project();
        wizard.add_project();
        for i in 0..4 {
            let id = fill_project(&mut wizard, i, &format!("P{}", i), &format!("d{}", i));
            wizard.project_mut(id).unwrap().technologies = format!("t{}", i);
        }
        let before: Vec<ProjectDraft> = wizard.projects().to_vec();

        wizard.remove_project(1);

        let after = wizard.projects();
        assert_eq!(after.len(), 3);
        assert_eq!(after[0], before[0]);
        assert_eq!(after[1], before[2]);
        assert_eq!(after[2], before[3]);
        for (pos, draft) in after.iter().enumerate() {
            assert_eq!(wizard.position_of(draft.id()), Some(pos));
        }
    }

    #[test]
    fn collect_record_filters_unnamed_projects() {
        let mut wizard = Wizard::new();
        wizard.add_project();
        fill_project(&mut wizard, 0, "", "x");
        fill_project(&mut wizard, 1, "Y", "z");

        let record = wizard.collect_record();

        assert_eq!(record.projects.len(), 1);
        assert_eq!(record.projects[0].name, "Y");
    }

    #[test]
    fn collect_record_trims_personal_info() {
        let mut wizard = Wizard::new();
        wizard.personal_mut().name = "  Grace  ".to_string();
        wizard.personal_mut().twitter = " https://x.example/grace ".to_string();

        let record = wizard.collect_record();

        assert_eq!(record.personal.name, "Grace");
        assert_eq!(record.personal.twitter, "https://x.example/grace");
    }

    #[test]
    fn name_only_project_is_published() {
        let mut wizard = Wizard::new();
        fill_personal(&mut wizard);
        fill_project(&mut wizard, 0, "Note G", "");

        let record = wizard.collect_record();
        assert_eq!(record.projects.len(), 1);
        assert_eq!(record.projects[0].name, "Note G");
        assert_eq!(record.projects[0].description, "");

        let record = wizard.finalize().unwrap();
        assert_eq!(record.projects.len(), 1);
    }

    #[test]
    fn finalize_requires_a_project() {
        let mut wizard = Wizard::new();
        fill_personal(&mut wizard);

        assert_eq!(wizard.finalize().unwrap_err(), WizardError::NoProjects);
    }

    #[test]
    fn generation_requires_review_step() {
        let mut wizard = Wizard::new();

        assert_eq!(
            wizard.begin_generation().unwrap_err(),
            WizardError::NotAtReview(Step::Theme)
        );
        assert_eq!(wizard.generation(), &GenerationState::Ready);
    }

    #[test]
    fn generation_lifecycle() {
        let mut wizard = at_review();

        let record = wizard.begin_generation().unwrap();
        assert_eq!(record.personal.name, "Grace Hopper");
        assert_eq!(wizard.generation(), &GenerationState::InProgress);
        assert_eq!(
            wizard.begin_generation().unwrap_err(),
            WizardError::GenerationInProgress
        );

        wizard.finish_generation(Err("disk full".to_string()));
        assert_eq!(
            wizard.generation(),
            &GenerationState::Failed {
                message: "disk full".to_string()
            }
        );
        assert_eq!(wizard.step(), Step::Review);

        wizard.begin_generation().unwrap();
        wizard.finish_generation(Ok(()));
        assert_eq!(wizard.generation(), &GenerationState::Succeeded);

        wizard.reset_generation();
        assert_eq!(wizard.generation(), &GenerationState::Ready);
    }

    #[test]
    fn failed_validation_does_not_start_generation() {
        let mut wizard = at_review();
        let id = wizard.projects()[0].id();
        wizard.project_mut(id).unwrap().name.clear();

        assert_eq!(wizard.begin_generation().unwrap_err(), WizardError::NoProjects);
        assert_eq!(wizard.generation(), &GenerationState::Ready);
    }

    #[test]
    fn error_messages_name_missing_fields() {
        let err = WizardError::MissingRequiredFields(vec!["name", "about"]);

        assert_eq!(
            err.to_string(),
            "Please fill in all required fields (name, about)"
        );
    }
}
