//! Wizard steps.

use std::fmt;

/// A position in the wizard. Numbered 1 through 5.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Step {
    /// Theme selection
    Theme = 1,
    /// Personal information
    Personal = 2,
    /// Skills
    Skills = 3,
    /// Projects
    Projects = 4,
    /// Review and generate
    Review = 5,
}

impl Step {
    /// All steps in order.
    pub const ALL: [Step; 5] = [
        Step::Theme,
        Step::Personal,
        Step::Skills,
        Step::Projects,
        Step::Review,
    ];

    /// 1-based step number.
    pub fn index(self) -> u8 {
        self as u8
    }

    /// Look up a step by its 1-based number.
    pub fn from_index(index: u8) -> Option<Self> {
        Self::ALL.get(usize::from(index).checked_sub(1)?).copied()
    }

    /// The following step, if any.
    pub fn next(self) -> Option<Self> {
        Self::from_index(self.index() + 1)
    }

    /// The preceding step, if any.
    pub fn prev(self) -> Option<Self> {
        Self::from_index(self.index() - 1)
    }

    /// Human-readable step title.
    pub fn title(self) -> &'static str {
        match self {
            Step::Theme => "Choose a theme",
            Step::Personal => "Personal information",
            Step::Skills => "Skills",
            Step::Projects => "Projects",
            Step::Review => "Review & generate",
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/5 {}", self.index(), self.title())
    }
}
