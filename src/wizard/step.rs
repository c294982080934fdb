//! Wizard steps and the transition table.

use std::fmt;

/// One stage of the linear wizard, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Step {
    #[default]
    BusinessInfo,
    Strategy,
    Keywords,
    AdCreative,
    Review,
}

/// A user action that may move the wizard between steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    AdvanceToStrategy,
    AdvanceToKeywords,
    AdvanceToCreative,
    Finalize,
    Back,
    Reset,
}

/// How a step renders in the progress bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepStatus {
    Completed,
    Active,
    Pending,
}

impl Step {
    /// All steps in wizard order.
    pub const ALL: [Self; 5] =
        [Self::BusinessInfo, Self::Strategy, Self::Keywords, Self::AdCreative, Self::Review];

    /// Zero-based position in the wizard.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Progress bar label.
    pub fn label(self) -> &'static str {
        match self {
            Self::BusinessInfo => "Business Info",
            Self::Strategy => "Strategy",
            Self::Keywords => "Keywords",
            Self::AdCreative => "Ads",
            Self::Review => "Review",
        }
    }

    /// Message shown while the generation call leaving this step runs.
    pub fn loading_message(self) -> &'static str {
        match self {
            Self::BusinessInfo => "Analyzing your business...",
            Self::Strategy => "Researching high-intent keywords...",
            Self::Keywords => "Writing persuasive ad copy...",
            Self::AdCreative | Self::Review => "Processing...",
        }
    }

    pub fn next(self) -> Option<Self> {
        Self::ALL.get(self.index() + 1).copied()
    }

    pub fn previous(self) -> Option<Self> {
        self.index().checked_sub(1).map(|i| Self::ALL[i])
    }

    /// Progress status of this step relative to the current one.
    pub fn status(self, current: Self) -> StepStatus {
        if current > self {
            StepStatus::Completed
        } else if current == self {
            StepStatus::Active
        } else {
            StepStatus::Pending
        }
    }

    /// Apply an action, returning the step it leads to.
    ///
    /// Forward actions have a fixed target; whether they may run is decided by
    /// the controller's data guards. `Back` is unavailable on the first step
    /// and on the review step.
    pub fn apply(self, action: Action) -> Option<Self> {
        match action {
            Action::AdvanceToStrategy => Some(Self::Strategy),
            Action::AdvanceToKeywords => Some(Self::Keywords),
            Action::AdvanceToCreative => Some(Self::AdCreative),
            Action::Finalize => Some(Self::Review),
            Action::Reset => Some(Self::BusinessInfo),
            Action::Back => match self {
                Self::BusinessInfo | Self::Review => None,
                other => other.previous(),
            },
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl Action {
    /// Forward action offered on a step, if any.
    pub fn forward_from(step: Step) -> Option<Self> {
        match step {
            Step::BusinessInfo => Some(Self::AdvanceToStrategy),
            Step::Strategy => Some(Self::AdvanceToKeywords),
            Step::Keywords => Some(Self::AdvanceToCreative),
            Step::AdCreative => Some(Self::Finalize),
            Step::Review => None,
        }
    }

    /// Whether this action makes a generation call.
    pub fn generates(self) -> bool {
        matches!(self, Self::AdvanceToStrategy | Self::AdvanceToKeywords | Self::AdvanceToCreative)
    }
}
