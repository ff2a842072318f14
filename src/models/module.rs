use serde::{Deserialize, Serialize};

/// Availability of a skill module to the learner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ModuleStatus {
    Locked,
    Available,
    InProgress,
    Completed,
}

impl ModuleStatus {
    pub fn label(self) -> &'static str {
        match self {
            ModuleStatus::Locked => "Locked",
            ModuleStatus::Available => "Available",
            ModuleStatus::InProgress => "In Progress",
            ModuleStatus::Completed => "Completed",
        }
    }

    /// Label of the action a learner can take on a module in this state.
    pub fn action(self) -> Option<&'static str> {
        match self {
            ModuleStatus::Locked => None,
            ModuleStatus::Available => Some("Start"),
            ModuleStatus::InProgress => Some("Continue"),
            ModuleStatus::Completed => Some("Review"),
        }
    }

    pub fn is_unlocked(self) -> bool {
        !matches!(self, ModuleStatus::Locked)
    }
}

/// A unit of skill-assessment content gated by its predecessor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Module {
    pub id: u32,
    pub title: String,
    pub status: ModuleStatus,
    #[serde(default, alias = "progress")]
    pub progress_percent: u8,
    #[serde(default)]
    pub score: Option<u8>,
}

impl Module {
    pub fn new(id: u32, title: impl Into<String>, status: ModuleStatus) -> Self {
        let progress_percent = if status == ModuleStatus::Completed { 100 } else { 0 };
        Self {
            id,
            title: title.into(),
            status,
            progress_percent,
            score: None,
        }
    }

    pub fn locked(id: u32, title: impl Into<String>) -> Self {
        Self::new(id, title, ModuleStatus::Locked)
    }

    pub fn is_completed(&self) -> bool {
        self.status == ModuleStatus::Completed
    }
}
