//! Progressive unlocking of skill modules.
//!
//! Modules form a chain: completing one makes the next available. A module
//! never goes back to locked once it has been unlocked.

use tracing::{debug, info};

use crate::error::ProgressError;
use crate::models::{Module, ModuleStatus};

/// One forward unlock pass over `modules`.
///
/// A locked module becomes available when the module before it is
/// completed. Modules unlocked by this pass are not completed themselves,
/// so a single call advances each chain by at most one step. Running the
/// pass again without any status change returns the same list.
pub fn propagate_unlocks(modules: &[Module]) -> Vec<Module> {
    let mut updated = modules.to_vec();
    for i in 1..updated.len() {
        if updated[i - 1].status == ModuleStatus::Completed
            && updated[i].status == ModuleStatus::Locked
        {
            updated[i].status = ModuleStatus::Available;
            debug!(module = updated[i].id, "module unlocked");
        }
    }
    updated
}

/// A learner's module list plus the operations that move it forward.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleTrack {
    modules: Vec<Module>,
}

impl ModuleTrack {
    /// Builds a track, making sure the first module is reachable and that
    /// anything already earned is unlocked.
    pub fn new(mut modules: Vec<Module>) -> Self {
        if let Some(first) = modules.first_mut() {
            if first.status == ModuleStatus::Locked {
                first.status = ModuleStatus::Available;
            }
        }
        Self {
            modules: propagate_unlocks(&modules),
        }
    }

    pub fn modules(&self) -> &[Module] {
        &self.modules
    }

    pub fn get(&self, id: u32) -> Option<&Module> {
        self.modules.iter().find(|m| m.id == id)
    }

    fn get_mut(&mut self, id: u32) -> Result<&mut Module, ProgressError> {
        self.modules
            .iter_mut()
            .find(|m| m.id == id)
            .ok_or(ProgressError::UnknownModule(id))
    }

    /// Opens a module for work. Completed modules stay completed.
    pub fn start(&mut self, id: u32) -> Result<(), ProgressError> {
        let module = self.get_mut(id)?;
        match module.status {
            ModuleStatus::Locked => Err(ProgressError::Locked(id)),
            ModuleStatus::Available => {
                module.status = ModuleStatus::InProgress;
                info!(module = id, "module started");
                Ok(())
            }
            ModuleStatus::InProgress | ModuleStatus::Completed => Ok(()),
        }
    }

    pub fn record_progress(&mut self, id: u32, percent: u8) -> Result<(), ProgressError> {
        if percent > 100 {
            return Err(ProgressError::PercentOutOfRange(percent));
        }
        let module = self.get_mut(id)?;
        match module.status {
            ModuleStatus::InProgress => {
                module.progress_percent = percent;
                Ok(())
            }
            ModuleStatus::Locked => Err(ProgressError::Locked(id)),
            ModuleStatus::Available | ModuleStatus::Completed => {
                Err(ProgressError::NotStarted(id))
            }
        }
    }

    /// Marks a module completed with `score` and unlocks its successor.
    /// Completing an already completed module keeps the higher score.
    ///
    /// Returns the ids of modules that became available as a result.
    pub fn complete(&mut self, id: u32, score: u8) -> Result<Vec<u32>, ProgressError> {
        if score > 100 {
            return Err(ProgressError::PercentOutOfRange(score));
        }
        let module = self.get_mut(id)?;
        if module.status == ModuleStatus::Locked {
            return Err(ProgressError::Locked(id));
        }
        let earned = match module.status {
            ModuleStatus::Completed => module.score,
            _ => None,
        };
        module.status = ModuleStatus::Completed;
        module.progress_percent = 100;
        module.score = Some(earned.map_or(score, |best| best.max(score)));
        info!(module = id, score, "module completed");

        let updated = propagate_unlocks(&self.modules);
        let unlocked: Vec<u32> = self
            .modules
            .iter()
            .zip(&updated)
            .filter(|(before, after)| before.status != after.status)
            .map(|(_, after)| after.id)
            .collect();
        for unlocked_id in &unlocked {
            info!(module = unlocked_id, "module unlocked");
        }
        self.modules = updated;
        Ok(unlocked)
    }

    pub fn completed_count(&self) -> usize {
        self.modules.iter().filter(|m| m.is_completed()).count()
    }

    /// Mean progress across all modules.
    pub fn overall_percent(&self) -> u8 {
        if self.modules.is_empty() {
            return 0;
        }
        let sum: usize = self.modules.iter().map(|m| m.progress_percent as usize).sum();
        crate::assessment::percent_of(sum, self.modules.len() * 100)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chain(statuses: &[ModuleStatus]) -> Vec<Module> {
        statuses
            .iter()
            .enumerate()
            .map(|(i, &status)| Module::new(i as u32 + 1, format!("Module {}", i + 1), status))
            .collect()
    }

    fn statuses(modules: &[Module]) -> Vec<ModuleStatus> {
        modules.iter().map(|m| m.status).collect()
    }

    use ModuleStatus::*;

    #[test]
    fn unlocks_one_step_per_pass() {
        let modules = chain(&[Completed, Locked, Locked]);
        let once = propagate_unlocks(&modules);
        assert_eq!(statuses(&once), vec![Completed, Available, Locked]);
    }

    #[test]
    fn pass_is_idempotent() {
        let modules = chain(&[Completed, Completed, Locked, Locked]);
        let once = propagate_unlocks(&modules);
        let twice = propagate_unlocks(&once);
        assert_eq!(once, twice);
        assert_eq!(statuses(&once), vec![Completed, Completed, Available, Locked]);
    }

    #[test]
    fn does_not_touch_caller_list() {
        let modules = chain(&[Completed, Locked]);
        let _ = propagate_unlocks(&modules);
        assert_eq!(modules[1].status, Locked);
    }

    #[test]
    fn in_progress_predecessor_keeps_successor_locked() {
        let modules = chain(&[InProgress, Locked]);
        assert_eq!(statuses(&propagate_unlocks(&modules)), vec![InProgress, Locked]);
    }

    #[test]
    fn track_makes_first_module_available() {
        let track = ModuleTrack::new(chain(&[Locked, Locked]));
        assert_eq!(statuses(track.modules()), vec![Available, Locked]);
    }

    #[test]
    fn completing_unlocks_successor() {
        let mut track = ModuleTrack::new(chain(&[Completed, InProgress, Locked, Locked]));
        let unlocked = track.complete(2, 90).unwrap();

        assert_eq!(unlocked, vec![3]);
        let module = track.get(2).unwrap();
        assert_eq!(module.score, Some(90));
        assert_eq!(module.progress_percent, 100);
        assert_eq!(
            statuses(track.modules()),
            vec![Completed, Completed, Available, Locked]
        );
    }

    #[test]
    fn locked_modules_cannot_start_or_complete() {
        let mut track = ModuleTrack::new(chain(&[Available, Locked]));
        assert_eq!(track.start(2), Err(ProgressError::Locked(2)));
        assert_eq!(track.complete(2, 50), Err(ProgressError::Locked(2)));
        assert_eq!(track.start(9), Err(ProgressError::UnknownModule(9)));
    }

    #[test]
    fn progress_requires_started_module() {
        let mut track = ModuleTrack::new(chain(&[Available, Locked]));
        assert_eq!(track.record_progress(1, 40), Err(ProgressError::NotStarted(1)));

        track.start(1).unwrap();
        track.record_progress(1, 40).unwrap();
        assert_eq!(track.get(1).unwrap().progress_percent, 40);
        assert_eq!(
            track.record_progress(1, 140),
            Err(ProgressError::PercentOutOfRange(140))
        );
    }

    #[test]
    fn recompleting_never_relocks() {
        let mut track = ModuleTrack::new(chain(&[Completed, Available]));
        track.complete(1, 40).unwrap();
        assert_eq!(track.get(2).unwrap().status, Available);
        assert_eq!(track.completed_count(), 1);
    }

    #[test]
    fn review_keeps_best_score() {
        let mut track = ModuleTrack::new(chain(&[Completed, Locked]));
        track.complete(1, 85).unwrap();

        assert_eq!(track.complete(1, 20).unwrap(), Vec::<u32>::new());
        assert_eq!(track.get(1).unwrap().score, Some(85));

        track.complete(1, 95).unwrap();
        assert_eq!(track.get(1).unwrap().score, Some(95));
    }

    #[test]
    fn overall_percent_averages_progress() {
        let track = ModuleTrack::new(chain(&[Completed, Available, Locked, Locked]));
        assert_eq!(track.overall_percent(), 25);
    }
}
