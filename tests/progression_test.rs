use jobconnect::models::{Module, ModuleStatus};
use jobconnect::progress::{ModuleTrack, propagate_unlocks};

fn chain() -> Vec<Module> {
    vec![
        Module::new(1, "One", ModuleStatus::Completed),
        Module::new(2, "Two", ModuleStatus::InProgress),
        Module::locked(3, "Three"),
        Module::locked(4, "Four"),
    ]
}

fn statuses(modules: &[Module]) -> Vec<ModuleStatus> {
    modules.iter().map(|m| m.status).collect()
}

#[test]
fn unlocking_is_idempotent() {
    let once = propagate_unlocks(&chain());
    let twice = propagate_unlocks(&once);
    assert_eq!(once, twice);
}

#[test]
fn unlocked_modules_stay_unlocked() {
    let before = chain();
    let after = propagate_unlocks(&before);
    for (b, a) in before.iter().zip(&after) {
        if b.status.is_unlocked() {
            assert_eq!(b.status, a.status);
        }
    }
}

#[test]
fn completing_modules_in_order_unlocks_the_whole_chain() {
    let mut track = ModuleTrack::new(chain());

    assert_eq!(track.complete(2, 90).unwrap(), vec![3]);
    track.start(3).unwrap();
    assert_eq!(track.complete(3, 70).unwrap(), vec![4]);
    assert_eq!(
        statuses(track.modules()),
        vec![
            ModuleStatus::Completed,
            ModuleStatus::Completed,
            ModuleStatus::Completed,
            ModuleStatus::Available,
        ]
    );
    assert_eq!(track.completed_count(), 3);
}

#[test]
fn locked_module_cannot_be_started() {
    let mut track = ModuleTrack::new(chain());
    assert!(track.start(4).is_err());
    assert_eq!(track.get(4).map(|m| m.status), Some(ModuleStatus::Locked));
}
