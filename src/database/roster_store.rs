use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use thiserror::Error;

use crate::models::{Activity, ActivityView};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RosterError {
    #[error("activity '{activity}' not found")]
    ActivityNotFound { activity: String },
    #[error("{email} is already signed up for '{activity}'")]
    ParticipantAlreadyExists { activity: String, email: String },
    #[error("{email} is not a participant of '{activity}'")]
    ParticipantNotFound { activity: String, email: String },
}

/// In-memory roster of every activity, keyed by name.
///
/// The set of activities is fixed at construction. Each activity has its
/// own lock, so the check-then-mutate step of `signup` and
/// `remove_participant` is atomic per activity while unrelated
/// activities never contend.
#[derive(Debug, Default)]
pub struct RosterStore {
    activities: BTreeMap<String, Mutex<Activity>>,
}

impl RosterStore {
    pub fn new(catalog: impl IntoIterator<Item = (String, Activity)>) -> Self {
        let activities = catalog
            .into_iter()
            .map(|(name, activity)| (name, Mutex::new(activity)))
            .collect();
        Self { activities }
    }

    /// Snapshot of all activities in name order.
    pub fn list_activities(&self) -> BTreeMap<String, ActivityView> {
        self.activities
            .iter()
            .map(|(name, slot)| (name.clone(), lock(slot).view()))
            .collect()
    }

    pub fn activity(&self, name: &str) -> Option<ActivityView> {
        self.activities.get(name).map(|slot| lock(slot).view())
    }

    pub fn signup(&self, activity: &str, email: &str) -> Result<(), RosterError> {
        let slot = self.slot(activity)?;
        let mut guard = lock(slot);
        if !guard.participants.insert(email) {
            return Err(RosterError::ParticipantAlreadyExists {
                activity: activity.to_string(),
                email: email.to_string(),
            });
        }
        Ok(())
    }

    pub fn remove_participant(&self, activity: &str, email: &str) -> Result<(), RosterError> {
        let slot = self.slot(activity)?;
        let mut guard = lock(slot);
        if !guard.participants.remove(email) {
            return Err(RosterError::ParticipantNotFound {
                activity: activity.to_string(),
                email: email.to_string(),
            });
        }
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.activities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.activities.is_empty()
    }

    fn slot(&self, activity: &str) -> Result<&Mutex<Activity>, RosterError> {
        self.activities
            .get(activity)
            .ok_or_else(|| RosterError::ActivityNotFound {
                activity: activity.to_string(),
            })
    }
}

// A panic while holding the lock cannot leave the roster half-updated:
// every mutation is a single insert or remove.
fn lock(slot: &Mutex<Activity>) -> MutexGuard<'_, Activity> {
    slot.lock().unwrap_or_else(PoisonError::into_inner)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ParticipantRoster;

    fn activity(participants: &[&str]) -> Activity {
        let mut roster = ParticipantRoster::new();
        for p in participants {
            roster.insert(p);
        }
        Activity {
            description: "desc".to_string(),
            schedule: "Fridays".to_string(),
            max_participants: 2,
            participants: roster,
        }
    }

    fn store() -> RosterStore {
        RosterStore::new([
            (
                "Chess Club".to_string(),
                activity(&["michael@mergington.edu"]),
            ),
            ("Swimming Club".to_string(), activity(&[])),
        ])
    }

    #[test]
    fn list_includes_every_activity_with_participants() {
        let store = store();
        let all = store.list_activities();

        assert_eq!(all.len(), 2);
        assert_eq!(
            all["Chess Club"].participants,
            vec!["michael@mergington.edu".to_string()]
        );
        assert!(all["Swimming Club"].participants.is_empty());
    }

    #[test]
    fn signup_adds_then_rejects_repeat() {
        let store = store();
        store
            .signup("Swimming Club", "tester@mergington.edu")
            .unwrap();

        let err = store
            .signup("Swimming Club", "tester@mergington.edu")
            .unwrap_err();
        assert_eq!(
            err,
            RosterError::ParticipantAlreadyExists {
                activity: "Swimming Club".to_string(),
                email: "tester@mergington.edu".to_string(),
            }
        );
        assert_eq!(
            store.activity("Swimming Club").unwrap().participants,
            vec!["tester@mergington.edu".to_string()]
        );
    }

    #[test]
    fn signup_unknown_activity() {
        let store = store();
        let err = store.signup("NoSuchActivity", "a@b.c").unwrap_err();
        assert!(matches!(err, RosterError::ActivityNotFound { .. }));
    }

    #[test]
    fn capacity_is_not_enforced() {
        let store = store();
        store.signup("Chess Club", "a@mergington.edu").unwrap();
        store.signup("Chess Club", "b@mergington.edu").unwrap();
        assert_eq!(store.activity("Chess Club").unwrap().participants.len(), 3);
    }

    #[test]
    fn same_email_in_many_activities() {
        let store = store();
        store
            .signup("Swimming Club", "michael@mergington.edu")
            .unwrap();
        let all = store.list_activities();
        assert!(all["Chess Club"]
            .participants
            .contains(&"michael@mergington.edu".to_string()));
        assert!(all["Swimming Club"]
            .participants
            .contains(&"michael@mergington.edu".to_string()));
    }

    #[test]
    fn remove_distinguishes_missing_activity_from_missing_participant() {
        let store = store();

        let err = store
            .remove_participant("NoSuchActivity", "michael@mergington.edu")
            .unwrap_err();
        assert!(matches!(err, RosterError::ActivityNotFound { .. }));

        let err = store
            .remove_participant("Swimming Club", "notfound@mergington.edu")
            .unwrap_err();
        assert!(matches!(err, RosterError::ParticipantNotFound { .. }));
        assert!(store
            .activity("Swimming Club")
            .unwrap()
            .participants
            .is_empty());
    }

    #[test]
    fn remove_existing_participant() {
        let store = store();
        store
            .remove_participant("Chess Club", "michael@mergington.edu")
            .unwrap();
        assert!(store.activity("Chess Club").unwrap().participants.is_empty());
    }
}
