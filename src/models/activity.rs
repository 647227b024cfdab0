use serde::Serialize;

use super::ParticipantRoster;

// One catalog entry. The name is the map key in the roster store.
#[derive(Debug, Clone)]
pub struct Activity {
    pub description: String,
    pub schedule: String,
    pub max_participants: u32, // informational, not enforced
    pub participants: ParticipantRoster,
}

impl Activity {
    pub fn view(&self) -> ActivityView {
        ActivityView {
            description: self.description.clone(),
            schedule: self.schedule.clone(),
            max_participants: self.max_participants,
            participants: self.participants.to_vec(),
        }
    }
}

/// Snapshot of an activity as returned by `GET /activities`.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ActivityView {
    pub description: String,
    pub schedule: String,
    pub max_participants: u32,
    pub participants: Vec<String>,
}
