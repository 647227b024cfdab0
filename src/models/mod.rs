pub mod activity;
pub mod participant_roster;

pub use activity::{Activity, ActivityView};
pub use participant_roster::ParticipantRoster;
