use std::collections::BTreeMap;

use serde::Serialize;
use tracing::{info, warn};

use crate::database::{RosterError, RosterStore};
use crate::models::ActivityView;

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct RosterReceipt {
    pub message: String,
}

pub fn list_activities(store: &RosterStore) -> BTreeMap<String, ActivityView> {
    store.list_activities()
}

pub fn signup(
    store: &RosterStore,
    activity: &str,
    email: &str,
) -> Result<RosterReceipt, RosterError> {
    match store.signup(activity, email) {
        Ok(()) => {
            info!(activity = %activity, email = %email, "roster_signup_ok");
            Ok(RosterReceipt {
                message: format!("Signed up {} for {}", email, activity),
            })
        }
        Err(e) => {
            warn!(activity = %activity, email = %email, error = %e, "roster_signup_rejected");
            Err(e)
        }
    }
}

pub fn remove_participant(
    store: &RosterStore,
    activity: &str,
    email: &str,
) -> Result<RosterReceipt, RosterError> {
    match store.remove_participant(activity, email) {
        Ok(()) => {
            info!(activity = %activity, email = %email, "roster_remove_ok");
            Ok(RosterReceipt {
                message: format!("Removed {} from {}", email, activity),
            })
        }
        Err(e) => {
            warn!(activity = %activity, email = %email, error = %e, "roster_remove_rejected");
            Err(e)
        }
    }
}
