use std::collections::HashSet;

/// Participant emails for one activity.
///
/// Membership is unique; iteration follows insertion order so the list
/// view stays stable between reads.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParticipantRoster {
    order: Vec<String>,
    members: HashSet<String>,
}

impl ParticipantRoster {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, email: &str) -> bool {
        self.members.contains(email)
    }

    /// Returns false (and leaves the roster untouched) when already present.
    pub fn insert(&mut self, email: &str) -> bool {
        if !self.members.insert(email.to_string()) {
            return false;
        }
        self.order.push(email.to_string());
        true
    }

    /// Returns false when the email was not a participant.
    pub fn remove(&mut self, email: &str) -> bool {
        if !self.members.remove(email) {
            return false;
        }
        self.order.retain(|p| p != email);
        true
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }

    pub fn to_vec(&self) -> Vec<String> {
        self.order.clone()
    }
}
