use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::models::{Activity, ParticipantRoster};

const DEFAULT_SEED: &str = include_str!("../../seed/activities.json");

pub type Catalog = BTreeMap<String, Activity>;

#[derive(Debug, Error)]
pub enum SeedError {
    #[error("failed to read seed file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid seed json: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("seed contains an activity with an empty name")]
    EmptyActivityName,
    #[error("seed lists {email} twice for '{activity}'")]
    DuplicateParticipant { activity: String, email: String },
}

#[derive(Debug, Deserialize)]
struct SeedActivity {
    description: String,
    schedule: String,
    max_participants: u32,
    #[serde(default)]
    participants: Vec<String>,
}

/// The catalog compiled into the binary.
pub fn default_catalog() -> Result<Catalog, SeedError> {
    parse_catalog(DEFAULT_SEED)
}

pub fn load_catalog(path: &Path) -> Result<Catalog, SeedError> {
    let raw = std::fs::read_to_string(path).map_err(|source| SeedError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_catalog(&raw)
}

pub fn parse_catalog(raw: &str) -> Result<Catalog, SeedError> {
    let entries: BTreeMap<String, SeedActivity> = serde_json::from_str(raw)?;

    let mut catalog = Catalog::new();
    for (name, entry) in entries {
        if name.trim().is_empty() {
            return Err(SeedError::EmptyActivityName);
        }
        let mut participants = ParticipantRoster::new();
        for email in &entry.participants {
            if !participants.insert(email) {
                return Err(SeedError::DuplicateParticipant {
                    activity: name,
                    email: email.clone(),
                });
            }
        }
        catalog.insert(
            name,
            Activity {
                description: entry.description,
                schedule: entry.schedule,
                max_participants: entry.max_participants,
                participants,
            },
        );
    }
    Ok(catalog)
}
