//! Activity and participant types

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::errors::{MergingtonError, Result};

/// An extracurricular activity as stored.
///
/// `name` is the primary key and never changes once the row exists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Activity {
    pub name: String,
    pub description: String,
    /// Free text, e.g. "Fridays, 3:30 PM - 5:00 PM". Not parsed.
    pub schedule: String,
    pub max_participants: u32,
}

impl Activity {
    /// Build an activity, rejecting an empty name or zero capacity.
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        schedule: impl Into<String>,
        max_participants: u32,
    ) -> Result<Self> {
        let activity = Self {
            name: name.into(),
            description: description.into(),
            schedule: schedule.into(),
            max_participants,
        };
        activity.validate()?;
        Ok(activity)
    }

    /// Check the invariants a stored activity must satisfy.
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(MergingtonError::InvalidInput("activity name must not be empty".into()));
        }
        if self.max_participants == 0 {
            return Err(MergingtonError::InvalidInput(format!(
                "activity '{}' must allow at least one participant",
                self.name
            )));
        }
        Ok(())
    }
}

/// An activity together with its current participants, as listed to callers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityDetails {
    pub description: String,
    pub schedule: String,
    pub max_participants: u32,
    /// Participant emails in signup order.
    pub participants: Vec<String>,
}

impl ActivityDetails {
    /// Details for an activity nobody has joined yet.
    pub fn empty(activity: &Activity) -> Self {
        Self {
            description: activity.description.clone(),
            schedule: activity.schedule.clone(),
            max_participants: activity.max_participants,
            participants: Vec::new(),
        }
    }

    pub fn is_registered(&self, email: &str) -> bool {
        self.participants.iter().any(|p| p == email)
    }

    /// True once the participant count has reached capacity.
    pub fn is_full(&self) -> bool {
        self.participants.len() >= self.max_participants as usize
    }

    pub fn spots_left(&self) -> usize {
        (self.max_participants as usize).saturating_sub(self.participants.len())
    }
}

/// Every activity keyed by name.
///
/// Serializes as a JSON object `{ "<name>": { description, schedule,
/// max_participants, participants } }`.
pub type ActivityCatalog = BTreeMap<String, ActivityDetails>;
