//! In-memory `ActivityStore` for service tests
//!
//! Mirrors the SQLite adapter's contract (insert-or-ignore activities,
//! primary-key and foreign-key failures on participants) without a database.

use std::sync::Mutex;

use async_trait::async_trait;
use mergington_core::ActivityStore;
use mergington_domain::{
    Activity, ActivityCatalog, ActivityDetails, MergingtonError, Result as DomainResult,
};

/// One `(activity, email)` row, the in-memory stand-in for a participants
/// table row.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Participant {
    activity_name: String,
    email: String,
}

impl Participant {
    fn new(activity_name: &str, email: &str) -> Self {
        Self { activity_name: activity_name.to_string(), email: email.to_string() }
    }
}

#[derive(Default)]
pub struct InMemoryActivityStore {
    activities: Mutex<Vec<Activity>>,
    participants: Mutex<Vec<Participant>>,
    /// When set, `list_activities` keeps returning this catalog, simulating a
    /// reader whose snapshot went stale before its write.
    frozen: Mutex<Option<ActivityCatalog>>,
}

impl InMemoryActivityStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the store with one activity.
    pub fn with_activity(self, name: &str, max_participants: u32) -> Self {
        let activity =
            Activity::new(name, format!("{name} description"), "Mondays", max_participants)
                .expect("test activity should be valid");
        self.activities.lock().unwrap().push(activity);
        self
    }

    /// Pin the catalog returned by `list_activities` to its current state.
    pub fn freeze_snapshot(&self) {
        let catalog = self.build_catalog();
        *self.frozen.lock().unwrap() = Some(catalog);
    }

    pub fn participants_of(&self, activity_name: &str) -> Vec<String> {
        self.participants
            .lock()
            .unwrap()
            .iter()
            .filter(|p| p.activity_name == activity_name)
            .map(|p| p.email.clone())
            .collect()
    }

    pub fn participant_rows(&self) -> usize {
        self.participants.lock().unwrap().len()
    }

    fn build_catalog(&self) -> ActivityCatalog {
        let activities = self.activities.lock().unwrap();
        let participants = self.participants.lock().unwrap();

        activities
            .iter()
            .map(|activity| {
                let mut details = ActivityDetails::empty(activity);
                details.participants = participants
                    .iter()
                    .filter(|p| p.activity_name == activity.name)
                    .map(|p| p.email.clone())
                    .collect();
                (activity.name.clone(), details)
            })
            .collect()
    }
}

#[async_trait]
impl ActivityStore for InMemoryActivityStore {
    async fn init_schema(&self) -> DomainResult<()> {
        Ok(())
    }

    async fn list_activities(&self) -> DomainResult<ActivityCatalog> {
        if let Some(frozen) = self.frozen.lock().unwrap().clone() {
            return Ok(frozen);
        }
        Ok(self.build_catalog())
    }

    async fn create_activity(&self, activity: Activity) -> DomainResult<()> {
        activity.validate()?;
        let mut activities = self.activities.lock().unwrap();
        if !activities.iter().any(|a| a.name == activity.name) {
            activities.push(activity);
        }
        Ok(())
    }

    async fn add_participant(&self, activity_name: &str, email: &str) -> DomainResult<()> {
        if !self.activities.lock().unwrap().iter().any(|a| a.name == activity_name) {
            return Err(MergingtonError::ConstraintViolation(
                "foreign key constraint violation".into(),
            ));
        }

        let row = Participant::new(activity_name, email);
        let mut participants = self.participants.lock().unwrap();
        if participants.contains(&row) {
            return Err(MergingtonError::ConstraintViolation(
                "primary key constraint violation".into(),
            ));
        }
        participants.push(row);
        Ok(())
    }

    async fn remove_participant(&self, activity_name: &str, email: &str) -> DomainResult<()> {
        self.participants
            .lock()
            .unwrap()
            .retain(|p| !(p.activity_name == activity_name && p.email == email));
        Ok(())
    }
}
