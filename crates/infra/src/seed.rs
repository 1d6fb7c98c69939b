//! Default activity catalog seeding

use mergington_core::ActivityStore;
use mergington_domain::{Activity, Result};
use tracing::info;

/// The Mergington High School activity catalog created on first start.
pub fn default_activities() -> Vec<Activity> {
    [
        (
            "Chess Club",
            "Learn strategies and compete in chess tournaments",
            "Fridays, 3:30 PM - 5:00 PM",
            12,
        ),
        (
            "Programming Class",
            "Learn programming fundamentals and build software projects",
            "Tuesdays and Thursdays, 3:30 PM - 4:30 PM",
            20,
        ),
        (
            "Gym Class",
            "Physical education and sports activities",
            "Mondays, Wednesdays, Fridays, 2:00 PM - 3:00 PM",
            30,
        ),
        (
            "Soccer Team",
            "Join the school soccer team and compete in matches",
            "Tuesdays and Thursdays, 4:00 PM - 5:30 PM",
            22,
        ),
        (
            "Basketball Team",
            "Practice and play basketball with the school team",
            "Wednesdays and Fridays, 3:30 PM - 5:00 PM",
            15,
        ),
        (
            "Art Club",
            "Explore your creativity through painting and drawing",
            "Thursdays, 3:30 PM - 5:00 PM",
            15,
        ),
        (
            "Drama Club",
            "Act, direct, and produce plays and performances",
            "Mondays and Wednesdays, 4:00 PM - 5:30 PM",
            20,
        ),
        (
            "Math Club",
            "Solve challenging problems and participate in math competitions",
            "Tuesdays, 3:30 PM - 4:30 PM",
            10,
        ),
        (
            "Debate Team",
            "Develop public speaking and argumentation skills",
            "Fridays, 4:00 PM - 5:30 PM",
            12,
        ),
    ]
    .into_iter()
    .map(|(name, description, schedule, max_participants)| Activity {
        name: name.to_string(),
        description: description.to_string(),
        schedule: schedule.to_string(),
        max_participants,
    })
    .collect()
}

/// Create each activity that does not exist yet.
///
/// Existing rows are left as they are, so running this on every start is
/// safe. Returns how many activities were offered to the store.
pub async fn seed_activities(store: &dyn ActivityStore, activities: Vec<Activity>) -> Result<usize> {
    let offered = activities.len();
    for activity in activities {
        store.create_activity(activity).await?;
    }
    info!(offered, "activity catalog seeded");
    Ok(offered)
}
