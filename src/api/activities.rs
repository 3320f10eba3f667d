// src/api/activities.rs

use std::sync::Arc;

use chrono::NaiveDate;
use tokio::sync::Mutex;
use uuid::Uuid;

use crate::{
    api::latency::Latency,
    common::error::AppError,
    models::activity::{
        Activity, ActivityKind, ActivityOutcome, ActivityStatus, CreateActivityPayload,
        UpdateActivityPayload,
    },
};

#[derive(Clone)]
pub struct ActivitiesApi {
    activities: Arc<Mutex<Vec<Activity>>>,
    latency: Latency,
}

impl ActivitiesApi {
    pub fn new(latency: Latency) -> Self {
        Self {
            activities: Arc::new(Mutex::new(seed_activities())),
            latency,
        }
    }

    pub async fn get_activities(&self) -> Result<Vec<Activity>, AppError> {
        self.latency.base_delay().await;
        let activities = self.activities.lock().await;
        Ok(activities.clone())
    }

    pub async fn get_activity(&self, id: Uuid) -> Result<Activity, AppError> {
        self.latency.quick_delay().await;
        let activities = self.activities.lock().await;
        activities
            .iter()
            .find(|a| a.id == id)
            .cloned()
            .ok_or(AppError::ActivityNotFound)
    }

    /// Cria com id fresco e coloca na FRENTE da lista.
    pub async fn create_activity(
        &self,
        payload: CreateActivityPayload,
    ) -> Result<Activity, AppError> {
        self.latency.base_delay().await;
        let activity = payload.into_activity(Uuid::new_v4());

        let mut activities = self.activities.lock().await;
        activities.insert(0, activity.clone());

        Ok(activity)
    }

    pub async fn update_activity(
        &self,
        id: Uuid,
        updates: UpdateActivityPayload,
    ) -> Result<Activity, AppError> {
        self.latency.base_delay().await;
        let mut activities = self.activities.lock().await;

        let activity = activities
            .iter_mut()
            .find(|a| a.id == id)
            .ok_or(AppError::ActivityNotFound)?;

        updates.apply_to(activity);
        Ok(activity.clone())
    }

    pub async fn delete_activity(&self, id: Uuid) -> Result<(), AppError> {
        self.latency.base_delay().await;
        let mut activities = self.activities.lock().await;

        let index = activities
            .iter()
            .position(|a| a.id == id)
            .ok_or(AppError::ActivityNotFound)?;

        activities.remove(index);
        Ok(())
    }
}

// --- FIXTURES ---

fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").expect("data fixa inválida na fixture")
}

fn seed_activities() -> Vec<Activity> {
    vec![
        Activity {
            id: Uuid::new_v4(),
            kind: ActivityKind::Call,
            title: "Follow-up call with Sarah Johnson".to_string(),
            contact: "Sarah Johnson".to_string(),
            company: "TechCorp Solutions".to_string(),
            date: date("2024-01-15"),
            time: "10:30 AM".to_string(),
            duration: Some("25 min".to_string()),
            status: ActivityStatus::Completed,
            notes: "Discussed implementation timeline and budget approval process.".to_string(),
            outcome: Some(ActivityOutcome::Positive),
            follow_up_required: true,
            follow_up_date: Some(date("2024-01-18")),
            participants: vec!["Sarah Johnson".to_string(), "John Doe".to_string()],
            tags: vec!["Follow-up".to_string(), "Implementation".to_string()],
            created_by: "John Doe".to_string(),
            created_date: date("2024-01-15"),
        },
        Activity {
            id: Uuid::new_v4(),
            kind: ActivityKind::Email,
            title: "Proposal sent to Mike Chen".to_string(),
            contact: "Mike Chen".to_string(),
            company: "Innovate Labs".to_string(),
            date: date("2024-01-15"),
            time: "2:15 PM".to_string(),
            duration: None,
            status: ActivityStatus::Pending,
            notes: "Sent detailed proposal with pricing options and implementation plan."
                .to_string(),
            outcome: Some(ActivityOutcome::Neutral),
            follow_up_required: false,
            follow_up_date: None,
            participants: vec!["Mike Chen".to_string()],
            tags: vec!["Proposal".to_string(), "Pricing".to_string()],
            created_by: "Jane Smith".to_string(),
            created_date: date("2024-01-15"),
        },
    ]
}
