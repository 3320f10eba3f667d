// src/models/activity.rs

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

// --- ENUMS ---

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityKind {
    Call,
    Email,
    Meeting,
    Video,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityStatus {
    Completed,
    Pending,
    Missed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityOutcome {
    Positive,
    Neutral,
    Negative,
}

// --- ATIVIDADE ---

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Activity {
    pub id: Uuid,

    #[serde(rename = "type")]
    pub kind: ActivityKind,

    pub title: String,
    pub contact: String,
    pub company: String,

    pub date: NaiveDate,
    // Hora de exibição ("10:30 AM"), mantida como string
    pub time: String,
    // "25 min"; e-mails não têm duração
    pub duration: Option<String>,

    pub status: ActivityStatus,
    pub notes: String,
    pub outcome: Option<ActivityOutcome>,

    pub follow_up_required: bool,
    pub follow_up_date: Option<NaiveDate>,

    pub participants: Vec<String>,
    pub tags: Vec<String>,
    pub created_by: String,
    pub created_date: NaiveDate,
}

// --- PAYLOADS ---

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateActivityPayload {
    #[serde(rename = "type")]
    pub kind: ActivityKind,

    #[validate(length(min = 1, message = "required"))]
    pub title: String,

    pub contact: String,
    pub company: String,
    pub date: NaiveDate,
    pub time: String,
    pub duration: Option<String>,
    pub status: ActivityStatus,

    #[serde(default)]
    pub notes: String,
    pub outcome: Option<ActivityOutcome>,

    #[serde(default)]
    pub follow_up_required: bool,
    pub follow_up_date: Option<NaiveDate>,

    #[serde(default)]
    pub participants: Vec<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    pub created_by: String,
    pub created_date: NaiveDate,
}

impl CreateActivityPayload {
    pub fn into_activity(self, id: Uuid) -> Activity {
        Activity {
            id,
            kind: self.kind,
            title: self.title,
            contact: self.contact,
            company: self.company,
            date: self.date,
            time: self.time,
            duration: self.duration,
            status: self.status,
            notes: self.notes,
            outcome: self.outcome,
            follow_up_required: self.follow_up_required,
            follow_up_date: self.follow_up_date,
            participants: self.participants,
            tags: self.tags,
            created_by: self.created_by,
            created_date: self.created_date,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateActivityPayload {
    #[serde(rename = "type")]
    pub kind: Option<ActivityKind>,

    #[validate(length(min = 1, message = "required"))]
    pub title: Option<String>,

    pub contact: Option<String>,
    pub company: Option<String>,
    pub date: Option<NaiveDate>,
    pub time: Option<String>,
    pub duration: Option<Option<String>>,
    pub status: Option<ActivityStatus>,
    pub notes: Option<String>,
    pub outcome: Option<Option<ActivityOutcome>>,
    pub follow_up_required: Option<bool>,
    pub follow_up_date: Option<Option<NaiveDate>>,
    pub participants: Option<Vec<String>>,
    pub tags: Option<Vec<String>>,
}

impl UpdateActivityPayload {
    pub fn apply_to(&self, activity: &mut Activity) {
        if let Some(v) = self.kind {
            activity.kind = v;
        }
        if let Some(v) = &self.title {
            activity.title = v.clone();
        }
        if let Some(v) = &self.contact {
            activity.contact = v.clone();
        }
        if let Some(v) = &self.company {
            activity.company = v.clone();
        }
        if let Some(v) = self.date {
            activity.date = v;
        }
        if let Some(v) = &self.time {
            activity.time = v.clone();
        }
        if let Some(v) = &self.duration {
            activity.duration = v.clone();
        }
        if let Some(v) = self.status {
            activity.status = v;
        }
        if let Some(v) = &self.notes {
            activity.notes = v.clone();
        }
        if let Some(v) = self.outcome {
            activity.outcome = v;
        }
        if let Some(v) = self.follow_up_required {
            activity.follow_up_required = v;
        }
        if let Some(v) = self.follow_up_date {
            activity.follow_up_date = v;
        }
        if let Some(v) = &self.participants {
            activity.participants = v.clone();
        }
        if let Some(v) = &self.tags {
            activity.tags = v.clone();
        }
    }
}
