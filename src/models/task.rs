// src/models/task.rs

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

// --- ENUMS ---

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskPriority {
    High,
    Medium,
    Low,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TaskStatus {
    Pending,
    InProgress,
    Completed,
}

// --- TAREFA ---

// Invariante: `completed` e `status` andam juntos. O toggle força
// completed=true => status Completed, completed=false => status Pending.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: Uuid,

    pub title: String,
    pub description: String,
    pub assignee: String,

    // Referências por nome (exibição), podem não existir
    pub contact: Option<String>,
    pub company: Option<String>,

    pub due_date: NaiveDate,
    pub priority: TaskPriority,
    pub status: TaskStatus,
    pub completed: bool,

    pub created_date: NaiveDate,
    pub created_by: String,

    // Estimativas de exibição ("2 hours", "45 min")
    pub estimated_time: Option<String>,
    pub actual_time: Option<String>,

    pub tags: Vec<String>,
    pub related_deal: Option<String>,

    // 0 a 100
    pub progress: Option<u8>,
}

impl Task {
    /// Inverte o flag de conclusão mantendo `status` consistente.
    pub fn toggle_completed(&mut self) {
        self.completed = !self.completed;
        self.status = if self.completed {
            TaskStatus::Completed
        } else {
            TaskStatus::Pending
        };
    }
}

// --- PAYLOADS ---

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateTaskPayload {
    #[validate(length(min = 1, message = "required"))]
    pub title: String,

    #[serde(default)]
    pub description: String,
    pub assignee: String,
    pub contact: Option<String>,
    pub company: Option<String>,
    pub due_date: NaiveDate,
    pub priority: TaskPriority,
    pub status: TaskStatus,

    #[serde(default)]
    pub completed: bool,

    pub created_date: NaiveDate,
    pub created_by: String,
    pub estimated_time: Option<String>,
    pub actual_time: Option<String>,

    #[serde(default)]
    pub tags: Vec<String>,
    pub related_deal: Option<String>,

    #[validate(range(max = 100, message = "invalid_progress"))]
    pub progress: Option<u8>,
}

impl CreateTaskPayload {
    pub fn into_task(self, id: Uuid) -> Task {
        Task {
            id,
            title: self.title,
            description: self.description,
            assignee: self.assignee,
            contact: self.contact,
            company: self.company,
            due_date: self.due_date,
            priority: self.priority,
            status: self.status,
            completed: self.completed,
            created_date: self.created_date,
            created_by: self.created_by,
            estimated_time: self.estimated_time,
            actual_time: self.actual_time,
            tags: self.tags,
            related_deal: self.related_deal,
            progress: self.progress,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTaskPayload {
    #[validate(length(min = 1, message = "required"))]
    pub title: Option<String>,

    pub description: Option<String>,
    pub assignee: Option<String>,
    pub contact: Option<Option<String>>,
    pub company: Option<Option<String>>,
    pub due_date: Option<NaiveDate>,
    pub priority: Option<TaskPriority>,
    pub estimated_time: Option<Option<String>>,
    pub actual_time: Option<Option<String>>,
    pub tags: Option<Vec<String>>,
    pub related_deal: Option<Option<String>>,

    #[validate(range(max = 100, message = "invalid_progress"))]
    pub progress: Option<u8>,
}

impl UpdateTaskPayload {
    // `completed`/`status` não entram no patch: a transição é via toggle,
    // senão os dois campos saem de sincronia.
    pub fn apply_to(&self, task: &mut Task) {
        if let Some(v) = &self.title {
            task.title = v.clone();
        }
        if let Some(v) = &self.description {
            task.description = v.clone();
        }
        if let Some(v) = &self.assignee {
            task.assignee = v.clone();
        }
        if let Some(v) = &self.contact {
            task.contact = v.clone();
        }
        if let Some(v) = &self.company {
            task.company = v.clone();
        }
        if let Some(v) = self.due_date {
            task.due_date = v;
        }
        if let Some(v) = self.priority {
            task.priority = v;
        }
        if let Some(v) = &self.estimated_time {
            task.estimated_time = v.clone();
        }
        if let Some(v) = &self.actual_time {
            task.actual_time = v.clone();
        }
        if let Some(v) = &self.tags {
            task.tags = v.clone();
        }
        if let Some(v) = &self.related_deal {
            task.related_deal = v.clone();
        }
        if let Some(v) = self.progress {
            task.progress = Some(v);
        }
    }
}
