// src/api/tasks.rs

use std::sync::Arc;

use chrono::NaiveDate;
use tokio::sync::Mutex;
use uuid::Uuid;

use crate::{
    api::latency::Latency,
    common::error::AppError,
    models::task::{CreateTaskPayload, Task, TaskPriority, TaskStatus, UpdateTaskPayload},
};

#[derive(Clone)]
pub struct TasksApi {
    tasks: Arc<Mutex<Vec<Task>>>,
    latency: Latency,
}

impl TasksApi {
    pub fn new(latency: Latency) -> Self {
        Self {
            tasks: Arc::new(Mutex::new(seed_tasks())),
            latency,
        }
    }

    pub async fn get_tasks(&self) -> Result<Vec<Task>, AppError> {
        self.latency.base_delay().await;
        let tasks = self.tasks.lock().await;
        Ok(tasks.clone())
    }

    pub async fn get_task(&self, id: Uuid) -> Result<Task, AppError> {
        self.latency.quick_delay().await;
        let tasks = self.tasks.lock().await;
        tasks
            .iter()
            .find(|t| t.id == id)
            .cloned()
            .ok_or(AppError::TaskNotFound)
    }

    /// Cria com id fresco e coloca na FRENTE da lista.
    pub async fn create_task(&self, payload: CreateTaskPayload) -> Result<Task, AppError> {
        self.latency.base_delay().await;
        let task = payload.into_task(Uuid::new_v4());

        let mut tasks = self.tasks.lock().await;
        tasks.insert(0, task.clone());

        Ok(task)
    }

    pub async fn update_task(&self, id: Uuid, updates: UpdateTaskPayload) -> Result<Task, AppError> {
        self.latency.base_delay().await;
        let mut tasks = self.tasks.lock().await;

        let task = tasks
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or(AppError::TaskNotFound)?;

        updates.apply_to(task);
        Ok(task.clone())
    }

    pub async fn delete_task(&self, id: Uuid) -> Result<(), AppError> {
        self.latency.base_delay().await;
        let mut tasks = self.tasks.lock().await;

        let index = tasks
            .iter()
            .position(|t| t.id == id)
            .ok_or(AppError::TaskNotFound)?;

        tasks.remove(index);
        Ok(())
    }

    /// Inverte `completed` e força `status` consistente (Completed/Pending).
    pub async fn toggle_task(&self, id: Uuid) -> Result<Task, AppError> {
        self.latency.quick_delay().await;
        let mut tasks = self.tasks.lock().await;

        let task = tasks
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or(AppError::TaskNotFound)?;

        task.toggle_completed();
        Ok(task.clone())
    }
}

// --- FIXTURES ---

fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").expect("data fixa inválida na fixture")
}

fn seed_tasks() -> Vec<Task> {
    vec![
        Task {
            id: Uuid::new_v4(),
            title: "Follow up with Sarah Johnson about proposal".to_string(),
            description: "Call to discuss budget approval and implementation timeline. Need to \
                          address any concerns and move forward with contract negotiation."
                .to_string(),
            assignee: "John Doe".to_string(),
            contact: Some("Sarah Johnson".to_string()),
            company: Some("TechCorp Solutions".to_string()),
            due_date: date("2024-01-16"),
            priority: TaskPriority::High,
            status: TaskStatus::InProgress,
            completed: false,
            created_date: date("2024-01-10"),
            created_by: "John Doe".to_string(),
            estimated_time: Some("2 hours".to_string()),
            actual_time: Some("1.5 hours".to_string()),
            tags: vec!["Follow-up".to_string(), "Proposal".to_string()],
            related_deal: Some("Enterprise Integration Package".to_string()),
            progress: Some(75),
        },
        Task {
            id: Uuid::new_v4(),
            title: "Send contract to Mike Chen".to_string(),
            description: "Prepare and send final contract with negotiated terms".to_string(),
            assignee: "Jane Smith".to_string(),
            contact: Some("Mike Chen".to_string()),
            company: Some("Innovate Labs".to_string()),
            due_date: date("2024-01-15"),
            priority: TaskPriority::Medium,
            status: TaskStatus::InProgress,
            completed: false,
            created_date: date("2024-01-12"),
            created_by: "Jane Smith".to_string(),
            estimated_time: Some("1 hour".to_string()),
            actual_time: Some("45 min".to_string()),
            tags: vec!["Contract".to_string(), "Legal".to_string()],
            related_deal: Some("API Integration Package".to_string()),
            progress: Some(50),
        },
    ]
}
