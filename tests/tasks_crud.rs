// Tarefas: CRUD e a consistência completed/status no toggle.

use chrono::NaiveDate;
use uuid::Uuid;

use crm_dashboard::api::{Latency, TasksApi};
use crm_dashboard::common::error::AppError;
use crm_dashboard::models::task::{
    CreateTaskPayload, TaskPriority, TaskStatus, UpdateTaskPayload,
};

fn api() -> TasksApi {
    TasksApi::new(Latency::none())
}

fn payload(title: &str) -> CreateTaskPayload {
    CreateTaskPayload {
        title: title.to_string(),
        description: "Prepare the quarterly review deck".to_string(),
        assignee: "John Doe".to_string(),
        contact: None,
        company: None,
        due_date: NaiveDate::from_ymd_opt(2024, 2, 5).unwrap(),
        priority: TaskPriority::Low,
        status: TaskStatus::Pending,
        completed: false,
        created_date: NaiveDate::from_ymd_opt(2024, 1, 20).unwrap(),
        created_by: "John Doe".to_string(),
        estimated_time: None,
        actual_time: None,
        tags: vec![],
        related_deal: None,
        progress: None,
    }
}

#[tokio::test]
async fn toggle_flips_completed_and_status_together() {
    let api = api();
    let first = api.get_tasks().await.unwrap()[0].clone();
    assert!(!first.completed);

    let toggled = api.toggle_task(first.id).await.unwrap();
    assert!(toggled.completed);
    assert_eq!(toggled.status, TaskStatus::Completed);

    // E na volta o status vai para Pending, não para o InProgress original
    let back = api.toggle_task(first.id).await.unwrap();
    assert!(!back.completed);
    assert_eq!(back.status, TaskStatus::Pending);
}

#[tokio::test]
async fn toggle_of_unknown_id_is_not_found() {
    let api = api();
    let result = api.toggle_task(Uuid::new_v4()).await;
    assert!(matches!(result, Err(AppError::TaskNotFound)));
}

#[tokio::test]
async fn create_assigns_fresh_id_and_prepends() {
    let api = api();
    let before = api.get_tasks().await.unwrap();

    let created = api.create_task(payload("Prepare QBR deck")).await.unwrap();
    assert!(before.iter().all(|t| t.id != created.id));

    let after = api.get_tasks().await.unwrap();
    assert_eq!(after[0].id, created.id);
    assert_eq!(after.len(), before.len() + 1);
}

#[tokio::test]
async fn update_patch_does_not_touch_completion() {
    let api = api();
    let first = api.get_tasks().await.unwrap()[0].clone();

    let updates = UpdateTaskPayload {
        priority: Some(TaskPriority::Low),
        progress: Some(90),
        ..Default::default()
    };
    let updated = api.update_task(first.id, updates).await.unwrap();

    assert_eq!(updated.priority, TaskPriority::Low);
    assert_eq!(updated.progress, Some(90));
    // completed/status só mudam via toggle
    assert_eq!(updated.completed, first.completed);
    assert_eq!(updated.status, first.status);
}

#[tokio::test]
async fn delete_removes_exactly_one_or_fails_not_found() {
    let api = api();
    let before = api.get_tasks().await.unwrap();

    api.delete_task(before[0].id).await.unwrap();
    let after = api.get_tasks().await.unwrap();
    assert_eq!(after.len(), before.len() - 1);

    let result = api.delete_task(Uuid::new_v4()).await;
    assert!(matches!(result, Err(AppError::TaskNotFound)));
    assert_eq!(api.get_tasks().await.unwrap().len(), after.len());
}
