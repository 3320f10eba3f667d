// CRUD de atividades na fronteira da API mock.

use chrono::NaiveDate;
use uuid::Uuid;

use crm_dashboard::api::{ActivitiesApi, Latency};
use crm_dashboard::common::error::AppError;
use crm_dashboard::models::activity::{
    ActivityKind, ActivityStatus, CreateActivityPayload, UpdateActivityPayload,
};

fn api() -> ActivitiesApi {
    ActivitiesApi::new(Latency::none())
}

fn payload(title: &str) -> CreateActivityPayload {
    CreateActivityPayload {
        kind: ActivityKind::Meeting,
        title: title.to_string(),
        contact: "Emma Davis".to_string(),
        company: "Global Solutions".to_string(),
        date: NaiveDate::from_ymd_opt(2024, 1, 22).unwrap(),
        time: "9:00 AM".to_string(),
        duration: Some("45 min".to_string()),
        status: ActivityStatus::Pending,
        notes: String::new(),
        outcome: None,
        follow_up_required: false,
        follow_up_date: None,
        participants: vec!["Emma Davis".to_string()],
        tags: vec![],
        created_by: "Jane Smith".to_string(),
        created_date: NaiveDate::from_ymd_opt(2024, 1, 20).unwrap(),
    }
}

#[tokio::test]
async fn create_assigns_fresh_id_and_prepends() {
    let api = api();
    let before = api.get_activities().await.unwrap();

    let created = api.create_activity(payload("Kickoff meeting")).await.unwrap();
    assert!(before.iter().all(|a| a.id != created.id));

    let after = api.get_activities().await.unwrap();
    assert_eq!(after[0].id, created.id);
    assert_eq!(after.len(), before.len() + 1);
}

#[tokio::test]
async fn update_merges_patch_including_status() {
    let api = api();
    let pending = api.get_activities().await.unwrap()[1].clone();
    assert_eq!(pending.status, ActivityStatus::Pending);

    let updates = UpdateActivityPayload {
        status: Some(ActivityStatus::Missed),
        notes: Some("No response after two attempts.".to_string()),
        ..Default::default()
    };
    let updated = api.update_activity(pending.id, updates).await.unwrap();

    assert_eq!(updated.status, ActivityStatus::Missed);
    assert_eq!(updated.notes, "No response after two attempts.");
    assert_eq!(updated.title, pending.title);
}

#[tokio::test]
async fn update_of_unknown_id_is_not_found() {
    let api = api();
    let result = api
        .update_activity(Uuid::new_v4(), UpdateActivityPayload::default())
        .await;
    assert!(matches!(result, Err(AppError::ActivityNotFound)));
}

// O JSON precisa sair com os nomes de campo que a tela consome:
// `type` (não `kind`) e chaves em camelCase.
#[tokio::test]
async fn records_serialize_with_the_original_field_names() {
    let api = api();
    let first = api.get_activities().await.unwrap()[0].clone();

    let json = serde_json::to_value(&first).unwrap();
    assert_eq!(json["type"], "call");
    assert_eq!(json["status"], "completed");
    assert_eq!(json["followUpRequired"], true);
    assert_eq!(json["createdBy"], "John Doe");
    assert!(json.get("kind").is_none());
}

#[tokio::test]
async fn delete_removes_exactly_one_or_fails_not_found() {
    let api = api();
    let before = api.get_activities().await.unwrap();

    api.delete_activity(before[0].id).await.unwrap();
    let after = api.get_activities().await.unwrap();
    assert_eq!(after.len(), before.len() - 1);
    assert_eq!(after[0].id, before[1].id);

    let result = api.delete_activity(Uuid::new_v4()).await;
    assert!(matches!(result, Err(AppError::ActivityNotFound)));
}
