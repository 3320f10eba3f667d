// Fluxo serviço → API mock → store: a mutação local só acontece depois do
// resultado, e falha vira toast de erro com o estado intacto.

use std::str::FromStr;

use rust_decimal::Decimal;
use uuid::Uuid;

use crm_dashboard::api::Latency;
use crm_dashboard::common::error::AppError;
use crm_dashboard::config::AppState;
use crm_dashboard::models::deal::{CreateDealPayload, DealStage};
use crm_dashboard::models::settings::UpdateSettingsRequest;
use crm_dashboard::store::ui::NotificationKind;
use crm_dashboard::store::Store;

fn app() -> AppState {
    AppState::with_latency(Latency::none())
}

async fn loaded(app: &AppState) -> Store {
    let mut store = Store::new();
    app.contacts_service.load(&mut store).await.unwrap();
    app.deals_service.load(&mut store).await.unwrap();
    app.activities_service.load(&mut store).await.unwrap();
    app.tasks_service.load(&mut store).await.unwrap();
    store
}

fn dec(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

#[tokio::test]
async fn load_populates_every_slice() {
    let app = app();
    let store = loaded(&app).await;

    assert_eq!(store.contacts.all().len(), 2);
    assert_eq!(store.activities.all().len(), 2);
    assert_eq!(store.tasks.all().len(), 2);
    assert_eq!(store.deals.bucket(DealStage::Qualified).len(), 2);
    assert_eq!(store.deals.bucket(DealStage::Proposal).len(), 2);
    assert_eq!(store.deals.bucket(DealStage::Negotiation).len(), 1);
    assert_eq!(store.deals.bucket(DealStage::Closed).len(), 1);
    assert!(!store.deals.loading);
    assert!(store.deals.error.is_none());
}

#[tokio::test]
async fn move_via_service_keeps_store_and_api_in_sync() {
    let app = app();
    let mut store = loaded(&app).await;
    let deal = store.deals.bucket(DealStage::Qualified)[0].clone();

    app.deals_service
        .move_deal(
            &mut store,
            deal.id,
            DealStage::Qualified,
            DealStage::Negotiation,
            0,
        )
        .await
        .unwrap();

    // Store refletiu a transição...
    assert_eq!(store.deals.bucket(DealStage::Negotiation)[0].id, deal.id);
    assert_eq!(
        store.deals.bucket(DealStage::Negotiation)[0].stage,
        DealStage::Negotiation
    );

    // ...e bate com o que a API devolve num novo get_deals.
    let mut fresh = Store::new();
    app.deals_service.load(&mut fresh).await.unwrap();
    for stage in DealStage::ALL {
        let store_ids: Vec<Uuid> = store.deals.bucket(stage).iter().map(|d| d.id).collect();
        let api_ids: Vec<Uuid> = fresh.deals.bucket(stage).iter().map(|d| d.id).collect();
        assert_eq!(store_ids, api_ids);
    }
}

#[tokio::test]
async fn create_applies_only_after_the_result_and_toasts_success() {
    let app = app();
    let mut store = loaded(&app).await;

    let payload = CreateDealPayload {
        title: "Westside Expansion".to_string(),
        value: "$18,000".to_string(),
        contact: "Lisa Anderson".to_string(),
        company: "Enterprise Corp".to_string(),
        stage: DealStage::Qualified,
        probability: 35,
        due_date: chrono::NaiveDate::from_ymd_opt(2024, 3, 15).unwrap(),
        created_date: chrono::NaiveDate::from_ymd_opt(2024, 2, 10).unwrap(),
        last_activity: "just now".to_string(),
        description: String::new(),
        tags: vec![],
        owner: "Jane Smith".to_string(),
    };

    let created = app.deals_service.create(&mut store, payload).await.unwrap();

    assert_eq!(store.deals.bucket(DealStage::Qualified)[0].id, created.id);
    let last = store.ui.notifications().last().unwrap();
    assert_eq!(last.kind, NotificationKind::Success);
    assert_eq!(last.message, "Deal created successfully");
}

#[tokio::test]
async fn invalid_payload_is_rejected_before_reaching_the_api() {
    let app = app();
    let mut store = loaded(&app).await;
    let before = store.deals.bucket(DealStage::Qualified).len();

    let payload = CreateDealPayload {
        title: String::new(), // inválido
        value: "$1,000".to_string(),
        contact: "X".to_string(),
        company: "Y".to_string(),
        stage: DealStage::Qualified,
        probability: 10,
        due_date: chrono::NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
        created_date: chrono::NaiveDate::from_ymd_opt(2024, 2, 1).unwrap(),
        last_activity: "now".to_string(),
        description: String::new(),
        tags: vec![],
        owner: "Z".to_string(),
    };

    let result = app.deals_service.create(&mut store, payload).await;
    assert!(matches!(result, Err(AppError::ValidationError(_))));
    assert_eq!(store.deals.bucket(DealStage::Qualified).len(), before);

    let last = store.ui.notifications().last().unwrap();
    assert_eq!(last.kind, NotificationKind::Error);
}

#[tokio::test]
async fn failed_delete_toasts_error_and_leaves_store_untouched() {
    let app = app();
    let mut store = loaded(&app).await;
    let before = store.contacts.all().len();

    let result = app.contacts_service.delete(&mut store, Uuid::new_v4()).await;
    match result {
        Err(err) => assert!(err.is_not_found()),
        Ok(()) => panic!("delete de id inexistente deveria falhar"),
    }
    assert_eq!(store.contacts.all().len(), before);

    let last = store.ui.notifications().last().unwrap();
    assert_eq!(last.kind, NotificationKind::Error);
    assert_eq!(last.message, "Failed to delete contact");
}

#[tokio::test]
async fn toggle_via_service_stores_the_post_toggle_record() {
    let app = app();
    let mut store = loaded(&app).await;
    let task = store.tasks.all()[0].clone();

    let toggled = app.tasks_service.toggle(&mut store, task.id).await.unwrap();
    assert!(toggled.completed);

    let in_store = store.tasks.find(task.id).unwrap();
    assert!(in_store.completed);
    assert_eq!(in_store.status, toggled.status);

    let last = store.ui.notifications().last().unwrap();
    assert_eq!(last.kind, NotificationKind::Success);
    assert_eq!(last.message, "Task completed");

    // Desmarcando, o toast muda junto
    app.tasks_service.toggle(&mut store, task.id).await.unwrap();
    let last = store.ui.notifications().last().unwrap();
    assert_eq!(last.kind, NotificationKind::Success);
    assert_eq!(last.message, "Task reopened");
}

#[tokio::test]
async fn dashboard_aggregates_parse_display_values() {
    let app = app();
    let store = loaded(&app).await;

    let summary = app.dashboard_service.summary(&store).unwrap();
    // 15.000 + 8.500 + 22.000 + 12.000 + 35.000 abertos; 5.500 fechado
    assert_eq!(summary.pipeline_value, dec("92500"));
    assert_eq!(summary.won_value, dec("5500"));
    assert_eq!(summary.open_deals, 5);
    assert_eq!(summary.active_contacts, 1);
    assert_eq!(summary.pending_tasks, 2);

    let totals = app.dashboard_service.stage_totals(&store).unwrap();
    assert_eq!(totals.len(), 4);
    let qualified = totals
        .iter()
        .find(|t| t.stage == DealStage::Qualified)
        .unwrap();
    assert_eq!(qualified.deal_count, 2);
    assert_eq!(qualified.total, dec("23500"));

    let series = app.dashboard_service.revenue_series();
    assert_eq!(series.len(), 6);
    assert_eq!(series[0].month, "Jan");
}

#[tokio::test]
async fn settings_and_reset_lifecycle() {
    let app = app();
    let mut store = loaded(&app).await;

    app.settings_service.update_profile(
        &mut store,
        UpdateSettingsRequest {
            company_name: Some("Northwind CRM".to_string()),
            ..Default::default()
        },
    );
    app.settings_service.toggle_weekly_digest(&mut store);
    app.settings_service.toggle_task_reminders(&mut store);
    app.settings_service.toggle_deal_stage_moves(&mut store);

    let settings = store.settings.settings();
    assert_eq!(settings.profile.company_name.as_deref(), Some("Northwind CRM"));
    assert!(settings.notifications.weekly_digest);
    assert!(!settings.notifications.task_reminders);
    assert!(!settings.notifications.deal_stage_moves);

    // reset() volta tudo ao estado inicial, como um reload da página
    store.reset();
    assert!(store.contacts.all().is_empty());
    assert!(store.deals.bucket(DealStage::Qualified).is_empty());
    assert!(store.ui.notifications().is_empty());
    assert!(store.settings.settings().profile.company_name.is_none());
}
