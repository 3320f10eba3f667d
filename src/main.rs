// src/main.rs

use crm_dashboard::common::currency::format_currency;
use crm_dashboard::config::AppState;
use crm_dashboard::models::deal::DealStage;
use crm_dashboard::store::ui::ActiveTab;
use crm_dashboard::store::Store;

#[tokio::main]
async fn main() {
    // Inicializa o logger
    tracing_subscriber::fmt().with_target(false).compact().init();

    // .expect() é bom aqui: se a configuração falhar, a aplicação não deve iniciar.
    let app_state = AppState::new().expect("Falha ao inicializar o estado da aplicação.");
    let mut store = Store::new();

    tracing::info!("🚀 Carregando dados do CRM...");

    // Carga inicial de todas as telas
    let _ = app_state.contacts_service.load(&mut store).await;
    let _ = app_state.deals_service.load(&mut store).await;
    let _ = app_state.activities_service.load(&mut store).await;
    let _ = app_state.tasks_service.load(&mut store).await;

    log_board(&store);

    store.ui.set_active_tab(ActiveTab::Deals);

    // Simula um arraste no quadro: primeira negociação de Qualified vai
    // para o topo de Proposal.
    if let Some(deal) = store.deals.bucket(DealStage::Qualified).first().cloned() {
        tracing::info!("➡️  Movendo '{}' para Proposal", deal.title);
        let _ = app_state
            .deals_service
            .move_deal(
                &mut store,
                deal.id,
                DealStage::Qualified,
                DealStage::Proposal,
                0,
            )
            .await;
    }

    // Marca a primeira tarefa como concluída
    if let Some(task) = store.tasks.all().first().cloned() {
        tracing::info!("☑️  Concluindo tarefa '{}'", task.title);
        let _ = app_state.tasks_service.toggle(&mut store, task.id).await;
    }

    log_board(&store);

    match app_state.dashboard_service.summary(&store) {
        Ok(summary) => tracing::info!(
            "📊 Pipeline {} | Ganho {} | {} negociações abertas | {} contatos ativos | {} tarefas pendentes",
            format_currency(summary.pipeline_value),
            format_currency(summary.won_value),
            summary.open_deals,
            summary.active_contacts,
            summary.pending_tasks
        ),
        Err(err) => tracing::error!("Falha ao montar o resumo: {err}"),
    }

    for notification in store.ui.notifications() {
        tracing::info!("🔔 [{:?}] {}", notification.kind, notification.message);
    }
}

fn log_board(store: &Store) {
    for stage in DealStage::ALL {
        let titles: Vec<&str> = store
            .deals
            .bucket(stage)
            .iter()
            .map(|d| d.title.as_str())
            .collect();
        tracing::info!("{:<12} {:?}", stage.label(), titles);
    }
}
