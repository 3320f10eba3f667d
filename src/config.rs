// src/config.rs

use std::{env, time::Duration};

use anyhow::Context;

use crate::api::{ActivitiesApi, ContactsApi, DealsApi, Latency, TasksApi};
use crate::services::{
    ActivitiesService, ContactsService, DashboardService, DealsService, SettingsService,
    TasksService,
};

#[derive(Clone)]
pub struct AppState {
    pub latency: Latency,
    pub contacts_service: ContactsService,
    pub deals_service: DealsService,
    pub activities_service: ActivitiesService,
    pub tasks_service: TasksService,
    pub dashboard_service: DashboardService,
    pub settings_service: SettingsService,
}

impl AppState {
    // A assinatura retorna um Result: se a configuração for inválida,
    // a aplicação não deve iniciar.
    pub fn new() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let latency = latency_from_env()?;
        tracing::info!(
            "✅ API mock pronta (latência base {:?}, rápida {:?})",
            latency.base,
            latency.quick
        );

        Ok(Self::with_latency(latency))
    }

    /// Monta o gráfico de dependências com a latência dada (testes usam
    /// `Latency::none()`).
    pub fn with_latency(latency: Latency) -> Self {
        let contacts_api = ContactsApi::new(latency);
        let deals_api = DealsApi::new(latency);
        let activities_api = ActivitiesApi::new(latency);
        let tasks_api = TasksApi::new(latency);

        Self {
            latency,
            contacts_service: ContactsService::new(contacts_api),
            deals_service: DealsService::new(deals_api),
            activities_service: ActivitiesService::new(activities_api),
            tasks_service: TasksService::new(tasks_api),
            dashboard_service: DashboardService::new(),
            settings_service: SettingsService::new(),
        }
    }
}

fn latency_from_env() -> anyhow::Result<Latency> {
    let mut latency = Latency::default();

    if let Ok(raw) = env::var("CRM_BASE_DELAY_MS") {
        let ms: u64 = raw.parse().context("CRM_BASE_DELAY_MS deve ser um número")?;
        latency.base = Duration::from_millis(ms);
    }
    if let Ok(raw) = env::var("CRM_QUICK_DELAY_MS") {
        let ms: u64 = raw.parse().context("CRM_QUICK_DELAY_MS deve ser um número")?;
        latency.quick = Duration::from_millis(ms);
    }

    Ok(latency)
}
