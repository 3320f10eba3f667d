// src/services/dashboard_service.rs

use rust_decimal::Decimal;

use crate::{
    common::{currency, error::AppError},
    models::{
        contact::ContactStatus,
        dashboard::{sample_revenue_series, DashboardSummary, RevenueChartEntry, StageTotalEntry},
        deal::DealStage,
    },
    store::Store,
};

// Agregados do Dashboard e do Analytics. Não tem API mock por trás: tudo é
// varredura linear sobre o que já está no store, com o parse ad hoc das
// strings de valor ("$15,000") para somar.
#[derive(Clone)]
pub struct DashboardService;

impl DashboardService {
    pub fn new() -> Self {
        Self
    }

    /// Os cards do topo do Dashboard.
    pub fn summary(&self, store: &Store) -> Result<DashboardSummary, AppError> {
        let mut pipeline_value = Decimal::ZERO;
        let mut won_value = Decimal::ZERO;
        let mut open_deals = 0usize;

        for stage in DealStage::ALL {
            for deal in store.deals.bucket(stage) {
                let value = currency::parse_currency(&deal.value)?;
                if stage.is_open() {
                    pipeline_value += value;
                    open_deals += 1;
                } else {
                    won_value += value;
                }
            }
        }

        let active_contacts = store
            .contacts
            .all()
            .iter()
            .filter(|c| c.status == ContactStatus::Active)
            .count();

        let pending_tasks = store.tasks.all().iter().filter(|t| !t.completed).count();

        Ok(DashboardSummary {
            pipeline_value,
            won_value,
            open_deals,
            active_contacts,
            pending_tasks,
        })
    }

    /// Total e contagem por coluna do quadro (cabeçalho de cada estágio).
    pub fn stage_totals(&self, store: &Store) -> Result<Vec<StageTotalEntry>, AppError> {
        DealStage::ALL
            .into_iter()
            .map(|stage| {
                let bucket = store.deals.bucket(stage);
                let mut total = Decimal::ZERO;
                for deal in bucket {
                    total += currency::parse_currency(&deal.value)?;
                }
                Ok(StageTotalEntry {
                    stage,
                    deal_count: bucket.len(),
                    total,
                })
            })
            .collect()
    }

    /// A série estática que a tela de Analytics renderiza como barras.
    pub fn revenue_series(&self) -> Vec<RevenueChartEntry> {
        sample_revenue_series()
    }
}

impl Default for DashboardService {
    fn default() -> Self {
        Self::new()
    }
}
