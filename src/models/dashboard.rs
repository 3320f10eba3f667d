// src/models/dashboard.rs

use rust_decimal::Decimal;
use serde::Serialize;

use crate::models::deal::DealStage;

// 1. Resumo (os cards do topo do Dashboard)
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    pub pipeline_value: Decimal, // Soma dos estágios abertos
    pub won_value: Decimal,      // Soma do estágio fechado
    pub open_deals: usize,
    pub active_contacts: usize,
    pub pending_tasks: usize,
}

// 2. Totais por coluna do quadro (cabeçalho de cada estágio)
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StageTotalEntry {
    pub stage: DealStage,
    pub deal_count: usize,
    pub total: Decimal,
}

// 3. Gráfico de receita da tela de Analytics.
// A tela original renderiza barras a partir de uma série estática.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RevenueChartEntry {
    pub month: String,
    pub total: Decimal,
}

pub fn sample_revenue_series() -> Vec<RevenueChartEntry> {
    let entries = [
        ("Jan", 42_000),
        ("Feb", 38_500),
        ("Mar", 51_000),
        ("Apr", 46_500),
        ("May", 58_000),
        ("Jun", 63_500),
    ];

    entries
        .into_iter()
        .map(|(month, total)| RevenueChartEntry {
            month: month.to_string(),
            total: Decimal::from(total),
        })
        .collect()
}
