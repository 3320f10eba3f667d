// src/api/deals.rs

use std::collections::HashMap;
use std::sync::Arc;

use chrono::NaiveDate;
use tokio::sync::Mutex;
use uuid::Uuid;

use crate::{
    api::latency::Latency,
    common::error::AppError,
    models::deal::{CreateDealPayload, Deal, DealStage, UpdateDealPayload},
};

// API mock de negociações: um stand-in em memória do backend. Cada operação
// dorme a latência configurada e então aplica a mutação nos baldes de estágio,
// resolvendo com o registro pós-mutação ou falhando com DealNotFound.
#[derive(Clone)]
pub struct DealsApi {
    deals: Arc<Mutex<HashMap<DealStage, Vec<Deal>>>>,
    latency: Latency,
}

impl DealsApi {
    pub fn new(latency: Latency) -> Self {
        Self {
            deals: Arc::new(Mutex::new(seed_deals())),
            latency,
        }
    }

    /// Snapshot completo dos quatro baldes, na ordem atual do quadro.
    pub async fn get_deals(&self) -> Result<HashMap<DealStage, Vec<Deal>>, AppError> {
        self.latency.base_delay().await;
        let deals = self.deals.lock().await;
        Ok(deals.clone())
    }

    /// Busca por id varrendo todos os estágios (só o id é conhecido).
    pub async fn get_deal(&self, id: Uuid) -> Result<Deal, AppError> {
        self.latency.quick_delay().await;
        let deals = self.deals.lock().await;
        for bucket in deals.values() {
            if let Some(deal) = bucket.iter().find(|d| d.id == id) {
                return Ok(deal.clone());
            }
        }
        Err(AppError::DealNotFound)
    }

    /// Cria com id fresco e coloca na FRENTE do balde do estágio informado.
    pub async fn create_deal(&self, payload: CreateDealPayload) -> Result<Deal, AppError> {
        self.latency.base_delay().await;
        let deal = payload.into_deal(Uuid::new_v4());

        let mut deals = self.deals.lock().await;
        deals
            .entry(deal.stage)
            .or_default()
            .insert(0, deal.clone());

        Ok(deal)
    }

    /// Aplica o patch onde quer que a negociação esteja. O estágio não é
    /// alterável por aqui (ver UpdateDealPayload).
    pub async fn update_deal(
        &self,
        id: Uuid,
        updates: UpdateDealPayload,
    ) -> Result<Deal, AppError> {
        self.latency.base_delay().await;
        let mut deals = self.deals.lock().await;

        for bucket in deals.values_mut() {
            if let Some(deal) = bucket.iter_mut().find(|d| d.id == id) {
                updates.apply_to(deal);
                return Ok(deal.clone());
            }
        }

        Err(AppError::DealNotFound)
    }

    /// Remove exatamente um registro; erro se o id não existir em nenhum balde.
    pub async fn delete_deal(&self, id: Uuid) -> Result<(), AppError> {
        self.latency.base_delay().await;
        let mut deals = self.deals.lock().await;

        for bucket in deals.values_mut() {
            if let Some(index) = bucket.iter().position(|d| d.id == id) {
                bucket.remove(index);
                return Ok(());
            }
        }

        Err(AppError::DealNotFound)
    }

    /// Transição de estágio: remove do balde de origem, atualiza o campo
    /// `stage` e insere em `new_index` no destino (limitado ao tamanho da
    /// lista). Uma transição lógica única — nunca fica meio-aplicada.
    /// Se o id não estiver no balde de origem, é um no-op silencioso.
    pub async fn move_deal(
        &self,
        deal_id: Uuid,
        from_stage: DealStage,
        to_stage: DealStage,
        new_index: usize,
    ) -> Result<(), AppError> {
        self.latency.quick_delay().await;
        let mut deals = self.deals.lock().await;

        let Some(source) = deals.get_mut(&from_stage) else {
            return Ok(());
        };
        let Some(index) = source.iter().position(|d| d.id == deal_id) else {
            return Ok(());
        };

        let mut deal = source.remove(index);
        deal.stage = to_stage;

        let target = deals.entry(to_stage).or_default();
        let insert_at = new_index.min(target.len());
        target.insert(insert_at, deal);

        Ok(())
    }
}

// --- FIXTURES ---

fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").expect("data fixa inválida na fixture")
}

fn deal(
    title: &str,
    value: &str,
    contact: &str,
    company: &str,
    stage: DealStage,
    probability: u8,
    due_date: &str,
    created_date: &str,
    last_activity: &str,
    description: &str,
    tags: &[&str],
    owner: &str,
) -> Deal {
    Deal {
        id: Uuid::new_v4(),
        title: title.to_string(),
        value: value.to_string(),
        contact: contact.to_string(),
        company: company.to_string(),
        stage,
        probability,
        due_date: date(due_date),
        created_date: date(created_date),
        last_activity: last_activity.to_string(),
        description: description.to_string(),
        tags: tags.iter().map(|t| t.to_string()).collect(),
        owner: owner.to_string(),
    }
}

fn seed_deals() -> HashMap<DealStage, Vec<Deal>> {
    let mut deals: HashMap<DealStage, Vec<Deal>> = HashMap::new();

    deals.insert(
        DealStage::Qualified,
        vec![
            deal(
                "Acme Corp Integration",
                "$15,000",
                "Sarah Johnson",
                "Acme Corp",
                DealStage::Qualified,
                25,
                "2024-02-15",
                "2024-01-10",
                "2 days ago",
                "Enterprise integration package for Acme Corp",
                &["Enterprise", "Integration"],
                "John Doe",
            ),
            deal(
                "TechStart Platform",
                "$8,500",
                "Mike Chen",
                "Innovate Labs",
                DealStage::Qualified,
                30,
                "2024-02-20",
                "2024-01-12",
                "4 days ago",
                "Platform license for TechStart rollout",
                &["Tech", "Startup"],
                "Jane Smith",
            ),
        ],
    );

    deals.insert(
        DealStage::Proposal,
        vec![
            deal(
                "Global Solutions Suite",
                "$22,000",
                "Emma Davis",
                "Global Solutions",
                DealStage::Proposal,
                65,
                "2024-02-10",
                "2024-01-05",
                "1 day ago",
                "Complete software suite for Global Solutions",
                &["Suite", "Enterprise"],
                "Jane Smith",
            ),
            deal(
                "Innovation Labs Tool",
                "$12,000",
                "Robert Wilson",
                "Innovation Labs",
                DealStage::Proposal,
                55,
                "2024-02-25",
                "2024-01-08",
                "3 days ago",
                "Internal tooling package for Innovation Labs",
                &["Tooling"],
                "John Doe",
            ),
        ],
    );

    deals.insert(
        DealStage::Negotiation,
        vec![deal(
            "Enterprise Package",
            "$35,000",
            "Lisa Anderson",
            "Enterprise Corp",
            DealStage::Negotiation,
            80,
            "2024-02-08",
            "2024-01-01",
            "3 hours ago",
            "Large enterprise package with custom features",
            &["Enterprise", "Custom"],
            "John Doe",
        )],
    );

    deals.insert(
        DealStage::Closed,
        vec![deal(
            "Startup Package",
            "$5,500",
            "David Kim",
            "Startup Inc",
            DealStage::Closed,
            100,
            "2024-01-30",
            "2023-12-15",
            "1 week ago",
            "Basic package for startup company",
            &["Startup", "Basic"],
            "Jane Smith",
        )],
    );

    deals
}
