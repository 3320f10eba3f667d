// src/models/deal.rs

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

// --- ESTÁGIOS DO FUNIL ---

// A ordem aqui é a ordem das colunas no quadro (kanban).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DealStage {
    Qualified,
    Proposal,
    Negotiation,
    Closed,
}

impl DealStage {
    pub const ALL: [DealStage; 4] = [
        DealStage::Qualified,
        DealStage::Proposal,
        DealStage::Negotiation,
        DealStage::Closed,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            DealStage::Qualified => "Qualified",
            DealStage::Proposal => "Proposal",
            DealStage::Negotiation => "Negotiation",
            DealStage::Closed => "Closed",
        }
    }

    /// Estágios que ainda contam como pipeline aberto.
    pub fn is_open(&self) -> bool {
        !matches!(self, DealStage::Closed)
    }
}

// --- NEGOCIAÇÃO ---

// Invariante: a negociação pertence a exatamente um balde de estágio por vez,
// e o campo `stage` sempre nomeia esse balde. A posição dentro do balde é
// significativa (ordem de arraste no quadro).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Deal {
    pub id: Uuid,

    pub title: String,

    // String de exibição ("$15,000"); os totais fazem parse via common::currency
    pub value: String,

    // Referências por nome, sem integridade referencial
    pub contact: String,
    pub company: String,

    pub stage: DealStage,

    // 0 a 100
    pub probability: u8,

    pub due_date: NaiveDate,
    pub created_date: NaiveDate,

    // Tempo relativo de exibição ("2 days ago")
    pub last_activity: String,

    pub description: String,
    pub tags: Vec<String>,
    pub owner: String,
}

// --- PAYLOADS ---

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateDealPayload {
    #[validate(length(min = 1, message = "required"))]
    pub title: String,

    #[validate(length(min = 1, message = "required"))]
    pub value: String,

    pub contact: String,
    pub company: String,
    pub stage: DealStage,

    #[validate(range(max = 100, message = "invalid_probability"))]
    pub probability: u8,

    pub due_date: NaiveDate,
    pub created_date: NaiveDate,
    pub last_activity: String,

    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub tags: Vec<String>,
    pub owner: String,
}

impl CreateDealPayload {
    pub fn into_deal(self, id: Uuid) -> Deal {
        Deal {
            id,
            title: self.title,
            value: self.value,
            contact: self.contact,
            company: self.company,
            stage: self.stage,
            probability: self.probability,
            due_date: self.due_date,
            created_date: self.created_date,
            last_activity: self.last_activity,
            description: self.description,
            tags: self.tags,
            owner: self.owner,
        }
    }
}

// Patch parcial. O estágio fica DE FORA de propósito: mudar de balde é sempre
// via move_deal, senão o campo `stage` e a posição no quadro saem de sincronia.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateDealPayload {
    #[validate(length(min = 1, message = "required"))]
    pub title: Option<String>,

    #[validate(length(min = 1, message = "required"))]
    pub value: Option<String>,

    pub contact: Option<String>,
    pub company: Option<String>,

    #[validate(range(max = 100, message = "invalid_probability"))]
    pub probability: Option<u8>,

    pub due_date: Option<NaiveDate>,
    pub last_activity: Option<String>,
    pub description: Option<String>,
    pub tags: Option<Vec<String>>,
    pub owner: Option<String>,
}

impl UpdateDealPayload {
    pub fn apply_to(&self, deal: &mut Deal) {
        if let Some(v) = &self.title {
            deal.title = v.clone();
        }
        if let Some(v) = &self.value {
            deal.value = v.clone();
        }
        if let Some(v) = &self.contact {
            deal.contact = v.clone();
        }
        if let Some(v) = &self.company {
            deal.company = v.clone();
        }
        if let Some(v) = self.probability {
            deal.probability = v;
        }
        if let Some(v) = self.due_date {
            deal.due_date = v;
        }
        if let Some(v) = &self.last_activity {
            deal.last_activity = v.clone();
        }
        if let Some(v) = &self.description {
            deal.description = v.clone();
        }
        if let Some(v) = &self.tags {
            deal.tags = v.clone();
        }
        if let Some(v) = &self.owner {
            deal.owner = v.clone();
        }
    }
}
