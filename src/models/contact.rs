// src/models/contact.rs

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

// --- ENUMS ---

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactStatus {
    Active,
    Prospect,
    Inactive,
}

// --- CONTATO ---

// Registro plano, sem integridade referencial: negociações e atividades
// apontam para o contato pelo nome (string de exibição), não por id.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    pub id: Uuid,

    pub name: String,
    pub email: String,
    pub phone: String,
    pub company: String,
    pub role: String,
    pub location: String,

    pub status: ContactStatus,

    // Tempo relativo exibido na lista ("2 days ago"), mantido como string
    pub last_contact: String,

    // Valores monetários de exibição ("$15,000"); ver common::currency
    pub deal_value: String,

    pub avatar: String,
    pub favorite: bool,
    pub tags: Vec<String>,
    pub notes: Option<String>,

    pub created_date: NaiveDate,

    // Agregados de negociações associadas
    pub total_deals: u32,
    pub total_value: String,
}

// --- PAYLOADS ---

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateContactPayload {
    #[validate(length(min = 1, message = "required"))]
    pub name: String,

    #[validate(email(message = "invalid_email"))]
    pub email: String,

    pub phone: String,
    pub company: String,
    pub role: String,
    pub location: String,
    pub status: ContactStatus,
    pub last_contact: String,
    pub deal_value: String,
    pub avatar: String,

    #[serde(default)]
    pub favorite: bool,
    #[serde(default)]
    pub tags: Vec<String>,
    pub notes: Option<String>,

    pub created_date: NaiveDate,

    #[serde(default)]
    pub total_deals: u32,
    #[serde(default)]
    pub total_value: Option<String>,
}

impl CreateContactPayload {
    /// Materializa o contato com um id fresco.
    pub fn into_contact(self, id: Uuid) -> Contact {
        Contact {
            id,
            name: self.name,
            email: self.email,
            phone: self.phone,
            company: self.company,
            role: self.role,
            location: self.location,
            status: self.status,
            last_contact: self.last_contact,
            deal_value: self.deal_value,
            avatar: self.avatar,
            favorite: self.favorite,
            tags: self.tags,
            notes: self.notes,
            created_date: self.created_date,
            total_deals: self.total_deals,
            total_value: self.total_value.unwrap_or_else(|| "$0".to_string()),
        }
    }
}

// Patch parcial: só os campos presentes são aplicados.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateContactPayload {
    #[validate(length(min = 1, message = "required"))]
    pub name: Option<String>,

    #[validate(email(message = "invalid_email"))]
    pub email: Option<String>,

    pub phone: Option<String>,
    pub company: Option<String>,
    pub role: Option<String>,
    pub location: Option<String>,
    pub status: Option<ContactStatus>,
    pub last_contact: Option<String>,
    pub deal_value: Option<String>,
    pub avatar: Option<String>,
    pub favorite: Option<bool>,
    pub tags: Option<Vec<String>>,
    pub notes: Option<Option<String>>,
    pub total_deals: Option<u32>,
    pub total_value: Option<String>,
}

impl UpdateContactPayload {
    pub fn apply_to(&self, contact: &mut Contact) {
        if let Some(v) = &self.name {
            contact.name = v.clone();
        }
        if let Some(v) = &self.email {
            contact.email = v.clone();
        }
        if let Some(v) = &self.phone {
            contact.phone = v.clone();
        }
        if let Some(v) = &self.company {
            contact.company = v.clone();
        }
        if let Some(v) = &self.role {
            contact.role = v.clone();
        }
        if let Some(v) = &self.location {
            contact.location = v.clone();
        }
        if let Some(v) = self.status {
            contact.status = v;
        }
        if let Some(v) = &self.last_contact {
            contact.last_contact = v.clone();
        }
        if let Some(v) = &self.deal_value {
            contact.deal_value = v.clone();
        }
        if let Some(v) = &self.avatar {
            contact.avatar = v.clone();
        }
        if let Some(v) = self.favorite {
            contact.favorite = v;
        }
        if let Some(v) = &self.tags {
            contact.tags = v.clone();
        }
        if let Some(v) = &self.notes {
            contact.notes = v.clone();
        }
        if let Some(v) = self.total_deals {
            contact.total_deals = v;
        }
        if let Some(v) = &self.total_value {
            contact.total_value = v.clone();
        }
    }
}
