// src/api/contacts.rs

use std::sync::Arc;

use chrono::NaiveDate;
use tokio::sync::Mutex;
use uuid::Uuid;

use crate::{
    api::latency::Latency,
    common::error::AppError,
    models::contact::{Contact, ContactStatus, CreateContactPayload, UpdateContactPayload},
};

// API mock de contatos. Mesmo contrato das demais: dorme a latência, muta a
// coleção em memória e resolve com o registro pós-mutação ou ContactNotFound.
#[derive(Clone)]
pub struct ContactsApi {
    contacts: Arc<Mutex<Vec<Contact>>>,
    latency: Latency,
}

impl ContactsApi {
    pub fn new(latency: Latency) -> Self {
        Self {
            contacts: Arc::new(Mutex::new(seed_contacts())),
            latency,
        }
    }

    pub async fn get_contacts(&self) -> Result<Vec<Contact>, AppError> {
        self.latency.base_delay().await;
        let contacts = self.contacts.lock().await;
        Ok(contacts.clone())
    }

    pub async fn get_contact(&self, id: Uuid) -> Result<Contact, AppError> {
        self.latency.quick_delay().await;
        let contacts = self.contacts.lock().await;
        contacts
            .iter()
            .find(|c| c.id == id)
            .cloned()
            .ok_or(AppError::ContactNotFound)
    }

    /// Cria com id fresco e coloca na FRENTE da lista.
    pub async fn create_contact(&self, payload: CreateContactPayload) -> Result<Contact, AppError> {
        self.latency.base_delay().await;
        let contact = payload.into_contact(Uuid::new_v4());

        let mut contacts = self.contacts.lock().await;
        contacts.insert(0, contact.clone());

        Ok(contact)
    }

    pub async fn update_contact(
        &self,
        id: Uuid,
        updates: UpdateContactPayload,
    ) -> Result<Contact, AppError> {
        self.latency.base_delay().await;
        let mut contacts = self.contacts.lock().await;

        let contact = contacts
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or(AppError::ContactNotFound)?;

        updates.apply_to(contact);
        Ok(contact.clone())
    }

    pub async fn delete_contact(&self, id: Uuid) -> Result<(), AppError> {
        self.latency.base_delay().await;
        let mut contacts = self.contacts.lock().await;

        let index = contacts
            .iter()
            .position(|c| c.id == id)
            .ok_or(AppError::ContactNotFound)?;

        contacts.remove(index);
        Ok(())
    }
}

// --- FIXTURES ---

fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").expect("data fixa inválida na fixture")
}

fn seed_contacts() -> Vec<Contact> {
    vec![
        Contact {
            id: Uuid::new_v4(),
            name: "Sarah Johnson".to_string(),
            email: "sarah@techcorp.com".to_string(),
            phone: "+1 (555) 123-4567".to_string(),
            company: "TechCorp Solutions".to_string(),
            role: "VP of Sales".to_string(),
            location: "New York, NY".to_string(),
            status: ContactStatus::Active,
            last_contact: "2 days ago".to_string(),
            deal_value: "$15,000".to_string(),
            avatar: "https://images.pexels.com/photos/774909/pexels-photo-774909.jpeg".to_string(),
            favorite: true,
            tags: vec!["Enterprise".to_string(), "Hot Lead".to_string()],
            notes: Some(
                "Key decision maker for enterprise solutions. Very interested in our platform \
                 integration capabilities."
                    .to_string(),
            ),
            created_date: date("2024-01-10"),
            total_deals: 3,
            total_value: "$45,000".to_string(),
        },
        Contact {
            id: Uuid::new_v4(),
            name: "Mike Chen".to_string(),
            email: "mike@innovate.io".to_string(),
            phone: "+1 (555) 234-5678".to_string(),
            company: "Innovate Labs".to_string(),
            role: "CTO".to_string(),
            location: "San Francisco, CA".to_string(),
            status: ContactStatus::Prospect,
            last_contact: "1 week ago".to_string(),
            deal_value: "$8,500".to_string(),
            avatar: "https://images.pexels.com/photos/1222271/pexels-photo-1222271.jpeg"
                .to_string(),
            favorite: false,
            tags: vec!["Tech".to_string(), "Startup".to_string()],
            notes: Some("Technical lead interested in API integration.".to_string()),
            created_date: date("2024-01-08"),
            total_deals: 1,
            total_value: "$8,500".to_string(),
        },
    ]
}
