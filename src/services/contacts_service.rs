// src/services/contacts_service.rs

use uuid::Uuid;
use validator::Validate;

use crate::{
    api::ContactsApi,
    common::error::AppError,
    models::contact::{Contact, CreateContactPayload, UpdateContactPayload},
    store::Store,
};

// Orquestra contatos: valida, espera a API mock e SÓ DEPOIS do resultado
// aplica a mutação no store (padrão comando/resultado — sem rollback porque
// nada é aplicado antes). Falha vira toast de erro e o estado fica como está.
#[derive(Clone)]
pub struct ContactsService {
    api: ContactsApi,
}

impl ContactsService {
    pub fn new(api: ContactsApi) -> Self {
        Self { api }
    }

    pub async fn load(&self, store: &mut Store) -> Result<(), AppError> {
        store.contacts.set_loading(true);
        store.contacts.set_error(None);

        match self.api.get_contacts().await {
            Ok(contacts) => {
                store.contacts.set_contacts(contacts);
                store.contacts.set_loading(false);
                Ok(())
            }
            Err(err) => {
                store.contacts.set_loading(false);
                store.contacts.set_error(Some(err.to_string()));
                store.ui.notify_error("Failed to load contacts");
                Err(err)
            }
        }
    }

    pub async fn create(
        &self,
        store: &mut Store,
        payload: CreateContactPayload,
    ) -> Result<Contact, AppError> {
        if let Err(errors) = payload.validate() {
            store.ui.notify_error("Failed to create contact");
            return Err(errors.into());
        }

        match self.api.create_contact(payload).await {
            Ok(contact) => {
                store.contacts.add_contact(contact.clone());
                store.ui.notify_success("Contact created successfully");
                Ok(contact)
            }
            Err(err) => {
                store.ui.notify_error("Failed to create contact");
                Err(err)
            }
        }
    }

    pub async fn update(
        &self,
        store: &mut Store,
        id: Uuid,
        updates: UpdateContactPayload,
    ) -> Result<Contact, AppError> {
        if let Err(errors) = updates.validate() {
            store.ui.notify_error("Failed to update contact");
            return Err(errors.into());
        }

        match self.api.update_contact(id, updates).await {
            Ok(contact) => {
                store.contacts.update_contact(contact.clone());
                store.ui.notify_success("Contact updated successfully");
                Ok(contact)
            }
            Err(err) => {
                store.ui.notify_error("Failed to update contact");
                Err(err)
            }
        }
    }

    pub async fn delete(&self, store: &mut Store, id: Uuid) -> Result<(), AppError> {
        match self.api.delete_contact(id).await {
            Ok(()) => {
                store.contacts.delete_contact(id);
                store.ui.notify_success("Contact deleted successfully");
                Ok(())
            }
            Err(err) => {
                store.ui.notify_error("Failed to delete contact");
                Err(err)
            }
        }
    }
}
