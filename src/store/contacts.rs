// src/store/contacts.rs

use uuid::Uuid;

use crate::models::contact::Contact;

#[derive(Debug, Default)]
pub struct ContactsState {
    contacts: Vec<Contact>,
    pub loading: bool,
    pub error: Option<String>,
    pub selected: Option<Contact>,
    pub editing: Option<Contact>,
}

impl ContactsState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn all(&self) -> &[Contact] {
        &self.contacts
    }

    pub fn find(&self, id: Uuid) -> Option<&Contact> {
        self.contacts.iter().find(|c| c.id == id)
    }

    pub fn set_contacts(&mut self, contacts: Vec<Contact>) {
        self.contacts = contacts;
    }

    /// Novo contato entra na FRENTE da lista.
    pub fn add_contact(&mut self, contact: Contact) {
        self.contacts.insert(0, contact);
    }

    pub fn update_contact(&mut self, updated: Contact) {
        if let Some(slot) = self.contacts.iter_mut().find(|c| c.id == updated.id) {
            *slot = updated.clone();
        }
        if self.selected.as_ref().is_some_and(|c| c.id == updated.id) {
            self.selected = Some(updated);
        }
    }

    pub fn delete_contact(&mut self, id: Uuid) {
        self.contacts.retain(|c| c.id != id);
        if self.selected.as_ref().is_some_and(|c| c.id == id) {
            self.selected = None;
        }
    }

    pub fn set_selected(&mut self, contact: Option<Contact>) {
        self.selected = contact;
    }

    pub fn set_editing(&mut self, contact: Option<Contact>) {
        self.editing = contact;
    }

    pub fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
    }

    pub fn set_error(&mut self, error: Option<String>) {
        self.error = error;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::contact::ContactStatus;
    use chrono::NaiveDate;

    fn contact(name: &str) -> Contact {
        Contact {
            id: Uuid::new_v4(),
            name: name.to_string(),
            email: format!("{}@example.com", name.to_lowercase()),
            phone: "+1 555 0100".to_string(),
            company: "Acme Corp".to_string(),
            role: "CTO".to_string(),
            location: "San Francisco, CA".to_string(),
            status: ContactStatus::Active,
            last_contact: "2 days ago".to_string(),
            deal_value: "$15,000".to_string(),
            avatar: String::new(),
            favorite: false,
            tags: vec![],
            notes: None,
            created_date: NaiveDate::from_ymd_opt(2024, 1, 10).unwrap(),
            total_deals: 1,
            total_value: "$15,000".to_string(),
        }
    }

    #[test]
    fn update_refreshes_matching_selection() {
        let mut state = ContactsState::new();
        let original = contact("Sarah");
        state.add_contact(original.clone());
        state.set_selected(Some(original.clone()));

        let mut updated = original.clone();
        updated.favorite = true;
        state.update_contact(updated);

        assert!(state.selected.as_ref().unwrap().favorite);
        assert!(state.all()[0].favorite);
    }

    #[test]
    fn editing_draft_is_independent_from_the_list() {
        let mut state = ContactsState::new();
        let original = contact("Mike");
        state.add_contact(original.clone());

        let mut draft = original.clone();
        draft.company = "Innovate Labs".to_string();
        state.set_editing(Some(draft));

        // O rascunho não vaza para a lista até um update explícito.
        assert_eq!(state.all()[0].company, "Acme Corp");
        assert_eq!(
            state.editing.as_ref().unwrap().company,
            "Innovate Labs"
        );
    }
}
