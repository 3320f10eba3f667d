// src/services/settings_service.rs

use crate::{models::settings::UpdateSettingsRequest, store::Store};

// Settings é todo local (sem API mock): o serviço só aplica no store e
// confirma com um toast, para a tela se comportar como as outras.
#[derive(Clone)]
pub struct SettingsService;

impl SettingsService {
    pub fn new() -> Self {
        Self
    }

    pub fn update_profile(&self, store: &mut Store, request: UpdateSettingsRequest) {
        store.settings.update_profile(request);
        store.ui.notify_success("Settings updated successfully");
    }

    pub fn toggle_deal_stage_moves(&self, store: &mut Store) {
        store.settings.toggle_deal_stage_moves();
    }

    pub fn toggle_task_reminders(&self, store: &mut Store) {
        store.settings.toggle_task_reminders();
    }

    pub fn toggle_weekly_digest(&self, store: &mut Store) {
        store.settings.toggle_weekly_digest();
    }
}

impl Default for SettingsService {
    fn default() -> Self {
        Self::new()
    }
}
