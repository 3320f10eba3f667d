// src/store/settings.rs

use crate::models::settings::{UpdateSettingsRequest, WorkspaceSettings};

// A tela de Settings guarda tudo localmente; não há API mock para isso.
#[derive(Debug, Default)]
pub struct SettingsState {
    settings: WorkspaceSettings,
}

impl SettingsState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn settings(&self) -> &WorkspaceSettings {
        &self.settings
    }

    pub fn update_profile(&mut self, request: UpdateSettingsRequest) {
        let profile = &mut self.settings.profile;
        if let Some(v) = request.company_name {
            profile.company_name = Some(v);
        }
        if let Some(v) = request.email {
            profile.email = Some(v);
        }
        if let Some(v) = request.phone {
            profile.phone = Some(v);
        }
        if let Some(v) = request.address {
            profile.address = Some(v);
        }
    }

    // --- TOGGLES ---

    pub fn toggle_deal_stage_moves(&mut self) {
        let prefs = &mut self.settings.notifications;
        prefs.deal_stage_moves = !prefs.deal_stage_moves;
    }

    pub fn toggle_task_reminders(&mut self) {
        let prefs = &mut self.settings.notifications;
        prefs.task_reminders = !prefs.task_reminders;
    }

    pub fn toggle_weekly_digest(&mut self) {
        let prefs = &mut self.settings.notifications;
        prefs.weekly_digest = !prefs.weekly_digest;
    }
}
