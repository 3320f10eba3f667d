// src/models/settings.rs

use serde::{Deserialize, Serialize};

// --- PERFIL DO WORKSPACE ---

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkspaceProfile {
    pub company_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
}

// --- PREFERÊNCIAS DE NOTIFICAÇÃO ---

// Os toggles da tela de Settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationPreferences {
    // Avisar quando uma negociação muda de estágio
    pub deal_stage_moves: bool,
    // Lembretes de tarefas com vencimento próximo
    pub task_reminders: bool,
    // Resumo semanal por e-mail
    pub weekly_digest: bool,
}

impl Default for NotificationPreferences {
    fn default() -> Self {
        Self {
            deal_stage_moves: true,
            task_reminders: true,
            weekly_digest: false,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkspaceSettings {
    pub profile: WorkspaceProfile,
    pub notifications: NotificationPreferences,
}

// --- PAYLOAD ---

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateSettingsRequest {
    pub company_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
}
