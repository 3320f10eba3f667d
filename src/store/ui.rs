// src/store/ui.rs

use serde::{Deserialize, Serialize};
use uuid::Uuid;

// --- ABAS ---

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActiveTab {
    #[default]
    Dashboard,
    Contacts,
    Deals,
    Activities,
    Tasks,
    Analytics,
    Settings,
}

// --- NOTIFICAÇÕES (toasts) ---

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Success,
    Error,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub id: Uuid,
    pub kind: NotificationKind,
    pub message: String,
}

// Estado da casca da UI: aba ativa e a fila de toasts. Falhas da API viram
// um toast de erro aqui e a tela continua renderizando o estado antigo.
#[derive(Debug, Default)]
pub struct UiState {
    pub active_tab: ActiveTab,
    notifications: Vec<Notification>,
}

impl UiState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_active_tab(&mut self, tab: ActiveTab) {
        self.active_tab = tab;
    }

    pub fn notifications(&self) -> &[Notification] {
        &self.notifications
    }

    pub fn notify_success(&mut self, message: impl Into<String>) {
        self.push(NotificationKind::Success, message.into());
    }

    pub fn notify_error(&mut self, message: impl Into<String>) {
        self.push(NotificationKind::Error, message.into());
    }

    fn push(&mut self, kind: NotificationKind, message: String) {
        tracing::debug!(?kind, %message, "notificação");
        self.notifications.push(Notification {
            id: Uuid::new_v4(),
            kind,
            message,
        });
    }

    pub fn dismiss(&mut self, id: Uuid) {
        self.notifications.retain(|n| n.id != id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dismiss_removes_only_the_given_toast() {
        let mut ui = UiState::new();
        ui.notify_success("Deal created successfully");
        ui.notify_error("Failed to delete contact");

        let first = ui.notifications()[0].id;
        ui.dismiss(first);

        assert_eq!(ui.notifications().len(), 1);
        assert_eq!(ui.notifications()[0].kind, NotificationKind::Error);
    }
}
