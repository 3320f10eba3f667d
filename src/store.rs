pub mod activities;
pub mod contacts;
pub mod deals;
pub mod settings;
pub mod tasks;
pub mod ui;

pub use activities::ActivitiesState;
pub use contacts::ContactsState;
pub use deals::DealsState;
pub use settings::SettingsState;
pub use tasks::TasksState;
pub use ui::UiState;

// O store do lado do cliente: uma fatia por entidade mais a casca da UI.
// Construído explicitamente no início da aplicação e injetado nos serviços
// (`&mut Store` por chamada) — nada de singleton de módulo. Todo o estado é
// volátil: some no fim do processo, igual a um reload da página.
#[derive(Debug, Default)]
pub struct Store {
    pub contacts: ContactsState,
    pub deals: DealsState,
    pub activities: ActivitiesState,
    pub tasks: TasksState,
    pub ui: UiState,
    pub settings: SettingsState,
}

impl Store {
    pub fn new() -> Self {
        Self::default()
    }

    /// Volta todas as fatias ao estado inicial (o "reload" explícito).
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}
