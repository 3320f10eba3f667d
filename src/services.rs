pub mod activities_service;
pub use activities_service::ActivitiesService;
pub mod contacts_service;
pub use contacts_service::ContactsService;
pub mod dashboard_service;
pub use dashboard_service::DashboardService;
pub mod deals_service;
pub use deals_service::DealsService;
pub mod settings_service;
pub use settings_service::SettingsService;
pub mod tasks_service;
pub use tasks_service::TasksService;
