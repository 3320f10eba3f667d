pub mod latency;
pub use latency::Latency;
pub mod contacts;
pub use contacts::ContactsApi;
pub mod deals;
pub use deals::DealsApi;
pub mod activities;
pub use activities::ActivitiesApi;
pub mod tasks;
pub use tasks::TasksApi;
