pub mod activity;
pub mod contact;
pub mod dashboard;
pub mod deal;
pub mod settings;
pub mod task;
