// src/store/activities.rs

use uuid::Uuid;

use crate::models::activity::Activity;

#[derive(Debug, Default)]
pub struct ActivitiesState {
    activities: Vec<Activity>,
    pub loading: bool,
    pub error: Option<String>,
    pub selected: Option<Activity>,
    pub editing: Option<Activity>,
}

impl ActivitiesState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn all(&self) -> &[Activity] {
        &self.activities
    }

    pub fn find(&self, id: Uuid) -> Option<&Activity> {
        self.activities.iter().find(|a| a.id == id)
    }

    pub fn set_activities(&mut self, activities: Vec<Activity>) {
        self.activities = activities;
    }

    /// Nova atividade entra na FRENTE da lista.
    pub fn add_activity(&mut self, activity: Activity) {
        self.activities.insert(0, activity);
    }

    pub fn update_activity(&mut self, updated: Activity) {
        if let Some(slot) = self.activities.iter_mut().find(|a| a.id == updated.id) {
            *slot = updated.clone();
        }
        if self.selected.as_ref().is_some_and(|a| a.id == updated.id) {
            self.selected = Some(updated);
        }
    }

    pub fn delete_activity(&mut self, id: Uuid) {
        self.activities.retain(|a| a.id != id);
        if self.selected.as_ref().is_some_and(|a| a.id == id) {
            self.selected = None;
        }
    }

    pub fn set_selected(&mut self, activity: Option<Activity>) {
        self.selected = activity;
    }

    pub fn set_editing(&mut self, activity: Option<Activity>) {
        self.editing = activity;
    }

    pub fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
    }

    pub fn set_error(&mut self, error: Option<String>) {
        self.error = error;
    }
}
