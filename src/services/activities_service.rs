// src/services/activities_service.rs

use uuid::Uuid;
use validator::Validate;

use crate::{
    api::ActivitiesApi,
    common::error::AppError,
    models::activity::{Activity, CreateActivityPayload, UpdateActivityPayload},
    store::Store,
};

#[derive(Clone)]
pub struct ActivitiesService {
    api: ActivitiesApi,
}

impl ActivitiesService {
    pub fn new(api: ActivitiesApi) -> Self {
        Self { api }
    }

    pub async fn load(&self, store: &mut Store) -> Result<(), AppError> {
        store.activities.set_loading(true);
        store.activities.set_error(None);

        match self.api.get_activities().await {
            Ok(activities) => {
                store.activities.set_activities(activities);
                store.activities.set_loading(false);
                Ok(())
            }
            Err(err) => {
                store.activities.set_loading(false);
                store.activities.set_error(Some(err.to_string()));
                store.ui.notify_error("Failed to load activities");
                Err(err)
            }
        }
    }

    pub async fn create(
        &self,
        store: &mut Store,
        payload: CreateActivityPayload,
    ) -> Result<Activity, AppError> {
        if let Err(errors) = payload.validate() {
            store.ui.notify_error("Failed to create activity");
            return Err(errors.into());
        }

        match self.api.create_activity(payload).await {
            Ok(activity) => {
                store.activities.add_activity(activity.clone());
                store.ui.notify_success("Activity created successfully");
                Ok(activity)
            }
            Err(err) => {
                store.ui.notify_error("Failed to create activity");
                Err(err)
            }
        }
    }

    pub async fn update(
        &self,
        store: &mut Store,
        id: Uuid,
        updates: UpdateActivityPayload,
    ) -> Result<Activity, AppError> {
        if let Err(errors) = updates.validate() {
            store.ui.notify_error("Failed to update activity");
            return Err(errors.into());
        }

        match self.api.update_activity(id, updates).await {
            Ok(activity) => {
                store.activities.update_activity(activity.clone());
                store.ui.notify_success("Activity updated successfully");
                Ok(activity)
            }
            Err(err) => {
                store.ui.notify_error("Failed to update activity");
                Err(err)
            }
        }
    }

    pub async fn delete(&self, store: &mut Store, id: Uuid) -> Result<(), AppError> {
        match self.api.delete_activity(id).await {
            Ok(()) => {
                store.activities.delete_activity(id);
                store.ui.notify_success("Activity deleted successfully");
                Ok(())
            }
            Err(err) => {
                store.ui.notify_error("Failed to delete activity");
                Err(err)
            }
        }
    }
}
