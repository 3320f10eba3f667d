// src/services/tasks_service.rs

use uuid::Uuid;
use validator::Validate;

use crate::{
    api::TasksApi,
    common::error::AppError,
    models::task::{CreateTaskPayload, Task, UpdateTaskPayload},
    store::Store,
};

#[derive(Clone)]
pub struct TasksService {
    api: TasksApi,
}

impl TasksService {
    pub fn new(api: TasksApi) -> Self {
        Self { api }
    }

    pub async fn load(&self, store: &mut Store) -> Result<(), AppError> {
        store.tasks.set_loading(true);
        store.tasks.set_error(None);

        match self.api.get_tasks().await {
            Ok(tasks) => {
                store.tasks.set_tasks(tasks);
                store.tasks.set_loading(false);
                Ok(())
            }
            Err(err) => {
                store.tasks.set_loading(false);
                store.tasks.set_error(Some(err.to_string()));
                store.ui.notify_error("Failed to load tasks");
                Err(err)
            }
        }
    }

    pub async fn create(
        &self,
        store: &mut Store,
        payload: CreateTaskPayload,
    ) -> Result<Task, AppError> {
        if let Err(errors) = payload.validate() {
            store.ui.notify_error("Failed to create task");
            return Err(errors.into());
        }

        match self.api.create_task(payload).await {
            Ok(task) => {
                store.tasks.add_task(task.clone());
                store.ui.notify_success("Task created successfully");
                Ok(task)
            }
            Err(err) => {
                store.ui.notify_error("Failed to create task");
                Err(err)
            }
        }
    }

    pub async fn update(
        &self,
        store: &mut Store,
        id: Uuid,
        updates: UpdateTaskPayload,
    ) -> Result<Task, AppError> {
        if let Err(errors) = updates.validate() {
            store.ui.notify_error("Failed to update task");
            return Err(errors.into());
        }

        match self.api.update_task(id, updates).await {
            Ok(task) => {
                store.tasks.update_task(task.clone());
                store.ui.notify_success("Task updated successfully");
                Ok(task)
            }
            Err(err) => {
                store.ui.notify_error("Failed to update task");
                Err(err)
            }
        }
    }

    pub async fn delete(&self, store: &mut Store, id: Uuid) -> Result<(), AppError> {
        match self.api.delete_task(id).await {
            Ok(()) => {
                store.tasks.delete_task(id);
                store.ui.notify_success("Task deleted successfully");
                Ok(())
            }
            Err(err) => {
                store.ui.notify_error("Failed to delete task");
                Err(err)
            }
        }
    }

    /// Checkbox da lista: a API resolve com a tarefa pós-toggle e o store
    /// recebe exatamente esse registro.
    pub async fn toggle(&self, store: &mut Store, id: Uuid) -> Result<Task, AppError> {
        match self.api.toggle_task(id).await {
            Ok(task) => {
                store.tasks.update_task(task.clone());
                store.ui.notify_success(if task.completed {
                    "Task completed"
                } else {
                    "Task reopened"
                });
                Ok(task)
            }
            Err(err) => {
                store.ui.notify_error("Failed to update task");
                Err(err)
            }
        }
    }
}
