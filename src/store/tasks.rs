// src/store/tasks.rs

use uuid::Uuid;

use crate::models::task::Task;

#[derive(Debug, Default)]
pub struct TasksState {
    tasks: Vec<Task>,
    pub loading: bool,
    pub error: Option<String>,
    pub selected: Option<Task>,
    pub editing: Option<Task>,
}

impl TasksState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn all(&self) -> &[Task] {
        &self.tasks
    }

    pub fn find(&self, id: Uuid) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    pub fn set_tasks(&mut self, tasks: Vec<Task>) {
        self.tasks = tasks;
    }

    /// Nova tarefa entra na FRENTE da lista.
    pub fn add_task(&mut self, task: Task) {
        self.tasks.insert(0, task);
    }

    pub fn update_task(&mut self, updated: Task) {
        if let Some(slot) = self.tasks.iter_mut().find(|t| t.id == updated.id) {
            *slot = updated.clone();
        }
        if self.selected.as_ref().is_some_and(|t| t.id == updated.id) {
            self.selected = Some(updated);
        }
    }

    /// Inverte o flag mantendo `status` consistente (regra no próprio Task).
    pub fn toggle_task(&mut self, id: Uuid) {
        if let Some(task) = self.tasks.iter_mut().find(|t| t.id == id) {
            task.toggle_completed();
        }
    }

    pub fn delete_task(&mut self, id: Uuid) {
        self.tasks.retain(|t| t.id != id);
        if self.selected.as_ref().is_some_and(|t| t.id == id) {
            self.selected = None;
        }
    }

    pub fn set_selected(&mut self, task: Option<Task>) {
        self.selected = task;
    }

    pub fn set_editing(&mut self, task: Option<Task>) {
        self.editing = task;
    }

    pub fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
    }

    pub fn set_error(&mut self, error: Option<String>) {
        self.error = error;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::task::{TaskPriority, TaskStatus};
    use chrono::NaiveDate;

    fn task(completed: bool, status: TaskStatus) -> Task {
        Task {
            id: Uuid::new_v4(),
            title: "Tarefa".to_string(),
            description: String::new(),
            assignee: "John Doe".to_string(),
            contact: None,
            company: None,
            due_date: NaiveDate::from_ymd_opt(2024, 1, 20).unwrap(),
            priority: TaskPriority::Medium,
            status,
            completed,
            created_date: NaiveDate::from_ymd_opt(2024, 1, 10).unwrap(),
            created_by: "John Doe".to_string(),
            estimated_time: None,
            actual_time: None,
            tags: vec![],
            related_deal: None,
            progress: None,
        }
    }

    #[test]
    fn toggle_keeps_status_consistent_both_ways() {
        let mut state = TasksState::new();
        let t = task(false, TaskStatus::InProgress);
        let id = t.id;
        state.add_task(t);

        state.toggle_task(id);
        let toggled = state.find(id).unwrap();
        assert!(toggled.completed);
        assert_eq!(toggled.status, TaskStatus::Completed);

        state.toggle_task(id);
        let back = state.find(id).unwrap();
        assert!(!back.completed);
        assert_eq!(back.status, TaskStatus::Pending);
    }
}
