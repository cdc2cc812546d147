//! In-memory task store
//!
//! Holds the ordered task list and keeps the completed count in step with
//! every mutation. Rendering is the caller's job.

use super::error::{TaskError, TaskResult};
use super::types::{Task, TaskId};

/// Ordered collection of tasks with a tracked completed count
#[derive(Debug, Default)]
pub struct TaskStore {
    /// Tasks in insertion (display) order
    tasks: Vec<Task>,
    /// Number of tasks with `completed == true`
    completed: usize,
    /// Next id to hand out
    next_id: u64,
}

impl TaskStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self {
            tasks: Vec::new(),
            completed: 0,
            next_id: 1,
        }
    }

    /// Add a task from user input
    ///
    /// The text is trimmed; blank input is rejected and leaves the store
    /// untouched.
    pub fn add(&mut self, text: &str) -> TaskResult<Task> {
        let text = text.trim();
        if text.is_empty() {
            return Err(TaskError::Validation("task text is empty".to_string()));
        }

        let id = TaskId::new(self.next_id.max(1));
        self.next_id = id.get() + 1;

        let task = Task::new(id, text);
        self.tasks.push(task.clone());

        tracing::debug!(task_id = %id, "Task added");
        Ok(task)
    }

    /// Add every valid text in order, skipping blank entries
    pub fn seed<I, S>(&mut self, texts: I) -> Vec<Task>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        texts
            .into_iter()
            .filter_map(|text| match self.add(text.as_ref()) {
                Ok(task) => Some(task),
                Err(e) => {
                    tracing::warn!("Skipping sample task: {}", e);
                    None
                }
            })
            .collect()
    }

    /// Flip the completed flag of a task
    pub fn toggle(&mut self, id: TaskId) -> TaskResult<Task> {
        let task = self
            .tasks
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or(TaskError::NotFound(id))?;

        task.completed = !task.completed;
        if task.completed {
            self.completed += 1;
        } else {
            self.completed -= 1;
        }

        tracing::debug!(task_id = %id, completed = task.completed, "Task toggled");
        Ok(task.clone())
    }

    /// Remove a task, returning it
    pub fn remove(&mut self, id: TaskId) -> TaskResult<Task> {
        let index = self
            .tasks
            .iter()
            .position(|t| t.id == id)
            .ok_or(TaskError::NotFound(id))?;

        let task = self.tasks.remove(index);
        if task.completed {
            self.completed -= 1;
        }

        tracing::debug!(task_id = %id, "Task removed");
        Ok(task)
    }

    /// Tasks in insertion order
    pub fn list(&self) -> &[Task] {
        &self.tasks
    }

    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    /// Number of completed tasks
    pub fn completed_count(&self) -> usize {
        debug_assert_eq!(
            self.completed,
            self.tasks.iter().filter(|t| t.completed).count()
        );
        self.completed
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn recount(store: &TaskStore) -> usize {
        store.list().iter().filter(|t| t.completed).count()
    }

    #[test]
    fn test_add_trims_and_appends() {
        let mut store = TaskStore::new();
        let a = store.add("  Buy milk ").unwrap();
        let b = store.add("Call mom").unwrap();

        assert_eq!(a.text, "Buy milk");
        assert!(!a.completed);
        assert_ne!(a.id, b.id);

        let texts: Vec<_> = store.list().iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, vec!["Buy milk", "Call mom"]);
    }

    #[test]
    fn test_add_rejects_blank_text() {
        let mut store = TaskStore::new();
        store.add("Existing").unwrap();

        for input in ["", "   ", "\t\n"] {
            let result = store.add(input);
            assert!(matches!(result, Err(TaskError::Validation(_))));
        }

        assert_eq!(store.len(), 1);
        assert_eq!(store.completed_count(), 0);
    }

    #[test]
    fn test_toggle_twice_restores_state() {
        let mut store = TaskStore::new();
        let task = store.add("Write tests").unwrap();

        let toggled = store.toggle(task.id).unwrap();
        assert!(toggled.completed);
        assert_eq!(store.completed_count(), 1);

        let toggled = store.toggle(task.id).unwrap();
        assert!(!toggled.completed);
        assert_eq!(store.completed_count(), 0);
    }

    #[test]
    fn test_remove_adjusts_count_only_for_completed() {
        let mut store = TaskStore::new();
        let a = store.add("a").unwrap();
        let b = store.add("b").unwrap();
        store.toggle(a.id).unwrap();
        store.toggle(b.id).unwrap();
        assert_eq!(store.completed_count(), 2);

        store.toggle(b.id).unwrap();
        let removed = store.remove(b.id).unwrap();
        assert!(!removed.completed);
        assert_eq!(store.completed_count(), 1);

        let removed = store.remove(a.id).unwrap();
        assert!(removed.completed);
        assert_eq!(store.completed_count(), 0);
        assert!(store.is_empty());
    }

    #[test]
    fn test_removed_id_is_gone() {
        let mut store = TaskStore::new();
        let task = store.add("Temporary").unwrap();
        store.remove(task.id).unwrap();

        assert_eq!(store.toggle(task.id), Err(TaskError::NotFound(task.id)));
        assert_eq!(store.remove(task.id), Err(TaskError::NotFound(task.id)));
        assert!(store.get(task.id).is_none());
    }

    #[test]
    fn test_ids_are_not_reused() {
        let mut store = TaskStore::new();
        let a = store.add("a").unwrap();
        store.remove(a.id).unwrap();
        let b = store.add("b").unwrap();
        assert!(b.id > a.id);
    }

    #[test]
    fn test_seed_skips_blank_entries() {
        let mut store = TaskStore::new();
        let seeded = store.seed(["Review project proposal", "  ", "Prepare for client meeting"]);
        assert_eq!(seeded.len(), 2);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_buy_milk_scenario() {
        let mut store = TaskStore::new();
        let task = store.add("Buy milk").unwrap();
        assert_eq!(store.len(), 1);
        assert_eq!(store.completed_count(), 0);

        let task = store.toggle(task.id).unwrap();
        assert!(task.completed);
        assert_eq!(store.completed_count(), 1);

        store.remove(task.id).unwrap();
        assert!(store.is_empty());
        assert_eq!(store.completed_count(), 0);
        assert_eq!(store.remove(task.id), Err(TaskError::NotFound(task.id)));
    }

    #[test]
    fn test_completed_count_never_drifts() {
        let mut store = TaskStore::new();
        let mut ids = Vec::new();
        let mut rng = StdRng::seed_from_u64(0x2545_f491);

        for i in 0..2000 {
            match rng.gen_range(0..4) {
                0 | 1 => {
                    let task = store.add(&format!("task {}", i)).unwrap();
                    ids.push(task.id);
                }
                2 if !ids.is_empty() => {
                    let id = ids[rng.gen_range(0..ids.len())];
                    let _ = store.toggle(id);
                }
                3 if !ids.is_empty() => {
                    let idx = rng.gen_range(0..ids.len());
                    let id = ids[idx];
                    // Keep some stale ids around to exercise NotFound
                    if rng.gen_bool(0.5) {
                        ids.swap_remove(idx);
                    }
                    let _ = store.remove(id);
                }
                _ => {}
            }

            assert_eq!(store.completed_count(), recount(&store));
        }
    }
}
