//! Task store error types

use thiserror::Error;

use super::types::TaskId;

/// Errors that can occur when mutating the task store
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TaskError {
    /// Task text failed validation (empty after trimming)
    #[error("Validation error: {0}")]
    Validation(String),

    /// No task with the given id exists in the store
    #[error("Task not found: {0}")]
    NotFound(TaskId),
}

/// Result type alias for task store operations
pub type TaskResult<T> = Result<T, TaskError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = TaskError::Validation("task text is empty".to_string());
        assert_eq!(err.to_string(), "Validation error: task text is empty");

        let err = TaskError::NotFound(TaskId::new(42));
        assert_eq!(err.to_string(), "Task not found: #42");
    }
}
