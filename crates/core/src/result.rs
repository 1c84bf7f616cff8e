//! Crate `Result` alias and the combinators that end a fallible chain at
//! an event boundary (the add-task handler, UI click handlers).

use crate::error::Error;

/// Result of a task list operation.
///
/// # Examples
///
/// ```
/// use taskpad_core::{Result, TaskList, TaskState};
///
/// fn add_and_finish(list: &mut TaskList, text: &str) -> Result<TaskState> {
///     let id = list.push(text)?;
///     list.toggle(id)
/// }
///
/// let mut list = TaskList::new();
/// assert_eq!(add_and_finish(&mut list, "Buy milk"), Ok(TaskState::Completed));
/// assert!(add_and_finish(&mut list, "  ").is_err());
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// Ends a `Result` chain where no caller can take the error.
pub trait ResultExt<T> {
    /// `Ok` becomes `Some`; an `Err` is emitted as a `tracing` warning and
    /// becomes `None`.
    fn into_option_logged(self) -> Option<T>;

    /// Hands the error, if any, to `f` and returns the result unchanged.
    #[must_use]
    fn inspect_error<F: FnOnce(&Error)>(self, f: F) -> Self;
}

impl<T> ResultExt<T> for Result<T> {
    fn into_option_logged(self) -> Option<T> {
        match self {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::warn!(error = %e, "task operation dropped");
                None
            }
        }
    }

    fn inspect_error<F: FnOnce(&Error)>(self, f: F) -> Self {
        if let Err(ref e) = self {
            f(e);
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::task::TaskId;

    #[test]
    fn test_into_option_logged_ok() {
        let result: Result<u8> = Ok(3);
        assert_eq!(result.into_option_logged(), Some(3));
    }

    #[test]
    fn test_into_option_logged_err() {
        let result: Result<u8> = Err(Error::BlankTask);
        assert_eq!(result.into_option_logged(), None);
    }

    #[test]
    fn test_inspect_error_sees_error_only() {
        let mut seen = Vec::new();

        let ok: Result<u8> = Ok(1);
        let _ = ok.inspect_error(|e| seen.push(e.clone()));
        assert!(seen.is_empty());

        let err: Result<u8> = Err(Error::task_not_found(TaskId::new(2)));
        let _ = err.inspect_error(|e| seen.push(e.clone()));
        assert_eq!(seen, vec![Error::task_not_found(TaskId::new(2))]);
    }
}
