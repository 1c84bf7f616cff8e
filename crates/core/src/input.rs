//! Add-task handler over an abstract input field
//!
//! The browser frontend wraps its `<input>` element in an `InputField`;
//! tests drive the same handler with a plain `String`.

use crate::list::TaskList;
use crate::result::ResultExt;
use crate::task::TaskId;

/// A text field the add-task handler reads from and clears.
pub trait InputField {
    /// Current value, exactly as the user typed it
    fn value(&self) -> String;

    /// Reset the value to the empty string
    fn clear(&mut self);
}

impl InputField for String {
    fn value(&self) -> String {
        self.clone()
    }

    fn clear(&mut self) {
        String::clear(self);
    }
}

/// Whitespace as browsers trim it from form values: Unicode `White_Space`
/// plus U+FEFF, minus U+0085 (NEL).
#[must_use]
pub fn is_form_whitespace(c: char) -> bool {
    (c.is_whitespace() && c != '\u{85}') || c == '\u{FEFF}'
}

/// True if `text` is empty once surrounding whitespace is trimmed.
#[must_use]
pub fn is_blank(text: &str) -> bool {
    text.trim_matches(is_form_whitespace).is_empty()
}

/// Reads `field` and appends its value to `list` as a new active entry.
///
/// Blank input is a silent no-op: `list` and `field` are left untouched and
/// `None` is returned. Otherwise the untrimmed value is appended as the last
/// entry, `field` is cleared, and the new entry's id is returned.
pub fn add_task<F>(list: &mut TaskList, field: &mut F) -> Option<TaskId>
where
    F: InputField + ?Sized,
{
    let value = field.value();
    if is_blank(&value) {
        tracing::trace!("blank input ignored");
        return None;
    }

    let id = list.push(value).into_option_logged()?;
    field.clear();
    Some(id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::task::TaskState;

    #[test]
    fn test_is_blank() {
        assert!(is_blank(""));
        assert!(is_blank("   "));
        assert!(is_blank("\t\n "));
        assert!(!is_blank(" a "));
    }

    #[test]
    fn test_is_blank_treats_bom_as_whitespace() {
        assert!(is_blank("\u{FEFF}"));
        assert!(is_blank(" \u{FEFF}\u{A0}\u{3000}\u{2028}"));
    }

    #[test]
    fn test_is_blank_treats_nel_as_text() {
        assert!(!is_blank("\u{85}"));
        assert!(!is_blank(" \u{85} "));
    }

    #[test]
    fn test_add_task_ignores_bom_only_input() {
        let mut list = TaskList::new();
        let mut field = String::from("\u{FEFF}");

        assert_eq!(add_task(&mut list, &mut field), None);
        assert!(list.is_empty());
        assert_eq!(field, "\u{FEFF}");
    }

    #[test]
    fn test_add_task_appends_nel_only_input() {
        let mut list = TaskList::new();
        let mut field = String::from("\u{85}");

        assert_eq!(add_task(&mut list, &mut field), Some(TaskId::new(0)));
        assert_eq!(list.get(TaskId::new(0)).map(|e| e.text()), Some("\u{85}"));
        assert_eq!(field, "");
    }

    #[test]
    fn test_add_task_appends_and_clears() {
        let mut list = TaskList::new();
        let mut field = String::from("Buy milk");

        let id = add_task(&mut list, &mut field);

        assert_eq!(id, Some(TaskId::new(0)));
        assert_eq!(field, "");
        assert_eq!(list.len(), 1);
        assert_eq!(list.get(TaskId::new(0)).map(|e| e.text()), Some("Buy milk"));
        assert_eq!(
            list.get(TaskId::new(0)).map(|e| e.state()),
            Some(TaskState::Active)
        );
    }

    #[test]
    fn test_add_task_blank_is_noop() {
        let mut list = TaskList::new();
        let mut field = String::from("   ");

        assert_eq!(add_task(&mut list, &mut field), None);
        assert_eq!(field, "   ");
        assert!(list.is_empty());
    }

    #[test]
    fn test_add_task_keeps_surrounding_whitespace() {
        let mut list = TaskList::new();
        let mut field = String::from("  padded  ");

        add_task(&mut list, &mut field);

        assert_eq!(list.get(TaskId::new(0)).map(|e| e.text()), Some("  padded  "));
    }
}
