//! Behavioral tests for page configuration

use crate::config::UiConfig;
use crate::error::UiError;

#[test]
fn given_no_overrides_when_parsing_then_ids_match_the_page_markup() {
    // Given/When
    let config = UiConfig::from_json("{}");

    // Then
    assert_eq!(config, Ok(UiConfig::default()));
    let config = config.unwrap_or_default();
    assert_eq!(config.input_id, "taskInput");
    assert_eq!(config.list_id, "taskList");
    assert_eq!(config.placeholder, "Add a new task...");
}

#[test]
fn given_all_fields_when_parsing_then_every_override_applies() {
    // Given
    let json = r#"{
        "title": "Chores",
        "input_id": "chore-input",
        "list_id": "chore-list",
        "placeholder": "What needs doing?",
        "add_label": "+",
        "completed_class": "done"
    }"#;

    // When
    let result = UiConfig::from_json(json);

    // Then
    assert_eq!(
        result,
        Ok(UiConfig {
            title: "Chores".to_string(),
            input_id: "chore-input".to_string(),
            list_id: "chore-list".to_string(),
            placeholder: "What needs doing?".to_string(),
            add_label: "+".to_string(),
            completed_class: "done".to_string(),
        })
    );
}

#[test]
fn given_wrong_field_type_when_parsing_then_config_is_invalid() {
    // Given
    let json = r#"{"title": 42}"#;

    // When
    let result = UiConfig::from_json(json);

    // Then
    assert!(
        matches!(result, Err(UiError::InvalidConfig(_))),
        "Non-string title should be rejected"
    );
}

#[test]
fn given_blank_completed_class_when_parsing_then_config_is_invalid() {
    let result = UiConfig::from_json(r#"{"completed_class": ""}"#);

    assert_eq!(
        result,
        Err(UiError::InvalidConfig(
            "completed_class must not be blank".to_string()
        ))
    );
}
