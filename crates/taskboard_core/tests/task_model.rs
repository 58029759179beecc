use taskboard_core::{
    Task, TaskPriority, TaskStatus, TaskTitle, TaskValidationError, MAX_TITLE_CHARS,
};
use uuid::Uuid;

#[test]
fn task_serialization_uses_expected_wire_fields() {
    let id = Uuid::parse_str("11111111-2222-4333-8444-555555555555").unwrap();
    let task = Task {
        id,
        title: TaskTitle::parse("Ship release").unwrap(),
        description: Some("tag and publish".to_string()),
        priority: TaskPriority::High,
        status: TaskStatus::InProgress,
    };

    let json = serde_json::to_value(&task).unwrap();
    assert_eq!(json["id"], id.to_string());
    assert_eq!(json["title"], "Ship release");
    assert_eq!(json["description"], "tag and publish");
    assert_eq!(json["priority"], "high");
    assert_eq!(json["status"], "in-progress");

    let decoded: Task = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, task);
}

#[test]
fn absent_description_serializes_as_null() {
    let task = Task {
        id: Uuid::new_v4(),
        title: TaskTitle::parse("A").unwrap(),
        description: None,
        priority: TaskPriority::Medium,
        status: TaskStatus::Todo,
    };

    let json = serde_json::to_value(&task).unwrap();
    assert!(json["description"].is_null());
    assert_eq!(json["status"], "todo");
}

#[test]
fn deserialize_rejects_invalid_title() {
    let value = serde_json::json!({
        "id": "11111111-2222-4333-8444-555555555555",
        "title": "   ",
        "description": null,
        "priority": "low",
        "status": "todo"
    });

    let err = serde_json::from_value::<Task>(value).unwrap_err();
    assert!(
        err.to_string().contains("task title must not be empty"),
        "unexpected error: {err}"
    );
}

#[test]
fn deserialize_rejects_unknown_status() {
    let value = serde_json::json!({
        "id": "11111111-2222-4333-8444-555555555555",
        "title": "A",
        "description": null,
        "priority": "low",
        "status": "cancelled"
    });

    assert!(serde_json::from_value::<Task>(value).is_err());
}

#[test]
fn title_boundary_is_inclusive() {
    assert!(TaskTitle::parse(&"x".repeat(MAX_TITLE_CHARS)).is_ok());
    assert!(matches!(
        TaskTitle::parse(&"x".repeat(MAX_TITLE_CHARS + 1)),
        Err(TaskValidationError::TitleTooLong { .. })
    ));
}

#[test]
fn deserialize_normalizes_description() {
    let decode = |description: serde_json::Value| {
        let value = serde_json::json!({
            "id": "11111111-2222-4333-8444-555555555555",
            "title": "A",
            "description": description,
            "priority": "low",
            "status": "todo"
        });
        serde_json::from_value::<Task>(value).unwrap().description
    };

    assert_eq!(decode(serde_json::json!("")), None);
    assert_eq!(decode(serde_json::json!("  \n ")), None);
    assert_eq!(decode(serde_json::Value::Null), None);
    assert_eq!(decode(serde_json::json!(" notes ")), Some("notes".to_string()));
}

#[test]
fn deserialize_accepts_missing_description() {
    let value = serde_json::json!({
        "id": "11111111-2222-4333-8444-555555555555",
        "title": "A",
        "priority": "low",
        "status": "todo"
    });

    let task = serde_json::from_value::<Task>(value).unwrap();
    assert_eq!(task.description, None);
}
