use octofault_lib::{ApiException, ApiResponse};
use serde_json::Value;
use std::path::{Path, PathBuf};

fn workspace_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .expect("CLI crate should be inside workspace")
        .to_path_buf()
}

fn load_fixture_text(name: &str) -> String {
    let path = workspace_root()
        .join("octofault_api/tests/fixtures")
        .join(name);
    std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("read fixture {}: {}", path.display(), e))
}

fn load_schema(name: &str) -> Value {
    let path = workspace_root().join("schema").join(name);
    let text = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("read schema {}: {}", path.display(), e));
    serde_json::from_str(&text).expect("schema is valid JSON")
}

fn serialize_fault(status: u16, body: Option<String>) -> Value {
    let exception = ApiException::from_response(ApiResponse::new(status, body));
    serde_json::to_value(&exception).expect("fault serializes")
}

// ---------------------------------------------------------------------------
// Positive validation
// ---------------------------------------------------------------------------

#[test]
fn test_validation_fixture_conforms_to_payload_schema() {
    let fixture: Value = serde_json::from_str(&load_fixture_text("validation_failed.json"))
        .expect("fixture is valid JSON");
    let schema = load_schema("error_payload.schema.json");

    let validator = jsonschema::draft202012::new(&schema).expect("payload schema compiles");
    let result = validator.validate(&fixture);
    if let Err(e) = &result {
        panic!("validation fixture failed validation: {e}");
    }
}

#[test]
fn test_structured_fault_conforms_to_fault_schema() {
    let data = serialize_fault(422, Some(load_fixture_text("validation_failed.json")));
    let schema = load_schema("fault.schema.json");

    let validator = jsonschema::draft202012::new(&schema).expect("fault schema compiles");
    let result = validator.validate(&data);
    if let Err(e) = &result {
        panic!("structured fault failed validation: {e}");
    }
}

#[test]
fn test_raw_text_faults_conform_to_fault_schema() {
    let schema = load_schema("fault.schema.json");
    let validator = jsonschema::draft202012::new(&schema).expect("fault schema compiles");

    for body in [None, Some(String::new()), Some("{{{{{".to_string())] {
        let data = serialize_fault(504, body);
        assert!(validator.is_valid(&data), "fault should validate: {data}");
    }

    let no_response = serde_json::to_value(ApiException::new()).expect("fault serializes");
    assert!(validator.is_valid(&no_response));
}

// ---------------------------------------------------------------------------
// Negative validation
// ---------------------------------------------------------------------------

#[test]
fn test_payload_schema_rejects_non_array_errors() {
    let schema = load_schema("error_payload.schema.json");
    let data: Value = serde_json::json!({
        "message": "Validation Failed",
        "errors": "not an array"
    });

    let validator = jsonschema::draft202012::new(&schema).expect("schema compiles");
    assert!(
        validator.validate(&data).is_err(),
        "schema should reject errors that are not an array"
    );
}

#[test]
fn test_payload_schema_rejects_null_top_level_fields() {
    let schema = load_schema("error_payload.schema.json");
    let validator = jsonschema::draft202012::new(&schema).expect("schema compiles");

    for data in [
        serde_json::json!({"message": null}),
        serde_json::json!({"message": "Validation Failed", "errors": null}),
        serde_json::json!({"message": "Bad credentials", "documentation_url": null}),
    ] {
        assert!(!validator.is_valid(&data), "schema should reject {data}");
    }
}

#[test]
fn test_fault_schema_rejects_leaked_response() {
    let schema = load_schema("fault.schema.json");
    let mut data = serialize_fault(404, Some(r#"{"message":"Not Found"}"#.to_string()));
    data["http_response"] = serde_json::json!({"status_code": 404});

    let validator = jsonschema::draft202012::new(&schema).expect("schema compiles");
    assert!(
        validator.validate(&data).is_err(),
        "schema should reject a serialized transport response"
    );
}
