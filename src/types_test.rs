use super::*;
use serde_json::json;

#[test]
fn default_response_is_empty() {
    assert!(TestCaseResponse::default().is_empty());
}

#[test]
fn response_with_output_is_not_empty() {
    assert!(!TestCaseResponse::new("ok", serde_json::Value::Null).is_empty());
}

#[test]
fn response_with_body_is_not_empty() {
    assert!(!TestCaseResponse::new("", json!({})).is_empty());
}

#[test]
fn response_serializes_output_and_body() {
    let resp = TestCaseResponse::new("ok", json!({"status": 200}));
    let value = serde_json::to_value(&resp).unwrap();
    assert_eq!(value, json!({"output": "ok", "body": {"status": 200}}));
}

#[test]
fn response_missing_fields_fall_back_to_defaults() {
    let resp: TestCaseResponse = serde_json::from_str("{}").unwrap();
    assert!(resp.is_empty());

    let resp: TestCaseResponse = serde_json::from_str(r#"{"output":"done"}"#).unwrap();
    assert_eq!(resp.output, "done");
    assert!(resp.body.is_null());
}

#[test]
fn response_body_accepts_any_json_shape() {
    let resp: TestCaseResponse = serde_json::from_str(r#"{"output":"","body":[1,"two",null,{"k":false}]}"#).unwrap();
    assert_eq!(resp.body, json!([1, "two", null, {"k": false}]));
}

#[test]
fn location_serializes_suite_and_testcase() {
    let loc = LastTestCaseLocation::new("suite-A", "case-1");
    let raw = serde_json::to_string(&loc).unwrap();
    assert_eq!(raw, r#"{"suite":"suite-A","testcase":"case-1"}"#);
}

#[test]
fn location_missing_fields_fall_back_to_defaults() {
    let loc: LastTestCaseLocation = serde_json::from_str(r#"{"suite":"s"}"#).unwrap();
    assert_eq!(loc, LastTestCaseLocation::new("s", ""));
}
