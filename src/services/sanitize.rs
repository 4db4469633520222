//! Sanitizes raw model output into a lesson document.
//!
//! Models routinely wrap JSON answers in markdown code fences despite being
//! told not to. This module strips that wrapping, parses the remainder and
//! backfills a generated id when the model omitted one.

use crate::error::AppError;
use serde_json::Value;

/// Strip a leading ```` ```json ````/```` ``` ```` marker and a trailing
/// ```` ``` ```` marker, each with an optional adjacent newline. Idempotent;
/// a no-op on already-unwrapped documents.
pub fn strip_code_fences(raw: &str) -> &str {
    let mut text = raw.trim();

    if let Some(rest) = text.strip_prefix("```json") {
        text = rest.strip_prefix('\n').unwrap_or(rest);
    } else if let Some(rest) = text.strip_prefix("```") {
        text = rest.strip_prefix('\n').unwrap_or(rest);
    }

    if let Some(rest) = text.strip_suffix("```") {
        text = rest.strip_suffix('\n').unwrap_or(rest);
    }

    text.trim()
}

/// Parse sanitized model output as a JSON document and ensure it carries an
/// id. Parse failure is a `MalformedResponse`.
pub fn parse_lesson(raw: &str) -> Result<Value, AppError> {
    let cleaned = strip_code_fences(raw);
    let mut doc: Value =
        serde_json::from_str(cleaned).map_err(|e| AppError::MalformedResponse(e.to_string()))?;
    ensure_lesson_id(&mut doc);
    Ok(doc)
}

/// Inject `lesson-<unix-millis>` when the document has no usable id. A
/// missing key, null, or an empty string all count as absent, matching the
/// original contract. An existing id is never overwritten.
pub fn ensure_lesson_id(doc: &mut Value) {
    let Value::Object(map) = doc else {
        return;
    };

    let absent = match map.get("id") {
        None | Some(Value::Null) => true,
        Some(Value::String(s)) => s.is_empty(),
        Some(_) => false,
    };

    if absent {
        let id = format!("lesson-{}", chrono::Utc::now().timestamp_millis());
        map.insert("id".to_string(), Value::String(id));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn strips_json_fence_wrapping() {
        assert_eq!(strip_code_fences("```json\n{\"a\":1}\n```"), "{\"a\":1}");
        assert_eq!(strip_code_fences("```\n{\"a\":1}\n```"), "{\"a\":1}");
        assert_eq!(strip_code_fences("```json{\"a\":1}```"), "{\"a\":1}");
    }

    #[test]
    fn stripping_is_idempotent() {
        let once = strip_code_fences("```json\n{\"a\":1}\n```").to_string();
        assert_eq!(strip_code_fences(&once), once);
    }

    #[test]
    fn unwrapped_documents_pass_through() {
        assert_eq!(strip_code_fences("{\"a\":1}"), "{\"a\":1}");
        assert_eq!(strip_code_fences("  {\"a\":1}  \n"), "{\"a\":1}");
    }

    #[test]
    fn fenced_and_plain_documents_parse_identically() {
        let fenced = parse_lesson("```json\n{\"a\":1,\"id\":\"x\"}\n```").unwrap();
        let plain = parse_lesson("{\"a\":1,\"id\":\"x\"}").unwrap();
        assert_eq!(fenced, plain);
    }

    #[test]
    fn non_json_output_is_a_malformed_response() {
        let err = parse_lesson("Aqui está a sua lição!").unwrap_err();
        assert!(matches!(err, AppError::MalformedResponse(_)));
    }

    #[test]
    fn missing_id_is_backfilled() {
        let doc = parse_lesson("{\"title\":\"Lição\"}").unwrap();
        let id = doc["id"].as_str().unwrap();
        let digits = id.strip_prefix("lesson-").unwrap();
        assert!(!digits.is_empty());
        assert!(digits.chars().all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn null_and_empty_ids_are_backfilled() {
        for raw in ["{\"id\":null}", "{\"id\":\"\"}"] {
            let doc = parse_lesson(raw).unwrap();
            assert!(doc["id"].as_str().unwrap().starts_with("lesson-"));
        }
    }

    #[test]
    fn existing_id_is_preserved() {
        let doc = parse_lesson("{\"id\":\"lesson-custom\"}").unwrap();
        assert_eq!(doc["id"], "lesson-custom");
    }

    #[test]
    fn non_object_documents_are_left_alone() {
        let mut doc = json!([1, 2, 3]);
        ensure_lesson_id(&mut doc);
        assert_eq!(doc, json!([1, 2, 3]));
    }
}
