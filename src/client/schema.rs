//! Schema transformation for Gemini structured output.
//!
//! Gemini accepts an OpenAPI subset: upper-case type names, no `$ref`,
//! and nullability expressed as `nullable: true`.

use serde_json::{Map, Value};

/// Keys Gemini rejects inside a `responseSchema`.
const UNSUPPORTED_KEYWORDS: &[&str] = &[
    "$schema",
    "$id",
    "$defs",
    "definitions",
    "title",
    "additionalProperties",
    "default",
    "examples",
];

/// Rewrite a JSON schema produced by schemars into Gemini's dialect.
pub fn transform_for_gemini(schema: Value) -> Value {
    let defs = match &schema {
        Value::Object(map) => map
            .get("$defs")
            .or_else(|| map.get("definitions"))
            .and_then(Value::as_object)
            .cloned()
            .unwrap_or_default(),
        _ => Map::new(),
    };
    transform_node(schema, &defs)
}

fn transform_node(value: Value, defs: &Map<String, Value>) -> Value {
    match value {
        Value::Object(map) => transform_object(map, defs),
        Value::Array(items) => Value::Array(
            items
                .into_iter()
                .map(|v| transform_node(v, defs))
                .collect(),
        ),
        other => other,
    }
}

fn transform_object(mut map: Map<String, Value>, defs: &Map<String, Value>) -> Value {
    if let Some(Value::String(reference)) = map.remove("$ref")
        && let Some(target) = reference.rsplit('/').next().and_then(|name| defs.get(name))
    {
        return transform_node(target.clone(), defs);
    }

    for keyword in UNSUPPORTED_KEYWORDS {
        map.remove(*keyword);
    }

    if let Some(ty) = map.remove("type") {
        let (ty, nullable) = normalize_type(ty);
        if let Some(ty) = ty {
            map.insert("type".into(), Value::String(ty));
        }
        if nullable {
            map.insert("nullable".into(), Value::Bool(true));
        }
    }

    let mut out = Map::with_capacity(map.len());
    for (key, value) in map {
        let value = if key == "properties" {
            match value {
                // Property names are data, not keywords.
                Value::Object(props) => Value::Object(
                    props
                        .into_iter()
                        .map(|(name, v)| (name, transform_node(v, defs)))
                        .collect(),
                ),
                other => other,
            }
        } else {
            transform_node(value, defs)
        };
        out.insert(key, value);
    }
    Value::Object(out)
}

/// `"string"` becomes `"STRING"`; `["string", "null"]` becomes
/// `("STRING", nullable)`.
fn normalize_type(ty: Value) -> (Option<String>, bool) {
    match ty {
        Value::String(s) => (Some(s.to_uppercase()), false),
        Value::Array(types) => {
            let nullable = types.iter().any(|t| t.as_str() == Some("null"));
            let ty = types
                .iter()
                .filter_map(Value::as_str)
                .find(|t| *t != "null")
                .map(str::to_uppercase);
            (ty, nullable)
        }
        _ => (None, false),
    }
}

/// Generate a Gemini response schema from a Rust type using schemars.
pub fn gemini_schema<T: schemars::JsonSchema>() -> Value {
    let schema = schemars::schema_for!(T);
    let value = serde_json::to_value(schema).unwrap_or_default();
    transform_for_gemini(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_types_are_uppercased() {
        let schema = json!({
            "$schema": "https://json-schema.org/draft/2020-12/schema",
            "title": "Tool",
            "type": "object",
            "properties": {
                "name": {"type": "string"},
                "tags": {"type": "array", "items": {"type": "string"}}
            },
            "required": ["name"],
            "additionalProperties": false
        });

        let result = transform_for_gemini(schema);
        assert_eq!(
            result,
            json!({
                "type": "OBJECT",
                "properties": {
                    "name": {"type": "STRING"},
                    "tags": {"type": "ARRAY", "items": {"type": "STRING"}}
                },
                "required": ["name"]
            })
        );
    }

    #[test]
    fn test_refs_are_inlined() {
        let schema = json!({
            "type": "array",
            "items": {"$ref": "#/$defs/Item"},
            "$defs": {
                "Item": {
                    "type": "object",
                    "properties": {"url": {"type": "string"}}
                }
            }
        });

        let result = transform_for_gemini(schema);
        assert!(result.get("$defs").is_none());
        assert_eq!(result["items"]["type"], "OBJECT");
        assert_eq!(result["items"]["properties"]["url"]["type"], "STRING");
    }

    #[test]
    fn test_nullable_type_arrays() {
        let result = transform_for_gemini(json!({"type": ["string", "null"]}));
        assert_eq!(result, json!({"type": "STRING", "nullable": true}));
    }

    #[test]
    fn test_property_named_like_keyword_is_kept() {
        let schema = json!({
            "type": "object",
            "properties": {"title": {"type": "string", "title": "Title"}}
        });

        let result = transform_for_gemini(schema);
        assert_eq!(result["properties"]["title"], json!({"type": "STRING"}));
    }
}
