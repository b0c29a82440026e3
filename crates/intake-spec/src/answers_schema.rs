use serde_json::{Map, Value, json};

use crate::spec::{field::FieldKind, form::FormSpec};

/// JSON Schema describing the flattened submission payload of `spec`.
pub fn generate(spec: &FormSpec) -> Value {
    let mut properties = Map::new();
    let mut required = Vec::new();

    for field in spec.fields() {
        let mut property = Map::new();
        property.insert("type".into(), Value::String("string".into()));
        if !field.label.is_empty() {
            property.insert("title".into(), Value::String(field.label.clone()));
        }
        match field.kind {
            FieldKind::SingleChoice => {
                property.insert(
                    "enum".into(),
                    Value::Array(
                        field
                            .options
                            .iter()
                            .map(|option| Value::String(option.clone()))
                            .collect(),
                    ),
                );
            }
            FieldKind::MultiChoice => {
                property.insert(
                    "description".into(),
                    Value::String(format!(
                        "Comma-separated selection of: {}",
                        field.options.join(" | ")
                    )),
                );
            }
            FieldKind::Url => {
                property.insert("format".into(), Value::String("uri".into()));
            }
            FieldKind::Email => {
                property.insert("format".into(), Value::String("email".into()));
            }
            FieldKind::ShortText => {}
        }
        if field.required {
            property.insert("minLength".into(), Value::from(1));
            required.push(Value::String(field.name.clone()));
        }
        properties.insert(field.name.clone(), Value::Object(property));

        if let Some(key) = field.other_key() {
            properties.insert(
                key,
                json!({
                    "type": "string",
                    "description": format!("Free text sent when '{}' includes \"Other\"", field.name),
                }),
            );
        }
    }

    json!({
        "$schema": "https://json-schema.org/draft/2020-12/schema",
        "title": format!("{} answers", spec.title),
        "type": "object",
        "properties": properties,
        "required": required,
        "additionalProperties": false,
    })
}
