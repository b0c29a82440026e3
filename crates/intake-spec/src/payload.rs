use serde::ser::{Serialize, SerializeMap, Serializer};
use serde_json::{Map, Value};

use crate::answers::AnswerSet;
use crate::spec::form::FormSpec;
use crate::visibility::other_visible;

/// Flattened field/value pairs handed to the submission collaborator.
///
/// Pairs follow form field order; an auxiliary "Other" entry directly
/// follows its owning field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubmissionPayload {
    form_id: String,
    fields: Vec<(String, String)>,
}

impl SubmissionPayload {
    pub fn form_id(&self) -> &str {
        &self.form_id
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_str()))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn to_json(&self) -> Value {
        let map = self
            .iter()
            .map(|(key, value)| (key.to_string(), Value::String(value.to_string())))
            .collect::<Map<_, _>>();
        Value::Object(map)
    }
}

impl Serialize for SubmissionPayload {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for (key, value) in &self.fields {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

/// Builds the transport copy of `answers`.
///
/// Selections are joined with ", ". Blank answers are left out, so a cleared
/// optional field is absent rather than sent as `""`. Auxiliary "Other" text
/// is only carried while "Other" is selected and the trimmed text is non-empty.
pub fn flatten(spec: &FormSpec, answers: &AnswerSet) -> SubmissionPayload {
    let mut fields = Vec::new();

    for field in spec.fields() {
        if let Some(value) = answers.get(&field.name)
            && !value.is_blank()
        {
            fields.push((field.name.clone(), value.to_transport()));
        }

        if let Some(key) = field.other_key()
            && other_visible(field, answers)
            && let Some(text) = answers.text(&key)
            && !text.trim().is_empty()
        {
            fields.push((key, text.trim().to_string()));
        }
    }

    SubmissionPayload {
        form_id: spec.id.clone(),
        fields,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selections_are_joined_and_hidden_other_text_dropped() {
        let spec = FormSpec::builtin().expect("builtin form");
        let mut answers = AnswerSet::new();
        answers.toggle_choice("painPoints", "Manual tasks eating up too much time");
        answers.toggle_choice("painPoints", "Other");
        answers.set_text("painPoints_other", "  slow emails ");

        let payload = flatten(&spec, &answers);
        assert_eq!(
            payload.get("painPoints"),
            Some("Manual tasks eating up too much time, Other")
        );
        assert_eq!(payload.get("painPoints_other"), Some("slow emails"));

        answers.toggle_choice("painPoints", "Other");
        let payload = flatten(&spec, &answers);
        assert_eq!(payload.get("painPoints_other"), None);
        assert_eq!(payload.to_json()["painPoints"], "Manual tasks eating up too much time");
    }

    #[test]
    fn cleared_optional_choice_matches_answers_schema() {
        let spec = FormSpec::builtin().expect("builtin form");
        let mut answers = AnswerSet::new();
        answers.set_text("company", "Acme");
        answers.set_text("industry", "SaaS");
        answers.set_text("currentOutreach", "None");
        answers.set_text("teamSize", "2-5 people");
        answers.set_text("teamSize", "");
        answers.toggle_choice("painPoints", "Other");
        answers.toggle_choice("painPoints", "Other");
        answers.toggle_choice("painPoints", "Manual tasks eating up too much time");
        answers.set_text("name", "Jo");
        answers.set_text("email", "jo@x.com");
        answers.set_text("timeline", "As soon as possible");

        let payload = flatten(&spec, &answers);
        assert_eq!(payload.get("teamSize"), None);

        let schema = crate::answers_schema::generate(&spec);
        let properties = schema["properties"].as_object().expect("properties");
        for (key, value) in payload.iter() {
            let property = properties.get(key).expect("key declared in schema");
            if let Some(allowed) = property["enum"].as_array() {
                assert!(allowed.iter().any(|option| option == value), "{key}={value}");
            }
        }
        for required in schema["required"].as_array().expect("required") {
            let name = required.as_str().expect("name");
            assert!(payload.get(name).is_some_and(|value| !value.is_empty()));
        }
    }
}
