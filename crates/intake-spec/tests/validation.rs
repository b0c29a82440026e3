use serde_json::json;

use intake_spec::{
    AnswerSet, FieldKind, FieldSpec, FormSpec, SpecError, StepSpec, answers_schema, validate,
    validate_step,
};

fn text_field(name: &str, required: bool) -> FieldSpec {
    FieldSpec {
        name: name.into(),
        label: name.into(),
        kind: FieldKind::ShortText,
        options: vec![],
        required,
        other_placeholder: None,
    }
}

fn make_simple_form() -> FormSpec {
    FormSpec {
        id: "simple".into(),
        title: "Simple".into(),
        version: "1.0.0".into(),
        description: None,
        presentation: Default::default(),
        steps: vec![StepSpec {
            position: 1,
            title: "Only".into(),
            subtitle: None,
            fields: vec![
                text_field("name", true),
                FieldSpec {
                    name: "topics".into(),
                    label: "Topics".into(),
                    kind: FieldKind::MultiChoice,
                    options: vec!["Sales".into(), "Other".into()],
                    required: true,
                    other_placeholder: None,
                },
            ],
        }],
    }
}

#[test]
fn builtin_form_has_four_steps() {
    let spec = FormSpec::builtin().expect("builtin form");
    assert_eq!(spec.step_count(), 4);
    let required = spec
        .fields()
        .filter(|field| field.required)
        .map(|field| field.name.as_str())
        .collect::<Vec<_>>();
    assert_eq!(
        required,
        vec![
            "company",
            "industry",
            "currentOutreach",
            "painPoints",
            "name",
            "email",
            "timeline"
        ]
    );
    assert_eq!(spec.step(3).and_then(|step| step.subtitle.as_deref()), Some("Select all that apply"));
    assert!(spec.other_owner("painPoints_other").is_some());
}

#[test]
fn check_rejects_duplicate_names() {
    let mut spec = make_simple_form();
    spec.steps[0].fields.push(text_field("name", false));
    assert!(matches!(spec.check(), Err(SpecError::DuplicateField(name)) if name == "name"));
}

#[test]
fn check_rejects_choice_without_options() {
    let mut spec = make_simple_form();
    spec.steps[0].fields[1].options.clear();
    assert!(matches!(spec.check(), Err(SpecError::MissingOptions(_))));
}

#[test]
fn check_rejects_auxiliary_collision() {
    let mut spec = make_simple_form();
    spec.steps[0].fields.push(text_field("topics_other", false));
    assert!(matches!(
        spec.check(),
        Err(SpecError::AuxiliaryCollision { .. })
    ));
}

#[test]
fn check_rejects_misnumbered_steps() {
    let mut spec = make_simple_form();
    spec.steps[0].position = 2;
    assert!(matches!(
        spec.check(),
        Err(SpecError::StepOrder {
            expected: 1,
            found: 2
        })
    ));
}

#[test]
fn check_rejects_empty_forms() {
    let mut spec = make_simple_form();
    spec.steps.clear();
    assert!(matches!(spec.check(), Err(SpecError::NoSteps(_))));
}

#[test]
fn step_validation_reports_missing() {
    let spec = make_simple_form();
    let answers = AnswerSet::new();
    let result = validate_step(&spec.steps[0], &answers);
    assert!(!result.valid);
    assert_eq!(
        result.missing_required().collect::<Vec<_>>(),
        vec!["name", "topics"]
    );
}

#[test]
fn validation_reports_shape_and_unknown_fields() {
    let spec = FormSpec::builtin().expect("builtin form");
    let answers: AnswerSet = serde_json::from_value(json!({
        "company": "Acme",
        "industry": "Mining",
        "currentOutreach": ["None"],
        "painPoints": ["Other"],
        "painPoints_other": "slow emails",
        "name": "Jo",
        "email": "jo@x.com",
        "timeline": "As soon as possible",
        "budget": "big"
    }))
    .expect("answers");

    let result = validate(&spec, &answers);
    assert!(!result.valid);
    assert!(result.missing_required.is_empty());
    assert_eq!(result.unknown_fields, vec!["budget"]);
    let codes = result
        .errors
        .iter()
        .map(|error| (error.field.as_str(), error.code.as_str()))
        .collect::<Vec<_>>();
    assert!(codes.contains(&("industry", "option_mismatch")));
    assert!(codes.contains(&("currentOutreach", "type_mismatch")));
}

#[test]
fn schema_lists_required_fields_and_auxiliary_input() {
    let spec = FormSpec::builtin().expect("builtin form");
    let schema = answers_schema(&spec);
    let props = schema["properties"].as_object().expect("properties");
    assert!(props.contains_key("company"));
    assert!(props.contains_key("painPoints_other"));
    assert_eq!(props["email"]["format"], "email");
    assert_eq!(props["industry"]["enum"][0], "SaaS");
    let required = schema["required"].as_array().expect("required");
    assert!(required.iter().any(|value| value == "timeline"));
    assert!(!required.iter().any(|value| value == "website"));
}
