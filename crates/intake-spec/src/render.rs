use serde_json::{Map, Value, json};

use crate::{
    answers::AnswerValue,
    spec::field::FieldKind,
    visibility::other_visible,
    wizard::{Wizard, WizardProgress, WizardStatus},
};

/// State of a single step marker in the indicator strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndicatorState {
    Completed,
    Active,
    Pending,
}

impl IndicatorState {
    pub fn as_str(&self) -> &'static str {
        match self {
            IndicatorState::Completed => "completed",
            IndicatorState::Active => "active",
            IndicatorState::Pending => "pending",
        }
    }
}

/// The auxiliary free-text input paired with an "Other" option.
#[derive(Debug, Clone)]
pub struct RenderOther {
    pub name: String,
    pub visible: bool,
    pub value: Option<String>,
    pub placeholder: Option<String>,
}

/// Describes a single field of the current step.
#[derive(Debug, Clone)]
pub struct RenderField {
    pub name: String,
    pub label: String,
    pub kind: FieldKind,
    pub required: bool,
    pub options: Vec<String>,
    pub current_value: Option<AnswerValue>,
    pub error: bool,
    pub other: Option<RenderOther>,
}

#[derive(Debug, Clone)]
pub struct RenderStep {
    pub position: usize,
    pub title: String,
    pub subtitle: Option<String>,
    pub fields: Vec<RenderField>,
}

/// Navigation affordances below the step.
#[derive(Debug, Clone)]
pub struct RenderNav {
    pub back: bool,
    pub primary_label: &'static str,
}

/// Replacement view shown instead of a step.
#[derive(Debug, Clone)]
pub struct RenderNotice {
    pub title: Option<String>,
    pub message: String,
    pub action: Option<String>,
}

/// Everything a host needs to redraw the wizard region.
#[derive(Debug, Clone)]
pub struct RenderPayload {
    pub form_id: String,
    pub form_title: String,
    pub status: WizardStatus,
    pub progress: WizardProgress,
    pub indicators: Vec<IndicatorState>,
    pub step: Option<RenderStep>,
    pub nav: Option<RenderNav>,
    pub notice: Option<RenderNotice>,
}

/// Projects the wizard into a render payload.
pub fn build_render_payload(wizard: &Wizard) -> RenderPayload {
    let spec = wizard.spec();
    let progress = wizard.progress();
    let status = wizard.status();

    let indicators = (1..=progress.total)
        .map(|position| match position.cmp(&progress.current) {
            std::cmp::Ordering::Less => IndicatorState::Completed,
            std::cmp::Ordering::Equal => IndicatorState::Active,
            std::cmp::Ordering::Greater => IndicatorState::Pending,
        })
        .collect::<Vec<_>>();

    let presentation = &spec.presentation;
    let (step, nav, notice) = match status {
        WizardStatus::InProgress => {
            let step = wizard.current_step();
            let answers = wizard.answers();
            let fields = step
                .fields
                .iter()
                .map(|field| RenderField {
                    name: field.name.clone(),
                    label: field.label.clone(),
                    kind: field.kind,
                    required: field.required,
                    options: field.options.clone(),
                    current_value: answers.get(&field.name).cloned(),
                    error: wizard.has_error(&field.name),
                    other: field.other_key().map(|key| RenderOther {
                        visible: other_visible(field, answers),
                        value: answers.text(&key).map(str::to_string),
                        placeholder: field.other_placeholder.clone(),
                        name: key,
                    }),
                })
                .collect::<Vec<_>>();
            let nav = RenderNav {
                back: progress.current > 1,
                primary_label: if progress.current == progress.total {
                    "Submit"
                } else {
                    "Next"
                },
            };
            let step = RenderStep {
                position: step.position,
                title: step.title.clone(),
                subtitle: step.subtitle.clone(),
                fields,
            };
            (Some(step), Some(nav), None)
        }
        WizardStatus::Submitting => {
            let notice = RenderNotice {
                title: None,
                message: presentation.submitting_message.clone(),
                action: None,
            };
            (None, None, Some(notice))
        }
        WizardStatus::Succeeded => {
            let notice = RenderNotice {
                title: Some(presentation.success_title.clone()),
                message: presentation.success_message.clone(),
                action: None,
            };
            (None, None, Some(notice))
        }
        WizardStatus::Failed => {
            let notice = RenderNotice {
                title: Some(presentation.failure_title.clone()),
                message: presentation.failure_message.clone(),
                action: Some(presentation.retry_label.clone()),
            };
            (None, None, Some(notice))
        }
    };

    RenderPayload {
        form_id: spec.id.clone(),
        form_title: spec.title.clone(),
        status,
        progress,
        indicators,
        step,
        nav,
        notice,
    }
}

/// Render the payload as a structured JSON-friendly value.
pub fn render_json_ui(payload: &RenderPayload) -> Value {
    let step = payload.step.as_ref().map(|step| {
        let fields = step
            .fields
            .iter()
            .map(|field| {
                let mut map = Map::new();
                map.insert("name".into(), Value::String(field.name.clone()));
                map.insert("label".into(), Value::String(field.label.clone()));
                map.insert("type".into(), Value::String(field.kind.as_str().into()));
                map.insert("required".into(), Value::Bool(field.required));
                if !field.options.is_empty() {
                    map.insert(
                        "options".into(),
                        Value::Array(
                            field
                                .options
                                .iter()
                                .map(|option| Value::String(option.clone()))
                                .collect(),
                        ),
                    );
                }
                if let Some(current_value) = &field.current_value {
                    map.insert("current_value".into(), answer_to_json(current_value));
                }
                map.insert("error".into(), Value::Bool(field.error));
                if let Some(other) = &field.other {
                    map.insert(
                        "other".into(),
                        json!({
                            "name": other.name,
                            "visible": other.visible,
                            "value": other.value,
                            "placeholder": other.placeholder,
                        }),
                    );
                }
                Value::Object(map)
            })
            .collect::<Vec<_>>();
        json!({
            "position": step.position,
            "title": step.title,
            "subtitle": step.subtitle,
            "fields": fields,
        })
    });

    let nav = payload.nav.as_ref().map(|nav| {
        json!({
            "back": nav.back,
            "primary": nav.primary_label,
        })
    });

    let notice = payload.notice.as_ref().map(|notice| {
        json!({
            "title": notice.title,
            "message": notice.message,
            "action": notice.action,
        })
    });

    let indicators = payload
        .indicators
        .iter()
        .map(IndicatorState::as_str)
        .collect::<Vec<_>>();

    json!({
        "form_id": payload.form_id,
        "form_title": payload.form_title,
        "status": payload.status.as_str(),
        "progress": {
            "current": payload.progress.current,
            "total": payload.progress.total,
        },
        "indicators": indicators,
        "step": step,
        "nav": nav,
        "notice": notice,
    })
}

/// Render the payload as human-friendly text.
pub fn render_text(payload: &RenderPayload) -> String {
    let mut lines = Vec::new();
    lines.push(format!("Form: {} ({})", payload.form_title, payload.form_id));
    lines.push(format!(
        "Step {}/{} {}",
        payload.progress.current,
        payload.progress.total,
        indicator_strip(&payload.indicators)
    ));

    if let Some(notice) = &payload.notice {
        if let Some(title) = &notice.title {
            lines.push(title.clone());
        }
        lines.push(notice.message.clone());
        if let Some(action) = &notice.action {
            lines.push(format!("[{}]", action));
        }
        return lines.join("\n");
    }

    if let Some(step) = &payload.step {
        lines.push(step.title.clone());
        if let Some(subtitle) = &step.subtitle {
            lines.push(subtitle.clone());
        }
        for field in &step.fields {
            let mut entry = format!(" - {}", display_label(field));
            if field.required {
                entry.push_str(" *");
            }
            if let Some(value) = &field.current_value
                && !value.is_blank()
            {
                entry.push_str(&format!(" = {}", value.to_transport()));
            }
            if field.error {
                entry.push_str(" (required)");
            }
            lines.push(entry);
            if let Some(other) = &field.other
                && other.visible
            {
                let text = other.value.as_deref().unwrap_or("");
                lines.push(format!("   Other: {}", text));
            }
        }
    }

    if let Some(nav) = &payload.nav {
        let mut controls = Vec::new();
        if nav.back {
            controls.push("[Back]".to_string());
        }
        controls.push(format!("[{}]", nav.primary_label));
        lines.push(controls.join(" "));
    }

    lines.join("\n")
}

/// Render the payload as an Adaptive Card v1.3 transport.
pub fn render_card(payload: &RenderPayload) -> Value {
    let mut body = Vec::new();
    let mut actions = Vec::new();

    body.push(json!({
        "type": "TextBlock",
        "text": payload.form_title,
        "weight": "Bolder",
        "size": "Large",
        "wrap": true,
    }));

    body.push(json!({
        "type": "FactSet",
        "facts": [
            { "title": "Step", "value": payload.progress.current.to_string() },
            { "title": "Total", "value": payload.progress.total.to_string() }
        ]
    }));

    if let Some(step) = &payload.step {
        let mut items = Vec::new();
        items.push(json!({
            "type": "TextBlock",
            "text": step.title,
            "weight": "Bolder",
            "wrap": true,
        }));
        if let Some(subtitle) = &step.subtitle {
            items.push(json!({
                "type": "TextBlock",
                "text": subtitle,
                "wrap": true,
                "spacing": "Small",
            }));
        }
        for field in &step.fields {
            items.push(field_input(field));
            if let Some(other) = &field.other
                && other.visible
            {
                let mut map = Map::new();
                map.insert("type".into(), Value::String("Input.Text".into()));
                map.insert("id".into(), Value::String(other.name.clone()));
                if let Some(placeholder) = &other.placeholder {
                    map.insert("placeholder".into(), Value::String(placeholder.clone()));
                }
                if let Some(value) = &other.value {
                    map.insert("value".into(), Value::String(value.clone()));
                }
                items.push(Value::Object(map));
            }
        }
        body.push(json!({
            "type": "Container",
            "items": items,
        }));
    }

    if let Some(nav) = &payload.nav {
        if nav.back {
            actions.push(submit_action(payload, "Back", "retreat"));
        }
        let primary = if nav.primary_label == "Submit" {
            "Submit"
        } else {
            "Next ➡️"
        };
        actions.push(submit_action(payload, primary, "advance"));
    }

    if let Some(notice) = &payload.notice {
        if let Some(title) = &notice.title {
            body.push(json!({
                "type": "TextBlock",
                "text": title,
                "weight": "Bolder",
                "wrap": true,
            }));
        }
        body.push(json!({
            "type": "TextBlock",
            "text": notice.message,
            "wrap": true,
        }));
        if let Some(action) = &notice.action {
            actions.push(submit_action(payload, action, "retry"));
        }
    }

    json!({
        "$schema": "http://adaptivecards.io/schemas/adaptive-card.json",
        "type": "AdaptiveCard",
        "version": "1.3",
        "body": body,
        "actions": actions,
    })
}

fn submit_action(payload: &RenderPayload, title: &str, mode: &str) -> Value {
    json!({
        "type": "Action.Submit",
        "title": title,
        "data": {
            "intake": {
                "formId": payload.form_id,
                "mode": mode,
                "step": payload.progress.current,
            }
        }
    })
}

fn field_input(field: &RenderField) -> Value {
    let mut map = Map::new();
    map.insert("id".into(), Value::String(field.name.clone()));
    map.insert("label".into(), Value::String(display_label(field)));
    map.insert("isRequired".into(), Value::Bool(field.required));
    match field.kind {
        FieldKind::ShortText | FieldKind::Url | FieldKind::Email => {
            map.insert("type".into(), Value::String("Input.Text".into()));
            let style = match field.kind {
                FieldKind::Url => "Url",
                FieldKind::Email => "Email",
                _ => "Text",
            };
            map.insert("style".into(), Value::String(style.into()));
        }
        FieldKind::SingleChoice | FieldKind::MultiChoice => {
            map.insert("type".into(), Value::String("Input.ChoiceSet".into()));
            let multi = field.kind == FieldKind::MultiChoice;
            map.insert(
                "style".into(),
                Value::String(if multi { "expanded" } else { "compact" }.into()),
            );
            map.insert("isMultiSelect".into(), Value::Bool(multi));
            let choices = field
                .options
                .iter()
                .map(|option| {
                    json!({
                        "title": option,
                        "value": option,
                    })
                })
                .collect::<Vec<_>>();
            map.insert("choices".into(), Value::Array(choices));
        }
    }
    if let Some(value) = &field.current_value {
        // Adaptive cards carry multi-select values as a comma-joined string.
        let value = match value {
            AnswerValue::Text(text) => text.clone(),
            AnswerValue::Choices(choices) => choices.join(","),
        };
        map.insert("value".into(), Value::String(value));
    }
    if field.error {
        map.insert(
            "errorMessage".into(),
            Value::String("This field is required.".into()),
        );
    }
    Value::Object(map)
}

fn display_label(field: &RenderField) -> String {
    if field.label.is_empty() {
        field.name.clone()
    } else {
        field.label.clone()
    }
}

fn indicator_strip(indicators: &[IndicatorState]) -> String {
    indicators
        .iter()
        .map(|state| match state {
            IndicatorState::Completed => '●',
            IndicatorState::Active => '◉',
            IndicatorState::Pending => '○',
        })
        .collect()
}

fn answer_to_json(value: &AnswerValue) -> Value {
    match value {
        AnswerValue::Text(text) => Value::String(text.clone()),
        AnswerValue::Choices(choices) => {
            Value::Array(choices.iter().cloned().map(Value::String).collect())
        }
    }
}
