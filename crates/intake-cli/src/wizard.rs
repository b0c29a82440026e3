use intake_spec::{
    FieldKind, FieldSpec, RenderPayload, render_card, render_json_ui, render_text,
};
use intake_submit::SubmissionError;

/// Controls which bits of state the wizard prints.
#[derive(Copy, Clone, Eq, PartialEq)]
pub enum Verbosity {
    /// Clean output: step headers and prompts only.
    Clean,
    /// Verbose output: full step view, error details.
    Verbose,
}

impl Verbosity {
    pub fn from_verbose(verbose: bool) -> Self {
        if verbose {
            Verbosity::Verbose
        } else {
            Verbosity::Clean
        }
    }

    pub fn is_verbose(&self) -> bool {
        matches!(self, Verbosity::Verbose)
    }
}

/// How the wizard region is drawn after each transition.
#[derive(Copy, Clone, Debug, Eq, PartialEq, clap::ValueEnum)]
pub enum RenderMode {
    Text,
    Card,
    Json,
}

/// Prints the wizard region and the prompts for each field.
pub struct WizardPresenter {
    verbosity: Verbosity,
    mode: RenderMode,
    header_printed: bool,
}

impl WizardPresenter {
    pub fn new(verbosity: Verbosity, mode: RenderMode) -> Self {
        Self {
            verbosity,
            mode,
            header_printed: false,
        }
    }

    pub fn show_header(&mut self, payload: &RenderPayload) {
        if self.header_printed {
            return;
        }
        println!("Form: {}", payload.form_title);
        println!("Enter 'back' or 'exit' at any prompt, '-' to clear an answer.");
        println!("Prefix with \\ to store one of those words as an answer.");
        self.header_printed = true;
    }

    /// Redraws the region for the current state.
    pub fn show_view(&self, payload: &RenderPayload) {
        match self.mode {
            RenderMode::Json => println!("JSON UI:\n{}", pretty(&render_json_ui(payload))),
            RenderMode::Card => println!("Adaptive card:\n{}", pretty(&render_card(payload))),
            RenderMode::Text if self.verbosity.is_verbose() => {
                println!("{}", render_text(payload))
            }
            RenderMode::Text => {
                if let Some(step) = &payload.step {
                    println!(
                        "Step {}/{}: {}",
                        payload.progress.current, payload.progress.total, step.title
                    );
                    if let Some(subtitle) = &step.subtitle {
                        println!("{}", subtitle);
                    }
                }
            }
        }
    }

    pub fn show_prompt(&self, prompt: &PromptContext) {
        let mut line = prompt.label.clone();
        if prompt.required {
            line.push_str(" *");
        }
        if let Some(hint) = &prompt.hint {
            line.push(' ');
            line.push_str(hint);
        }
        if let Some(current) = &prompt.current {
            line.push_str(&format!(" [{}]", current));
        }
        println!("{}", line);
        for (index, option) in prompt.options.iter().enumerate() {
            let marker = if prompt.selected.contains(option) {
                "[x] "
            } else if prompt.multi {
                "[ ] "
            } else {
                ""
            };
            println!("  {}. {}{}", index + 1, marker, option);
        }
    }

    pub fn show_parse_error(&self, error: &AnswerParseError) {
        eprintln!("Invalid answer: {}", error.user_message);
        if self.verbosity.is_verbose()
            && let Some(debug) = &error.debug_message
        {
            eprintln!("  Expected: {}", debug);
        }
    }

    pub fn show_blocked(&self, labels: &[String]) {
        eprintln!("Please complete the required fields: {}", labels.join(", "));
    }

    /// Prints the replacement view shown outside the step flow.
    pub fn show_notice(&self, payload: &RenderPayload) {
        if self.mode != RenderMode::Text {
            self.show_view(payload);
            return;
        }
        if let Some(notice) = &payload.notice {
            if let Some(title) = &notice.title {
                println!("{}", title);
            }
            println!("{}", notice.message);
        }
    }

    pub fn show_submission_error(&self, error: Option<&SubmissionError>) {
        if self.verbosity.is_verbose()
            && let Some(error) = error
        {
            eprintln!("  Cause: {}", error);
        }
    }
}

/// Context used to format a single field prompt.
pub struct PromptContext {
    pub label: String,
    pub required: bool,
    pub hint: Option<String>,
    pub current: Option<String>,
    pub options: Vec<String>,
    pub selected: Vec<String>,
    pub multi: bool,
}

impl PromptContext {
    pub fn new(field: &FieldSpec, current: Option<String>, selected: Vec<String>) -> Self {
        let label = if field.label.is_empty() {
            field.name.clone()
        } else {
            field.label.clone()
        };
        Self {
            label,
            required: field.required,
            hint: hint_for(field.kind),
            current,
            options: field.options.clone(),
            selected,
            multi: field.kind == FieldKind::MultiChoice,
        }
    }

    /// Prompt for the auxiliary "Other" text of a multi-choice field.
    pub fn other(placeholder: Option<&str>, current: Option<String>) -> Self {
        Self {
            label: placeholder.unwrap_or("Please describe").to_string(),
            required: false,
            hint: None,
            current,
            options: Vec::new(),
            selected: Vec::new(),
            multi: false,
        }
    }
}

fn hint_for(kind: FieldKind) -> Option<String> {
    match kind {
        FieldKind::Url => Some("(url)".to_string()),
        FieldKind::Email => Some("(email)".to_string()),
        FieldKind::SingleChoice => Some("(number or option)".to_string()),
        FieldKind::MultiChoice => Some("(comma-separated numbers to toggle)".to_string()),
        FieldKind::ShortText => None,
    }
}

/// Error produced when parsing answers from the user.
#[derive(Debug)]
pub struct AnswerParseError {
    pub user_message: String,
    pub debug_message: Option<String>,
}

impl AnswerParseError {
    pub fn new(user_message: impl Into<String>, debug_message: Option<String>) -> Self {
        Self {
            user_message: user_message.into(),
            debug_message,
        }
    }
}

fn pretty(value: &serde_json::Value) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
}
