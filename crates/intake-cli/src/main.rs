mod wizard;

use clap::{Parser, Subcommand, ValueEnum};
use intake_spec::{
    AnswerSet, FieldKind, FieldSpec, FormSpec, ValidationResult, Wizard, WizardStatus,
    answers_schema, build_render_payload, validate,
};
use intake_submit::{HttpSubmitter, IntakeSession, SessionEvent, SubmitEncoding, SubmitterConfig};
use roi_estimator::{RoiEstimator, RoiField};
use serde_json::json;
use std::env;
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;
use tracing::debug;
use tracing_subscriber::EnvFilter;
use wizard::{AnswerParseError, PromptContext, RenderMode, Verbosity, WizardPresenter};

type CliResult<T> = Result<T, Box<dyn std::error::Error>>;

const ENDPOINT_ENV: &str = "INTAKE_FORM_ENDPOINT";

#[derive(Parser)]
#[command(
    author,
    version,
    about = "Lead intake wizard CLI",
    long_about = "Runs the multi-step lead intake wizard, validates stored answers and projects outreach ROI"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Copy, Clone, Debug, ValueEnum)]
enum EncodingArg {
    Json,
    Multipart,
}

impl From<EncodingArg> for SubmitEncoding {
    fn from(value: EncodingArg) -> Self {
        match value {
            EncodingArg::Json => SubmitEncoding::Json,
            EncodingArg::Multipart => SubmitEncoding::Multipart,
        }
    }
}

#[derive(Subcommand)]
enum Command {
    /// Run the intake wizard in a text shell and submit the answers.
    Wizard {
        /// Optional form configuration JSON (defaults to the built-in lead intake form).
        #[arg(long, value_name = "SPEC")]
        spec: Option<PathBuf>,
        /// Submission endpoint (defaults to INTAKE_FORM_ENDPOINT).
        #[arg(long, value_name = "URL")]
        endpoint: Option<String>,
        /// Request body encoding.
        #[arg(long, value_enum, default_value_t = EncodingArg::Json)]
        encoding: EncodingArg,
        /// Give up on the submission after this many seconds.
        #[arg(long, default_value_t = 30)]
        timeout_secs: u64,
        /// Show verbose output (full step view, failure causes).
        #[arg(long, alias = "debug")]
        verbose: bool,
        /// Render output mode for the wizard display.
        #[arg(long, value_enum, default_value_t = RenderMode::Text)]
        format: RenderMode,
    },
    /// Validate an answers JSON file against the form.
    Validate {
        /// Path to the answers JSON file.
        #[arg(long, value_name = "ANSWERS")]
        answers: PathBuf,
        /// Optional form configuration JSON.
        #[arg(long, value_name = "SPEC")]
        spec: Option<PathBuf>,
    },
    /// Print the checked form configuration.
    Describe {
        #[arg(long, value_name = "SPEC")]
        spec: Option<PathBuf>,
    },
    /// Print the JSON Schema of the submitted answers.
    Schema {
        #[arg(long, value_name = "SPEC")]
        spec: Option<PathBuf>,
        /// Print the schema of the form configuration format instead.
        #[arg(long)]
        config: bool,
    },
    /// Project monthly and annual revenue from outreach numbers.
    Roi {
        /// Monthly lead volume, e.g. 5,000.
        #[arg(long)]
        leads: Option<String>,
        /// Reply rate in percent.
        #[arg(long)]
        reply_rate: Option<String>,
        /// Close rate in percent.
        #[arg(long)]
        close_rate: Option<String>,
        /// Average deal value in dollars.
        #[arg(long)]
        deal_value: Option<String>,
        /// Emit JSON instead of a table.
        #[arg(long)]
        json: bool,
    },
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> CliResult<()> {
    let cli = Cli::parse();
    let verbose = matches!(cli.command, Command::Wizard { verbose: true, .. });
    init_tracing(verbose);

    match cli.command {
        Command::Wizard {
            spec,
            endpoint,
            encoding,
            timeout_secs,
            verbose,
            format,
        } => {
            let config = SubmitterConfig {
                endpoint: resolve_endpoint(endpoint)?,
                encoding: encoding.into(),
                timeout_secs,
            };
            run_wizard(spec, config, verbose, format).await
        }
        Command::Validate { answers, spec } => run_validate(spec, answers),
        Command::Describe { spec } => {
            let spec = load_spec(spec)?;
            println!("{}", serde_json::to_string_pretty(&spec)?);
            Ok(())
        }
        Command::Schema { spec, config } => {
            let schema = if config {
                serde_json::to_value(schemars::schema_for!(FormSpec))?
            } else {
                answers_schema(&load_spec(spec)?)
            };
            println!("{}", serde_json::to_string_pretty(&schema)?);
            Ok(())
        }
        Command::Roi {
            leads,
            reply_rate,
            close_rate,
            deal_value,
            json,
        } => run_roi(
            [
                (RoiField::MonthlyLeadVolume, leads),
                (RoiField::ReplyRate, reply_rate),
                (RoiField::CloseRate, close_rate),
                (RoiField::AvgDealValue, deal_value),
            ],
            json,
        ),
    }
}

fn init_tracing(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(if verbose { "debug" } else { "warn" }));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}

fn load_spec(path: Option<PathBuf>) -> CliResult<FormSpec> {
    let spec = match path {
        Some(path) => FormSpec::from_json(&fs::read_to_string(path)?)?,
        None => FormSpec::builtin()?,
    };
    Ok(spec)
}

fn resolve_endpoint(flag: Option<String>) -> CliResult<String> {
    flag.or_else(|| env::var(ENDPOINT_ENV).ok())
        .map(|endpoint| endpoint.trim().to_string())
        .filter(|endpoint| !endpoint.is_empty())
        .ok_or_else(|| format!("no submission endpoint; pass --endpoint or set {ENDPOINT_ENV}").into())
}

fn run_validate(spec_path: Option<PathBuf>, answers_path: PathBuf) -> CliResult<()> {
    let spec = load_spec(spec_path)?;
    let answers_json = fs::read_to_string(answers_path)?;
    let answers: AnswerSet = serde_json::from_str(&answers_json)?;

    let result = validate(&spec, &answers);
    println!(
        "Validation result: {}",
        if result.valid { "valid" } else { "invalid" }
    );
    describe_validation(&result);

    if result.valid {
        Ok(())
    } else {
        Err("validation failed".into())
    }
}

fn describe_validation(result: &ValidationResult) {
    if !result.errors.is_empty() {
        println!("Errors:");
        for error in &result.errors {
            println!("  {} - {}", error.field, error.message);
        }
    }
    if !result.missing_required.is_empty() {
        println!(
            "Missing required answers: {}",
            result.missing_required.join(", ")
        );
    }
    if !result.unknown_fields.is_empty() {
        println!(
            "Unknown answer fields: {}",
            result.unknown_fields.join(", ")
        );
    }
}

fn run_roi(entries: [(RoiField, Option<String>); 4], json_output: bool) -> CliResult<()> {
    let mut estimator = RoiEstimator::default();
    for (field, raw) in entries {
        if let Some(raw) = raw {
            estimator.set_text(field, &raw);
            estimator.blur(field);
        }
    }
    let projection = estimator.projection();

    if json_output {
        let value = json!({
            "inputs": estimator.inputs(),
            "projection": projection,
        });
        println!("{}", serde_json::to_string_pretty(&value)?);
        return Ok(());
    }

    for field in RoiField::ALL {
        let display = estimator.display(field);
        let shown = match field {
            RoiField::ReplyRate | RoiField::CloseRate => format!("{display}%"),
            RoiField::AvgDealValue => format!("${display}"),
            RoiField::MonthlyLeadVolume => display.to_string(),
        };
        println!("{:<28}{}", field.label(), shown);
    }
    println!();
    for (label, value) in projection.display_rows() {
        println!("{:<28}{}", label, value);
    }
    Ok(())
}

/// What the user asked for at a prompt.
#[derive(Debug, PartialEq, Eq)]
enum FieldInput {
    Keep,
    Clear,
    Value(String),
    Back,
    Exit,
}

enum StepFlow {
    Complete,
    Back,
}

/// A leading `\` stores the rest verbatim, so `\back` or `\-` can be answers.
fn classify_input(raw: &str) -> FieldInput {
    let trimmed = raw.trim();
    if let Some(literal) = trimmed.strip_prefix('\\') {
        FieldInput::Value(literal.to_string())
    } else if trimmed.is_empty() {
        FieldInput::Keep
    } else if trimmed == "-" {
        FieldInput::Clear
    } else if trimmed.eq_ignore_ascii_case("back") {
        FieldInput::Back
    } else if trimmed.eq_ignore_ascii_case("exit") {
        FieldInput::Exit
    } else {
        FieldInput::Value(trimmed.to_string())
    }
}

async fn run_wizard(
    spec_path: Option<PathBuf>,
    config: SubmitterConfig,
    verbose: bool,
    format: RenderMode,
) -> CliResult<()> {
    let spec = load_spec(spec_path)?;
    let submitter = HttpSubmitter::new(&config)?;
    let wizard = Wizard::new(spec)?;
    let mut session = IntakeSession::new(wizard, submitter, config.timeout());
    let mut presenter = WizardPresenter::new(Verbosity::from_verbose(verbose), format);

    loop {
        let payload = build_render_payload(session.wizard());
        presenter.show_header(&payload);

        match session.wizard().status() {
            WizardStatus::InProgress => {
                presenter.show_view(&payload);
                match prompt_step(session.wizard_mut(), &presenter)? {
                    StepFlow::Back => {
                        session.retreat()?;
                        continue;
                    }
                    StepFlow::Complete => {}
                }
                match session.advance().await? {
                    SessionEvent::Blocked => {
                        let wizard = session.wizard();
                        let labels = wizard
                            .current_step()
                            .fields
                            .iter()
                            .filter(|field| wizard.has_error(&field.name))
                            .map(field_label)
                            .collect::<Vec<_>>();
                        presenter.show_blocked(&labels);
                    }
                    SessionEvent::Moved(step) => debug!(step, "moved to step"),
                    SessionEvent::Submitted(status) => debug!(%status, "submission finished"),
                }
            }
            WizardStatus::Succeeded => {
                presenter.show_notice(&payload);
                return Ok(());
            }
            WizardStatus::Failed => {
                presenter.show_notice(&payload);
                presenter.show_submission_error(session.last_error());
                if prompt_yes_no(&payload_retry_label(&payload))? {
                    session.retry()?;
                    continue;
                }
                return Err("submission failed".into());
            }
            WizardStatus::Submitting => {
                return Err("wizard is still waiting on a submission".into());
            }
        }
    }
}

fn payload_retry_label(payload: &intake_spec::RenderPayload) -> String {
    let action = payload
        .notice
        .as_ref()
        .and_then(|notice| notice.action.clone())
        .unwrap_or_else(|| "Try again".to_string());
    format!("{action}? (y/n)")
}

fn field_label(field: &FieldSpec) -> String {
    if field.label.is_empty() {
        field.name.clone()
    } else {
        field.label.clone()
    }
}

/// Prompts every field of the current step once.
fn prompt_step(wizard: &mut Wizard, presenter: &WizardPresenter) -> CliResult<StepFlow> {
    let fields = wizard.current_step().fields.clone();
    for field in &fields {
        loop {
            let answers = wizard.answers();
            let current = answers
                .get(&field.name)
                .filter(|value| !value.is_blank())
                .map(|value| value.to_transport());
            let selected = answers.choices(&field.name).to_vec();
            let prompt = PromptContext::new(field, current, selected);
            presenter.show_prompt(&prompt);

            let input = match classify_input(&read_line()?) {
                FieldInput::Exit => return Err("wizard aborted by user".into()),
                FieldInput::Back => return Ok(StepFlow::Back),
                input => input,
            };

            match apply_input(wizard, field, input) {
                Ok(()) => break,
                Err(err) => presenter.show_parse_error(&err),
            }
        }

        if let Some(key) = field.other_key()
            && wizard.other_visible(&field.name)
        {
            let current = wizard.answers().text(&key).map(str::to_string);
            let prompt = PromptContext::other(field.other_placeholder.as_deref(), current);
            presenter.show_prompt(&prompt);
            match classify_input(&read_line()?) {
                FieldInput::Exit => return Err("wizard aborted by user".into()),
                FieldInput::Back => return Ok(StepFlow::Back),
                FieldInput::Keep => {}
                FieldInput::Clear => wizard.set_field(&key, "")?,
                FieldInput::Value(text) => wizard.set_field(&key, text)?,
            }
        }
    }
    Ok(StepFlow::Complete)
}

fn apply_input(
    wizard: &mut Wizard,
    field: &FieldSpec,
    input: FieldInput,
) -> Result<(), AnswerParseError> {
    let value = match input {
        FieldInput::Keep => return Ok(()),
        FieldInput::Clear if field.kind == FieldKind::MultiChoice => {
            for option in wizard.answers().choices(&field.name).to_vec() {
                toggle(wizard, field, &option)?;
            }
            return Ok(());
        }
        FieldInput::Clear => String::new(),
        FieldInput::Value(value) => value,
        FieldInput::Back | FieldInput::Exit => return Ok(()),
    };

    match field.kind {
        FieldKind::MultiChoice => {
            for option in parse_multi_choice(field, &value)? {
                toggle(wizard, field, &option)?;
            }
            Ok(())
        }
        FieldKind::SingleChoice if !value.is_empty() => {
            let option = parse_single_choice(field, &value)?;
            set(wizard, field, option)
        }
        _ => set(wizard, field, value),
    }
}

fn set(wizard: &mut Wizard, field: &FieldSpec, value: String) -> Result<(), AnswerParseError> {
    wizard
        .set_field(&field.name, value)
        .map_err(|err| AnswerParseError::new("That value was not accepted.", Some(err.to_string())))
}

fn toggle(wizard: &mut Wizard, field: &FieldSpec, option: &str) -> Result<(), AnswerParseError> {
    wizard
        .toggle_choice(&field.name, option)
        .map(|_| ())
        .map_err(|err| AnswerParseError::new("That option was not accepted.", Some(err.to_string())))
}

/// Accepts a 1-based option number or the option text (case-insensitive).
fn parse_single_choice(field: &FieldSpec, raw: &str) -> Result<String, AnswerParseError> {
    resolve_option(field, raw.trim()).ok_or_else(|| {
        AnswerParseError::new(
            format!("Please pick one of the {} listed options.", field.options.len()),
            Some(format!("expected 1-{} or an option name", field.options.len())),
        )
    })
}

/// Comma-separated option numbers or names; each listed option is toggled.
fn parse_multi_choice(field: &FieldSpec, raw: &str) -> Result<Vec<String>, AnswerParseError> {
    let mut picked: Vec<String> = Vec::new();
    for token in raw.split(',').map(str::trim).filter(|token| !token.is_empty()) {
        let option = resolve_option(field, token).ok_or_else(|| {
            AnswerParseError::new(
                format!("'{}' is not one of the listed options.", token),
                Some(format!("expected numbers between 1 and {}", field.options.len())),
            )
        })?;
        if !picked.contains(&option) {
            picked.push(option);
        }
    }
    Ok(picked)
}

fn resolve_option(field: &FieldSpec, token: &str) -> Option<String> {
    if let Ok(number) = token.parse::<usize>() {
        return number
            .checked_sub(1)
            .and_then(|index| field.options.get(index))
            .cloned();
    }
    field
        .options
        .iter()
        .find(|option| option.eq_ignore_ascii_case(token))
        .cloned()
}

fn prompt_yes_no(question: &str) -> CliResult<bool> {
    println!("{}", question);
    let answer = read_line()?;
    Ok(matches!(
        answer.trim().to_lowercase().as_str(),
        "y" | "yes" | "true" | "1"
    ))
}

fn read_line() -> CliResult<String> {
    print!("> ");
    io::stdout().flush()?;
    let mut input = String::new();
    if io::stdin().read_line(&mut input)? == 0 {
        return Err("input closed before the wizard finished".into());
    }
    Ok(input)
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_cmd::Command;
    use serde_json::Value;
    use wiremock::matchers::{body_json, method};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn builtin_field(name: &str) -> FieldSpec {
        FormSpec::builtin()
            .expect("builtin form")
            .field(name)
            .cloned()
            .expect("field")
    }

    const HAPPY_PATH: [&str; 10] = [
        "Acme",
        "",
        "1",
        "None",
        "",
        "7",
        "slow emails",
        "Jo",
        "jo@x.com",
        "as soon as possible",
    ];

    #[test]
    fn classify_input_recognizes_commands() {
        assert_eq!(classify_input("  "), FieldInput::Keep);
        assert_eq!(classify_input("-"), FieldInput::Clear);
        assert_eq!(classify_input("BACK"), FieldInput::Back);
        assert_eq!(classify_input("exit\n"), FieldInput::Exit);
        assert_eq!(
            classify_input(" Acme \n"),
            FieldInput::Value("Acme".into())
        );
    }

    #[test]
    fn escaped_input_is_stored_literally() {
        assert_eq!(classify_input("\\back"), FieldInput::Value("back".into()));
        assert_eq!(classify_input(" \\- "), FieldInput::Value("-".into()));
        assert_eq!(classify_input("\\\\x"), FieldInput::Value("\\x".into()));

        let mut wizard = Wizard::new(FormSpec::builtin().unwrap()).unwrap();
        let field = builtin_field("company");
        apply_input(&mut wizard, &field, classify_input("\\exit")).unwrap();
        assert_eq!(wizard.answers().text("company"), Some("exit"));
    }

    #[test]
    fn single_choice_accepts_number_or_name() {
        let field = builtin_field("industry");
        assert_eq!(parse_single_choice(&field, "2").unwrap(), "Agency");
        assert_eq!(parse_single_choice(&field, "saas").unwrap(), "SaaS");
        assert!(parse_single_choice(&field, "0").is_err());
        assert!(parse_single_choice(&field, "Mining").is_err());
    }

    #[test]
    fn multi_choice_parses_unique_options() {
        let field = builtin_field("painPoints");
        assert_eq!(
            parse_multi_choice(&field, "7, 6, 7").unwrap(),
            vec![
                "Other".to_string(),
                "Manual tasks eating up too much time".to_string()
            ]
        );
        assert!(parse_multi_choice(&field, "9").is_err());
    }

    #[test]
    fn apply_input_toggles_and_clears_selection() {
        let mut wizard = Wizard::new(FormSpec::builtin().unwrap()).unwrap();
        let field = builtin_field("painPoints");
        apply_input(&mut wizard, &field, FieldInput::Value("1,7".into())).unwrap();
        assert_eq!(wizard.answers().choices("painPoints").len(), 2);
        assert!(wizard.other_visible("painPoints"));

        apply_input(&mut wizard, &field, FieldInput::Clear).unwrap();
        assert!(wizard.answers().choices("painPoints").is_empty());
    }

    #[test]
    fn roi_command_prints_projection() {
        let output = Command::cargo_bin("intake-wizard")
            .unwrap()
            .args(["roi", "--leads", "10,000", "--json"])
            .output()
            .expect("run roi");
        assert!(output.status.success());
        let value: Value = serde_json::from_slice(&output.stdout).expect("json");
        assert_eq!(value["inputs"]["monthlyLeadVolume"], 10_000.0);
        assert_eq!(value["projection"]["annualRevenue"], 3_000_000.0);
    }

    #[test]
    fn roi_table_uses_display_formatting() {
        let output = Command::cargo_bin("intake-wizard")
            .unwrap()
            .args(["roi", "--reply-rate", "7.5%"])
            .output()
            .expect("run roi");
        let stdout = String::from_utf8(output.stdout).unwrap();
        assert!(stdout.contains("7.5%"));
        assert!(stdout.contains("$5,000"));
        assert!(stdout.contains("Potential Annual Revenue"));
    }

    #[test]
    fn describe_prints_builtin_form() {
        let output = Command::cargo_bin("intake-wizard")
            .unwrap()
            .arg("describe")
            .output()
            .expect("run describe");
        assert!(output.status.success());
        let spec: Value = serde_json::from_slice(&output.stdout).expect("json");
        assert_eq!(spec["steps"].as_array().map(Vec::len), Some(4));
    }

    #[test]
    fn describe_rejects_malformed_form() -> Result<(), Box<dyn std::error::Error>> {
        let mut file = tempfile::NamedTempFile::new()?;
        write!(
            file,
            r#"{{"id":"broken","title":"Broken","version":"1","steps":[]}}"#
        )?;

        let output = Command::cargo_bin("intake-wizard")?
            .arg("describe")
            .arg("--spec")
            .arg(file.path())
            .output()?;
        assert!(!output.status.success());
        Ok(())
    }

    #[test]
    fn validate_reports_missing_fields() -> Result<(), Box<dyn std::error::Error>> {
        let workspace = assert_fs::TempDir::new()?;
        let answers = workspace.path().join("answers.json");
        fs::write(&answers, r#"{"company":"Acme","painPoints":[]}"#)?;

        let output = Command::cargo_bin("intake-wizard")?
            .arg("validate")
            .arg("--answers")
            .arg(&answers)
            .output()?;
        assert!(!output.status.success());
        let stdout = String::from_utf8(output.stdout)?;
        assert!(stdout.contains("Validation result: invalid"));
        assert!(stdout.contains("painPoints"));
        Ok(())
    }

    #[test]
    fn wizard_requires_endpoint() {
        Command::cargo_bin("intake-wizard")
            .unwrap()
            .arg("wizard")
            .env_remove(ENDPOINT_ENV)
            .assert()
            .failure();
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn wizard_submits_scripted_answers() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(body_json(json!({
                "company": "Acme",
                "industry": "SaaS",
                "currentOutreach": "None",
                "painPoints": "Other",
                "painPoints_other": "slow emails",
                "name": "Jo",
                "email": "jo@x.com",
                "timeline": "As soon as possible"
            })))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&server)
            .await;

        let endpoint = server.uri();
        let stdin = format!("{}\n", HAPPY_PATH.join("\n"));
        let output = tokio::task::spawn_blocking(move || {
            Command::cargo_bin("intake-wizard")
                .unwrap()
                .args(["wizard", "--endpoint", &endpoint])
                .write_stdin(stdin)
                .output()
                .expect("run wizard")
        })
        .await
        .unwrap();

        assert!(output.status.success());
        let stdout = String::from_utf8(output.stdout).unwrap();
        assert!(stdout.contains("Prefix with \\ to store"));
        assert!(stdout.contains("Step 4/4: Contact Details"));
        assert!(stdout.contains("Thank You!"));
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn wizard_reports_failed_submission() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(500))
            .expect(1)
            .mount(&server)
            .await;

        let endpoint = server.uri();
        let mut lines = HAPPY_PATH.to_vec();
        lines.push("n");
        let stdin = format!("{}\n", lines.join("\n"));
        let output = tokio::task::spawn_blocking(move || {
            Command::cargo_bin("intake-wizard")
                .unwrap()
                .args(["wizard", "--endpoint", &endpoint])
                .write_stdin(stdin)
                .output()
                .expect("run wizard")
        })
        .await
        .unwrap();

        assert!(!output.status.success());
        let stdout = String::from_utf8(output.stdout).unwrap();
        assert!(stdout.contains("Something went wrong"));
        assert!(stdout.contains("Try Again? (y/n)"));
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn wizard_blocks_until_required_field_is_filled() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200))
            .mount(&server)
            .await;

        let endpoint = server.uri();
        let mut lines = vec!["", "", "1"];
        lines.extend(HAPPY_PATH);
        let stdin = format!("{}\n", lines.join("\n"));
        let output = tokio::task::spawn_blocking(move || {
            Command::cargo_bin("intake-wizard")
                .unwrap()
                .args(["wizard", "--endpoint", &endpoint])
                .write_stdin(stdin)
                .output()
                .expect("run wizard")
        })
        .await
        .unwrap();

        assert!(output.status.success());
        let stderr = String::from_utf8(output.stderr).unwrap();
        assert!(stderr.contains("Please complete the required fields: Company Name"));
    }
}
