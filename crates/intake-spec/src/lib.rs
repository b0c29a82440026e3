#![allow(missing_docs)]

pub mod answers;
pub mod answers_schema;
pub mod payload;
pub mod render;
pub mod spec;
pub mod validate;
pub mod visibility;
pub mod wizard;

pub use answers::{AnswerSet, AnswerValue, ErrorSet};
pub use answers_schema::generate as answers_schema;
pub use payload::{SubmissionPayload, flatten};
pub use render::{
    IndicatorState, RenderField, RenderPayload, build_render_payload, render_card, render_json_ui,
    render_text,
};
pub use spec::{FieldKind, FieldSpec, FormSpec, OTHER_OPTION, SpecError, StepSpec};
pub use validate::{StepValidation, ValidationError, ValidationResult, validate, validate_step};
pub use visibility::{VisibilityMap, other_visible, resolve_visibility};
pub use wizard::{
    Advance, SubmissionOutcome, Wizard, WizardError, WizardProgress, WizardStatus,
};
