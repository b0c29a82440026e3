pub mod field;
pub mod form;
pub mod step;

pub use field::{FieldKind, FieldSpec, OTHER_OPTION, other_key};
pub use form::{FormPresentation, FormSpec, SpecError};
pub use step::StepSpec;
