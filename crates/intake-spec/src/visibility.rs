use crate::answers::AnswerSet;
use crate::spec::field::{FieldSpec, OTHER_OPTION};
use crate::spec::form::FormSpec;

/// Auxiliary input key to visibility.
pub type VisibilityMap = std::collections::BTreeMap<String, bool>;

/// Whether the auxiliary "Other" input of `field` is currently shown.
pub fn other_visible(field: &FieldSpec, answers: &AnswerSet) -> bool {
    field.offers_other()
        && answers
            .choices(&field.name)
            .iter()
            .any(|choice| choice == OTHER_OPTION)
}

/// Resolves every auxiliary input of the form against the current answers.
pub fn resolve_visibility(spec: &FormSpec, answers: &AnswerSet) -> VisibilityMap {
    spec.fields()
        .filter_map(|field| {
            field
                .other_key()
                .map(|key| (key, other_visible(field, answers)))
        })
        .collect()
}
