use itertools::Itertools;

use crate::form::Field;

/// Errors that prevent a front matter block from being generated.
///
/// Other failures (config files, serialization) are reported with `anyhow` and context.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum FormError {
    #[error("{}", required_messages(.0))]
    MissingFields(Vec<Field>),

    #[error("Unknown author '{key}' (expecting one of {})", .known.join(", "))]
    UnknownAuthor { key: String, known: Vec<&'static str> },

    #[error("Cannot derive a slug from title '{title}': it has no letter or digit")]
    EmptySlug { title: String },
}

/// The fields reported by `err` if it is a `FormError::MissingFields`.
pub fn missing_fields(err: &anyhow::Error) -> Option<&[Field]> {
    match err.downcast_ref::<FormError>() {
        Some(FormError::MissingFields(fields)) => Some(fields.as_slice()),
        _ => None,
    }
}

fn required_messages(fields: &[Field]) -> String {
    fields.iter()
        .map(|field| format!("{} is required", field.label()))
        .join("\n")
}
