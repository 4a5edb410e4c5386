//! State of the post form: the four input fields and the generated result.

use std::fmt;

use crate::clipboard::Clipboard;
use crate::clock::Clock;
use crate::error::FormError;
use crate::front_matter::{self, FormPayload};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Field {
    Title,
    Excerpt,
    ImageUrl,
    Author,
}

impl Field {
    pub const ALL: [Field; 4] = [Field::Title, Field::Excerpt, Field::ImageUrl, Field::Author];

    /// Label shown next to the input, and in validation messages.
    pub fn label(&self) -> &'static str {
        match self {
            Field::Title => "Title",
            Field::Excerpt => "Excerpt",
            Field::ImageUrl => "Image",
            Field::Author => "Author",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Default, Clone)]
pub struct FormState {
    title: Option<String>,
    excerpt: Option<String>,
    image_url: Option<String>,
    author: Option<String>,
    /// Author restored on reset
    default_author: Option<String>,
    result: String,
    /// Set once the result has been copied to the clipboard
    copied: bool,
}

impl FormState {
    pub fn new() -> FormState {
        FormState::default()
    }

    /// A form with an author already selected.
    pub fn with_default_author(key: impl Into<String>) -> FormState {
        let key = key.into();
        FormState {
            author: Some(key.clone()),
            default_author: Some(key),
            ..FormState::default()
        }
    }

    /// Sets a field value. Values are trimmed, and a blank value clears the field.
    pub fn set(&mut self, field: Field, value: impl AsRef<str>) -> &mut Self {
        let value = value.as_ref().trim();
        let value = (!value.is_empty()).then(|| value.to_string());
        *self.slot(field) = value;
        self
    }

    pub fn get(&self, field: Field) -> Option<&str> {
        match field {
            Field::Title => self.title.as_deref(),
            Field::Excerpt => self.excerpt.as_deref(),
            Field::ImageUrl => self.image_url.as_deref(),
            Field::Author => self.author.as_deref(),
        }
    }

    fn slot(&mut self, field: Field) -> &mut Option<String> {
        match field {
            Field::Title => &mut self.title,
            Field::Excerpt => &mut self.excerpt,
            Field::ImageUrl => &mut self.image_url,
            Field::Author => &mut self.author,
        }
    }

    /// Checks that all fields are filled in. All missing fields are reported at once.
    pub fn validate(&self) -> Result<FormPayload, FormError> {
        let missing = Field::ALL
            .into_iter()
            .filter(|field| self.get(*field).is_none())
            .collect::<Vec<_>>();

        if !missing.is_empty() {
            return Err(FormError::MissingFields(missing));
        }

        let value = |field| self.get(field).unwrap_or_default().to_string();
        Ok(FormPayload {
            title: value(Field::Title),
            excerpt: value(Field::Excerpt),
            image_url: value(Field::ImageUrl),
            author_key: value(Field::Author),
        })
    }

    /// Validates the form and generates its front matter, which becomes the displayed result.
    /// On error, nothing is generated and the previous result is kept.
    pub fn submit(&mut self, clock: &impl Clock) -> anyhow::Result<&str> {
        let payload = self.validate()?;
        self.result = front_matter::generate(&payload, clock)?;
        self.copied = false;
        Ok(&self.result)
    }

    /// The last generated front matter, or an empty string.
    pub fn result(&self) -> &str {
        &self.result
    }

    /// Copies the current result to the clipboard.
    pub fn copy(&mut self, clipboard: &mut impl Clipboard) -> anyhow::Result<()> {
        clipboard.set_text(&self.result)?;
        self.copied = true;
        tracing::info!(copied = self.copied, "Copied front matter to the clipboard");
        Ok(())
    }

    pub fn is_copied(&self) -> bool {
        self.copied
    }

    /// Clears all fields (restoring the default author, if any), the result and the copied flag.
    pub fn reset(&mut self) {
        let default_author = self.default_author.take();
        *self = FormState {
            author: default_author.clone(),
            default_author,
            ..FormState::default()
        };
    }
}
