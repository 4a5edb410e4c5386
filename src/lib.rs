#[macro_use]
extern crate serde_derive;

pub mod authors;
pub mod clipboard;
pub mod clock;
pub mod config;
pub mod error;
pub mod form;
pub mod front_matter;

pub use error::FormError;
pub use front_matter::{generate, slug, FormPayload, FrontMatter};
