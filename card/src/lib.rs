//! Recipe card component.
//!
//! A [`RecipeCard`] owns an open [`dom::ShadowRoot`] holding its stylesheet and an `<article>`
//! container. Binding a [`RecipeCardData`] record expands it into a fixed markup template inside
//! that container. Cards serialize to HTML using a declarative shadow root, so the browser keeps
//! the card's styles and the host document's styles apart.

mod binder;
mod card;
pub mod dom;
pub mod page;
mod registry;
pub mod style;

pub use binder::{expand, rating_icon_source, RATING_ICON_DIR};
pub use card::{CardState, RecipeCard, TAG_NAME};
pub use models::{Field, RecipeCardData};
pub use registry::{is_valid_name, Constructor, CustomElement, Registry};

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("`{0}` is not a valid custom element name")]
    InvalidName(String),
    #[error("`{0}` has already been defined")]
    AlreadyDefined(String),
    #[error("`{0}` is not a defined custom element")]
    Undefined(String),
    #[error("Unknown property `{0}`")]
    UnknownProperty(String),
    #[error("Malformed data record: {0}")]
    Data(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
