use crate::card::{RecipeCard, TAG_NAME};
use crate::dom::ShadowRoot;
use crate::{Error, Result};
use log::info;
use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt;

/// Names the HTML standard reserves even though they contain a hyphen.
const RESERVED_NAMES: &[&str] = &[
    "annotation-xml",
    "color-profile",
    "font-face",
    "font-face-src",
    "font-face-uri",
    "font-face-format",
    "font-face-name",
    "missing-glyph",
];

/// An element created through a [`Registry`].
pub trait CustomElement: fmt::Display + fmt::Debug {
    fn shadow_root(&self) -> &ShadowRoot;

    /// Assign a property the way a host script would.
    fn set_property(&mut self, name: &str, value: &Value) -> Result<()>;
}

impl CustomElement for RecipeCard {
    fn shadow_root(&self) -> &ShadowRoot {
        RecipeCard::shadow_root(self)
    }

    fn set_property(&mut self, name: &str, value: &Value) -> Result<()> {
        match name {
            "data" => self.set_data_value(value),
            _ => Err(Error::UnknownProperty(name.to_owned())),
        }
    }
}

/// Zero-argument constructor of a custom element.
pub type Constructor = fn() -> Box<dyn CustomElement>;

fn new_recipe_card() -> Box<dyn CustomElement> {
    Box::new(RecipeCard::new())
}

/// Check `name` against the custom element naming rules.
pub fn is_valid_name(name: &str) -> bool {
    let starts_lowercase = name
        .chars()
        .next()
        .map_or(false, |c| c.is_ascii_lowercase());

    let allowed = |c: char| {
        c.is_ascii_lowercase()
            || c.is_ascii_digit()
            || matches!(c, '-' | '.' | '_')
            || !c.is_ascii()
    };

    starts_lowercase
        && name.contains('-')
        && name.chars().all(allowed)
        && !RESERVED_NAMES.contains(&name)
}

/// Custom element definitions, keyed by tag name.
#[derive(Default)]
pub struct Registry {
    definitions: BTreeMap<String, Constructor>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with the recipe card defined under [`TAG_NAME`].
    pub fn with_recipe_card() -> Result<Self> {
        let mut registry = Self::new();
        registry.define(TAG_NAME, new_recipe_card)?;
        Ok(registry)
    }

    pub fn define(&mut self, name: &str, constructor: Constructor) -> Result<()> {
        if !is_valid_name(name) {
            return Err(Error::InvalidName(name.to_owned()));
        }

        if self.definitions.contains_key(name) {
            return Err(Error::AlreadyDefined(name.to_owned()));
        }

        info!("defined custom element `{}`", name);
        self.definitions.insert(name.to_owned(), constructor);
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<Constructor> {
        self.definitions.get(name).copied()
    }

    pub fn is_defined(&self, name: &str) -> bool {
        self.definitions.contains_key(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.definitions.keys().map(String::as_str)
    }

    pub fn create_element(&self, name: &str) -> Result<Box<dyn CustomElement>> {
        self.get(name)
            .map(|constructor| constructor())
            .ok_or_else(|| Error::Undefined(name.to_owned()))
    }
}

impl fmt::Debug for Registry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.definitions.keys()).finish()
    }
}
