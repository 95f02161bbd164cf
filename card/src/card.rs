use crate::dom::{Element, ShadowRoot, ShadowRootMode};
use crate::style::STYLE;
use std::fmt;

/// Tag name the card is registered under.
pub const TAG_NAME: &str = "recipe-card";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CardState {
    /// Constructed, no record bound yet.
    Empty,
    /// A record has been expanded into the article.
    Bound,
}

/// A single recipe card.
///
/// Construction builds the shadow root with the stylesheet and an empty `<article>`; records are
/// bound with [`RecipeCard::set_data`].
#[derive(Clone, Debug, PartialEq)]
pub struct RecipeCard {
    pub(crate) shadow_root: ShadowRoot,
    pub(crate) state: CardState,
}

impl RecipeCard {
    pub fn new() -> Self {
        let mut shadow_root = ShadowRoot::new(ShadowRootMode::Open);
        shadow_root.append_child(Element::new("style").with_text(STYLE));
        shadow_root.append_child(Element::new("article"));

        Self {
            shadow_root,
            state: CardState::Empty,
        }
    }

    pub fn shadow_root(&self) -> &ShadowRoot {
        &self.shadow_root
    }

    pub fn state(&self) -> CardState {
        self.state
    }

    /// The container records are rendered into.
    pub fn article(&self) -> Option<&Element> {
        self.shadow_root.query_selector("article")
    }
}

impl Default for RecipeCard {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for RecipeCard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}>{}</{}>", TAG_NAME, self.shadow_root, TAG_NAME)
    }
}
