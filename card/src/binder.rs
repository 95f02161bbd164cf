use crate::card::{CardState, RecipeCard};
use crate::dom::{Element, Node};
use crate::Result;
use log::{debug, error};
use models::{Field, RecipeCardData};
use serde_json::Value;

/// Directory hosts must serve `<rating>-star.svg` icons from.
pub const RATING_ICON_DIR: &str = "./assets/images/icons/";

/// Icon shown next to the rating, e.g. `./assets/images/icons/4-star.svg`.
pub fn rating_icon_source(rating: &Field) -> String {
    format!("{}{}-star.svg", RATING_ICON_DIR, rating)
}

/// Expand `data` into the card's markup, in display order.
///
/// Every element is always present; empty fields become empty text.
pub fn expand(data: &RecipeCardData) -> Vec<Node> {
    let image = Element::new("img")
        .with_attribute("src", data.image_source.to_string())
        .with_attribute("alt", data.image_alt.to_string());

    let title = Element::new("p").with_attribute("class", "title").with_child(
        Element::new("a")
            .with_attribute("href", data.title_link.to_string())
            .with_text(data.title_text.to_string()),
    );

    let organization = Element::new("p")
        .with_attribute("class", "organization")
        .with_text(data.organization.to_string());

    let rating = Element::new("div")
        .with_attribute("class", "rating")
        .with_child(Element::new("span").with_text(data.rating.to_string()))
        .with_child(
            Element::new("img")
                .with_attribute("src", rating_icon_source(&data.rating))
                .with_attribute("alt", format!("{} stars", data.rating)),
        )
        .with_child(Element::new("span").with_text(format!("({})", data.num_ratings)));

    let duration = Element::new("time").with_text(format!("{} min", data.duration_minutes));

    let ingredients = Element::new("p")
        .with_attribute("class", "ingredients")
        .with_text(data.ingredients.to_string());

    vec![
        image.into(),
        title.into(),
        organization.into(),
        rating.into(),
        duration.into(),
        ingredients.into(),
    ]
}

impl RecipeCard {
    /// Bind a record, replacing whatever a previous record rendered.
    ///
    /// `None` leaves the card untouched, including stale markup from an earlier record.
    pub fn set_data(&mut self, data: Option<&RecipeCardData>) {
        let data = match data {
            Some(data) => data,
            None => return,
        };

        let article = match self.shadow_root.query_selector_mut("article") {
            Some(article) => article,
            None => {
                error!("recipe card shadow root has no article");
                return;
            }
        };

        debug!("binding recipe card `{}`", data.title_text);
        article.replace_children(expand(data));
        self.state = CardState::Bound;
    }

    /// Bind a record handed over as JSON. Falsy values are ignored.
    pub fn set_data_value(&mut self, value: &Value) -> Result<()> {
        let data = RecipeCardData::from_value(value)?;
        self.set_data(data.as_ref());
        Ok(())
    }
}
