use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};
use std::fmt;

/// A single value of a recipe card record.
///
/// Records come from hosts that do not validate their data, so any JSON value is accepted and
/// rendered the way a browser would stringify it.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum Field {
    /// `null` or a missing key. Renders as empty text.
    #[default]
    Empty,
    Text(String),
    Number(Number),
    Bool(bool),
    /// Arrays and objects. Arrays join their items with `,`, objects print `[object Object]`.
    Other(Value),
}

impl Field {
    pub fn is_empty(&self) -> bool {
        matches!(self, Field::Empty)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Field::Empty => Ok(()),
            Field::Text(text) => f.write_str(text),
            Field::Number(number) => fmt_number(number, f),
            Field::Bool(value) => write!(f, "{}", value),
            Field::Other(value) => fmt_value(value, f),
        }
    }
}

/// Integral floats print without a fraction, `4.0` becomes `4`.
fn fmt_number(number: &Number, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match number.as_f64() {
        Some(value) if number.is_f64() && value == 0.0 => f.write_str("0"),
        Some(value) if number.is_f64() && value.fract() == 0.0 && value.abs() < 1e21 => {
            write!(f, "{:.0}", value)
        }
        _ => write!(f, "{}", number),
    }
}

fn fmt_value(value: &Value, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match value {
        Value::Null => Ok(()),
        Value::Bool(value) => write!(f, "{}", value),
        Value::Number(number) => fmt_number(number, f),
        Value::String(text) => f.write_str(text),
        Value::Array(items) => {
            for (index, item) in items.iter().enumerate() {
                if index > 0 {
                    f.write_str(",")?;
                }
                fmt_value(item, f)?;
            }
            Ok(())
        }
        Value::Object(_) => f.write_str("[object Object]"),
    }
}

impl From<&str> for Field {
    fn from(text: &str) -> Self {
        Field::Text(text.to_owned())
    }
}

impl From<String> for Field {
    fn from(text: String) -> Self {
        Field::Text(text)
    }
}

impl From<i64> for Field {
    fn from(value: i64) -> Self {
        Field::Number(value.into())
    }
}

impl From<u32> for Field {
    fn from(value: u32) -> Self {
        Field::Number(value.into())
    }
}

impl From<f64> for Field {
    fn from(value: f64) -> Self {
        match Number::from_f64(value) {
            Some(number) => Field::Number(number),
            None => Field::Text(value.to_string()),
        }
    }
}

impl From<bool> for Field {
    fn from(value: bool) -> Self {
        Field::Bool(value)
    }
}

/// Data shown by a single recipe card.
///
/// Keys follow the JSON layout hosts already produce (`imgSrc`, `titleLnk`, ...); the long
/// names are accepted as aliases.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
pub struct RecipeCardData {
    #[serde(default, rename = "imgSrc", alias = "imageSource")]
    pub image_source: Field,
    #[serde(default, rename = "imgAlt", alias = "imageAlt")]
    pub image_alt: Field,
    #[serde(default, rename = "titleLnk", alias = "titleLink")]
    pub title_link: Field,
    #[serde(default, rename = "titleTxt", alias = "titleText")]
    pub title_text: Field,
    #[serde(default)]
    pub organization: Field,
    /// Expected to be between 0 and 5, also selects the star icon.
    #[serde(default)]
    pub rating: Field,
    #[serde(default, rename = "numRatings")]
    pub num_ratings: Field,
    /// Shown as is with a ` min` suffix.
    #[serde(default, rename = "lengthTime", alias = "durationMinutes")]
    pub duration_minutes: Field,
    #[serde(default)]
    pub ingredients: Field,
}

impl RecipeCardData {
    /// Interpret a value handed over by a host.
    ///
    /// Falsy values (`null`, `false`, `0`, `""`) mean "no record" and return `None`. Objects are
    /// parsed leniently, any other value yields a record without fields.
    pub fn from_value(value: &Value) -> Result<Option<Self>, serde_json::Error> {
        if is_falsy(value) {
            return Ok(None);
        }

        match value {
            Value::Object(_) => Self::deserialize(value).map(Some),
            _ => Ok(Some(Self::default())),
        }
    }
}

fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(value) => !value,
        Value::Number(number) => number.as_f64() == Some(0.0),
        Value::String(text) => text.is_empty(),
        Value::Array(_) | Value::Object(_) => false,
    }
}
