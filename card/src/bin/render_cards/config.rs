use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

const DEFAULT_CONFIG_PATH: &str = "recipe-card.toml";
const DEFAULT_TITLE: &str = "Recipes";

/// Rendering configuration.
#[derive(Debug)]
pub struct Config {
    /// Title of the generated document. By default this is "Recipes".
    pub title: String,
    /// Wrap cards in a complete HTML document.
    pub document: bool,
}

#[derive(Deserialize)]
struct Serialized {
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    document: Option<bool>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_owned(),
            document: false,
        }
    }
}

impl Config {
    /// Read from `path`, or recipe-card.toml if it exists, or return some defaults.
    pub fn new(path: Option<&Path>) -> Result<Self> {
        let path = match path {
            Some(path) => path.to_owned(),
            None => PathBuf::from(DEFAULT_CONFIG_PATH),
        };

        if path.exists() && path.is_file() {
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("reading {}", path.display()))?;

            Self::from_toml(&content).with_context(|| format!("parsing {}", path.display()))
        } else {
            Ok(Self::default())
        }
    }

    fn from_toml(content: &str) -> Result<Self> {
        let config: Serialized = toml::from_str(content)?;

        Ok(Self {
            title: config.title.unwrap_or_else(|| DEFAULT_TITLE.to_owned()),
            document: config.document.unwrap_or(false),
        })
    }
}
